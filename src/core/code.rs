//! Secret code representation and generation
//!
//! A Code is an immutable, fixed-length sequence of pool symbols.

use super::{ConfigError, Pool};
use rand::Rng;
use std::fmt;

/// A secret code (or any fully specified code, e.g. a solver candidate)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: Box<[char]>,
}

impl Code {
    /// Draw a random code of `length` symbols from `pool`
    ///
    /// Symbols are drawn independently and uniformly, with replacement, using
    /// only the supplied `rng`. Seeding the rng makes the result reproducible.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Pool};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let pool = Pool::default();
    /// let a = Code::generate(&pool, 4, &mut StdRng::seed_from_u64(7));
    /// let b = Code::generate(&pool, 4, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 4);
    /// ```
    pub fn generate<R: Rng + ?Sized>(pool: &Pool, length: usize, rng: &mut R) -> Self {
        debug_assert!(length > 0, "Code length must be positive");

        let symbols = (0..length)
            .map(|_| pool.symbol_at(rng.random_range(0..pool.len())))
            .collect();

        Self { symbols }
    }

    /// Build a known code from a string of symbols
    ///
    /// The code is not checked against any pool; `Game::with_code` does that.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            symbols: text.chars().collect(),
        }
    }

    /// Check that this code is usable as a secret for `pool`
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroLength` for an empty code and
    /// `ConfigError::SymbolOutsidePool` for the first symbol the pool lacks.
    pub fn validate(&self, pool: &Pool) -> Result<(), ConfigError> {
        if self.symbols.is_empty() {
            return Err(ConfigError::ZeroLength);
        }
        match self.symbols.iter().find(|&&s| !pool.contains(s)) {
            Some(&symbol) => Err(ConfigError::SymbolOutsidePool(symbol)),
            None => Ok(()),
        }
    }

    /// Get the code as a symbol slice
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols in the code
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the code has no symbols (never true for a validated secret)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
