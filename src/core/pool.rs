//! Symbol pool (the game alphabet)
//!
//! A pool is the ordered set of symbols a secret is drawn from and a guess
//! may use. Order only matters for index-based random draws.

use super::ConfigError;
use rustc_hash::FxHashSet;
use std::fmt;

/// Validated alphabet of distinct symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    symbols: Vec<char>,
}

impl Pool {
    /// The classic rainbow pool: Red, Orange, Yellow, Green, Blue, Indigo, Violet
    pub const DEFAULT_SYMBOLS: &'static str = "ROYGBIV";

    /// Create a pool from a string of symbols
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - The string is empty
    /// - A symbol appears more than once
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Pool;
    ///
    /// let pool = Pool::new("ROYGBIV").unwrap();
    /// assert_eq!(pool.len(), 7);
    /// assert!(pool.contains('G'));
    ///
    /// assert!(Pool::new("").is_err());
    /// assert!(Pool::new("ROR").is_err());
    /// ```
    pub fn new(symbols: &str) -> Result<Self, ConfigError> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.is_empty() {
            return Err(ConfigError::EmptyPool);
        }

        let mut seen = FxHashSet::default();
        for &symbol in &symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
        }

        Ok(Self { symbols })
    }

    /// Get the symbols in draw order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Get the symbol at a draw index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Number of symbols in the pool (always at least 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; a pool cannot be constructed empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether a symbol belongs to the pool
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Return the first symbol of `text` that is not in the pool
    #[must_use]
    pub fn first_foreign(&self, text: &str) -> Option<char> {
        text.chars().find(|&c| !self.contains(c))
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self {
            symbols: Self::DEFAULT_SYMBOLS.chars().collect(),
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
