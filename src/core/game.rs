//! Game session: one secret, its configuration, and the guess history
//!
//! The session validates each guess (length first, then alphabet) before
//! scoring it. History is append-only until `restart`, and is only handed out
//! as a shared slice.

use super::{Code, ConfigError, Guess, GuessError, Pool, Score};
use rand::Rng;
use tracing::{debug, trace};

/// A single-player codebreaker session
///
/// The session never ends on its own: callers detect a win by comparing a
/// guess's `exact()` count with `length()`.
#[derive(Debug, Clone)]
pub struct Game {
    code: Code,
    pool: Pool,
    length: usize,
    guesses: Vec<Guess>,
}

impl Game {
    /// Start a session with a random secret of `length` symbols from `pool`
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroLength` if `length` is 0.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Game, Pool};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut game = Game::new(Pool::default(), 4, &mut StdRng::seed_from_u64(1)).unwrap();
    /// let secret = game.code().to_string();
    /// let guess = game.guess(&secret).unwrap();
    /// assert_eq!(guess.exact(), game.length());
    /// assert_eq!(game.guess_count(), 1);
    /// ```
    pub fn new<R: Rng + ?Sized>(
        pool: Pool,
        length: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }

        let code = Code::generate(&pool, length, rng);
        debug!(pool = %pool, length, "new game");

        Ok(Self {
            code,
            pool,
            length,
            guesses: Vec::new(),
        })
    }

    /// Start a session over a known secret
    ///
    /// # Errors
    /// Returns `ConfigError` if the code is empty or uses symbols outside `pool`.
    pub fn with_code(pool: Pool, code: Code) -> Result<Self, ConfigError> {
        code.validate(&pool)?;
        let length = code.len();
        debug!(pool = %pool, length, "new game with fixed code");

        Ok(Self {
            code,
            pool,
            length,
            guesses: Vec::new(),
        })
    }

    /// Submit a guess
    ///
    /// On success the scored guess is appended to the history and returned.
    /// On failure the history is unchanged.
    ///
    /// # Errors
    /// - `GuessError::InvalidLength` if `text` does not have `length()` symbols
    /// - `GuessError::InvalidCharacters` if `text` has a symbol outside the pool
    pub fn guess(&mut self, text: &str) -> Result<Guess, GuessError> {
        let symbols: Vec<char> = text.chars().collect();

        if symbols.len() != self.length {
            debug!(
                required = self.length,
                provided = symbols.len(),
                "rejected guess: length"
            );
            return Err(GuessError::InvalidLength {
                required: self.length,
                provided: symbols.len(),
            });
        }

        if let Some(symbol) = self.pool.first_foreign(text) {
            debug!(%symbol, "rejected guess: symbol outside pool");
            return Err(GuessError::InvalidCharacters {
                pool: self.pool.to_string(),
                text: text.to_string(),
            });
        }

        let score = Score::calculate(self.code.symbols(), &symbols);
        let guess = Guess::new(text, score);
        self.guesses.push(guess.clone());
        trace!(
            turn = self.guesses.len(),
            exact = score.exact(),
            partial = score.partial(),
            "scored guess"
        );

        Ok(guess)
    }

    /// Clear the guess history, keeping the same secret and configuration
    pub fn restart(&mut self) {
        debug!(discarded = self.guesses.len(), "restart");
        self.guesses.clear();
    }

    /// The secret code
    #[inline]
    #[must_use]
    pub const fn code(&self) -> &Code {
        &self.code
    }

    /// All accepted guesses, in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// The symbols guesses may use
    #[inline]
    #[must_use]
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Code length
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of accepted guesses since creation or the last restart
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// Check whether `guess` cracked this session's code
    #[inline]
    #[must_use]
    pub const fn is_solved_by(&self, guess: &Guess) -> bool {
        guess.score().is_perfect(self.length)
    }
}
