//! One-off scoring command
//!
//! Scores a single guess against a known secret, applying the same
//! validation a game session does.

use crate::core::{Code, Game, Guess, Pool};
use anyhow::{Context, Result};

/// Score `guess` against `secret` under `pool`
///
/// # Errors
///
/// Returns an error if the secret is empty or uses symbols outside the pool,
/// or if the guess fails session validation.
///
/// # Examples
/// ```
/// use codebreaker::commands::score_guess;
/// use codebreaker::core::Pool;
///
/// let guess = score_guess(&Pool::default(), "ROYG", "ROYB").unwrap();
/// assert_eq!(guess.to_string(), "{text: \"ROYB\", correct: 3, close: 0}");
/// ```
pub fn score_guess(pool: &Pool, secret: &str, guess: &str) -> Result<Guess> {
    let mut game = Game::with_code(pool.clone(), Code::new(secret))
        .with_context(|| format!("Invalid secret code: {secret}"))?;
    let guess = game.guess(guess)?;
    Ok(guess)
}
