//! Core domain types for the codebreaker game
//!
//! Scoring, secret generation, and session validation. Nothing in here reads
//! input or prints; the presentation layer lives in `commands` and `output`.

mod code;
mod error;
mod game;
mod guess;
mod pool;
mod score;

pub use code::Code;
pub use error::{ConfigError, GuessError};
pub use game::Game;
pub use guess::Guess;
pub use pool::Pool;
pub use score::Score;
