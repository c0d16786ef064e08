//! Codebreaker
//!
//! A Mastermind-style code-breaking game: guess a hidden code drawn from a
//! pool of symbols, and get told how many symbols are in the right place
//! (correct) and how many more are in the code but misplaced (close).
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Game, Pool};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let mut game = Game::new(Pool::default(), 4, &mut rng).unwrap();
//!
//! let guess = game.guess("ROYG").unwrap();
//! println!("{guess}");
//! assert!(guess.exact() + guess.partial() <= game.length());
//! ```

// Core domain types
pub mod core;

// Automatic guessing
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
