//! Command implementations

pub mod play;
pub mod score;
pub mod simulate;

pub use play::{PlayOutcome, run_play};
pub use score::score_guess;
pub use simulate::{GameRecord, SimulationConfig, SimulationResult, run_simulation};
