//! Automatic code breaking
//!
//! Used by the `simulate` command to play games without a human.

mod engine;

pub use engine::{MAX_CANDIDATES, Solver, SolverError};
