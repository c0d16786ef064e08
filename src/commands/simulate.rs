//! Batch simulation
//!
//! Plays many games with the consistent-candidate solver and collects
//! statistics. Game `i` is seeded with `seed + i`, so a run is reproducible.

use crate::core::{ConfigError, Game, Pool};
use crate::solver::Solver;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
pub struct SimulationConfig {
    pub pool: Pool,
    pub length: usize,
    pub games: usize,
    pub max_guesses: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(pool: Pool, length: usize, seed: u64) -> Self {
        Self {
            pool,
            length,
            games: 100,
            max_guesses: 10,
            seed,
            show_progress: true,
        }
    }
}

/// Result of a single simulated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub secret: String,
    pub guesses: usize,
    pub solved: bool,
}

/// Aggregate statistics of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub total_games: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub duration: Duration,
    pub games_per_second: f64,
    pub records: Vec<GameRecord>,
}

/// Run the simulation described by `config`
///
/// # Errors
///
/// Returns an error if the length is 0 or the code space is too large for
/// the solver to enumerate.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult> {
    if config.length == 0 {
        return Err(ConfigError::ZeroLength.into());
    }
    let solver = Solver::new(&config.pool, config.length)?;

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let record = play_one(config, &solver, config.seed.wrapping_add(i as u64));
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<GameRecord>>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(records, start.elapsed()))
}

/// Play one game: guess consistent candidates until solved or out of turns
///
/// Candidates are built from the game's own pool and length, so a rejected
/// guess means the solver and game disagree and is reported as an error.
fn play_one(config: &SimulationConfig, solver: &Solver, seed: u64) -> Result<GameRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(config.pool.clone(), config.length, &mut rng)?;
    let mut cracked = false;

    while game.guess_count() < config.max_guesses {
        let Some(candidate) = solver.next_guess(game.guesses(), &mut rng) else {
            break;
        };
        let text = candidate.to_string();
        let guess = game
            .guess(&text)
            .with_context(|| format!("Solver produced an unplayable guess: {text}"))?;
        if game.is_solved_by(&guess) {
            cracked = true;
            break;
        }
    }

    Ok(GameRecord {
        secret: game.code().to_string(),
        guesses: game.guess_count(),
        solved: cracked,
    })
}

fn summarize(records: Vec<GameRecord>, duration: Duration) -> SimulationResult {
    let total_games = records.len();
    let solved_counts: Vec<usize> = records
        .iter()
        .filter(|r| r.solved)
        .map(|r| r.guesses)
        .collect();
    let solved = solved_counts.len();

    let mut guess_distribution = BTreeMap::new();
    for &count in &solved_counts {
        *guess_distribution.entry(count).or_insert(0) += 1;
    }

    let average_guesses = if solved > 0 {
        solved_counts.iter().sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };

    SimulationResult {
        total_games,
        solved,
        failed: total_games - solved,
        guess_distribution,
        average_guesses,
        min_guesses: solved_counts.iter().copied().min().unwrap_or(0),
        max_guesses: solved_counts.iter().copied().max().unwrap_or(0),
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        records,
    }
}
