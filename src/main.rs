//! Codebreaker - CLI
//!
//! Console Mastermind: play against a random code, score a single guess, or
//! simulate many games with the built-in solver.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{SimulationConfig, run_play, run_simulation, score_guess},
    core::{Game, Pool},
    output::{print_score_result, print_simulation_result},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Crack the secret code: correct = right symbol, right place; close = right symbol, wrong place",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Symbols the code is drawn from (distinct, case-sensitive)
    #[arg(short, long, global = true, default_value = Pool::DEFAULT_SYMBOLS)]
    pool: String,

    /// Number of symbols in the code
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Seed for the random number generator (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Score a guess against a known secret
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Play many games with the solver and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Give up on a game after this many guesses
        #[arg(short, long, default_value = "10")]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let pool = Pool::new(&cli.pool).context("Invalid --pool")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(pool, cli.length, cli.seed),
        Commands::Score { secret, guess } => {
            let guess = score_guess(&pool, &secret, &guess)?;
            print_score_result(&guess, secret.chars().count());
            Ok(())
        }
        Commands::Simulate { games, max_guesses } => {
            let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
            println!("Simulating {games} games (seed {seed})...");

            let mut config = SimulationConfig::new(pool, cli.length, seed);
            config.games = games;
            config.max_guesses = max_guesses;

            let result = run_simulation(&config)?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(pool: Pool, length: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::new(pool, length, &mut rng).context("Invalid --length")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(&mut game, stdin.lock(), &mut stdout)?;
    Ok(())
}
