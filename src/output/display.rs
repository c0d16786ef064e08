//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_pegs};
use crate::commands::SimulationResult;
use crate::core::Guess;
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(guess: &Guess, length: usize) {
    println!("{guess}");
    println!(
        "  {} {}",
        feedback_pegs(guess.score(), length).bright_white(),
        if guess.exact() == length {
            "cracked!".green().bold()
        } else {
            format!("{} correct, {} close", guess.exact(), guess.partial()).normal()
        }
    );
}

/// Print the statistics of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed).red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.guess_distribution {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
