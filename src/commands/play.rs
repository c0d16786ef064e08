//! Interactive console game
//!
//! Reads one guess per line and reports correct/close counts until the code
//! is cracked, the player quits, or input runs out.

use crate::core::Game;
use crate::output::formatters::feedback_pegs;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// How an interactive game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The code was cracked after this many accepted guesses
    Solved { guesses: usize },
    /// The player typed `quit`
    Quit,
    /// Input ended before the code was cracked
    EndOfInput,
}

/// Run the interactive game loop
///
/// A line that is a playable guess (right length, pool symbols only) is always
/// scored as-is, so pools containing spaces or letters like `q` stay winnable.
/// Only otherwise is the line trimmed and checked for a command:
/// - `quit` / `q`: stop playing
/// - `restart`: forget all guesses (the secret stays the same)
/// - `history`: list the guesses so far
///
/// Anything else is submitted as a guess; invalid guesses are reported and the
/// loop keeps going.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    output: &mut W,
) -> Result<PlayOutcome> {
    writeln!(
        output,
        "Pool: {}. Code Length: {}",
        game.pool().to_string().bright_cyan(),
        game.length()
    )?;
    writeln!(
        output,
        "Commands: 'quit' to exit, 'restart' to clear guesses, 'history' to review"
    )?;

    for line in input.lines() {
        let line = line.context("Unable to read input")?;
        let raw = line.trim_end_matches('\r');
        let text = if is_playable(game, raw) {
            raw
        } else {
            raw.trim()
        };

        if !is_playable(game, text) {
            match text {
                "quit" | "q" => {
                    writeln!(output, "The secret code was {}.", game.code())?;
                    return Ok(PlayOutcome::Quit);
                }
                "restart" => {
                    game.restart();
                    writeln!(output, "Guesses cleared. Same code, fresh start.")?;
                    continue;
                }
                "history" => {
                    write_history(game, output)?;
                    continue;
                }
                _ => {}
            }
        }

        match game.guess(text) {
            Ok(guess) if game.is_solved_by(&guess) => {
                writeln!(
                    output,
                    "{}",
                    format!("Congratulations! The secret code was {}.", game.code())
                        .bright_green()
                        .bold()
                )?;
                writeln!(output, "Solved in {} guesses.", game.guess_count())?;
                return Ok(PlayOutcome::Solved {
                    guesses: game.guess_count(),
                });
            }
            Ok(guess) => {
                writeln!(
                    output,
                    "Correct: {}. Close: {}. {}",
                    guess.exact(),
                    guess.partial(),
                    feedback_pegs(guess.score(), game.length())
                )?;
            }
            Err(e) => writeln!(output, "{}", e.to_string().red())?,
        }
    }

    Ok(PlayOutcome::EndOfInput)
}

/// Check whether `text` would pass the session's guess validation
fn is_playable(game: &Game, text: &str) -> bool {
    text.chars().count() == game.length() && game.pool().first_foreign(text).is_none()
}

fn write_history<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    if game.guesses().is_empty() {
        writeln!(output, "No guesses yet.")?;
        return Ok(());
    }
    for (i, guess) in game.guesses().iter().enumerate() {
        writeln!(
            output,
            "  {:>2}. {} {}",
            i + 1,
            guess.text(),
            feedback_pegs(guess.score(), game.length())
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Pool};
    use std::io::Cursor;

    fn play(script: &str) -> (PlayOutcome, String, Game) {
        play_with(Pool::default(), "ROYG", script)
    }

    fn play_with(pool: Pool, secret: &str, script: &str) -> (PlayOutcome, String, Game) {
        let mut game = Game::with_code(pool, Code::new(secret)).unwrap();
        let mut output = Vec::new();
        let outcome = run_play(&mut game, Cursor::new(script), &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap(), game)
    }

    #[test]
    fn play_until_solved() {
        let (outcome, output, game) = play("RRRR\nGYOR\nROYG\nBBBB\n");

        assert_eq!(outcome, PlayOutcome::Solved { guesses: 3 });
        assert!(output.contains("Correct: 1. Close: 0."));
        assert!(output.contains("Correct: 0. Close: 4."));
        assert!(output.contains("Congratulations! The secret code was ROYG."));
        // Input after the win is never read
        assert_eq!(game.guess_count(), 3);
    }

    #[test]
    fn play_reports_invalid_guesses_and_continues() {
        let (outcome, output, game) = play("RO\nROYX\n  ROYG  \n");

        assert_eq!(outcome, PlayOutcome::Solved { guesses: 1 });
        assert!(output.contains("Invalid guess length: required=4; provided=2"));
        assert!(output.contains(
            "Guess includes invalid characters: required=ROYGBIV; provided=ROYX"
        ));
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn play_quit_reveals_code() {
        let (outcome, output, _) = play("RRRR\nquit\nROYG\n");

        assert_eq!(outcome, PlayOutcome::Quit);
        assert!(output.contains("The secret code was ROYG."));
    }

    #[test]
    fn play_restart_clears_history() {
        let (outcome, output, game) = play("RRRR\nOOOO\nrestart\nhistory\n");

        assert_eq!(outcome, PlayOutcome::EndOfInput);
        assert!(output.contains("Guesses cleared."));
        assert!(output.contains("No guesses yet."));
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn play_history_lists_guesses() {
        let (_, output, _) = play("RRRR\nGYOR\nhistory\n");

        assert!(output.contains(" 1. RRRR"));
        assert!(output.contains(" 2. GYOR"));
    }

    #[test]
    fn play_end_of_input() {
        let (outcome, _, game) = play("");
        assert_eq!(outcome, PlayOutcome::EndOfInput);
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn play_guess_wins_over_command_word() {
        let (outcome, _, game) = play_with(Pool::new("qx").unwrap(), "q", "q\n");
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 1 });
        assert_eq!(game.guess_count(), 1);

        let pool = Pool::new("quit").unwrap();
        let (outcome, output, _) = play_with(pool, "tiuq", "quit\ntiuq\n");
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 2 });
        assert!(output.contains("Correct: 0. Close: 4."));
    }

    #[test]
    fn play_command_when_not_a_guess() {
        // 'q' is outside the pool, so it still quits
        let (outcome, _, game) = play_with(Pool::new("ab").unwrap(), "a", "b\nq\na\n");
        assert_eq!(outcome, PlayOutcome::Quit);
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn play_keeps_whitespace_symbols() {
        let (outcome, output, _) = play_with(Pool::new("R ").unwrap(), "R ", "R \n");
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 1 });
        assert!(!output.contains("Invalid guess length"));
    }

    #[test]
    fn play_strips_carriage_return() {
        let (outcome, _, _) = play("ROYG\r\n");
        assert_eq!(outcome, PlayOutcome::Solved { guesses: 1 });
    }
}
