//! Consistent-candidate solver
//!
//! Keeps the full code space and, on each turn, guesses a random code that
//! would have produced every score seen so far.

use crate::core::{Code, Guess, Pool, Score};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Largest code space the solver will enumerate
pub const MAX_CANDIDATES: usize = 1_000_000;

/// Error type for solver construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    TooManyCandidates { pool_size: usize, length: usize },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyCandidates { pool_size, length } => write!(
                f,
                "Code space {pool_size}^{length} exceeds {MAX_CANDIDATES} candidates"
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Random guesser restricted to codes consistent with the history
pub struct Solver {
    candidates: Vec<Code>,
}

impl Solver {
    /// Enumerate every code of `length` symbols over `pool`
    ///
    /// # Errors
    /// Returns `SolverError::TooManyCandidates` if `pool.len()^length`
    /// exceeds `MAX_CANDIDATES`.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Pool;
    /// use codebreaker::solver::Solver;
    ///
    /// let solver = Solver::new(&Pool::default(), 4).unwrap();
    /// assert_eq!(solver.count_candidates(&[]), 2401);
    /// ```
    pub fn new(pool: &Pool, length: usize) -> Result<Self, SolverError> {
        let too_many = SolverError::TooManyCandidates {
            pool_size: pool.len(),
            length,
        };
        let exponent = u32::try_from(length).map_err(|_| too_many.clone())?;
        let total = pool
            .len()
            .checked_pow(exponent)
            .filter(|&n| n <= MAX_CANDIDATES)
            .ok_or(too_many)?;

        let mut candidates = Vec::with_capacity(total);
        let mut digits = vec![0usize; length];
        for _ in 0..total {
            let symbols: String = digits.iter().map(|&d| pool.symbol_at(d)).collect();
            candidates.push(Code::new(&symbols));

            // Odometer increment, last position fastest
            for digit in digits.iter_mut().rev() {
                *digit += 1;
                if *digit < pool.len() {
                    break;
                }
                *digit = 0;
            }
        }

        Ok(Self { candidates })
    }

    /// Pick a random code consistent with every scored guess in `history`
    ///
    /// Returns `None` if no code is consistent (the history cannot come from a
    /// code over this pool and length).
    pub fn next_guess<R: Rng + ?Sized>(
        &self,
        history: &[Guess],
        rng: &mut R,
    ) -> Option<&Code> {
        self.filter_candidates(history).choose(rng).copied()
    }

    /// Count how many codes remain consistent with the history
    #[must_use]
    pub fn count_candidates(&self, history: &[Guess]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Codes that would reproduce every observed score
    fn filter_candidates(&self, history: &[Guess]) -> Vec<&Code> {
        let observed: Vec<(Vec<char>, Score)> = history
            .iter()
            .map(|guess| (guess.text().chars().collect(), guess.score()))
            .collect();

        self.candidates
            .iter()
            .filter(|candidate| {
                observed.iter().all(|(symbols, score)| {
                    Score::calculate(candidate.symbols(), symbols) == *score
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn enumerates_full_code_space() {
        let pool = Pool::new("AB").unwrap();
        let solver = Solver::new(&pool, 3).unwrap();
        let texts: Vec<String> = solver.candidates.iter().map(ToString::to_string).collect();
        assert_eq!(
            texts,
            ["AAA", "AAB", "ABA", "ABB", "BAA", "BAB", "BBA", "BBB"]
        );
    }

    #[test]
    fn rejects_oversized_code_space() {
        assert_eq!(
            Solver::new(&Pool::default(), 10).err(),
            Some(SolverError::TooManyCandidates {
                pool_size: 7,
                length: 10
            })
        );
    }

    #[test]
    fn history_narrows_candidates() {
        let mut game = Game::with_code(Pool::default(), Code::new("ROYG")).unwrap();
        let solver = Solver::new(game.pool(), game.length()).unwrap();

        game.guess("RRRR").unwrap();
        // Exactly one R, in any of four places, no other R: 4 * 6^3
        assert_eq!(solver.count_candidates(game.guesses()), 864);

        game.guess("GYOR").unwrap();
        assert!(solver.count_candidates(game.guesses()) < 864);
    }

    #[test]
    fn guesses_are_consistent_with_history() {
        let mut game = Game::with_code(Pool::default(), Code::new("BIVB")).unwrap();
        let solver = Solver::new(game.pool(), game.length()).unwrap();
        let mut rng = StdRng::seed_from_u64(8);

        game.guess("BBII").unwrap();
        game.guess("VROB").unwrap();

        for _ in 0..20 {
            let candidate = solver.next_guess(game.guesses(), &mut rng).unwrap();
            for guess in game.guesses() {
                let symbols: Vec<char> = guess.text().chars().collect();
                assert_eq!(
                    Score::calculate(candidate.symbols(), &symbols),
                    guess.score()
                );
            }
        }
    }

    #[test]
    fn solves_within_code_space() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = Game::new(Pool::default(), 4, &mut rng).unwrap();
        let solver = Solver::new(game.pool(), game.length()).unwrap();

        let mut solved = false;
        for _ in 0..20 {
            let next = solver.next_guess(game.guesses(), &mut rng).unwrap().to_string();
            let guess = game.guess(&next).unwrap();
            if game.is_solved_by(&guess) {
                solved = true;
                break;
            }
        }
        assert!(solved);
    }

    #[test]
    fn no_candidates_for_impossible_history() {
        let mut game = Game::with_code(Pool::new("AB").unwrap(), Code::new("AB")).unwrap();
        let solver = Solver::new(game.pool(), game.length()).unwrap();
        game.guess("AA").unwrap();
        game.restart();
        game.guess("BB").unwrap();
        assert_eq!(solver.count_candidates(game.guesses()), 2);

        // A history claiming BB scored 2 exact while AB scored 2 exact cannot happen
        let forged = [
            Guess::new("BB", Score::new(2, 0)),
            Guess::new("AB", Score::new(2, 0)),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(solver.next_guess(&forged, &mut rng).is_none());
    }
}
