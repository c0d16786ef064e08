//! Guess scoring: exact and close matches
//!
//! A score counts:
//! - exact: positions where guess and secret hold the same symbol
//! - partial: remaining guess symbols that pair with an unmatched secret
//!   symbol of the same value, anywhere in the code
//!
//! Duplicates are credited at most as often as they remain unmatched on both
//! sides, so guessing `RRRR` against `ROYG` scores one exact and no partial.

use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for one guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    exact: usize,
    partial: usize,
}

impl Score {
    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Score `guess` against `secret`
    ///
    /// Neither input is modified; the computation works on its own tally.
    /// Both slices must have the same length.
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches, tally every unmatched secret symbol
    /// 2. Second pass: each unmatched guess symbol consumes one tallied secret
    ///    symbol of the same value, if any remain
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Score;
    ///
    /// let secret: Vec<char> = "ROYG".chars().collect();
    /// let guess: Vec<char> = "GYOR".chars().collect();
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(0, 4));
    ///
    /// let guess: Vec<char> = "RRRR".chars().collect();
    /// assert_eq!(Score::calculate(&secret, &guess), Score::new(1, 0));
    /// ```
    #[must_use]
    pub fn calculate(secret: &[char], guess: &[char]) -> Self {
        debug_assert_eq!(
            secret.len(),
            guess.len(),
            "Secret and guess must have equal length"
        );

        let mut exact = 0;
        let mut secret_available: FxHashMap<char, usize> = FxHashMap::default();
        let mut guess_unmatched: Vec<char> = Vec::with_capacity(guess.len());

        // First pass: exact matches consume both positions
        for (&s, &g) in secret.iter().zip(guess) {
            if s == g {
                exact += 1;
            } else {
                *secret_available.entry(s).or_insert(0) += 1;
                guess_unmatched.push(g);
            }
        }

        // Second pass: pair leftovers by value
        let mut partial = 0;
        for symbol in guess_unmatched {
            if let Some(count) = secret_available.get_mut(&symbol)
                && *count > 0
            {
                partial += 1;
                *count -= 1;
            }
        }

        Self { exact, partial }
    }

    /// Symbols in the right place
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Symbols present in the secret but misplaced
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Check if every one of `length` positions matched exactly
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.exact == length
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "correct: {}, close: {}", self.exact, self.partial)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Secret and guess of equal length over a small alphabet, so duplicates are common
    fn secret_and_guess() -> impl Strategy<Value = (Vec<char>, Vec<char>)> {
        (1usize..=8).prop_flat_map(|len| {
            let symbol = prop::sample::select(vec!['A', 'B', 'C', 'D']);
            (
                prop::collection::vec(symbol.clone(), len),
                prop::collection::vec(symbol, len),
            )
        })
    }

    /// Reference count: per symbol, min of occurrences, minus exact matches
    fn reference(secret: &[char], guess: &[char]) -> Score {
        let exact = secret.iter().zip(guess).filter(|(s, g)| s == g).count();
        let common: usize = ['A', 'B', 'C', 'D']
            .iter()
            .map(|c| {
                let in_secret = secret.iter().filter(|s| *s == c).count();
                let in_guess = guess.iter().filter(|g| *g == c).count();
                in_secret.min(in_guess)
            })
            .sum();
        Score::new(exact, common - exact)
    }

    proptest! {
        #[test]
        fn counts_stay_within_length((secret, guess) in secret_and_guess()) {
            let score = Score::calculate(&secret, &guess);
            prop_assert!(score.exact() <= secret.len());
            prop_assert!(score.partial() <= secret.len());
            prop_assert!(score.exact() + score.partial() <= secret.len());
        }

        #[test]
        fn self_score_is_perfect((secret, _) in secret_and_guess()) {
            let score = Score::calculate(&secret, &secret);
            prop_assert_eq!(score, Score::new(secret.len(), 0));
        }

        #[test]
        fn relabeling_preserves_score((secret, guess) in secret_and_guess()) {
            let relabel = |c: &char| match c {
                'A' => 'w',
                'B' => 'x',
                'C' => 'y',
                _ => 'z',
            };
            let secret2: Vec<char> = secret.iter().map(relabel).collect();
            let guess2: Vec<char> = guess.iter().map(relabel).collect();
            prop_assert_eq!(
                Score::calculate(&secret, &guess),
                Score::calculate(&secret2, &guess2)
            );
        }

        #[test]
        fn swapping_roles_preserves_score((secret, guess) in secret_and_guess()) {
            prop_assert_eq!(
                Score::calculate(&secret, &guess),
                Score::calculate(&guess, &secret)
            );
        }

        #[test]
        fn matches_reference_count((secret, guess) in secret_and_guess()) {
            prop_assert_eq!(Score::calculate(&secret, &guess), reference(&secret, &guess));
        }
    }
}
