//! A scored guess

use super::Score;
use std::fmt;

/// Submitted guess text together with its score
///
/// Only a `Game` creates guesses, after validating the text. A guess is never
/// changed once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    text: String,
    score: Score,
}

impl Guess {
    pub(crate) fn new(text: impl Into<String>, score: Score) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }

    /// The guess exactly as submitted
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Exact and close counts together
    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Number of symbols in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(&self) -> usize {
        self.score.exact()
    }

    /// Number of symbols in the secret but in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial(&self) -> usize {
        self.score.partial()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{text: \"{}\", correct: {}, close: {}}}",
            self.text,
            self.exact(),
            self.partial()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_accessors() {
        let guess = Guess::new("ROYB", Score::new(3, 0));
        assert_eq!(guess.text(), "ROYB");
        assert_eq!(guess.exact(), 3);
        assert_eq!(guess.partial(), 0);
        assert_eq!(guess.score(), Score::new(3, 0));
    }

    #[test]
    fn guess_display() {
        let guess = Guess::new("GYOR", Score::new(0, 4));
        assert_eq!(
            format!("{guess}"),
            "{text: \"GYOR\", correct: 0, close: 4}"
        );
    }
}
