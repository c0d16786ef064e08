//! Formatting utilities for terminal output

use crate::core::Score;

/// Render a score as pegs: `●` per exact match, `○` per close match, `·` for the rest
///
/// # Examples
/// ```
/// use codebreaker::core::Score;
/// use codebreaker::output::formatters::feedback_pegs;
///
/// assert_eq!(feedback_pegs(Score::new(1, 2), 4), "●○○·");
/// ```
#[must_use]
pub fn feedback_pegs(score: Score, length: usize) -> String {
    let misses = length.saturating_sub(score.exact() + score.partial());

    let mut result = String::with_capacity(length * 3);
    result.push_str(&"●".repeat(score.exact()));
    result.push_str(&"○".repeat(score.partial()));
    result.push_str(&"·".repeat(misses));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_all_exact() {
        assert_eq!(feedback_pegs(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn pegs_all_close() {
        assert_eq!(feedback_pegs(Score::new(0, 4), 4), "○○○○");
    }

    #[test]
    fn pegs_nothing() {
        assert_eq!(feedback_pegs(Score::new(0, 0), 3), "···");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
