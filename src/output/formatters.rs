//! Formatting utilities for terminal output

/// Badge showing a word's length, the terminal stand-in for the reference
/// UI's numbered circle icons
#[must_use]
pub fn length_badge(word: &str) -> String {
    format!("[{}]", word.chars().count())
}

/// The score line shown above the accepted list
#[must_use]
pub fn score_line(score: usize) -> String {
    format!("Score: {score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_badge_counts_chars() {
        assert_eq!(length_badge("silk"), "[4]");
        assert_eq!(length_badge("a"), "[1]");
        assert_eq!(length_badge(""), "[0]");
    }

    #[test]
    fn score_line_formats() {
        assert_eq!(score_line(0), "Score: 0");
        assert_eq!(score_line(42), "Score: 42");
    }
}
