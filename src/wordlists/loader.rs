//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize one raw line into a usable word, if any
///
/// Trims, lowercases, and drops entries that are empty or contain
/// non-alphabetic characters.
fn clean_line(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();

    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        Some(word)
    } else {
        None
    }
}

/// Load words from a newline-delimited file
///
/// Returns the cleaned entries, skipping blank and malformed lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().filter_map(clean_line).collect())
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| clean_line(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["silk", "worm", "milk"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silk", "worm", "milk"]);
    }

    #[test]
    fn words_from_slice_normalizes_case_and_whitespace() {
        let input = &["  Silk ", "WORM"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silk", "worm"]);
    }

    #[test]
    fn words_from_slice_skips_malformed() {
        let input = &["silk", "", "   ", "w0rm", "two words"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silk"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_and_cleans() {
        use std::io::Write;

        let path = std::env::temp_dir().join("word_scramble_loader_test.txt");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "Silkworm").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  notebook  ").unwrap();
            writeln!(file, "not-a-word!").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["silkworm", "notebook"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_file_missing_path_errors() {
        assert!(load_from_file("/no/such/file.txt").is_err());
    }

    #[test]
    fn load_from_embedded_start_words() {
        use crate::wordlists::START_WORDS;

        let words = words_from_slice(START_WORDS);
        assert_eq!(words.len(), START_WORDS.len());
    }
}
