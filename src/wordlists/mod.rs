//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary: the root-word
//! candidates a round starts from, and the vocabulary backing the bundled
//! dictionary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_valid_words() {
        // All roots should be lowercase alphabetic, long enough to play from
        for &word in START_WORDS {
            assert!(
                word.len() >= 6,
                "Start word '{word}' is too short to make a round"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Start word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert!(!word.is_empty(), "Dictionary contains an empty entry");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Dictionary word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_subset_of_dictionary() {
        // A round's root must itself be a real word
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &root in START_WORDS {
            assert!(
                dictionary.contains(&root),
                "Start word '{root}' not in dictionary"
            );
        }
    }

    #[test]
    fn default_fallback_root_is_available() {
        assert!(START_WORDS.contains(&"silkworm"));
        assert!(DICTIONARY.contains(&"silkworm"));
    }
}
