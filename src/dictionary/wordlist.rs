//! Word-list-backed dictionary
//!
//! A `Dictionary` implementation over a hash set of known words. The default
//! instance uses the English vocabulary compiled into the binary; hosts can
//! load a custom list from a file instead.

use super::{DEFAULT_LANGUAGE, Dictionary};
use crate::wordlists::{DICTIONARY, loader};
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Dictionary backed by an in-memory set of words
///
/// Lookups are exact-match on normalized (lowercase) words. The dictionary
/// knows a single language and answers `false` for any other tag.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from an explicit collection of words
    ///
    /// Words are trimmed and lowercased; empty entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let oracle = WordListDictionary::from_words(["silk", "worm"], "en");
    /// assert!(oracle.is_real_word("silk", "en"));
    /// assert!(!oracle.is_real_word("slik", "en"));
    /// ```
    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The embedded English dictionary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY.iter().copied(), DEFAULT_LANGUAGE)
    }

    /// Load a dictionary from a newline-delimited word list file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, language: impl Into<String>) -> io::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::from_words(words, language))
    }

    /// The language tag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of known words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary knows no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        language == self.language && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_lookup() {
        let oracle = WordListDictionary::from_words(["silk", "worm"], "en");
        assert!(oracle.is_real_word("silk", "en"));
        assert!(oracle.is_real_word("worm", "en"));
        assert!(!oracle.is_real_word("wrom", "en"));
    }

    #[test]
    fn entries_are_normalized() {
        let oracle = WordListDictionary::from_words(["  Silk \n", "WORM"], "en");
        assert!(oracle.is_real_word("silk", "en"));
        assert!(oracle.is_real_word("worm", "en"));
        assert_eq!(oracle.len(), 2);
    }

    #[test]
    fn wrong_language_answers_false() {
        let oracle = WordListDictionary::from_words(["silk"], "en");
        assert!(!oracle.is_real_word("silk", "fr"));
        assert!(!oracle.is_real_word("silk", ""));
    }

    #[test]
    fn empty_string_is_not_a_word() {
        let oracle = WordListDictionary::from_words(["silk"], "en");
        assert!(!oracle.is_real_word("", "en"));
    }

    #[test]
    fn embedded_dictionary_has_expected_words() {
        let oracle = WordListDictionary::embedded();
        assert_eq!(oracle.language(), DEFAULT_LANGUAGE);
        assert!(oracle.is_real_word("silk", "en"));
        assert!(oracle.is_real_word("silkworm", "en"));
        assert!(!oracle.is_real_word("zzzzz", "en"));
    }

    #[test]
    fn from_file_loads_words() {
        use std::io::Write;

        let path = std::env::temp_dir().join("word_scramble_dict_test.txt");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "apple").unwrap();
            writeln!(file, "GRAPE").unwrap();
            writeln!(file).unwrap();
        }

        let oracle = WordListDictionary::from_file(&path, "en").unwrap();
        assert!(oracle.is_real_word("apple", "en"));
        assert!(oracle.is_real_word("grape", "en"));
        assert_eq!(oracle.len(), 2);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn from_file_missing_path_errors() {
        let result = WordListDictionary::from_file("/no/such/wordlist.txt", "en");
        assert!(result.is_err());
    }
}
