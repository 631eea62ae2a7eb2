//! Candidate validation pipeline
//!
//! Rules run in a fixed order, cheapest first, short-circuiting at the first
//! failure: same-as-root, originality, spellability, then the dictionary
//! lookup. Each submission is judged independently; nothing here remembers
//! prior rejected attempts.

use super::rejection::Rejection;
use crate::core::{Candidate, LetterPool};
use crate::dictionary::{DEFAULT_LANGUAGE, Dictionary};
use crate::game::GameState;

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Sub-multiset test: each root letter is usable at most once.
///
/// # Examples
/// ```
/// use word_scramble::rules::is_possible;
///
/// assert!(is_possible("sap", "pass"));
/// assert!(is_possible("ssap", "pass"));
/// assert!(!is_possible("sssap", "pass"));
/// ```
#[must_use]
pub fn is_possible(candidate: &str, root: &str) -> bool {
    LetterPool::new(root).can_spell(candidate)
}

/// Check whether `candidate` has not been accepted yet
#[must_use]
pub fn is_original(candidate: &str, used: &[String]) -> bool {
    !used.iter().any(|word| word == candidate)
}

/// Runs the validation pipeline against a dictionary oracle
///
/// Holds the injected oracle and the language tag submissions are checked
/// in. Stateless across submissions: the verdict depends only on the
/// candidate and the round state passed to [`Validator::check`].
pub struct Validator<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    language: String,
}

impl<'a, D: Dictionary + ?Sized> Validator<'a, D> {
    /// Create a validator for the default language ("en")
    pub fn new(dictionary: &'a D) -> Self {
        Self::with_language(dictionary, DEFAULT_LANGUAGE)
    }

    /// Create a validator for a specific language tag
    pub fn with_language(dictionary: &'a D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    /// The language tag submissions are checked in
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Judge a raw submission against the current round
    ///
    /// Normalizes the input, then applies the rules in order. On success the
    /// normalized candidate is returned, ready for `GameState::commit`.
    ///
    /// # Errors
    /// Returns the first failing rule's [`Rejection`].
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::GameState;
    /// use word_scramble::rules::{RejectReason, Validator};
    ///
    /// let oracle = WordListDictionary::from_words(["silk"], "en");
    /// let state = GameState::with_root("silkworm");
    /// let validator = Validator::new(&oracle);
    ///
    /// let word = validator.check(" Silk\n", &state).unwrap();
    /// assert_eq!(word.text(), "silk");
    ///
    /// let rejection = validator.check("silkworm", &state).unwrap_err();
    /// assert_eq!(rejection.reason(), RejectReason::SameAsRoot);
    /// ```
    pub fn check(&self, raw: &str, state: &GameState) -> Result<Candidate, Rejection> {
        let candidate = Candidate::new(raw).map_err(|_| Rejection::empty())?;

        if candidate.text() == state.root_word() {
            return Err(Rejection::same_as_root());
        }

        if !is_original(candidate.text(), state.used_words()) {
            return Err(Rejection::already_used());
        }

        if !is_possible(candidate.text(), state.root_word()) {
            return Err(Rejection::not_possible(state.root_word()));
        }

        if !self
            .dictionary
            .is_real_word(candidate.text(), &self.language)
        {
            return Err(Rejection::not_recognized());
        }

        Ok(candidate)
    }
}
