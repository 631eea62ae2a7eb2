//! Round state: root word, accepted words, score
//!
//! `GameState` owns the mutable data for one round and applies accepted
//! moves. It never validates submissions itself: the validation pipeline in
//! `rules` decides, and only already-accepted words reach `commit`.

use super::source::{SourceError, WordSource};
use crate::core::Candidate;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Mutable state for a single round
///
/// Invariants while a round is active:
/// - `root_word` is non-empty
/// - `score` equals the summed character counts of `used_words`
/// - `used_words` holds the accepted words, most recent first, no duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

/// Read-only view of the current round
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub root_word: &'a str,
    pub used_words: &'a [String],
    pub score: usize,
}

impl GameState {
    /// Create an empty state with no active round
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an active round with a fixed root word
    ///
    /// The root is normalized the same way candidates are. Used by the
    /// one-shot `check` command and by tests; interactive play draws the
    /// root from a source via [`GameState::start`].
    ///
    /// # Examples
    /// ```
    /// use word_scramble::game::GameState;
    ///
    /// let state = GameState::with_root(" Silkworm\n");
    /// assert_eq!(state.root_word(), "silkworm");
    /// assert_eq!(state.score(), 0);
    /// ```
    #[must_use]
    pub fn with_root(root: impl AsRef<str>) -> Self {
        Self {
            root_word: root.as_ref().trim().to_lowercase(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Start a round: draw a root word uniformly at random from `source`
    ///
    /// Resets the accepted list and the score as a side effect. This is the
    /// only operation that mutates the root word.
    ///
    /// # Errors
    /// Returns `SourceError::Unavailable` if the source offers no words, or
    /// the source's own error if its list cannot be read. On error the state
    /// is left unchanged.
    pub fn start<S, R>(&mut self, source: &S, rng: &mut R) -> Result<&str, SourceError>
    where
        S: WordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let words = source.list_words()?;
        let root = words.choose(rng).ok_or(SourceError::Unavailable)?;

        self.root_word = root.trim().to_lowercase();
        self.used_words.clear();
        self.score = 0;

        Ok(&self.root_word)
    }

    /// Restart: clear all round state and draw a fresh root word
    ///
    /// Equivalent to a fresh [`GameState::start`].
    ///
    /// # Errors
    /// Same conditions as [`GameState::start`].
    pub fn restart<S, R>(&mut self, source: &S, rng: &mut R) -> Result<&str, SourceError>
    where
        S: WordSource + ?Sized,
        R: Rng + ?Sized,
    {
        self.start(source, rng)
    }

    /// Record an accepted word
    ///
    /// Precondition: `word` passed the full validation pipeline against this
    /// state. Inserts at the front of the accepted list and bumps the score
    /// by the word's character count. No validation happens here.
    pub fn commit(&mut self, word: Candidate) {
        self.score += word.len();
        self.used_words.insert(0, word.into_text());
    }

    /// Read-only view of the round
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            root_word: &self.root_word,
            used_words: &self.used_words,
            score: self.score,
        }
    }

    /// The round's root word; empty when no round is active
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Sum of the character counts of all accepted words
    #[inline]
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// True when a root word has been set
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.root_word.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::source::StaticWords;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn candidate(word: &str) -> Candidate {
        Candidate::new(word).unwrap()
    }

    #[test]
    fn new_state_is_inactive() {
        let state = GameState::new();
        assert!(!state.is_active());
        assert_eq!(state.root_word(), "");
        assert_eq!(state.score(), 0);
        assert!(state.used_words().is_empty());
    }

    #[test]
    fn with_root_normalizes() {
        let state = GameState::with_root("  Silkworm\n");
        assert_eq!(state.root_word(), "silkworm");
        assert!(state.is_active());
    }

    #[test]
    fn start_picks_a_word_from_the_source() {
        let source = StaticWords(vec!["pass".to_string(), "silkworm".to_string()]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut state = GameState::new();
        let root = state.start(&source, &mut rng).unwrap().to_string();

        assert!(root == "pass" || root == "silkworm");
        assert_eq!(state.root_word(), root);
        assert!(state.is_active());
    }

    #[test]
    fn start_resets_score_and_used_words() {
        let source = StaticWords::single("silkworm");
        let mut rng = StdRng::seed_from_u64(1);

        let mut state = GameState::with_root("pass");
        state.commit(candidate("sap"));
        assert_eq!(state.score(), 3);

        state.start(&source, &mut rng).unwrap();
        assert_eq!(state.root_word(), "silkworm");
        assert_eq!(state.score(), 0);
        assert!(state.used_words().is_empty());
    }

    #[test]
    fn start_from_empty_source_is_unavailable() {
        let source = StaticWords(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);

        let mut state = GameState::with_root("pass");
        state.commit(candidate("sap"));

        let result = state.start(&source, &mut rng);
        assert!(matches!(result, Err(SourceError::Unavailable)));

        // State untouched on failure
        assert_eq!(state.root_word(), "pass");
        assert_eq!(state.score(), 3);
    }

    #[test]
    fn commit_front_inserts_and_scores_length() {
        let mut state = GameState::with_root("silkworm");

        state.commit(candidate("silk"));
        assert_eq!(state.score(), 4);
        assert_eq!(state.used_words(), ["silk"]);

        state.commit(candidate("worm"));
        assert_eq!(state.score(), 8);
        assert_eq!(state.used_words(), ["worm", "silk"]);

        state.commit(candidate("sir"));
        assert_eq!(state.score(), 11);
        assert_eq!(state.used_words(), ["sir", "worm", "silk"]);
    }

    #[test]
    fn restart_is_a_fresh_start() {
        let source = StaticWords::single("notebook");
        let mut rng = StdRng::seed_from_u64(42);

        let mut state = GameState::with_root("silkworm");
        state.commit(candidate("silk"));
        state.commit(candidate("worm"));

        let root = state.restart(&source, &mut rng).unwrap().to_string();
        assert_eq!(root, "notebook");
        assert_eq!(state.score(), 0);
        assert!(state.used_words().is_empty());
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut state = GameState::with_root("silkworm");
        state.commit(candidate("silk"));

        let snap = state.snapshot();
        assert_eq!(snap.root_word, "silkworm");
        assert_eq!(snap.used_words, ["silk"]);
        assert_eq!(snap.score, 4);
    }

    #[test]
    fn start_draw_is_seed_deterministic() {
        let source = StaticWords(vec![
            "airplane".to_string(),
            "notebook".to_string(),
            "silkworm".to_string(),
        ]);

        let mut first = GameState::new();
        let mut second = GameState::new();

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let root_a = first.start(&source, &mut rng_a).unwrap().to_string();
        let root_b = second.start(&source, &mut rng_b).unwrap().to_string();

        assert_eq!(root_a, root_b);
    }
}
