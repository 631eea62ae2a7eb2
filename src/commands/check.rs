//! One-shot validation of a word against a root

use crate::dictionary::Dictionary;
use crate::game::GameState;
use crate::rules::{Rejection, Validator};

/// Outcome of checking a single word against a root
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The normalized root word the check ran against
    pub root: String,
    /// The normalized submission
    pub word: String,
    /// Points the word would score, or why it was rejected
    pub verdict: Result<usize, Rejection>,
}

impl CheckResult {
    /// True when the word passed every rule
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Validate one word against a fresh round with the given root
///
/// Runs the full pipeline with an empty accepted list, so the originality
/// rule can only trip when the word equals the root.
pub fn check_word<D: Dictionary + ?Sized>(
    root: &str,
    raw: &str,
    dictionary: &D,
    language: &str,
) -> CheckResult {
    let state = GameState::with_root(root);
    let validator = Validator::with_language(dictionary, language);

    let verdict = validator.check(raw, &state).map(|word| word.len());

    CheckResult {
        root: state.root_word().to_string(),
        word: raw.trim().to_lowercase(),
        verdict,
    }
}
