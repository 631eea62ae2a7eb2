//! Typed rejection outcomes
//!
//! Every failed submission maps to one of five reasons, each carrying a
//! short title and a longer message for direct display to the player.
//! Rejections are local verdicts: they never terminate the session or touch
//! game state.

use std::fmt;

/// Why a candidate was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Nothing left after trimming
    Empty,
    /// Candidate equals the round's root word
    SameAsRoot,
    /// Candidate was already accepted this round
    AlreadyUsed,
    /// Candidate's letters are not a sub-multiset of the root's letters
    NotPossible,
    /// The dictionary does not recognize the candidate
    NotRecognized,
}

/// A rejected submission with user-facing text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    reason: RejectReason,
    title: &'static str,
    message: String,
}

impl Rejection {
    pub(crate) fn empty() -> Self {
        Self {
            reason: RejectReason::Empty,
            title: "Nothing to check",
            message: "Type a word first".to_string(),
        }
    }

    pub(crate) fn same_as_root() -> Self {
        Self {
            reason: RejectReason::SameAsRoot,
            title: "Word is same as root word",
            message: "Think of new words!".to_string(),
        }
    }

    pub(crate) fn already_used() -> Self {
        Self {
            reason: RejectReason::AlreadyUsed,
            title: "Word used already",
            message: "Be more original!".to_string(),
        }
    }

    pub(crate) fn not_possible(root: &str) -> Self {
        Self {
            reason: RejectReason::NotPossible,
            title: "Word not possible",
            message: format!("You can't spell that word from '{root}'!"),
        }
    }

    pub(crate) fn not_recognized() -> Self {
        Self {
            reason: RejectReason::NotRecognized,
            title: "Word not recognized",
            message: "You can't just make them up, you know!".to_string(),
        }
    }

    /// The rejection category
    #[inline]
    #[must_use]
    pub fn reason(&self) -> RejectReason {
        self.reason
    }

    /// Short title for the rejection
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        self.title
    }

    /// Longer explanatory message, parameterized by the root where relevant
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl std::error::Error for Rejection {}
