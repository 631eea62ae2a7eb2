//! Dictionary oracle
//!
//! The game treats spelling as an external question: a dictionary is any
//! collaborator that can answer "is this a real word in this language?".
//! The shipped implementation is backed by an embedded word list; tests
//! inject deterministic fakes.

mod wordlist;

pub use wordlist::WordListDictionary;

/// Language tag used when the host does not specify one
pub const DEFAULT_LANGUAGE: &str = "en";

/// An oracle that judges whether a string is a correctly spelled word
///
/// Object-safe so hosts can hold a `&dyn Dictionary`. The oracle's verdict
/// is authoritative: the validation pipeline asks for a boolean and nothing
/// else.
pub trait Dictionary {
    /// Check whether `word` is a correctly spelled word in `language`
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Always(bool);

    impl Dictionary for Always {
        fn is_real_word(&self, _word: &str, _language: &str) -> bool {
            self.0
        }
    }

    #[test]
    fn trait_is_object_safe() {
        let yes = Always(true);
        let oracle: &dyn Dictionary = &yes;
        assert!(oracle.is_real_word("anything", DEFAULT_LANGUAGE));
    }

    #[test]
    fn blanket_ref_impl_delegates() {
        let no = Always(false);
        let by_ref = &no;
        assert!(!by_ref.is_real_word("anything", DEFAULT_LANGUAGE));
    }
}
