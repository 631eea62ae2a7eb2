//! Dictionary-wide hint scan
//!
//! Finds every vocabulary word spellable from a root word. The scan is a
//! data-parallel filter over an immutable slice; results are sorted longest
//! first so the highest-scoring plays lead.

use crate::core::LetterPool;
use rayon::prelude::*;

/// Result of scanning a vocabulary for playable words
#[derive(Debug, Clone)]
pub struct HintsResult {
    /// The normalized root word
    pub root: String,
    /// Playable words, longest first, then alphabetical
    pub hints: Vec<String>,
    /// How many vocabulary words were scanned
    pub scanned: usize,
}

/// Find every word in `vocabulary` spellable from `root`
///
/// The root itself is excluded; it is never a legal play.
#[must_use]
pub fn find_hints(root: &str, vocabulary: &[String]) -> HintsResult {
    let root = root.trim().to_lowercase();
    let pool = LetterPool::new(&root);

    let mut hints: Vec<String> = vocabulary
        .par_iter()
        .filter(|word| word.as_str() != root && pool.can_spell(word))
        .cloned()
        .collect();

    hints.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    hints.dedup();

    HintsResult {
        root,
        scanned: vocabulary.len(),
        hints,
    }
}
