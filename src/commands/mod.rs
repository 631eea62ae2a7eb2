//! Command implementations

pub mod check;
pub mod hints;
pub mod play;

pub use check::{CheckResult, check_word};
pub use hints::{HintsResult, find_hints};
pub use play::{FALLBACK_ROOT, run_play};
