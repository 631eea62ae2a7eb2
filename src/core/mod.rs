//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external
//! collaborators. All types here are pure, testable, and have clear
//! mathematical properties.

mod candidate;
mod letters;

pub use candidate::{Candidate, EmptyCandidate};
pub use letters::LetterPool;
