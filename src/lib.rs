//! Word Scramble
//!
//! A single-round word game: the player is shown a randomly chosen root word
//! and submits words spellable from its letters. Submissions must not be the
//! root itself, must not repeat, and must be real dictionary words; each
//! accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::GameState;
//! use word_scramble::rules::Validator;
//!
//! let oracle = WordListDictionary::from_words(["silk"], "en");
//! let mut state = GameState::with_root("silkworm");
//! let validator = Validator::new(&oracle);
//!
//! let word = validator.check("silk", &state).unwrap();
//! state.commit(word);
//!
//! assert_eq!(state.score(), 4);
//! assert_eq!(state.used_words(), ["silk"]);
//! ```

// Core domain types
pub mod core;

// Round state and word sources
pub mod game;

// Validation rules
pub mod rules;

// Dictionary oracle
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
