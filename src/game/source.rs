//! Root-word sources
//!
//! A `WordSource` supplies the pool a round's root word is drawn from.
//! The shipped source is the compiled-in start list; hosts can point at a
//! custom file instead, and tests use fixed in-memory lists.

use crate::wordlists::{START_WORDS, loader};
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A supplier of candidate root words
pub trait WordSource {
    /// List every word this source can offer
    ///
    /// An `Ok` list may be empty; `GameState::start` treats that as
    /// `SourceError::Unavailable`.
    ///
    /// # Errors
    /// Returns `SourceError` if the underlying list cannot be read.
    fn list_words(&self) -> Result<Vec<String>, SourceError>;
}

/// Error for a word source that cannot supply a root word
#[derive(Debug)]
pub enum SourceError {
    /// The source produced no usable words
    Unavailable,
    /// The backing file could not be read
    Io(io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "Word source has no words to offer"),
            Self::Io(e) => write!(f, "Failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// The start list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn list_words(&self) -> Result<Vec<String>, SourceError> {
        Ok(loader::words_from_slice(START_WORDS))
    }
}

/// A newline-delimited word list on disk
#[derive(Debug, Clone)]
pub struct WordListFile {
    path: PathBuf,
}

impl WordListFile {
    /// Point the source at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for WordListFile {
    fn list_words(&self) -> Result<Vec<String>, SourceError> {
        Ok(loader::load_from_file(&self.path)?)
    }
}

/// A fixed in-memory list
///
/// Used for the host's fallback root word and for deterministic tests.
#[derive(Debug, Clone)]
pub struct StaticWords(pub Vec<String>);

impl StaticWords {
    /// Build a source holding exactly one word
    pub fn single(word: impl Into<String>) -> Self {
        Self(vec![word.into()])
    }
}

impl WordSource for StaticWords {
    fn list_words(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.0.clone())
    }
}
