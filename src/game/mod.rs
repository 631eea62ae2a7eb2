//! Game session state and root-word sourcing

pub mod source;
pub mod state;

pub use source::{EmbeddedWords, SourceError, StaticWords, WordListFile, WordSource};
pub use state::{GameState, Snapshot};
