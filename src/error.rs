//! Error types for the puzzle builder and the word reader.

use thiserror::Error;

/// Failures surfaced by [`crate::build_puzzle`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// No words were supplied. Callers are expected to reject this earlier.
    #[error("no words to place")]
    EmptyWordList,

    /// Every grid size up to the cap was tried without placing all words.
    #[error("could not place {word:?} in any grid up to {cap}x{cap}")]
    SizeCapExceeded { cap: usize, word: String },
}

/// Failures while reading or validating input words.
#[derive(Debug, Error)]
pub enum WordError {
    #[error("invalid word {word:?}: only letters A-Z are allowed")]
    Invalid { word: String },

    #[error("invalid word {word:?} on line {line}")]
    InvalidLine { line: usize, word: String },

    #[error("no words parsed, check your input and try again")]
    Empty,

    #[error("failed to read words: {0}")]
    Io(#[from] std::io::Error),
}
