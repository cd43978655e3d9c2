//! Error taxonomy shared by the evaluator, word sources and session manager
//!
//! Every variant is a recoverable, caller-facing condition. None of them is
//! fatal to the process and none is retried internally.

use thiserror::Error;

/// Errors reported by the game core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("word must contain at least one letter")]
    EmptyWord,

    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("guess must be exactly {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("game session not found")]
    SessionNotFound,

    #[error("game session is already finished")]
    SessionFinished,

    #[error("no target words available")]
    NoWordsAvailable,
}

/// Convenience alias used throughout the library
pub type Result<T, E = GameError> = std::result::Result<T, E>;
