//! Core domain types for the guessing game
//!
//! Pure types and the evaluation function. No state, no I/O.

mod feedback;
mod word;

pub use feedback::{Evaluation, LetterFeedback, LetterStatus, evaluate, is_consistent};
pub use word::{CharacterPolicy, Word};
