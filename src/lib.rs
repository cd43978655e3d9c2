//! Word Guessing Game Service
//!
//! Players guess a hidden word within six attempts and receive per-letter
//! feedback after every guess. Sessions and statistics are kept in memory
//! and served over HTTP or played in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_service::core::{LetterStatus, Word, evaluate};
//!
//! let guess = Word::new("erase").unwrap();
//! let target = Word::new("speed").unwrap();
//!
//! let evaluation = evaluate(&guess, &target).unwrap();
//! assert_eq!(evaluation.letters()[0].status, LetterStatus::Present);
//! assert_eq!(evaluation.to_emoji(), "🟨⬜⬜🟨🟨");
//! ```

// Core domain types and evaluation
pub mod core;

pub mod error;

// Sessions, statistics and storage
pub mod game;

// Word lists
pub mod wordlists;

pub mod config;

// HTTP interface
pub mod api;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
