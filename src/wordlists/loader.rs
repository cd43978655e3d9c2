//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{CharacterPolicy, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and words rejected by `policy` are skipped. Words are
/// normalised to uppercase.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_service::core::CharacterPolicy;
/// use wordle_service::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt", CharacterPolicy::Alphabetic).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, policy: CharacterPolicy) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content, policy))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_service::core::CharacterPolicy;
/// use wordle_service::wordlists::loader::words_from_slice;
/// use wordle_service::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS, CharacterPolicy::Alphabetic);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], policy: CharacterPolicy) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_policy(s, policy).ok())
        .collect()
}

fn parse_lines(content: &str, policy: CharacterPolicy) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::with_policy(line, policy).ok())
        .collect()
}
