//! Word representation
//!
//! A Word is an uppercase string whose length L is whatever the target word's
//! length is. Nothing in the core assumes L = 5.

use crate::error::{GameError, Result};
use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Which characters a word may contain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharacterPolicy {
    /// ASCII letters only
    #[default]
    Alphabetic,
    /// Any character; only emptiness is rejected
    Any,
}

impl CharacterPolicy {
    fn check(self, text: &str) -> Result<()> {
        if self == Self::Any {
            return Ok(());
        }

        match text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_alphabetic())
        {
            Some((position, character)) => Err(GameError::InvalidCharacter {
                character,
                position,
            }),
            None => Ok(()),
        }
    }
}

/// An uppercase word with per-position letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    /// Create a Word accepting ASCII letters only
    ///
    /// # Errors
    /// Returns `GameError::EmptyWord` for empty input and
    /// `GameError::InvalidCharacter` for anything that is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_service::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        Self::with_policy(text, CharacterPolicy::Alphabetic)
    }

    /// Create a Word under an explicit character policy
    ///
    /// # Errors
    /// Same as [`Word::new`], with character validation governed by `policy`.
    pub fn with_policy(text: impl AsRef<str>, policy: CharacterPolicy) -> Result<Self> {
        let raw = text.as_ref();

        if raw.is_empty() {
            return Err(GameError::EmptyWord);
        }
        policy.check(raw)?;

        let letters: Vec<char> = raw.chars().map(uppercase_letter).collect();
        let text = letters.iter().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters in position order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (L)
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.letters.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.length()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Occurrences of each letter, used by the evaluator's duplicate handling
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

/// Uppercase one character without changing the letter count
///
/// Characters whose uppercase form is several characters (`ß`) are kept as
/// they are.
fn uppercase_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes_to_uppercase() {
        let word = Word::new("CrAnE").unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), &['C', 'R', 'A', 'N', 'E']);
    }

    #[test]
    fn word_length_follows_input() {
        assert_eq!(Word::new("cat").unwrap().length(), 3);
        assert_eq!(Word::new("crane").unwrap().length(), 5);
        assert_eq!(Word::new("elephants").unwrap().length(), 9);
    }

    #[test]
    fn word_creation_rejects_empty() {
        assert_eq!(Word::new(""), Err(GameError::EmptyWord));
        assert_eq!(
            Word::with_policy("", CharacterPolicy::Any),
            Err(GameError::EmptyWord)
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(
            Word::new("cran3"),
            Err(GameError::InvalidCharacter {
                character: '3',
                position: 4
            })
        );
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cr!ne").is_err());
    }

    #[test]
    fn alphabetic_policy_checks_input_before_uppercasing() {
        assert_eq!(
            Word::new("\u{17f}late"),
            Err(GameError::InvalidCharacter {
                character: '\u{17f}',
                position: 0
            })
        );
        assert_eq!(
            Word::new("\u{df}cran"),
            Err(GameError::InvalidCharacter {
                character: '\u{df}',
                position: 0
            })
        );
    }

    #[test]
    fn any_policy_keeps_one_letter_per_character() {
        let word = Word::with_policy("\u{df}cran", CharacterPolicy::Any).unwrap();
        assert_eq!(word.length(), 5);
        assert_eq!(word.text(), "\u{df}CRAN");

        let word = Word::with_policy("\u{e9}t\u{e9}", CharacterPolicy::Any).unwrap();
        assert_eq!(word.text(), "\u{c9}T\u{c9}");
    }

    #[test]
    fn any_policy_accepts_other_characters() {
        let word = Word::with_policy("ab-1!", CharacterPolicy::Any).unwrap();
        assert_eq!(word.text(), "AB-1!");
        assert_eq!(word.length(), 5);
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), 'C');
        assert_eq!(word.letter_at(4), 'E');
    }

    #[test]
    fn word_letter_counts_duplicates() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&'S'), Some(&1));
        assert_eq!(counts.get(&'E'), Some(&2));
        assert_eq!(counts.get(&'Z'), None);
    }

    #[test]
    fn word_display_and_serialize() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"CRANE\"");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
