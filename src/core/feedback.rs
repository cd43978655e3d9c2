//! Guess evaluation and per-letter feedback
//!
//! Feedback for each guessed letter is one of:
//! - `correct`: right letter in the right position
//! - `present`: letter occurs elsewhere in the target
//! - `absent`: no unmatched occurrence of the letter remains in the target

use super::Word;
use crate::error::{GameError, Result};
use serde::Serialize;
use std::fmt;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Feedback attached to a guessed letter at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterFeedback {
    pub letter: char,
    pub status: LetterStatus,
}

/// Ordered feedback for a whole guess, one entry per position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Evaluation(Vec<LetterFeedback>);

impl Evaluation {
    /// Per-position feedback in guess order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// Statuses only, in position order
    pub fn statuses(&self) -> impl Iterator<Item = LetterStatus> + '_ {
        self.0.iter().map(|feedback| feedback.status)
    }

    /// Check if every position is `correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.statuses().all(|status| status == LetterStatus::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.statuses()
            .filter(|&status| status == LetterStatus::Correct)
            .count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.statuses()
            .filter(|&status| status == LetterStatus::Present)
            .count()
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.statuses().map(LetterStatus::emoji).collect()
    }
}

/// Evaluate `guess` against `target`
///
/// Two passes over the positions:
/// 1. Exact matches are marked `correct` and consume one occurrence of their
///    letter from the target's letter counts.
/// 2. Remaining positions, left to right, are `present` while the letter still
///    has unconsumed occurrences, otherwise `absent`.
///
/// Because pass 1 consumes counts before pass 2 runs, a letter is never
/// reported `correct`/`present` more times than it occurs in the target.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_service::core::{LetterStatus, Word, evaluate};
///
/// let guess = Word::new("llama").unwrap();
/// let target = Word::new("allow").unwrap();
/// let evaluation = evaluate(&guess, &target).unwrap();
///
/// use LetterStatus::{Absent, Correct, Present};
/// let statuses: Vec<_> = evaluation.statuses().collect();
/// assert_eq!(statuses, [Present, Correct, Present, Absent, Absent]);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<Evaluation> {
    if guess.length() != target.length() {
        return Err(GameError::LengthMismatch {
            expected: target.length(),
            actual: guess.length(),
        });
    }

    let mut remaining = target.letter_counts();
    let mut statuses: Vec<Option<LetterStatus>> = vec![None; guess.length()];

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
        if g == t {
            statuses[i] = Some(LetterStatus::Correct);
            if let Some(count) = remaining.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    // Second pass: pending positions, left to right
    for (status, &letter) in statuses.iter_mut().zip(guess.letters()) {
        if status.is_some() {
            continue;
        }
        *status = Some(match remaining.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                LetterStatus::Present
            }
            _ => LetterStatus::Absent,
        });
    }

    let feedback = guess
        .letters()
        .iter()
        .zip(statuses)
        .map(|(&letter, status)| LetterFeedback {
            letter,
            status: status.unwrap_or(LetterStatus::Absent),
        })
        .collect();

    Ok(Evaluation(feedback))
}

/// Check whether `candidate` could be the target given past guesses
///
/// A candidate is consistent when evaluating every past guess against it
/// reproduces the recorded feedback.
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[(Word, Evaluation)]) -> bool {
    history.iter().all(|(guess, observed)| {
        evaluate(guess, candidate).is_ok_and(|evaluation| evaluation == *observed)
    })
}
