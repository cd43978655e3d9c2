//! Target word selection
//!
//! The session manager only sees the [`WordSource`] trait; the in-process
//! [`RandomWordList`] is the default implementation.

use crate::core::Word;
use crate::error::{GameError, Result};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Supplies target words for new sessions
pub trait WordSource: Send + Sync {
    /// Draw the next target word
    ///
    /// # Errors
    /// Returns `GameError::NoWordsAvailable` when the source is empty.
    fn next_target_word(&self) -> Result<Word>;

    /// Whether `word` is a known dictionary word
    fn contains(&self, word: &Word) -> bool;
}

/// Uniform random choice from a fixed list of same-length words
pub struct RandomWordList {
    words: Vec<Word>,
    known: FxHashSet<Word>,
    rng: Mutex<StdRng>,
}

impl RandomWordList {
    /// Create a list seeded from the operating system
    ///
    /// Words whose length differs from the first word are dropped.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a list with a fixed seed, for reproducible draws
    #[must_use]
    pub fn seeded(words: Vec<Word>, seed: u64) -> Self {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Self {
        let total = words.len();
        let words: Vec<Word> = match words.first().map(Word::length) {
            Some(length) => words.into_iter().filter(|w| w.length() == length).collect(),
            None => words,
        };
        if words.len() < total {
            tracing::warn!(
                dropped = total - words.len(),
                "word list mixes lengths; keeping words matching the first entry"
            );
        }

        let known = words.iter().cloned().collect();
        Self {
            words,
            known,
            rng: Mutex::new(rng),
        }
    }

    /// All words in draw order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Length shared by every word, if the list is non-empty
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.words.first().map(Word::length)
    }
}

impl WordSource for RandomWordList {
    fn next_target_word(&self) -> Result<Word> {
        let mut rng = self.rng.lock();
        self.words
            .choose(&mut *rng)
            .cloned()
            .ok_or(GameError::NoWordsAvailable)
    }

    fn contains(&self, word: &Word) -> bool {
        self.known.contains(word)
    }
}
