//! Word lists and target word selection
//!
//! Provides the embedded target list, file loading, and the [`WordSource`]
//! the session manager draws target words from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{TARGETS, TARGETS_COUNT};
pub use source::{RandomWordList, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
        assert!(TARGETS_COUNT > 0);
    }

    #[test]
    fn targets_are_valid_words() {
        for &word in TARGETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn targets_include_common_words() {
        for word in ["CRANE", "SPEED", "ALLOW", "WORLD"] {
            assert!(TARGETS.contains(&word), "missing {word}");
        }
    }
}
