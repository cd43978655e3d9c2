//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterStatus};
use colored::Colorize;

/// Render a guess as colored letter tiles, e.g. ` C  R  A  N  E `
#[must_use]
pub fn colored_tiles(evaluation: &Evaluation) -> String {
    evaluation
        .letters()
        .iter()
        .map(|feedback| {
            let tile = format!(" {} ", feedback.letter);
            match feedback.status {
                LetterStatus::Correct => tile.black().on_green().bold().to_string(),
                LetterStatus::Present => tile.black().on_yellow().bold().to_string(),
                LetterStatus::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pluralise "guess"
#[must_use]
pub const fn guesses_label(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
