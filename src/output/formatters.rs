//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a guess with each letter colored by its mark
#[must_use]
pub fn colorize_guess(word: &Word, feedback: Feedback) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let cell = format!(" {letter} ");
            match mark {
                Mark::Match => cell.black().on_green().bold().to_string(),
                Mark::Misplaced => cell.black().on_yellow().bold().to_string(),
                Mark::Miss => cell.white().on_bright_black().to_string(),
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
