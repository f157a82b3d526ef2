//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Format a set of letters as a comma-separated list
#[must_use]
pub fn format_letters(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format a group's share of a candidate set as a textual bar
#[must_use]
pub fn share_bar(size: usize, total: usize, width: usize) -> String {
    // Cast is safe: filled is clamped to [0, width]
    let filled = ((size as f64 / total.max(1) as f64) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
