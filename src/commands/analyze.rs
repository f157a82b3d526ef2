//! Analyze a prospective guess
//!
//! Computes how a letter would partition the candidate set of a fresh game.

use crate::core::{Letter, Pattern};
use crate::engine::Engine;

/// Result of analyzing a single opening letter
pub struct AnalysisResult {
    pub letter: char,
    pub length: usize,
    pub total_candidates: usize,
    /// Every group's pattern and size, largest first
    pub groups: Vec<(Pattern, usize)>,
    /// The group the engine would keep
    pub kept: Pattern,
    pub kept_size: usize,
    /// True when the kept group reveals nothing, costing the player a turn
    pub costs_turn: bool,
}

/// Analyze how `letter` would split a fresh game at the given word length
///
/// # Errors
///
/// Returns an error if `length` is zero or the word list has no words of that
/// length.
pub fn analyze_letter(
    words: &[String],
    length: usize,
    letter: Letter,
) -> Result<AnalysisResult, String> {
    let engine = Engine::new(words.iter(), length, 1).map_err(|e| e.to_string())?;

    let total_candidates = engine.candidate_words().len();
    if total_candidates == 0 {
        return Err(format!("no words of length {length} in the word list"));
    }

    let groups = engine.partition_preview(letter);
    // partition_preview sorts largest-first with ties in key order, so the
    // first entry is exactly the group record() would keep
    let (kept, kept_size) = groups
        .first()
        .cloned()
        .ok_or_else(|| "no candidate groups".to_string())?;
    let costs_turn = kept.count_of(letter) == 0;

    Ok(AnalysisResult {
        letter: letter.as_char(),
        length,
        total_candidates,
        groups,
        kept,
        kept_size,
        costs_turn,
    })
}
