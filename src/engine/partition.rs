//! Candidate partitioning by pattern key
//!
//! Given the current display pattern and a guessed letter, groups every
//! candidate word by the pattern it would display, and selects the group that
//! keeps the most words alive.

use crate::core::{Letter, Pattern};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Group candidates by the pattern they would display after guessing `letter`
///
/// Every candidate lands in exactly one group; a word with no occurrence of
/// `letter` maps to the unchanged pattern. The groups of a non-empty candidate
/// set are therefore never all empty.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use evil_hangman::core::{Letter, Pattern};
/// use evil_hangman::engine::partition::partition;
///
/// let candidates: BTreeSet<String> =
///     ["happy", "hello", "world"].iter().map(ToString::to_string).collect();
///
/// let groups = partition(&candidates, &Pattern::hidden(5), Letter::new('o').unwrap());
/// assert_eq!(groups.len(), 2); // "- o - - -" and the unchanged key
/// ```
#[must_use]
pub fn partition(
    candidates: &BTreeSet<String>,
    pattern: &Pattern,
    letter: Letter,
) -> FxHashMap<Pattern, BTreeSet<String>> {
    let mut groups: FxHashMap<Pattern, BTreeSet<String>> = FxHashMap::default();

    for word in candidates {
        let key = pattern.reveal(word, letter);
        groups.entry(key).or_default().insert(word.clone());
    }

    groups
}

/// Select the largest group, breaking ties toward the smallest key
///
/// Keys are visited in sorted order and the incumbent is replaced only on a
/// strict size improvement, so equal-sized groups resolve to the
/// lexicographically smallest pattern key.
///
/// Returns `None` when `groups` is empty.
#[must_use]
pub fn largest_group(
    mut groups: FxHashMap<Pattern, BTreeSet<String>>,
) -> Option<(Pattern, BTreeSet<String>)> {
    let mut keys: Vec<Pattern> = groups.keys().cloned().collect();
    keys.sort_unstable();

    let mut best: Option<Pattern> = None;
    let mut best_size = 0;
    for key in keys {
        let size = groups[&key].len();
        if size > best_size {
            best_size = size;
            best = Some(key);
        }
    }

    let key = best?;
    let words = groups.remove(&key)?;
    Some((key, words))
}
