//! Display pattern representation
//!
//! A Pattern is the row of slots shown to the player: a placeholder for every
//! position no guess has revealed, the letter itself once one has. It renders
//! with single spaces between slots, e.g. `"- a - - -"` for a 5-letter word
//! with one revealed `a`.
//!
//! The derived ordering compares slots left to right with an unrevealed slot
//! before any revealed letter, which is exactly the lexicographic order of the
//! rendered strings (`-` sorts before every lowercase letter). Sorting pattern
//! keys therefore sorts their display strings.

use super::Letter;
use std::fmt;

/// Placeholder character shown for an unrevealed slot
pub const PLACEHOLDER: char = '-';

/// A fixed-slot display pattern
///
/// The slot count is set at construction and never changes; only which slots
/// are revealed does.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    slots: Vec<Option<char>>,
}

impl Pattern {
    /// Create an all-placeholder pattern with the given number of slots
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let pattern = Pattern::hidden(5);
    /// assert_eq!(pattern.to_string(), "- - - - -");
    /// ```
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Number of slots in the pattern
    #[inline]
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Check whether every slot has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Derive the pattern `word` would display after guessing `letter`
    ///
    /// Copies this pattern and reveals `letter` at every position where `word`
    /// carries it; all other slots are untouched. This is the candidate
    /// pattern key used to group words during a guess.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Letter, Pattern};
    ///
    /// let hidden = Pattern::hidden(5);
    /// let key = hidden.reveal("hello", Letter::new('l').unwrap());
    /// assert_eq!(key.to_string(), "- - l l -");
    /// ```
    #[must_use]
    pub fn reveal(&self, word: &str, letter: Letter) -> Self {
        let mut slots = self.slots.clone();
        for (slot, ch) in slots.iter_mut().zip(word.chars()) {
            if ch == letter.as_char() {
                *slot = Some(ch);
            }
        }
        Self { slots }
    }

    /// Count the slots revealed as `letter`
    #[must_use]
    pub fn count_of(&self, letter: Letter) -> usize {
        self.slots
            .iter()
            .filter(|slot| **slot == Some(letter.as_char()))
            .count()
    }

    /// Check whether `word` agrees with every revealed slot
    ///
    /// The word must have exactly as many characters as the pattern has slots,
    /// and carry the revealed letter at every revealed position.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        word.chars().count() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word.chars())
                .all(|(slot, ch)| slot.is_none_or(|revealed| revealed == ch))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}
