//! Word lists for hangman games
//!
//! Provides the embedded dictionary compiled into the binary for zero-cost
//! access, plus utilities for loading custom word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn word_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_alphabetic() {
        for &word in WORDS {
            assert!(
                word.chars().all(|ch| ch.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: BTreeSet<&str> = WORDS.iter().copied().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn words_cover_multiple_lengths() {
        let lengths: BTreeSet<usize> = WORDS.iter().map(|word| word.len()).collect();

        // The dictionary must support games at the common hangman lengths
        for len in 3..=6 {
            assert!(lengths.contains(&len), "no words of length {len}");
        }
    }
}
