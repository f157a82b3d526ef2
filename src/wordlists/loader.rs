//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! dictionary.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns lowercase words, skipping blank lines and entries containing
/// non-alphabetic characters. Words of every length are kept; filtering to a
/// game's length happens in the engine.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content.lines().filter_map(normalize).collect())
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().copied().filter_map(normalize).collect()
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_keeps_valid_words() {
        let input = &["crane", "ox", "juggernaut"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["crane", "ox", "juggernaut"]);
    }

    #[test]
    fn words_from_slice_normalizes_case_and_whitespace() {
        let input = &["  Hello ", "WORLD"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn words_from_slice_skips_invalid_entries() {
        let input = &["hello", "", "cran3", "two words", "ok"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["hello", "ok"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_embedded_dictionary() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
