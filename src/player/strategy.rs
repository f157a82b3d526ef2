//! Letter-selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use crate::core::{Letter, Pattern};
use std::collections::BTreeSet;

/// English letters from most to least frequent
const FREQUENCY_ORDER: [char; 26] = [
    'e', 't', 'a', 'o', 'i', 'n', 's', 'r', 'h', 'l', 'd', 'c', 'u', 'm', 'f', 'p', 'g', 'w', 'y',
    'b', 'v', 'k', 'x', 'j', 'q', 'z',
];

/// A strategy for choosing the next letter to guess
pub trait Guesser {
    /// Choose the next letter given the visible pattern and the letters
    /// already guessed
    ///
    /// Returns `None` once every letter has been guessed.
    fn next_letter(&self, pattern: &Pattern, guessed: &BTreeSet<char>) -> Option<Letter>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of a guesser while maintaining static dispatch.
pub enum GuesserType {
    /// English-frequency order (deterministic)
    Frequency(FrequencyGuesser),
    /// Uniform choice among unguessed letters
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn next_letter(&self, pattern: &Pattern, guessed: &BTreeSet<char>) -> Option<Letter> {
        match self {
            Self::Frequency(g) => g.next_letter(pattern, guessed),
            Self::Random(g) => g.next_letter(pattern, guessed),
        }
    }
}

impl GuesserType {
    /// Create a guesser from a name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomGuesser),
            _ => Self::Frequency(FrequencyGuesser),
        }
    }
}

/// Deterministic guesser walking letters in English frequency order
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter(&self, _pattern: &Pattern, guessed: &BTreeSet<char>) -> Option<Letter> {
        FREQUENCY_ORDER
            .iter()
            .find(|&&ch| !guessed.contains(&ch))
            .and_then(|&ch| Letter::new(ch).ok())
    }
}

/// Guesser picking uniformly among the letters not yet tried
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter(&self, _pattern: &Pattern, guessed: &BTreeSet<char>) -> Option<Letter> {
        use rand::prelude::IndexedRandom;

        let unguessed: Vec<char> = ('a'..='z').filter(|ch| !guessed.contains(ch)).collect();
        unguessed
            .choose(&mut rand::rng())
            .and_then(|&ch| Letter::new(ch).ok())
    }
}
