//! Engine state and guess recording
//!
//! An [`Engine`] holds the candidate words, the remaining-guess budget, the
//! guessed letters, and the display pattern. It is constructed once per game
//! and mutated exactly once per accepted guess; callers detect game-over by
//! observing a zero budget or a fully revealed pattern.

use super::partition::{largest_group, partition};
use crate::core::{Letter, Pattern};
use std::collections::BTreeSet;
use std::fmt;

/// Error type for engine construction and guess recording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Constructor given a word length of zero
    ZeroLength,
    /// Pattern queried while no candidate words remain
    EmptyCandidates,
    /// Guess recorded with no guesses left in the budget
    OutOfGuesses,
    /// Guess recorded while no candidate words remain
    NoCandidates,
    /// Letter was guessed before
    DuplicateGuess(char),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "word length must be at least 1"),
            Self::EmptyCandidates => write!(f, "no candidate words remain"),
            Self::OutOfGuesses => write!(f, "no guesses left"),
            Self::NoCandidates => {
                write!(f, "cannot record a guess with no candidate words remaining")
            }
            Self::DuplicateGuess(ch) => write!(f, "letter '{ch}' was already guessed"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Evil hangman game state
///
/// The engine is adversarial: it never commits to a secret word. Each recorded
/// guess partitions the candidates by the pattern they would display and keeps
/// whichever group is largest, so the answer stays as ambiguous as the guesses
/// allow.
#[derive(Debug, Clone)]
pub struct Engine {
    candidates: BTreeSet<String>,
    guesses_remaining: usize,
    guessed: BTreeSet<Letter>,
    pattern: Pattern,
}

impl Engine {
    /// Create a new engine from a raw dictionary
    ///
    /// Keeps only words of exactly `length` characters, collapsing duplicates.
    /// An empty filtered set is not a construction error; emptiness surfaces
    /// when the pattern is queried or a guess is recorded.
    ///
    /// # Errors
    /// Returns [`EngineError::ZeroLength`] if `length` is zero.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::engine::Engine;
    ///
    /// let engine = Engine::new(["happy", "hello", "world", "ox"], 5, 10).unwrap();
    /// assert_eq!(engine.candidate_words().len(), 3);
    /// assert_eq!(engine.guesses_remaining(), 10);
    /// ```
    pub fn new<I, S>(dictionary: I, length: usize, max_guesses: usize) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if length < 1 {
            return Err(EngineError::ZeroLength);
        }

        let candidates: BTreeSet<String> = dictionary
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref();
                (word.chars().count() == length).then(|| word.to_string())
            })
            .collect();

        Ok(Self {
            candidates,
            guesses_remaining: max_guesses,
            guessed: BTreeSet::new(),
            pattern: Pattern::hidden(length),
        })
    }

    /// Get an independent copy of the words still considered
    #[must_use]
    pub fn candidate_words(&self) -> BTreeSet<String> {
        self.candidates.clone()
    }

    /// Get the number of guesses left in the budget
    #[inline]
    #[must_use]
    pub const fn guesses_remaining(&self) -> usize {
        self.guesses_remaining
    }

    /// Get an independent, ascending copy of the letters guessed so far
    #[must_use]
    pub fn guessed_letters(&self) -> BTreeSet<char> {
        self.guessed.iter().map(|letter| letter.as_char()).collect()
    }

    /// Get the current display pattern
    ///
    /// # Errors
    /// Returns [`EngineError::EmptyCandidates`] if no candidate words remain.
    pub fn pattern(&self) -> Result<&Pattern, EngineError> {
        if self.candidates.is_empty() {
            return Err(EngineError::EmptyCandidates);
        }
        Ok(&self.pattern)
    }

    /// Record a guess and return how many occurrences it revealed
    ///
    /// Partitions the candidates by the pattern each would display with
    /// `guess` revealed, keeps the largest group (ties resolve to the
    /// lexicographically smallest pattern), and installs that group's pattern
    /// as the new display. A guess that reveals nothing costs one unit of the
    /// budget; a guess that reveals at least one slot is free.
    ///
    /// # Errors
    /// - [`EngineError::OutOfGuesses`] if the budget is exhausted.
    /// - [`EngineError::NoCandidates`] if no candidate words remain.
    /// - [`EngineError::DuplicateGuess`] if `guess` was recorded before.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Letter;
    /// use evil_hangman::engine::Engine;
    ///
    /// let mut engine = Engine::new(["happy", "hello", "world"], 5, 10).unwrap();
    /// let revealed = engine.record(Letter::new('o').unwrap()).unwrap();
    ///
    /// assert_eq!(revealed, 1);
    /// assert_eq!(engine.pattern().unwrap().to_string(), "- o - - -");
    /// ```
    pub fn record(&mut self, guess: Letter) -> Result<usize, EngineError> {
        if self.guesses_remaining < 1 {
            return Err(EngineError::OutOfGuesses);
        }
        if self.candidates.is_empty() {
            return Err(EngineError::NoCandidates);
        }
        if !self.guessed.insert(guess) {
            return Err(EngineError::DuplicateGuess(guess.as_char()));
        }

        let groups = partition(&self.candidates, &self.pattern, guess);
        // Every candidate maps to some key, so a non-empty candidate set
        // always yields a group.
        let (key, words) = largest_group(groups).ok_or(EngineError::NoCandidates)?;
        self.candidates = words;
        self.pattern = key;

        let occurrences = self.pattern.count_of(guess);
        if occurrences == 0 {
            self.guesses_remaining -= 1;
        }

        Ok(occurrences)
    }

    /// Preview how a guess would split the current candidates
    ///
    /// Returns every group's pattern and size, sorted by descending size with
    /// ties in key order; the first entry is the group [`record`] would keep.
    /// The engine is not mutated.
    ///
    /// [`record`]: Engine::record
    #[must_use]
    pub fn partition_preview(&self, letter: Letter) -> Vec<(Pattern, usize)> {
        let groups = partition(&self.candidates, &self.pattern, letter);

        let mut sizes: Vec<(Pattern, usize)> = groups
            .into_iter()
            .map(|(key, words)| (key, words.len()))
            .collect();
        sizes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    /// The classic four-letter teaching dictionary
    fn four_letter_words() -> Vec<&'static str> {
        vec![
            "ally", "beta", "cool", "deal", "else", "flew", "good", "hope", "ibex",
        ]
    }

    #[test]
    fn constructor_accepts_valid_arguments() {
        let words = ["happy", "hello", "world"];
        assert!(Engine::new(words, 5, 10).is_ok());
        assert!(Engine::new(words, 1, 10).is_ok());
        assert!(Engine::new(words, 5, 0).is_ok());
    }

    #[test]
    fn constructor_rejects_zero_length() {
        let words = ["happy", "hello", "world"];
        assert!(matches!(
            Engine::new(words, 0, 10),
            Err(EngineError::ZeroLength)
        ));
    }

    #[test]
    fn constructor_filters_by_length_and_collapses_duplicates() {
        let words = ["happy", "hello", "ox", "toolong", "hello", "world"];
        let engine = Engine::new(words, 5, 10).unwrap();

        let candidates = engine.candidate_words();
        assert_eq!(candidates.len(), 3);
        assert!(candidates.contains("happy"));
        assert!(candidates.contains("hello"));
        assert!(candidates.contains("world"));
    }

    #[test]
    fn constructor_tolerates_empty_filtered_set() {
        let engine = Engine::new(["happy"], 9, 10).unwrap();
        assert!(engine.candidate_words().is_empty());
        assert_eq!(engine.pattern(), Err(EngineError::EmptyCandidates));
    }

    #[test]
    fn candidate_words_is_an_independent_copy() {
        let mut engine = Engine::new(["happy", "hello", "world"], 5, 10).unwrap();

        let mut copy = engine.candidate_words();
        copy.insert("third".to_string());
        copy.remove("hello");

        // Engine state is untouched by mutating the copy
        assert_eq!(engine.candidate_words().len(), 3);

        let revealed = engine.record(letter('o')).unwrap();
        assert_eq!(revealed, 1);
    }

    #[test]
    fn initial_pattern_is_all_placeholders() {
        let engine = Engine::new(["happy", "hello", "world"], 5, 10).unwrap();
        assert_eq!(engine.pattern().unwrap().to_string(), "- - - - -");
    }

    #[test]
    fn guesses_remaining_drops_only_on_misses() {
        let mut engine = Engine::new(["happy", "hello", "world"], 5, 10).unwrap();
        assert_eq!(engine.guesses_remaining(), 10);

        engine.record(letter('x')).unwrap();
        engine.record(letter('z')).unwrap();
        assert_eq!(engine.guesses_remaining(), 8);

        engine.record(letter('o')).unwrap();
        assert_eq!(engine.guesses_remaining(), 8);
    }

    #[test]
    fn guessed_letters_accumulate_sorted() {
        let mut engine = Engine::new(four_letter_words(), 4, 10).unwrap();

        engine.record(letter('c')).unwrap();
        engine.record(letter('a')).unwrap();
        engine.record(letter('b')).unwrap();

        let guessed: Vec<char> = engine.guessed_letters().into_iter().collect();
        assert_eq!(guessed, vec!['a', 'b', 'c']);
    }

    #[test]
    fn record_keeps_largest_group() {
        // "hello" and "world" share the key "- o - - -" (size 2), beating
        // "happy"'s unchanged key (size 1)
        let mut engine = Engine::new(["happy", "hello", "world"], 5, 10).unwrap();

        let revealed = engine.record(letter('o')).unwrap();
        assert_eq!(revealed, 1);
        assert_eq!(engine.pattern().unwrap().to_string(), "- o - - -");
        assert_eq!(engine.guesses_remaining(), 10);

        let candidates = engine.candidate_words();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.contains("hello"));
        assert!(candidates.contains("world"));
    }

    #[test]
    fn record_narrows_the_teaching_dictionary() {
        let mut engine = Engine::new(four_letter_words(), 4, 10).unwrap();

        // 'y' only appears in "ally"; dropping it keeps the other eight words
        engine.record(letter('y')).unwrap();
        let mut expected: BTreeSet<String> = four_letter_words()
            .into_iter()
            .map(ToString::to_string)
            .collect();
        expected.remove("ally");
        assert_eq!(engine.candidate_words(), expected);

        // 'g' only appears in "good"
        engine.record(letter('g')).unwrap();
        expected.remove("good");
        assert_eq!(engine.candidate_words(), expected);
    }

    #[test]
    fn record_counts_revealed_occurrences() {
        let mut engine = Engine::new(four_letter_words(), 4, 10).unwrap();

        engine.record(letter('a')).unwrap();
        engine.record(letter('o')).unwrap();
        assert_eq!(engine.record(letter('e')).unwrap(), 1);

        engine.record(letter('b')).unwrap();
        assert_eq!(engine.record(letter('l')).unwrap(), 1);
    }

    #[test]
    fn record_miss_keeps_candidates_intact() {
        let mut engine = Engine::new(["happy", "hello", "world"], 5, 10).unwrap();
        let before = engine.candidate_words();

        let revealed = engine.record(letter('z')).unwrap();
        assert_eq!(revealed, 0);
        assert_eq!(engine.candidate_words(), before);
        assert_eq!(engine.guesses_remaining(), 9);
        assert_eq!(engine.pattern().unwrap().to_string(), "- - - - -");
    }

    #[test]
    fn record_rejects_duplicate_guess() {
        let mut engine = Engine::new(["aabb", "ccdd"], 4, 10).unwrap();

        engine.record(letter('a')).unwrap();
        assert_eq!(
            engine.record(letter('a')),
            Err(EngineError::DuplicateGuess('a'))
        );
    }

    #[test]
    fn record_rejects_exhausted_budget() {
        let mut engine = Engine::new(["happy", "hello", "world"], 5, 1).unwrap();

        // One miss consumes the whole budget
        assert_eq!(engine.record(letter('z')).unwrap(), 0);
        assert_eq!(engine.guesses_remaining(), 0);
        assert_eq!(engine.record(letter('a')), Err(EngineError::OutOfGuesses));
    }

    #[test]
    fn record_rejects_empty_candidate_set() {
        let mut engine = Engine::new(["happy"], 7, 10).unwrap();
        assert_eq!(engine.record(letter('a')), Err(EngineError::NoCandidates));
    }

    #[test]
    fn record_tie_breaks_to_smallest_pattern() {
        // "ab" -> "a -" and "ba" -> "- a" are both singleton groups;
        // the smaller key "- a" wins
        let mut engine = Engine::new(["ab", "ba"], 2, 10).unwrap();

        let revealed = engine.record(letter('a')).unwrap();
        assert_eq!(revealed, 1);
        assert_eq!(engine.pattern().unwrap().to_string(), "- a");
        assert_eq!(engine.candidate_words(), ["ba".to_string()].into());
    }

    #[test]
    fn record_handles_single_candidate() {
        let mut engine = Engine::new(["hello"], 5, 10).unwrap();

        assert_eq!(engine.record(letter('l')).unwrap(), 2);
        assert_eq!(engine.pattern().unwrap().to_string(), "- - l l -");
        assert_eq!(engine.candidate_words().len(), 1);
    }

    #[test]
    fn remaining_candidates_always_match_pattern() {
        let mut engine = Engine::new(four_letter_words(), 4, 26).unwrap();

        for ch in ['e', 'o', 'a', 'l', 's'] {
            engine.record(letter(ch)).unwrap();
            let pattern = engine.pattern().unwrap().clone();
            for word in engine.candidate_words() {
                assert!(
                    pattern.matches(&word),
                    "{word} contradicts pattern {pattern}"
                );
            }
        }
    }

    #[test]
    fn no_guessed_letter_hides_in_a_candidate() {
        let mut engine = Engine::new(four_letter_words(), 4, 26).unwrap();

        for ch in ['e', 'a', 't', 'l'] {
            engine.record(letter(ch)).unwrap();
        }

        let pattern = engine.pattern().unwrap().clone();
        for word in engine.candidate_words() {
            for guessed in engine.guessed_letters() {
                let rerevealed = pattern.reveal(&word, letter(guessed));
                assert_eq!(
                    rerevealed, pattern,
                    "{word} holds '{guessed}' at an unrevealed position"
                );
            }
        }
    }

    #[test]
    fn record_selection_is_maximal() {
        let mut engine = Engine::new(four_letter_words(), 4, 26).unwrap();

        for ch in ['e', 'o', 'a'] {
            let preview = engine.partition_preview(letter(ch));
            let best_size = preview.first().map(|(_, size)| *size).unwrap();

            engine.record(letter(ch)).unwrap();
            let kept = engine.candidate_words().len();

            assert_eq!(kept, best_size);
            assert!(preview.iter().all(|(_, size)| *size <= kept));
        }
    }

    #[test]
    fn partition_preview_sorted_and_complete() {
        let engine = Engine::new(four_letter_words(), 4, 10).unwrap();

        let preview = engine.partition_preview(letter('o'));
        let total: usize = preview.iter().map(|(_, size)| size).sum();
        assert_eq!(total, engine.candidate_words().len());

        for pair in preview.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
