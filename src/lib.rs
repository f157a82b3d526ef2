//! Evil Hangman
//!
//! A hangman engine that cheats: it never commits to a secret word, instead
//! keeping alive the largest set of words consistent with every guess made so
//! far. The player is always facing the most ambiguous position their guesses
//! allow.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::Letter;
//! use evil_hangman::engine::Engine;
//!
//! let dictionary = ["happy", "hello", "world"];
//! let mut engine = Engine::new(dictionary, 5, 10).unwrap();
//!
//! // 'o' splits the words; the engine keeps the bigger half
//! let revealed = engine.record(Letter::new('o').unwrap()).unwrap();
//! assert_eq!(revealed, 1);
//! assert_eq!(engine.pattern().unwrap().to_string(), "- o - - -");
//! assert_eq!(engine.candidate_words().len(), 2);
//! ```

// Core domain types
pub mod core;

// Decision engine
pub mod engine;

// Guesser strategies
pub mod player;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
