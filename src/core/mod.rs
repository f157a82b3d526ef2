//! Core domain types for evil hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letter;
mod pattern;

pub use letter::{Letter, LetterError};
pub use pattern::{PLACEHOLDER, Pattern};
