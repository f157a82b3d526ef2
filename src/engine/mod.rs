//! Evil hangman decision engine
//!
//! The engine owns the candidate word set and never commits to a secret word:
//! every recorded guess re-partitions the candidates by the pattern they would
//! display and keeps the largest group alive.

mod game;
pub mod partition;

pub use game::{Engine, EngineError};
