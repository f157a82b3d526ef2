//! Guesser strategies for automated play
//!
//! Letter-selection strategies used by the simulation command to play against
//! the engine.

mod strategy;

pub use strategy::{FrequencyGuesser, Guesser, GuesserType, RandomGuesser};
