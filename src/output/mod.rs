//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_simulation_result};
