//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_letter};
pub use play::run_play;
pub use simulate::{GameOutcome, SimulationConfig, SimulationResult, run_simulation};
