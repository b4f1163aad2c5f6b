//! Command implementations

pub mod analyze;
pub mod play;

pub use analyze::{AnalysisResult, analyze_state, parse_state};
pub use play::{GameResult, PlayConfig, PlayReport, SetupTimings, play_words};
