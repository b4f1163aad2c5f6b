//! Terminal output formatting
//!
//! Score lines, summaries, timing reports and console logging.

pub mod display;
pub mod formatters;
pub mod logger;

pub use display::{
    print_analysis_result, print_game_result, print_game_status, print_summary,
    print_timing_report,
};
