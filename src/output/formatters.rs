//! Formatting utilities for terminal output

use crate::commands::GameResult;
use log::LevelFilter;
use std::time::Duration;

/// Per-word score line, e.g. `FACTUAL = 3`
#[must_use]
pub fn score_line(result: &GameResult) -> String {
    format!("{} = {}", result.word, result.score)
}

/// Final summary line
#[must_use]
pub fn average_line(average: f64) -> String {
    format!("average score: {average:.3}")
}

/// Human-readable duration with a unit suited to its size
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3} s")
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else {
        format!("{:.1} µs", secs * 1e6)
    }
}

/// Log level for a `-v` count
///
/// 0-1 only warn, 2 shows the per-turn transcript, 3 or more adds strategy
/// internals.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 | 1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
