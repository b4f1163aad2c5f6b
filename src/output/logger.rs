//! Console logging through `env_logger`
//!
//! Everything goes to stdout so transcript lines (`info`) interleave with the
//! score lines. The level comes from the `-v` count, not from `RUST_LOG`.

use colored::Colorize;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::io::Write;

/// Logger builder for `level`, formatted for game transcripts
#[must_use]
pub fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "{} {}", "error:".red().bold(), record.args()),
            Level::Warn => writeln!(buf, "{} {}", "warning:".yellow().bold(), record.args()),
            Level::Info => writeln!(buf, "  {}", record.args()),
            Level::Debug | Level::Trace => {
                writeln!(buf, "    {}", record.args().to_string().bright_black())
            }
        });
    builder
}

/// Install the console logger with the given maximum level
///
/// # Errors
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    builder(level).try_init()
}
