//! Error types shared across the crate

use crate::core::GameStatus;
use std::path::PathBuf;
use thiserror::Error;

/// Precondition failures raised by [`GameState`](crate::core::GameState)
///
/// These only occur when driver code misuses a game; a correct runner never
/// triggers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("more guesses not allowed, game is already {status}")]
    GameOver { status: GameStatus },
    #[error("{0:?} is not a letter from A to Z")]
    InvalidLetter(char),
}

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("cannot read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("invalid pattern {0:?}: use letters and '-' for unrevealed positions")]
    InvalidPattern(String),
    #[error("cannot compile candidate matcher")]
    Pattern(#[from] regex::Error),
    #[error("no letter or word left to guess for {pattern}")]
    Exhausted { pattern: String },
}

/// Result alias used by the library
pub type Result<T, E = HangmanError> = std::result::Result<T, E>;
