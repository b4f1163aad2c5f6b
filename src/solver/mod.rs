//! Hangman guessing strategies
//!
//! Candidate narrowing, the fingerprint cache, and the game loop.

pub mod cache;
mod engine;
mod matcher;
pub mod strategy;

pub use cache::{CacheStats, StateKey, WordSetCache};
pub use engine::{GameRunner, run};
pub use matcher::PatternMatcher;
pub use strategy::{
    DEFAULT_PRESEED_THRESHOLD, GuessingStrategy, PopularLetterStrategy, Strategy, StrategyConfig,
    StrategyType,
};
