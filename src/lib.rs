//! Hangman Solver
//!
//! Plays Hangman automatically: narrows the dictionary to the words still
//! consistent with the game, guesses the letter found in the most of them, and
//! switches to whole-word guesses once they fit in the remaining budget.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::GameStatus;
//! use hangman_solver::solver::{GameRunner, GuessingStrategy, StrategyConfig};
//!
//! let dictionary = ["factual", "natural", "actuals", "cat", "dog"];
//! let strategy = GuessingStrategy::new(dictionary, StrategyConfig::default());
//! let mut runner = GameRunner::new(strategy);
//!
//! let game = runner.play("factual", 5).unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//! println!("FACTUAL = {}", game.score());
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Guessing strategies and the game loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
