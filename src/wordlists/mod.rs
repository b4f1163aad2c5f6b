//! Word lists for Hangman
//!
//! Dictionaries and secret-word lists are plain text, one word per line.

pub mod loader;

pub use loader::{load_from_file, parse_words, sample_words, words_from_slice};
