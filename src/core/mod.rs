//! Core domain types for Hangman
//!
//! The game model, the guesses that act on it, and the candidate word sets
//! the strategies reason about.

mod game;
mod guess;
mod letters;
mod word_set;

pub use game::{GameState, GameStatus, LOSS_PENALTY, MYSTERY};
pub use guess::Guess;
pub use letters::{ALPHABET_LEN, ENGLISH_POPULARITY, LetterOrder, alphabet, letter_index};
pub use word_set::WordSet;
