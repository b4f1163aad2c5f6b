//! A single move in a game of Hangman

use super::GameState;
use crate::error::GameError;
use std::fmt;

/// A guess that can be applied to a [`GameState`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    /// Guess one letter
    Letter(char),
    /// Guess the whole secret word
    Word(String),
}

impl Guess {
    /// Apply this guess to `game` and return the revealed pattern
    ///
    /// # Errors
    /// Propagates the precondition failures of [`GameState::guess_letter`] and
    /// [`GameState::guess_word`].
    pub fn make_guess(&self, game: &mut GameState) -> Result<String, GameError> {
        match self {
            Self::Letter(letter) => game.guess_letter(*letter),
            Self::Word(word) => game.guess_word(word),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "letter {letter}"),
            Self::Word(word) => write!(f, "word {word}"),
        }
    }
}
