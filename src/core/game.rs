//! Hangman game state
//!
//! A [`GameState`] owns one secret word and records every guess made against
//! it. It is the only source of truth for scoring and win/loss detection.

use super::letters::letter_index;
use crate::error::GameError;
use std::collections::BTreeSet;
use std::fmt;

/// Marker for a position in the secret word that has not been revealed yet
pub const MYSTERY: char = '-';

/// Score assigned to any lost game
pub const LOSS_PENALTY: u32 = 25;

/// Current status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Every letter of the secret word is revealed
    Won,
    /// More wrong guesses were made than allowed
    Lost,
    /// Neither won nor lost yet
    KeepGuessing,
}

impl GameStatus {
    /// Whether the game has finished
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::KeepGuessing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "GAME_WON",
            Self::Lost => "GAME_LOST",
            Self::KeepGuessing => "KEEP_GUESSING",
        })
    }
}

/// State of a single game of Hangman
///
/// Letters and words are normalized to uppercase. The secret word is never
/// changed after construction; the revealed pattern and guess sets only change
/// through [`GameState::guess_letter`] and [`GameState::guess_word`].
///
/// # Examples
/// ```
/// use hangman_solver::core::{GameState, GameStatus};
///
/// let mut game = GameState::new("factual", 4);
/// assert_eq!(game.guess_letter('a').unwrap(), "-A---A-");
/// assert_eq!(game.guess_word("natural").unwrap(), "-A---A-");
/// assert_eq!(game.guess_word("factual").unwrap(), "FACTUAL");
/// assert_eq!(game.status(), GameStatus::Won);
/// assert_eq!(game.score(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Vec<char>,
    revealed: Vec<Option<char>>,
    max_wrong_guesses: usize,
    correct_letters: BTreeSet<char>,
    wrong_letters: BTreeSet<char>,
    wrong_words: BTreeSet<String>,
}

impl GameState {
    /// Start a game for `secret_word` allowing `max_wrong_guesses` mistakes
    ///
    /// The game is lost once the number of wrong guesses exceeds the maximum.
    #[must_use]
    pub fn new(secret_word: &str, max_wrong_guesses: usize) -> Self {
        let secret: Vec<char> = secret_word.to_uppercase().chars().collect();
        let revealed = vec![None; secret.len()];

        Self {
            secret,
            revealed,
            max_wrong_guesses,
            correct_letters: BTreeSet::new(),
            wrong_letters: BTreeSet::new(),
            wrong_words: BTreeSet::new(),
        }
    }

    /// Guess a single letter and return the revealed pattern
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the game is already won or lost
    /// - [`GameError::InvalidLetter`] if `letter` is not in `A..=Z` after
    ///   uppercasing
    pub fn guess_letter(&mut self, letter: char) -> Result<String, GameError> {
        self.ensure_can_keep_guessing()?;
        let letter = letter.to_ascii_uppercase();
        if letter_index(letter).is_none() {
            return Err(GameError::InvalidLetter(letter));
        }

        let mut good_guess = false;
        for (slot, &ch) in self.revealed.iter_mut().zip(&self.secret) {
            if ch == letter {
                *slot = Some(ch);
                good_guess = true;
            }
        }

        if good_guess {
            self.correct_letters.insert(letter);
        } else {
            self.wrong_letters.insert(letter);
        }

        Ok(self.guessed_so_far())
    }

    /// Guess the whole word and return the revealed pattern
    ///
    /// # Errors
    /// Returns [`GameError::GameOver`] if the game is already won or lost.
    pub fn guess_word(&mut self, word: &str) -> Result<String, GameError> {
        self.ensure_can_keep_guessing()?;
        let word = word.to_uppercase();

        if word.chars().eq(self.secret.iter().copied()) {
            self.revealed = self.secret.iter().copied().map(Some).collect();
        } else {
            self.wrong_words.insert(word);
        }

        Ok(self.guessed_so_far())
    }

    /// Score of the game so far (lower is better)
    ///
    /// A lost game always scores [`LOSS_PENALTY`]. Otherwise every wrong guess
    /// and every correctly guessed letter costs one point.
    #[must_use]
    pub fn score(&self) -> u32 {
        if self.status() == GameStatus::Lost {
            LOSS_PENALTY
        } else {
            (self.num_wrong_guesses_made() + self.correct_letters.len()) as u32
        }
    }

    /// Current game status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_fully_revealed() {
            GameStatus::Won
        } else if self.num_wrong_guesses_made() > self.max_wrong_guesses {
            GameStatus::Lost
        } else {
            GameStatus::KeepGuessing
        }
    }

    fn is_fully_revealed(&self) -> bool {
        self.revealed
            .iter()
            .zip(&self.secret)
            .all(|(shown, &actual)| *shown == Some(actual))
    }

    fn ensure_can_keep_guessing(&self) -> Result<(), GameError> {
        match self.status() {
            GameStatus::KeepGuessing => Ok(()),
            status => Err(GameError::GameOver { status }),
        }
    }

    #[inline]
    #[must_use]
    pub fn num_wrong_guesses_made(&self) -> usize {
        self.wrong_letters.len() + self.wrong_words.len()
    }

    /// Wrong guesses that can still be made without losing
    #[inline]
    #[must_use]
    pub fn num_wrong_guesses_remaining(&self) -> usize {
        self.max_wrong_guesses
            .saturating_sub(self.num_wrong_guesses_made())
    }

    #[inline]
    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    /// Revealed pattern with [`MYSTERY`] in place of unknown letters
    #[must_use]
    pub fn guessed_so_far(&self) -> String {
        self.revealed.iter().map(|c| c.unwrap_or(MYSTERY)).collect()
    }

    /// Revealed pattern, one entry per position of the secret word
    #[inline]
    #[must_use]
    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    #[must_use]
    pub fn secret_word(&self) -> String {
        self.secret.iter().collect()
    }

    #[inline]
    #[must_use]
    pub const fn correct_letters(&self) -> &BTreeSet<char> {
        &self.correct_letters
    }

    #[inline]
    #[must_use]
    pub const fn wrong_letters(&self) -> &BTreeSet<char> {
        &self.wrong_letters
    }

    #[inline]
    #[must_use]
    pub const fn wrong_words(&self) -> &BTreeSet<String> {
        &self.wrong_words
    }

    /// Whether `letter` was already guessed, correctly or not
    #[must_use]
    pub fn has_guessed_letter(&self, letter: char) -> bool {
        self.correct_letters.contains(&letter) || self.wrong_letters.contains(&letter)
    }

    /// All letters guessed so far, sorted
    #[must_use]
    pub fn all_guessed_letters(&self) -> BTreeSet<char> {
        self.correct_letters
            .union(&self.wrong_letters)
            .copied()
            .collect()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; score={}; status={}",
            self.guessed_so_far(),
            self.score(),
            self.status()
        )
    }
}
