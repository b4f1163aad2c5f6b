//! The guessable alphabet and fixed letter orderings
//!
//! Only the 26 uppercase ASCII letters can be guessed. A [`LetterOrder`] is an
//! immutable permutation of them, used for tie-breaking and fallback guessing.

use std::fmt;

/// Number of guessable letters
pub const ALPHABET_LEN: usize = 26;

/// Letters ordered by how common they are in English text
pub const ENGLISH_POPULARITY: &str = "ETAOINSRHDLUCMFYWGPBVKXQJZ";

/// Index of a guessable letter (`'A'` = 0), or `None` for anything else
#[inline]
#[must_use]
pub const fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some(letter as usize - 'A' as usize)
    } else {
        None
    }
}

/// Iterate the alphabet from `'A'` to `'Z'`
pub fn alphabet() -> impl Iterator<Item = char> {
    'A'..='Z'
}

/// A fixed priority order over the 26 letters
///
/// Earlier letters have higher priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterOrder {
    letters: [char; ALPHABET_LEN],
    ranks: [u8; ALPHABET_LEN],
}

impl LetterOrder {
    /// Build an order from a string containing every letter exactly once
    ///
    /// Lowercase input is accepted. Returns `None` if the string is not a
    /// permutation of the alphabet.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::LetterOrder;
    ///
    /// let order = LetterOrder::from_letters("zyxwvutsrqponmlkjihgfedcba").unwrap();
    /// assert_eq!(order, LetterOrder::reverse_alphabetical());
    ///
    /// assert!(LetterOrder::from_letters("ABC").is_none());
    /// ```
    #[must_use]
    pub fn from_letters(order: &str) -> Option<Self> {
        let mut letters = ['A'; ALPHABET_LEN];
        let mut ranks = [u8::MAX; ALPHABET_LEN];
        let mut count = 0;

        for letter in order.chars().map(|c| c.to_ascii_uppercase()) {
            let index = letter_index(letter)?;
            if count == ALPHABET_LEN || ranks[index] != u8::MAX {
                return None;
            }
            letters[count] = letter;
            ranks[index] = count as u8;
            count += 1;
        }

        (count == ALPHABET_LEN).then_some(Self { letters, ranks })
    }

    /// `A` first, `Z` last
    #[must_use]
    pub fn alphabetical() -> Self {
        Self::from_letters("ABCDEFGHIJKLMNOPQRSTUVWXYZ").expect("preset is a permutation")
    }

    /// `Z` first, `A` last
    #[must_use]
    pub fn reverse_alphabetical() -> Self {
        Self::from_letters("ZYXWVUTSRQPONMLKJIHGFEDCBA").expect("preset is a permutation")
    }

    /// Most common English letters first
    #[must_use]
    pub fn english() -> Self {
        Self::from_letters(ENGLISH_POPULARITY).expect("preset is a permutation")
    }

    /// Position of `letter` in this order (0 = highest priority)
    #[inline]
    #[must_use]
    pub fn rank(&self, letter: char) -> Option<usize> {
        letter_index(letter).map(|i| usize::from(self.ranks[i]))
    }

    /// Letters from highest to lowest priority
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl Default for LetterOrder {
    fn default() -> Self {
        Self::reverse_alphabetical()
    }
}

impl fmt::Display for LetterOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
