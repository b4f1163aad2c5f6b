//! Candidate words and their letter-presence histogram

use super::letters::{LetterOrder, alphabet};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// A set of candidate words together with how many of them contain each letter
///
/// `letter_frequency` counts words, not occurrences: `"TOOT"` adds one to `T`
/// and one to `O`. The histogram is only valid after [`WordSet::updated`] has
/// run on the current words, so call it after every change made through
/// [`WordSet::words_mut`].
///
/// Cloning produces an independent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeSet<String>,
    letter_frequency: FxHashMap<char, usize>,
}

impl WordSet {
    /// An empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `words` and compute its histogram
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::WordSet;
    ///
    /// let set = WordSet::from_words(["CAT", "HAT"]);
    /// assert_eq!(set.size(), 2);
    /// assert_eq!(set.frequency('A'), 2);
    /// assert_eq!(set.frequency('C'), 1);
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self {
            words: words.into_iter().map(Into::into).collect(),
            letter_frequency: FxHashMap::default(),
        };
        set.updated();
        set
    }

    /// Recompute the letter-presence histogram from the current words
    pub fn updated(&mut self) {
        let mut frequency: FxHashMap<char, usize> = FxHashMap::default();
        let mut distinct: Vec<char> = Vec::new();

        for word in &self.words {
            distinct.clear();
            distinct.extend(word.chars());
            distinct.sort_unstable();
            distinct.dedup();
            for &ch in &distinct {
                *frequency.entry(ch).or_insert(0) += 1;
            }
        }

        self.letter_frequency = frequency;
    }

    /// A new set holding the words that satisfy `keep`
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(&str) -> bool) -> Self {
        Self::from_words(self.words.iter().filter(|w| keep(w.as_str())).cloned())
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Direct access to the words; call [`WordSet::updated`] afterwards
    #[inline]
    pub fn words_mut(&mut self) -> &mut BTreeSet<String> {
        &mut self.words
    }

    #[inline]
    #[must_use]
    pub const fn letter_frequency(&self) -> &FxHashMap<char, usize> {
        &self.letter_frequency
    }

    /// Number of words containing `letter` at least once
    #[inline]
    #[must_use]
    pub fn frequency(&self, letter: char) -> usize {
        self.letter_frequency.get(&letter).copied().unwrap_or(0)
    }

    /// All 26 letters, most frequent first, ties broken by `tie_break`
    #[must_use]
    pub fn ranked_letters(&self, tie_break: &LetterOrder) -> Vec<char> {
        let mut letters: Vec<char> = alphabet().collect();
        letters.sort_by_key(|&c| (std::cmp::Reverse(self.frequency(c)), tie_break.rank(c)));
        letters
    }

    /// The highest ranked letter for which `guessed` is false
    #[must_use]
    pub fn best_letter(
        &self,
        tie_break: &LetterOrder,
        mut guessed: impl FnMut(char) -> bool,
    ) -> Option<char> {
        self.ranked_letters(tie_break)
            .into_iter()
            .find(|&c| !guessed(c))
    }
}

impl fmt::Display for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(&char, &usize)> = self.letter_frequency.iter().collect();
        counts.sort_unstable();

        write!(f, "{:?} {{", self.words)?;
        for (i, (letter, count)) in counts.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{letter}: {count}")?;
        }
        f.write_str("}")
    }
}
