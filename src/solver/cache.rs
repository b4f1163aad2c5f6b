//! Fingerprint keys and the reusable candidate cache
//!
//! A [`StateKey`] captures everything a game has revealed that constrains the
//! candidates: the revealed pattern and the wrong letters. Two games that reach
//! the same key have the same candidate set, so narrowed sets are kept in a
//! [`WordSetCache`] and shared across games.

use crate::core::{GameState, MYSTERY, WordSet};
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

/// Canonical encoding of the information revealed so far
///
/// Positions are stored as `Option<char>` and wrong letters as a sorted,
/// de-duplicated list, so no separator or marker character can collide with a
/// dictionary word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    pattern: Box<[Option<char>]>,
    wrong_letters: Box<[char]>,
}

impl StateKey {
    /// Build a key; wrong letters may be given in any order
    pub fn new(
        pattern: impl IntoIterator<Item = Option<char>>,
        wrong_letters: impl IntoIterator<Item = char>,
    ) -> Self {
        let mut wrong: Vec<char> = wrong_letters.into_iter().collect();
        wrong.sort_unstable();
        wrong.dedup();

        Self {
            pattern: pattern.into_iter().collect(),
            wrong_letters: wrong.into_boxed_slice(),
        }
    }

    /// Key of a fresh game: nothing revealed, nothing wrong
    #[must_use]
    pub fn initial(word_len: usize) -> Self {
        Self::new(std::iter::repeat_n(None, word_len), std::iter::empty())
    }

    /// Key describing the current state of `game`
    #[must_use]
    pub fn from_game(game: &GameState) -> Self {
        Self::new(
            game.revealed().iter().copied(),
            game.wrong_letters().iter().copied(),
        )
    }

    /// The same key with one more wrong letter
    #[must_use]
    pub fn with_wrong_letter(&self, letter: char) -> Self {
        Self::new(
            self.pattern.iter().copied(),
            self.wrong_letters.iter().copied().chain(Some(letter)),
        )
    }

    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &[Option<char>] {
        &self.pattern
    }

    /// Wrong letters in ascending order
    #[inline]
    #[must_use]
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.pattern.len()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.pattern {
            write!(f, "{}", slot.unwrap_or(MYSTERY))?;
        }
        f.write_str(" [")?;
        for letter in &self.wrong_letters {
            write!(f, "{letter}")?;
        }
        f.write_str("]")
    }
}

/// Counters describing cache usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

/// Narrowed candidate sets keyed by game state
///
/// Values are shared behind [`Arc`] and never mutated after insertion.
#[derive(Debug, Default)]
pub struct WordSetCache {
    entries: FxHashMap<StateKey, Arc<WordSet>>,
    hits: usize,
    misses: usize,
}

impl WordSetCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the set for `key`, counting the lookup as a hit or miss
    pub fn lookup(&mut self, key: &StateKey) -> Option<Arc<WordSet>> {
        let found = self.entries.get(key).cloned();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Fetch the set for `key` without touching the counters
    #[must_use]
    pub fn peek(&self, key: &StateKey) -> Option<Arc<WordSet>> {
        self.entries.get(key).cloned()
    }

    /// Store `set` under `key` and return the shared handle
    pub fn insert(&mut self, key: StateKey, set: WordSet) -> Arc<WordSet> {
        let set = Arc::new(set);
        self.entries.insert(key, Arc::clone(&set));
        set
    }

    #[must_use]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every stored key and set, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &Arc<WordSet>)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
