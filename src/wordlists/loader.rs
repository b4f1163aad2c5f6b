//! Word list loading utilities
//!
//! Provides functions to read dictionaries and game word lists from files,
//! normalize literal words, and draw random samples.

use crate::error::{HangmanError, Result};
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand::rngs::StdRng;
use std::fs;
use std::path::Path;

/// Split text into words: one per line, trimmed and upper-cased
///
/// Blank lines are skipped. No other validation is done, so words may
/// contain apostrophes, digits or non-ASCII letters.
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::parse_words;
///
/// let words = parse_words("cat\n\n  Dog \r\nit's\n");
/// assert_eq!(words, vec!["CAT", "DOG", "IT'S"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`HangmanError::Read`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HangmanError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_words(&content))
}

/// Normalize literal words the same way file contents are
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<String> {
    slice
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Pick `count` distinct entries of `words` at random
///
/// With a `seed` the selection is reproducible. Asking for more words than
/// available returns all of them in random order.
#[must_use]
pub fn sample_words(words: &[String], count: usize, seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    words.choose_multiple(&mut rng, count).cloned().collect()
}
