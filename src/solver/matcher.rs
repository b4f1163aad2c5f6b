//! Whole-word matching of candidates against a game state
//!
//! The matcher is an anchored regular expression with one atom per position:
//! a revealed letter must match exactly, and an unrevealed position accepts any
//! character except the known wrong letters. A word containing a wrong letter
//! anywhere can never be the secret, so excluding them at hidden positions is
//! enough.

use super::cache::StateKey;
use regex::Regex;

/// Compiled candidate filter for one [`StateKey`]
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    /// Compile the matcher for `key`
    ///
    /// # Errors
    /// Returns the regex error if the expression cannot be compiled, which
    /// only happens if it exceeds the regex size limits.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::solver::{PatternMatcher, StateKey};
    ///
    /// let key = StateKey::new([None, Some('A'), None], ['C']);
    /// let matcher = PatternMatcher::new(&key).unwrap();
    ///
    /// assert_eq!(matcher.as_str(), "^(?:[^C]A[^C])$");
    /// assert!(matcher.is_match("HAT"));
    /// assert!(!matcher.is_match("CAT"));
    /// assert!(!matcher.is_match("HATS"));
    /// ```
    pub fn new(key: &StateKey) -> Result<Self, regex::Error> {
        let hidden = if key.wrong_letters().is_empty() {
            ".".to_string()
        } else {
            let excluded: String = key
                .wrong_letters()
                .iter()
                .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                .collect();
            format!("[^{excluded}]")
        };

        let mut expr = String::from("^(?:");
        for slot in key.pattern() {
            match slot {
                Some(letter) => expr.push_str(&regex::escape(letter.encode_utf8(&mut [0; 4]))),
                None => expr.push_str(&hidden),
            }
        }
        expr.push_str(")$");

        Ok(Self {
            regex: Regex::new(&expr)?,
        })
    }

    /// Whether `word` is consistent with the key this matcher was built from
    #[inline]
    #[must_use]
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// The compiled expression
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
