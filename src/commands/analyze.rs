//! State analysis command
//!
//! Shows what the frequency strategy knows about a given revealed pattern and
//! set of wrong letters.

use crate::core::{MYSTERY, letter_index};
use crate::error::{GameError, HangmanError, Result};
use crate::solver::{GuessingStrategy, StateKey, Strategy};

/// Candidates shown in the analysis
pub const SAMPLE_SIZE: usize = 20;

/// Result of analyzing a game state
pub struct AnalysisResult {
    pub key: StateKey,
    pub total_candidates: usize,
    pub sample: Vec<String>,
    /// Unguessed letters found in at least one candidate, best first
    pub ranked_letters: Vec<(char, usize)>,
}

/// Parse a revealed pattern such as `"-A--A-"` and wrong letters such as
/// `"xe"` into a [`StateKey`]
///
/// `_` is accepted as an alternative unrevealed marker.
///
/// # Errors
///
/// Returns [`HangmanError::InvalidPattern`] if the pattern contains anything
/// other than letters and markers, and [`GameError::InvalidLetter`] for a
/// wrong letter outside `A..=Z`.
pub fn parse_state(pattern: &str, wrong: &str) -> Result<StateKey> {
    let pattern = pattern.trim().to_uppercase();
    if pattern.is_empty() {
        return Err(HangmanError::InvalidPattern(pattern));
    }

    let mut slots = Vec::with_capacity(pattern.len());
    for ch in pattern.chars() {
        match ch {
            MYSTERY | '_' => slots.push(None),
            c if letter_index(c).is_some() => slots.push(Some(c)),
            _ => return Err(HangmanError::InvalidPattern(pattern)),
        }
    }

    let mut wrong_letters = Vec::new();
    for ch in wrong.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        let letter = ch.to_ascii_uppercase();
        if letter_index(letter).is_none() {
            return Err(GameError::InvalidLetter(letter).into());
        }
        wrong_letters.push(letter);
    }

    Ok(StateKey::new(slots, wrong_letters))
}

/// Narrow the dictionary to `key` and rank the letters still worth guessing
///
/// # Errors
///
/// Returns an error if the candidate matcher cannot be compiled.
pub fn analyze_state(strategy: &mut GuessingStrategy, key: StateKey) -> Result<AnalysisResult> {
    strategy.new_game();
    let candidates = strategy.candidates_for(&key)?;

    let guessed = |c: char| key.wrong_letters().contains(&c) || key.pattern().contains(&Some(c));
    let ranked_letters = candidates
        .ranked_letters(&strategy.config().tie_break)
        .into_iter()
        .filter(|&c| !guessed(c))
        .map(|c| (c, candidates.frequency(c)))
        .filter(|&(_, count)| count > 0)
        .collect();

    Ok(AnalysisResult {
        total_candidates: candidates.size(),
        sample: candidates.words().iter().take(SAMPLE_SIZE).cloned().collect(),
        ranked_letters,
        key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrategyConfig;

    #[test]
    fn parse_state_accepts_markers_and_lowercase() {
        let key = parse_state("-a_", "x, e").unwrap();
        assert_eq!(key.pattern(), &[None, Some('A'), None]);
        assert_eq!(key.wrong_letters(), &['E', 'X']);
    }

    #[test]
    fn parse_state_rejects_bad_input() {
        assert!(matches!(
            parse_state("C4T", ""),
            Err(HangmanError::InvalidPattern(_))
        ));
        assert!(matches!(
            parse_state("", ""),
            Err(HangmanError::InvalidPattern(_))
        ));
        assert!(matches!(
            parse_state("---", "7"),
            Err(HangmanError::Game(GameError::InvalidLetter('7')))
        ));
    }

    #[test]
    fn analysis_lists_candidates_and_letters() {
        let mut strategy = GuessingStrategy::new(
            ["cat", "hat", "cot", "dog", "apple"],
            StrategyConfig::default(),
        );
        let key = parse_state("-A-", "").unwrap();

        let result = analyze_state(&mut strategy, key).unwrap();

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.sample, vec!["CAT", "HAT"]);
        // A is already revealed; T is in both, C and H in one each.
        assert_eq!(result.ranked_letters, vec![('T', 2), ('H', 1), ('C', 1)]);
    }

    #[test]
    fn analysis_of_unknown_length_is_empty() {
        let mut strategy = GuessingStrategy::new(["cat"], StrategyConfig::default());
        let key = parse_state("------------", "").unwrap();

        let result = analyze_state(&mut strategy, key).unwrap();

        assert_eq!(result.total_candidates, 0);
        assert!(result.sample.is_empty());
        assert!(result.ranked_letters.is_empty());
    }
}
