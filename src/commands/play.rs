//! Play command
//!
//! Plays a list of secret words sequentially with one strategy and collects
//! the scores.

use crate::core::GameStatus;
use crate::error::Result;
use crate::solver::{CacheStats, GameRunner, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Settings shared by every game of a run
pub struct PlayConfig {
    pub max_wrong_guesses: usize,
    pub show_progress: bool,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(max_wrong_guesses: usize) -> Self {
        Self {
            max_wrong_guesses,
            show_progress: false,
        }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Result of playing a single word
#[derive(Debug, Clone)]
pub struct GameResult {
    pub word: String,
    pub score: u32,
    pub status: GameStatus,
    pub duration: Duration,
}

/// Preparation phases measured before the first game
#[derive(Debug, Clone, Copy, Default)]
pub struct SetupTimings {
    pub load_dictionary: Duration,
    pub build_strategy: Duration,
}

/// Outcome of a whole run
#[derive(Debug)]
pub struct PlayReport {
    pub results: Vec<GameResult>,
    pub total_time: Duration,
    pub cache: Option<CacheStats>,
}

impl PlayReport {
    /// Mean score over all games, or 0 when nothing was played
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let total: u32 = self.results.iter().map(|r| r.score).sum();
        f64::from(total) / self.results.len() as f64
    }

    #[must_use]
    pub fn wins(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == GameStatus::Won)
            .count()
    }

    #[must_use]
    pub fn losses(&self) -> usize {
        self.results.len() - self.wins()
    }

    /// Mean wall-clock time per game
    #[must_use]
    pub fn mean_game_time(&self) -> Duration {
        match u32::try_from(self.results.len()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.total_time / n,
        }
    }
}

/// Play every word in `words` and report the scores
///
/// `on_result` is called after each game, in order, so callers can print
/// progress as it happens.
///
/// # Errors
///
/// Stops at the first game whose strategy or guesses fail.
pub fn play_words<S: Strategy>(
    runner: &mut GameRunner<S>,
    words: &[String],
    config: &PlayConfig,
    mut on_result: impl FnMut(&GameResult),
) -> Result<PlayReport> {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(words.len());
    let total_start = Instant::now();

    for word in words {
        let start = Instant::now();
        let game = runner.play(word, config.max_wrong_guesses)?;

        let result = GameResult {
            word: game.secret_word(),
            score: game.score(),
            status: game.status(),
            duration: start.elapsed(),
        };
        on_result(&result);
        results.push(result);

        let total: u32 = results.iter().map(|r| r.score).sum();
        pb.set_message(format!(
            "Avg: {:.2}",
            f64::from(total) / results.len() as f64
        ));
        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(PlayReport {
        results,
        total_time: total_start.elapsed(),
        cache: runner.strategy().cache_stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOrder;
    use crate::solver::{GuessingStrategy, PopularLetterStrategy, StrategyConfig};
    use crate::wordlists::words_from_slice;

    fn dictionary() -> Vec<String> {
        words_from_slice(&[
            "cot", "tag", "dog", "log", "factual", "natural", "actuals", "apple",
        ])
    }

    #[test]
    fn plays_every_word_in_order() {
        let strategy = GuessingStrategy::new(dictionary(), StrategyConfig::default());
        let mut runner = GameRunner::new(strategy);
        let words = words_from_slice(&["factual", "apple", "cot"]);

        let mut seen = Vec::new();
        let report = play_words(&mut runner, &words, &PlayConfig::default(), |r| {
            seen.push(r.word.clone());
        })
        .unwrap();

        assert_eq!(seen, vec!["FACTUAL", "APPLE", "COT"]);
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.wins(), 3);
        assert_eq!(report.losses(), 0);
    }

    #[test]
    fn average_of_known_scores() {
        let strategy = GuessingStrategy::new(["ABCD", "EFGH"], StrategyConfig::default());
        let mut runner = GameRunner::new(strategy);
        let words = words_from_slice(&["abcd", "efgh"]);

        let report = play_words(&mut runner, &words, &PlayConfig::default(), |_| {}).unwrap();

        // ABCD is guessed outright, EFGH after one wrong word.
        assert_eq!(report.results[0].score, 0);
        assert_eq!(report.results[1].score, 1);
        assert!((report.average_score() - 0.5).abs() < f64::EPSILON);
        assert!(report.cache.is_some());
    }

    #[test]
    fn losses_score_the_penalty() {
        let mut runner = GameRunner::new(PopularLetterStrategy::new(LetterOrder::english()));
        let words = words_from_slice(&["jazz"]);

        let report = play_words(&mut runner, &words, &PlayConfig::new(0), |_| {}).unwrap();

        assert_eq!(report.losses(), 1);
        assert_eq!(report.results[0].score, 25);
        assert!(report.cache.is_none());
    }

    #[test]
    fn empty_run_has_zero_average() {
        let strategy = GuessingStrategy::new(dictionary(), StrategyConfig::default());
        let mut runner = GameRunner::new(strategy);

        let report = play_words(&mut runner, &[], &PlayConfig::default(), |_| {}).unwrap();

        assert!(report.results.is_empty());
        assert!(report.average_score().abs() < f64::EPSILON);
        assert_eq!(report.mean_game_time(), Duration::ZERO);
    }
}
