//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::cache::{CacheStats, StateKey, WordSetCache};
use super::matcher::PatternMatcher;
use crate::core::{GameState, Guess, LetterOrder, WordSet};
use crate::error::{HangmanError, Result};
use crate::wordlists::loader::load_from_file;
use log::{debug, trace};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Buckets larger than this get their best first letter pre-computed
pub const DEFAULT_PRESEED_THRESHOLD: usize = 10;

/// A strategy for choosing the next guess in a game
pub trait Strategy {
    /// Choose the next guess for `game`
    ///
    /// # Errors
    /// Returns [`HangmanError::Exhausted`] if there is nothing left to guess,
    /// or any error raised while narrowing the candidates.
    fn next_guess(&mut self, game: &GameState) -> Result<Guess>;

    /// Forget per-game state; called before the first guess of every game
    fn new_game(&mut self) {}

    /// Cache usage, for strategies that keep one
    fn cache_stats(&self) -> Option<CacheStats> {
        None
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Candidate narrowing with letter-presence ranking (default)
    Frequency(GuessingStrategy),
    /// Fixed popularity order, never guesses words
    Popular(PopularLetterStrategy),
}

impl Strategy for StrategyType {
    fn next_guess(&mut self, game: &GameState) -> Result<Guess> {
        match self {
            Self::Frequency(s) => s.next_guess(game),
            Self::Popular(s) => s.next_guess(game),
        }
    }

    fn new_game(&mut self) {
        match self {
            Self::Frequency(s) => s.new_game(),
            Self::Popular(s) => s.new_game(),
        }
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        match self {
            Self::Frequency(s) => s.cache_stats(),
            Self::Popular(s) => s.cache_stats(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "popular". Defaults to frequency if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name<I, S>(name: &str, dictionary: I, config: StrategyConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match name {
            "popular" => Self::Popular(PopularLetterStrategy::new(config.fallback_order)),
            _ => Self::Frequency(GuessingStrategy::new(dictionary, config)),
        }
    }
}

/// Settings for [`GuessingStrategy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyConfig {
    /// Order used to break ties between equally frequent letters
    pub tie_break: LetterOrder,
    /// Letter order used when no candidate word is left
    pub fallback_order: LetterOrder,
    /// Pre-seed first-letter cache entries for buckets above this size
    pub preseed_threshold: Option<usize>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            tie_break: LetterOrder::reverse_alphabetical(),
            fallback_order: LetterOrder::english(),
            preseed_threshold: Some(DEFAULT_PRESEED_THRESHOLD),
        }
    }
}

/// Candidate-narrowing strategy
///
/// Keeps every dictionary word still consistent with the game, guesses the
/// letter contained in the most candidates, and switches to guessing whole
/// words once the untried candidates fit in the remaining wrong-guess budget.
///
/// Narrowed candidate sets are cached by [`StateKey`] and reused by later
/// games that reach the same state.
///
/// # Examples
/// ```
/// use hangman_solver::core::{GameState, Guess};
/// use hangman_solver::solver::{GuessingStrategy, Strategy, StrategyConfig};
///
/// let mut strategy = GuessingStrategy::new(["abcd"], StrategyConfig::default());
/// let game = GameState::new("ABCD", 5);
///
/// strategy.new_game();
/// assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Word("ABCD".into()));
/// ```
#[derive(Debug)]
pub struct GuessingStrategy {
    config: StrategyConfig,
    cache: WordSetCache,
    possible: Option<Arc<WordSet>>,
}

impl GuessingStrategy {
    /// Build the strategy from dictionary words
    ///
    /// Words are trimmed and upper-cased, blank entries are skipped, and the
    /// rest are bucketed by length.
    pub fn new<I, S>(dictionary: I, config: StrategyConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for word in dictionary {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            let word = word.to_uppercase();
            buckets.entry(word.chars().count()).or_default().push(word);
        }

        let mut cache = WordSetCache::new();
        for (len, words) in buckets {
            cache.insert(StateKey::initial(len), WordSet::from_words(words));
        }
        debug!("dictionary bucketed into {} word lengths", cache.len());

        let mut strategy = Self {
            config,
            cache,
            possible: None,
        };
        if let Some(threshold) = strategy.config.preseed_threshold {
            strategy.preseed(threshold);
        }
        strategy
    }

    /// Read the dictionary at `path` and build the strategy
    ///
    /// # Errors
    /// Returns [`HangmanError::Read`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P, config: StrategyConfig) -> Result<Self> {
        let words = load_from_file(path)?;
        Ok(Self::new(words, config))
    }

    /// Cache the residual set after the best first letter misses, for every
    /// length bucket with more than `threshold` words
    fn preseed(&mut self, threshold: usize) {
        let buckets: Vec<(StateKey, Arc<WordSet>)> = self
            .cache
            .iter()
            .filter(|(_, set)| set.size() > threshold)
            .map(|(key, set)| (key.clone(), Arc::clone(set)))
            .collect();

        let tie_break = &self.config.tie_break;
        let seeded: Vec<(StateKey, WordSet)> = buckets
            .par_iter()
            .filter_map(|(key, set)| {
                let letter = set.best_letter(tie_break, |_| false)?;
                let residual = set.filtered(|w| !w.contains(letter));
                Some((key.with_wrong_letter(letter), residual))
            })
            .collect();

        for (key, set) in seeded {
            trace!("pre-seeded {key} with {} words", set.size());
            self.cache.insert(key, set);
        }
    }

    /// Candidates consistent with the current state of `game`
    ///
    /// # Errors
    /// Returns [`HangmanError::Pattern`] if the matcher cannot be compiled.
    pub fn candidates(&mut self, game: &GameState) -> Result<Arc<WordSet>> {
        self.candidates_for(&StateKey::from_game(game))
    }

    /// Candidates consistent with `key`
    ///
    /// A cached set is reused when present. Otherwise the previous candidates
    /// of this game (or the length bucket, on the first turn) are filtered and
    /// the result is cached under `key`.
    ///
    /// # Errors
    /// Returns [`HangmanError::Pattern`] if the matcher cannot be compiled.
    pub fn candidates_for(&mut self, key: &StateKey) -> Result<Arc<WordSet>> {
        let set = if let Some(hit) = self.cache.lookup(key) {
            trace!("cache hit for {key}: {} candidates", hit.size());
            hit
        } else {
            let source = match &self.possible {
                Some(previous) => Arc::clone(previous),
                None => self
                    .cache
                    .peek(&StateKey::initial(key.word_len()))
                    .unwrap_or_default(),
            };
            let matcher = PatternMatcher::new(key)?;
            let narrowed = source.filtered(|w| matcher.is_match(w));
            debug!(
                "narrowed {key}: {} -> {} candidates",
                source.size(),
                narrowed.size()
            );
            self.cache.insert(key.clone(), narrowed)
        };

        self.possible = Some(Arc::clone(&set));
        Ok(set)
    }

    /// Candidates chosen on the most recent turn of the current game
    #[must_use]
    pub fn possible(&self) -> Option<&WordSet> {
        self.possible.as_deref()
    }

    #[must_use]
    pub const fn config(&self) -> &StrategyConfig {
        &self.config
    }

    #[must_use]
    pub const fn cache(&self) -> &WordSetCache {
        &self.cache
    }
}

impl Strategy for GuessingStrategy {
    fn next_guess(&mut self, game: &GameState) -> Result<Guess> {
        let candidates = self.candidates(game)?;
        let mut untried = candidates
            .words()
            .iter()
            .filter(|w| !game.wrong_words().contains(*w));
        let untried_count = untried.clone().count();

        if untried_count == 0 {
            // Secret is not in the dictionary; fall back to plain popularity.
            trace!("no candidates left for {}", game.guessed_so_far());
            return self
                .config
                .fallback_order
                .iter()
                .find(|&c| !game.has_guessed_letter(c))
                .map(Guess::Letter)
                .ok_or_else(|| exhausted(game));
        }

        if untried_count <= game.num_wrong_guesses_remaining() {
            debug!(
                "{untried_count} candidates within budget of {}, guessing words",
                game.num_wrong_guesses_remaining()
            );
            return untried
                .next()
                .map(|w| Guess::Word(w.clone()))
                .ok_or_else(|| exhausted(game));
        }

        let letter =
            candidates.best_letter(&self.config.tie_break, |c| game.has_guessed_letter(c));

        match letter {
            Some(letter) => Ok(Guess::Letter(letter)),
            // All 26 letters are spent; only whole words remain.
            None => untried
                .next()
                .map(|w| Guess::Word(w.clone()))
                .ok_or_else(|| exhausted(game)),
        }
    }

    fn new_game(&mut self) {
        self.possible = None;
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        Some(self.cache.stats())
    }
}

/// Baseline strategy guessing letters in a fixed order
///
/// Ignores the dictionary entirely and never guesses whole words.
#[derive(Debug, Clone, Default)]
pub struct PopularLetterStrategy {
    order: LetterOrder,
}

impl PopularLetterStrategy {
    #[must_use]
    pub const fn new(order: LetterOrder) -> Self {
        Self { order }
    }
}

impl Strategy for PopularLetterStrategy {
    fn next_guess(&mut self, game: &GameState) -> Result<Guess> {
        self.order
            .iter()
            .find(|&c| !game.has_guessed_letter(c))
            .map(Guess::Letter)
            .ok_or_else(|| exhausted(game))
    }
}

fn exhausted(game: &GameState) -> HangmanError {
    HangmanError::Exhausted {
        pattern: game.guessed_so_far(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;

    fn no_preseed() -> StrategyConfig {
        StrategyConfig {
            preseed_threshold: None,
            ..StrategyConfig::default()
        }
    }

    fn sample_dictionary() -> Vec<&'static str> {
        vec![
            "cat", "bat", "hat", "mat", "rat", "sat", "pat", "vat", "fat", "oat", "eat", "cot",
            "dog", "cog", "log", "fog", "hog", "bog", "jog", "tag", "bag", "rag", "apple",
            "factual", "natural", "",
        ]
    }

    #[test]
    fn dictionary_is_bucketed_by_length() {
        let strategy = GuessingStrategy::new(sample_dictionary(), no_preseed());
        let cache = strategy.cache();

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.peek(&StateKey::initial(3)).unwrap().size(), 22);
        assert_eq!(cache.peek(&StateKey::initial(5)).unwrap().size(), 1);
        assert_eq!(cache.peek(&StateKey::initial(7)).unwrap().size(), 2);
    }

    #[test]
    fn dictionary_is_upper_cased() {
        let strategy = GuessingStrategy::new(["  Cat ", "cAT"], no_preseed());
        let bucket = strategy.cache().peek(&StateKey::initial(3)).unwrap();
        assert_eq!(bucket.words().iter().collect::<Vec<_>>(), vec!["CAT"]);
    }

    #[test]
    fn preseed_caches_residual_of_best_first_letter() {
        let strategy = GuessingStrategy::new(sample_dictionary(), StrategyConfig::default());
        let bucket = strategy.cache().peek(&StateKey::initial(3)).unwrap();
        let best = bucket
            .best_letter(&LetterOrder::reverse_alphabetical(), |_| false)
            .unwrap();
        assert_eq!(best, 'A');

        let residual = strategy
            .cache()
            .peek(&StateKey::initial(3).with_wrong_letter('A'))
            .unwrap();
        assert!(residual.words().iter().all(|w| !w.contains('A')));
        assert_eq!(residual.size(), 8);

        // Small buckets are left alone.
        assert!(
            !strategy
                .cache()
                .contains(&StateKey::initial(5).with_wrong_letter('P'))
        );
    }

    #[test]
    fn unreadable_dictionary_is_an_error() {
        let err = GuessingStrategy::from_file("no/such/dictionary.txt", no_preseed()).unwrap_err();
        assert!(matches!(err, HangmanError::Read { .. }));
    }

    #[test]
    fn single_candidate_is_guessed_as_word() {
        let mut strategy = GuessingStrategy::new(["ABCD"], no_preseed());
        let game = GameState::new("ABCD", 5);
        strategy.new_game();

        assert_eq!(
            strategy.next_guess(&game).unwrap(),
            Guess::Word("ABCD".to_string())
        );
    }

    #[test]
    fn letter_mode_picks_most_common_letter() {
        let mut strategy = GuessingStrategy::new(sample_dictionary(), no_preseed());
        let game = GameState::new("DOG", 5);
        strategy.new_game();

        // 'A' is in 14 of the 22 three-letter words.
        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('A'));
    }

    #[test]
    fn tie_break_is_reverse_alphabetical() {
        // Zero budget keeps the strategy in letter mode.
        let mut strategy = GuessingStrategy::new(["CAT", "BAT"], no_preseed());
        let mut game = GameState::new("CAT", 0);
        strategy.new_game();

        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('T'));
        game.guess_letter('T').unwrap();
        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('A'));
        game.guess_letter('A').unwrap();
        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('C'));
    }

    #[test]
    fn tie_break_follows_configured_order() {
        let config = StrategyConfig {
            tie_break: LetterOrder::alphabetical(),
            ..no_preseed()
        };
        let mut strategy = GuessingStrategy::new(["CAT", "BAT"], config);
        let game = GameState::new("CAT", 0);
        strategy.new_game();

        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('A'));
    }

    #[test]
    fn candidates_narrow_with_reveals_and_misses() {
        let mut strategy = GuessingStrategy::new(sample_dictionary(), no_preseed());
        let mut game = GameState::new("DOG", 5);
        strategy.new_game();

        game.guess_letter('A').unwrap();
        let after_miss = strategy.candidates(&game).unwrap();
        assert_eq!(after_miss.size(), 8);

        game.guess_letter('G').unwrap();
        let after_hit = strategy.candidates(&game).unwrap();
        let words: Vec<&str> = after_hit.words().iter().map(String::as_str).collect();
        assert_eq!(words, vec!["BOG", "COG", "DOG", "FOG", "HOG", "JOG", "LOG"]);
        assert_eq!(strategy.possible().unwrap().size(), 7);
    }

    #[test]
    fn word_mode_skips_wrong_words_in_order() {
        let mut strategy = GuessingStrategy::new(["BAT", "CAT", "HAT"], no_preseed());
        let mut game = GameState::new("HAT", 5);
        strategy.new_game();

        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Word("BAT".into()));
        game.guess_word("BAT").unwrap();
        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Word("CAT".into()));
        game.guess_word("CAT").unwrap();
        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Word("HAT".into()));
    }

    #[test]
    fn uninformative_letters_beat_impossible_words() {
        // Both candidates put a revealed letter at the hidden position, so
        // neither can be the secret; a fresh letter is still worth a guess.
        let mut strategy = GuessingStrategy::new(["AAB", "ABB"], no_preseed());
        let mut game = GameState::new("AXB", 1);
        strategy.new_game();
        game.guess_letter('A').unwrap();
        game.guess_letter('B').unwrap();

        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('Z'));
    }

    #[test]
    fn word_mode_needs_budget() {
        let mut strategy = GuessingStrategy::new(["BAT", "CAT", "HAT"], no_preseed());
        let game = GameState::new("HAT", 2);
        strategy.new_game();

        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('T'));
    }

    #[test]
    fn unknown_word_falls_back_to_popular_letters() {
        let mut strategy = GuessingStrategy::new(["CAT", "BAT"], no_preseed());
        let mut game = GameState::new("QQQ", 30);
        strategy.new_game();

        // Missing 'T' rules out every candidate, so the English order takes over.
        game.guess_letter('T').unwrap();
        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('E'));
        game.guess_letter('E').unwrap();
        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('A'));
    }

    #[test]
    fn exhausted_alphabet_is_an_error() {
        let mut strategy = GuessingStrategy::new(["CAT"], no_preseed());
        let mut game = GameState::new("---", 30);
        strategy.new_game();
        for letter in 'A'..='Z' {
            game.guess_letter(letter).unwrap();
        }

        assert!(matches!(
            strategy.next_guess(&game),
            Err(HangmanError::Exhausted { .. })
        ));
        assert_eq!(game.status(), GameStatus::KeepGuessing);
    }

    #[test]
    fn identical_states_share_cached_sets() {
        let mut strategy = GuessingStrategy::new(sample_dictionary(), no_preseed());

        let mut first = GameState::new("DOG", 5);
        strategy.new_game();
        first.guess_letter('O').unwrap();
        let from_first = strategy.candidates(&first).unwrap();

        let mut second = GameState::new("LOG", 5);
        strategy.new_game();
        second.guess_letter('O').unwrap();
        let from_second = strategy.candidates(&second).unwrap();

        assert_eq!(from_first.words(), from_second.words());
        assert!(Arc::ptr_eq(&from_first, &from_second));
        assert_eq!(strategy.cache_stats().unwrap().hits, 1);
    }

    #[test]
    fn new_game_clears_possible() {
        let mut strategy = GuessingStrategy::new(sample_dictionary(), no_preseed());
        let game = GameState::new("DOG", 5);
        strategy.next_guess(&game).unwrap();
        assert!(strategy.possible().is_some());

        strategy.new_game();
        assert!(strategy.possible().is_none());
    }

    #[test]
    fn popular_strategy_uses_english_order() {
        let mut strategy = PopularLetterStrategy::new(LetterOrder::english());
        let mut game = GameState::new("CAT", 5);

        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('E'));
        game.guess_letter('E').unwrap();
        assert_eq!(strategy.next_guess(&game).unwrap(), Guess::Letter('T'));
        assert!(strategy.cache_stats().is_none());
    }

    #[test]
    fn strategy_type_from_name() {
        let config = StrategyConfig::default();
        assert!(matches!(
            StrategyType::from_name("popular", ["CAT"], config.clone()),
            StrategyType::Popular(_)
        ));
        assert!(matches!(
            StrategyType::from_name("frequency", ["CAT"], config.clone()),
            StrategyType::Frequency(_)
        ));
        assert!(matches!(
            StrategyType::from_name("nonsense", ["CAT"], config),
            StrategyType::Frequency(_)
        ));
    }
}
