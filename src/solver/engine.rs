//! Game loop driving a strategy

use super::strategy::Strategy;
use crate::core::{GameState, GameStatus};
use crate::error::Result;
use log::info;

/// Play `game` to the end with `strategy` and return the final score
///
/// Each turn asks the strategy for a guess and applies it. The strategy is
/// reset with [`Strategy::new_game`] first.
///
/// # Errors
/// Propagates strategy failures and any precondition failure raised by the
/// game when a guess is applied.
pub fn run<S: Strategy + ?Sized>(game: &mut GameState, strategy: &mut S) -> Result<u32> {
    strategy.new_game();
    info!("new game: {game}");

    let mut turn = 0;
    while game.status() == GameStatus::KeepGuessing {
        turn += 1;
        let guess = strategy.next_guess(game)?;
        guess.make_guess(game)?;
        info!("turn {turn}: {guess} => {game}");
    }

    Ok(game.score())
}

/// Plays games sequentially with one long-lived strategy
///
/// Reusing the runner keeps whatever the strategy has cached between games.
pub struct GameRunner<S: Strategy> {
    strategy: S,
}

impl<S: Strategy> GameRunner<S> {
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Play an existing game to the end
    ///
    /// # Errors
    /// See [`run`].
    pub fn run(&mut self, game: &mut GameState) -> Result<u32> {
        run(game, &mut self.strategy)
    }

    /// Start a game for `secret_word`, play it, and return the finished state
    ///
    /// # Errors
    /// See [`run`].
    pub fn play(&mut self, secret_word: &str, max_wrong_guesses: usize) -> Result<GameState> {
        let mut game = GameState::new(secret_word, max_wrong_guesses);
        self.run(&mut game)?;
        Ok(game)
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}
