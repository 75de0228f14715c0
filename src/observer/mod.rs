//! Game lifecycle observers.
//!
//! A game notifies its observer at three points:
//! - once when play starts
//! - once per turn, with the die value just rolled
//! - once when play ends
//!
//! Observers only watch. They receive a read-only [`DiceGame`] view and cannot
//! change how the game unfolds.
//!
//! ## Key Components
//!
//! - [`GameObserver`]: The notification trait (every callback defaults to a no-op)
//! - [`NoopObserver`]: Ignores everything
//! - [`DiceGameTracker`]: Counts turns and logs each notification
//! - [`EventRecorder`]: Keeps every notification as a [`GameEvent`]
//!
//! ## Example Usage
//!
//! ```
//! use snakes_ladders::core::BoardConfig;
//! use snakes_ladders::games::SnakesAndLadders;
//! use snakes_ladders::observer::DiceGameTracker;
//!
//! let mut game = SnakesAndLadders::from_config(&BoardConfig::classic()).unwrap();
//! let mut tracker = DiceGameTracker::new();
//!
//! let outcome = game.play_with(&mut tracker);
//! assert_eq!(tracker.turns(), outcome.turns);
//! ```

mod recorder;
mod tracker;

pub use recorder::{EventRecorder, GameEvent};
pub use tracker::DiceGameTracker;

use crate::games::DiceGame;

/// Receives lifecycle notifications from a dice game.
///
/// Implement only the callbacks you care about.
pub trait GameObserver {
    /// Play has started. The game is on square 0.
    fn notify_start(&mut self, _game: &dyn DiceGame) {}

    /// A turn has started and the die came up `roll`. The game still shows
    /// the square the turn starts from.
    fn notify_turn(&mut self, _game: &dyn DiceGame, _roll: u32) {}

    /// Play has ended, by a win or by the turn limit.
    fn notify_end(&mut self, _game: &dyn DiceGame) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
