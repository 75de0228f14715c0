//! Turn-counting observer that logs what it sees.

use tracing::info;

use crate::describe::TextRepresentable;
use crate::games::{DiceGame, SnakesAndLadders};

use super::GameObserver;

/// Counts turns and logs each notification.
#[derive(Clone, Debug, Default)]
pub struct DiceGameTracker {
    turns: u32,
    games: u32,
    announcement: Option<String>,
}

impl DiceGameTracker {
    /// Create a tracker that has seen no games.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns in the current (or last finished) game.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Games started while this tracker was watching.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.games
    }

    /// What the tracker announced when the last game started, if the game
    /// was one it recognises.
    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }
}

impl GameObserver for DiceGameTracker {
    fn notify_start(&mut self, game: &dyn DiceGame) {
        self.turns = 0;
        self.games = self.games.saturating_add(1);
        self.announcement = (game.title() == SnakesAndLadders::TITLE)
            .then(|| format!("Started a new game of {}", SnakesAndLadders::TITLE));
        if let Some(announcement) = &self.announcement {
            info!(final_square = game.final_square(), "{announcement}");
        }
        info!("The game is using {}", game.die().textual_description().to_lowercase());
    }

    fn notify_turn(&mut self, game: &dyn DiceGame, roll: u32) {
        self.turns = self.turns.saturating_add(1);
        info!(turn = self.turns, roll, square = game.square(), "rolled a {roll}");
    }

    fn notify_end(&mut self, game: &dyn DiceGame) {
        info!(turns = self.turns, square = game.square(), "the game lasted for {} turns", self.turns);
    }
}
