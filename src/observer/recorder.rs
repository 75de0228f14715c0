//! Observer that records every notification.
//!
//! Recorded logs compare with `==` and serialize with serde, which makes them
//! the natural way to check that two plays unfolded identically.

use serde::{Deserialize, Serialize};

use crate::games::DiceGame;

use super::GameObserver;

/// One notification, with the game state at the time it was sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Play started.
    Started {
        title: String,
        sides: u32,
        final_square: usize,
    },
    /// A turn started with `roll` while the token was on `square`.
    Turn { roll: u32, square: usize },
    /// Play ended with the token on `square`.
    Ended { square: usize },
}

/// Records notifications in the order they arrive.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Vec<GameEvent>,
}

impl EventRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Die values from every recorded turn.
    #[must_use]
    pub fn rolls(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::Turn { roll, .. } => Some(*roll),
                _ => None,
            })
            .collect()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Consume the recorder, keeping its log.
    #[must_use]
    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }
}

impl GameObserver for EventRecorder {
    fn notify_start(&mut self, game: &dyn DiceGame) {
        self.events.push(GameEvent::Started {
            title: game.title().to_string(),
            sides: game.die().sides(),
            final_square: game.final_square(),
        });
    }

    fn notify_turn(&mut self, game: &dyn DiceGame, roll: u32) {
        self.events.push(GameEvent::Turn {
            roll,
            square: game.square(),
        });
    }

    fn notify_end(&mut self, game: &dyn DiceGame) {
        self.events.push(GameEvent::Ended {
            square: game.square(),
        });
    }
}
