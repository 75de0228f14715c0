//! Snakes and Ladders game loop.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, info, warn};

use crate::core::{BoardConfig, ConfigError, Die, DEFAULT_TURN_LIMIT};
use crate::games::DiceGame;
use crate::observer::{GameObserver, NoopObserver};

use super::board::JumpTable;

/// How a game finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    /// The token reached the final square.
    Won,
    /// The turn limit ran out first.
    TurnLimit,
}

/// Summary of one `play()` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub end: GameEnd,
    /// Dice rolled, including wasted ones.
    pub turns: u32,
    /// Rolls discarded for overshooting the final square.
    pub overshoots: u32,
    /// Ladders climbed.
    pub ladders: u32,
    /// Snakes slid down.
    pub snakes: u32,
    /// Square the token finished on.
    pub final_position: usize,
}

impl PlayOutcome {
    /// Did the game end with a win?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.end == GameEnd::Won
    }
}

/// A single-token game of Snakes and Ladders.
///
/// The board and die are fixed at construction. Each `play()` starts over
/// from square 0, so the same game can be played repeatedly.
///
/// ## Observers
///
/// At most one observer can be attached with [`set_observer`]. Without one,
/// notifications go nowhere. [`play_with`] lends an observer for a single
/// game instead, which leaves the caller free to inspect it afterwards.
///
/// [`set_observer`]: SnakesAndLadders::set_observer
/// [`play_with`]: SnakesAndLadders::play_with
pub struct SnakesAndLadders {
    board: JumpTable,
    die: Die,
    square: usize,
    turn_limit: Option<u32>,
    observer: Option<Box<dyn GameObserver>>,
}

impl SnakesAndLadders {
    /// Title reported through [`DiceGame::title`].
    pub const TITLE: &'static str = "Snakes and Ladders";

    /// Create a game with the default turn limit.
    #[must_use]
    pub fn new(board: JumpTable, die: Die) -> Self {
        Self {
            board,
            die,
            square: 0,
            turn_limit: Some(DEFAULT_TURN_LIMIT),
            observer: None,
        }
    }

    /// Build and validate a game from configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        let board = JumpTable::new(config.final_square, &config.jumps)?;
        let die = config.die.build()?;
        Self::new(board, die).with_turn_limit(config.turn_limit)
    }

    /// Set the maximum number of turns per game. `None` removes the limit.
    pub fn with_turn_limit(mut self, limit: Option<u32>) -> Result<Self, ConfigError> {
        if limit == Some(0) {
            return Err(ConfigError::InvalidTurnLimit);
        }
        self.turn_limit = limit;
        Ok(self)
    }

    /// The jump table.
    #[must_use]
    pub fn board(&self) -> &JumpTable {
        &self.board
    }

    /// Mutable access to the die, e.g. to reseed it between games.
    pub fn die_mut(&mut self) -> &mut Die {
        &mut self.die
    }

    /// Current turn limit.
    #[must_use]
    pub fn turn_limit(&self) -> Option<u32> {
        self.turn_limit
    }

    /// Attach an observer, returning the one it replaces.
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) -> Option<Box<dyn GameObserver>> {
        self.observer.replace(observer)
    }

    /// Detach the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn GameObserver>> {
        self.observer.take()
    }

    /// Is an observer attached?
    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Play one game from square 0, notifying the attached observer.
    pub fn play(&mut self) -> PlayOutcome {
        let mut observer = self.observer.take();
        let outcome = match observer.as_deref_mut() {
            Some(observer) => self.play_with(observer),
            None => self.play_with(&mut NoopObserver),
        };
        self.observer = observer;
        outcome
    }

    /// Play one game from square 0, notifying `observer` instead of the
    /// attached one.
    pub fn play_with(&mut self, observer: &mut dyn GameObserver) -> PlayOutcome {
        let final_square = self.board.final_square();
        self.square = 0;

        let mut turns = 0u32;
        let mut overshoots = 0u32;
        let mut ladders = 0u32;
        let mut snakes = 0u32;

        info!(final_square, sides = self.die.sides(), "game started");
        observer.notify_start(&*self);

        let end = loop {
            debug_assert!(self.square <= final_square);

            if self.square == final_square {
                break GameEnd::Won;
            }
            if self.turn_limit.is_some_and(|limit| turns >= limit) {
                warn!(turns, square = self.square, "turn limit reached before a win");
                break GameEnd::TurnLimit;
            }

            let roll = self.die.roll();
            turns = turns.saturating_add(1);
            observer.notify_turn(&*self, roll);

            let target = self.square + roll as usize;
            match target.cmp(&final_square) {
                Ordering::Equal => {
                    debug!(turn = turns, roll, from = self.square, "landed on the final square");
                    self.square = target;
                }
                Ordering::Greater => {
                    debug!(turn = turns, roll, square = self.square, "overshoot, turn wasted");
                    overshoots = overshoots.saturating_add(1);
                }
                Ordering::Less => {
                    let landed = self.board.land(target);
                    match landed.cmp(&target) {
                        Ordering::Greater => ladders = ladders.saturating_add(1),
                        Ordering::Less => snakes = snakes.saturating_add(1),
                        Ordering::Equal => {}
                    }
                    debug!(turn = turns, roll, from = self.square, target, landed, "moved");
                    self.square = landed;
                }
            }
        };

        info!(turns, square = self.square, ?end, "game ended");
        observer.notify_end(&*self);

        PlayOutcome {
            end,
            turns,
            overshoots,
            ladders,
            snakes,
            final_position: self.square,
        }
    }
}

impl DiceGame for SnakesAndLadders {
    fn title(&self) -> &str {
        Self::TITLE
    }

    fn die(&self) -> &Die {
        &self.die
    }

    fn square(&self) -> usize {
        self.square
    }

    fn final_square(&self) -> usize {
        self.board.final_square()
    }
}

impl fmt::Debug for SnakesAndLadders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnakesAndLadders")
            .field("board", &self.board)
            .field("die", &self.die)
            .field("square", &self.square)
            .field("turn_limit", &self.turn_limit)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
