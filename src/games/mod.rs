//! Dice-driven board games.
//!
//! Games implement [`DiceGame`] so observers can inspect them without
//! knowing the concrete type.

pub mod snakes;

pub use snakes::{GameEnd, JumpTable, PlayOutcome, SnakesAndLadders, MAX_FINAL_SQUARE};

use crate::core::Die;

/// Read-only view of a dice game, handed to observers.
pub trait DiceGame {
    /// Human-readable name of the game.
    fn title(&self) -> &str;

    /// The die every turn is rolled with.
    fn die(&self) -> &Die;

    /// Current square.
    fn square(&self) -> usize;

    /// The winning square.
    fn final_square(&self) -> usize;
}
