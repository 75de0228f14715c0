//! Snakes and Ladders.
//!
//! A single token races from square 0 to the final square:
//! - Each turn rolls the die once
//! - Landing exactly on the final square wins
//! - Overshooting the final square wastes the turn
//! - Landing on a ladder or snake applies its jump once (no chaining)

mod board;
mod game;

pub use board::{JumpTable, MAX_FINAL_SQUARE};
pub use game::{GameEnd, PlayOutcome, SnakesAndLadders};
