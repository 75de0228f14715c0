//! Construction-time configuration errors.
//!
//! Every check happens when a die, generator or board is built. Once a game
//! exists, playing it cannot fail: overshoots and plain squares are ordinary
//! turns, not errors.

use thiserror::Error;

/// A configuration that cannot produce a playable game.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a die needs at least one side, got {sides}")]
    InvalidSides { sides: u32 },

    #[error("the final square must be between 1 and the board size limit, got {final_square}")]
    InvalidFinalSquare { final_square: usize },

    #[error("jump on square {square} is past the final square {final_square}")]
    JumpOutOfBounds { square: usize, final_square: usize },

    #[error("jump of {delta} on square {square} lands on {target}, outside 0..={final_square}")]
    JumpTargetOutOfRange {
        square: usize,
        delta: i64,
        target: i64,
        final_square: usize,
    },

    #[error("invalid generator parameters: {0}")]
    InvalidGenerator(String),

    #[error("turn limit must be at least 1")]
    InvalidTurnLimit,

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
