//! # snakes-ladders
//!
//! A deterministic engine for dice-driven board games, built around
//! Snakes and Ladders.
//!
//! ## Design Principles
//!
//! 1. **Pluggable Randomness**: Dice only see the `RandomSource` trait.
//!    Swap the classic LCG for a ChaCha stream or a scripted sequence.
//!
//! 2. **Validate Up Front**: Bad side counts, boards and jumps are rejected
//!    when a game is built. Playing never fails.
//!
//! 3. **Watch, Don't Touch**: Observers are notified at game start, each
//!    turn and game end, and only ever see a read-only view of the game.
//!
//! ## Modules
//!
//! - `core`: Random sources, dice, configuration, errors
//! - `games`: The `DiceGame` view and Snakes and Ladders itself
//! - `observer`: Lifecycle notifications, tracker and recorder
//! - `describe`: Textual descriptions of dice, boards and collections

pub mod core;
pub mod games;
pub mod observer;
pub mod describe;

// Re-export commonly used types
pub use crate::core::{
    random_bool, BoardConfig, ChaChaSource, ConfigError, Die, DieConfig, GeneratorConfig, Jump,
    LcgParams, LinearCongruentialGenerator, RandomSource, SequenceSource,
};

pub use crate::games::{DiceGame, GameEnd, JumpTable, PlayOutcome, SnakesAndLadders};

pub use crate::observer::{DiceGameTracker, EventRecorder, GameEvent, GameObserver, NoopObserver};

pub use crate::describe::{PrettyTextRepresentable, TextRepresentable};
