//! Core building blocks: random sources, dice, configuration, errors.
//!
//! Nothing here knows about boards. Games configure these via `BoardConfig`
//! rather than constructing sources by hand.

pub mod rng;
pub mod die;
pub mod config;
pub mod error;

pub use rng::{
    random_bool, ChaChaSource, ChaChaSourceState, LcgParams, LinearCongruentialGenerator,
    RandomSource, SequenceSource,
};
pub use die::Die;
pub use config::{BoardConfig, DieConfig, GeneratorConfig, Jump, DEFAULT_TURN_LIMIT};
pub use error::ConfigError;
