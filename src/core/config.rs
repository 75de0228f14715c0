//! Game configuration types.
//!
//! Games are configured at construction by providing:
//! - `GeneratorConfig`: Which random source drives the die
//! - `DieConfig`: Side count plus generator
//! - `BoardConfig`: Final square, jumps, die and turn limit
//!
//! Configs are plain serde data. Nothing is validated until a die or game is
//! built from them, and building is where every `ConfigError` surfaces.

use serde::{Deserialize, Serialize};

use super::die::Die;
use super::error::ConfigError;
use super::rng::{ChaChaSource, LcgParams, LinearCongruentialGenerator, RandomSource, SequenceSource};

/// Turn limit applied when a config doesn't name one.
pub const DEFAULT_TURN_LIMIT: u32 = 10_000;

/// Which random source a die draws from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Floating-point linear congruential generator.
    Lcg(LcgParams),
    /// Seeded ChaCha8 stream.
    ChaCha { seed: u64 },
    /// Scripted values in `[0, 1)`, replayed in a loop.
    Sequence { values: Vec<f64> },
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::Lcg(LcgParams::default())
    }
}

impl GeneratorConfig {
    /// Build the configured source.
    pub fn build(&self) -> Result<Box<dyn RandomSource>, ConfigError> {
        Ok(match self {
            GeneratorConfig::Lcg(params) => Box::new(LinearCongruentialGenerator::new(*params)?),
            GeneratorConfig::ChaCha { seed } => Box::new(ChaChaSource::new(*seed)),
            GeneratorConfig::Sequence { values } => Box::new(SequenceSource::new(values.clone())?),
        })
    }
}

/// Configuration for the game's die.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DieConfig {
    /// Number of faces (at least 1).
    pub sides: u32,

    /// Random source behind the die.
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for DieConfig {
    fn default() -> Self {
        Self {
            sides: 6,
            generator: GeneratorConfig::default(),
        }
    }
}

impl DieConfig {
    /// Create a die configuration over the default generator.
    pub fn new(sides: u32) -> Self {
        Self {
            sides,
            generator: GeneratorConfig::default(),
        }
    }

    /// Set the generator.
    #[must_use]
    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Build the die.
    pub fn build(&self) -> Result<Die, ConfigError> {
        // Sides first: a bad side count is the more useful report.
        if self.sides == 0 {
            return Err(ConfigError::InvalidSides { sides: self.sides });
        }
        Die::new(self.sides, self.generator.build()?)
    }
}

/// A ladder (positive delta) or snake (negative delta) on one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jump {
    pub square: usize,
    pub delta: i64,
}

impl Jump {
    /// Create a jump.
    #[must_use]
    pub const fn new(square: usize, delta: i64) -> Self {
        Self { square, delta }
    }
}

fn default_turn_limit() -> Option<u32> {
    Some(DEFAULT_TURN_LIMIT)
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Winning square. Squares run `0..=final_square`.
    pub final_square: usize,

    /// Non-zero jumps. Squares not listed have no jump.
    #[serde(default)]
    pub jumps: Vec<Jump>,

    /// The die used for every turn.
    #[serde(default)]
    pub die: DieConfig,

    /// Maximum turns per game. `None` plays until someone wins.
    #[serde(default = "default_turn_limit")]
    pub turn_limit: Option<u32>,
}

impl BoardConfig {
    /// Create an empty board with a d6 and the default turn limit.
    pub fn new(final_square: usize) -> Self {
        Self {
            final_square,
            jumps: Vec::new(),
            die: DieConfig::default(),
            turn_limit: default_turn_limit(),
        }
    }

    /// The classic 25-square board.
    pub fn classic() -> Self {
        Self::new(25)
            .with_jump(3, 8)
            .with_jump(6, 11)
            .with_jump(9, 9)
            .with_jump(10, 2)
            .with_jump(14, -10)
            .with_jump(19, -11)
            .with_jump(22, -2)
            .with_jump(24, -8)
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a jump.
    #[must_use]
    pub fn with_jump(mut self, square: usize, delta: i64) -> Self {
        self.jumps.push(Jump::new(square, delta));
        self
    }

    /// Set the die.
    #[must_use]
    pub fn with_die(mut self, die: DieConfig) -> Self {
        self.die = die;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, limit: Option<u32>) -> Self {
        self.turn_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_board() {
        let config = BoardConfig::classic();
        assert_eq!(config.final_square, 25);
        assert_eq!(config.jumps.len(), 8);
        assert!(config.jumps.contains(&Jump::new(14, -10)));
        assert_eq!(config.die, DieConfig::default());
        assert_eq!(config.turn_limit, Some(DEFAULT_TURN_LIMIT));
    }

    #[test]
    fn test_from_json_defaults() {
        let config = BoardConfig::from_json(r#"{ "final_square": 10 }"#).unwrap();
        assert_eq!(config.final_square, 10);
        assert!(config.jumps.is_empty());
        assert_eq!(config.die.sides, 6);
        assert_eq!(config.die.generator, GeneratorConfig::Lcg(LcgParams::default()));
        assert_eq!(config.turn_limit, Some(DEFAULT_TURN_LIMIT));
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "final_square": 12,
            "jumps": [{ "square": 2, "delta": 5 }, { "square": 11, "delta": -6 }],
            "die": { "sides": 4, "generator": { "kind": "cha_cha", "seed": 9 } },
            "turn_limit": null
        }"#;
        let config = BoardConfig::from_json(json).unwrap();

        assert_eq!(config.jumps, vec![Jump::new(2, 5), Jump::new(11, -6)]);
        assert_eq!(config.die.sides, 4);
        assert_eq!(config.die.generator, GeneratorConfig::ChaCha { seed: 9 });
        assert_eq!(config.turn_limit, None);
    }

    #[test]
    fn test_from_json_lcg_params() {
        let json = r#"{
            "final_square": 5,
            "die": { "sides": 6, "generator": {
                "kind": "lcg", "seed": 1.0, "modulus": 100.0, "multiplier": 7.0, "increment": 3.0
            } }
        }"#;
        let config = BoardConfig::from_json(json).unwrap();
        let expected = LcgParams {
            seed: 1.0,
            modulus: 100.0,
            multiplier: 7.0,
            increment: 3.0,
        };
        assert_eq!(config.die.generator, GeneratorConfig::Lcg(expected));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = BoardConfig::from_json(r#"{ "final_square": "lots" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = BoardConfig::classic()
            .with_die(DieConfig::new(8).with_generator(GeneratorConfig::Sequence { values: vec![0.25] }));
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_die_config_build() {
        let mut die = DieConfig::new(4)
            .with_generator(GeneratorConfig::Sequence { values: vec![0.0, 0.99] })
            .build()
            .unwrap();
        assert_eq!(die.sides(), 4);
        assert_eq!(die.roll(), 1);
        assert_eq!(die.roll(), 4);
    }

    #[test]
    fn test_die_config_rejects_bad_values() {
        assert!(matches!(
            DieConfig::new(0).build(),
            Err(ConfigError::InvalidSides { sides: 0 })
        ));
        let bad_lcg = GeneratorConfig::Lcg(LcgParams { modulus: -5.0, ..LcgParams::default() });
        assert!(matches!(
            DieConfig::new(6).with_generator(bad_lcg).build(),
            Err(ConfigError::InvalidGenerator(_))
        ));
    }
}
