//! Random sources for dice.
//!
//! A [`RandomSource`] yields floats in `[0, 1)`. Dice only ever see the trait,
//! so a game can run on the classic linear congruential generator, a ChaCha
//! stream, or a scripted sequence without changing anything else.
//!
//! ## Determinism
//!
//! Every source here is deterministic: the same parameters produce the same
//! sequence. Sources mutate on every call, so one source belongs to one die.
//!
//! ```
//! use snakes_ladders::core::{LinearCongruentialGenerator, RandomSource};
//!
//! let mut a = LinearCongruentialGenerator::default();
//! let mut b = LinearCongruentialGenerator::default();
//! assert_eq!(a.next(), b.next());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Produces pseudo-random values in `[0, 1)`.
pub trait RandomSource {
    /// Advance the source and return the next value in `[0, 1)`.
    fn next(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self) -> f64 {
        (**self).next()
    }
}

/// Coin flip built on any source: true when the next value is above one half.
pub fn random_bool<R: RandomSource + ?Sized>(source: &mut R) -> bool {
    source.next() > 0.5
}

/// Largest float below which every integer is representable.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Parameters of the recurrence `seed = (seed * a + c) mod m`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LcgParams {
    /// Starting seed.
    pub seed: f64,
    /// Modulus `m`.
    pub modulus: f64,
    /// Multiplier `a`.
    pub multiplier: f64,
    /// Increment `c`.
    pub increment: f64,
}

impl Default for LcgParams {
    fn default() -> Self {
        Self {
            seed: 42.0,
            modulus: 139_968.0,
            multiplier: 3877.0,
            increment: 29_573.0,
        }
    }
}

impl LcgParams {
    /// Same constants, different starting seed.
    #[must_use]
    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject parameters whose output could leave `[0, 1)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [self.seed, self.modulus, self.multiplier, self.increment];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::InvalidGenerator(
                "parameters must be finite".to_string(),
            ));
        }
        if self.modulus <= 0.0 {
            return Err(ConfigError::InvalidGenerator(format!(
                "modulus must be positive, got {}",
                self.modulus
            )));
        }
        if self.multiplier < 0.0 || self.increment < 0.0 {
            return Err(ConfigError::InvalidGenerator(
                "multiplier and increment must be non-negative".to_string(),
            ));
        }
        if self.seed < 0.0 || self.seed >= self.modulus {
            return Err(ConfigError::InvalidGenerator(format!(
                "seed {} must lie in [0, {})",
                self.seed, self.modulus
            )));
        }
        // Every intermediate `seed * a + c` has to stay an exact integer.
        let largest = self.modulus * self.multiplier + self.increment;
        if !largest.is_finite() || largest > MAX_EXACT_F64 {
            return Err(ConfigError::InvalidGenerator(format!(
                "modulus * multiplier + increment = {largest} exceeds 2^53"
            )));
        }
        Ok(())
    }
}

/// The classic floating-point linear congruential generator.
#[derive(Clone, Debug)]
pub struct LinearCongruentialGenerator {
    params: LcgParams,
    last_random: f64,
}

impl LinearCongruentialGenerator {
    /// Create a generator from validated parameters.
    pub fn new(params: LcgParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            params,
            last_random: params.seed,
        })
    }

    /// The parameters this generator was built with.
    #[must_use]
    pub fn params(&self) -> &LcgParams {
        &self.params
    }

    /// Current internal seed.
    #[must_use]
    pub fn last_random(&self) -> f64 {
        self.last_random
    }
}

impl Default for LinearCongruentialGenerator {
    fn default() -> Self {
        let params = LcgParams::default();
        Self {
            params,
            last_random: params.seed,
        }
    }
}

impl RandomSource for LinearCongruentialGenerator {
    fn next(&mut self) -> f64 {
        let p = &self.params;
        self.last_random = (self.last_random * p.multiplier + p.increment) % p.modulus;
        self.last_random / p.modulus
    }
}

/// ChaCha8-backed source with O(1) state capture.
#[derive(Clone, Debug)]
pub struct ChaChaSource {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ChaChaSource {
    /// Create a new source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ChaChaSourceState {
        ChaChaSourceState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ChaChaSourceState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for ChaChaSource {
    fn next(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Serializable [`ChaChaSource`] position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaChaSourceState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Handy for scripting exact dice rolls.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a scripted source. Values must be non-empty and in `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Result<Self, ConfigError> {
        if values.is_empty() {
            return Err(ConfigError::InvalidGenerator(
                "sequence must contain at least one value".to_string(),
            ));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(ConfigError::InvalidGenerator(format!(
                "sequence value {bad} is outside [0, 1)"
            )));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Script the values that make a die with `sides` sides roll `rolls`.
    pub fn for_rolls(sides: u32, rolls: &[u32]) -> Result<Self, ConfigError> {
        if sides == 0 {
            return Err(ConfigError::InvalidSides { sides });
        }
        let values = rolls
            .iter()
            .map(|&roll| {
                if roll == 0 || roll > sides {
                    Err(ConfigError::InvalidGenerator(format!(
                        "roll {roll} is impossible on a {sides}-sided die"
                    )))
                } else {
                    // Middle of the roll's bucket, clear of rounding at the edges.
                    Ok((f64::from(roll) - 0.5) / f64::from(sides))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self) -> f64 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
