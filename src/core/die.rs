//! Dice over any random source.

use std::fmt;

use super::error::ConfigError;
use super::rng::{LinearCongruentialGenerator, RandomSource};

/// A fair die with a fixed number of sides.
///
/// The die owns whichever [`RandomSource`] the caller hands it. Rolls are
/// `floor(next * sides) + 1`, so they always land in `1..=sides`.
pub struct Die {
    sides: u32,
    source: Box<dyn RandomSource>,
}

impl Die {
    /// Create a die. Zero sides is rejected here rather than at roll time.
    pub fn new(sides: u32, source: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        if sides == 0 {
            return Err(ConfigError::InvalidSides { sides });
        }
        Ok(Self { sides, source })
    }

    /// A six-sided die over the default linear congruential generator.
    #[must_use]
    pub fn d6() -> Self {
        Self {
            sides: 6,
            source: Box::new(LinearCongruentialGenerator::default()),
        }
    }

    /// Number of sides.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll once.
    pub fn roll(&mut self) -> u32 {
        let value = self.source.next();
        let face = ((value * f64::from(self.sides)).floor() as u32).saturating_add(1);
        // A misbehaving source must not produce an impossible face.
        face.clamp(1, self.sides)
    }

    /// Swap in a new random source, returning the old one.
    pub fn replace_source(&mut self, source: Box<dyn RandomSource>) -> Box<dyn RandomSource> {
        std::mem::replace(&mut self.source, source)
    }
}

impl fmt::Debug for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Die").field("sides", &self.sides).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SequenceSource;

    fn scripted(sides: u32, values: Vec<f64>) -> Die {
        Die::new(sides, Box::new(SequenceSource::new(values).unwrap())).unwrap()
    }

    #[test]
    fn test_roll_maps_unit_interval_to_faces() {
        let mut die = scripted(6, vec![0.0, 0.17, 0.999]);
        assert_eq!(die.roll(), 1);
        assert_eq!(die.roll(), 2);
        assert_eq!(die.roll(), 6);
    }

    #[test]
    fn test_bucket_just_below_boundary() {
        // 0.1666 * 6 = 0.9996, still the first face.
        let mut die = scripted(6, vec![0.1666]);
        assert_eq!(die.roll(), 1);
    }

    #[test]
    fn test_zero_sides_rejected() {
        let err = Die::new(0, Box::new(LinearCongruentialGenerator::default())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSides { sides: 0 }));
    }

    #[test]
    fn test_one_sided_die_always_rolls_one() {
        let mut die = Die::new(1, Box::new(LinearCongruentialGenerator::default())).unwrap();
        for _ in 0..20 {
            assert_eq!(die.roll(), 1);
        }
    }

    #[test]
    fn test_d6_classic_rolls() {
        let mut die = Die::d6();
        let rolls: Vec<_> = (0..5).map(|_| die.roll()).collect();
        // 0.3746, 0.7290, 0.6365, 0.7935, 0.5385
        assert_eq!(rolls, vec![3, 5, 4, 5, 4]);
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let mut die = Die::new(20, Box::new(LinearCongruentialGenerator::default())).unwrap();
        for _ in 0..5_000 {
            let roll = die.roll();
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn test_out_of_range_source_clamped() {
        struct Stuck(f64);

        impl RandomSource for Stuck {
            fn next(&mut self) -> f64 {
                self.0
            }
        }

        let mut huge = Die::new(u32::MAX, Box::new(Stuck(1.0))).unwrap();
        assert_eq!(huge.roll(), u32::MAX);

        let mut d6 = Die::new(6, Box::new(Stuck(3.5))).unwrap();
        assert_eq!(d6.roll(), 6);

        let mut below = Die::new(6, Box::new(Stuck(-2.0))).unwrap();
        assert_eq!(below.roll(), 1);

        let mut nan = Die::new(6, Box::new(Stuck(f64::NAN))).unwrap();
        assert_eq!(nan.roll(), 1);
    }

    #[test]
    fn test_replace_source() {
        let mut die = scripted(6, vec![0.0]);
        assert_eq!(die.roll(), 1);
        die.replace_source(Box::new(SequenceSource::for_rolls(6, &[4]).unwrap()));
        assert_eq!(die.roll(), 4);
    }

    #[test]
    fn test_debug_hides_source() {
        assert_eq!(format!("{:?}", Die::d6()), "Die { sides: 6, .. }");
    }
}
