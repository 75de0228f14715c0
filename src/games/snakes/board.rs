//! Jump table for a snakes and ladders board.

use crate::core::{ConfigError, Jump};

/// Largest board a table will allocate.
pub const MAX_FINAL_SQUARE: usize = 1 << 20;

/// Per-square jump deltas for squares `0..=final_square`.
///
/// Built once and never changed. Construction guarantees that taking the jump
/// on any square keeps the player on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JumpTable {
    deltas: Vec<i64>,
}

impl JumpTable {
    /// Build a table from a list of jumps.
    ///
    /// Squares not listed get a delta of zero. If a square is listed twice the
    /// later entry wins.
    pub fn new(final_square: usize, jumps: &[Jump]) -> Result<Self, ConfigError> {
        if final_square == 0 || final_square > MAX_FINAL_SQUARE {
            return Err(ConfigError::InvalidFinalSquare { final_square });
        }

        let mut deltas = vec![0i64; final_square + 1];
        for jump in jumps {
            if jump.square > final_square {
                return Err(ConfigError::JumpOutOfBounds {
                    square: jump.square,
                    final_square,
                });
            }
            let out_of_range = |target| ConfigError::JumpTargetOutOfRange {
                square: jump.square,
                delta: jump.delta,
                target,
                final_square,
            };
            // Saturate so the error still reports which way the jump went.
            let target = (jump.square as i64)
                .checked_add(jump.delta)
                .ok_or_else(|| out_of_range(if jump.delta > 0 { i64::MAX } else { i64::MIN }))?;
            if target < 0 || target > final_square as i64 {
                return Err(out_of_range(target));
            }
            deltas[jump.square] = jump.delta;
        }

        Ok(Self { deltas })
    }

    /// A board with no jumps at all.
    pub fn plain(final_square: usize) -> Result<Self, ConfigError> {
        Self::new(final_square, &[])
    }

    /// The winning square.
    #[must_use]
    pub fn final_square(&self) -> usize {
        self.deltas.len() - 1
    }

    /// Delta on a square. Zero for plain squares and squares off the board.
    #[must_use]
    pub fn delta(&self, square: usize) -> i64 {
        self.deltas.get(square).copied().unwrap_or(0)
    }

    /// Where a player landing on `square` ends up. Jumps don't chain.
    #[must_use]
    pub fn land(&self, square: usize) -> usize {
        // In range by construction.
        (square as i64 + self.delta(square)) as usize
    }

    /// All non-zero jumps in square order.
    pub fn jumps(&self) -> impl Iterator<Item = Jump> + '_ {
        self.deltas
            .iter()
            .enumerate()
            .filter(|(_, delta)| **delta != 0)
            .map(|(square, delta)| Jump::new(square, *delta))
    }

    /// Number of ladders on the board.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.deltas.iter().filter(|d| **d > 0).count()
    }

    /// Number of snakes on the board.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.deltas.iter().filter(|d| **d < 0).count()
    }
}
