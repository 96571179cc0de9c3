//! Position register sizing.

use serde::{Deserialize, Serialize};

use strider_ir::BitVector;

use crate::error::{WalkError, WalkResult};

/// Sizing of one position register.
///
/// A walk of `steps` steps needs `2·steps + 1` distinct lattice positions
/// per axis; the register gets the smallest bit width `p` with
/// `2^p ≥ 2·steps + 1`. Signed coordinates map onto the unsigned register
/// through a fixed center offset of `2^(p-1)`, so the representable range
/// is `[-2^(p-1), 2^(p-1) - 1]` — always covering `[-steps, steps]`,
/// usually with headroom. The headroom is kept as designed slack: nothing
/// downstream clamps to `±steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterLayout {
    bits_per_axis: u32,
    center_offset: i64,
}

impl RegisterLayout {
    /// Derive the layout for a walk of `steps` steps.
    ///
    /// Fails with `InvalidConfiguration` for `steps < 1`.
    pub fn for_steps(steps: u32) -> WalkResult<Self> {
        if steps < 1 {
            return Err(WalkError::InvalidConfiguration(format!(
                "step count must be at least 1, got {steps}"
            )));
        }
        let needed = 2 * u64::from(steps) + 1;
        let mut bits_per_axis = 1;
        while (1u64 << bits_per_axis) < needed {
            bits_per_axis += 1;
        }
        Ok(Self {
            bits_per_axis,
            center_offset: 1i64 << (bits_per_axis - 1),
        })
    }

    /// Bits per position register.
    #[inline]
    pub fn bits_per_axis(&self) -> u32 {
        self.bits_per_axis
    }

    /// Unsigned register value that encodes lattice position 0.
    #[inline]
    pub fn center_offset(&self) -> i64 {
        self.center_offset
    }

    /// Smallest representable coordinate.
    #[inline]
    pub fn min_position(&self) -> i64 {
        -self.center_offset
    }

    /// Largest representable coordinate.
    #[inline]
    pub fn max_position(&self) -> i64 {
        (1i64 << self.bits_per_axis) - 1 - self.center_offset
    }

    /// Number of representable coordinates per axis (`2^p`).
    #[inline]
    pub fn num_positions(&self) -> usize {
        1usize << self.bits_per_axis
    }

    /// Whether a coordinate is representable.
    pub fn contains(&self, position: i64) -> bool {
        position >= self.min_position() && position <= self.max_position()
    }

    /// Encode a coordinate as a register bit assignment, bit `i` carrying
    /// significance `2^i`. Returns `None` outside the representable range.
    ///
    /// This is the exact encoding the program initialization and
    /// measurement order realize; [`crate::decode::decode_position`] is
    /// its left inverse.
    pub fn encode(&self, position: i64) -> Option<BitVector> {
        if !self.contains(position) {
            return None;
        }
        let value = (position + self.center_offset) as u64;
        Some(BitVector::from_value(value, self.bits_per_axis))
    }
}
