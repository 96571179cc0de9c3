//! Sampled outcome decoding.
//!
//! Maps raw classical bit assignments back to signed lattice coordinates,
//! mirroring the composer's measurement order exactly: bit `i` of an axis
//! field carries significance `2^i`, and 2D assignments hold the y field
//! at bits `0..p` and the x field at `p..2p`.

use strider_ir::BitVector;

use crate::error::{WalkError, WalkResult};
use crate::layout::RegisterLayout;

/// Decode a 1D outcome to a signed lattice coordinate.
///
/// Left inverse of [`RegisterLayout::encode`]. Fails with a decode error
/// when the assignment width is not `p` — a backend that does not honor
/// the measurement map.
pub fn decode_position(outcome: &BitVector, layout: &RegisterLayout) -> WalkResult<i64> {
    let p = layout.bits_per_axis();
    if outcome.width() != p {
        return Err(WalkError::Decode {
            assignment: *outcome,
            expected: p,
            got: outcome.width(),
        });
    }
    Ok(outcome.value() as i64 - layout.center_offset())
}

/// Decode a 2D outcome to signed `(x, y)` lattice coordinates.
///
/// Fails with a decode error when the assignment width is not `2·p`.
pub fn decode_position_2d(
    outcome: &BitVector,
    layout: &RegisterLayout,
) -> WalkResult<(i64, i64)> {
    let p = layout.bits_per_axis();
    if outcome.width() != 2 * p {
        return Err(WalkError::Decode {
            assignment: *outcome,
            expected: 2 * p,
            got: outcome.width(),
        });
    }
    let y = decode_position(&outcome.field(0, p), layout)?;
    let x = decode_position(&outcome.field(p, p), layout)?;
    Ok((x, y))
}
