//! Coin-conditioned position shift.
//!
//! Implements ±1 modulo `2^p` on a `p`-bit register as a cascade of
//! multi-controlled flips — the reversible ripple-carry construction.
//! Increment flips bit `i` exactly when the external control is set and
//! all lower-order bits read 1, which is the carry-propagation condition
//! for +1. Every cascade gate is self-inverse, so the inverse of the
//! whole cascade is the same gates replayed in reverse order: decrement
//! is the increment sequence backwards, with no separate arithmetic
//! derivation.

use strider_ir::{Program, QubitId};

use crate::error::{WalkError, WalkResult};

fn check_register(control: QubitId, targets: &[QubitId]) -> WalkResult<()> {
    if targets.is_empty() {
        return Err(WalkError::InvalidRegister(
            "shift target register is empty".into(),
        ));
    }
    for (i, &t) in targets.iter().enumerate() {
        if t == control {
            return Err(WalkError::InvalidRegister(format!(
                "control {control} appears in the target register"
            )));
        }
        if targets[..i].contains(&t) {
            return Err(WalkError::InvalidRegister(format!(
                "target {t} repeated in the target register"
            )));
        }
    }
    Ok(())
}

/// Append a controlled +1 (mod `2^p`) on `targets` to the program.
///
/// `targets` are ordered least-significant-bit first. Gate `i` flips
/// `targets[i]` under `control` and all of `targets[0..i]`.
pub fn increment(program: &mut Program, control: QubitId, targets: &[QubitId]) -> WalkResult<()> {
    check_register(control, targets)?;
    for i in 0..targets.len() {
        program.mcx(cascade_controls(control, &targets[..i]), targets[i])?;
    }
    Ok(())
}

/// Append a controlled −1 (mod `2^p`) on `targets` to the program.
///
/// Emits the identical gate multiset as [`increment`] in reverse
/// application order — the temporal inverse of the increment cascade.
pub fn decrement(program: &mut Program, control: QubitId, targets: &[QubitId]) -> WalkResult<()> {
    check_register(control, targets)?;
    for i in (0..targets.len()).rev() {
        program.mcx(cascade_controls(control, &targets[..i]), targets[i])?;
    }
    Ok(())
}

fn cascade_controls(control: QubitId, lower: &[QubitId]) -> Vec<QubitId> {
    let mut controls = Vec::with_capacity(lower.len() + 1);
    controls.push(control);
    controls.extend_from_slice(lower);
    controls
}

/// Run `body` with `qubit` temporarily flipped when conditioning on the
/// value 0, so the body's controls fire for the qubit's *original* value.
///
/// The flip-apply-unflip conjugation is kept as one primitive so the
/// unflip can never be forgotten at a call site.
pub fn with_coin_value<F>(
    program: &mut Program,
    qubit: QubitId,
    value: bool,
    body: F,
) -> WalkResult<()>
where
    F: FnOnce(&mut Program) -> WalkResult<()>,
{
    if !value {
        program.x(qubit)?;
    }
    body(program)?;
    if !value {
        program.x(qubit)?;
    }
    Ok(())
}

/// Append one full coin-conditioned shift step on `targets`.
///
/// Decrement fires when the coin reads 0, increment when it reads 1.
/// Both cascades are always emitted — they are coherent operations, and
/// the backend's evolution determines which branch carries amplitude.
pub fn conditioned_shift(
    program: &mut Program,
    coin: QubitId,
    targets: &[QubitId],
) -> WalkResult<()> {
    with_coin_value(program, coin, false, |p| decrement(p, coin, targets))?;
    increment(program, coin, targets)
}
