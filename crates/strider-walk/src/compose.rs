//! Walk program composition.
//!
//! Assembles register sizing, coin handling, and the conditioned shift
//! into a complete program plus its measurement map. The measurement
//! order is a decoding contract: position bits go to classical bits in
//! initialization bit order (bit `i` of an axis at significance `2^i`),
//! and the 2D program records the y register at classical bits `0..p`
//! and the x register at `p..2p`. [`crate::decode`] mirrors this exactly.

use tracing::debug;

use strider_ir::{IrResult, Program, QubitId};

use crate::coin::CoinUnit;
use crate::config::WalkConfig;
use crate::error::WalkResult;
use crate::layout::RegisterLayout;
use crate::shift;

/// Compose the program for a 1D walk: one coin qubit and one `p`-bit
/// position register, measured after `steps` coin-and-shift rounds.
pub fn walk_1d(config: &WalkConfig, layout: &RegisterLayout) -> WalkResult<Program> {
    let p = layout.bits_per_axis();
    let mut program = Program::new(format!("walk1d_s{}", config.steps));

    let coin = program.add_qreg("coin", 1)[0];
    let pos = program.add_qreg("pos", p);
    let out = program.add_creg("out", p);

    let unit = CoinUnit::new(config.coin);
    unit.initialize(&mut program, coin)?;
    init_center(&mut program, layout, &pos)?;

    for _ in 0..config.steps {
        unit.toss(&mut program, coin)?;
        shift::conditioned_shift(&mut program, coin, &pos)?;
    }

    for (i, &q) in pos.iter().enumerate() {
        program.measure(q, out[i])?;
    }

    debug!(
        steps = config.steps,
        qubits = program.num_qubits(),
        ops = program.ops().len(),
        "composed 1d walk program"
    );
    Ok(program)
}

/// Compose the program for a 2D walk: independent coin and position
/// registers per axis, both shifted each round. The per-axis updates
/// commute, so the x-then-y order is a convention, not a constraint.
pub fn walk_2d(config: &WalkConfig, layout: &RegisterLayout) -> WalkResult<Program> {
    let p = layout.bits_per_axis();
    let mut program = Program::new(format!("walk2d_s{}", config.steps));

    let coin_x = program.add_qreg("coin_x", 1)[0];
    let coin_y = program.add_qreg("coin_y", 1)[0];
    let pos_x = program.add_qreg("pos_x", p);
    let pos_y = program.add_qreg("pos_y", p);
    let out = program.add_creg("out", 2 * p);

    let unit = CoinUnit::new(config.coin);
    unit.initialize(&mut program, coin_x)?;
    unit.initialize(&mut program, coin_y)?;
    init_center(&mut program, layout, &pos_x)?;
    init_center(&mut program, layout, &pos_y)?;

    for _ in 0..config.steps {
        unit.toss(&mut program, coin_x)?;
        unit.toss(&mut program, coin_y)?;
        shift::conditioned_shift(&mut program, coin_x, &pos_x)?;
        shift::conditioned_shift(&mut program, coin_y, &pos_y)?;
    }

    // y field first, then x — the decoder splits on this boundary.
    for (i, &q) in pos_y.iter().enumerate() {
        program.measure(q, out[i])?;
    }
    for (i, &q) in pos_x.iter().enumerate() {
        program.measure(q, out[p as usize + i])?;
    }

    debug!(
        steps = config.steps,
        qubits = program.num_qubits(),
        ops = program.ops().len(),
        "composed 2d walk program"
    );
    Ok(program)
}

/// Start an axis register at lattice position 0 by flipping the set bits
/// of the center offset.
fn init_center(program: &mut Program, layout: &RegisterLayout, pos: &[QubitId]) -> IrResult<()> {
    let start = layout.center_offset() as u64;
    for (i, &q) in pos.iter().enumerate() {
        if (start >> i) & 1 == 1 {
            program.x(q)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoinMode, LatticeDim};
    use strider_ir::{ClbitId, GateOp, SingleQubitGate};

    fn config_1d(steps: u32) -> WalkConfig {
        WalkConfig::new(steps, LatticeDim::One)
    }

    #[test]
    fn test_walk_1d_registers() {
        let config = config_1d(5);
        let layout = RegisterLayout::for_steps(5).unwrap();
        let program = walk_1d(&config, &layout).unwrap();

        // 1 coin + 4 position qubits, 4 classical bits.
        assert_eq!(program.num_qubits(), 5);
        assert_eq!(program.num_clbits(), 4);
        assert_eq!(program.measurements().len(), 4);
    }

    #[test]
    fn test_walk_1d_measures_position_in_bit_order() {
        let config = config_1d(2);
        let layout = RegisterLayout::for_steps(2).unwrap();
        let program = walk_1d(&config, &layout).unwrap();

        // Position register is qubits 1..=p, coin is qubit 0.
        let expected: Vec<_> = (0..layout.bits_per_axis())
            .map(|i| (QubitId(1 + i), ClbitId(i)))
            .collect();
        assert_eq!(program.measurements(), &expected[..]);
    }

    #[test]
    fn test_walk_1d_center_initialization() {
        let config = config_1d(5);
        let layout = RegisterLayout::for_steps(5).unwrap();
        let program = walk_1d(&config, &layout).unwrap();

        // center_offset = 8 = 0b1000: exactly one X, on position bit 3
        // (qubit 4). The initialization prefix is h, s, then that X.
        let init: Vec<_> = program.ops().iter().take(3).collect();
        assert_eq!(
            init[0],
            &GateOp::Single {
                gate: SingleQubitGate::H,
                qubit: QubitId(0)
            }
        );
        assert_eq!(
            init[1],
            &GateOp::Single {
                gate: SingleQubitGate::S,
                qubit: QubitId(0)
            }
        );
        assert_eq!(
            init[2],
            &GateOp::Single {
                gate: SingleQubitGate::X,
                qubit: QubitId(4)
            }
        );
    }

    #[test]
    fn test_walk_1d_asymmetric_skips_phase() {
        let config = config_1d(1).with_coin(CoinMode::Asymmetric);
        let layout = RegisterLayout::for_steps(1).unwrap();
        let program = walk_1d(&config, &layout).unwrap();

        let names: Vec<_> = program.ops().iter().map(GateOp::name).collect();
        assert!(!names.contains(&"s"));
    }

    #[test]
    fn test_walk_1d_op_count() {
        // Per step: 1 coin toss + 2 flips + two p-gate cascades.
        let steps = 4;
        let config = config_1d(steps);
        let layout = RegisterLayout::for_steps(steps).unwrap();
        let p = layout.bits_per_axis() as usize;
        let program = walk_1d(&config, &layout).unwrap();

        let init_ops = 2 + (layout.center_offset() as u64).count_ones() as usize;
        let per_step = 1 + 2 + 2 * p;
        assert_eq!(
            program.ops().len(),
            init_ops + steps as usize * per_step
        );
    }

    #[test]
    fn test_walk_2d_registers() {
        let config = WalkConfig::new(5, LatticeDim::Two);
        let layout = RegisterLayout::for_steps(5).unwrap();
        let program = walk_2d(&config, &layout).unwrap();

        // 2 coins + 2 × 4 position qubits, 8 classical bits.
        assert_eq!(program.num_qubits(), 10);
        assert_eq!(program.num_clbits(), 8);
    }

    #[test]
    fn test_walk_2d_measures_y_field_then_x_field() {
        let config = WalkConfig::new(2, LatticeDim::Two);
        let layout = RegisterLayout::for_steps(2).unwrap();
        let p = layout.bits_per_axis();
        let program = walk_2d(&config, &layout).unwrap();

        // Qubits: coin_x=0, coin_y=1, pos_x=2..2+p, pos_y=2+p..2+2p.
        let measurements = program.measurements();
        assert_eq!(measurements.len(), 2 * p as usize);
        for i in 0..p {
            // y register lands in classical bits 0..p
            assert_eq!(measurements[i as usize], (QubitId(2 + p + i), ClbitId(i)));
            // x register lands in classical bits p..2p
            assert_eq!(
                measurements[(p + i) as usize],
                (QubitId(2 + i), ClbitId(p + i))
            );
        }
    }

    #[test]
    fn test_walk_2d_both_axes_initialized_to_center() {
        let config = WalkConfig::new(5, LatticeDim::Two);
        let layout = RegisterLayout::for_steps(5).unwrap();
        let program = walk_2d(&config, &layout).unwrap();

        let x_inits: Vec<_> = program
            .ops()
            .iter()
            .filter_map(|op| match op {
                GateOp::Single {
                    gate: SingleQubitGate::X,
                    qubit,
                } => Some(*qubit),
                _ => None,
            })
            .take(2)
            .collect();
        // One set bit in the center offset per axis: pos_x bit 3 is qubit
        // 2+3, pos_y bit 3 is qubit 2+4+3.
        assert_eq!(x_inits, vec![QubitId(5), QubitId(9)]);
    }
}
