//! Per-axis coin qubit handling.

use strider_ir::{IrResult, Program, QubitId};

use crate::config::CoinMode;

/// Emits the coin qubit's initialization and per-step randomization.
///
/// The one-time initialization phase convention is applied only before
/// the first step; every step thereafter gets the same mode-independent
/// randomization. The composer is responsible for calling
/// [`CoinUnit::initialize`] exactly once, before the step loop.
#[derive(Debug, Clone, Copy)]
pub struct CoinUnit {
    mode: CoinMode,
}

impl CoinUnit {
    /// Create a coin unit for the given mode.
    pub fn new(mode: CoinMode) -> Self {
        Self { mode }
    }

    /// The configured coin mode.
    pub fn mode(&self) -> CoinMode {
        self.mode
    }

    /// Prepare the coin's initial state: uniform superposition, plus the
    /// quarter-turn phase shift when the walk profile should be symmetric.
    pub fn initialize(&self, program: &mut Program, coin: QubitId) -> IrResult<()> {
        program.h(coin)?;
        if self.mode == CoinMode::Symmetric {
            program.s(coin)?;
        }
        Ok(())
    }

    /// Randomize the coin at the start of a step.
    pub fn toss(&self, program: &mut Program, coin: QubitId) -> IrResult<()> {
        program.h(coin)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_ir::{GateOp, SingleQubitGate};

    fn gate_names(program: &Program) -> Vec<&'static str> {
        program.ops().iter().map(GateOp::name).collect()
    }

    #[test]
    fn test_symmetric_initialization() {
        let mut program = Program::with_size("coin", 1, 0);
        let unit = CoinUnit::new(CoinMode::Symmetric);
        unit.initialize(&mut program, QubitId(0)).unwrap();

        assert_eq!(gate_names(&program), vec!["h", "s"]);
    }

    #[test]
    fn test_asymmetric_initialization() {
        let mut program = Program::with_size("coin", 1, 0);
        let unit = CoinUnit::new(CoinMode::Asymmetric);
        unit.initialize(&mut program, QubitId(0)).unwrap();

        assert_eq!(gate_names(&program), vec!["h"]);
    }

    #[test]
    fn test_toss_is_mode_independent() {
        for mode in [CoinMode::Symmetric, CoinMode::Asymmetric] {
            let mut program = Program::with_size("coin", 1, 0);
            let unit = CoinUnit::new(mode);
            unit.toss(&mut program, QubitId(0)).unwrap();

            assert_eq!(program.ops().len(), 1);
            assert!(matches!(
                program.ops()[0],
                GateOp::Single {
                    gate: SingleQubitGate::H,
                    ..
                }
            ));
        }
    }
}
