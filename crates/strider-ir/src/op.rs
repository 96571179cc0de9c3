//! Gate operations.
//!
//! The coined-walk family needs exactly three single-qubit operators —
//! the uniform-superposition gate for coin randomization, the bit flip
//! for conditioning and register initialization, and the quarter-turn
//! phase for the symmetric coin convention — plus the multi-controlled
//! flip the shift cascades are made of. Anything wider is out of scope
//! for this IR.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// Single-qubit gates with known semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SingleQubitGate {
    /// Hadamard gate — uniform superposition / coin randomizer.
    H,
    /// Pauli-X gate — bit flip.
    X,
    /// S gate — quarter-turn phase shift (sqrt(Z)).
    S,
}

impl SingleQubitGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            SingleQubitGate::H => "h",
            SingleQubitGate::X => "x",
            SingleQubitGate::S => "s",
        }
    }

    /// Whether applying this gate twice is the identity.
    #[inline]
    pub fn is_self_inverse(&self) -> bool {
        matches!(self, SingleQubitGate::H | SingleQubitGate::X)
    }
}

impl fmt::Display for SingleQubitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A gate operation with its operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateOp {
    /// A single-qubit gate.
    Single {
        /// The gate to apply.
        gate: SingleQubitGate,
        /// The qubit it acts on.
        qubit: QubitId,
    },
    /// A flip of `target` conditioned on every control being set.
    ///
    /// Self-inverse for any control set, which is what makes a reversed
    /// cascade of these the exact inverse of the forward cascade.
    MultiControlledX {
        /// Control qubits; all must read 1 for the flip to fire.
        controls: Vec<QubitId>,
        /// The qubit that gets flipped.
        target: QubitId,
    },
}

impl GateOp {
    /// Get the name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            GateOp::Single { gate, .. } => gate.name(),
            GateOp::MultiControlledX { .. } => "mcx",
        }
    }

    /// All qubits this operation touches, controls first.
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            GateOp::Single { qubit, .. } => vec![*qubit],
            GateOp::MultiControlledX { controls, target } => {
                let mut qs = controls.clone();
                qs.push(*target);
                qs
            }
        }
    }

    /// Whether applying this operation twice is the identity.
    pub fn is_self_inverse(&self) -> bool {
        match self {
            GateOp::Single { gate, .. } => gate.is_self_inverse(),
            GateOp::MultiControlledX { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(SingleQubitGate::H.name(), "h");
        assert_eq!(SingleQubitGate::X.name(), "x");
        assert_eq!(SingleQubitGate::S.name(), "s");

        let mcx = GateOp::MultiControlledX {
            controls: vec![QubitId(0), QubitId(1)],
            target: QubitId(2),
        };
        assert_eq!(mcx.name(), "mcx");
    }

    #[test]
    fn test_op_qubits() {
        let op = GateOp::Single {
            gate: SingleQubitGate::H,
            qubit: QubitId(4),
        };
        assert_eq!(op.qubits(), vec![QubitId(4)]);

        let mcx = GateOp::MultiControlledX {
            controls: vec![QubitId(0), QubitId(1)],
            target: QubitId(2),
        };
        assert_eq!(mcx.qubits(), vec![QubitId(0), QubitId(1), QubitId(2)]);
    }

    #[test]
    fn test_self_inverse() {
        assert!(SingleQubitGate::H.is_self_inverse());
        assert!(SingleQubitGate::X.is_self_inverse());
        assert!(!SingleQubitGate::S.is_self_inverse());

        let mcx = GateOp::MultiControlledX {
            controls: vec![QubitId(0)],
            target: QubitId(1),
        };
        assert!(mcx.is_self_inverse());
    }
}
