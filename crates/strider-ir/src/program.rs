//! Walk program builder.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::op::{GateOp, SingleQubitGate};
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};

/// A walk program.
///
/// An ordered gate sequence over a fixed set of qubits, plus a measurement
/// map from qubits to classical bit positions. Programs are plain data:
/// building one performs no state evolution, and once handed to a caller a
/// program is never mutated again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Name of the program.
    name: String,
    /// Qubits in the program.
    qubits: Vec<Qubit>,
    /// Classical bits in the program.
    clbits: Vec<Clbit>,
    /// The gate sequence, in application order.
    ops: Vec<GateOp>,
    /// Measured qubits in readout order: entry `(q, c)` records qubit `q`
    /// into classical bit `c`.
    measurements: Vec<(QubitId, ClbitId)>,
}

impl Program {
    /// Create a new empty program.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            ops: vec![],
            measurements: vec![],
        }
    }

    /// Create a program with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut program = Self::new(name);
        for _ in 0..num_qubits {
            program.add_qubit();
        }
        for _ in 0..num_clbits {
            program.add_clbit();
        }
        program
    }

    /// Add a single qubit to the program.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.qubits.len() as u32);
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = QubitId(self.qubits.len() as u32);
            self.qubits.push(Qubit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    /// Add a single classical bit to the program.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.clbits.len() as u32);
        self.clbits.push(Clbit::new(id));
        id
    }

    /// Add a classical register with multiple bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> Vec<ClbitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = ClbitId(self.clbits.len() as u32);
            self.clbits.push(Clbit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    // =========================================================================
    // Gate operations
    // =========================================================================

    /// Apply the uniform-superposition (Hadamard) gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(SingleQubitGate::H, qubit)
    }

    /// Apply the bit-flip (Pauli-X) gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(SingleQubitGate::X, qubit)
    }

    /// Apply the quarter-turn phase (S) gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(SingleQubitGate::S, qubit)
    }

    fn single(&mut self, gate: SingleQubitGate, qubit: QubitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        self.ops.push(GateOp::Single { gate, qubit });
        Ok(self)
    }

    /// Apply a flip of `target` conditioned on every control being set.
    ///
    /// Controls may be given in any order; the operand set must not repeat
    /// a qubit or include the target.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        let controls: Vec<_> = controls.into_iter().collect();
        self.check_qubit(target)?;
        for (i, &c) in controls.iter().enumerate() {
            self.check_qubit(c)?;
            if c == target || controls[..i].contains(&c) {
                return Err(IrError::DuplicateQubit {
                    qubit: c,
                    op_name: "mcx".into(),
                });
            }
        }
        self.ops.push(GateOp::MultiControlledX { controls, target });
        Ok(self)
    }

    /// Record qubit `qubit` into classical bit `clbit` at readout.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.check_qubit(qubit)?;
        if clbit.0 as usize >= self.clbits.len() {
            return Err(IrError::ClbitOutOfRange {
                clbit,
                num_clbits: self.clbits.len() as u32,
            });
        }
        self.measurements.push((qubit, clbit));
        Ok(self)
    }

    fn check_qubit(&self, qubit: QubitId) -> IrResult<()> {
        if qubit.0 as usize >= self.qubits.len() {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.qubits.len() as u32,
            });
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the program name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Get the qubits in the program.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the classical bits in the program.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    /// The gate sequence in application order.
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// The measurement map in readout order.
    pub fn measurements(&self) -> &[(QubitId, ClbitId)] {
        &self.measurements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_program() {
        let program = Program::new("test");
        assert_eq!(program.name(), "test");
        assert_eq!(program.num_qubits(), 0);
        assert_eq!(program.num_clbits(), 0);
    }

    #[test]
    fn test_with_size() {
        let program = Program::with_size("test", 3, 2);
        assert_eq!(program.num_qubits(), 3);
        assert_eq!(program.num_clbits(), 2);
    }

    #[test]
    fn test_add_registers() {
        let mut program = Program::new("test");
        let coin = program.add_qreg("coin", 1);
        let pos = program.add_qreg("pos", 4);
        let out = program.add_creg("out", 4);

        assert_eq!(coin, vec![QubitId(0)]);
        assert_eq!(pos.len(), 4);
        assert_eq!(out.len(), 4);
        assert_eq!(program.num_qubits(), 5);
        assert_eq!(format!("{}", program.qubits()[2]), "pos[1]");
    }

    #[test]
    fn test_fluent_ops() {
        let mut program = Program::with_size("test", 3, 1);
        program
            .h(QubitId(0))
            .unwrap()
            .x(QubitId(1))
            .unwrap()
            .mcx([QubitId(0), QubitId(1)], QubitId(2))
            .unwrap()
            .measure(QubitId(2), ClbitId(0))
            .unwrap();

        assert_eq!(program.ops().len(), 3);
        assert_eq!(program.measurements(), &[(QubitId(2), ClbitId(0))]);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut program = Program::with_size("test", 1, 0);
        let err = program.h(QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::QubitOutOfRange { .. }));
    }

    #[test]
    fn test_clbit_out_of_range() {
        let mut program = Program::with_size("test", 1, 0);
        let err = program.measure(QubitId(0), ClbitId(0)).unwrap_err();
        assert!(matches!(err, IrError::ClbitOutOfRange { .. }));
    }

    #[test]
    fn test_mcx_rejects_overlap() {
        let mut program = Program::with_size("test", 3, 0);

        let err = program
            .mcx([QubitId(0), QubitId(1)], QubitId(1))
            .unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));

        let err = program
            .mcx([QubitId(0), QubitId(0)], QubitId(2))
            .unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut program = Program::with_size("rt", 2, 1);
        program.h(QubitId(0)).unwrap();
        program.mcx([QubitId(0)], QubitId(1)).unwrap();
        program.measure(QubitId(1), ClbitId(0)).unwrap();

        let json = serde_json::to_string(&program).unwrap();
        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(program, back);
    }
}
