//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur while building a program.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit id is outside the program's register space.
    #[error("Qubit {qubit} out of range for program with {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits in the program.
        num_qubits: u32,
    },

    /// Classical bit id is outside the program's register space.
    #[error("Classical bit {clbit} out of range for program with {num_clbits} bits")]
    ClbitOutOfRange {
        /// The offending classical bit.
        clbit: ClbitId,
        /// Number of classical bits in the program.
        num_clbits: u32,
    },

    /// The same qubit appears more than once in one operation.
    #[error("Duplicate qubit {qubit} in operation '{op_name}'")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Name of the operation.
        op_name: String,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
