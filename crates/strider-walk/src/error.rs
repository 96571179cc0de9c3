//! Error types for the walk engine.

use strider_hal::HalError;
use strider_ir::{BitVector, IrError};
use thiserror::Error;

/// Errors that can occur while building or running a walk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WalkError {
    /// The walk configuration is unusable (non-positive step count,
    /// mismatched dimensionality, bad shot count or smoothing width).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed control/target set passed to the shift builder.
    #[error("Invalid shift register: {0}")]
    InvalidRegister(String),

    /// A sampled bit assignment does not match the program's register
    /// width — a backend/contract mismatch.
    #[error("Cannot decode outcome '{assignment}': expected {expected} bits, got {got}")]
    Decode {
        /// The offending bit assignment.
        assignment: BitVector,
        /// Expected assignment width in bits.
        expected: u32,
        /// Actual assignment width in bits.
        got: u32,
    },

    /// Program construction failed. Unreachable through the public entry
    /// points, but the builders are reusable on their own.
    #[error("Program construction failed: {0}")]
    Ir(#[from] IrError),

    /// The execution backend reported a failure; passed through unchanged.
    #[error("Backend failure: {0}")]
    Backend(#[from] HalError),
}

/// Result type for walk operations.
pub type WalkResult<T> = Result<T, WalkError>;
