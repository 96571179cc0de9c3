//! Strider Walk-Program Intermediate Representation
//!
//! This crate provides the core data structures for representing coined
//! quantum walk programs in Strider. A program is pure data: an ordered
//! gate sequence plus a measurement map. Nothing in this crate evolves a
//! quantum state — execution is delegated to a backend behind the
//! `strider-hal` boundary, which lets an exact statevector sampler, a
//! Monte Carlo emulator, or real hardware run the same program.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gate Operations**: [`GateOp`] — the three single-qubit operators the
//!   walk family needs plus the multi-controlled flip the shift cascades
//!   are built from
//! - **Program**: [`Program`] — fluent, validating builder over an ordered
//!   op list and a measurement map
//! - **Outcomes**: [`BitVector`] — fixed-width classical bit assignments
//!   with an explicit significance order, the key type for sampled counts
//!
//! # Example: A Two-Qubit Program
//!
//! ```rust
//! use strider_ir::{ClbitId, Program, QubitId};
//!
//! let mut program = Program::with_size("toss", 2, 1);
//!
//! // Randomize the first qubit, flip the second when it is set.
//! program.h(QubitId(0)).unwrap();
//! program.mcx([QubitId(0)], QubitId(1)).unwrap();
//! program.measure(QubitId(1), ClbitId(0)).unwrap();
//!
//! assert_eq!(program.num_qubits(), 2);
//! assert_eq!(program.ops().len(), 2);
//! ```

pub mod bits;
pub mod error;
pub mod op;
pub mod program;
pub mod qubit;

pub use bits::BitVector;
pub use error::{IrError, IrResult};
pub use op::{GateOp, SingleQubitGate};
pub use program::Program;
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
