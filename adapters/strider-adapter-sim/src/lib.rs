//! Strider Local Statevector Sampler
//!
//! This crate provides a local execution backend for walk programs. It
//! evolves a dense statevector through the program's gate sequence once,
//! then draws the requested number of shots from the final state —
//! walk programs measure only at the end, so per-shot re-evolution would
//! buy nothing.
//!
//! # Performance
//!
//! | Qubits | Amplitudes | Memory |
//! |--------|------------|--------|
//! | 10 | 1024 | ~16 KB |
//! | 15 | 32768 | ~512 KB |
//! | 20 | ~1M | ~16 MB |
//! | 24 | ~16M | ~256 MB |
//!
//! A 2D walk of `steps` steps needs `2 + 2·p` qubits with
//! `p = ⌈log2(2·steps+1)⌉`; the default 24-qubit ceiling covers walks of
//! several hundred steps per axis.
//!
//! # Example
//!
//! ```ignore
//! use strider_adapter_sim::SimulatorBackend;
//! use strider_hal::Backend;
//!
//! let backend = SimulatorBackend::new();
//! let job_id = backend.submit(&program, 1024).await?;
//! let result = backend.wait(&job_id).await?;
//! println!("{}", result.counts);
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
