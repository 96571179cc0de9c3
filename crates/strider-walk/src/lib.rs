//! Coined Quantum Walk Engine
//!
//! This crate builds discrete-time coined quantum walk programs on bounded
//! 1D and 2D integer lattices and reduces sampled outcomes to position
//! probability distributions with summary statistics.
//!
//! # Pipeline
//!
//! ```text
//!   RegisterLayout ──→ compose ──→ Backend ──→ decode ──→ Distribution ──→ Statistics
//!     (sizing)      (coin+shift)  (external)  (signed      (dense,          (mean, σ,
//!                                              lattice      smoothable)      modes, …)
//!                                              coords)
//! ```
//!
//! Construction is purely functional: a [`WalkConfig`] deterministically
//! yields a [`strider_ir::Program`], and the only suspend point in
//! [`run_walk_1d`]/[`run_walk_2d`] is the backend call. The heart of the
//! construction is the [`shift`] module's reversible ripple-carry cascade:
//! a coin-conditioned ±1 (mod `2^p`) on the position register, where the
//! decrement is nothing but the increment's gate list replayed backwards.
//!
//! # Example
//!
//! ```rust
//! use strider_walk::{CoinMode, LatticeDim, RegisterLayout, WalkConfig, compose};
//!
//! let config = WalkConfig::new(10, LatticeDim::One).with_coin(CoinMode::Symmetric);
//! let layout = RegisterLayout::for_steps(config.steps).unwrap();
//! let program = compose::walk_1d(&config, &layout).unwrap();
//!
//! // 1 coin qubit + 5 position qubits cover positions -16..=15 ⊇ -10..=10.
//! assert_eq!(layout.bits_per_axis(), 5);
//! assert_eq!(program.num_qubits(), 6);
//! ```

pub mod coin;
pub mod compose;
pub mod config;
pub mod decode;
pub mod distribution;
pub mod error;
pub mod layout;
pub mod run;
pub mod shift;
pub mod stats;

pub use coin::CoinUnit;
pub use config::{CoinMode, LatticeDim, WalkConfig, DEFAULT_SHOTS};
pub use decode::{decode_position, decode_position_2d};
pub use distribution::{Distribution, Grid};
pub use error::{WalkError, WalkResult};
pub use layout::RegisterLayout;
pub use run::{run_walk_1d, run_walk_2d, WalkOutput, WalkOutput2d};
pub use stats::{AxisStatistics, Statistics, Statistics2d};
