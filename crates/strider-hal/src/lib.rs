//! Strider Backend Abstraction Layer
//!
//! This crate provides a unified interface for executing walk programs,
//! enabling Strider to work seamlessly with local samplers, emulators,
//! and remote execution services.
//!
//! # Overview
//!
//! The HAL abstracts away backend-specific details, providing:
//! - A common [`Backend`] trait for job submission and management
//! - [`Capabilities`] to describe backend features and constraints
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! The core construction pipeline treats a backend as its only source of
//! randomness and evolution: it submits an immutable program with a shot
//! count and consumes a [`Counts`] map whose entries sum to that count.
//! Whether the counts come from an exact statevector sampler or a Monte
//! Carlo emulator is invisible on this side of the boundary.
//!
//! # Example: Running a Program
//!
//! ```ignore
//! use strider_hal::Backend;
//! use strider_adapter_sim::SimulatorBackend;
//! use strider_ir::Program;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let program: Program = compose_walk()?;
//!
//!     let backend = SimulatorBackend::new();
//!     let job_id = backend.submit(&program, 1024).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     for (assignment, count) in result.counts.iter() {
//!         println!("{assignment}: {count}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Implementing a Custom Backend
//!
//! ```ignore
//! use strider_hal::{Backend, Capabilities, JobId, JobStatus, ExecutionResult, HalResult};
//! use strider_ir::Program;
//! use async_trait::async_trait;
//!
//! struct MyBackend { /* ... */ }
//!
//! #[async_trait]
//! impl Backend for MyBackend {
//!     fn name(&self) -> &str { "my_backend" }
//!
//!     async fn capabilities(&self) -> HalResult<Capabilities> {
//!         // Describe qubit and shot limits
//!     }
//!
//!     async fn submit(&self, program: &Program, shots: u32) -> HalResult<JobId> {
//!         // Dispatch the program
//!     }
//!
//!     // status / result / cancel ...
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
