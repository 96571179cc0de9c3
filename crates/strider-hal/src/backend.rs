//! Backend trait and configuration.
//!
//! The [`Backend`] trait defines the lifecycle for executing a walk
//! program:
//!
//! ```text
//!   capabilities() ──→ submit() ──→ status() ──→ result()
//! ```
//!
//! All methods that may perform I/O are async; submission is the single
//! suspend point the walk runner awaits. A backend may complete jobs
//! synchronously inside `submit` (the local simulator does) — callers
//! observe the same `Queued → Completed` lifecycle either way.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use strider_ir::Program;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Configuration for a backend instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional configuration.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Trait for walk-program execution backends.
///
/// # Contract
///
/// - `submit()` takes an immutable program and a shot count `S ≥ 1` and
///   MUST return a job whose eventual result maps observed classical bit
///   assignments (one bit per measured position, ordered per the
///   program's measurement map) to nonnegative counts summing to `S`.
/// - `result()` MUST only be called when status is `Completed`.
/// - `wait()` has a default implementation (500ms poll, 5-minute timeout).
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    async fn capabilities(&self) -> HalResult<Capabilities>;

    /// Check whether the backend is currently accepting jobs.
    async fn is_available(&self) -> HalResult<bool>;

    /// Submit a program for execution.
    ///
    /// Returns a job ID that can be used to check status and retrieve
    /// results. The job starts in `Queued` status.
    async fn submit(&self, program: &Program, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a running job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its result.
    ///
    /// Default implementation polls every 500ms for up to 5 minutes.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        use tokio::time::sleep;

        let poll_interval = Duration::from_millis(500);
        let max_polls = 600; // 5 minutes max

        for _ in 0..max_polls {
            let status = self.status(job_id).await?;

            match status {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    sleep(poll_interval).await;
                }
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("test").with_extra("max_qubits", serde_json::json!(16));

        assert_eq!(config.name, "test");
        assert!(config.extra.contains_key("max_qubits"));
    }

    #[test]
    fn test_backend_config_flattens_extra() {
        let config = BackendConfig::new("sim").with_extra("max_qubits", serde_json::json!(12));
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"max_qubits\":12"));

        let back: BackendConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "sim");
        assert_eq!(back.extra.get("max_qubits"), Some(&serde_json::json!(12)));
    }
}
