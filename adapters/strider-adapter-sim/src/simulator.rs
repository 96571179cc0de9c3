//! Simulator backend implementation.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

use strider_hal::{
    Backend, BackendConfig, BackendFactory, Capabilities, Counts, ExecutionResult, HalError,
    HalResult, Job, JobId, JobStatus,
};
use strider_ir::{BitVector, Program};

use crate::statevector::Statevector;

const DEFAULT_MAX_QUBITS: u32 = 24;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector sampling backend.
///
/// Evolves the program once and samples the final state per shot. Jobs
/// complete synchronously inside `submit`; status and result queries go
/// through the same store a queueing backend would use.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Active jobs.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
    /// Maximum number of qubits supported.
    max_qubits: u32,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with a custom qubit ceiling.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
        }
    }

    /// Run a program and aggregate sampled outcomes.
    #[instrument(skip(self, program))]
    fn run_simulation(&self, program: &Program, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = program.num_qubits();
        debug!(
            "Starting simulation: {} qubits, {} ops, {} shots",
            num_qubits,
            program.ops().len(),
            shots
        );

        // One evolution pass; programs measure only at the end.
        let mut sv = Statevector::new(num_qubits);
        for op in program.ops() {
            sv.apply(op);
        }

        let width = program.num_clbits() as u32;
        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sv.sample();
            counts.insert(readout(program, outcome, width), 1);
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

/// Read the measured qubits of a sampled basis index into classical bits.
fn readout(program: &Program, outcome: usize, width: u32) -> BitVector {
    let mut bits = BitVector::zeros(width);
    for &(qubit, clbit) in program.measurements() {
        let value = (outcome >> qubit.0) & 1 == 1;
        bits.set(clbit.0, value);
    }
    bits
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn capabilities(&self) -> HalResult<Capabilities> {
        Ok(Capabilities::simulator(self.max_qubits))
    }

    async fn is_available(&self) -> HalResult<bool> {
        Ok(true)
    }

    #[instrument(skip(self, program))]
    async fn submit(&self, program: &Program, shots: u32) -> HalResult<JobId> {
        if program.num_qubits() > self.max_qubits as usize {
            return Err(HalError::ProgramTooLarge(format!(
                "Program has {} qubits but simulator only supports {}",
                program.num_qubits(),
                self.max_qubits
            )));
        }
        if shots == 0 {
            return Err(HalError::InvalidShots(
                "shot count must be at least 1".into(),
            ));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        let job = Job::new(job_id.clone(), shots).with_backend("simulator");

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            jobs.insert(job_id.0.clone(), SimJob { job, result: None });
        }

        debug!("Submitted job: {}", job_id);

        let result = self.run_simulation(program, shots);

        {
            let mut jobs = self
                .jobs
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(sim_job) = jobs.get_mut(&job_id.0) {
                sim_job.result = Some(result);
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Completed);
            }
        }

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
            Ok(())
        } else {
            Err(HalError::JobNotFound(job_id.0.clone()))
        }
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .extra
            .get("max_qubits")
            .and_then(serde_json::value::Value::as_u64)
            .map_or(DEFAULT_MAX_QUBITS, |v| v as u32);

        Ok(Self {
            config,
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
            max_qubits,
        })
    }
}
