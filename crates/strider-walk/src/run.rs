//! Caller-facing walk entry points.
//!
//! Each run is one pass through the pipeline: size the register, compose
//! the program, hand it to the backend, decode the counts, and reduce
//! them to a distribution and statistics. Construction happens entirely
//! before the backend call, so configuration errors abort without any
//! submission; backend and decode failures surface unchanged.

use tracing::debug;

use strider_hal::{Backend, HalError};

use crate::compose;
use crate::config::{LatticeDim, WalkConfig};
use crate::decode;
use crate::distribution::{Distribution, Grid};
use crate::error::{WalkError, WalkResult};
use crate::layout::RegisterLayout;
use crate::stats::{Statistics, Statistics2d};

/// The result of a 1D walk run.
#[derive(Debug, Clone)]
pub struct WalkOutput {
    /// Register sizing used for the run.
    pub layout: RegisterLayout,
    /// Shots the backend was asked for.
    pub shots: u32,
    /// Raw position distribution.
    pub distribution: Distribution,
    /// Smoothed distribution, when the config requests smoothing.
    pub smoothed: Option<Distribution>,
    /// Statistics over the raw (unsmoothed) counts.
    pub stats: Statistics,
}

/// The result of a 2D walk run.
#[derive(Debug, Clone)]
pub struct WalkOutput2d {
    /// Register sizing used for the run (per axis).
    pub layout: RegisterLayout,
    /// Shots the backend was asked for.
    pub shots: u32,
    /// Raw position grid.
    pub distribution: Grid,
    /// Smoothed grid, when the config requests smoothing.
    pub smoothed: Option<Grid>,
    /// Statistics over the raw (unsmoothed) counts.
    pub stats: Statistics2d,
}

/// Run a 1D coined walk on `backend` and reduce the samples.
pub async fn run_walk_1d(config: &WalkConfig, backend: &dyn Backend) -> WalkResult<WalkOutput> {
    config.validate()?;
    if config.dims != LatticeDim::One {
        return Err(WalkError::InvalidConfiguration(format!(
            "configuration declares a {} walk, entry point runs 1d",
            config.dims
        )));
    }

    let layout = RegisterLayout::for_steps(config.steps)?;
    let program = compose::walk_1d(config, &layout)?;

    let job_id = backend.submit(&program, config.shots).await?;
    let result = backend.wait(&job_id).await?;
    debug!(
        backend = backend.name(),
        outcomes = result.counts.len(),
        "1d walk sampled"
    );

    let mut samples = Vec::with_capacity(result.counts.len());
    for (outcome, &count) in result.counts.iter() {
        samples.push((decode::decode_position(outcome, &layout)?, count));
    }

    let stats = Statistics::from_samples(&samples).ok_or_else(empty_outcome)?;
    let distribution = Distribution::from_samples(&layout, &samples);
    let smoothed = config.smoothing_sigma.map(|sigma| distribution.smoothed(sigma));

    Ok(WalkOutput {
        layout,
        shots: config.shots,
        distribution,
        smoothed,
        stats,
    })
}

/// Run a 2D coined walk on `backend` and reduce the samples.
pub async fn run_walk_2d(config: &WalkConfig, backend: &dyn Backend) -> WalkResult<WalkOutput2d> {
    config.validate()?;
    if config.dims != LatticeDim::Two {
        return Err(WalkError::InvalidConfiguration(format!(
            "configuration declares a {} walk, entry point runs 2d",
            config.dims
        )));
    }

    let layout = RegisterLayout::for_steps(config.steps)?;
    let program = compose::walk_2d(config, &layout)?;

    let job_id = backend.submit(&program, config.shots).await?;
    let result = backend.wait(&job_id).await?;
    debug!(
        backend = backend.name(),
        outcomes = result.counts.len(),
        "2d walk sampled"
    );

    let mut samples = Vec::with_capacity(result.counts.len());
    for (outcome, &count) in result.counts.iter() {
        samples.push((decode::decode_position_2d(outcome, &layout)?, count));
    }

    let stats = Statistics2d::from_samples(&samples).ok_or_else(empty_outcome)?;
    let distribution = Grid::from_samples(&layout, &samples);
    let smoothed = config.smoothing_sigma.map(|sigma| distribution.smoothed(sigma));

    Ok(WalkOutput2d {
        layout,
        shots: config.shots,
        distribution,
        smoothed,
        stats,
    })
}

fn empty_outcome() -> WalkError {
    WalkError::Backend(HalError::Backend(
        "backend returned an empty outcome set".into(),
    ))
}
