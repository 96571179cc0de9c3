//! Summary statistics over sampled positions.
//!
//! Statistics are always computed from the raw decoded counts, never from
//! a smoothed table: smoothing is a presentation aid and must not move
//! the reported mean, spread, or modes.

use serde::{Deserialize, Serialize};

/// Summary of a 1D sampled position set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Probability-weighted mean position.
    pub mean: f64,
    /// Probability-weighted standard deviation.
    pub std_dev: f64,
    /// All positions achieving the maximum raw count, ascending.
    pub modes: Vec<i64>,
    /// Smallest observed position.
    pub min: i64,
    /// Largest observed position.
    pub max: i64,
}

impl Statistics {
    /// Summarize decoded `(position, count)` samples.
    ///
    /// Returns `None` for an empty or all-zero sample set — a backend
    /// that produced no outcomes has nothing to summarize.
    pub fn from_samples(samples: &[(i64, u64)]) -> Option<Self> {
        let total: u64 = samples.iter().map(|&(_, c)| c).sum();
        if total == 0 {
            return None;
        }
        let total_f = total as f64;

        let mut mean = 0.0;
        for &(position, count) in samples {
            mean += position as f64 * count as f64 / total_f;
        }
        let mut variance = 0.0;
        for &(position, count) in samples {
            let d = position as f64 - mean;
            variance += d * d * count as f64 / total_f;
        }

        let observed = samples.iter().filter(|&&(_, c)| c > 0);
        let max_count = observed.clone().map(|&(_, c)| c).max()?;
        let mut modes: Vec<i64> = observed
            .clone()
            .filter(|&&(_, c)| c == max_count)
            .map(|&(p, _)| p)
            .collect();
        modes.sort_unstable();

        let min = observed.clone().map(|&(p, _)| p).min()?;
        let max = observed.clone().map(|&(p, _)| p).max()?;

        Some(Self {
            mean,
            std_dev: variance.sqrt(),
            modes,
            min,
            max,
        })
    }
}

/// Per-axis summary of a 2D sampled position set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStatistics {
    /// Probability-weighted mean along this axis.
    pub mean: f64,
    /// Probability-weighted standard deviation along this axis.
    pub std_dev: f64,
    /// Smallest observed coordinate on this axis.
    pub min: i64,
    /// Largest observed coordinate on this axis.
    pub max: i64,
}

/// Summary of a 2D sampled position set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics2d {
    /// Marginal statistics along x.
    pub x: AxisStatistics,
    /// Marginal statistics along y.
    pub y: AxisStatistics,
    /// All lattice points achieving the maximum raw count, ascending.
    pub modes: Vec<(i64, i64)>,
}

impl Statistics2d {
    /// Summarize decoded `((x, y), count)` samples.
    ///
    /// Returns `None` for an empty or all-zero sample set.
    pub fn from_samples(samples: &[((i64, i64), u64)]) -> Option<Self> {
        let xs: Vec<(i64, u64)> = samples.iter().map(|&((x, _), c)| (x, c)).collect();
        let ys: Vec<(i64, u64)> = samples.iter().map(|&((_, y), c)| (y, c)).collect();
        let x = Statistics::from_samples(&xs)?;
        let y = Statistics::from_samples(&ys)?;

        let max_count = samples.iter().filter(|&&(_, c)| c > 0).map(|&(_, c)| c).max()?;
        let mut modes: Vec<(i64, i64)> = samples
            .iter()
            .filter(|&&(_, c)| c == max_count)
            .map(|&(p, _)| p)
            .collect();
        modes.sort_unstable();

        Some(Self {
            x: AxisStatistics {
                mean: x.mean,
                std_dev: x.std_dev,
                min: x.min,
                max: x.max,
            },
            y: AxisStatistics {
                mean: y.mean,
                std_dev: y.std_dev,
                min: y.min,
                max: y.max,
            },
            modes,
        })
    }
}
