//! Walk configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{WalkError, WalkResult};

/// Default number of shots per run.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Lattice dimensionality of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LatticeDim {
    /// Walk on the integer line.
    One,
    /// Walk on the integer plane.
    Two,
}

impl fmt::Display for LatticeDim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeDim::One => write!(f, "1d"),
            LatticeDim::Two => write!(f, "2d"),
        }
    }
}

/// Initial coin state convention.
///
/// The symmetric convention follows the uniform-superposition operator
/// with a quarter-turn phase shift, producing a complex-balanced coin
/// whose walk profile spreads evenly in both directions. The asymmetric
/// convention skips the phase and drifts to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinMode {
    /// Balanced initial coin (H then S).
    Symmetric,
    /// One-sided initial coin (H only).
    Asymmetric,
}

impl fmt::Display for CoinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinMode::Symmetric => write!(f, "symmetric"),
            CoinMode::Asymmetric => write!(f, "asymmetric"),
        }
    }
}

impl FromStr for CoinMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "symmetric" => Ok(CoinMode::Symmetric),
            "asymmetric" => Ok(CoinMode::Asymmetric),
            other => Err(format!(
                "unknown coin mode '{other}' (expected 'symmetric' or 'asymmetric')"
            )),
        }
    }
}

/// Immutable input describing one walk run.
///
/// Shot count and smoothing width are explicit per-run fields rather than
/// process-wide constants; the documented defaults are [`DEFAULT_SHOTS`]
/// shots and no smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Number of walk steps, at least 1.
    pub steps: u32,
    /// Lattice dimensionality.
    pub dims: LatticeDim,
    /// Initial coin state convention.
    pub coin: CoinMode,
    /// Number of shots to request from the backend.
    pub shots: u32,
    /// Standard deviation of the optional Gaussian smoothing pass over
    /// the resulting distribution. `None` leaves the distribution raw.
    pub smoothing_sigma: Option<f64>,
}

impl WalkConfig {
    /// Create a configuration with the documented defaults: symmetric
    /// coin, [`DEFAULT_SHOTS`] shots, no smoothing.
    pub fn new(steps: u32, dims: LatticeDim) -> Self {
        Self {
            steps,
            dims,
            coin: CoinMode::Symmetric,
            shots: DEFAULT_SHOTS,
            smoothing_sigma: None,
        }
    }

    /// Set the coin mode.
    pub fn with_coin(mut self, coin: CoinMode) -> Self {
        self.coin = coin;
        self
    }

    /// Set the shot count.
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Enable Gaussian smoothing with the given standard deviation.
    pub fn with_smoothing(mut self, sigma: f64) -> Self {
        self.smoothing_sigma = Some(sigma);
        self
    }

    /// Check the configuration for values no walk can be built from.
    pub fn validate(&self) -> WalkResult<()> {
        if self.steps < 1 {
            return Err(WalkError::InvalidConfiguration(format!(
                "step count must be at least 1, got {}",
                self.steps
            )));
        }
        if self.shots < 1 {
            return Err(WalkError::InvalidConfiguration(
                "shot count must be at least 1".into(),
            ));
        }
        if let Some(sigma) = self.smoothing_sigma {
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(WalkError::InvalidConfiguration(format!(
                    "smoothing sigma must be finite and positive, got {sigma}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalkConfig::new(5, LatticeDim::One);
        assert_eq!(config.coin, CoinMode::Symmetric);
        assert_eq!(config.shots, DEFAULT_SHOTS);
        assert!(config.smoothing_sigma.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let config = WalkConfig::new(3, LatticeDim::Two)
            .with_coin(CoinMode::Asymmetric)
            .with_shots(2048)
            .with_smoothing(1.0);
        assert_eq!(config.coin, CoinMode::Asymmetric);
        assert_eq!(config.shots, 2048);
        assert_eq!(config.smoothing_sigma, Some(1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let config = WalkConfig::new(0, LatticeDim::One);
        assert!(matches!(
            config.validate(),
            Err(WalkError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_bad_sigma_rejected() {
        let config = WalkConfig::new(2, LatticeDim::One).with_smoothing(0.0);
        assert!(config.validate().is_err());

        let config = WalkConfig::new(2, LatticeDim::One).with_smoothing(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_coin_mode_parse() {
        assert_eq!("symmetric".parse::<CoinMode>().unwrap(), CoinMode::Symmetric);
        assert_eq!(
            "Asymmetric".parse::<CoinMode>().unwrap(),
            CoinMode::Asymmetric
        );
        assert!("sideways".parse::<CoinMode>().is_err());
    }
}
