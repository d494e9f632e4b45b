//! Penalty and threshold configuration, threaded through the pipeline
//! explicitly instead of read from module-level constants.

use serde::{Deserialize, Serialize};

use crate::error::{PargenfsError, Result};

/// Default threshold (θ), below the configured recommended range's midpoint.
pub const DEFAULT_THRESHOLD: f64 = 0.15;
/// Default leaf penalty coefficient (γ).
pub const DEFAULT_GAMMA: f64 = 0.9;
/// Default lift-cost coefficient (λ).
pub const DEFAULT_LAMBDA: f64 = 0.2;

/// The three penalty coefficients plus the cluster column to lift, validated
/// once at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Leaf memberships below this value are zeroed during truncation.
    pub threshold: f64,
    /// Leaf-membership penalty coefficient.
    pub gamma: f64,
    /// Lift-cost coefficient applied to a node's cumulative gap importance.
    pub lambda: f64,
    /// 0-based column index into the membership matrix.
    pub cluster_number: usize,
}

impl Config {
    /// Builds a `Config`, rejecting out-of-domain coefficients.
    ///
    /// θ must lie in `[0, 1]`; γ and λ must be non-negative.
    pub fn new(threshold: f64, gamma: f64, lambda: f64, cluster_number: usize) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PargenfsError::InvalidConfig {
                message: format!("threshold must be in [0, 1], got {threshold}"),
            });
        }
        if gamma < 0.0 {
            return Err(PargenfsError::InvalidConfig {
                message: format!("gamma must be >= 0, got {gamma}"),
            });
        }
        if lambda < 0.0 {
            return Err(PargenfsError::InvalidConfig {
                message: format!("lambda must be >= 0, got {lambda}"),
            });
        }

        Ok(Self {
            threshold,
            gamma,
            lambda,
            cluster_number,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            gamma: DEFAULT_GAMMA,
            lambda: DEFAULT_LAMBDA,
            cluster_number: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(Config::new(config.threshold, config.gamma, config.lambda, config.cluster_number).is_ok());
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        assert!(Config::new(-0.1, 0.9, 0.2, 0).is_err());
        assert!(Config::new(1.1, 0.9, 0.2, 0).is_err());
    }

    #[test]
    fn rejects_negative_coefficients() {
        assert!(Config::new(0.15, -0.1, 0.2, 0).is_err());
        assert!(Config::new(0.15, 0.9, -0.2, 0).is_err());
    }
}
