//! Error types for the Monte Carlo engine.
//!
//! [`ConfigError`] covers configuration validation; [`SimulationError`]
//! covers runtime failures while simulating or aggregating.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::config::{MAX_PATHS, MAX_PATH_VALUES, MAX_STEPS};

/// Configuration error for the Monte Carlo engine.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, 10_000].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Path matrix `n_paths * (n_steps + 1)` exceeds [`MAX_PATH_VALUES`].
    #[error(
        "Path matrix too large: {n_paths} paths x {n_steps} steps exceeds {max} stored prices",
        max = MAX_PATH_VALUES
    )]
    MatrixTooLarge {
        /// Requested path count
        n_paths: usize,
        /// Requested step count
        n_steps: usize,
    },
}

/// Runtime error raised while simulating paths or aggregating payoffs.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Market input outside its domain (spot <= 0, negative maturity, NaN).
    #[error("Invalid simulation input: {name} = {value}")]
    InvalidInput {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Path matrix shape does not match the requested dimensions.
    #[error("Path matrix shape mismatch: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Expected number of values
        expected: usize,
        /// Actual number of values
        actual: usize,
    },

    /// Price estimate is NaN or infinite.
    #[error("Non-finite Monte Carlo estimate: {price}")]
    NonFiniteEstimate {
        /// The estimate produced
        price: f64,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::Config(inner) => inner.into(),
            SimulationError::InvalidInput { .. } => PricingError::InvalidParameter(err.to_string()),
            SimulationError::ShapeMismatch { .. } | SimulationError::NonFiniteEstimate { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::InvalidStepCount(20_000);
        assert!(err.to_string().contains("Invalid step count 20000"));
        assert!(err.to_string().contains("10000"));

        let err = ConfigError::MatrixTooLarge {
            n_paths: 10_000_000,
            n_steps: 10_000,
        };
        assert!(err.to_string().contains("250000000"));
    }

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::InvalidInput {
            name: "spot",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Invalid simulation input: spot = -1");
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = SimulationError::from(ConfigError::InvalidStepCount(0)).into();
        assert!(matches!(err, PricingError::InvalidParameter(_)));

        let err: PricingError = SimulationError::NonFiniteEstimate { price: f64::NAN }.into();
        assert!(matches!(err, PricingError::NumericalInstability(_)));
    }
}
