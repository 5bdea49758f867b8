//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Crate-agnostic umbrella error surfaced by every pricing entry point
//! - `SolverError`: Errors from root-finding solver settings

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every layer-specific error (analytical, instrument, market data,
/// simulation, calibration) converts into this type, so callers only need
/// to match on the failure kind.
///
/// # Variants
/// - `InvalidParameter`: Non-finite or out-of-domain numeric input
/// - `UnsupportedInstrument`: Entry point invoked with a mismatched instrument shape
/// - `NumericalInstability`: A computation produced a non-finite value
///
/// Degenerate markets (zero volatility or zero maturity) and calibrator
/// non-convergence are not errors; they resolve to well-defined fallback
/// values.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter("spot must be positive, got -1".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter: spot must be positive, got -1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidParameter(String),

    /// Instrument shape not accepted by the entry point
    UnsupportedInstrument(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PricingError::UnsupportedInstrument(msg) => {
                write!(f, "Unsupported instrument: {}", msg)
            }
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Root-finding solver errors.
///
/// Iterative solvers report non-convergence in their result rather than as
/// an error, so the only failure is a rejected configuration.
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::InvalidConfig("max_iterations must be at least 1".to_string());
/// assert!(format!("{}", err).contains("max_iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver settings out of range.
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}
