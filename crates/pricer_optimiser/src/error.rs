//! Calibration error types.

use pricer_core::types::{PricingError, SolverError};
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

/// Errors raised before a calibration starts iterating.
///
/// Failing to converge is not an error: the solver reports it through
/// [`ConvergenceStatus`](crate::calibration::ConvergenceStatus) and still
/// returns its best estimate.
///
/// # Examples
///
/// ```
/// use pricer_optimiser::CalibrationError;
///
/// let err = CalibrationError::InvalidTarget { price: f64::NAN };
/// assert!(format!("{}", err).contains("NaN"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    /// Target price is NaN or infinite.
    #[error("Invalid target price: {price}")]
    InvalidTarget {
        /// The offending target price
        price: f64,
    },

    /// Tolerance or iteration limit out of range.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// Market inputs rejected by the pricing model.
    #[error("Model error: {0}")]
    Analytical(#[from] AnalyticalError),
}

impl From<CalibrationError> for PricingError {
    fn from(err: CalibrationError) -> Self {
        match err {
            CalibrationError::InvalidTarget { .. } => {
                PricingError::InvalidParameter(err.to_string())
            }
            CalibrationError::Solver(e) => e.into(),
            CalibrationError::Analytical(e) => e.into(),
        }
    }
}
