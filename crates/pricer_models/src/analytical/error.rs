//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to analytical pricing models

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Non-positive volatility and zero expiry are deliberately absent: both are
/// priced at intrinsic value rather than rejected.
///
/// # Variants
/// - `InvalidSpot`: Non-positive spot price
/// - `InvalidForward`: Non-positive forward price (Black-76)
/// - `InvalidStrike`: Non-positive strike price
/// - `InvalidExpiry`: Negative time to expiry
/// - `NonFiniteInput`: NaN or infinite model input
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidStrike { strike: -5.0 };
/// assert!(format!("{}", err).contains("-5"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid forward price (non-positive).
    #[error("Invalid forward price: F = {forward}")]
    InvalidForward {
        /// The invalid forward value
        forward: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry (negative).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Model input is NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Name of the offending input
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl AnalyticalError {
    /// Reject NaN and infinite inputs.
    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(AnalyticalError::NonFiniteInput { name, value })
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidParameter(err.to_string()),
        }
    }
}
