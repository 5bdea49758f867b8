//! Market data error types.
//!
//! This module provides structured error handling for discount and credit
//! curve construction and lookups.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidMaturity`: Negative (or non-finite) time to maturity
/// - `InvalidRate`: Non-finite curve rate
/// - `InvalidHazardRate`: Negative or non-finite hazard rate
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarketDataError {
    /// Invalid maturity (negative time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Curve rate is NaN or infinite.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Hazard rate is negative or not finite.
    #[error("Invalid hazard rate: lambda = {rate}")]
    InvalidHazardRate {
        /// The invalid hazard rate
        rate: f64,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_maturity_display() {
        let err = MarketDataError::InvalidMaturity { t: -0.5 };
        assert_eq!(format!("{}", err), "Invalid maturity: t = -0.5");
    }

    #[test]
    fn test_invalid_hazard_rate_display() {
        let err = MarketDataError::InvalidHazardRate { rate: -0.01 };
        assert!(format!("{}", err).contains("-0.01"));
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = MarketDataError::InvalidRate { rate: f64::NAN }.into();
        assert!(matches!(err, PricingError::InvalidParameter(_)));
    }
}
