//! Schedule generation error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur during schedule generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// Maturity is not a positive finite number of years.
    #[error("Invalid schedule maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity.
        maturity: f64,
    },

    /// Payment frequency below one payment per year.
    #[error("Invalid payment frequency: {frequency} payments per year, expected at least 1")]
    InvalidFrequency {
        /// The invalid frequency.
        frequency: u32,
    },

    /// `round(maturity · frequency)` exceeds `MAX_PAYMENTS`.
    #[error("Too many payments: {count} exceeds the limit of {max}")]
    TooManyPayments {
        /// Requested payment count.
        count: f64,
        /// Largest accepted count.
        max: usize,
    },

    /// Accrual fraction negative or not finite.
    #[error("Invalid accrual fraction: {accrual}")]
    InvalidAccrual {
        /// The invalid accrual.
        accrual: f64,
    },

    /// Payment times must be finite, non-negative and strictly increasing.
    #[error("Invalid payment time {time} at index {index}")]
    InvalidPaymentTime {
        /// Position of the offending time.
        index: usize,
        /// The offending time.
        time: f64,
    },
}

impl From<ScheduleError> for PricingError {
    fn from(err: ScheduleError) -> Self {
        PricingError::InvalidParameter(err.to_string())
    }
}
