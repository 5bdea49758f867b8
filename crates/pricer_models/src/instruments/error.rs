//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction and pricing.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

use crate::analytical::AnalyticalError;
use crate::schedules::ScheduleError;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidSpot` / `InvalidForward` / `InvalidStrike`: Non-positive price inputs
/// - `InvalidExpiry`: Negative (or, for a CDS, non-positive) maturity
/// - `InvalidNotional` / `InvalidBarrier` / `InvalidPayout`: Non-positive contract amounts
/// - `InvalidDividendYield`: Negative dividend yield
/// - `InvalidRecoveryRate`: Recovery outside [0, 1]
/// - `InvalidHazardRate`: Negative hazard rate
/// - `NonFinite`: NaN or infinite input
/// - `UnknownOptionType` / `UnknownBarrierType`: Unparseable discriminator
/// - `Analytical` / `Schedule` / `MarketData`: Wrapped lower-level errors
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid forward (non-positive).
    #[error("Invalid forward: F = {forward}")]
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

    /// Invalid expiry time.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid notional amount.
    #[error("Invalid notional: N = {notional}")]
    InvalidNotional {
        /// The invalid notional value
        notional: f64,
    },

    /// Invalid barrier level (non-positive).
    #[error("Invalid barrier: B = {barrier}")]
    InvalidBarrier {
        /// The invalid barrier value
        barrier: f64,
    },

    /// Invalid digital payout (non-positive).
    #[error("Invalid payout: {payout}")]
    InvalidPayout {
        /// The invalid payout value
        payout: f64,
    },

    /// Invalid dividend yield (negative).
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The invalid dividend yield
        dividend_yield: f64,
    },

    /// Recovery rate outside [0, 1].
    #[error("Invalid recovery rate: R = {recovery_rate}, expected 0 <= R <= 1")]
    InvalidRecoveryRate {
        /// The invalid recovery rate
        recovery_rate: f64,
    },

    /// Hazard rate negative.
    #[error("Invalid hazard rate: lambda = {hazard_rate}")]
    InvalidHazardRate {
        /// The invalid hazard rate
        hazard_rate: f64,
    },

    /// Input is NaN or infinite.
    #[error("Non-finite input: {name} = {value}")]
    NonFinite {
        /// Name of the offending input
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Option type string not recognised.
    #[error("Unknown option type: {value:?}, expected \"call\" or \"put\"")]
    UnknownOptionType {
        /// The unparsed value
        value: String,
    },

    /// Barrier type string not recognised.
    #[error("Unknown barrier type: {value:?}, expected one of up-and-out, down-and-out, up-and-in, down-and-in")]
    UnknownBarrierType {
        /// The unparsed value
        value: String,
    },

    /// Closed-form model error.
    #[error(transparent)]
    Analytical(#[from] AnalyticalError),

    /// Payment schedule error.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Curve error.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::UnknownOptionType { .. } | InstrumentError::UnknownBarrierType { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            InstrumentError::Analytical(inner) => inner.into(),
            InstrumentError::Schedule(inner) => inner.into(),
            InstrumentError::MarketData(inner) => inner.into(),
            other => PricingError::InvalidParameter(other.to_string()),
        }
    }
}
