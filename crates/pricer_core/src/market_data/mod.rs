//! Market data structures for discounting and default modelling.
//!
//! # Architecture
//!
//! Curves are generic over `T: Float` so the same trait contracts serve
//! `f64` and `f32` callers alike.
//!
//! # Components
//!
//! - [`curves`]: Yield and credit curve traits with flat implementations
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{CreditCurve, FlatCurve, FlatHazardRateCurve, YieldCurve};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//!
//! let hazard = FlatHazardRateCurve::new(0.02_f64);
//! let surv = hazard.survival_probability(1.0).unwrap();
//! assert!((surv - (-0.02_f64).exp()).abs() < 1e-15);
//! ```

pub mod curves;
pub mod error;

pub use error::MarketDataError;
