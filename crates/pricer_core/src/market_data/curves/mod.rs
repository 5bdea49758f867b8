//! Curve abstractions for interest rate and credit risk calculations.
//!
//! This module provides:
//! - [`YieldCurve`]: Generic trait for discount factor and rate calculations
//! - [`FlatCurve`]: Constant continuously-compounded rate
//! - [`CreditCurve`]: Generic trait for hazard rate and survival probability calculations
//! - [`FlatHazardRateCurve`]: Constant hazard rate curve implementation

mod credit;
mod flat;
mod traits;

pub use credit::{CreditCurve, FlatHazardRateCurve};
pub use flat::FlatCurve;
pub use traits::YieldCurve;
