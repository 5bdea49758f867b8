//! Interest rate instruments.
//!
//! - [`RateOption`]: European option on a forward, priced with Black-76
//! - [`InterestRateSwap`]: Fixed-vs-floating swap on a regular schedule
//! - [`pricing`]: Zero-coupon and swap valuation on any [`YieldCurve`]
//!
//! # Feature Flag
//!
//! This module is available when the `rates` feature is enabled.
//!
//! [`YieldCurve`]: pricer_core::market_data::curves::YieldCurve

mod option;
pub mod pricing;
mod swap;

pub use option::RateOption;
pub use pricing::{par_swap_rate, price_fixed_floating_swap, price_zero_coupon, swap_annuity};
pub use swap::InterestRateSwap;
