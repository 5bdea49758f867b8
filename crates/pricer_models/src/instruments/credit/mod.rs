//! Credit derivative instruments.
//!
//! - [`CreditDefaultSwap`]: Single-name CDS under a constant hazard rate
//! - [`CdsPricer`]: Leg valuation on any discount and credit curve pair
//!
//! # Feature Flag
//!
//! This module is available when the `credit` feature is enabled.

mod cds;
mod pricing;

pub use cds::{
    CreditDefaultSwap, DEFAULT_DISCOUNT_RATE, DEFAULT_HAZARD_RATE, DEFAULT_PAYMENT_FREQUENCY,
    DEFAULT_RECOVERY_RATE,
};
pub use pricing::{fair_cds_spread, price_cds, CdsPriceResult, CdsPricer};
