//! # Pricer Models (L2: Business Logic)
//!
//! Financial instruments, closed-form models and deterministic pricers.
//!
//! This crate provides:
//! - Instrument records (equity, FX and rate options, exotic option terms, CDS)
//! - Black-Scholes-Merton with continuous dividend yield, and its Black-76 and
//!   Garman-Kohlhagen reparameterisations
//! - The analytic Greeks engine
//! - The shared regular payment schedule
//! - Discount-curve pricers (zero coupon, annuity, par swap rate, swap PV)
//! - The constant-hazard CDS engine
//!
//! ## Design Principles
//!
//! - **Validated value records**: every instrument is checked on construction
//!   and immutable afterwards
//! - **Closed sum types** for option and barrier kinds
//! - **Degenerate markets are not errors**: zero volatility or zero maturity
//!   prices at intrinsic value

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod schedules;
