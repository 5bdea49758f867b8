//! Path-dependent and digital equity options.
//!
//! - [`AsianOption`]: Arithmetic-average fixed-strike option
//! - [`BarrierOption`]: Single-barrier knock-in/knock-out option
//! - [`DigitalOption`]: Cash-or-nothing option
//!
//! These records only describe the contract and its per-path payoff; they
//! are priced by simulation in `pricer_pricing`.
//!
//! # Feature Flag
//!
//! This module is available when the `exotic` feature is enabled.

mod asian;
mod barrier;
mod digital;

pub use asian::AsianOption;
pub use barrier::{BarrierOption, BarrierType};
pub use digital::{DigitalOption, DEFAULT_PAYOUT};
