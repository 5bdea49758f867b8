//! # pricer_optimiser
//!
//! Calibration for Neutryx.
//!
//! This crate sits between Models (L2) and Pricing (L3) in the architecture,
//! solving inverse problems against the analytic models of `pricer_models`.
//!
//! ## Architecture Position
//!
//! Layer 2.5 in the **P**ricer layer.
//! Depends on `pricer_core` (L1) and `pricer_models` (L2).
//!
//! ## Modules
//!
//! - `calibration`: Newton-Raphson implied volatility with a convergence report
//!
//! ## Example
//!
//! ```rust
//! use pricer_models::analytical::black_scholes_price;
//! use pricer_models::instruments::OptionType;
//! use pricer_optimiser::calibration::{ConvergenceStatus, ImpliedVolSolver};
//!
//! let market_price = black_scholes_price(100.0, 110.0, 0.5, 0.03, 0.0, 0.35, OptionType::Call)?;
//!
//! let result = ImpliedVolSolver::with_settings(1e-8, 50)?
//!     .solve(market_price, 100.0, 110.0, 0.5, 0.03, 0.0, OptionType::Call)?;
//!
//! assert_eq!(result.status, ConvergenceStatus::Converged);
//! assert!((result.volatility - 0.35).abs() < 1e-6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

pub mod calibration;

mod error;

pub use error::CalibrationError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::calibration::*;
    pub use crate::CalibrationError;
}
