//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton with continuous dividend yield
//! - Black-76 for options on forwards (rate options)
//! - Garman-Kohlhagen for FX options
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! Black-76 and Garman-Kohlhagen are parameter remappings of the
//! Black-Scholes core rather than separate derivations.

pub mod black_scholes;
pub mod error;
pub mod greeks;

#[cfg(feature = "rates")]
pub mod black76;

#[cfg(feature = "fx")]
pub mod garman_kohlhagen;

// Re-export main types at module level
pub use black_scholes::{black_scholes_price, BlackScholes};
pub use error::AnalyticalError;
pub use greeks::{black_scholes_greeks, Greeks};

#[cfg(feature = "rates")]
pub use black76::{black76_price, Black76};

#[cfg(feature = "fx")]
pub use garman_kohlhagen::{garman_kohlhagen_price, GarmanKohlhagen};
