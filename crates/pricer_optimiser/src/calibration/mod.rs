//! Market calibration.
//!
//! - [`ImpliedVolSolver`]: Newton-Raphson implied volatility under
//!   Black-Scholes-Merton, reporting how the iteration ended
//! - [`implied_vol`]: scalar entry point returning only the estimate

mod implied_vol;

pub use implied_vol::{
    implied_vol, ConvergenceStatus, ImpliedVolResult, ImpliedVolSolver, INITIAL_GUESS,
    MIN_VOLATILITY, VEGA_FLOOR,
};
