//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing prices path-dependent equity options by Monte Carlo
//! simulation of Geometric Brownian Motion:
//! - Seeded, sharded random streams ([`rng`])
//! - Path generation behind the [`mc::PathSimulator`] trait, with a
//!   single-threaded and a rayon-backed backend
//! - Payoff evaluation for Asian, barrier and digital options ([`path_dependent`])
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError`
//! - Layer 2 (pricer_models): `EquityOption` and the exotic option records
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::exotic::{BarrierOption, BarrierType};
//! use pricer_models::instruments::{EquityOption, OptionType};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine, SimulatorBackend};
//!
//! let vanilla = EquityOption::new(100.0, 100.0, 1.0, 0.03, 0.0, 0.2, OptionType::Call).unwrap();
//! let barrier = BarrierOption::new(vanilla, 130.0, BarrierType::UpAndOut).unwrap();
//!
//! let config = MonteCarloConfig::builder().n_paths(4_000).n_steps(52).seed(42).build().unwrap();
//! let engine = MonteCarloEngine::new(config, SimulatorBackend::detect()).unwrap();
//! let result = engine.price_barrier(&barrier).unwrap();
//!
//! assert!(result.price > 0.0);
//! assert!(result.price < vanilla.price().unwrap());
//! ```
//!
//! ## Reproducibility
//!
//! A fixed seed gives the same estimate on every backend and thread count.
//! Without a seed the engine draws one from system entropy and reports it in
//! [`mc::PricingResult::seed`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

pub mod mc;
pub mod path_dependent;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    GbmParams, MonteCarloConfig, MonteCarloEngine, PathSimulator, PricingResult, SimulatorBackend,
};
pub use path_dependent::PathPayoff;
