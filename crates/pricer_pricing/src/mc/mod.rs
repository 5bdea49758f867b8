//! Monte Carlo pricing of path-dependent equity options.
//!
//! This module provides the simulation infrastructure used by the
//! path-dependent payoffs in [`crate::path_dependent`].
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine<S: PathSimulator>
//! ├── MonteCarloConfig   (path count, step count, optional seed)
//! ├── S                  (PortableSimulator | ParallelSimulator | SimulatorBackend)
//! └── Orchestration
//!     ├── simulate()      GBM paths, blocks of BLOCK_SIZE
//!     ├── evaluate()      PathPayoff per row
//!     └── price()         discounted mean and standard error
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pricer_models::instruments::exotic::DigitalOption;
//! use pricer_models::instruments::{EquityOption, OptionType};
//! use pricer_pricing::mc::{price_digital_option_mc, MonteCarloConfig, SimulatorBackend};
//!
//! let vanilla = EquityOption::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
//! let config = MonteCarloConfig::builder().n_paths(5_000).n_steps(10).seed(7).build().unwrap();
//!
//! let digital = DigitalOption::unit(vanilla);
//! let result = price_digital_option_mc(&digital, &config, SimulatorBackend::detect()).unwrap();
//! assert!(result.price > 0.0 && result.price < 1.0);
//! ```

mod config;
mod engine;
mod error;
mod paths;
mod simulator;

pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_PATHS, DEFAULT_STEPS, MAX_PATHS,
    MAX_PATH_VALUES, MAX_STEPS,
};
pub use engine::{
    price_asian_option_mc, price_barrier_option_mc, price_digital_option_mc, MonteCarloEngine,
    PricingResult,
};
pub use error::{ConfigError, SimulationError};
pub use paths::{fill_block, GbmParams, PathMatrix, BLOCK_SIZE};
pub use simulator::{
    ParallelSimulator, PathSimulator, PortableSimulator, SimulatorBackend, UnknownBackend,
};
