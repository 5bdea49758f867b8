//! Root-finding solver settings.
//!
//! Root-finding solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance on the objective (default: 1e-6)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::SolverConfig;
//!
//! let config: SolverConfig<f64> = SolverConfig::new(1e-10, 50).unwrap();
//! assert_eq!(config.max_iterations, 50);
//! ```

mod config;

pub use config::SolverConfig;
