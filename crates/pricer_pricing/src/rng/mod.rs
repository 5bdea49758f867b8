//! # Random Number Generation Infrastructure
//!
//! Seeded pseudo-random number generation for Monte Carlo simulation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded for deterministic sequences
//! - **Sub-streams**: [`PricerRng::for_stream`] derives an independent
//!   generator per `(seed, stream)` pair for sharded path generation
//! - **Efficiency**: Batch operations fill caller-owned `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//! let normal_value = rng.gen_normal();
//!
//! // Block 3 of a sharded run
//! let mut block_rng = PricerRng::for_stream(12345, 3);
//! let mut buffer = vec![0.0; 1000];
//! block_rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
