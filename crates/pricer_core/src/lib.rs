//! # pricer_core: Mathematical Foundation for the Pricing Library
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Standard normal distribution primitives (`math::distributions`)
//! - Solver settings shared by the calibrators (`math::solvers`)
//! - Flat discount and hazard curves behind the `YieldCurve` and
//!   `CreditCurve` traits (`market_data::curves`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - statrs: Error function used by the normal CDF
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
//! use pricer_core::math::distributions::norm_cdf;
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - (-0.05_f64).exp()).abs() < 1e-15);
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for curves, solver settings and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
