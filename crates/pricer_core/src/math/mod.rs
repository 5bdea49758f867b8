//! Numerical building blocks shared by the model and calibration layers.
//!
//! - [`distributions`]: Standard normal CDF and PDF
//! - [`solvers`]: Convergence settings for iterative root finders

pub mod distributions;
pub mod solvers;
