//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function Φ
//! - `norm_pdf`: Probability density function φ
//!
//! Φ is evaluated through the error function from `statrs`. Its absolute
//! error is of order 1e-11, well inside the tolerances of the pricers.

use statrs::function::erf::erf;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// # Mathematical Definition
/// Φ(x) = 0.5 * (1 + erf(x / sqrt(2)))
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0) - 0.8413447460685429).abs() < 1e-10);
/// assert!(norm_cdf(-40.0) >= 0.0);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804014327).abs() < 1e-15);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}
