//! Solver configuration types.

use crate::types::SolverError;
use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.tolerance, 1e-6);
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations before returning the best estimate.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-6
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive and finite)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Errors
    ///
    /// `SolverError::InvalidConfig` if either argument is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::SolverConfig;
    ///
    /// assert!(SolverConfig::new(1e-12_f64, 200).is_ok());
    /// assert!(SolverConfig::new(0.0_f64, 200).is_err());
    /// assert!(SolverConfig::new(1e-8_f64, 0).is_err());
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Result<Self, SolverError> {
        if !(tolerance > T::zero()) || !tolerance.is_finite() {
            return Err(SolverError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                tolerance.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if max_iterations == 0 {
            return Err(SolverError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        Ok(Self {
            tolerance,
            max_iterations,
        })
    }

    /// Create a configuration with high precision settings.
    ///
    /// Uses tighter tolerance (1e-12) and more iterations (500).
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-12).unwrap_or_else(T::epsilon),
            max_iterations: 500,
        }
    }
}
