//! Credit curve abstractions for reduced-form default modelling.
//!
//! This module provides:
//! - [`CreditCurve`]: Generic trait for hazard rate and survival probability calculations
//! - [`FlatHazardRateCurve`]: Constant hazard rate curve implementation

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic credit curve trait for hazard rate and survival probability calculations.
///
/// # Contract
///
/// - `hazard_rate(t)` returns the instantaneous hazard rate λ(t) at time t
/// - `survival_probability(t)` returns P(τ > t) = exp(-∫₀ᵗ λ(s)ds)
/// - `default_probability(t)` returns P(τ ≤ t) = 1 - P(τ > t)
///
/// # Invariants
///
/// - λ(t) ≥ 0 for all t ≥ 0
/// - P(τ > 0) = 1
/// - P(τ > t) is non-increasing in t
pub trait CreditCurve<T: Float> {
    /// Return the instantaneous hazard rate at time `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn hazard_rate(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the survival probability P(τ > t).
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn survival_probability(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the default probability P(τ ≤ t).
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// P(τ ≤ t) = 1 - P(τ > t)
    /// ```
    fn default_probability(&self, t: T) -> Result<T, MarketDataError> {
        Ok(T::one() - self.survival_probability(t)?)
    }
}

/// Credit curve with a constant default intensity.
///
/// Survival decays as `S(t) = exp(-λ t)`.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CreditCurve, FlatHazardRateCurve};
///
/// let curve = FlatHazardRateCurve::new(0.01_f64); // 100bp hazard rate
///
/// let surv = curve.survival_probability(5.0).unwrap();
/// let expected = (-0.01_f64 * 5.0).exp();
/// assert!((surv - expected).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatHazardRateCurve<T: Float> {
    /// The constant hazard rate
    hazard_rate: T,
}

impl<T: Float> FlatHazardRateCurve<T> {
    /// Construct a flat hazard rate curve.
    #[inline]
    pub fn new(hazard_rate: T) -> Self {
        Self { hazard_rate }
    }

    /// Construct a flat hazard rate curve, rejecting negative or non-finite intensities.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidHazardRate` if `hazard_rate < 0` or is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::FlatHazardRateCurve;
    ///
    /// assert!(FlatHazardRateCurve::try_new(0.0_f64).is_ok());
    /// assert!(FlatHazardRateCurve::try_new(-0.01_f64).is_err());
    /// ```
    pub fn try_new(hazard_rate: T) -> Result<Self, MarketDataError> {
        if !hazard_rate.is_finite() || hazard_rate < T::zero() {
            return Err(MarketDataError::InvalidHazardRate {
                rate: hazard_rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self::new(hazard_rate))
    }

    /// Return the constant hazard rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.hazard_rate
    }
}

impl<T: Float> CreditCurve<T> for FlatHazardRateCurve<T> {
    fn hazard_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.hazard_rate)
    }

    fn survival_probability(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.hazard_rate * t).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // FlatHazardRateCurve Tests
    // ========================================

    #[test]
    fn test_flat_curve_hazard_rate() {
        let curve = FlatHazardRateCurve::new(0.02_f64);
        assert_eq!(curve.hazard_rate(1.0).unwrap(), 0.02);
        assert_eq!(curve.hazard_rate(7.0).unwrap(), 0.02);
        assert!(curve.hazard_rate(-1.0).is_err());
    }

    #[test]
    fn test_flat_curve_survival_at_zero() {
        let curve = FlatHazardRateCurve::new(0.02_f64);
        assert_eq!(curve.survival_probability(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_zero_hazard_never_defaults() {
        let curve = FlatHazardRateCurve::new(0.0_f64);
        assert_eq!(curve.survival_probability(30.0).unwrap(), 1.0);
        assert_eq!(curve.default_probability(30.0).unwrap(), 0.0);
    }

    #[test]
    fn test_flat_curve_survival_plus_default() {
        let curve = FlatHazardRateCurve::new(0.015_f64);
        let surv = curve.survival_probability(3.0).unwrap();
        let def = curve.default_probability(3.0).unwrap();
        assert_relative_eq!(surv + def, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_survival_is_non_increasing() {
        let curve = FlatHazardRateCurve::new(0.05_f64);
        let mut prev = 1.0;
        for i in 1..=40 {
            let s = curve.survival_probability(i as f64 * 0.25).unwrap();
            assert!(s <= prev);
            prev = s;
        }
    }

    #[test]
    fn test_try_new_validation() {
        assert!(matches!(
            FlatHazardRateCurve::try_new(f64::NAN),
            Err(MarketDataError::InvalidHazardRate { .. })
        ));
        assert_eq!(FlatHazardRateCurve::try_new(0.03_f64).unwrap().rate(), 0.03);
    }
}
