//! Flat yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// One basis point expressed as a decimal rate.
const BASIS_POINT: f64 = 1e-4;

/// Flat yield curve with a constant continuously-compounded rate.
///
/// The curve is immutable: scenario shifts produce a new curve.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// // Discount factor at t=1: exp(-0.05 * 1) ≈ 0.9512
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// // Zero rate is constant
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatCurve<T: Float> {
    /// The constant interest rate
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given constant rate.
    ///
    /// # Arguments
    ///
    /// * `rate` - The constant interest rate (continuously compounded)
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Construct a flat curve, rejecting NaN or infinite rates.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidRate` if `rate` is not finite.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::FlatCurve;
    ///
    /// assert!(FlatCurve::try_new(0.03_f64).is_ok());
    /// assert!(FlatCurve::try_new(f64::NAN).is_err());
    /// ```
    pub fn try_new(rate: T) -> Result<Self, MarketDataError> {
        if !rate.is_finite() {
            return Err(MarketDataError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self::new(rate))
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Return a new curve shifted in parallel by `bps` basis points.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::market_data::curves::FlatCurve;
    ///
    /// let curve = FlatCurve::new(0.03_f64);
    /// let bumped = curve.parallel_shift(25.0);
    /// assert!((bumped.rate() - 0.0325).abs() < 1e-15);
    /// assert_eq!(curve.rate(), 0.03);
    /// ```
    #[inline]
    pub fn parallel_shift(&self, bps: T) -> Self {
        let bp = T::from(BASIS_POINT).unwrap_or_else(T::zero);
        Self::new(self.rate + bps * bp)
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    /// Return the discount factor for maturity `t`.
    ///
    /// ```text
    /// D(t) = exp(-r * t)
    /// ```
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() || t.is_nan() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok((-self.rate * t).exp())
    }

    /// For a flat curve, the zero rate is simply the constant rate.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }

    /// For a flat curve, the forward rate equals the constant rate.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t1 < T::zero() || t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }
}
