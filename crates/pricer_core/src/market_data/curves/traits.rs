//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Discounting contract consumed by the rates and credit pricers.
///
/// # Contract
///
/// - `discount_factor(t)` returns D(t), the present value of 1 paid at `t`
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
/// - `forward_rate(t1, t2)` returns the forward rate between t1 and t2
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
/// - negative maturities are rejected with `MarketDataError::InvalidMaturity`
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// let fwd = curve.forward_rate(1.0, 2.0).unwrap();
/// assert!((fwd - 0.05).abs() < 1e-10);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t <= 0`.
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        let df = self.discount_factor(t)?;
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(-df.ln() / t)
    }

    /// Return the forward rate between `t1` and `t2`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if either time is negative or `t2 <= t1`.
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// f(t1, t2) = -ln(D(t2) / D(t1)) / (t2 - t1)
    /// ```
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        let df1 = self.discount_factor(t1)?;
        let df2 = self.discount_factor(t2)?;
        let dt = t2 - t1;
        if dt <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: dt.to_f64().unwrap_or(0.0),
            });
        }
        Ok(-(df2 / df1).ln() / dt)
    }
}
