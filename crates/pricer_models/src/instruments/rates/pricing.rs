//! Discount-curve pricing for zero coupons and fixed-vs-floating swaps.
//!
//! With a single curve for discounting and projection, the floating leg of a
//! swap starting today is worth `N·(1 - D(t_n))`, so only discount factors on
//! the payment schedule are needed:
//!
//! ```text
//! annuity   = Σ D(tᵢ)·accrual
//! par rate  = (1 - D(t_n)) / annuity
//! swap PV   = N·(1 - D(t_n)) - fixed_rate·annuity·N     (receive floating, pay fixed)
//! ```
//!
//! An empty schedule values to zero, and so does the par rate when the
//! annuity is not positive.
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::FlatCurve;
//! use pricer_models::instruments::rates::pricing::{par_swap_rate, price_fixed_floating_swap};
//! use pricer_models::schedules::PaymentSchedule;
//!
//! let curve = FlatCurve::new(0.03);
//! let schedule = PaymentSchedule::regular(5.0, 2).unwrap();
//!
//! let par = par_swap_rate(&curve, &schedule).unwrap();
//! let pv = price_fixed_floating_swap(par, 1_000_000.0, &curve, &schedule).unwrap();
//! assert!(pv.abs() < 1e-6);
//! ```

use pricer_core::market_data::curves::YieldCurve;

use crate::instruments::error::InstrumentError;
use crate::instruments::params;
use crate::schedules::PaymentSchedule;

/// Present value of a zero-coupon bond: `face · D(maturity)`.
///
/// # Errors
/// - `InstrumentError::NonFinite` if face is NaN or infinite
/// - `InstrumentError::MarketData` if maturity is negative
///
/// # Examples
/// ```
/// use pricer_core::market_data::curves::FlatCurve;
/// use pricer_models::instruments::rates::pricing::price_zero_coupon;
///
/// let pv = price_zero_coupon(100.0, 2.0, &FlatCurve::new(0.05)).unwrap();
/// assert!((pv - 100.0 * (-0.1_f64).exp()).abs() < 1e-12);
/// ```
pub fn price_zero_coupon<C: YieldCurve<f64>>(
    face: f64,
    maturity: f64,
    curve: &C,
) -> Result<f64, InstrumentError> {
    params::finite("face", face)?;
    Ok(face * curve.discount_factor(maturity)?)
}

/// Fixed-leg annuity `Σ D(tᵢ)·accrual` over the schedule.
///
/// # Errors
/// `InstrumentError::MarketData` if the curve rejects a payment time.
pub fn swap_annuity<C: YieldCurve<f64>>(
    curve: &C,
    schedule: &PaymentSchedule,
) -> Result<f64, InstrumentError> {
    let accrual = schedule.accrual();
    schedule.times().iter().try_fold(0.0, |acc, &t| {
        Ok(acc + curve.discount_factor(t)? * accrual)
    })
}

/// Fixed rate that sets the swap value to zero.
///
/// Returns 0 for an empty schedule or a non-positive annuity.
///
/// # Errors
/// `InstrumentError::MarketData` if the curve rejects a payment time.
pub fn par_swap_rate<C: YieldCurve<f64>>(
    curve: &C,
    schedule: &PaymentSchedule,
) -> Result<f64, InstrumentError> {
    let Some(last) = schedule.last_time() else {
        return Ok(0.0);
    };
    let annuity = swap_annuity(curve, schedule)?;
    if annuity <= 0.0 {
        return Ok(0.0);
    }
    Ok((1.0 - curve.discount_factor(last)?) / annuity)
}

/// Value of a swap receiving floating and paying `fixed_rate`.
///
/// Returns 0 for an empty schedule.
///
/// # Errors
/// - `InstrumentError::InvalidNotional` if notional <= 0
/// - `InstrumentError::NonFinite` if fixed_rate is NaN or infinite
/// - `InstrumentError::MarketData` if the curve rejects a payment time
pub fn price_fixed_floating_swap<C: YieldCurve<f64>>(
    fixed_rate: f64,
    notional: f64,
    curve: &C,
    schedule: &PaymentSchedule,
) -> Result<f64, InstrumentError> {
    params::finite("fixed_rate", fixed_rate)?;
    params::positive("notional", notional, |notional| {
        InstrumentError::InvalidNotional { notional }
    })?;
    let Some(last) = schedule.last_time() else {
        return Ok(0.0);
    };
    let fixed_leg = fixed_rate * swap_annuity(curve, schedule)? * notional;
    let floating_leg = notional * (1.0 - curve.discount_factor(last)?);
    Ok(floating_leg - fixed_leg)
}
