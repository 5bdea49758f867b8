//! Fixed-vs-floating interest rate swap.

use pricer_core::market_data::curves::YieldCurve;

use super::pricing;
use crate::instruments::error::InstrumentError;
use crate::instruments::params;
use crate::schedules::PaymentSchedule;

/// Swap receiving floating and paying a fixed rate on a regular schedule.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::FlatCurve;
/// use pricer_models::instruments::rates::InterestRateSwap;
///
/// let swap = InterestRateSwap::new(1_000_000.0, 0.03, 5.0, 2).unwrap();
/// let curve = FlatCurve::new(0.03);
///
/// assert_eq!(swap.schedule().len(), 10);
/// let par = swap.par_rate(&curve).unwrap();
/// assert!(par > 0.03);
/// assert!(swap.price(&curve).unwrap() > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterestRateSwap {
    notional: f64,
    fixed_rate: f64,
    schedule: PaymentSchedule,
}

impl InterestRateSwap {
    /// Creates a swap with a regular schedule of `frequency` payments per year.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidNotional` if notional <= 0
    /// - `InstrumentError::NonFinite` if fixed_rate is NaN or infinite
    /// - `InstrumentError::Schedule` if maturity <= 0 or frequency == 0
    pub fn new(
        notional: f64,
        fixed_rate: f64,
        maturity: f64,
        frequency: u32,
    ) -> Result<Self, InstrumentError> {
        let schedule = PaymentSchedule::regular(maturity, frequency)?;
        Self::with_schedule(notional, fixed_rate, schedule)
    }

    /// Creates a swap on an explicit schedule.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidNotional` if notional <= 0
    /// - `InstrumentError::NonFinite` if fixed_rate is NaN or infinite
    pub fn with_schedule(
        notional: f64,
        fixed_rate: f64,
        schedule: PaymentSchedule,
    ) -> Result<Self, InstrumentError> {
        params::positive("notional", notional, |notional| {
            InstrumentError::InvalidNotional { notional }
        })?;
        params::finite("fixed_rate", fixed_rate)?;
        Ok(Self {
            notional,
            fixed_rate,
            schedule,
        })
    }

    /// Notional.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Fixed rate paid.
    #[inline]
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Payment schedule shared by both legs.
    #[inline]
    pub fn schedule(&self) -> &PaymentSchedule {
        &self.schedule
    }

    /// Present value on `curve`.
    pub fn price<C: YieldCurve<f64>>(&self, curve: &C) -> Result<f64, InstrumentError> {
        pricing::price_fixed_floating_swap(self.fixed_rate, self.notional, curve, &self.schedule)
    }

    /// Fixed-leg annuity on `curve`.
    pub fn annuity<C: YieldCurve<f64>>(&self, curve: &C) -> Result<f64, InstrumentError> {
        pricing::swap_annuity(curve, &self.schedule)
    }

    /// Par fixed rate on `curve`.
    pub fn par_rate<C: YieldCurve<f64>>(&self, curve: &C) -> Result<f64, InstrumentError> {
        pricing::par_swap_rate(curve, &self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::curves::FlatCurve;

    #[test]
    fn test_new_builds_regular_schedule() {
        let swap = InterestRateSwap::new(1e6, 0.025, 3.0, 4).unwrap();
        assert_eq!(swap.schedule().len(), 12);
        assert_eq!(swap.schedule().accrual(), 0.25);
        assert_eq!(swap.notional(), 1e6);
        assert_eq!(swap.fixed_rate(), 0.025);
    }

    #[test]
    fn test_price_matches_free_function() {
        let curve = FlatCurve::new(0.04);
        let swap = InterestRateSwap::new(5e6, 0.035, 7.0, 2).unwrap();
        let expected =
            pricing::price_fixed_floating_swap(0.035, 5e6, &curve, swap.schedule()).unwrap();
        assert_eq!(swap.price(&curve).unwrap(), expected);
    }

    #[test]
    fn test_par_rate_reprices_to_zero() {
        let curve = FlatCurve::new(0.02);
        let probe = InterestRateSwap::new(1e6, 0.0, 10.0, 1).unwrap();
        let par = probe.par_rate(&curve).unwrap();
        let at_par = InterestRateSwap::new(1e6, par, 10.0, 1).unwrap();
        assert_relative_eq!(at_par.price(&curve).unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            InterestRateSwap::new(-1.0, 0.03, 5.0, 2),
            Err(InstrumentError::InvalidNotional { .. })
        ));
        assert!(matches!(
            InterestRateSwap::new(1e6, 0.03, 5.0, 0),
            Err(InstrumentError::Schedule(_))
        ));
        assert!(matches!(
            InterestRateSwap::new(1e6, 0.03, 0.0, 2),
            Err(InstrumentError::Schedule(_))
        ));
    }
}
