//! Regular payment schedule in year fractions.

use super::error::ScheduleError;

/// Largest number of payments a regular schedule may hold.
pub const MAX_PAYMENTS: usize = 100_000;

/// Payment times (in years from today) with a common accrual fraction.
///
/// Swaps and CDS premium legs share the same construction rule, so both
/// produce identical times for identical `(maturity, frequency)` inputs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaymentSchedule {
    times: Vec<f64>,
    accrual: f64,
}

impl PaymentSchedule {
    /// Builds an evenly spaced schedule.
    ///
    /// The number of payments is `round(maturity · frequency)` clamped to at
    /// least one; the accrual is `maturity / n` and the payment times are
    /// `accrual · i` for `i = 1..=n`, so the last payment falls on maturity.
    ///
    /// # Errors
    ///
    /// - `ScheduleError::InvalidMaturity` if `maturity` is not positive and finite
    /// - `ScheduleError::InvalidFrequency` if `frequency == 0`
    /// - `ScheduleError::TooManyPayments` if the count exceeds [`MAX_PAYMENTS`]
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_models::schedules::PaymentSchedule;
    ///
    /// let schedule = PaymentSchedule::regular(2.0, 4).unwrap();
    /// assert_eq!(schedule.len(), 8);
    /// assert_eq!(schedule.accrual(), 0.25);
    /// assert_eq!(schedule.last_time(), Some(2.0));
    ///
    /// // A short stub still produces one payment
    /// let stub = PaymentSchedule::regular(0.1, 1).unwrap();
    /// assert_eq!(stub.times(), &[0.1]);
    /// ```
    pub fn regular(maturity: f64, frequency: u32) -> Result<Self, ScheduleError> {
        if !maturity.is_finite() || maturity <= 0.0 {
            return Err(ScheduleError::InvalidMaturity { maturity });
        }
        if frequency == 0 {
            return Err(ScheduleError::InvalidFrequency { frequency });
        }

        let count = (maturity * f64::from(frequency)).round();
        if count > MAX_PAYMENTS as f64 {
            return Err(ScheduleError::TooManyPayments {
                count,
                max: MAX_PAYMENTS,
            });
        }
        let n_payments = (count as usize).max(1);
        let accrual = maturity / n_payments as f64;
        let times = (1..=n_payments).map(|i| accrual * i as f64).collect();

        Ok(Self { times, accrual })
    }

    /// Builds a schedule from explicit payment times.
    ///
    /// An empty list is allowed; the rates pricers value it at zero.
    ///
    /// # Errors
    ///
    /// - `ScheduleError::InvalidAccrual` if `accrual` is negative or not finite
    /// - `ScheduleError::InvalidPaymentTime` if a time is negative, not finite
    ///   or not strictly after its predecessor
    pub fn new(times: Vec<f64>, accrual: f64) -> Result<Self, ScheduleError> {
        if !accrual.is_finite() || accrual < 0.0 {
            return Err(ScheduleError::InvalidAccrual { accrual });
        }
        let mut prev = f64::NEG_INFINITY;
        for (index, &time) in times.iter().enumerate() {
            if !time.is_finite() || time < 0.0 || time <= prev {
                return Err(ScheduleError::InvalidPaymentTime { index, time });
            }
            prev = time;
        }
        Ok(Self { times, accrual })
    }

    /// Payment times in years.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Accrual fraction applied to every period.
    #[inline]
    pub fn accrual(&self) -> f64 {
        self.accrual
    }

    /// Number of payments.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the schedule has no payments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Final payment time, if any.
    #[inline]
    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_regular_quarterly() {
        let schedule = PaymentSchedule::regular(5.0, 4).unwrap();
        assert_eq!(schedule.len(), 20);
        assert_relative_eq!(schedule.accrual(), 0.25);
        assert_relative_eq!(schedule.times()[0], 0.25);
        assert_relative_eq!(schedule.last_time().unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_regular_rounds_payment_count() {
        // 1.3 years semi-annual: round(2.6) = 3 payments of 1.3/3
        let schedule = PaymentSchedule::regular(1.3, 2).unwrap();
        assert_eq!(schedule.len(), 3);
        assert_relative_eq!(schedule.accrual(), 1.3 / 3.0);
        assert_relative_eq!(schedule.times()[2], 1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_regular_clamps_to_one_payment() {
        let schedule = PaymentSchedule::regular(0.2, 1).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.accrual(), 0.2);
    }

    #[test]
    fn test_regular_is_deterministic() {
        let a = PaymentSchedule::regular(3.7, 12).unwrap();
        let b = PaymentSchedule::regular(3.7, 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_regular_rejects_bad_inputs() {
        assert!(matches!(
            PaymentSchedule::regular(0.0, 4),
            Err(ScheduleError::InvalidMaturity { .. })
        ));
        assert!(matches!(
            PaymentSchedule::regular(f64::NAN, 4),
            Err(ScheduleError::InvalidMaturity { .. })
        ));
        assert!(matches!(
            PaymentSchedule::regular(1.0, 0),
            Err(ScheduleError::InvalidFrequency { frequency: 0 })
        ));
    }

    #[test]
    fn test_regular_caps_payment_count() {
        let daily = PaymentSchedule::regular(30.0, 365).unwrap();
        assert_eq!(daily.len(), 10_950);

        let at_limit = PaymentSchedule::regular(MAX_PAYMENTS as f64, 1).unwrap();
        assert_eq!(at_limit.len(), MAX_PAYMENTS);

        assert!(matches!(
            PaymentSchedule::regular(5.0, u32::MAX),
            Err(ScheduleError::TooManyPayments { max: MAX_PAYMENTS, .. })
        ));
        assert!(matches!(
            PaymentSchedule::regular(1e300, 1),
            Err(ScheduleError::TooManyPayments { .. })
        ));
    }

    #[test]
    fn test_new_accepts_empty() {
        let schedule = PaymentSchedule::new(Vec::new(), 0.5).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.last_time(), None);
    }

    #[test]
    fn test_new_rejects_unordered_times() {
        match PaymentSchedule::new(vec![0.5, 1.0, 1.0], 0.5) {
            Err(ScheduleError::InvalidPaymentTime { index, time }) => {
                assert_eq!(index, 2);
                assert_eq!(time, 1.0);
            }
            other => panic!("Expected InvalidPaymentTime, got {:?}", other),
        }
        assert!(PaymentSchedule::new(vec![-0.5], 0.5).is_err());
        assert!(PaymentSchedule::new(vec![0.5], -0.5).is_err());
    }
}
