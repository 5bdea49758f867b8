//! Credit Default Swap (CDS) under a constant hazard rate.
//!
//! A CDS consists of:
//! - **Protection Leg**: Pays `(1 - R) × Notional` on default
//! - **Premium Leg**: Pays the spread on each payment date until default or maturity
//!
//! The contract carries its own flat market state (hazard rate and discount
//! rate), so it can be valued without external curves.
//!
//! # Example
//!
//! ```
//! use pricer_models::instruments::credit::CreditDefaultSwap;
//!
//! let cds = CreditDefaultSwap::new(10_000_000.0, 0.01, 5.0, 4, 0.02, 0.4, 0.03).unwrap();
//!
//! assert_eq!(cds.notional(), 10_000_000.0);
//! assert_eq!(cds.schedule().len(), 20);
//! assert!((cds.loss_given_default() - 0.6).abs() < 1e-12);
//! ```

use crate::instruments::error::InstrumentError;
use crate::instruments::params;
use crate::schedules::PaymentSchedule;

/// Quarterly premium payments.
pub const DEFAULT_PAYMENT_FREQUENCY: u32 = 4;

/// Default constant hazard rate (200bp).
pub const DEFAULT_HAZARD_RATE: f64 = 0.02;

/// Default recovery rate.
pub const DEFAULT_RECOVERY_RATE: f64 = 0.4;

/// Default flat discount rate.
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.02;

/// Single-name CDS from the protection buyer's perspective.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditDefaultSwap {
    notional: f64,
    spread: f64,
    maturity: f64,
    payment_frequency: u32,
    hazard_rate: f64,
    recovery_rate: f64,
    discount_rate: f64,
    schedule: PaymentSchedule,
}

impl CreditDefaultSwap {
    /// Creates a validated CDS.
    ///
    /// # Arguments
    ///
    /// * `notional` - Protection amount (> 0)
    /// * `spread` - Annual premium as a decimal (100bp = 0.01)
    /// * `maturity` - Years to maturity (> 0)
    /// * `payment_frequency` - Premium payments per year (>= 1)
    /// * `hazard_rate` - Constant default intensity (>= 0)
    /// * `recovery_rate` - Fraction recovered on default, in [0, 1]
    /// * `discount_rate` - Flat continuously compounded discount rate
    ///
    /// # Errors
    ///
    /// Returns the typed `InstrumentError` for the first invalid input;
    /// a zero frequency surfaces as `InstrumentError::Schedule`.
    pub fn new(
        notional: f64,
        spread: f64,
        maturity: f64,
        payment_frequency: u32,
        hazard_rate: f64,
        recovery_rate: f64,
        discount_rate: f64,
    ) -> Result<Self, InstrumentError> {
        params::positive("notional", notional, |notional| {
            InstrumentError::InvalidNotional { notional }
        })?;
        params::finite("spread", spread)?;
        params::positive("maturity", maturity, |expiry| {
            InstrumentError::InvalidExpiry { expiry }
        })?;
        params::non_negative("hazard_rate", hazard_rate, |hazard_rate| {
            InstrumentError::InvalidHazardRate { hazard_rate }
        })?;
        params::finite("recovery_rate", recovery_rate)?;
        if !(0.0..=1.0).contains(&recovery_rate) {
            return Err(InstrumentError::InvalidRecoveryRate { recovery_rate });
        }
        params::finite("discount_rate", discount_rate)?;

        let schedule = PaymentSchedule::regular(maturity, payment_frequency)?;

        Ok(Self {
            notional,
            spread,
            maturity,
            payment_frequency,
            hazard_rate,
            recovery_rate,
            discount_rate,
            schedule,
        })
    }

    /// Creates a CDS with quarterly payments, 2% hazard, 40% recovery and
    /// a 2% discount rate.
    ///
    /// # Errors
    ///
    /// Same as [`CreditDefaultSwap::new`].
    pub fn with_defaults(notional: f64, spread: f64, maturity: f64) -> Result<Self, InstrumentError> {
        Self::new(
            notional,
            spread,
            maturity,
            DEFAULT_PAYMENT_FREQUENCY,
            DEFAULT_HAZARD_RATE,
            DEFAULT_RECOVERY_RATE,
            DEFAULT_DISCOUNT_RATE,
        )
    }

    /// Copy of this contract at a different spread.
    ///
    /// # Errors
    ///
    /// `InstrumentError::NonFinite` if `spread` is NaN or infinite.
    pub fn with_spread(&self, spread: f64) -> Result<Self, InstrumentError> {
        params::finite("spread", spread)?;
        Ok(Self {
            spread,
            ..self.clone()
        })
    }

    /// Protection notional.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Annual premium spread.
    #[inline]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Years to maturity.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Premium payments per year.
    #[inline]
    pub fn payment_frequency(&self) -> u32 {
        self.payment_frequency
    }

    /// Constant hazard rate.
    #[inline]
    pub fn hazard_rate(&self) -> f64 {
        self.hazard_rate
    }

    /// Recovery rate.
    #[inline]
    pub fn recovery_rate(&self) -> f64 {
        self.recovery_rate
    }

    /// Flat discount rate.
    #[inline]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// `1 - recovery_rate`.
    #[inline]
    pub fn loss_given_default(&self) -> f64 {
        1.0 - self.recovery_rate
    }

    /// Premium payment schedule.
    #[inline]
    pub fn schedule(&self) -> &PaymentSchedule {
        &self.schedule
    }
}
