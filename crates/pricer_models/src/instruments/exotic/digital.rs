//! Cash-or-nothing digital option.

use crate::instruments::error::InstrumentError;
use crate::instruments::params;
use crate::instruments::vanilla::EquityOption;

/// Cash amount paid by a digital unless stated otherwise.
pub const DEFAULT_PAYOUT: f64 = 1.0;

/// Pays a fixed amount if the terminal price finishes strictly beyond the strike.
///
/// # Examples
/// ```
/// use pricer_models::instruments::exotic::DigitalOption;
/// use pricer_models::instruments::{EquityOption, OptionType};
///
/// let vanilla = EquityOption::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
/// let digital = DigitalOption::new(vanilla, 10.0).unwrap();
///
/// assert_eq!(digital.payoff(100.5), 10.0);
/// assert_eq!(digital.payoff(100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitalOption {
    underlying: EquityOption,
    payout: f64,
}

impl DigitalOption {
    /// Creates a digital paying `payout`.
    ///
    /// # Errors
    /// `InstrumentError::InvalidPayout` if payout <= 0, `NonFinite` if NaN or infinite.
    pub fn new(underlying: EquityOption, payout: f64) -> Result<Self, InstrumentError> {
        params::positive("payout", payout, |payout| InstrumentError::InvalidPayout {
            payout,
        })?;
        Ok(Self { underlying, payout })
    }

    /// Digital paying one unit of cash.
    pub fn unit(underlying: EquityOption) -> Self {
        Self {
            underlying,
            payout: DEFAULT_PAYOUT,
        }
    }

    /// Vanilla terms and market state.
    #[inline]
    pub fn underlying(&self) -> &EquityOption {
        &self.underlying
    }

    /// Cash payout.
    #[inline]
    pub fn payout(&self) -> f64 {
        self.payout
    }

    /// Undiscounted payoff for a terminal price; the strike itself pays nothing.
    #[inline]
    pub fn payoff(&self, terminal: f64) -> f64 {
        let strike = self.underlying.strike();
        let in_the_money = if self.underlying.option_type().is_call() {
            terminal > strike
        } else {
            terminal < strike
        };
        if in_the_money {
            self.payout
        } else {
            0.0
        }
    }

    /// Payoff on the final element of a simulated path; 0 for an empty path.
    #[inline]
    pub fn path_payoff(&self, path: &[f64]) -> f64 {
        path.last().map_or(0.0, |&terminal| self.payoff(terminal))
    }
}
