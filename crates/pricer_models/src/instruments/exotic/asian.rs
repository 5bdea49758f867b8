//! Arithmetic-average Asian option.

use crate::instruments::vanilla::EquityOption;

/// Fixed-strike option on the arithmetic average of the monitored prices.
///
/// The average runs over every simulated step and excludes the initial spot.
///
/// # Examples
/// ```
/// use pricer_models::instruments::exotic::AsianOption;
/// use pricer_models::instruments::{EquityOption, OptionType};
///
/// let vanilla = EquityOption::new(100.0, 100.0, 1.0, 0.03, 0.0, 0.2, OptionType::Call).unwrap();
/// let asian = AsianOption::new(vanilla);
///
/// // mean(110, 120) = 115
/// assert_eq!(asian.path_payoff(&[100.0, 110.0, 120.0]), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsianOption {
    underlying: EquityOption,
}

impl AsianOption {
    /// Wraps vanilla terms as an Asian option.
    pub fn new(underlying: EquityOption) -> Self {
        Self { underlying }
    }

    /// Vanilla terms and market state.
    #[inline]
    pub fn underlying(&self) -> &EquityOption {
        &self.underlying
    }

    /// Undiscounted payoff of one path whose first element is the initial spot.
    ///
    /// A path with no simulated steps pays 0.
    pub fn path_payoff(&self, path: &[f64]) -> f64 {
        let monitored = path.get(1..).unwrap_or(&[]);
        if monitored.is_empty() {
            return 0.0;
        }
        let average = monitored.iter().sum::<f64>() / monitored.len() as f64;
        self.underlying.payoff(average)
    }
}
