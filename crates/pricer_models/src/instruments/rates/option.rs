//! European option on a forward rate (caplet/floorlet style).

use crate::analytical::Black76;
use crate::instruments::error::InstrumentError;
use crate::instruments::option_type::OptionType;
use crate::instruments::params;

/// European option on a forward, priced under the forward measure.
///
/// There is no spot or carry; the payoff is discounted once at
/// `discount_rate`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::rates::RateOption;
/// use pricer_models::instruments::OptionType;
///
/// let caplet = RateOption::new(0.035, 0.03, 1.0, 0.02, 0.25, OptionType::Call).unwrap();
/// let price = caplet.price().unwrap();
/// assert!(price > 0.005 * (-0.02_f64).exp());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateOption {
    forward: f64,
    strike: f64,
    maturity: f64,
    discount_rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl RateOption {
    /// Creates a validated rate option.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidForward` / `InvalidStrike` if forward or strike <= 0
    /// - `InstrumentError::InvalidExpiry` if maturity < 0
    /// - `InstrumentError::NonFinite` if any input is NaN or infinite
    pub fn new(
        forward: f64,
        strike: f64,
        maturity: f64,
        discount_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        params::positive("forward", forward, |forward| {
            InstrumentError::InvalidForward { forward }
        })?;
        params::positive("strike", strike, |strike| InstrumentError::InvalidStrike {
            strike,
        })?;
        params::non_negative("maturity", maturity, |expiry| {
            InstrumentError::InvalidExpiry { expiry }
        })?;
        params::finite("discount_rate", discount_rate)?;
        params::finite("volatility", volatility)?;

        Ok(Self {
            forward,
            strike,
            maturity,
            discount_rate,
            volatility,
            option_type,
        })
    }

    /// Forward rate or price.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// Strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Discount rate.
    #[inline]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Closed-form Black-76 price.
    pub fn price(&self) -> Result<f64, InstrumentError> {
        let model = Black76::new(self.forward, self.discount_rate, self.volatility)?;
        Ok(model.price(self.strike, self.maturity, self.option_type)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::black76_price;

    #[test]
    fn test_price_matches_black76() {
        let option = RateOption::new(0.04, 0.045, 2.0, 0.03, 0.3, OptionType::Put).unwrap();
        let expected = black76_price(0.04, 0.045, 2.0, 0.03, 0.3, OptionType::Put).unwrap();
        assert_eq!(option.price().unwrap(), expected);
    }

    #[test]
    fn test_zero_maturity_is_undiscounted_intrinsic() {
        let option = RateOption::new(0.05, 0.03, 0.0, 0.03, 0.3, OptionType::Call).unwrap();
        assert!((option.price().unwrap() - 0.02).abs() < 1e-15);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            RateOption::new(0.0, 0.03, 1.0, 0.03, 0.3, OptionType::Call),
            Err(InstrumentError::InvalidForward { .. })
        ));
        assert!(matches!(
            RateOption::new(0.03, -0.01, 1.0, 0.03, 0.3, OptionType::Call),
            Err(InstrumentError::InvalidStrike { .. })
        ));
    }
}
