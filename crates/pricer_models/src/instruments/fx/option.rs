//! European FX option.

use crate::analytical::{GarmanKohlhagen, Greeks};
use crate::instruments::error::InstrumentError;
use crate::instruments::option_type::OptionType;
use crate::instruments::params;

/// European option on an exchange rate quoted as domestic per unit of foreign.
///
/// # Examples
/// ```
/// use pricer_models::instruments::fx::FxOption;
/// use pricer_models::instruments::OptionType;
///
/// let option = FxOption::new(1.10, 1.12, 1.0, 0.03, 0.01, 0.15, OptionType::Call).unwrap();
/// assert!(option.price().unwrap() > 0.0);
/// assert!(option.greeks().unwrap().vega > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxOption {
    spot: f64,
    strike: f64,
    maturity: f64,
    domestic_rate: f64,
    foreign_rate: f64,
    volatility: f64,
    option_type: OptionType,
}

impl FxOption {
    /// Creates a validated FX option.
    ///
    /// Both rates may be negative.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` / `InvalidStrike` if spot or strike <= 0
    /// - `InstrumentError::InvalidExpiry` if maturity < 0
    /// - `InstrumentError::NonFinite` if any input is NaN or infinite
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        domestic_rate: f64,
        foreign_rate: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        params::option_terms(spot, strike, maturity)?;
        params::finite("domestic_rate", domestic_rate)?;
        params::finite("foreign_rate", foreign_rate)?;
        params::finite("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            maturity,
            domestic_rate,
            foreign_rate,
            volatility,
            option_type,
        })
    }

    /// Spot exchange rate.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
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

    /// Domestic risk-free rate.
    #[inline]
    pub fn domestic_rate(&self) -> f64 {
        self.domestic_rate
    }

    /// Foreign risk-free rate.
    #[inline]
    pub fn foreign_rate(&self) -> f64 {
        self.foreign_rate
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

    /// Garman-Kohlhagen model carrying this option's market state.
    pub fn model(&self) -> Result<GarmanKohlhagen, InstrumentError> {
        Ok(GarmanKohlhagen::new(
            self.spot,
            self.domestic_rate,
            self.foreign_rate,
            self.volatility,
        )?)
    }

    /// Closed-form Garman-Kohlhagen price.
    pub fn price(&self) -> Result<f64, InstrumentError> {
        Ok(self
            .model()?
            .price(self.strike, self.maturity, self.option_type)?)
    }

    /// Analytic Greeks (rho with respect to the domestic rate).
    pub fn greeks(&self) -> Result<Greeks, InstrumentError> {
        Ok(self
            .model()?
            .greeks(self.strike, self.maturity, self.option_type)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::EquityOption;

    #[test]
    fn test_same_as_equity_option_with_foreign_rate_as_yield() {
        let fx = FxOption::new(1.3, 1.25, 0.5, 0.04, 0.02, 0.11, OptionType::Put).unwrap();
        let eq = EquityOption::new(1.3, 1.25, 0.5, 0.04, 0.02, 0.11, OptionType::Put).unwrap();
        assert_eq!(fx.price().unwrap(), eq.price().unwrap());
        assert_eq!(fx.greeks().unwrap(), eq.greeks().unwrap());
    }

    #[test]
    fn test_negative_foreign_rate_allowed() {
        let fx = FxOption::new(1.0, 1.0, 1.0, 0.01, -0.005, 0.1, OptionType::Call).unwrap();
        assert_eq!(fx.foreign_rate(), -0.005);
        assert!(fx.price().unwrap() > 0.0);
    }

    #[test]
    fn test_validation() {
        assert!(FxOption::new(-1.0, 1.0, 1.0, 0.01, 0.0, 0.1, OptionType::Call).is_err());
        assert!(FxOption::new(1.0, 1.0, 1.0, f64::INFINITY, 0.0, 0.1, OptionType::Call).is_err());
    }
}
