//! European equity option.

use super::error::InstrumentError;
use super::option_type::OptionType;
use super::params;
use crate::analytical::{BlackScholes, Greeks};

/// European option on a single dividend-paying equity.
///
/// Immutable once built; `new` validates every field. A zero maturity or a
/// non-positive volatility is accepted and prices at intrinsic value.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EquityOption, OptionType};
///
/// let option = EquityOption::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
/// assert!((option.price().unwrap() - 10.4506).abs() < 1e-3);
///
/// let greeks = option.greeks().unwrap();
/// assert!(greeks.delta > 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityOption {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
    option_type: OptionType,
}

impl EquityOption {
    /// Creates a validated equity option.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` / `InvalidStrike` if spot or strike <= 0
    /// - `InstrumentError::InvalidExpiry` if maturity < 0
    /// - `InstrumentError::InvalidDividendYield` if dividend_yield < 0
    /// - `InstrumentError::NonFinite` if any input is NaN or infinite
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        params::option_terms(spot, strike, maturity)?;
        params::finite("rate", rate)?;
        params::non_negative("dividend_yield", dividend_yield, |dividend_yield| {
            InstrumentError::InvalidDividendYield { dividend_yield }
        })?;
        params::finite("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            maturity,
            rate,
            dividend_yield,
            volatility,
            option_type,
        })
    }

    /// Spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Time to expiry in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Continuously compounded risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
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

    /// Black-Scholes model carrying this option's market state.
    pub fn model(&self) -> Result<BlackScholes, InstrumentError> {
        Ok(BlackScholes::new(
            self.spot,
            self.rate,
            self.dividend_yield,
            self.volatility,
        )?)
    }

    /// Closed-form Black-Scholes-Merton price.
    pub fn price(&self) -> Result<f64, InstrumentError> {
        Ok(self
            .model()?
            .price(self.strike, self.maturity, self.option_type)?)
    }

    /// Analytic Greeks.
    pub fn greeks(&self) -> Result<Greeks, InstrumentError> {
        Ok(self
            .model()?
            .greeks(self.strike, self.maturity, self.option_type)?)
    }

    /// Payoff at expiry for a terminal underlying level.
    #[inline]
    pub fn payoff(&self, terminal: f64) -> f64 {
        self.option_type.intrinsic(terminal, self.strike)
    }
}
