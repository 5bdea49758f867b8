//! Black-Scholes-Merton pricing model for European options.
//!
//! This module provides the Black-Scholes model with a continuous dividend
//! yield `q` acting as a carry-cost reduction.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Markets
//!
//! When `T <= 0` or `σ <= 0` the option has no remaining optionality and is
//! valued at its undiscounted intrinsic value, without evaluating d₁/d₂.

use pricer_core::math::distributions::norm_cdf;

use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, dividend yield, volatility); the
/// contract terms (strike, expiry, call/put) are passed per call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionType::Call).unwrap();
/// let put = bs.price(100.0, 1.0, OptionType::Put).unwrap();
///
/// assert!((call - 10.4506).abs() < 1e-3);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Continuous dividend yield (q)
    dividend_yield: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, continuously compounded)
    /// * `dividend_yield` - Continuous dividend yield
    /// * `volatility` - Volatility; values `<= 0` select the intrinsic-value branch
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any input is NaN or infinite
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    pub fn new(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        AnalyticalError::check_finite("spot", spot)?;
        AnalyticalError::check_finite("rate", rate)?;
        AnalyticalError::check_finite("dividend_yield", dividend_yield)?;
        AnalyticalError::check_finite("volatility", volatility)?;

        if spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns a copy of the model with a different volatility.
    ///
    /// Used by the calibrator to re-price along the Newton path.
    #[inline]
    pub fn with_volatility(&self, volatility: f64) -> Self {
        Self {
            volatility,
            ..*self
        }
    }

    /// Returns `true` when the option has no remaining optionality.
    #[inline]
    pub fn is_degenerate(&self, expiry: f64) -> bool {
        expiry <= 0.0 || self.volatility <= 0.0
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// Only meaningful for a non-degenerate market (`T > 0`, `σ > 0`).
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let drift =
            (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility) * expiry;
        ((self.spot / strike).ln() + drift) / vol_sqrt_t
    }

    /// Computes the d2 term of the Black-Scholes formula.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Prices a European option.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to expiry in years (must be non-negative)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidStrike` if strike <= 0
    /// - `AnalyticalError::InvalidExpiry` if expiry < 0
    /// - `AnalyticalError::NonFiniteInput` if strike or expiry is NaN or infinite
    /// - `AnalyticalError::NumericalInstability` if the price overflows
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(110.0, 0.05, 0.0, 0.2).unwrap();
    ///
    /// // Zero expiry prices at intrinsic value
    /// assert_eq!(bs.price(100.0, 0.0, OptionType::Call).unwrap(), 10.0);
    /// assert!(bs.price(-1.0, 1.0, OptionType::Call).is_err());
    /// ```
    pub fn price(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        validate_terms(strike, expiry)?;
        let value = self.price_unchecked(strike, expiry, option_type);
        if !value.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!("non-finite {} price {}", option_type, value),
            });
        }
        Ok(value)
    }

    /// Closed-form price for already validated contract terms.
    pub(crate) fn price_unchecked(&self, strike: f64, expiry: f64, option_type: OptionType) -> f64 {
        if self.is_degenerate(expiry) {
            return option_type.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend_yield * expiry).exp();

        match option_type {
            OptionType::Call => self.spot * df_q * norm_cdf(d1) - strike * df_r * norm_cdf(d2),
            OptionType::Put => strike * df_r * norm_cdf(-d2) - self.spot * df_q * norm_cdf(-d1),
        }
    }
}

/// Validate the per-contract inputs shared by price and Greeks.
pub(crate) fn validate_terms(strike: f64, expiry: f64) -> Result<(), AnalyticalError> {
    AnalyticalError::check_finite("strike", strike)?;
    AnalyticalError::check_finite("expiry", expiry)?;
    if strike <= 0.0 {
        return Err(AnalyticalError::InvalidStrike { strike });
    }
    if expiry < 0.0 {
        return Err(AnalyticalError::InvalidExpiry { expiry });
    }
    Ok(())
}

/// Prices a European option under Black-Scholes-Merton.
///
/// Convenience wrapper over [`BlackScholes::price`] taking the full
/// parameter set in one call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes_price;
/// use pricer_models::instruments::OptionType;
///
/// let price = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes_price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    BlackScholes::new(spot, rate, dividend_yield, vol)?.price(strike, maturity, option_type)
}
