//! Garman-Kohlhagen model for FX option pricing.
//!
//! Garman-Kohlhagen is Black-Scholes with the foreign interest rate in the
//! role of the dividend yield:
//!
//! ```text
//! C = S·e^(-rf·T)·N(d₁) - K·e^(-rd·T)·N(d₂)
//! d₁ = [ln(S/K) + (rd - rf + σ²/2)·T] / (σ·√T)
//! ```
//!
//! Prices and Greeks are produced by [`BlackScholes`] after remapping
//! `rate = rd` and `dividend_yield = rf`, so results are bit-identical to the
//! base model.
//!
//! # Examples
//!
//! ```
//! use pricer_models::analytical::GarmanKohlhagen;
//! use pricer_models::instruments::OptionType;
//!
//! let model = GarmanKohlhagen::new(1.10, 0.03, 0.01, 0.15).unwrap();
//! let call = model.price(1.12, 1.0, OptionType::Call).unwrap();
//! let put = model.price(1.12, 1.0, OptionType::Put).unwrap();
//!
//! let parity = call - put - (1.10 * (-0.01_f64).exp() - 1.12 * (-0.03_f64).exp());
//! assert!(parity.abs() < 1e-12);
//! ```

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use super::greeks::Greeks;
use crate::instruments::OptionType;

/// Garman-Kohlhagen model for European FX options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmanKohlhagen {
    inner: BlackScholes,
}

impl GarmanKohlhagen {
    /// Creates a new Garman-Kohlhagen model.
    ///
    /// # Arguments
    /// * `spot` - Spot exchange rate, domestic per unit of foreign (must be positive)
    /// * `domestic_rate` - Domestic risk-free rate (may be negative)
    /// * `foreign_rate` - Foreign risk-free rate (may be negative)
    /// * `volatility` - Volatility of the exchange rate
    ///
    /// # Errors
    /// Returns `AnalyticalError` for a non-positive spot or non-finite input.
    pub fn new(
        spot: f64,
        domestic_rate: f64,
        foreign_rate: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        Ok(Self {
            inner: BlackScholes::new(spot, domestic_rate, foreign_rate, volatility)?,
        })
    }

    /// Returns the spot exchange rate.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.inner.spot()
    }

    /// Returns the domestic rate.
    #[inline]
    pub fn domestic_rate(&self) -> f64 {
        self.inner.rate()
    }

    /// Returns the foreign rate.
    #[inline]
    pub fn foreign_rate(&self) -> f64 {
        self.inner.dividend_yield()
    }

    /// Returns the forward exchange rate `F = S·exp((rd - rf)·T)`.
    #[inline]
    pub fn forward(&self, expiry: f64) -> f64 {
        self.spot() * ((self.domestic_rate() - self.foreign_rate()) * expiry).exp()
    }

    /// Prices a European FX option.
    ///
    /// # Errors
    /// Same contract-term validation as [`BlackScholes::price`].
    pub fn price(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<f64, AnalyticalError> {
        self.inner.price(strike, expiry, option_type)
    }

    /// Computes Greeks; `rho` is the sensitivity to the domestic rate.
    ///
    /// # Errors
    /// Same contract-term validation as [`BlackScholes::greeks`].
    pub fn greeks(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Greeks, AnalyticalError> {
        self.inner.greeks(strike, expiry, option_type)
    }
}

/// Prices a European FX option under Garman-Kohlhagen.
///
/// # Examples
/// ```
/// use pricer_models::analytical::garman_kohlhagen_price;
/// use pricer_models::instruments::OptionType;
///
/// let price = garman_kohlhagen_price(1.10, 1.10, 0.5, 0.03, 0.01, 0.1, OptionType::Call).unwrap();
/// assert!(price > 0.0);
/// ```
pub fn garman_kohlhagen_price(
    spot: f64,
    strike: f64,
    maturity: f64,
    domestic_rate: f64,
    foreign_rate: f64,
    vol: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    GarmanKohlhagen::new(spot, domestic_rate, foreign_rate, vol)?.price(
        strike,
        maturity,
        option_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bit_identical_to_black_scholes() {
        for ot in [OptionType::Call, OptionType::Put] {
            let gk = garman_kohlhagen_price(1.25, 1.3, 0.75, 0.04, 0.015, 0.12, ot).unwrap();
            let bs = BlackScholes::new(1.25, 0.04, 0.015, 0.12)
                .unwrap()
                .price(1.3, 0.75, ot)
                .unwrap();
            assert_eq!(gk.to_bits(), bs.to_bits());
        }
    }

    #[test]
    fn test_equal_rates_reduce_to_no_carry() {
        // With rd = rf the forward equals spot
        let model = GarmanKohlhagen::new(1.0, 0.02, 0.02, 0.1).unwrap();
        assert_relative_eq!(model.forward(3.0), 1.0, epsilon = 1e-15);
        let call = model.price(1.0, 1.0, OptionType::Call).unwrap();
        let put = model.price(1.0, 1.0, OptionType::Put).unwrap();
        assert_relative_eq!(call, put, epsilon = 1e-14);
    }

    #[test]
    fn test_forward_rate() {
        let model = GarmanKohlhagen::new(1.10, 0.03, 0.01, 0.15).unwrap();
        assert_relative_eq!(model.forward(1.0), 1.10 * 0.02_f64.exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_greeks_delta_discounted_by_foreign_rate() {
        let model = GarmanKohlhagen::new(1.10, 0.03, 0.05, 0.15).unwrap();
        let call = model.greeks(1.10, 2.0, OptionType::Call).unwrap();
        let put = model.greeks(1.10, 2.0, OptionType::Put).unwrap();
        assert_relative_eq!(call.delta - put.delta, (-0.1_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_accessors() {
        let model = GarmanKohlhagen::new(0.9, 0.01, 0.02, 0.1).unwrap();
        assert_eq!(model.spot(), 0.9);
        assert_eq!(model.domestic_rate(), 0.01);
        assert_eq!(model.foreign_rate(), 0.02);
    }

    #[test]
    fn test_invalid_spot() {
        assert!(GarmanKohlhagen::new(0.0, 0.01, 0.02, 0.1).is_err());
    }
}
