//! Black-76 model for options on forwards (caplets, swaptions, futures options).
//!
//! Black-76 is Black-Scholes on the forward with no carry: feeding
//! `spot = F`, `rate = r` and `dividend_yield = r` into [`BlackScholes`]
//! makes the drift `r - q` vanish exactly and discounts both legs once at
//! `e^(-rT)`:
//!
//! ```text
//! C = e^(-rT)·(F·N(d₁) - K·N(d₂))
//! d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//! ```
//!
//! A degenerate market returns the undiscounted intrinsic `max(F - K, 0)`.

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Black-76 model for European options on a forward.
///
/// # Examples
/// ```
/// use pricer_models::analytical::Black76;
/// use pricer_models::instruments::OptionType;
///
/// let model = Black76::new(0.03, 0.02, 0.25).unwrap();
/// let call = model.price(0.03, 2.0, OptionType::Call).unwrap();
/// let put = model.price(0.03, 2.0, OptionType::Put).unwrap();
///
/// // ATM forward: call and put are equal
/// assert!((call - put).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Black76 {
    inner: BlackScholes,
}

impl Black76 {
    /// Creates a new Black-76 model.
    ///
    /// # Arguments
    /// * `forward` - Forward price or rate (must be positive)
    /// * `discount_rate` - Continuously compounded discount rate
    /// * `volatility` - Lognormal forward volatility
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidForward` if forward <= 0
    /// - `AnalyticalError::NonFiniteInput` if any input is NaN or infinite
    pub fn new(forward: f64, discount_rate: f64, volatility: f64) -> Result<Self, AnalyticalError> {
        let inner = BlackScholes::new(forward, discount_rate, discount_rate, volatility)
            .map_err(|err| match err {
                AnalyticalError::InvalidSpot { spot } => {
                    AnalyticalError::InvalidForward { forward: spot }
                }
                AnalyticalError::NonFiniteInput { name: "spot", value } => {
                    AnalyticalError::NonFiniteInput {
                        name: "forward",
                        value,
                    }
                }
                other => other,
            })?;
        Ok(Self { inner })
    }

    /// Returns the forward.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.inner.spot()
    }

    /// Returns the discount rate.
    #[inline]
    pub fn discount_rate(&self) -> f64 {
        self.inner.rate()
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.inner.volatility()
    }

    /// Prices a European option on the forward.
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
}

/// Prices a European option on a forward under Black-76.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black76_price;
/// use pricer_models::instruments::OptionType;
///
/// let price = black76_price(100.0, 95.0, 1.0, 0.03, 0.2, OptionType::Call).unwrap();
/// assert!(price > (100.0 - 95.0) * (-0.03_f64).exp());
/// ```
pub fn black76_price(
    forward: f64,
    strike: f64,
    maturity: f64,
    discount_rate: f64,
    vol: f64,
    option_type: OptionType,
) -> Result<f64, AnalyticalError> {
    Black76::new(forward, discount_rate, vol)?.price(strike, maturity, option_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::math::distributions::norm_cdf;

    fn textbook(forward: f64, strike: f64, t: f64, r: f64, vol: f64, ot: OptionType) -> f64 {
        let vsqrt = vol * t.sqrt();
        let d1 = ((forward / strike).ln() + 0.5 * vol * vol * t) / vsqrt;
        let d2 = d1 - vsqrt;
        let df = (-r * t).exp();
        match ot {
            OptionType::Call => df * (forward * norm_cdf(d1) - strike * norm_cdf(d2)),
            OptionType::Put => df * (strike * norm_cdf(-d2) - forward * norm_cdf(-d1)),
        }
    }

    #[test]
    fn test_matches_textbook_formula() {
        for (f, k, t, r, vol) in [
            (100.0, 95.0, 1.0, 0.03, 0.2),
            (0.035, 0.03, 2.5, 0.02, 0.4),
            (50.0, 70.0, 0.25, -0.005, 0.6),
        ] {
            for ot in [OptionType::Call, OptionType::Put] {
                let model = black76_price(f, k, t, r, vol, ot).unwrap();
                assert_relative_eq!(model, textbook(f, k, t, r, vol, ot), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_equivalent_to_black_scholes_remap() {
        let b76 = black76_price(105.0, 100.0, 1.5, 0.04, 0.3, OptionType::Put).unwrap();
        let bs = BlackScholes::new(105.0, 0.04, 0.04, 0.3)
            .unwrap()
            .price(100.0, 1.5, OptionType::Put)
            .unwrap();
        assert_eq!(b76.to_bits(), bs.to_bits());
    }

    #[test]
    fn test_put_call_parity() {
        let model = Black76::new(0.05, 0.03, 0.2).unwrap();
        let call = model.price(0.04, 3.0, OptionType::Call).unwrap();
        let put = model.price(0.04, 3.0, OptionType::Put).unwrap();
        assert_relative_eq!(call - put, (-0.09_f64).exp() * 0.01, epsilon = 1e-14);
    }

    #[test]
    fn test_degenerate_is_undiscounted_intrinsic() {
        assert_eq!(
            black76_price(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call).unwrap(),
            10.0
        );
        assert_eq!(
            black76_price(90.0, 100.0, 1.0, 0.05, 0.0, OptionType::Put).unwrap(),
            10.0
        );
    }

    #[test]
    fn test_invalid_forward_reported_as_forward() {
        match Black76::new(-0.01, 0.02, 0.2) {
            Err(AnalyticalError::InvalidForward { forward }) => assert_eq!(forward, -0.01),
            other => panic!("Expected InvalidForward, got {:?}", other),
        }
        assert!(matches!(
            Black76::new(f64::NAN, 0.02, 0.2),
            Err(AnalyticalError::NonFiniteInput { name: "forward", .. })
        ));
    }

    #[test]
    fn test_accessors() {
        let model = Black76::new(0.03, 0.02, 0.25).unwrap();
        assert_eq!(model.forward(), 0.03);
        assert_eq!(model.discount_rate(), 0.02);
        assert_eq!(model.volatility(), 0.25);
    }
}
