//! Analytic Greeks for the Black-Scholes-Merton model.
//!
//! All sensitivities are closed-form partial derivatives of the price in
//! [`BlackScholes`], sharing its d₁/d₂ and the standard normal PDF φ:
//!
//! | Greek | Call | Put |
//! |-------|------|-----|
//! | Delta | e^(-qT)·N(d₁) | e^(-qT)·(N(d₁) - 1) |
//! | Gamma | e^(-qT)·φ(d₁) / (S·σ·√T) | same |
//! | Vega  | S·e^(-qT)·φ(d₁)·√T | same |
//! | Theta | -S·e^(-qT)·φ(d₁)·σ/(2√T) - r·K·e^(-rT)·N(d₂) + q·S·e^(-qT)·N(d₁) | -S·e^(-qT)·φ(d₁)·σ/(2√T) + r·K·e^(-rT)·N(-d₂) - q·S·e^(-qT)·N(-d₁) |
//! | Rho   | K·T·e^(-rT)·N(d₂) | -K·T·e^(-rT)·N(-d₂) |
//!
//! Theta is the calendar-time decay (∂V/∂t = -∂V/∂T). Vega and rho are per
//! unit change (not per percentage point).
//!
//! In a degenerate market (`T <= 0` or `σ <= 0`) the Greeks are those of the
//! intrinsic payoff: delta is the payoff slope and all other sensitivities
//! are zero.

use pricer_core::math::distributions::{norm_cdf, norm_pdf};

use super::black_scholes::{validate_terms, BlackScholes};
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// The five first- and second-order sensitivities of a vanilla option.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t (time decay)
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

impl Greeks {
    /// Greeks of the intrinsic payoff `max(±(S - K), 0)`.
    fn intrinsic(spot: f64, strike: f64, option_type: OptionType) -> Self {
        let delta = match option_type {
            OptionType::Call if spot > strike => 1.0,
            OptionType::Put if spot < strike => -1.0,
            _ => 0.0,
        };
        Self {
            delta,
            ..Self::default()
        }
    }

    /// Returns `true` if every sensitivity is finite.
    pub fn is_finite(&self) -> bool {
        [self.delta, self.gamma, self.vega, self.theta, self.rho]
            .iter()
            .all(|g| g.is_finite())
    }
}

impl BlackScholes {
    /// Computes all five Greeks in a single pass.
    ///
    /// # Errors
    /// Same contract-term validation as [`BlackScholes::price`].
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
    /// let call = bs.greeks(100.0, 1.0, OptionType::Call).unwrap();
    /// let put = bs.greeks(100.0, 1.0, OptionType::Put).unwrap();
    ///
    /// assert!(call.delta > 0.0 && put.delta < 0.0);
    /// assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
    /// assert_eq!(call.gamma, put.gamma);
    /// ```
    pub fn greeks(
        &self,
        strike: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Greeks, AnalyticalError> {
        validate_terms(strike, expiry)?;
        let greeks = self.greeks_unchecked(strike, expiry, option_type);
        if !greeks.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!("non-finite Greeks {:?}", greeks),
            });
        }
        Ok(greeks)
    }

    /// Vega alone, for the Newton step of the implied volatility solver.
    ///
    /// Zero in a degenerate market.
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        if self.is_degenerate(expiry) {
            return 0.0;
        }
        let d1 = self.d1(strike, expiry);
        let df_q = (-self.dividend_yield() * expiry).exp();
        self.spot() * df_q * norm_pdf(d1) * expiry.sqrt()
    }

    fn greeks_unchecked(&self, strike: f64, expiry: f64, option_type: OptionType) -> Greeks {
        if self.is_degenerate(expiry) {
            return Greeks::intrinsic(self.spot(), strike, option_type);
        }

        let spot = self.spot();
        let rate = self.rate();
        let q = self.dividend_yield();
        let vol = self.volatility();

        let sqrt_t = expiry.sqrt();
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - vol * sqrt_t;
        let df_r = (-rate * expiry).exp();
        let df_q = (-q * expiry).exp();
        let pdf = norm_pdf(d1);

        let gamma = df_q * pdf / (spot * vol * sqrt_t);
        let vega = spot * df_q * pdf * sqrt_t;
        // Common decay term -(S·e^(-qT)·φ(d₁)·σ)/(2√T)
        let decay = -(spot * df_q * pdf * vol) / (2.0 * sqrt_t);

        match option_type {
            OptionType::Call => Greeks {
                delta: df_q * norm_cdf(d1),
                gamma,
                vega,
                theta: decay - rate * strike * df_r * norm_cdf(d2)
                    + q * spot * df_q * norm_cdf(d1),
                rho: strike * expiry * df_r * norm_cdf(d2),
            },
            OptionType::Put => Greeks {
                delta: df_q * (norm_cdf(d1) - 1.0),
                gamma,
                vega,
                theta: decay + rate * strike * df_r * norm_cdf(-d2)
                    - q * spot * df_q * norm_cdf(-d1),
                rho: -strike * expiry * df_r * norm_cdf(-d2),
            },
        }
    }
}

/// Computes Black-Scholes-Merton Greeks from the full parameter set.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes_greeks;
/// use pricer_models::instruments::OptionType;
///
/// let g = black_scholes_greeks(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
/// assert!((g.delta - 0.6368306511756191).abs() < 1e-10);
/// ```
pub fn black_scholes_greeks(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    option_type: OptionType,
) -> Result<Greeks, AnalyticalError> {
    BlackScholes::new(spot, rate, dividend_yield, vol)?.greeks(strike, maturity, option_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model(spot: f64, vol: f64) -> BlackScholes {
        BlackScholes::new(spot, 0.05, 0.02, vol).unwrap()
    }

    fn price(bs: &BlackScholes, strike: f64, expiry: f64, ot: OptionType) -> f64 {
        bs.price(strike, expiry, ot).unwrap()
    }

    // ==========================================================
    // Reference Values
    // ==========================================================

    #[test]
    fn test_atm_call_reference() {
        let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let g = bs.greeks(100.0, 1.0, OptionType::Call).unwrap();
        assert_relative_eq!(g.delta, 0.6368306511756191, epsilon = 1e-10);
        assert_relative_eq!(g.gamma, 0.018762017345846895, epsilon = 1e-10);
        assert_relative_eq!(g.vega, 37.52403469169379, epsilon = 1e-8);
        assert_relative_eq!(g.theta, -6.414027546438197, epsilon = 1e-8);
        assert_relative_eq!(g.rho, 53.232481545376345, epsilon = 1e-8);
    }

    // ==========================================================
    // Finite Difference Checks (with dividend yield)
    // ==========================================================

    #[test]
    fn test_delta_gamma_vs_finite_diff() {
        let h = 0.01;
        for ot in [OptionType::Call, OptionType::Put] {
            let g = model(100.0, 0.25).greeks(95.0, 0.8, ot).unwrap();
            let up = price(&model(100.0 + h, 0.25), 95.0, 0.8, ot);
            let mid = price(&model(100.0, 0.25), 95.0, 0.8, ot);
            let down = price(&model(100.0 - h, 0.25), 95.0, 0.8, ot);
            assert_relative_eq!(g.delta, (up - down) / (2.0 * h), epsilon = 1e-6);
            assert_relative_eq!(g.gamma, (up - 2.0 * mid + down) / (h * h), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_vega_vs_finite_diff() {
        let h = 1e-5;
        for ot in [OptionType::Call, OptionType::Put] {
            let g = model(100.0, 0.25).greeks(110.0, 1.5, ot).unwrap();
            let up = price(&model(100.0, 0.25 + h), 110.0, 1.5, ot);
            let down = price(&model(100.0, 0.25 - h), 110.0, 1.5, ot);
            assert_relative_eq!(g.vega, (up - down) / (2.0 * h), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        let h = 1e-5;
        let bs = model(100.0, 0.3);
        for ot in [OptionType::Call, OptionType::Put] {
            let g = bs.greeks(105.0, 1.0, ot).unwrap();
            let longer = price(&bs, 105.0, 1.0 + h, ot);
            let shorter = price(&bs, 105.0, 1.0 - h, ot);
            assert_relative_eq!(g.theta, -(longer - shorter) / (2.0 * h), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 1e-6;
        for ot in [OptionType::Call, OptionType::Put] {
            let g = model(100.0, 0.2).greeks(100.0, 2.0, ot).unwrap();
            let up = BlackScholes::new(100.0, 0.05 + h, 0.02, 0.2).unwrap();
            let down = BlackScholes::new(100.0, 0.05 - h, 0.02, 0.2).unwrap();
            let fd = (price(&up, 100.0, 2.0, ot) - price(&down, 100.0, 2.0, ot)) / (2.0 * h);
            assert_relative_eq!(g.rho, fd, epsilon = 1e-4);
        }
    }

    // ==========================================================
    // Sign and Symmetry
    // ==========================================================

    #[test]
    fn test_gamma_vega_identical_for_call_and_put() {
        let bs = model(90.0, 0.35);
        let call = bs.greeks(100.0, 0.5, OptionType::Call).unwrap();
        let put = bs.greeks(100.0, 0.5, OptionType::Put).unwrap();
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
        assert!(call.rho > 0.0 && put.rho < 0.0);
    }

    #[test]
    fn test_delta_parity_with_dividend() {
        let bs = model(100.0, 0.2);
        let call = bs.greeks(100.0, 2.0, OptionType::Call).unwrap();
        let put = bs.greeks(100.0, 2.0, OptionType::Put).unwrap();
        assert_relative_eq!(call.delta - put.delta, (-0.02_f64 * 2.0).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_vega_helper_matches_greeks() {
        let bs = model(100.0, 0.2);
        let g = bs.greeks(120.0, 1.0, OptionType::Put).unwrap();
        assert_eq!(bs.vega(120.0, 1.0), g.vega);
    }

    // ==========================================================
    // Degenerate Market
    // ==========================================================

    #[test]
    fn test_zero_expiry_greeks() {
        let bs = model(110.0, 0.2);
        let call = bs.greeks(100.0, 0.0, OptionType::Call).unwrap();
        assert_eq!(call.delta, 1.0);
        assert_eq!(call.gamma, 0.0);
        assert_eq!(call.vega, 0.0);
        assert_eq!(call.theta, 0.0);
        assert_eq!(call.rho, 0.0);

        let put = bs.greeks(100.0, 0.0, OptionType::Put).unwrap();
        assert_eq!(put, Greeks::default());
    }

    #[test]
    fn test_zero_volatility_greeks() {
        let bs = model(90.0, 0.0);
        let put = bs.greeks(100.0, 1.0, OptionType::Put).unwrap();
        assert_eq!(put.delta, -1.0);
        assert_eq!(put.gamma, 0.0);
        assert_eq!(bs.vega(100.0, 1.0), 0.0);
    }

    #[test]
    fn test_invalid_terms_rejected() {
        let bs = model(100.0, 0.2);
        assert!(bs.greeks(-100.0, 1.0, OptionType::Call).is_err());
        assert!(bs.greeks(100.0, -1.0, OptionType::Call).is_err());
    }
}
