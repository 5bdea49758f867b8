//! CDS pricing module.
//!
//! Values both legs of a CDS on the payment schedule using survival
//! probabilities from a credit curve.
//!
//! # Pricing Model
//!
//! With payment times `t₁..tₙ`, accrual `Δt` and `S(t₀) = 1`:
//!
//! ```text
//! risky annuity   A = Σ DF(tᵢ) × S(tᵢ) × Δt
//! premium leg       = Notional × Spread × A
//! protection leg    = Notional × (1 - R) × Σ DF(tᵢ) × (S(tᵢ₋₁) - S(tᵢ))
//! NPV               = protection leg - premium leg
//! fair spread       = protection leg / (Notional × A)
//! ```
//!
//! Default is assumed to settle on the payment date that ends the period in
//! which it occurs; accrued premium on default is not paid.
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};
//! use pricer_models::instruments::credit::{CdsPricer, CreditDefaultSwap};
//!
//! let cds = CreditDefaultSwap::new(10_000_000.0, 0.01, 5.0, 4, 0.01, 0.4, 0.03).unwrap();
//!
//! let discount_curve = FlatCurve::new(0.03);
//! let credit_curve = FlatHazardRateCurve::new(0.01);
//!
//! let pricer = CdsPricer::new(&discount_curve, &credit_curve);
//! let result = pricer.price(&cds).unwrap();
//! assert!(result.npv < 0.0); // paying 100bp for ~60bp of expected loss
//! ```

use pricer_core::market_data::curves::{CreditCurve, FlatCurve, FlatHazardRateCurve, YieldCurve};

use super::cds::CreditDefaultSwap;
use crate::instruments::error::InstrumentError;

/// CDS pricing result containing leg values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CdsPriceResult {
    /// Present value of the protection leg.
    pub protection_leg: f64,
    /// Present value of the premium leg.
    pub premium_leg: f64,
    /// Survival-weighted discounted accrual per unit notional.
    pub risky_annuity: f64,
    /// Net present value to the protection buyer.
    pub npv: f64,
    /// Spread that makes the NPV zero; 0 when the risky annuity is not positive.
    pub fair_spread: f64,
}

/// CDS pricer using discount and credit curves.
///
/// # Type Parameters
///
/// * `D` - Discount curve implementing `YieldCurve<f64>`
/// * `C` - Credit curve implementing `CreditCurve<f64>`
pub struct CdsPricer<'a, D: YieldCurve<f64>, C: CreditCurve<f64>> {
    discount_curve: &'a D,
    credit_curve: &'a C,
}

impl<'a, D: YieldCurve<f64>, C: CreditCurve<f64>> CdsPricer<'a, D, C> {
    /// Create a new CDS pricer.
    ///
    /// # Arguments
    ///
    /// * `discount_curve` - Discount curve for discounting
    /// * `credit_curve` - Credit curve for survival probabilities
    pub fn new(discount_curve: &'a D, credit_curve: &'a C) -> Self {
        Self {
            discount_curve,
            credit_curve,
        }
    }

    /// Price a CDS and return the leg breakdown.
    ///
    /// # Errors
    ///
    /// `InstrumentError::MarketData` if a curve rejects a payment time.
    pub fn price(&self, cds: &CreditDefaultSwap) -> Result<CdsPriceResult, InstrumentError> {
        let schedule = cds.schedule();
        let dt = schedule.accrual();
        let lgd = cds.loss_given_default();

        let mut risky_annuity = 0.0;
        let mut expected_loss = 0.0;
        let mut prev_survival = 1.0;

        for &t in schedule.times() {
            let df = self.discount_curve.discount_factor(t)?;
            let survival = self.credit_curve.survival_probability(t)?;

            risky_annuity += df * survival * dt;
            expected_loss += lgd * df * (prev_survival - survival);

            prev_survival = survival;
        }

        let notional = cds.notional();
        let protection_leg = notional * expected_loss;
        let premium_leg = notional * cds.spread() * risky_annuity;
        let fair_spread = if risky_annuity > 0.0 {
            expected_loss / risky_annuity
        } else {
            0.0
        };

        Ok(CdsPriceResult {
            protection_leg,
            premium_leg,
            risky_annuity,
            npv: protection_leg - premium_leg,
            fair_spread,
        })
    }
}

/// Prices a CDS on the flat curves implied by its own hazard and discount rates.
fn price_flat(cds: &CreditDefaultSwap) -> Result<CdsPriceResult, InstrumentError> {
    let discount_curve = FlatCurve::new(cds.discount_rate());
    let credit_curve = FlatHazardRateCurve::new(cds.hazard_rate());
    CdsPricer::new(&discount_curve, &credit_curve).price(cds)
}

/// Present value of a CDS to the protection buyer.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::credit::{fair_cds_spread, price_cds, CreditDefaultSwap};
///
/// let cds = CreditDefaultSwap::with_defaults(1_000_000.0, 0.01, 5.0).unwrap();
/// let fair = fair_cds_spread(&cds).unwrap();
/// let at_fair = cds.with_spread(fair).unwrap();
/// assert!(price_cds(&at_fair).unwrap().abs() < 1e-4);
/// ```
pub fn price_cds(cds: &CreditDefaultSwap) -> Result<f64, InstrumentError> {
    Ok(price_flat(cds)?.npv)
}

/// Spread at which the CDS is worth zero; independent of the contract spread.
pub fn fair_cds_spread(cds: &CreditDefaultSwap) -> Result<f64, InstrumentError> {
    Ok(price_flat(cds)?.fair_spread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn reference_cds() -> CreditDefaultSwap {
        CreditDefaultSwap::new(1e6, 0.01, 5.0, 4, 0.02, 0.4, 0.02).unwrap()
    }

    // ========================================
    // Reference values
    // ========================================

    #[test]
    fn test_reference_pv() {
        assert_relative_eq!(
            price_cds(&reference_cds()).unwrap(),
            9153.719609159421,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_reference_fair_spread() {
        assert_relative_eq!(
            fair_cds_spread(&reference_cds()).unwrap(),
            0.012030050062562558,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_leg_breakdown() {
        let result = price_flat(&reference_cds()).unwrap();
        assert_relative_eq!(result.risky_annuity, 4.509110281548703, epsilon = 1e-10);
        assert_relative_eq!(result.protection_leg, 1e6 * 0.05424482242464645, epsilon = 1e-6);
        assert_relative_eq!(result.premium_leg, 1e6 * 0.01 * result.risky_annuity, epsilon = 1e-6);
        assert_relative_eq!(
            result.npv,
            result.protection_leg - result.premium_leg,
            epsilon = 1e-9
        );
    }

    // ========================================
    // Edge cases
    // ========================================

    #[test]
    fn test_zero_hazard_has_no_protection_value() {
        let cds = CreditDefaultSwap::new(1e7, 0.012, 3.0, 2, 0.0, 0.4, 0.03).unwrap();
        let result = price_flat(&cds).unwrap();
        assert_eq!(result.protection_leg, 0.0);
        assert_eq!(result.fair_spread, 0.0);
        assert_relative_eq!(result.npv, -341699.649610122, epsilon = 1e-6);
    }

    #[test]
    fn test_full_recovery_has_no_protection_value() {
        let cds = CreditDefaultSwap::new(1e6, 0.01, 5.0, 4, 0.05, 1.0, 0.02).unwrap();
        assert_eq!(fair_cds_spread(&cds).unwrap(), 0.0);
    }

    #[test]
    fn test_fair_spread_near_credit_triangle() {
        // Continuous-premium approximation: s ≈ (1 - R) × λ
        let cds = CreditDefaultSwap::new(1e6, 0.0, 5.0, 12, 0.03, 0.4, 0.02).unwrap();
        let fair = fair_cds_spread(&cds).unwrap();
        assert!((fair - 0.018).abs() < 5e-4);
    }

    // ========================================
    // Properties
    // ========================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_pv_at_fair_spread_is_zero(
            notional in 1.0f64..1e8,
            maturity in 0.25f64..15.0,
            frequency in 1u32..=12,
            hazard in 0.0f64..0.2,
            recovery in 0.0f64..=1.0,
            rate in -0.01f64..0.1,
        ) {
            let cds = CreditDefaultSwap::new(notional, 0.01, maturity, frequency, hazard, recovery, rate).unwrap();
            let fair = fair_cds_spread(&cds).unwrap();
            let pv = price_cds(&cds.with_spread(fair).unwrap()).unwrap();
            prop_assert!(pv.abs() <= 1e-4_f64.max(1e-12 * notional));
        }

        #[test]
        fn prop_npv_decreases_with_spread(
            spread in 0.0f64..0.05,
            bump in 1e-4f64..0.01,
        ) {
            let cds = reference_cds().with_spread(spread).unwrap();
            let wider = cds.with_spread(spread + bump).unwrap();
            prop_assert!(price_cds(&wider).unwrap() < price_cds(&cds).unwrap());
        }
    }
}
