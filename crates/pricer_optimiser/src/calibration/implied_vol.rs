//! Newton-Raphson implied volatility.
//!
//! Iterates `σ_{n+1} = σ_n - (BS(σ_n) - target) / vega(σ_n)` from
//! [`INITIAL_GUESS`]. A step that would leave `σ <= 0` is clamped to
//! [`MIN_VOLATILITY`] and the iteration continues. The returned estimate is
//! always floored at [`MIN_VOLATILITY`].
//!
//! Non-convergence does not fail the call. The last estimate is returned with
//! a [`ConvergenceStatus`] saying why the iteration stopped.

use std::fmt;

use pricer_core::math::solvers::SolverConfig;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::OptionType;
use tracing::{trace, warn};

use crate::error::CalibrationError;

/// Starting volatility of every solve.
pub const INITIAL_GUESS: f64 = 0.2;

/// Lower bound on any returned volatility.
pub const MIN_VOLATILITY: f64 = 1e-6;

/// Vega below which a Newton step is not attempted.
pub const VEGA_FLOOR: f64 = 1e-8;

/// How an implied volatility iteration ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConvergenceStatus {
    /// `|BS(σ) - target| < tolerance`.
    Converged,
    /// Vega fell below [`VEGA_FLOOR`]; the current estimate was returned.
    VegaUnderflow,
    /// The iteration limit was reached.
    MaxIterations,
}

impl ConvergenceStatus {
    /// Kebab-case name for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConvergenceStatus::Converged => "converged",
            ConvergenceStatus::VegaUnderflow => "vega-underflow",
            ConvergenceStatus::MaxIterations => "max-iterations",
        }
    }
}

impl fmt::Display for ConvergenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of an implied volatility solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolResult {
    /// Volatility estimate, at least [`MIN_VOLATILITY`].
    pub volatility: f64,
    /// Number of model evaluations performed.
    pub iterations: usize,
    /// Why the iteration stopped.
    pub status: ConvergenceStatus,
}

impl ImpliedVolResult {
    /// Returns true if the target price was matched within tolerance.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status == ConvergenceStatus::Converged
    }
}

/// Implied volatility solver for European options.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
/// use pricer_models::analytical::black_scholes_price;
/// use pricer_models::instruments::OptionType;
/// use pricer_optimiser::calibration::ImpliedVolSolver;
///
/// let target = black_scholes_price(100.0, 95.0, 0.75, 0.02, 0.01, 0.3, OptionType::Put).unwrap();
///
/// let solver = ImpliedVolSolver::new(SolverConfig::default());
/// let result = solver
///     .solve(target, 100.0, 95.0, 0.75, 0.02, 0.01, OptionType::Put)
///     .unwrap();
///
/// assert!(result.is_converged());
/// assert!((result.volatility - 0.3).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    config: SolverConfig<f64>,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl ImpliedVolSolver {
    /// Create a solver with the given tolerance and iteration limit.
    pub fn new(config: SolverConfig<f64>) -> Self {
        Self { config }
    }

    /// Create a solver after validating `tolerance` and `max_iterations`.
    ///
    /// # Errors
    ///
    /// `CalibrationError::Solver` if `tolerance` is not positive and finite
    /// or `max_iterations` is 0.
    pub fn with_settings(tolerance: f64, max_iterations: usize) -> Result<Self, CalibrationError> {
        Ok(Self::new(SolverConfig::new(tolerance, max_iterations)?))
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig<f64> {
        &self.config
    }

    /// Solve for the volatility reproducing `target_price`.
    ///
    /// # Arguments
    ///
    /// * `target_price` - Observed option price
    /// * `spot` - Spot price (> 0)
    /// * `strike` - Strike price (> 0)
    /// * `maturity` - Time to expiry in years (>= 0)
    /// * `rate` - Risk-free rate
    /// * `dividend_yield` - Continuous dividend yield
    /// * `option_type` - Call or put
    ///
    /// # Errors
    ///
    /// - `CalibrationError::InvalidTarget` if `target_price` is not finite
    /// - `CalibrationError::Analytical` if the market inputs are rejected
    #[allow(clippy::too_many_arguments)]
    pub fn solve(
        &self,
        target_price: f64,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        dividend_yield: f64,
        option_type: OptionType,
    ) -> Result<ImpliedVolResult, CalibrationError> {
        if !target_price.is_finite() {
            return Err(CalibrationError::InvalidTarget {
                price: target_price,
            });
        }

        let model = BlackScholes::new(spot, rate, dividend_yield, INITIAL_GUESS)?;
        let mut vol = INITIAL_GUESS;

        for iteration in 1..=self.config.max_iterations {
            let trial = model.with_volatility(vol);
            let diff = trial.price(strike, maturity, option_type)? - target_price;
            trace!(iteration, vol, diff, "implied vol iteration");

            if diff.abs() < self.config.tolerance {
                return Ok(ImpliedVolResult {
                    volatility: vol.max(MIN_VOLATILITY),
                    iterations: iteration,
                    status: ConvergenceStatus::Converged,
                });
            }

            let vega = trial.vega(strike, maturity);
            if vega < VEGA_FLOOR {
                return Ok(stalled(vol, iteration, ConvergenceStatus::VegaUnderflow));
            }

            vol -= diff / vega;
            if vol <= 0.0 {
                vol = MIN_VOLATILITY;
            }
        }

        Ok(stalled(
            vol,
            self.config.max_iterations,
            ConvergenceStatus::MaxIterations,
        ))
    }
}

fn stalled(vol: f64, iterations: usize, status: ConvergenceStatus) -> ImpliedVolResult {
    let volatility = vol.max(MIN_VOLATILITY);
    warn!(%status, volatility, iterations, "implied volatility did not converge");
    ImpliedVolResult {
        volatility,
        iterations,
        status,
    }
}

/// Implied volatility estimate for a European option.
///
/// Returns the best estimate even when the iteration does not converge; use
/// [`ImpliedVolSolver::solve`] to see the convergence status.
///
/// # Errors
///
/// - `CalibrationError::Solver` for a non-positive tolerance or `max_iter = 0`
/// - `CalibrationError::InvalidTarget` for a non-finite target price
/// - `CalibrationError::Analytical` for invalid market inputs
///
/// # Example
///
/// ```
/// use pricer_models::instruments::OptionType;
/// use pricer_optimiser::calibration::implied_vol;
///
/// let vol = implied_vol(10.450583572185565, 100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call, 1e-6, 100)
///     .unwrap();
/// assert!((vol - 0.2).abs() < 1e-8);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn implied_vol(
    target_price: f64,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    dividend_yield: f64,
    option_type: OptionType,
    tol: f64,
    max_iter: usize,
) -> Result<f64, CalibrationError> {
    ImpliedVolSolver::with_settings(tol, max_iter)?
        .solve(
            target_price,
            spot,
            strike,
            maturity,
            rate,
            dividend_yield,
            option_type,
        )
        .map(|result| result.volatility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::analytical::black_scholes_price;

    fn solve(target: f64, strike: f64, maturity: f64, option_type: OptionType) -> ImpliedVolResult {
        ImpliedVolSolver::default()
            .solve(target, 100.0, strike, maturity, 0.05, 0.0, option_type)
            .unwrap()
    }

    // ========================================
    // Convergence
    // ========================================

    #[test]
    fn test_initial_guess_converges_immediately() {
        let target = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
        let result = solve(target, 100.0, 1.0, OptionType::Call);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.volatility, INITIAL_GUESS);
        assert!(result.is_converged());
    }

    #[test]
    fn test_recovers_vol_for_calls_and_puts() {
        for option_type in [OptionType::Call, OptionType::Put] {
            for vol in [0.1, 0.25, 0.6, 1.2] {
                let target = black_scholes_price(100.0, 105.0, 1.0, 0.05, 0.0, vol, option_type).unwrap();
                let result = solve(target, 105.0, 1.0, option_type);
                assert!(result.is_converged());
                assert_relative_eq!(result.volatility, vol, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_deep_itm_high_vol_stalls_on_vega() {
        // The first step overshoots below zero and the clamped vol has no vega
        let target = black_scholes_price(100.0, 80.0, 0.5, 0.05, 0.0, 1.99, OptionType::Call).unwrap();
        let result = solve(target, 80.0, 0.5, OptionType::Call);
        assert_eq!(result.status, ConvergenceStatus::VegaUnderflow);
        assert_eq!(result.volatility, MIN_VOLATILITY);
    }

    #[test]
    fn test_zero_target_floors_at_min_volatility() {
        let result = solve(0.0, 100.0, 1.0, OptionType::Call);
        assert_eq!(result.status, ConvergenceStatus::VegaUnderflow);
        assert_eq!(result.iterations, 2);
        assert_eq!(result.volatility, MIN_VOLATILITY);
    }

    #[test]
    fn test_zero_maturity_returns_initial_guess() {
        // Degenerate market: vega is zero
        let result = solve(5.0, 100.0, 0.0, OptionType::Call);
        assert_eq!(result.status, ConvergenceStatus::VegaUnderflow);
        assert_eq!(result.volatility, INITIAL_GUESS);
    }

    #[test]
    fn test_iteration_limit_reported() {
        let target = black_scholes_price(100.0, 100.0, 1.0, 0.05, 0.0, 0.9, OptionType::Call).unwrap();
        let solver = ImpliedVolSolver::with_settings(1e-12, 1).unwrap();
        let result = solver
            .solve(target, 100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call)
            .unwrap();
        assert_eq!(result.status, ConvergenceStatus::MaxIterations);
        assert_eq!(result.iterations, 1);
        assert!(result.volatility > INITIAL_GUESS);
    }

    // ========================================
    // Validation
    // ========================================

    #[test]
    fn test_rejects_bad_inputs() {
        let solver = ImpliedVolSolver::default();
        assert!(matches!(
            solver.solve(f64::NAN, 100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call),
            Err(CalibrationError::InvalidTarget { .. })
        ));
        assert!(matches!(
            solver.solve(10.0, -100.0, 100.0, 1.0, 0.05, 0.0, OptionType::Call),
            Err(CalibrationError::Analytical(_))
        ));
        assert!(matches!(
            solver.solve(10.0, 100.0, 0.0, 1.0, 0.05, 0.0, OptionType::Call),
            Err(CalibrationError::Analytical(_))
        ));
        assert!(matches!(
            ImpliedVolSolver::with_settings(0.0, 100),
            Err(CalibrationError::Solver(_))
        ));
        assert!(matches!(
            ImpliedVolSolver::with_settings(1e-6, 0),
            Err(CalibrationError::Solver(_))
        ));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ConvergenceStatus::Converged.to_string(), "converged");
        assert_eq!(ConvergenceStatus::VegaUnderflow.to_string(), "vega-underflow");
        assert_eq!(ConvergenceStatus::MaxIterations.to_string(), "max-iterations");
    }
}
