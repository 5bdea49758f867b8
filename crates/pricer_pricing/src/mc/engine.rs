//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloEngine`] coordinates:
//! 1. Seed resolution (fixed seed, or system entropy when none is configured)
//! 2. Path generation via an injected [`PathSimulator`]
//! 3. Payoff evaluation via [`PathPayoff`]
//! 4. Discounting at `exp(-r·T)` and aggregation into a mean and standard error

use pricer_models::instruments::exotic::{AsianOption, BarrierOption, DigitalOption};
use pricer_models::instruments::EquityOption;
use tracing::debug;

use super::config::MonteCarloConfig;
use super::error::{ConfigError, SimulationError};
use super::paths::{GbmParams, PathMatrix};
use super::simulator::{PathSimulator, SimulatorBackend};
use crate::path_dependent::PathPayoff;
use crate::rng::PricerRng;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult { price: 10.5, std_error: 0.05, n_paths: 10_000, seed: 42 };
/// assert!((result.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of paths simulated.
    pub n_paths: usize,
    /// Seed actually used, so an entropy-seeded run can be replayed.
    pub seed: u64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine over a pluggable path simulator.
///
/// The engine holds no mutable state; every call is independent and the same
/// engine can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::exotic::AsianOption;
/// use pricer_models::instruments::{EquityOption, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine, SimulatorBackend};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(2_000)
///     .n_steps(50)
///     .seed(42)
///     .build()
///     .unwrap();
/// let engine = MonteCarloEngine::new(config, SimulatorBackend::Portable).unwrap();
///
/// let vanilla = EquityOption::new(100.0, 100.0, 1.0, 0.03, 0.0, 0.2, OptionType::Call).unwrap();
/// let first = engine.price_asian(&AsianOption::new(vanilla)).unwrap();
/// let second = engine.price_asian(&AsianOption::new(vanilla)).unwrap();
///
/// assert!(first.price > 0.0);
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEngine<S: PathSimulator = SimulatorBackend> {
    config: MonteCarloConfig,
    simulator: S,
}

impl<S: PathSimulator> MonteCarloEngine<S> {
    /// Creates an engine.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig, simulator: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, simulator })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the path simulator.
    #[inline]
    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    fn resolve_seed(&self) -> u64 {
        self.config.seed().unwrap_or_else(PricerRng::entropy_seed)
    }

    /// Simulates the configured number of paths.
    ///
    /// Returns the matrix together with the seed that produced it.
    ///
    /// # Errors
    ///
    /// Propagates simulator errors.
    pub fn simulate(&self, params: &GbmParams) -> Result<(PathMatrix, u64), SimulationError> {
        let seed = self.resolve_seed();
        let paths = self.run(params, seed)?;
        Ok((paths, seed))
    }

    fn run(&self, params: &GbmParams, seed: u64) -> Result<PathMatrix, SimulationError> {
        debug!(
            backend = self.simulator.name(),
            n_paths = self.config.n_paths(),
            n_steps = self.config.n_steps(),
            seed,
            "simulating GBM paths"
        );
        self.simulator
            .simulate(params, self.config.n_paths(), self.config.n_steps(), seed)
    }

    /// Prices any path payoff under `params`.
    ///
    /// # Errors
    ///
    /// - Propagates simulator errors
    /// - `SimulationError::NonFiniteEstimate` if the estimate is NaN or infinite
    pub fn price<P: PathPayoff>(
        &self,
        params: &GbmParams,
        payoff: &P,
    ) -> Result<PricingResult, SimulationError> {
        let seed = self.resolve_seed();
        let paths = self.run(params, seed)?;
        let payoffs = self.simulator.evaluate(&paths, payoff);

        let (mean, std_error) = mean_and_std_error(&payoffs);
        let df = params.discount_factor();
        let price = mean * df;
        if !price.is_finite() {
            return Err(SimulationError::NonFiniteEstimate { price });
        }

        debug!(price, std_error = std_error * df, "Monte Carlo estimate");

        Ok(PricingResult {
            price,
            std_error: std_error * df,
            n_paths: payoffs.len(),
            seed,
        })
    }

    /// Prices a European option by simulation.
    ///
    /// # Errors
    ///
    /// Same as [`MonteCarloEngine::price`].
    pub fn price_european(&self, option: &EquityOption) -> Result<PricingResult, SimulationError> {
        self.price(&GbmParams::from_option(option)?, option)
    }

    /// Prices an arithmetic-average Asian option.
    ///
    /// # Errors
    ///
    /// Same as [`MonteCarloEngine::price`].
    pub fn price_asian(&self, option: &AsianOption) -> Result<PricingResult, SimulationError> {
        self.price(&GbmParams::from_option(option.underlying())?, option)
    }

    /// Prices a discretely monitored barrier option.
    ///
    /// # Errors
    ///
    /// Same as [`MonteCarloEngine::price`].
    pub fn price_barrier(&self, option: &BarrierOption) -> Result<PricingResult, SimulationError> {
        self.price(&GbmParams::from_option(option.underlying())?, option)
    }

    /// Prices a cash-or-nothing digital option.
    ///
    /// # Errors
    ///
    /// Same as [`MonteCarloEngine::price`].
    pub fn price_digital(&self, option: &DigitalOption) -> Result<PricingResult, SimulationError> {
        self.price(&GbmParams::from_option(option.underlying())?, option)
    }
}

/// Sample mean and standard error of the mean; the error is 0 for one sample.
fn mean_and_std_error(values: &[f64]) -> (f64, f64) {
    let n = values.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    if n == 1 {
        return (mean, 0.0);
    }
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    (mean, (variance / n as f64).sqrt())
}

/// Prices an Asian option on the given backend.
///
/// # Errors
///
/// `SimulationError` for an invalid configuration or a non-finite estimate.
pub fn price_asian_option_mc<S: PathSimulator>(
    option: &AsianOption,
    config: &MonteCarloConfig,
    backend: S,
) -> Result<PricingResult, SimulationError> {
    MonteCarloEngine::new(config.clone(), backend)?.price_asian(option)
}

/// Prices a barrier option on the given backend.
///
/// # Errors
///
/// `SimulationError` for an invalid configuration or a non-finite estimate.
pub fn price_barrier_option_mc<S: PathSimulator>(
    option: &BarrierOption,
    config: &MonteCarloConfig,
    backend: S,
) -> Result<PricingResult, SimulationError> {
    MonteCarloEngine::new(config.clone(), backend)?.price_barrier(option)
}

/// Prices a digital option on the given backend.
///
/// # Errors
///
/// `SimulationError` for an invalid configuration or a non-finite estimate.
pub fn price_digital_option_mc<S: PathSimulator>(
    option: &DigitalOption,
    config: &MonteCarloConfig,
    backend: S,
) -> Result<PricingResult, SimulationError> {
    MonteCarloEngine::new(config.clone(), backend)?.price_digital(option)
}
