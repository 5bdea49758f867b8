//! CLI command implementations
//!
//! Each submodule implements a family of CLI commands. Commands receive the
//! shared [`Context`] built once in `main`.

pub mod bench;
pub mod calibrate;
pub mod check;
pub mod credit;
pub mod exotic;
pub mod price;
pub mod rates;

use clap::Args;
use pricer_models::instruments::{EquityOption, InstrumentError, OptionType};
use pricer_pricing::mc::SimulatorBackend;

use crate::config::PricerConfig;
use crate::output::OutputFormat;

/// Resolved configuration shared by all commands
#[derive(Debug, Clone)]
pub struct Context {
    pub config: PricerConfig,
    /// Fixed at start-up from `config.monte_carlo.backend`
    pub backend: SimulatorBackend,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: PricerConfig, format: OutputFormat) -> Self {
        let backend = config.monte_carlo.backend.resolve();
        Self {
            config,
            backend,
            format,
        }
    }
}

/// Market and contract terms of a European equity option
#[derive(Debug, Clone, Args)]
pub struct EquityArgs {
    /// Spot price
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(long)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Continuous dividend yield
    #[arg(long, default_value_t = 0.0)]
    pub dividend_yield: f64,

    /// Volatility
    #[arg(long)]
    pub vol: f64,

    /// Option type (call, put)
    #[arg(long = "type", default_value = "call")]
    pub option_type: OptionType,
}

impl EquityArgs {
    pub fn to_option(&self) -> Result<EquityOption, InstrumentError> {
        EquityOption::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.dividend_yield,
            self.vol,
            self.option_type,
        )
    }
}
