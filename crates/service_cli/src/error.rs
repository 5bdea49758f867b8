//! CLI error types

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use pricer_models::instruments::InstrumentError;
use pricer_optimiser::CalibrationError;
use pricer_pricing::mc::SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

macro_rules! via_pricing_error {
    ($($source:ty),* $(,)?) => {
        $(
            impl From<$source> for CliError {
                fn from(err: $source) -> Self {
                    CliError::Pricing(err.into())
                }
            }
        )*
    };
}

via_pricing_error!(
    AnalyticalError,
    InstrumentError,
    MarketDataError,
    SimulationError,
    CalibrationError,
    pricer_pricing::mc::ConfigError,
);

impl CliError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) | CliError::InvalidArgument(_) => 2,
            CliError::Pricing(_) | CliError::Output(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_errors_become_pricing_errors() {
        let err: CliError = InstrumentError::InvalidStrike { strike: -1.0 }.into();
        assert!(matches!(err, CliError::Pricing(PricingError::InvalidParameter(_))));
        assert!(err.to_string().contains("-1"));

        let err: CliError = CalibrationError::InvalidTarget { price: f64::NAN }.into();
        assert!(matches!(err, CliError::Pricing(PricingError::InvalidParameter(_))));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_errors_exit_with_usage_code() {
        let err: CliError = ConfigError::InvalidBackend("gpu".to_string()).into();
        assert_eq!(err.exit_code(), 2);
    }
}
