//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, `PRICER_*` environment
//! variables and command-line flags.
//!
//! ```toml
//! log_level = "info"
//!
//! [monte_carlo]
//! n_paths = 50000
//! n_steps = 252
//! seed = 42
//! backend = "auto"
//!
//! [calibration]
//! tolerance = 1e-6
//! max_iterations = 100
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::math::solvers::SolverConfig;
use pricer_optimiser::calibration::ImpliedVolSolver;
use pricer_pricing::mc::{MonteCarloConfig, SimulatorBackend, DEFAULT_PATHS, DEFAULT_STEPS};
use serde::Deserialize;
use thiserror::Error;

/// Configuration file read when `--config` is not given, if present.
pub const DEFAULT_CONFIG_FILE: &str = "neutryx.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid backend: {0}. Must be one of: auto, portable, parallel")]
    InvalidBackend(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {var} = {value:?}")]
    EnvError { var: &'static str, value: String },

    #[error("Invalid {section} settings: {message}")]
    InvalidSettings {
        section: &'static str,
        message: String,
    },
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Requested simulation backend, resolved once at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendChoice {
    /// Parallel when the worker pool has more than one thread
    #[default]
    Auto,
    Portable,
    Parallel,
}

impl FromStr for BackendChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(BackendChoice::Auto),
            "portable" => Ok(BackendChoice::Portable),
            "parallel" => Ok(BackendChoice::Parallel),
            _ => Err(ConfigError::InvalidBackend(s.to_string())),
        }
    }
}

impl fmt::Display for BackendChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendChoice::Auto => f.write_str("auto"),
            BackendChoice::Portable => f.write_str("portable"),
            BackendChoice::Parallel => f.write_str("parallel"),
        }
    }
}

impl BackendChoice {
    /// Fix the backend for the lifetime of the process
    pub fn resolve(&self) -> SimulatorBackend {
        match self {
            BackendChoice::Auto => SimulatorBackend::detect(),
            BackendChoice::Portable => SimulatorBackend::Portable,
            BackendChoice::Parallel => SimulatorBackend::Parallel,
        }
    }
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

/// `[monte_carlo]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MonteCarloSettings {
    pub n_paths: usize,
    pub n_steps: usize,
    pub seed: Option<u64>,
    #[serde(deserialize_with = "deserialize_from_str")]
    pub backend: BackendChoice,
}

impl Default for MonteCarloSettings {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            n_steps: DEFAULT_STEPS,
            seed: None,
            backend: BackendChoice::Auto,
        }
    }
}

/// `[calibration]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalibrationSettings {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        let solver = SolverConfig::<f64>::default();
        Self {
            tolerance: solver.tolerance,
            max_iterations: solver.max_iterations,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricerConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Simulation settings
    pub monte_carlo: MonteCarloSettings,
    /// Implied volatility solver settings
    pub calibration: CalibrationSettings,
}

impl PricerConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `PRICER_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("PRICER_LOG_LEVEL") {
            self.log_level = level.parse()?;
        }
        if let Some(value) = lookup("PRICER_MC_PATHS") {
            self.monte_carlo.n_paths = parse_env("PRICER_MC_PATHS", value)?;
        }
        if let Some(value) = lookup("PRICER_MC_STEPS") {
            self.monte_carlo.n_steps = parse_env("PRICER_MC_STEPS", value)?;
        }
        if let Some(value) = lookup("PRICER_MC_SEED") {
            self.monte_carlo.seed = Some(parse_env("PRICER_MC_SEED", value)?);
        }
        if let Some(backend) = lookup("PRICER_MC_BACKEND") {
            self.monte_carlo.backend = backend.parse()?;
        }
        if let Some(value) = lookup("PRICER_CALIBRATION_TOLERANCE") {
            self.calibration.tolerance = parse_env("PRICER_CALIBRATION_TOLERANCE", value)?;
        }
        if let Some(value) = lookup("PRICER_CALIBRATION_MAX_ITERATIONS") {
            self.calibration.max_iterations =
                parse_env("PRICER_CALIBRATION_MAX_ITERATIONS", value)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = level.parse()?;
        }
        if let Some(n_paths) = cli.n_paths {
            self.monte_carlo.n_paths = n_paths;
        }
        if let Some(n_steps) = cli.n_steps {
            self.monte_carlo.n_steps = n_steps;
        }
        if let Some(seed) = cli.seed {
            self.monte_carlo.seed = Some(seed);
        }
        if let Some(backend) = &cli.backend {
            self.monte_carlo.backend = backend.parse()?;
        }
        if let Some(tolerance) = cli.tolerance {
            self.calibration.tolerance = tolerance;
        }
        if let Some(max_iterations) = cli.max_iterations {
            self.calibration.max_iterations = max_iterations;
        }
        Ok(())
    }

    /// Simulation configuration for the engine
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, ConfigError> {
        MonteCarloConfig::builder()
            .n_paths(self.monte_carlo.n_paths)
            .n_steps(self.monte_carlo.n_steps)
            .maybe_seed(self.monte_carlo.seed)
            .build()
            .map_err(|e| ConfigError::InvalidSettings {
                section: "monte_carlo",
                message: e.to_string(),
            })
    }

    /// Implied volatility solver with the configured tolerance
    pub fn solver(&self) -> Result<ImpliedVolSolver, ConfigError> {
        ImpliedVolSolver::with_settings(
            self.calibration.tolerance,
            self.calibration.max_iterations,
        )
        .map_err(|e| ConfigError::InvalidSettings {
            section: "calibration",
            message: e.to_string(),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.monte_carlo_config()?;
        self.solver()?;
        Ok(())
    }
}

fn parse_env<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError { var, value })
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Path count override
    pub n_paths: Option<usize>,
    /// Step count override
    pub n_steps: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Backend override
    pub backend: Option<String>,
    /// Solver tolerance override
    pub tolerance: Option<f64>,
    /// Solver iteration limit override
    pub max_iterations: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, else `neutryx.toml` if it exists)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PricerConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => PricerConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                PricerConfig::from_file(default_path)?
            } else {
                PricerConfig::default()
            }
        }
    };

    config.apply_env(|var| std::env::var(var).ok())?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = PricerConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.monte_carlo.n_paths, 50_000);
        assert_eq!(config.monte_carlo.n_steps, 252);
        assert_eq!(config.monte_carlo.seed, None);
        assert_eq!(config.monte_carlo.backend, BackendChoice::Auto);
        assert_eq!(config.calibration.tolerance, 1e-6);
        assert_eq!(config.calibration.max_iterations, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml() {
        let config = PricerConfig::from_toml_str(
            r#"
            log_level = "DEBUG"

            [monte_carlo]
            n_paths = 2000
            n_steps = 50
            seed = 42
            backend = "portable"

            [calibration]
            tolerance = 1e-8
            max_iterations = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.monte_carlo.n_paths, 2000);
        assert_eq!(config.monte_carlo.seed, Some(42));
        assert_eq!(config.monte_carlo.backend, BackendChoice::Portable);
        assert_eq!(config.calibration.max_iterations, 25);

        let mc = config.monte_carlo_config().unwrap();
        assert_eq!(mc.n_steps(), 50);
        assert_eq!(mc.seed(), Some(42));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = PricerConfig::from_toml_str("[monte_carlo]\nseed = 7\n").unwrap();
        assert_eq!(config.monte_carlo.seed, Some(7));
        assert_eq!(config.monte_carlo.n_paths, DEFAULT_PATHS);
        assert_eq!(config.calibration, CalibrationSettings::default());
    }

    #[test]
    fn test_toml_errors() {
        assert!(matches!(
            PricerConfig::from_toml_str("log_level = \"loud\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(PricerConfig::from_toml_str("[monte_carlo]\nbackend = \"gpu\"").is_err());
        assert!(PricerConfig::from_toml_str("[monte_carlo]\npaths = 10").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = PricerConfig::default();
        config
            .apply_env(env(&[
                ("PRICER_LOG_LEVEL", "trace"),
                ("PRICER_MC_PATHS", "1000"),
                ("PRICER_MC_SEED", " 9 "),
                ("PRICER_MC_BACKEND", "parallel"),
                ("PRICER_CALIBRATION_TOLERANCE", "1e-9"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.monte_carlo.n_paths, 1000);
        assert_eq!(config.monte_carlo.seed, Some(9));
        assert_eq!(config.monte_carlo.backend, BackendChoice::Parallel);
        assert_eq!(config.calibration.tolerance, 1e-9);
        assert_eq!(config.calibration.max_iterations, 100);
    }

    #[test]
    fn test_env_parse_error_names_variable() {
        let mut config = PricerConfig::default();
        let err = config
            .apply_env(env(&[("PRICER_MC_STEPS", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError { var: "PRICER_MC_STEPS", .. }));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut config = PricerConfig::default();
        config
            .apply_env(env(&[("PRICER_MC_PATHS", "1000"), ("PRICER_MC_SEED", "1")]))
            .unwrap();
        config
            .merge_with_cli(&CliArgs {
                n_paths: Some(5000),
                backend: Some("Portable".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(config.monte_carlo.n_paths, 5000);
        assert_eq!(config.monte_carlo.seed, Some(1));
        assert_eq!(config.monte_carlo.backend, BackendChoice::Portable);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = PricerConfig::default();
        config.monte_carlo.n_paths = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSettings { section: "monte_carlo", .. })
        ));

        let mut config = PricerConfig::default();
        config.calibration.tolerance = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSettings { section: "calibration", .. })
        ));
    }

    #[test]
    fn test_backend_resolution() {
        assert_eq!(BackendChoice::Portable.resolve(), SimulatorBackend::Portable);
        assert_eq!(BackendChoice::Parallel.resolve(), SimulatorBackend::Parallel);
        assert_eq!(BackendChoice::Auto.resolve(), SimulatorBackend::detect());
        assert!("gpu".parse::<BackendChoice>().is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("invalid").is_err());
        assert_eq!(LogLevel::Error.to_string(), "error");
    }
}
