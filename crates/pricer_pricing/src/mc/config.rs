//! Monte Carlo simulation configuration.
//!
//! This module provides the immutable [`MonteCarloConfig`] and its builder.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of stored prices, `n_paths * (n_steps + 1)` (2 GB of `f64`).
pub const MAX_PATH_VALUES: usize = 250_000_000;

/// Path count used when none is given.
pub const DEFAULT_PATHS: usize = 50_000;

/// Step count used when none is given (daily steps over one year).
pub const DEFAULT_STEPS: usize = 252;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Optional seed for reproducibility; `None` draws from system entropy.
    seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_PATHS,
            n_steps: DEFAULT_STEPS,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Copy of this configuration with a different seed.
    #[inline]
    pub fn with_seed(&self, seed: Option<u64>) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    /// - the path matrix would hold more than [`MAX_PATH_VALUES`] prices
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.n_steps));
        }
        check_matrix_size(self.n_paths, self.n_steps)
    }
}

/// Rejects path matrices larger than [`MAX_PATH_VALUES`].
pub(crate) fn check_matrix_size(n_paths: usize, n_steps: usize) -> Result<(), ConfigError> {
    match n_paths.checked_mul(n_steps.saturating_add(1)) {
        Some(values) if values <= MAX_PATH_VALUES => Ok(()),
        _ => Err(ConfigError::MatrixTooLarge { n_paths, n_steps }),
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset counts fall back to [`DEFAULT_PATHS`] and [`DEFAULT_STEPS`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder().seed(12345).build().unwrap();
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.n_steps(), 252);
///
/// assert!(MonteCarloConfig::builder().n_steps(0).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 10_000_000]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path.
    ///
    /// # Arguments
    ///
    /// * `n_steps` - Number of steps in [1, 10_000]
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a count is zero or above its maximum.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_paths: self.n_paths.unwrap_or(DEFAULT_PATHS),
            n_steps: self.n_steps.unwrap_or(DEFAULT_STEPS),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = MonteCarloConfig::builder()
            .n_paths(10_000)
            .n_steps(252)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_defaults() {
        let built = MonteCarloConfig::builder().build().unwrap();
        assert_eq!(built, MonteCarloConfig::default());
        assert!(MonteCarloConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(100)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.with_seed(None).seed(), None);
        assert_eq!(
            MonteCarloConfig::builder().maybe_seed(Some(7)).build().unwrap().seed(),
            Some(7)
        );
    }

    #[test]
    fn test_config_boundaries_accepted() {
        assert!(MonteCarloConfig::builder().n_paths(1).n_steps(1).build().is_ok());
        assert!(MonteCarloConfig::builder()
            .n_paths(MAX_PATHS)
            .n_steps(1)
            .build()
            .is_ok());
        assert!(MonteCarloConfig::builder()
            .n_paths(10_000)
            .n_steps(MAX_STEPS)
            .build()
            .is_ok());
    }

    #[test]
    fn test_config_rejects_oversized_matrix() {
        let result = MonteCarloConfig::builder()
            .n_paths(MAX_PATHS)
            .n_steps(MAX_STEPS)
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MatrixTooLarge {
                n_paths: MAX_PATHS,
                n_steps: MAX_STEPS
            }
        );
    }

    #[test]
    fn test_matrix_size_limit_is_inclusive() {
        // 1_000_000 paths of 250 prices each fill the limit exactly
        assert!(check_matrix_size(1_000_000, 249).is_ok());
        assert!(check_matrix_size(1_000_000, 250).is_err());
        assert!(check_matrix_size(usize::MAX, 1).is_err());
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let result = MonteCarloConfig::builder().n_paths(0).n_steps(100).build();

        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let result = MonteCarloConfig::builder()
            .n_paths(MAX_PATHS + 1)
            .n_steps(100)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidPathCount(_))));
    }

    #[test]
    fn test_config_invalid_zero_steps() {
        let result = MonteCarloConfig::builder().n_paths(1000).n_steps(0).build();

        assert!(matches!(result, Err(ConfigError::InvalidStepCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_steps() {
        let result = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(MAX_STEPS + 1)
            .build();

        assert!(matches!(result, Err(ConfigError::InvalidStepCount(_))));
    }
}
