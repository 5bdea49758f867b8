//! Path generation for Monte Carlo simulation.
//!
//! Geometric Brownian Motion under the risk-neutral measure, advanced with the
//! exact lognormal transition:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - q - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `data[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial spot price.
//!
//! # Sharding
//!
//! Paths are generated in blocks of [`BLOCK_SIZE`]. Block `k` draws its
//! normals from sub-stream `(seed, k)`, path by path and step by step, so the
//! matrix depends only on the seed and never on how blocks are scheduled.

use pricer_models::instruments::EquityOption;

use super::error::SimulationError;
use crate::rng::PricerRng;

/// Number of paths generated from one random sub-stream.
pub const BLOCK_SIZE: usize = 1024;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.0, 0.2, 1.0).unwrap();
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
///
/// assert!(GbmParams::new(-1.0, 0.05, 0.0, 0.2, 1.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    spot: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
    maturity: f64,
}

impl GbmParams {
    /// Creates validated GBM parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Initial spot price (> 0)
    /// * `rate` - Risk-free rate (annualised)
    /// * `dividend_yield` - Continuous dividend yield
    /// * `volatility` - Volatility (annualised)
    /// * `maturity` - Time to maturity in years (>= 0)
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidInput` for a non-finite input, a non-positive
    /// spot or a negative maturity.
    pub fn new(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        maturity: f64,
    ) -> Result<Self, SimulationError> {
        let inputs = [
            ("spot", spot),
            ("rate", rate),
            ("dividend_yield", dividend_yield),
            ("volatility", volatility),
            ("maturity", maturity),
        ];
        if let Some(&(name, value)) = inputs.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SimulationError::InvalidInput { name, value });
        }
        if spot <= 0.0 {
            return Err(SimulationError::InvalidInput {
                name: "spot",
                value: spot,
            });
        }
        if maturity < 0.0 {
            return Err(SimulationError::InvalidInput {
                name: "maturity",
                value: maturity,
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
            maturity,
        })
    }

    /// Market state of a vanilla option record.
    ///
    /// # Errors
    ///
    /// Never fails for a constructed `EquityOption`; the signature mirrors
    /// [`GbmParams::new`].
    pub fn from_option(option: &EquityOption) -> Result<Self, SimulationError> {
        Self::new(
            option.spot(),
            option.rate(),
            option.dividend_yield(),
            option.volatility(),
            option.maturity(),
        )
    }

    /// Initial spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// `exp(-r·T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Per-step `(drift, diffusion)` for `n_steps` steps.
    #[inline]
    fn step_coefficients(&self, n_steps: usize) -> (f64, f64) {
        let dt = self.maturity / n_steps as f64;
        let drift = (self.rate - self.dividend_yield - 0.5 * self.volatility * self.volatility) * dt;
        let diffusion = self.volatility * dt.sqrt();
        (drift, diffusion)
    }
}

/// Simulated paths, one row per path, `n_steps + 1` columns.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathMatrix;
///
/// let paths = PathMatrix::from_vec(2, 1, vec![100.0, 101.0, 100.0, 99.0]).unwrap();
/// assert_eq!(paths.path(1), &[100.0, 99.0]);
/// assert_eq!(paths.terminal_values().collect::<Vec<_>>(), vec![101.0, 99.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    n_paths: usize,
    n_steps: usize,
    data: Vec<f64>,
}

impl PathMatrix {
    /// Zero-filled matrix.
    pub fn zeros(n_paths: usize, n_steps: usize) -> Self {
        Self {
            n_paths,
            n_steps,
            data: vec![0.0; n_paths * (n_steps + 1)],
        }
    }

    /// Wraps row-major data.
    ///
    /// # Errors
    ///
    /// `SimulationError::ShapeMismatch` if `data.len() != n_paths * (n_steps + 1)`.
    pub fn from_vec(n_paths: usize, n_steps: usize, data: Vec<f64>) -> Result<Self, SimulationError> {
        let expected = n_paths * (n_steps + 1);
        if data.len() != expected {
            return Err(SimulationError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            n_paths,
            n_steps,
            data,
        })
    }

    /// Number of paths (rows).
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of time steps (columns minus one).
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Row length, `n_steps + 1`.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.n_steps + 1
    }

    /// One path, initial spot first.
    ///
    /// # Panics
    ///
    /// Panics if `index >= n_paths`.
    #[inline]
    pub fn path(&self, index: usize) -> &[f64] {
        let len = self.row_len();
        &self.data[index * len..(index + 1) * len]
    }

    /// Iterator over paths.
    #[inline]
    pub fn paths(&self) -> std::slice::ChunksExact<'_, f64> {
        self.data.chunks_exact(self.row_len())
    }

    /// Iterator over the final value of each path.
    pub fn terminal_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.paths().map(|row| row[row.len() - 1])
    }

    /// Raw row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable raw storage for simulators.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}

/// Fills one block of rows from sub-stream `(seed, block_index)`.
///
/// `block` holds whole rows of length `n_steps + 1`.
pub fn fill_block(block: &mut [f64], block_index: usize, params: &GbmParams, n_steps: usize, seed: u64) {
    let (drift, diffusion) = params.step_coefficients(n_steps);
    let mut rng = PricerRng::for_stream(seed, block_index as u64);

    for row in block.chunks_exact_mut(n_steps + 1) {
        row[0] = params.spot;
        for step in 1..=n_steps {
            let z = rng.gen_normal();
            row[step] = row[step - 1] * (drift + diffusion * z).exp();
        }
    }
}

/// Number of `f64` values in one full block of rows.
#[inline]
pub(crate) fn block_len(n_steps: usize) -> usize {
    BLOCK_SIZE * (n_steps + 1)
}
