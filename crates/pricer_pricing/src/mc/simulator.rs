//! Path simulation backends.
//!
//! [`PathSimulator`] is the contract the engine depends on. Two
//! implementations ship with the crate:
//!
//! - [`PortableSimulator`]: single-threaded, no runtime requirements
//! - [`ParallelSimulator`]: spreads blocks across the rayon worker pool
//!
//! Both produce bit-identical matrices for the same seed because block `k`
//! always draws from sub-stream `(seed, k)`. [`SimulatorBackend`] is the
//! closed set of shipped backends, resolved once by the caller and passed to
//! the engine.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use super::config::check_matrix_size;
use super::error::SimulationError;
use super::paths::{block_len, fill_block, GbmParams, PathMatrix};
use crate::path_dependent::PathPayoff;

/// Produces GBM path matrices and maps payoffs over them.
pub trait PathSimulator: Send + Sync {
    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;

    /// Simulates `n_paths × (n_steps + 1)` prices; column 0 is the spot.
    ///
    /// # Errors
    ///
    /// Implementations may reject dimensions or inputs they cannot handle.
    fn simulate(
        &self,
        params: &GbmParams,
        n_paths: usize,
        n_steps: usize,
        seed: u64,
    ) -> Result<PathMatrix, SimulationError>;

    /// Undiscounted payoff of every path, in row order.
    fn evaluate<P: PathPayoff>(&self, paths: &PathMatrix, payoff: &P) -> Vec<f64> {
        paths.paths().map(|path| payoff.evaluate(path)).collect()
    }
}

/// Single-threaded reference backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortableSimulator;

impl PathSimulator for PortableSimulator {
    fn name(&self) -> &'static str {
        "portable"
    }

    fn simulate(
        &self,
        params: &GbmParams,
        n_paths: usize,
        n_steps: usize,
        seed: u64,
    ) -> Result<PathMatrix, SimulationError> {
        check_matrix_size(n_paths, n_steps)?;
        let mut paths = PathMatrix::zeros(n_paths, n_steps);
        paths
            .as_mut_slice()
            .chunks_mut(block_len(n_steps))
            .enumerate()
            .for_each(|(k, block)| fill_block(block, k, params, n_steps, seed));
        Ok(paths)
    }
}

/// Multi-threaded backend on the global rayon pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallelSimulator;

impl PathSimulator for ParallelSimulator {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn simulate(
        &self,
        params: &GbmParams,
        n_paths: usize,
        n_steps: usize,
        seed: u64,
    ) -> Result<PathMatrix, SimulationError> {
        check_matrix_size(n_paths, n_steps)?;
        let mut paths = PathMatrix::zeros(n_paths, n_steps);
        paths
            .as_mut_slice()
            .par_chunks_mut(block_len(n_steps))
            .enumerate()
            .for_each(|(k, block)| fill_block(block, k, params, n_steps, seed));
        Ok(paths)
    }

    fn evaluate<P: PathPayoff>(&self, paths: &PathMatrix, payoff: &P) -> Vec<f64> {
        paths
            .as_slice()
            .par_chunks_exact(paths.row_len())
            .map(|path| payoff.evaluate(path))
            .collect()
    }
}

/// Shipped backends as a closed set.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{PathSimulator, SimulatorBackend};
///
/// let backend: SimulatorBackend = "parallel".parse().unwrap();
/// assert_eq!(backend.name(), "parallel");
/// assert!("gpu".parse::<SimulatorBackend>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SimulatorBackend {
    /// [`PortableSimulator`].
    #[default]
    Portable,
    /// [`ParallelSimulator`].
    Parallel,
}

impl SimulatorBackend {
    /// Picks the parallel backend when the rayon pool has more than one thread.
    pub fn detect() -> Self {
        if rayon::current_num_threads() > 1 {
            SimulatorBackend::Parallel
        } else {
            SimulatorBackend::Portable
        }
    }
}

impl PathSimulator for SimulatorBackend {
    fn name(&self) -> &'static str {
        match self {
            SimulatorBackend::Portable => PortableSimulator.name(),
            SimulatorBackend::Parallel => ParallelSimulator.name(),
        }
    }

    fn simulate(
        &self,
        params: &GbmParams,
        n_paths: usize,
        n_steps: usize,
        seed: u64,
    ) -> Result<PathMatrix, SimulationError> {
        match self {
            SimulatorBackend::Portable => PortableSimulator.simulate(params, n_paths, n_steps, seed),
            SimulatorBackend::Parallel => ParallelSimulator.simulate(params, n_paths, n_steps, seed),
        }
    }

    fn evaluate<P: PathPayoff>(&self, paths: &PathMatrix, payoff: &P) -> Vec<f64> {
        match self {
            SimulatorBackend::Portable => PortableSimulator.evaluate(paths, payoff),
            SimulatorBackend::Parallel => ParallelSimulator.evaluate(paths, payoff),
        }
    }
}

impl fmt::Display for SimulatorBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised backend name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown simulator backend: {0:?}, expected \"portable\" or \"parallel\"")]
pub struct UnknownBackend(pub String);

impl FromStr for SimulatorBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portable" => Ok(SimulatorBackend::Portable),
            "parallel" => Ok(SimulatorBackend::Parallel),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}
