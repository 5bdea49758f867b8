//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`PricerRng`], a seeded PRNG wrapper that offers
//! reproducible random number generation and independent sub-streams for
//! sharded path generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// SplitMix64 finaliser used to decorrelate `(seed, stream)` pairs.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible random number generation for uniform and
/// normal distributions.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
///
/// // Single value generation
/// let u: f64 = rng.gen_uniform();
/// let n: f64 = rng.gen_normal();
///
/// // Batch generation (zero allocation)
/// let mut buffer = vec![0.0; 100];
/// rng.fill_normal(&mut buffer);
/// ```
pub struct PricerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The base seed (stored for reproducibility tracking).
    seed: u64,
    /// Sub-stream index; 0 for a generator built with `from_seed`.
    stream: u64,
}

impl PricerRng {
    /// Creates a new RNG instance initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of random numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut rng1 = PricerRng::from_seed(12345);
    /// let mut rng2 = PricerRng::from_seed(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
            stream: 0,
        }
    }

    /// Creates the generator for sub-stream `stream` of `seed`.
    ///
    /// Each `(seed, stream)` pair maps to its own deterministic sequence, so
    /// work split into numbered blocks draws the same numbers no matter which
    /// thread runs which block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let mut a = PricerRng::for_stream(7, 3);
    /// let mut b = PricerRng::for_stream(7, 3);
    /// let mut c = PricerRng::for_stream(7, 4);
    ///
    /// let x = a.gen_normal();
    /// assert_eq!(x, b.gen_normal());
    /// assert_ne!(x, c.gen_normal());
    /// ```
    #[inline]
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        let derived = splitmix64(seed ^ splitmix64(stream));
        Self {
            inner: StdRng::seed_from_u64(derived),
            seed,
            stream,
        }
    }

    /// Draws a fresh base seed from system entropy.
    #[inline]
    pub fn entropy_seed() -> u64 {
        rand::random()
    }

    /// Returns the base seed used for initialisation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::rng::PricerRng;
    ///
    /// let rng = PricerRng::for_stream(42, 9);
    /// assert_eq!(rng.seed(), 42);
    /// assert_eq!(rng.stream(), 9);
    /// ```
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the sub-stream index.
    #[inline]
    pub fn stream(&self) -> u64 {
        self.stream
    }

    /// Generates a single uniform random value in [0, 1).
    #[inline]
    pub fn gen_uniform(&mut self) -> f64 {
        self.inner.gen()
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Empty buffers are handled gracefully (no operation).
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
