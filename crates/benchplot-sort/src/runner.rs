//! Timed merge sort runs over a list of array sizes

use crate::error::BenchError;
use crate::sort::{is_sorted, merge_sort};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Exclusive upper bound of generated values
pub const VALUE_BOUND: u32 = 10_000;

/// One timed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Array length
    pub size: usize,
    /// Time spent sorting
    pub elapsed: Duration,
}

impl Sample {
    /// Elapsed time in seconds
    #[inline]
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Benchmark run configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Array sizes, run in order
    pub sizes: Vec<usize>,
    /// RNG seed for array contents
    pub seed: u64,
}

impl BenchConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With sizes
    #[inline]
    #[must_use]
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// With seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            seed: 42,
        }
    }
}

/// Powers of two from 2^10 to 2^20
#[must_use]
pub fn default_sizes() -> Vec<usize> {
    (10..=20).map(|exp| 1usize << exp).collect()
}

/// Random values in `0..VALUE_BOUND`
pub fn random_array<R: Rng>(size: usize, rng: &mut R) -> Vec<u32> {
    (0..size).map(|_| rng.random_range(0..VALUE_BOUND)).collect()
}

/// Time one merge sort per configured size
///
/// Only the sort itself is timed; array generation and the sortedness
/// check are not.
pub fn run(config: &BenchConfig) -> Result<Vec<Sample>, BenchError> {
    if config.sizes.is_empty() {
        return Err(BenchError::NoSizes);
    }
    if config.sizes.contains(&0) {
        return Err(BenchError::ZeroSize);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.sizes.len());

    for &size in &config.sizes {
        let mut items = random_array(size, &mut rng);

        let start = Instant::now();
        merge_sort(&mut items);
        let elapsed = start.elapsed();

        if !is_sorted(&items) {
            return Err(BenchError::Unsorted { size });
        }

        let sample = Sample { size, elapsed };
        tracing::info!(size, seconds = sample.seconds(), "sorted");
        samples.push(sample);
    }

    Ok(samples)
}
