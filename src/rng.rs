// src/rng.rs
//! Random number generation for the path simulator.
//!
//! # Design
//!
//! The simulator consumes Gaussian draws through the [`GaussianSource`]
//! trait, so reproducible tests can inject a seeded source while production
//! runs default to fresh entropy.
//!
//! Reproducibility must not depend on the rayon thread count, so seeds are
//! handed out per path: a [`NoiseFactory`] maps a path index to an
//! independent stream, and every path draws only from its own stream. With
//! a fixed base seed the full ensemble is bit-identical for any number of
//! threads.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Source of Gaussian draws, substitutable for reproducible tests.
pub trait GaussianSource {
    fn next_gaussian(&mut self, mean: f64, std_dev: f64) -> f64;
}

/// Hands out an independent Gaussian stream per simulated path.
pub trait NoiseFactory: Sync {
    type Source: GaussianSource;

    fn stream(&self, path: usize) -> Self::Source;
}

/// Default [`GaussianSource`] backed by a seeded [`StdRng`].
pub struct NormalStream {
    rng: StdRng,
}

impl NormalStream {
    pub fn new(seed: u64) -> Self {
        NormalStream {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl GaussianSource for NormalStream {
    fn next_gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        mean + std_dev * z
    }
}

/// Default [`NoiseFactory`]: mixes the base seed with a golden-ratio
/// multiple of the path index so neighbouring paths get well-separated
/// seeds.
pub struct RngFactory {
    base_seed: u64,
}

impl RngFactory {
    pub fn new(base_seed: u64) -> Self {
        RngFactory { base_seed }
    }

    /// Fresh entropy for unseeded ("re-roll") runs. The base seed is drawn
    /// once, so a single invocation is still internally consistent across
    /// paths and threads.
    pub fn from_entropy() -> Self {
        RngFactory {
            base_seed: rand::thread_rng().gen(),
        }
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }
}

impl NoiseFactory for RngFactory {
    type Source = NormalStream;

    fn stream(&self, path: usize) -> NormalStream {
        let seed = self
            .base_seed
            .wrapping_add((path as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
        NormalStream::new(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_reproducibility() {
        let factory = RngFactory::new(42);

        let mut s1 = factory.stream(0);
        let mut s2 = factory.stream(0);

        for _ in 0..100 {
            assert_eq!(s1.next_gaussian(0.0, 1.0), s2.next_gaussian(0.0, 1.0));
        }
    }

    #[test]
    fn test_different_paths_different_streams() {
        let factory = RngFactory::new(42);

        let mut s1 = factory.stream(0);
        let mut s2 = factory.stream(1);

        let vals1: Vec<f64> = (0..10).map(|_| s1.next_gaussian(0.0, 1.0)).collect();
        let vals2: Vec<f64> = (0..10).map(|_| s2.next_gaussian(0.0, 1.0)).collect();

        assert_ne!(vals1, vals2);
    }

    #[test]
    fn test_scaled_draws() {
        let mut stream = NormalStream::new(7);
        let samples: Vec<f64> = (0..20_000).map(|_| stream.next_gaussian(5.0, 2.0)).collect();

        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / samples.len() as f64;

        assert!((mean - 5.0).abs() < 0.05, "Mean should be close to 5, got {}", mean);
        assert!(
            (variance - 4.0).abs() < 0.15,
            "Variance should be close to 4, got {}",
            variance
        );
    }

    #[test]
    fn test_entropy_factories_differ() {
        let a = RngFactory::from_entropy();
        let b = RngFactory::from_entropy();
        // 2^-64 collision chance; a failure here means entropy is broken.
        assert_ne!(a.base_seed(), b.base_seed());
    }
}
