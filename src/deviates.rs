//! Sources of normalised random deviates
//!
//! A deviate source is a sequential cursor: every draw advances it. Sources
//! are not shared between generators; parallel work gives each worker its
//! own instance.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Standard, StandardNormal};

/// Sequential stream of real-valued deviates polled once per simulated step.
pub trait DeviateSource {
    /// Next deviate, or `None` once the source is exhausted.
    fn next_deviate(&mut self) -> Option<f64>;
}

impl<D: DeviateSource + ?Sized> DeviateSource for &mut D {
    fn next_deviate(&mut self) -> Option<f64> {
        (**self).next_deviate()
    }
}

/// Seeded pseudo-random deviates drawn from a `rand_distr` distribution.
///
/// Never exhausts. The same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct RandomDeviates<D> {
    rng: StdRng,
    distribution: D,
    seed: u64,
}

impl RandomDeviates<StandardNormal> {
    /// Standard normal deviates N(0, 1).
    ///
    /// # Example
    /// ```
    /// use stochastic_montecarlo::deviates::{DeviateSource, RandomDeviates};
    ///
    /// let mut a = RandomDeviates::normal(7);
    /// let mut b = RandomDeviates::normal(7);
    /// assert_eq!(a.next_deviate(), b.next_deviate());
    /// ```
    pub fn normal(seed: u64) -> Self {
        Self::with_distribution(seed, StandardNormal)
    }
}

impl RandomDeviates<Standard> {
    /// Uniform deviates in [0, 1).
    pub fn uniform(seed: u64) -> Self {
        Self::with_distribution(seed, Standard)
    }
}

impl<D: Distribution<f64>> RandomDeviates<D> {
    pub fn with_distribution(seed: u64, distribution: D) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            distribution,
            seed,
        }
    }

    /// Seed used for initialisation.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<D: Distribution<f64>> DeviateSource for RandomDeviates<D> {
    #[inline]
    fn next_deviate(&mut self) -> Option<f64> {
        Some(self.distribution.sample(&mut self.rng))
    }
}

/// Replays a fixed sequence of deviates, then reports exhaustion.
///
/// Useful for deterministic replays and for bounding the work a generator
/// may do.
#[derive(Debug, Clone, Default)]
pub struct ReplayDeviates {
    values: Vec<f64>,
    cursor: usize,
}

impl ReplayDeviates {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Deviates not yet drawn.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }

    /// Rewinds to the first deviate.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

impl DeviateSource for ReplayDeviates {
    fn next_deviate(&mut self) -> Option<f64> {
        let value = self.values.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(value)
    }
}

impl From<Vec<f64>> for ReplayDeviates {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_reproducibility() {
        let mut a = RandomDeviates::normal(12345);
        let mut b = RandomDeviates::normal(12345);
        for _ in 0..100 {
            assert_eq!(a.next_deviate(), b.next_deviate());
        }
        assert_eq!(a.seed(), 12345);
    }

    #[test]
    fn test_uniform_range() {
        let mut u = RandomDeviates::uniform(42);
        for _ in 0..10_000 {
            let value = u.next_deviate().unwrap();
            assert!((0.0..1.0).contains(&value), "uniform value {} out of range", value);
        }
    }

    #[test]
    fn test_normal_moments() {
        let mut n = RandomDeviates::normal(9);
        let samples: Vec<f64> = (0..50_000).map(|_| n.next_deviate().unwrap()).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let var = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        assert!(mean.abs() < 0.02, "mean = {}", mean);
        assert!((var - 1.0).abs() < 0.03, "variance = {}", var);
    }

    #[test]
    fn test_replay_exhausts() {
        let mut replay = ReplayDeviates::new(vec![0.5, -1.0]);
        assert_eq!(replay.remaining(), 2);
        assert_eq!(replay.next_deviate(), Some(0.5));
        assert_eq!(replay.next_deviate(), Some(-1.0));
        assert_eq!(replay.next_deviate(), None);
        assert_eq!(replay.remaining(), 0);

        replay.rewind();
        assert_eq!(replay.next_deviate(), Some(0.5));
    }

    #[test]
    fn test_mutable_reference_advances_source() {
        fn draw<D: DeviateSource>(mut source: D) -> Option<f64> {
            source.next_deviate()
        }

        let mut replay = ReplayDeviates::from(vec![1.0, 2.0]);
        assert_eq!(draw(&mut replay), Some(1.0));
        assert_eq!(replay.remaining(), 1);
    }
}
