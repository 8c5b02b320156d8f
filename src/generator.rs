//! Path generation
//!
//! Drives a process's `evolve` rule forward in time with deviates drawn from
//! a [`DeviateSource`]:
//!
//! path[0] = X_0
//! path[i] = evolve(t_{i-1}, path[i-1], dt, dw_i)   for i = 1..N-1
//!
//! where dt = T / N.

use crate::deviates::{DeviateSource, RandomDeviates};
use crate::error::{EvaluationFailure, Result, SimulationError};
use crate::path::Path;
use crate::sde::StochasticProcess;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Generates paths of a fixed length from a process and a deviate source.
///
/// Apart from the deviate source cursor the generator keeps no state between
/// calls.
#[derive(Debug, Clone)]
pub struct PathGenerator<P, D> {
    process: P,
    time_steps: usize,
    dt: f64,
    deviates: D,
}

impl<P: StochasticProcess, D: DeviateSource> PathGenerator<P, D> {
    /// Creates a generator producing paths of `time_steps` samples over
    /// `duration`.
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfiguration`] if `time_steps` is zero or
    /// `duration` is not a positive finite number.
    pub fn new(process: P, time_steps: usize, duration: f64, deviates: D) -> Result<Self> {
        if time_steps == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "time_steps must be at least 1".into(),
            ));
        }
        if !(duration.is_finite() && duration > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "duration must be positive and finite, got {}",
                duration
            )));
        }
        Ok(Self {
            process,
            time_steps,
            dt: duration / time_steps as f64,
            deviates,
        })
    }

    pub fn process(&self) -> &P {
        &self.process
    }

    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Produces the next path.
    ///
    /// # Errors
    /// [`SimulationError::FunctionEvaluation`] when the deviate source runs
    /// out or a step evolves to a non-finite value. The failing step index is
    /// reported and nothing is retried.
    pub fn next_path(&mut self) -> Result<Path> {
        let mut values = Vec::with_capacity(self.time_steps);
        let mut x = self.process.initial_value();
        values.push(x);

        let mut t = 0.0;
        for step in 1..self.time_steps {
            let dw = self
                .deviates
                .next_deviate()
                .ok_or(SimulationError::FunctionEvaluation {
                    step,
                    reason: EvaluationFailure::DeviatesExhausted,
                })?;
            x = self.process.evolve(t, x, self.dt, dw);
            if !x.is_finite() {
                return Err(SimulationError::FunctionEvaluation {
                    step,
                    reason: EvaluationFailure::NonFiniteValue(x),
                });
            }
            values.push(x);
            t += self.dt;
        }

        trace!(samples = values.len(), "generated path");
        Ok(Path::new(values, self.dt))
    }

    /// Releases the process and deviate source.
    pub fn into_parts(self) -> (P, D) {
        (self.process, self.deviates)
    }
}

/// Seed for the deviate source of path `index` in a batch seeded with `seed`.
///
/// SplitMix64 finaliser, so neighbouring indices get unrelated streams.
pub fn path_seed(seed: u64, index: usize) -> u64 {
    let mut z = seed.wrapping_add((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Simulates `n_paths` independent paths in parallel.
///
/// Each path gets its own standard normal [`RandomDeviates`] seeded with
/// [`path_seed`], so the batch is reproducible regardless of thread count.
/// Paths are returned in index order.
pub fn simulate_paths<P>(
    process: &P,
    time_steps: usize,
    duration: f64,
    n_paths: usize,
    seed: u64,
) -> Result<Vec<Path>>
where
    P: StochasticProcess + Sync,
{
    debug!(n_paths, time_steps, duration, seed, "simulating paths");
    (0..n_paths)
        .into_par_iter()
        .map(|index| {
            let deviates = RandomDeviates::normal(path_seed(seed, index));
            PathGenerator::new(process, time_steps, duration, deviates)?.next_path()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deviates::ReplayDeviates;
    use crate::gbm::GeometricBrownianMotion;
    use crate::sde::OrnsteinUhlenbeck;
    use approx::assert_relative_eq;

    #[test]
    fn test_path_shape() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.2);
        let mut generator = PathGenerator::new(gbm, 252, 1.0, RandomDeviates::normal(1)).unwrap();
        let path = generator.next_path().unwrap();

        assert_eq!(path.len(), 252);
        assert_eq!(path.initial(), Some(100.0));
        assert_relative_eq!(path.dt(), 1.0 / 252.0);
        assert!(path.values().iter().all(|&x| x > 0.0));
    }

    #[test]
    fn test_single_step_path() {
        let ou = OrnsteinUhlenbeck::new(1.0, 0.0, 0.1, 2.0);
        let mut generator = PathGenerator::new(ou, 1, 0.5, ReplayDeviates::default()).unwrap();
        let path = generator.next_path().unwrap();
        assert_eq!(path.values(), &[2.0]);
        assert_eq!(path.dt(), 0.5);
    }

    #[test]
    fn test_replay_follows_evolve() {
        let ou = OrnsteinUhlenbeck::new(2.0, 1.0, 0.5, 0.0);
        let deviates = ReplayDeviates::new(vec![1.0, -1.0, 0.0]);
        let mut generator = PathGenerator::new(ou.clone(), 4, 1.0, deviates).unwrap();
        let path = generator.next_path().unwrap();

        let dt = 0.25;
        let mut expected = vec![0.0];
        let mut t = 0.0;
        for dw in [1.0, -1.0, 0.0] {
            let x = ou.evolve(t, *expected.last().unwrap(), dt, dw);
            expected.push(x);
            t += dt;
        }
        assert_eq!(path.values(), expected.as_slice());
    }

    #[test]
    fn test_deterministic_for_identical_deviates() {
        let gbm = GeometricBrownianMotion::new(10.0, 0.03, 0.4);
        let a = PathGenerator::new(&gbm, 64, 2.0, RandomDeviates::normal(99))
            .unwrap()
            .next_path()
            .unwrap();
        let b = PathGenerator::new(&gbm, 64, 2.0, RandomDeviates::normal(99))
            .unwrap()
            .next_path()
            .unwrap();
        let bits = |p: &Path| p.values().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_exhaustion_is_reported() {
        let gbm = GeometricBrownianMotion::new(1.0, 0.0, 0.1);
        let deviates = ReplayDeviates::new(vec![0.1, 0.2]);
        let mut generator = PathGenerator::new(gbm, 10, 1.0, deviates).unwrap();

        let err = generator.next_path().unwrap_err();
        assert!(matches!(
            err,
            SimulationError::FunctionEvaluation {
                step: 3,
                reason: EvaluationFailure::DeviatesExhausted
            }
        ));
    }

    #[test]
    fn test_non_finite_step_is_reported() {
        let ou = OrnsteinUhlenbeck::new(0.0, 0.0, 1.0, 0.0);
        let deviates = ReplayDeviates::new(vec![f64::INFINITY]);
        let mut generator = PathGenerator::new(ou, 2, 1.0, deviates).unwrap();
        let err = generator.next_path().unwrap_err();
        assert!(err.is_function_evaluation());
    }

    #[test]
    fn test_invalid_configuration() {
        let gbm = GeometricBrownianMotion::new(1.0, 0.0, 0.1);
        assert!(PathGenerator::new(&gbm, 0, 1.0, RandomDeviates::normal(0)).is_err());
        assert!(PathGenerator::new(&gbm, 10, 0.0, RandomDeviates::normal(0)).is_err());
        assert!(PathGenerator::new(&gbm, 10, f64::NAN, RandomDeviates::normal(0)).is_err());
    }

    #[test]
    fn test_consecutive_paths_differ() {
        let gbm = GeometricBrownianMotion::new(1.0, 0.0, 0.3);
        let mut generator = PathGenerator::new(gbm, 16, 1.0, RandomDeviates::normal(5)).unwrap();
        let a = generator.next_path().unwrap();
        let b = generator.next_path().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parallel_simulation_is_reproducible() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2);
        let a = simulate_paths(&gbm, 50, 1.0, 200, 17).unwrap();
        let b = simulate_paths(&gbm, 50, 1.0, 200, 17).unwrap();
        assert_eq!(a.len(), 200);
        assert!(a.iter().all(|p| p.len() == 50));
        assert_eq!(a, b);
    }

    #[test]
    fn test_path_seeds_are_distinct() {
        let seeds: std::collections::HashSet<u64> = (0..1000).map(|i| path_seed(42, i)).collect();
        assert_eq!(seeds.len(), 1000);
    }
}
