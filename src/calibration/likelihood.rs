//! Simulated maximum-likelihood objective.
//!
//! For a proposal θ the objective simulates terminal values X_T under the
//! process the factory builds, estimates their density with a Gaussian
//! kernel and scores the observations:
//!
//! NLL(θ) = -Σ_j ln max(f̂_θ(y_j), DENSITY_FLOOR)
//!
//! Every evaluation reuses the same per-path seeds (common random numbers),
//! so the objective is a deterministic function of θ that an optimiser can
//! minimise directly.
//!
//! When every simulated value coincides (zero volatility, or a sanitised
//! proposal) the sample is a point mass and its own bandwidth is zero. The
//! kernel then takes the bandwidth of the observations instead, so point
//! masses are still ranked by how far they sit from the data.

use super::McFactory;
use crate::accumulator::{Accumulator, HistogramAccumulator};
use crate::deviates::RandomDeviates;
use crate::error::{Result, SimulationError};
use crate::generator::{path_seed, PathGenerator};
use rayon::prelude::*;
use std::f64::consts::PI;
use tracing::debug;

/// Density assigned to observations the simulation cannot explain.
pub const DENSITY_FLOOR: f64 = 1e-300;

/// Negative log-likelihood of observed terminal values under simulated paths.
#[derive(Debug, Clone)]
pub struct SimulatedLikelihood<'a, F> {
    factory: &'a F,
    observations: &'a [f64],
    observation_bandwidth: f64,
    x0: f64,
    n_paths: usize,
    seed: u64,
}

impl<'a, F> SimulatedLikelihood<'a, F>
where
    F: McFactory + Sync,
    F::Process: Sync,
{
    /// # Arguments
    /// * `factory` - Maps proposals to processes and fixes the horizon
    /// * `observations` - Observed values at the horizon
    /// * `x0` - Common initial value of the observed paths
    /// * `n_paths` - Simulated paths per evaluation (at least 2)
    /// * `seed` - Base seed for the common random numbers
    pub fn new(
        factory: &'a F,
        observations: &'a [f64],
        x0: f64,
        n_paths: usize,
        seed: u64,
    ) -> Result<Self> {
        if observations.is_empty() {
            return Err(SimulationError::InvalidConfiguration(
                "at least one observation is required".into(),
            ));
        }
        if n_paths < 2 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "n_paths must be at least 2, got {}",
                n_paths
            )));
        }
        Ok(Self {
            factory,
            observations,
            observation_bandwidth: silverman_bandwidth(observations),
            x0,
            n_paths,
            seed,
        })
    }

    /// Simulated values at the horizon, in path order.
    pub fn terminal_values(&self, parameters: &[f64]) -> Result<Vec<f64>> {
        let process = self.factory.create_process(self.x0, parameters);
        let settings = self.factory.settings();

        (0..self.n_paths)
            .into_par_iter()
            .map(|index| {
                let deviates = RandomDeviates::normal(path_seed(self.seed, index));
                let path = PathGenerator::new(
                    &process,
                    settings.time_steps,
                    settings.duration,
                    deviates,
                )?
                .next_path()?;
                path.terminal().ok_or_else(|| {
                    SimulationError::InvalidConfiguration("generated path is empty".into())
                })
            })
            .collect()
    }

    /// Objective value for one proposal.
    ///
    /// A point-mass sample is smoothed with the observations' bandwidth. If
    /// the observations have no spread either, every density is floored and
    /// the result is `-n · ln(DENSITY_FLOOR)`.
    ///
    /// # Errors
    /// Propagates path generation failures; sanitised proposals never fail.
    pub fn negative_log_likelihood(&self, parameters: &[f64]) -> Result<f64> {
        let terminals = self.terminal_values(parameters)?;
        let bandwidth = if is_point_mass(&terminals) {
            self.observation_bandwidth
        } else {
            silverman_bandwidth(&terminals)
        };

        let densities: Vec<f64> = if is_usable(bandwidth) {
            self.observations
                .par_iter()
                .map(|&y| kernel_density(&terminals, bandwidth, y))
                .collect()
        } else {
            vec![0.0; self.observations.len()]
        };

        let nll = -densities
            .iter()
            .map(|&f| f.max(DENSITY_FLOOR).ln())
            .sum::<f64>();
        debug!(?parameters, bandwidth, nll, "evaluated simulated likelihood");
        Ok(nll)
    }

    /// Histogram of simulated terminal values.
    ///
    /// Workers fill private histograms that are merged at the end.
    pub fn terminal_histogram(&self, parameters: &[f64]) -> Result<HistogramAccumulator> {
        let terminals = self.terminal_values(parameters)?;
        Ok(terminals
            .par_iter()
            .fold(HistogramAccumulator::new, |mut histo, &x| {
                histo.add_value(x);
                histo
            })
            .reduce(HistogramAccumulator::new, |mut left, right| {
                left.merge(&right);
                left
            }))
    }

    pub fn n_paths(&self) -> usize {
        self.n_paths
    }
}

fn is_usable(bandwidth: f64) -> bool {
    bandwidth > 0.0 && bandwidth.is_finite()
}

fn is_point_mass(samples: &[f64]) -> bool {
    samples.windows(2).all(|w| w[0] == w[1])
}

/// h = 1.06 σ̂ n^(-1/5); NaN for a single sample.
fn silverman_bandwidth(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    1.06 * variance.sqrt() * n.powf(-0.2)
}

fn kernel_density(samples: &[f64], bandwidth: f64, y: f64) -> f64 {
    let norm = 1.0 / (samples.len() as f64 * bandwidth * (2.0 * PI).sqrt());
    norm * samples
        .iter()
        .map(|&s| {
            let u = (y - s) / bandwidth;
            (-0.5 * u * u).exp()
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::GbmFactory;
    use crate::gbm::GeometricBrownianMotion;
    use crate::generator::simulate_paths;
    use approx::assert_relative_eq;

    fn observed_terminals() -> Vec<f64> {
        let truth = GeometricBrownianMotion::new(100.0, 0.05, 0.2);
        simulate_paths(&truth, 10, 1.0, 400, 2024)
            .unwrap()
            .iter()
            .filter_map(|p| p.terminal())
            .collect()
    }

    #[test]
    fn test_kernel_density_integrates_to_one() {
        let samples = [0.0, 1.0, 2.5];
        let h = 0.4;
        let step = 0.01;
        let mass: f64 = (-500..800)
            .map(|i| kernel_density(&samples, h, i as f64 * step) * step)
            .sum();
        assert_relative_eq!(mass, 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_rejects_bad_setup() {
        let factory = GbmFactory::new(1.0, 10);
        assert!(SimulatedLikelihood::new(&factory, &[], 1.0, 100, 0).is_err());
        assert!(SimulatedLikelihood::new(&factory, &[1.0], 1.0, 1, 0).is_err());
    }

    #[test]
    fn test_objective_is_deterministic() {
        let factory = GbmFactory::new(1.0, 10);
        let observations = observed_terminals();
        let objective = SimulatedLikelihood::new(&factory, &observations, 100.0, 500, 7).unwrap();

        let a = objective.negative_log_likelihood(&[0.1, 0.3]).unwrap();
        let b = objective.negative_log_likelihood(&[0.1, 0.3]).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_true_parameters_score_better() {
        let factory = GbmFactory::new(1.0, 10);
        let observations = observed_terminals();
        let objective = SimulatedLikelihood::new(&factory, &observations, 100.0, 2000, 11).unwrap();

        let truth = objective.negative_log_likelihood(&[0.05, 0.2]).unwrap();
        let too_volatile = objective.negative_log_likelihood(&[0.05, 0.6]).unwrap();
        let too_much_drift = objective.negative_log_likelihood(&[0.5, 0.2]).unwrap();

        assert!(truth < too_volatile, "{} vs {}", truth, too_volatile);
        assert!(truth < too_much_drift, "{} vs {}", truth, too_much_drift);
    }

    #[test]
    fn test_infeasible_proposal_scores_finite_penalty() {
        let factory = GbmFactory::new(1.0, 10);
        let observations = observed_terminals();
        let objective = SimulatedLikelihood::new(&factory, &observations, 100.0, 200, 3).unwrap();

        let penalty = objective.negative_log_likelihood(&[0.05, -0.2]).unwrap();
        assert!(penalty.is_finite());
        assert!(penalty <= -(observations.len() as f64) * DENSITY_FLOOR.ln());
        assert!(penalty > objective.negative_log_likelihood(&[0.05, 0.2]).unwrap());
    }

    #[test]
    fn test_zero_volatility_ranks_above_zero_process() {
        let factory = GbmFactory::new(1.0, 10);
        let observations = observed_terminals();
        let objective = SimulatedLikelihood::new(&factory, &observations, 100.0, 200, 3).unwrap();

        let point_mass = objective.negative_log_likelihood(&[0.05, 0.0]).unwrap();
        let zero_process = objective.negative_log_likelihood(&[0.05, -0.2]).unwrap();
        let far_point_mass = objective.negative_log_likelihood(&[-1.0, 0.0]).unwrap();

        assert!(point_mass < far_point_mass, "{} vs {}", point_mass, far_point_mass);
        assert!(far_point_mass < zero_process, "{} vs {}", far_point_mass, zero_process);
    }

    #[test]
    fn test_point_masses_without_spread_hit_the_floor() {
        let factory = GbmFactory::new(1.0, 10);
        let observations = [100.0];
        let objective = SimulatedLikelihood::new(&factory, &observations, 100.0, 50, 3).unwrap();

        let nll = objective.negative_log_likelihood(&[0.05, 0.0]).unwrap();
        assert_relative_eq!(nll, -DENSITY_FLOOR.ln(), max_relative = 1e-12);
    }

    #[test]
    fn test_terminal_histogram_counts_every_path() {
        let factory = GbmFactory::new(1.0, 10);
        let observations = [100.0];
        let objective = SimulatedLikelihood::new(&factory, &observations, 100.0, 300, 5).unwrap();

        let histo = objective.terminal_histogram(&[0.05, 0.2]).unwrap();
        assert_eq!(histo.total(), 300);

        let degenerate = objective.terminal_histogram(&[0.05, -1.0]).unwrap();
        assert_eq!(degenerate.len(), 1);
        assert_eq!(degenerate.count(0.0), 300);
    }
}
