//! Calibration factories.
//!
//! An external optimiser proposes parameter vectors; a factory turns each
//! proposal into a concrete process and tells the optimiser where to start.
//! Factories never reject a proposal: parameters outside their natural
//! domain map to a degenerate, well-defined process so the search can probe
//! infeasible regions without aborting.

mod factory;
mod likelihood;

pub use factory::{GbmFactory, OrnsteinUhlenbeckFactory};
pub use likelihood::SimulatedLikelihood;

use crate::deviates::DeviateSource;
use crate::error::Result;
use crate::generator::PathGenerator;
use crate::sde::StochasticProcess;
use serde::Deserialize;

/// Simulation horizon shared by every process a factory creates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct McSettings {
    /// Total simulated time T
    pub duration: f64,
    /// Samples per path N
    pub time_steps: usize,
}

impl McSettings {
    pub fn new(duration: f64, time_steps: usize) -> Self {
        Self {
            duration,
            time_steps,
        }
    }

    /// Step size T / N.
    pub fn dt(&self) -> f64 {
        self.duration / self.time_steps as f64
    }
}

impl Default for McSettings {
    fn default() -> Self {
        Self {
            duration: 1.0,
            time_steps: 252,
        }
    }
}

/// Maps optimiser proposals to processes.
///
/// Implementations are stateless beyond their [`McSettings`]; every method is
/// deterministic and side-effect free.
pub trait McFactory {
    type Process: StochasticProcess;

    fn settings(&self) -> &McSettings;

    /// Initial parameter vector for the optimiser.
    fn starting_point(&self) -> Vec<f64>;

    /// Initial step sizes for the optimiser, one per parameter.
    fn start_configuration(&self) -> Vec<f64>;

    /// Builds the process a parameter vector represents, sanitising
    /// out-of-domain proposals instead of failing.
    fn create_process(&self, x0: f64, parameters: &[f64]) -> Self::Process;

    /// Path generator over this factory's horizon.
    fn path_generator<D: DeviateSource>(
        &self,
        process: Self::Process,
        deviates: D,
    ) -> Result<PathGenerator<Self::Process, D>> {
        let settings = self.settings();
        PathGenerator::new(process, settings.time_steps, settings.duration, deviates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deviates::RandomDeviates;
    use approx::assert_relative_eq;

    #[test]
    fn test_settings_dt() {
        let settings = McSettings::new(2.0, 8);
        assert_relative_eq!(settings.dt(), 0.25);
        assert_eq!(McSettings::default().time_steps, 252);
    }

    #[test]
    fn test_factory_path_generator_uses_settings() {
        let factory = GbmFactory::new(0.5, 10);
        let process = factory.create_process(1.0, &[0.05, 0.2]);
        let mut generator = factory
            .path_generator(process, RandomDeviates::normal(3))
            .unwrap();
        let path = generator.next_path().unwrap();
        assert_eq!(path.len(), 10);
        assert_relative_eq!(path.dt(), 0.05);
        assert_eq!(path.initial(), Some(1.0));
    }

    #[test]
    fn test_invalid_settings_surface_at_generation() {
        let factory = GbmFactory::new(1.0, 0);
        let process = factory.create_process(1.0, &[0.05, 0.2]);
        assert!(factory
            .path_generator(process, RandomDeviates::normal(3))
            .is_err());
    }
}
