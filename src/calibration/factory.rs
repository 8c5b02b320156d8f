//! Reference factories for the bundled processes.

use super::{McFactory, McSettings};
use crate::gbm::GeometricBrownianMotion;
use crate::sde::OrnsteinUhlenbeck;
use tracing::trace;

/// Factory for [`GeometricBrownianMotion`] with parameters `[mu, sigma]`.
///
/// A negative `sigma`, a short vector or any non-finite entry yields
/// [`GeometricBrownianMotion::degenerate`] whatever `x0` and `mu` are.
#[derive(Debug, Clone, PartialEq)]
pub struct GbmFactory {
    settings: McSettings,
}

impl GbmFactory {
    pub fn new(duration: f64, time_steps: usize) -> Self {
        Self::with_settings(McSettings::new(duration, time_steps))
    }

    pub fn with_settings(settings: McSettings) -> Self {
        Self { settings }
    }
}

impl McFactory for GbmFactory {
    type Process = GeometricBrownianMotion;

    fn settings(&self) -> &McSettings {
        &self.settings
    }

    fn starting_point(&self) -> Vec<f64> {
        vec![0.1, 0.1]
    }

    fn start_configuration(&self) -> Vec<f64> {
        vec![0.1, 0.1]
    }

    fn create_process(&self, x0: f64, parameters: &[f64]) -> GeometricBrownianMotion {
        match *parameters {
            [mu, sigma, ..] if mu.is_finite() && sigma.is_finite() && sigma >= 0.0 => {
                GeometricBrownianMotion::new(x0, mu, sigma)
            }
            _ => {
                trace!(?parameters, "GBM parameters outside domain, using zero process");
                GeometricBrownianMotion::degenerate()
            }
        }
    }
}

/// Factory for [`OrnsteinUhlenbeck`] with parameters `[theta, mu, sigma]`.
///
/// Negative reversion speed or volatility, a short vector or any non-finite
/// entry yields [`OrnsteinUhlenbeck::degenerate`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrnsteinUhlenbeckFactory {
    settings: McSettings,
}

impl OrnsteinUhlenbeckFactory {
    pub fn new(duration: f64, time_steps: usize) -> Self {
        Self::with_settings(McSettings::new(duration, time_steps))
    }

    pub fn with_settings(settings: McSettings) -> Self {
        Self { settings }
    }
}

impl McFactory for OrnsteinUhlenbeckFactory {
    type Process = OrnsteinUhlenbeck;

    fn settings(&self) -> &McSettings {
        &self.settings
    }

    fn starting_point(&self) -> Vec<f64> {
        vec![1.0, 0.0, 0.1]
    }

    fn start_configuration(&self) -> Vec<f64> {
        vec![0.1, 0.1, 0.1]
    }

    fn create_process(&self, x0: f64, parameters: &[f64]) -> OrnsteinUhlenbeck {
        match *parameters {
            [theta, mu, sigma, ..]
                if [theta, mu, sigma].iter().all(|p| p.is_finite())
                    && theta >= 0.0
                    && sigma >= 0.0 =>
            {
                OrnsteinUhlenbeck::new(theta, mu, sigma, x0)
            }
            _ => {
                trace!(?parameters, "OU parameters outside domain, using zero process");
                OrnsteinUhlenbeck::degenerate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sde::StochasticProcess;

    #[test]
    fn test_gbm_valid_parameters() {
        let factory = GbmFactory::new(1.0, 100);
        let process = factory.create_process(50.0, &[0.05, 0.25]);
        assert_eq!(process, GeometricBrownianMotion::new(50.0, 0.05, 0.25));
    }

    #[test]
    fn test_gbm_negative_sigma_is_degenerate() {
        let factory = GbmFactory::new(1.0, 100);
        for (x0, mu) in [(1.0, 0.3), (-5.0, -2.0), (1e6, 0.0)] {
            let process = factory.create_process(x0, &[mu, -0.01]);
            assert_eq!(process, GeometricBrownianMotion::degenerate());
            assert_eq!(process.drift(0.0, 1.0), 0.0);
            assert_eq!(process.diffusion(0.0, 1.0), 0.0);
        }
    }

    #[test]
    fn test_gbm_malformed_parameters_are_degenerate() {
        let factory = GbmFactory::new(1.0, 100);
        assert!(factory.create_process(1.0, &[]).is_degenerate());
        assert!(factory.create_process(1.0, &[0.1]).is_degenerate());
        assert!(factory.create_process(1.0, &[f64::NAN, 0.2]).is_degenerate());
        assert!(factory.create_process(1.0, &[0.1, f64::INFINITY]).is_degenerate());
    }

    #[test]
    fn test_gbm_zero_sigma_is_kept() {
        let factory = GbmFactory::new(1.0, 100);
        let process = factory.create_process(2.0, &[0.1, 0.0]);
        assert_eq!(process, GeometricBrownianMotion::new(2.0, 0.1, 0.0));
    }

    #[test]
    fn test_gbm_start_vectors_are_fixed() {
        let factory = GbmFactory::new(1.0, 100);
        for _ in 0..3 {
            assert_eq!(factory.starting_point(), vec![0.1, 0.1]);
            assert_eq!(factory.start_configuration(), vec![0.1, 0.1]);
        }
    }

    #[test]
    fn test_create_process_is_deterministic() {
        let factory = GbmFactory::new(1.0, 100);
        let a = factory.create_process(3.0, &[0.2, 0.3]);
        let b = factory.create_process(3.0, &[0.2, 0.3]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_ou_sanitisation() {
        let factory = OrnsteinUhlenbeckFactory::new(1.0, 50);
        assert_eq!(
            factory.create_process(0.5, &[2.0, 1.0, 0.3]),
            OrnsteinUhlenbeck::new(2.0, 1.0, 0.3, 0.5)
        );
        assert_eq!(
            factory.create_process(0.5, &[-1.0, 1.0, 0.3]),
            OrnsteinUhlenbeck::degenerate()
        );
        assert_eq!(
            factory.create_process(0.5, &[1.0, 1.0, -0.3]),
            OrnsteinUhlenbeck::degenerate()
        );
        assert_eq!(
            factory.create_process(0.5, &[1.0, 1.0]),
            OrnsteinUhlenbeck::degenerate()
        );
        assert_eq!(factory.starting_point().len(), factory.start_configuration().len());
    }
}
