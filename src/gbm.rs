//! Geometric Brownian Motion (GBM)
//!
//! dS_t = μ S_t dt + σ S_t dW_t
//!
//! Solution: S_t = S_0 exp((μ - σ²/2)t + σW_t)

use crate::sde::StochasticProcess;

/// Geometric Brownian Motion process
///
/// `evolve` applies the exact log-normal transition over one step rather
/// than an Euler approximation, so paths started from a positive value stay
/// positive for any step size.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometricBrownianMotion {
    /// Initial value S_0
    pub x0: f64,
    /// Drift μ
    pub mu: f64,
    /// Volatility σ
    pub sigma: f64,
}

impl GeometricBrownianMotion {
    /// Creates a new GBM process
    ///
    /// No validation happens here; calibration factories decide what an
    /// out-of-domain parameter vector maps to.
    ///
    /// # Example
    /// ```
    /// use stochastic_montecarlo::GeometricBrownianMotion;
    ///
    /// let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.2);
    /// assert_eq!(gbm.sigma, 0.2);
    /// ```
    pub fn new(x0: f64, mu: f64, sigma: f64) -> Self {
        Self { x0, mu, sigma }
    }

    /// The zero process S ≡ 0 with μ = σ = 0.
    pub fn degenerate() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns `true` when both drift and volatility are zero.
    pub fn is_degenerate(&self) -> bool {
        self.mu == 0.0 && self.sigma == 0.0
    }

    /// Expected value E[S_t] = S_0 * exp(μt)
    pub fn expected_value(&self, t: f64) -> f64 {
        self.x0 * (self.mu * t).exp()
    }

    /// Variance Var[S_t] = S_0² * exp(2μt) * (exp(σ²t) - 1)
    pub fn variance(&self, t: f64) -> f64 {
        let e_s = self.expected_value(t);
        e_s * e_s * ((self.sigma * self.sigma * t).exp() - 1.0)
    }
}

impl StochasticProcess for GeometricBrownianMotion {
    fn initial_value(&self) -> f64 {
        self.x0
    }

    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.mu * x
    }

    fn diffusion(&self, _t: f64, x: f64) -> f64 {
        self.sigma * x
    }

    /// log(S_{t+dt}) = log(S_t) + (μ - σ²/2)dt + σ√dt dw
    fn evolve(&self, _t: f64, x: f64, dt: f64, dw: f64) -> f64 {
        let drift = (self.mu - 0.5 * self.sigma * self.sigma) * dt;
        x * (drift + self.sigma * dt.sqrt() * dw).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_step() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.2);
        let dt: f64 = 0.25;
        let dw: f64 = 0.5;
        let expected = 100.0 * ((0.1 - 0.02) * dt + 0.2 * 0.5 * dw).exp();
        assert_relative_eq!(gbm.evolve(0.0, 100.0, dt, dw), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_positive_for_extreme_deviates() {
        let gbm = GeometricBrownianMotion::new(1.0, -0.5, 0.9);
        let x = gbm.evolve(0.0, 1.0, 1.0, -8.0);
        assert!(x > 0.0);
    }

    #[test]
    fn test_coefficients() {
        let gbm = GeometricBrownianMotion::new(50.0, 0.05, 0.3);
        assert_relative_eq!(gbm.drift(0.0, 10.0), 0.5);
        assert_relative_eq!(gbm.diffusion(0.0, 10.0), 3.0);
        assert_eq!(gbm.initial_value(), 50.0);
    }

    #[test]
    fn test_moments() {
        let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.2);
        assert_relative_eq!(gbm.expected_value(1.0), 100.0 * 0.1f64.exp());
        assert!(gbm.variance(1.0) > 0.0);
        assert_eq!(GeometricBrownianMotion::degenerate().variance(1.0), 0.0);
    }

    #[test]
    fn test_degenerate() {
        let gbm = GeometricBrownianMotion::degenerate();
        assert!(gbm.is_degenerate());
        assert_eq!(gbm.evolve(0.0, gbm.initial_value(), 0.1, 1.7), 0.0);
    }
}
