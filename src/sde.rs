//! Scalar stochastic processes
//!
//! A process is described by the SDE
//! dX_t = μ(t, X_t) dt + σ(t, X_t) dW_t
//! together with a discretised evolution rule used by the path generator.

/// A single-factor stochastic process.
///
/// `evolve` must be a pure function of its inputs: it draws no randomness and
/// keeps no state, so replaying the same `(t, x, dt, dw)` sequence reproduces
/// the same path.
pub trait StochasticProcess {
    /// Value of the process at t = 0
    fn initial_value(&self) -> f64;

    /// Drift coefficient μ(t, x)
    fn drift(&self, t: f64, x: f64) -> f64;

    /// Diffusion coefficient σ(t, x)
    fn diffusion(&self, t: f64, x: f64) -> f64;

    /// Advances `x` from `t` to `t + dt` given a standard normal deviate `dw`.
    ///
    /// The default is the Euler–Maruyama step
    /// X_{n+1} = X_n + μ(t_n, X_n) Δt + σ(t_n, X_n) √Δt dw
    fn evolve(&self, t: f64, x: f64, dt: f64, dw: f64) -> f64 {
        x + self.drift(t, x) * dt + self.diffusion(t, x) * dt.sqrt() * dw
    }
}

impl<P: StochasticProcess + ?Sized> StochasticProcess for &P {
    fn initial_value(&self) -> f64 {
        (**self).initial_value()
    }

    fn drift(&self, t: f64, x: f64) -> f64 {
        (**self).drift(t, x)
    }

    fn diffusion(&self, t: f64, x: f64) -> f64 {
        (**self).diffusion(t, x)
    }

    fn evolve(&self, t: f64, x: f64, dt: f64, dw: f64) -> f64 {
        (**self).evolve(t, x, dt, dw)
    }
}

/// Ornstein-Uhlenbeck process
/// dX_t = θ(μ - X_t)dt + σdW_t
///
/// Uses the default Euler–Maruyama `evolve`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrnsteinUhlenbeck {
    /// Mean reversion speed
    pub theta: f64,
    /// Long-term mean
    pub mu: f64,
    /// Volatility
    pub sigma: f64,
    /// Initial value
    pub x0: f64,
}

impl OrnsteinUhlenbeck {
    pub fn new(theta: f64, mu: f64, sigma: f64, x0: f64) -> Self {
        Self {
            theta,
            mu,
            sigma,
            x0,
        }
    }

    /// The zero process: no reversion, no noise, starts at 0.
    pub fn degenerate() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

impl StochasticProcess for OrnsteinUhlenbeck {
    fn initial_value(&self) -> f64 {
        self.x0
    }

    fn drift(&self, _t: f64, x: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    fn diffusion(&self, _t: f64, _x: f64) -> f64 {
        self.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euler_step() {
        let ou = OrnsteinUhlenbeck::new(2.0, 1.0, 0.5, 0.0);
        // 0 + 2 * (1 - 0) * 0.25 + 0.5 * 0.5 * 1.0
        assert_relative_eq!(ou.evolve(0.0, 0.0, 0.25, 1.0), 0.75);
    }

    #[test]
    fn test_evolve_is_pure() {
        let ou = OrnsteinUhlenbeck::new(1.5, 0.2, 0.3, 1.0);
        let a = ou.evolve(0.1, 0.9, 0.01, -0.4);
        let b = ou.evolve(0.1, 0.9, 0.01, -0.4);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_reference_forwards() {
        fn step<P: StochasticProcess>(process: P) -> f64 {
            process.evolve(0.0, process.initial_value(), 1.0, 0.0)
        }

        let ou = OrnsteinUhlenbeck::new(1.0, 0.0, 0.2, 3.0);
        assert_eq!(step(&ou), step(ou.clone()));
        assert_eq!(step(&ou), 0.0);
    }

    #[test]
    fn test_degenerate_stays_put() {
        let ou = OrnsteinUhlenbeck::degenerate();
        let x = ou.evolve(0.0, ou.initial_value(), 0.1, 2.5);
        assert_eq!(x, 0.0);
    }
}
