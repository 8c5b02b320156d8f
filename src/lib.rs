//! # Single-Factor Monte Carlo Engine
//!
//! Building blocks for simulating one-dimensional stochastic processes and
//! calibrating them against observed data.
//!
//! ## Modules
//!
//! - [`polynomials`] - Primitive polynomials modulo two, grouped in capacity tiers
//! - [`sde`] - Stochastic process abstraction and Euler–Maruyama stepping
//! - [`gbm`] - Geometric Brownian Motion
//! - [`deviates`] - Sources of random deviates
//! - [`generator`] - Path generation, sequential and parallel
//! - [`accumulator`] - Histogram statistics over simulated values
//! - [`calibration`] - Factories mapping parameter vectors to processes
//! - [`config`] - Layered engine settings
//!
//! ## Example
//!
//! ```rust
//! use stochastic_montecarlo::{
//!     Accumulator, GeometricBrownianMotion, HistogramAccumulator, PathGenerator,
//!     RandomDeviates,
//! };
//!
//! let gbm = GeometricBrownianMotion::new(100.0, 0.1, 0.2);
//! let mut generator = PathGenerator::new(gbm, 252, 1.0, RandomDeviates::normal(42)).unwrap();
//!
//! let mut histogram = HistogramAccumulator::new();
//! for _ in 0..10 {
//!     let path = generator.next_path().unwrap();
//!     histogram.add_value(path.terminal().unwrap());
//! }
//! assert_eq!(histogram.total(), 10);
//! ```

pub mod accumulator;
pub mod calibration;
pub mod config;
pub mod deviates;
pub mod error;
pub mod gbm;
pub mod generator;
pub mod path;
pub mod polynomials;
pub mod sde;

pub use accumulator::{Accumulator, HistogramAccumulator};
pub use calibration::{
    GbmFactory, McFactory, McSettings, OrnsteinUhlenbeckFactory, SimulatedLikelihood,
};
pub use config::EngineSettings;
pub use deviates::{DeviateSource, RandomDeviates, ReplayDeviates};
pub use error::{Result, SimulationError};
pub use gbm::GeometricBrownianMotion;
pub use generator::{simulate_paths, PathGenerator};
pub use path::Path;
pub use polynomials::{PolynomialTier, PrimitivePolynomials};
pub use sde::{OrnsteinUhlenbeck, StochasticProcess};
