//! Simulation errors.

use thiserror::Error;

/// Why a single evolution step could not produce a sample.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationFailure {
    /// The deviate source ran dry before the path was complete
    #[error("deviate source exhausted")]
    DeviatesExhausted,

    /// The process evolved to NaN or an infinity
    #[error("process evolved to non-finite value {0}")]
    NonFiniteValue(f64),
}

/// Errors that can occur while building tables or simulating paths.
///
/// Only truly fatal conditions are represented here. Calibration parameters
/// outside their natural domain are sanitised by the factories and never
/// surface as an error.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Requested polynomial capacity is beyond the largest tier
    #[error("Requested capacity {requested} exceeds the maximum of {max} primitive polynomials")]
    CapacityExceeded { requested: u64, max: u64 },

    /// An evolution step failed while generating a path
    #[error("Function evaluation failed at step {step}: {reason}")]
    FunctionEvaluation {
        step: usize,
        reason: EvaluationFailure,
    },

    /// Generator or factory configured with unusable values
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Underlying config crate error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SimulationError {
    /// Returns `true` for failures raised while evolving a path.
    pub fn is_function_evaluation(&self) -> bool {
        matches!(self, SimulationError::FunctionEvaluation { .. })
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_exceeded_display() {
        let err = SimulationError::CapacityExceeded {
            requested: 9_000_000,
            max: 8_129_334,
        };
        assert_eq!(
            err.to_string(),
            "Requested capacity 9000000 exceeds the maximum of 8129334 primitive polynomials"
        );
    }

    #[test]
    fn test_function_evaluation_display() {
        let err = SimulationError::FunctionEvaluation {
            step: 3,
            reason: EvaluationFailure::DeviatesExhausted,
        };
        assert_eq!(
            err.to_string(),
            "Function evaluation failed at step 3: deviate source exhausted"
        );
        assert!(err.is_function_evaluation());
    }

    #[test]
    fn test_invalid_configuration_is_not_evaluation_failure() {
        let err = SimulationError::InvalidConfiguration("time_steps must be at least 1".into());
        assert!(!err.is_function_evaluation());
    }
}
