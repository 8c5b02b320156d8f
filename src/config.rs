//! Engine settings.

use crate::calibration::McSettings;
use crate::error::Result;
use crate::polynomials::DEFAULT_CAPACITY;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Top-level settings for the simulation driver.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct EngineSettings {
    /// Path simulation
    #[serde(default)]
    pub simulation: SimulationSettings,
    /// Primitive polynomial table
    #[serde(default)]
    pub polynomials: PolynomialSettings,
    /// Calibration horizon
    #[serde(default)]
    pub calibration: McSettings,
}

impl EngineSettings {
    /// Load settings from configuration files and environment variables.
    ///
    /// Later sources override earlier ones:
    /// 1. `config/default.toml`
    /// 2. `config/{environment}.toml` (based on `MCSIM_ENV`)
    /// 3. Environment variables prefixed with `MCSIM__`, e.g.
    ///    `MCSIM__SIMULATION__N_PATHS=5000`
    pub fn load() -> Result<Self> {
        let env = std::env::var("MCSIM_ENV").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("MCSIM")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parse settings from a TOML document; missing keys take defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Path simulation settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationSettings {
    /// Paths per batch
    #[serde(default = "default_n_paths")]
    pub n_paths: usize,
    /// Base seed for deviate sources
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            n_paths: default_n_paths(),
            seed: default_seed(),
        }
    }
}

fn default_n_paths() -> usize {
    10_000
}

fn default_seed() -> u64 {
    42
}

/// Primitive polynomial table settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PolynomialSettings {
    /// Requested number of polynomials (quasi-random dimensions)
    #[serde(default = "default_capacity")]
    pub capacity: u64,
}

impl Default for PolynomialSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> u64 {
    DEFAULT_CAPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.simulation.n_paths, 10_000);
        assert_eq!(settings.simulation.seed, 42);
        assert_eq!(settings.polynomials.capacity, 21_200);
        assert_eq!(settings.calibration, McSettings::new(1.0, 252));
    }

    #[test]
    fn test_toml_overrides() {
        let settings = EngineSettings::from_toml_str(
            r#"
            [simulation]
            n_paths = 500

            [polynomials]
            capacity = 5

            [calibration]
            duration = 2.0
            time_steps = 100
            "#,
        )
        .unwrap();

        assert_eq!(settings.simulation.n_paths, 500);
        assert_eq!(settings.simulation.seed, 42);
        assert_eq!(settings.polynomials.capacity, 5);
        assert_eq!(settings.calibration, McSettings::new(2.0, 100));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = EngineSettings::from_toml_str("").unwrap();
        assert_eq!(settings, EngineSettings::default());
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let result = EngineSettings::from_toml_str("[simulation]\nn_paths = \"many\"\n");
        assert!(result.is_err());
    }
}
