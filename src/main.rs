//! Demo driver for the Monte Carlo engine
//!
//! Run with: cargo run --release
//! Settings come from `config/default.toml` and `MCSIM__*` variables, log
//! verbosity from `RUST_LOG`.

use anyhow::{Context, Result};
use stochastic_montecarlo::{
    simulate_paths, Accumulator, EngineSettings, GbmFactory, GeometricBrownianMotion,
    HistogramAccumulator, McFactory, OrnsteinUhlenbeckFactory, PrimitivePolynomials,
    RandomDeviates, SimulatedLikelihood,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .init();

    let settings = EngineSettings::load().context("failed to load engine settings")?;
    info!(?settings, "loaded settings");

    println!("=== Single-Factor Monte Carlo Engine ===\n");

    example_polynomials(&settings)?;
    let observations = example_gbm_paths(&settings)?;
    example_calibration(&settings, &observations)?;
    example_ornstein_uhlenbeck(&settings)?;

    Ok(())
}

/// `RUST_LOG` when set and valid, `info` otherwise.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn example_polynomials(settings: &EngineSettings) -> Result<()> {
    println!("--- Primitive Polynomials ---");

    let table = PrimitivePolynomials::new(settings.polynomials.capacity)
        .context("failed to build primitive polynomial table")?;

    println!(
        "Requested capacity {} -> tier {} ({} polynomials)",
        settings.polynomials.capacity,
        table.tier().index(),
        table.max_capacity()
    );
    for degree in 1..=table.max_degree().min(6) {
        let list = table.polynomials(degree).unwrap_or(&[]);
        println!("  degree {:>2}: {:?}", degree, list);
    }
    println!();
    Ok(())
}

fn example_gbm_paths(settings: &EngineSettings) -> Result<Vec<f64>> {
    println!("--- Geometric Brownian Motion ---");

    let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2);
    let horizon = settings.calibration;
    let n_paths = settings.simulation.n_paths;

    let paths = simulate_paths(
        &gbm,
        horizon.time_steps,
        horizon.duration,
        n_paths,
        settings.simulation.seed,
    )?;
    let terminals: Vec<f64> = paths.iter().filter_map(|p| p.terminal()).collect();

    let mut histogram = HistogramAccumulator::new();
    histogram.add_values(terminals.iter().copied());

    let mean = terminals.iter().sum::<f64>() / terminals.len().max(1) as f64;
    println!(
        "{} paths of {} samples over T = {:.2}",
        n_paths, horizon.time_steps, horizon.duration
    );
    println!(
        "Mean X_T = {:.4} (theoretical {:.4})",
        mean,
        gbm.expected_value(horizon.duration)
    );
    println!("Distinct histogram buckets: {}", histogram.len());

    if let Some((value, count)) = histogram.buckets().max_by_key(|&(_, count)| count) {
        println!("Most populated bucket: {:.3} ({} hits)", value, count);
    }
    println!();
    Ok(terminals)
}

fn example_calibration(settings: &EngineSettings, observations: &[f64]) -> Result<()> {
    println!("--- Simulated Likelihood ---");

    let factory = GbmFactory::with_settings(settings.calibration);
    let n_paths = (settings.simulation.n_paths / 5).max(2);
    let objective = SimulatedLikelihood::new(
        &factory,
        observations,
        100.0,
        n_paths,
        settings.simulation.seed.wrapping_add(1),
    )?;

    let candidates = [
        factory.starting_point(),
        vec![0.05, 0.2],
        vec![0.05, 0.4],
        vec![0.05, -0.2],
    ];
    for parameters in &candidates {
        let nll = objective.negative_log_likelihood(parameters)?;
        println!("  [mu, sigma] = {:?} -> NLL {:.2}", parameters, nll);
    }
    println!();
    Ok(())
}

fn example_ornstein_uhlenbeck(settings: &EngineSettings) -> Result<()> {
    println!("--- Ornstein-Uhlenbeck ---");

    let factory = OrnsteinUhlenbeckFactory::with_settings(settings.calibration);
    let process = factory.create_process(1.0, &[2.0, 0.0, 0.3]);
    let mut generator =
        factory.path_generator(process, RandomDeviates::normal(settings.simulation.seed))?;

    for i in 1..=3 {
        let path = generator.next_path()?;
        let terminal = path.terminal().unwrap_or(f64::NAN);
        println!("  Path {}: X_T = {:+.4}", i, terminal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_prefers_rust_log() {
        std::env::set_var("RUST_LOG", "warn");
        assert_eq!(log_filter().to_string(), "warn");

        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter().to_string(), "info");
    }
}
