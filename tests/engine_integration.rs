//! End-to-end checks across the public API.

use approx::assert_relative_eq;
use std::sync::Arc;
use std::thread;
use stochastic_montecarlo::error::EvaluationFailure;
use stochastic_montecarlo::polynomials::{MAX_CAPACITY, SENTINEL};
use stochastic_montecarlo::{
    simulate_paths, Accumulator, GbmFactory, GeometricBrownianMotion, HistogramAccumulator,
    McFactory, PathGenerator, PolynomialTier, PrimitivePolynomials, RandomDeviates,
    ReplayDeviates, SimulationError, StochasticProcess,
};

#[test]
fn capacity_five_selects_tier_four() {
    let table = PrimitivePolynomials::new(5).unwrap();
    assert_eq!(table.max_capacity(), 6);
    assert_eq!(table.max_degree(), 4);
    assert_eq!(table.iter().count(), 6);
}

#[test]
fn every_tier_boundary_selects_smallest_covering_tier() {
    let mut previous = 0;
    for tier in PolynomialTier::all() {
        let bound = tier.cumulative_count();
        assert_eq!(PolynomialTier::for_capacity(bound).unwrap(), tier);
        assert_eq!(PolynomialTier::for_capacity(previous + 1).unwrap(), tier);
        previous = bound;
    }
    assert_eq!(previous, MAX_CAPACITY);
    assert!(matches!(
        PolynomialTier::for_capacity(MAX_CAPACITY + 1),
        Err(SimulationError::CapacityExceeded { .. })
    ));
}

#[test]
fn degree_lists_walk_to_sentinel() {
    let table = PrimitivePolynomials::default();
    for degree in 1..=table.max_degree() {
        let mut seen = Vec::new();
        let mut index = 0;
        loop {
            let value = table.get(degree, index).unwrap();
            if value == SENTINEL {
                break;
            }
            assert!(value >= 0);
            assert!(!seen.contains(&value), "degree {} repeats {}", degree, value);
            seen.push(value);
            index += 1;
        }
        assert_eq!(table.get(degree, index + 1), None);
    }
}

#[test]
fn searched_tier_walks_to_sentinel() {
    let table = PrimitivePolynomials::new(48_794).unwrap();
    assert_eq!(table.max_degree(), 19);
    assert_eq!(table.max_capacity(), 48_794);
    assert_eq!(table.iter().count(), 48_794);

    let mut index = 0;
    let mut last = -1;
    loop {
        let value = table.get(19, index).unwrap();
        if value == SENTINEL {
            break;
        }
        assert!(value > last, "degree 19 not ascending at {}", index);
        last = value;
        index += 1;
    }
    assert_eq!(index, 27_594);
    assert_eq!(table.get(19, index + 1), None);
    assert_eq!(table.get(20, 0), None);
}

#[test]
fn table_is_shared_across_threads() {
    let table = Arc::new(PrimitivePolynomials::new(1_000).unwrap());
    let expected: Vec<(usize, i64)> = table.iter().collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let table = Arc::clone(&table);
            thread::spawn(move || table.iter().collect::<Vec<_>>())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn generated_path_matches_configuration() {
    let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2);
    let mut generator = PathGenerator::new(&gbm, 50, 2.0, RandomDeviates::normal(9)).unwrap();
    let path = generator.next_path().unwrap();

    assert_eq!(path.len(), 50);
    assert_eq!(path.initial(), Some(gbm.initial_value()));
    assert_relative_eq!(path.dt(), 2.0 / 50.0);
    assert_relative_eq!(path.duration(), 2.0);
}

#[test]
fn identical_deviates_give_bit_identical_paths() {
    let deviates: Vec<f64> = (0..19).map(|i| (i as f64 * 0.37).sin()).collect();
    let gbm = GeometricBrownianMotion::new(1.0, 0.1, 0.3);

    let mut a = PathGenerator::new(&gbm, 20, 1.0, ReplayDeviates::new(deviates.clone())).unwrap();
    let mut b = PathGenerator::new(&gbm, 20, 1.0, ReplayDeviates::new(deviates)).unwrap();

    let left: Vec<u64> = a.next_path().unwrap().values().iter().map(|v| v.to_bits()).collect();
    let right: Vec<u64> = b.next_path().unwrap().values().iter().map(|v| v.to_bits()).collect();
    assert_eq!(left, right);
}

#[test]
fn short_deviate_stream_fails_with_step() {
    let gbm = GeometricBrownianMotion::new(1.0, 0.1, 0.3);
    let mut generator = PathGenerator::new(gbm, 10, 1.0, ReplayDeviates::new(vec![0.0; 4])).unwrap();

    match generator.next_path() {
        Err(SimulationError::FunctionEvaluation { step, reason }) => {
            assert_eq!(step, 5);
            assert_eq!(reason, EvaluationFailure::DeviatesExhausted);
        }
        other => panic!("expected function evaluation failure, got {:?}", other),
    }
}

#[test]
fn parallel_batches_are_reproducible() {
    let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2);
    let first = simulate_paths(&gbm, 30, 1.0, 64, 123).unwrap();
    let second = simulate_paths(&gbm, 30, 1.0, 64, 123).unwrap();
    assert_eq!(first, second);

    let other_seed = simulate_paths(&gbm, 30, 1.0, 64, 124).unwrap();
    assert_ne!(first, other_seed);
}

#[test]
fn histogram_of_simulated_terminals() {
    let gbm = GeometricBrownianMotion::new(100.0, 0.05, 0.2);
    let paths = simulate_paths(&gbm, 30, 1.0, 200, 5).unwrap();

    let mut all = HistogramAccumulator::new();
    let mut halves = [HistogramAccumulator::new(), HistogramAccumulator::new()];
    for (i, path) in paths.iter().enumerate() {
        let terminal = path.terminal().unwrap();
        all.add_value(terminal);
        halves[i % 2].add_value(terminal);
    }

    let [mut left, right] = halves;
    let snapshot = left.deep_copy();
    left.merge(&right);

    assert_eq!(left, all);
    assert_eq!(all.total(), 200);
    assert_eq!(snapshot.total(), 100);
}

#[test]
fn factory_sanitises_and_keeps_start_vectors() {
    let factory = GbmFactory::new(1.0, 20);

    for (x0, mu) in [(100.0, 0.05), (-3.0, 4.0)] {
        let process = factory.create_process(x0, &[mu, -0.5]);
        assert_eq!(process, GeometricBrownianMotion::degenerate());
    }

    assert_eq!(factory.starting_point(), vec![0.1, 0.1]);
    assert_eq!(factory.start_configuration(), vec![0.1, 0.1]);
    assert_eq!(factory.starting_point(), vec![0.1, 0.1]);

    let degenerate = factory.create_process(7.0, &[0.3, -1.0]);
    let path = factory
        .path_generator(degenerate, RandomDeviates::normal(1))
        .unwrap()
        .next_path()
        .unwrap();
    assert!(path.values().iter().all(|&v| v == 0.0));
}
