//! Empirical statistics over simulated samples.

use crate::path::Path;
use std::collections::BTreeMap;
use tracing::trace;

/// Collects statistics from a stream of values.
pub trait Accumulator<T> {
    /// Records one value.
    fn add_value(&mut self, value: T);

    /// Independent copy; mutating either side never affects the other.
    fn deep_copy(&self) -> Self
    where
        Self: Sized;

    /// Records every value of an iterator.
    fn add_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for value in values {
            self.add_value(value);
        }
    }
}

/// Decimal digits kept when quantising samples.
pub const HISTOGRAM_PRECISION: i32 = 3;

const SCALE: f64 = 1_000.0;

/// Histogram of samples rounded to [`HISTOGRAM_PRECISION`] decimals.
///
/// Buckets are keyed by the sample in thousandths, rounded half up
/// (`0.0625 -> 0.063`, `-0.0625 -> -0.062`). The type is deliberately not
/// `Clone`; use [`Accumulator::deep_copy`].
///
/// NaN and infinite samples are skipped and never counted. Keys saturate at
/// the `i64` range, so finite samples beyond roughly `±9.2e15` share the
/// outermost bucket.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct HistogramAccumulator {
    buckets: BTreeMap<i64, u64>,
}

impl HistogramAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn bucket_key(value: f64) -> i64 {
        (value * SCALE + 0.5).floor() as i64
    }

    /// Rounds `value` to the bucket it falls into.
    pub fn quantize(value: f64) -> f64 {
        Self::bucket_key(value) as f64 / SCALE
    }

    /// Count of the bucket `value` falls into.
    pub fn count(&self, value: f64) -> u64 {
        if !value.is_finite() {
            return 0;
        }
        self.buckets
            .get(&Self::bucket_key(value))
            .copied()
            .unwrap_or(0)
    }

    /// Non-empty buckets as `(quantised value, count)`, ascending.
    pub fn buckets(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.buckets
            .iter()
            .map(|(&key, &count)| (key as f64 / SCALE, count))
    }

    /// Number of non-empty buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of values recorded.
    pub fn total(&self) -> u64 {
        self.buckets.values().sum()
    }

    /// Records every sample of a path.
    pub fn add_path(&mut self, path: &Path) {
        self.add_values(path.values().iter().copied());
    }

    /// Adds the counts of `other` bucket by bucket.
    ///
    /// Lets workers fill private histograms and combine them afterwards.
    pub fn merge(&mut self, other: &HistogramAccumulator) {
        for (&key, &count) in &other.buckets {
            *self.buckets.entry(key).or_insert(0) += count;
        }
    }
}

impl Accumulator<f64> for HistogramAccumulator {
    fn add_value(&mut self, value: f64) {
        if !value.is_finite() {
            trace!(value, "skipping non-finite sample");
            return;
        }
        *self.buckets.entry(Self::bucket_key(value)).or_insert(0) += 1;
    }

    fn deep_copy(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rounds_to_three_decimals() {
        let mut histo = HistogramAccumulator::new();
        histo.add_value(1.23456);
        assert_eq!(histo.count(1.235), 1);

        histo.add_value(1.2346);
        assert_eq!(histo.count(1.235), 2);
        assert_eq!(histo.len(), 1);
        assert_eq!(histo.buckets().collect::<Vec<_>>(), vec![(1.235, 2)]);
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(HistogramAccumulator::quantize(0.0625), 0.063);
        assert_eq!(HistogramAccumulator::quantize(-0.0625), -0.062);
        assert_eq!(HistogramAccumulator::quantize(-1.2346), -1.235);
    }

    #[test]
    fn test_non_finite_samples_are_skipped() {
        let mut histo = HistogramAccumulator::new();
        histo.add_values([f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0]);

        assert_eq!(histo.total(), 1);
        assert_eq!(histo.count(0.0), 1);
        assert_eq!(histo.count(f64::NAN), 0);
        assert_eq!(histo.count(f64::INFINITY), 0);
    }

    #[test]
    fn test_huge_values_share_outer_bucket() {
        let mut histo = HistogramAccumulator::new();
        histo.add_values([1e17, 2e17, -1e17]);

        assert_eq!(histo.total(), 3);
        assert_eq!(histo.len(), 2);
        assert_eq!(histo.count(1e17), 2);
        assert_eq!(histo.count(-5e16), 1);
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let mut a = HistogramAccumulator::new();
        a.add_value(0.5);

        let mut b = a.deep_copy();
        b.add_value(2.0);
        b.add_value(0.5);

        assert_eq!(a.len(), 1);
        assert_eq!(a.count(0.5), 1);
        assert_eq!(a.count(2.0), 0);
        assert_eq!(b.count(0.5), 2);

        a.add_value(7.0);
        assert_eq!(b.count(7.0), 0);
    }

    #[test]
    fn test_merge() {
        let mut a = HistogramAccumulator::new();
        a.add_values([1.0, 1.0, 2.0]);
        let mut b = HistogramAccumulator::new();
        b.add_values([2.0, 3.0]);

        a.merge(&b);
        assert_eq!(a.count(1.0), 2);
        assert_eq!(a.count(2.0), 2);
        assert_eq!(a.count(3.0), 1);
        assert_eq!(a.total(), 5);
        assert_eq!(b.total(), 2);
    }

    #[test]
    fn test_add_path() {
        let path = Path::new(vec![1.0, 1.0004, 1.2], 0.1);
        let mut histo = HistogramAccumulator::new();
        histo.add_path(&path);
        assert_eq!(histo.count(1.0), 2);
        assert_eq!(histo.count(1.2), 1);
        assert_eq!(histo.total(), 3);
    }

    proptest! {
        #[test]
        fn prop_total_counts_every_value(values in prop::collection::vec(-1e6f64..1e6, 0..200)) {
            let mut histo = HistogramAccumulator::new();
            histo.add_values(values.iter().copied());
            prop_assert_eq!(histo.total(), values.len() as u64);
            for &v in &values {
                prop_assert!(histo.count(v) >= 1);
            }
        }

        #[test]
        fn prop_merge_equals_sequential(
            left in prop::collection::vec(-100f64..100.0, 0..50),
            right in prop::collection::vec(-100f64..100.0, 0..50),
        ) {
            let mut merged = HistogramAccumulator::new();
            merged.add_values(left.iter().copied());
            let mut other = HistogramAccumulator::new();
            other.add_values(right.iter().copied());
            merged.merge(&other);

            let mut sequential = HistogramAccumulator::new();
            sequential.add_values(left.iter().chain(right.iter()).copied());
            prop_assert_eq!(merged, sequential);
        }
    }
}
