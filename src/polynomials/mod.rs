//! Primitive polynomials modulo two
//!
//! Tables of primitive polynomials over GF(2) seed the direction numbers of
//! low-discrepancy sequences, one polynomial per dimension. The table is
//! built for a requested capacity (number of dimensions) and rounds that up
//! to one of 27 tiers, tier `d` holding every primitive polynomial of degree
//! at most `d`.
//!
//! ## Encoding
//!
//! The leading and trailing coefficients are always one and are dropped; the
//! remaining bits, highest degree first, form the stored value.
//!
//! ```text
//! x^4 + x^2 + 1        (1)010(1)   -> 2
//! x^5 + x^4 + x^3 + x + 1  (1)1101(1)  -> 13
//! ```
//!
//! Every per-degree list is ascending and terminated by [`SENTINEL`].

mod data;
pub mod search;

use crate::error::{Result, SimulationError};
use tracing::{debug, info};

/// Terminates every per-degree list.
pub const SENTINEL: i64 = -1;

/// Number of capacity tiers.
pub const MAX_TIER: usize = 27;

/// Highest degree served from the curated tables; higher degrees are searched.
pub const CURATED_MAX_DEGREE: usize = 18;

/// Cumulative count of primitive polynomials up to and including each degree.
const CUMULATIVE_COUNTS: [u64; MAX_TIER] = [
    1, 2, 4, 6, 12, 18, 36, 52, 100, 160, 336, 480, 1_110, 1_866, 3_666, 5_714, 13_424, 21_200,
    48_794, 72_794, 157_466, 277_498, 634_458, 910_938, 2_206_938, 3_926_838, 8_129_334,
];

/// Largest capacity any table can serve.
pub const MAX_CAPACITY: u64 = CUMULATIVE_COUNTS[MAX_TIER - 1];

/// Capacity used by [`PrimitivePolynomials::default`] (tier 18).
pub const DEFAULT_CAPACITY: u64 = CUMULATIVE_COUNTS[CURATED_MAX_DEGREE - 1];

/// One of the 27 fixed capacity tiers.
///
/// Tiers are ordered by index, and their cumulative counts strictly increase
/// with the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolynomialTier {
    index: usize,
}

impl PolynomialTier {
    /// Returns the tier with the given 1-based index, if it exists.
    pub fn new(index: usize) -> Option<Self> {
        (1..=MAX_TIER).contains(&index).then_some(Self { index })
    }

    /// Selects the smallest tier whose cumulative count covers `capacity`.
    ///
    /// Capacities of 0 or 1 select tier 1.
    ///
    /// # Errors
    /// [`SimulationError::CapacityExceeded`] when `capacity` is above
    /// [`MAX_CAPACITY`].
    ///
    /// # Example
    /// ```
    /// use stochastic_montecarlo::polynomials::PolynomialTier;
    ///
    /// let tier = PolynomialTier::for_capacity(5).unwrap();
    /// assert_eq!(tier.index(), 4);
    /// assert_eq!(tier.cumulative_count(), 6);
    /// ```
    pub fn for_capacity(capacity: u64) -> Result<Self> {
        // First bound >= capacity
        let position = CUMULATIVE_COUNTS.partition_point(|&bound| bound < capacity);
        if position == MAX_TIER {
            return Err(SimulationError::CapacityExceeded {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(Self {
            index: position + 1,
        })
    }

    /// All tiers in ascending order.
    pub fn all() -> impl Iterator<Item = PolynomialTier> {
        (1..=MAX_TIER).map(|index| Self { index })
    }

    /// 1-based tier index; equal to the highest polynomial degree it holds.
    pub fn index(self) -> usize {
        self.index
    }

    /// Total polynomials of degree at most [`Self::index`].
    pub fn cumulative_count(self) -> u64 {
        CUMULATIVE_COUNTS[self.index - 1]
    }

    /// Polynomials of degree exactly [`Self::index`].
    pub fn degree_count(self) -> u64 {
        match self.index {
            1 => CUMULATIVE_COUNTS[0],
            i => CUMULATIVE_COUNTS[i - 1] - CUMULATIVE_COUNTS[i - 2],
        }
    }
}

/// Capacity-tiered table of primitive polynomials modulo two.
///
/// All lists live in one contiguous arena; `offsets[d - 1]` is the start of
/// the degree-`d` list, which runs up to and including its sentinel. The table
/// is built eagerly and never mutated, so it can be shared behind an `Arc`.
#[derive(Debug)]
pub struct PrimitivePolynomials {
    tier: PolynomialTier,
    arena: Vec<i64>,
    offsets: Vec<usize>,
}

impl PrimitivePolynomials {
    /// Builds the table for the tier covering `capacity`.
    ///
    /// Degrees up to [`CURATED_MAX_DEGREE`] are copied from the curated data;
    /// anything above is produced by [`search::primitive_polynomials`], which
    /// is expensive for the largest tiers.
    ///
    /// # Errors
    /// [`SimulationError::CapacityExceeded`] when `capacity` is above
    /// [`MAX_CAPACITY`].
    pub fn new(capacity: u64) -> Result<Self> {
        let tier = PolynomialTier::for_capacity(capacity)?;
        debug!(
            capacity,
            tier = tier.index(),
            max_capacity = tier.cumulative_count(),
            "selected primitive polynomial tier"
        );

        Ok(Self::build(tier))
    }

    fn build(tier: PolynomialTier) -> Self {
        let max_degree = tier.index();
        let mut arena = Vec::with_capacity(tier.cumulative_count() as usize + max_degree);
        let mut offsets = Vec::with_capacity(max_degree);

        for degree in 1..=max_degree {
            offsets.push(arena.len());
            if degree <= CURATED_MAX_DEGREE {
                arena.extend(data::CURATED[degree - 1].iter().map(|&v| i64::from(v)));
            } else {
                let found = search::primitive_polynomials(degree as u32);
                info!(degree, count = found.len(), "searched primitive polynomials");
                arena.extend(found);
            }
            arena.push(SENTINEL);
        }

        Self {
            tier,
            arena,
            offsets,
        }
    }

    /// Selected tier.
    pub fn tier(&self) -> PolynomialTier {
        self.tier
    }

    /// Cumulative count of the selected tier.
    pub fn max_capacity(&self) -> u64 {
        self.tier.cumulative_count()
    }

    /// Highest degree present in the table.
    pub fn max_degree(&self) -> usize {
        self.tier.index()
    }

    /// Degree list including its trailing sentinel.
    fn terminated(&self, degree: usize) -> Option<&[i64]> {
        if degree == 0 || degree > self.max_degree() {
            return None;
        }
        let start = self.offsets[degree - 1];
        let end = self
            .offsets
            .get(degree)
            .copied()
            .unwrap_or(self.arena.len());
        Some(&self.arena[start..end])
    }

    /// Encoded polynomial at `index` within the degree's list.
    ///
    /// The position just past the last polynomial holds [`SENTINEL`]. Returns
    /// `None` for degrees outside `1..=max_degree()` or indices past the
    /// sentinel.
    pub fn get(&self, degree: usize, index: usize) -> Option<i64> {
        self.terminated(degree)?.get(index).copied()
    }

    /// All polynomials of `degree`, without the sentinel.
    pub fn polynomials(&self, degree: usize) -> Option<&[i64]> {
        self.terminated(degree)
            .map(|list| &list[..list.len() - 1])
    }

    /// Every polynomial in dimension order as `(degree, encoded)`.
    ///
    /// Yields exactly [`Self::max_capacity`] items.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        (1..=self.max_degree()).flat_map(move |degree| {
            self.polynomials(degree)
                .unwrap_or(&[])
                .iter()
                .map(move |&encoded| (degree, encoded))
        })
    }
}

impl Default for PrimitivePolynomials {
    fn default() -> Self {
        Self::build(PolynomialTier {
            index: CURATED_MAX_DEGREE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PolynomialTier::for_capacity(0).unwrap().index(), 1);
        assert_eq!(PolynomialTier::for_capacity(1).unwrap().index(), 1);
        assert_eq!(PolynomialTier::for_capacity(2).unwrap().index(), 2);
        assert_eq!(PolynomialTier::for_capacity(4).unwrap().index(), 3);
        assert_eq!(PolynomialTier::for_capacity(5).unwrap().index(), 4);
        assert_eq!(PolynomialTier::for_capacity(21_200).unwrap().index(), 18);
        assert_eq!(PolynomialTier::for_capacity(21_201).unwrap().index(), 19);
        assert_eq!(PolynomialTier::for_capacity(MAX_CAPACITY).unwrap().index(), 27);
    }

    #[test]
    fn test_capacity_exceeded() {
        let err = PolynomialTier::for_capacity(MAX_CAPACITY + 1).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::CapacityExceeded {
                requested: 8_129_335,
                max: 8_129_334
            }
        ));
        assert!(PrimitivePolynomials::new(u64::MAX).is_err());
    }

    #[test]
    fn test_tiers_strictly_increasing() {
        let counts: Vec<u64> = PolynomialTier::all().map(|t| t.cumulative_count()).collect();
        assert_eq!(counts.len(), MAX_TIER);
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_degree_counts_match_curated_lists() {
        for (degree, list) in data::CURATED.iter().enumerate() {
            let tier = PolynomialTier::new(degree + 1).unwrap();
            assert_eq!(tier.degree_count(), list.len() as u64, "degree {}", degree + 1);
        }
    }

    #[test]
    fn test_small_table() {
        let table = PrimitivePolynomials::new(5).unwrap();
        assert_eq!(table.max_capacity(), 6);
        assert_eq!(table.max_degree(), 4);
        assert_eq!(table.get(1, 0), Some(0));
        assert_eq!(table.get(1, 1), Some(SENTINEL));
        assert_eq!(table.get(1, 2), None);
        assert_eq!(table.polynomials(3), Some(&[1, 2][..]));
        assert_eq!(table.polynomials(4), Some(&[1, 4][..]));
        assert_eq!(table.get(5, 0), None);
        assert_eq!(table.get(0, 0), None);
    }

    #[test]
    fn test_default_table() {
        let table = PrimitivePolynomials::default();
        assert_eq!(table.max_capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.max_degree(), 18);
        assert_eq!(table.iter().count() as u64, DEFAULT_CAPACITY);
        assert_eq!(table.get(5, 4), Some(13));
        assert_eq!(table.get(18, 7776), Some(SENTINEL));
    }

    #[test]
    fn test_default_matches_explicit_construction() {
        let default = PrimitivePolynomials::default();
        let built = PrimitivePolynomials::new(DEFAULT_CAPACITY).unwrap();
        assert_eq!(default.arena, built.arena);
        assert_eq!(default.offsets, built.offsets);
    }

    #[test]
    fn test_lists_are_terminated_distinct_and_non_negative() {
        let table = PrimitivePolynomials::default();
        for degree in 1..=table.max_degree() {
            let mut seen = HashSet::new();
            let mut index = 0;
            loop {
                let value = table.get(degree, index).expect("sentinel must be reached");
                if value == SENTINEL {
                    break;
                }
                assert!(value >= 0);
                assert!(seen.insert(value), "duplicate {} at degree {}", value, degree);
                index += 1;
            }
            assert_eq!(index, table.polynomials(degree).unwrap().len());
        }
    }

    #[test]
    fn test_search_reproduces_curated_lists() {
        for degree in 1..=14u32 {
            let expected: Vec<i64> = data::CURATED[degree as usize - 1]
                .iter()
                .map(|&v| i64::from(v))
                .collect();
            assert_eq!(search::primitive_polynomials(degree), expected, "degree {}", degree);
        }
    }

    #[test]
    fn test_search_counts_beyond_curated_degrees() {
        for degree in [19usize, 20] {
            let tier = PolynomialTier::new(degree).unwrap();
            let found = search::primitive_polynomials(degree as u32);

            assert_eq!(found.len() as u64, tier.degree_count(), "degree {}", degree);
            assert!(found.windows(2).all(|w| w[0] < w[1]), "degree {}", degree);
            assert!(found.iter().all(|&p| p >= 0 && p < (1 << (degree - 1))));
        }
        assert_eq!(PolynomialTier::new(19).unwrap().degree_count(), 27_594);
        assert_eq!(PolynomialTier::new(20).unwrap().degree_count(), 24_000);
    }

    #[test]
    fn test_iter_order() {
        let table = PrimitivePolynomials::new(6).unwrap();
        let all: Vec<(usize, i64)> = table.iter().collect();
        assert_eq!(all, vec![(1, 0), (2, 1), (3, 1), (3, 2), (4, 1), (4, 4)]);
    }

    proptest! {
        #[test]
        fn prop_selects_smallest_covering_tier(capacity in 1u64..=MAX_CAPACITY) {
            let tier = PolynomialTier::for_capacity(capacity).unwrap();
            prop_assert!(tier.cumulative_count() >= capacity);
            if tier.index() > 1 {
                let previous = PolynomialTier::new(tier.index() - 1).unwrap();
                prop_assert!(previous.cumulative_count() < capacity);
            }
        }
    }
}
