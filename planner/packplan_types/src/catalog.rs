//! The catalog of shippable pack sizes.
//!
//! Sizes live in one deduplicated array sorted largest first and are
//! addressed by rank. The solver's branch decisions depend on size order, so
//! the order is fixed here once instead of being re-derived (or left to an
//! unordered container) at each stage.

use smallvec::SmallVec;

/// Per-rank pack counts, parallel to [`PackCatalog::sizes`].
///
/// Catalogs are small in practice, so counts stay inline; the solver clones
/// these at every candidate-recording point.
pub type PackCounts = SmallVec<[u64; 8]>;

/// The fixed set of shippable pack sizes, sorted largest first.
///
/// Built from a raw caller-supplied list: duplicates collapse to a single
/// entry and input order is irrelevant. Construction does not check
/// positivity; the allocator's validation stage rejects zero sizes and empty
/// catalogs before a catalog is ever built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackCatalog {
    /// Deduplicated sizes in descending order; rank 0 is the largest.
    sizes: Vec<u64>,
}

impl PackCatalog {
    /// Build a catalog from a raw size list (duplicates collapse).
    pub fn new(raw: &[u64]) -> Self {
        let mut sizes = raw.to_vec();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();
        Self { sizes }
    }

    /// All sizes, largest first.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// The size at `rank` (0 is the largest).
    ///
    /// # Panics
    ///
    /// Panics if `rank` is out of bounds.
    pub fn size_at(&self, rank: usize) -> u64 {
        self.sizes[rank]
    }

    /// Number of distinct sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the catalog has no sizes.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// A fresh all-zero count vector, parallel to this catalog.
    pub fn zero_counts(&self) -> PackCounts {
        SmallVec::from_elem(0, self.sizes.len())
    }

    /// Total shipped items for `counts`: Σ size × count over all ranks.
    ///
    /// `counts` must be parallel to this catalog's descending order.
    pub fn total(&self, counts: &[u64]) -> u64 {
        debug_assert_eq!(counts.len(), self.sizes.len());
        self.sizes
            .iter()
            .zip(counts)
            .map(|(size, count)| size * count)
            .sum()
    }
}

#[cfg(test)]
mod tests;
