//! The allocation result: a count for every catalog size.
//!
//! A distribution always carries the full catalog key set, zero-count sizes
//! included, so callers can render every catalog entry regardless of use.
//! Entries iterate in ascending size order, which is the order presentation
//! layers display them in.

use std::fmt;

use crate::catalog::PackCatalog;

/// A finished allocation: one `(size, count)` entry per catalog size.
///
/// Invariants upheld by construction:
/// - the key set equals the full (deduplicated) catalog;
/// - entries are in strictly ascending size order;
/// - counts are non-negative by type.
///
/// Feasibility (`total() >= ordered quantity`) is guaranteed by the solver,
/// not by this type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackDistribution {
    /// `(size, count)` pairs, ascending by size.
    entries: Vec<(u64, u64)>,
}

impl PackDistribution {
    /// Pair a catalog with a per-rank count vector (descending order) and
    /// produce the ascending public form.
    pub fn from_counts(catalog: &PackCatalog, counts: &[u64]) -> Self {
        debug_assert_eq!(counts.len(), catalog.len());
        let entries = catalog
            .sizes()
            .iter()
            .zip(counts)
            .map(|(&size, &count)| (size, count))
            .rev()
            .collect();
        Self { entries }
    }

    /// Total shipped items: Σ size × count.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(size, count)| size * count).sum()
    }

    /// The count for `size`, or `None` if the size is not in the catalog.
    pub fn count(&self, size: u64) -> Option<u64> {
        self.entries
            .binary_search_by_key(&size, |&(s, _)| s)
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// Number of packs used (sum of counts, not distinct sizes).
    pub fn pack_count(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Entries in ascending size order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries (equals the catalog size).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the distribution has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for PackDistribution {
    /// One `size x count` line per catalog entry, ascending.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (size, count)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{size} x {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
