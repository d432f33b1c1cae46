//! Candidate selection.

use packplan_types::{PackCatalog, PackCounts};

/// Pick the candidate with the smallest total shipped items.
///
/// Ties go to the first minimal candidate in generation order (strict `<`);
/// pack count is deliberately not a criterion here, that is the
/// consolidation pass's job.
pub(crate) fn minimal_total<'a>(
    catalog: &PackCatalog,
    candidates: &'a [PackCounts],
) -> &'a PackCounts {
    debug_assert!(!candidates.is_empty());
    let mut best = &candidates[0];
    for candidate in candidates {
        if catalog.total(candidate) < catalog.total(best) {
            best = candidate;
        }
    }
    best
}
