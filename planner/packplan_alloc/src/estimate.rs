//! The initial greedy estimate.
//!
//! One left-to-right pass over the descending sizes that commits to a single
//! pack size. It can over-ship badly on awkward catalogs; the variation
//! search refines it with mixed-size candidates afterwards.

use packplan_types::{PackCatalog, PackCounts};

/// Build the one-size greedy candidate for `quantity`.
///
/// Scanning ranks from the largest size down:
///
/// - skip a size when the order also fits under the next, smaller size (that
///   one will cover it more tightly);
/// - at the smallest size, absorb any smaller remainder with a single pack
///   even if it over-ships (there is nothing smaller to go to);
/// - otherwise take `quantity / size` packs, plus one more when a remainder
///   is left, and stop.
///
/// Every rank not assigned stays zero.
pub(crate) fn initial(catalog: &PackCatalog, quantity: u64) -> PackCounts {
    let sizes = catalog.sizes();
    let mut counts = catalog.zero_counts();

    for (rank, &size) in sizes.iter().enumerate() {
        let last = rank == sizes.len() - 1;

        if !last && quantity < size && quantity <= sizes[rank + 1] {
            continue;
        }

        if last && quantity < size {
            counts[rank] += 1;
            continue;
        }

        let quotient = quantity / size;
        let remainder = quantity % size;

        counts[rank] = quotient;
        if remainder > 0 {
            counts[rank] += 1;
        }

        break;
    }

    counts
}
