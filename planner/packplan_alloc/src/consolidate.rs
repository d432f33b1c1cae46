//! Pack-count consolidation.
//!
//! The selector minimizes shipped items only; a winning candidate can still
//! use many small packs where one larger pack would do. This pass walks the
//! sizes in ascending order once and trades a batch of small packs for a
//! single pack of the next size up when the trade is safe to express.
//!
//! The trade is volume-based, not proven total-preserving: when the larger
//! size is not an exact multiple of the smaller, the shipped total can
//! shift. That tension with the minimize-total-first objective is inherited
//! from the original behavior and pinned by tests rather than resolved here.

use packplan_types::{PackCatalog, PackCounts};

/// Merge small packs upward, in place. Single ascending pass, no re-scan.
///
/// For each size (except the largest), the merge fires when all hold:
/// - the size is used more than once;
/// - the next size up is at least twice as large (integer ratio);
/// - the used volume at this size covers the next size up.
///
/// The next size up gains one pack and this size loses `ratio` packs. The
/// guard `count * size >= next` implies `count >= next / size`, so the
/// subtraction cannot underflow.
pub(crate) fn merge_up(catalog: &PackCatalog, counts: &mut PackCounts) {
    let sizes = catalog.sizes();

    // Ranks are descending; walking them from the back visits sizes in
    // ascending order. `rank` is the smaller size, `rank - 1` the next up.
    for rank in (1..sizes.len()).rev() {
        let size = sizes[rank];
        let next = sizes[rank - 1];
        let ratio = next / size;

        if counts[rank] > 1 && ratio >= 2 && counts[rank] * size >= next {
            counts[rank - 1] += 1;
            counts[rank] -= ratio;
        }
    }
}
