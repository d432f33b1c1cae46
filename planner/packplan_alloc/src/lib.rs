//! Pack allocation for the packplan system.
//!
//! Given an order quantity and a catalog of shippable pack sizes, compute
//! the combination of packs that fulfills the order while minimizing the
//! total number of items shipped and, subject to that, the number of packs
//! used. Change-making with excess under a lexicographic two-objective
//! ordering.
//!
//! # Pipeline Position
//!
//! ```text
//! Request -> Validate -> Estimate -> Search -> Select -> Consolidate -> PackDistribution
//! ```
//!
//! # What Happens During Allocation
//!
//! 1. **Validation** (`validate`): zero quantity and zero/empty catalogs are
//!    rejected before any computation.
//!
//! 2. **Initial Estimate** (`estimate`): one greedy candidate built from a
//!    single pack size. An exact cover here short-circuits the rest.
//!
//! 3. **Variation Search** (`search`): a give-back loop that trades large
//!    packs for combinations of smaller ones, recording each feasible
//!    candidate as a snapshot. Stops early on an exact cover.
//!
//! 4. **Selection** (`select`): the first candidate with the smallest total
//!    shipped items wins.
//!
//! 5. **Consolidation** (`consolidate`): a single ascending pass that trades
//!    several small packs for one larger pack to cut pack count.
//!
//! The computation is pure and synchronous: no I/O, no shared state, safe to
//! call concurrently from independent requests. All intermediate state lives
//! for one call and is dropped with the result.

mod consolidate;
mod estimate;
mod search;
mod select;
mod validate;

pub use packplan_types::{AllocError, PackCatalog, PackCounts, PackDistribution};

/// Allocate packs for `quantity` items from the sizes in `pack_sizes`.
///
/// `pack_sizes` is taken raw: duplicates collapse and order is irrelevant.
/// On success the returned distribution carries every catalog size (with
/// zero counts where unused) and ships at least `quantity` items.
///
/// # Errors
///
/// - [`AllocError::InvalidOrderQuantity`] if `quantity` is zero.
/// - [`AllocError::InvalidPackSize`] if `pack_sizes` is empty or contains a
///   zero.
#[tracing::instrument(level = "debug", skip_all, fields(
    quantity = quantity,
    sizes = pack_sizes.len(),
))]
pub fn allocate(pack_sizes: &[u64], quantity: u64) -> Result<PackDistribution, AllocError> {
    validate::check(pack_sizes, quantity)?;

    let catalog = PackCatalog::new(pack_sizes);

    let initial = estimate::initial(&catalog, quantity);
    if catalog.total(&initial) == quantity {
        // Exact cover from the greedy pass alone; nothing to search for.
        tracing::debug!("initial estimate is exact");
        return Ok(PackDistribution::from_counts(&catalog, &initial));
    }

    let candidates = search::variations(&catalog, quantity, initial);
    tracing::debug!(candidates = candidates.len(), "variation search complete");

    let mut best = select::minimal_total(&catalog, &candidates).clone();
    consolidate::merge_up(&catalog, &mut best);

    Ok(PackDistribution::from_counts(&catalog, &best))
}
