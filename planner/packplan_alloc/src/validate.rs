//! Request validation.
//!
//! Runs before any computation and is the only stage that can fail. The
//! quantity check comes first: a zero quantity reports
//! `InvalidOrderQuantity` regardless of what the catalog looks like.
//!
//! An empty catalog is rejected as `InvalidPackSize` alongside zero sizes;
//! with that ruled out, the search loop is total and every success is
//! feasible.

use packplan_types::AllocError;

/// Reject malformed requests; valid inputs pass through unchanged.
pub(crate) fn check(pack_sizes: &[u64], quantity: u64) -> Result<(), AllocError> {
    if quantity == 0 {
        return Err(AllocError::InvalidOrderQuantity);
    }
    if pack_sizes.is_empty() || pack_sizes.contains(&0) {
        return Err(AllocError::InvalidPackSize);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
