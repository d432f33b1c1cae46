//! Validation errors for allocation requests.

/// The two terminal validation failures.
///
/// Both are surfaced synchronously before any computation; there is no retry
/// and no partial result. No other failure mode exists in the solver: for
/// any non-empty catalog of positive sizes the search terminates with a
/// feasible distribution.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AllocError {
    /// The order quantity was zero.
    #[error("order quantity must be greater than zero")]
    InvalidOrderQuantity,

    /// The catalog was empty or contained a zero size.
    #[error("every pack size must be greater than zero")]
    InvalidPackSize,
}
