//! Data model for the packplan allocator.
//!
//! This crate is standalone: presentation and transport layers can depend on
//! it to render allocation results without pulling in the solver.
//!
//! # Types
//!
//! - [`PackCatalog`]: the fixed set of shippable pack sizes, deduplicated and
//!   sorted largest first, addressed by rank.
//! - [`PackCounts`]: a working per-rank count vector, parallel to the
//!   catalog's descending order. The solver clones these as snapshots.
//! - [`PackDistribution`]: the public result, one entry per catalog size in
//!   ascending order (zero-count sizes included).
//! - [`AllocError`]: the two terminal validation errors.
//!
//! # Feature Flags
//!
//! - `serde` (default off): `Serialize`/`Deserialize` on the public data
//!   model, for callers that encode results over a wire format.

mod catalog;
mod distribution;
mod error;

pub use catalog::{PackCatalog, PackCounts};
pub use distribution::PackDistribution;
pub use error::AllocError;
