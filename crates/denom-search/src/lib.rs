#![deny(missing_docs)]

//! Pruned depth-bounded enumeration of denomination decompositions.
//!
//! Given a target amount, a shortfall tolerance and a term budget, the search
//! lazily yields every canonical way to write the target as a sum of values
//! drawn (with repetition) from a descending denomination sequence. Canonical
//! means the chosen indices are non-decreasing, so each multiset of values is
//! produced exactly once.

/// Search parameter schema and input validation.
pub mod query;
pub mod search;

pub use query::SearchParams;
pub use search::{decompose, DecompositionResult, Decompositions};
