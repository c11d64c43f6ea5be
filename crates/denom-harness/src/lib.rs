#![deny(missing_docs)]

//! Empirical failure-rate analysis for the decomposition search.
//!
//! The pruning bound in `denom-search` is justified analytically but the only
//! end-to-end check that it does not over-prune is statistical: sample many
//! random targets, run the search, and measure how often it produces fewer
//! than a required minimum of decompositions. The rate this harness reports
//! is a measurement under the configured parameter ranges, not a proof.

/// Trial configuration schema and defaults.
pub mod config;
/// Report payloads and their JSON/CSV writers.
pub mod report;
/// The trial loop.
pub mod runner;

pub use config::{AnalyzeConfig, SeedPolicy};
pub use report::{FailureReport, TrialFailure};
pub use runner::run;
