use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use denom_core::errors::{DenomError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::config::AnalyzeConfig;

/// One trial that produced fewer results than the configured minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialFailure {
    /// Zero-based trial index (equal to the RNG substream id).
    pub trial: usize,
    /// Target sampled for the trial.
    pub target: i64,
    /// Number of results the search produced before the cap.
    pub results_found: usize,
}

/// Aggregate outcome of a failure-rate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Configuration the run executed under.
    pub config: AnalyzeConfig,
    /// Master seed the trial substreams were derived from.
    pub master_seed: u64,
    /// UTC timestamp (RFC 3339) taken when the run started.
    pub started_at: String,
    /// Number of trials executed.
    pub trials: usize,
    /// Trials that fell short of `min_results`.
    pub failures: Vec<TrialFailure>,
    /// `failures / trials`, in [0, 1].
    pub failure_rate: f64,
    /// `1 - failure_rate`.
    pub success_rate: f64,
    /// Wall-clock time for the whole run, milliseconds.
    pub elapsed_ms: f64,
    /// Mean wall-clock time per trial, milliseconds.
    pub mean_trial_ms: f64,
}

impl FailureReport {
    /// Writes the report to a pretty-printed JSON file.
    pub fn write_json(&self, path: &Path) -> Result<(), DenomError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                DenomError::Config(
                    ErrorInfo::new("report-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            DenomError::Config(
                ErrorInfo::new("report-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            DenomError::Config(
                ErrorInfo::new("report-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a report from disk.
    pub fn load(path: &Path) -> Result<Self, DenomError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            DenomError::Config(
                ErrorInfo::new("report-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            DenomError::Config(
                ErrorInfo::new("report-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Writes the failure records to a CSV file.
    pub fn write_failures_csv(&self, path: &Path) -> std::io::Result<()> {
        let mut file = File::create(path)?;
        writeln!(file, "trial,target,results_found")?;
        for failure in &self.failures {
            writeln!(
                file,
                "{},{},{}",
                failure.trial, failure.target, failure.results_found
            )?;
        }
        Ok(())
    }
}
