use denom_core::errors::{DenomError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a failure-rate run.
///
/// Historically these were hard-coded constants in the analysis routine; here
/// every knob is an explicit field with a default matching the historical
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeConfig {
    /// Number of sampled targets.
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Denominations at or below this value are excluded from every trial.
    #[serde(default = "default_dust_floor")]
    pub dust_floor: i64,
    /// Shortfall tolerance passed to each search, inclusive.
    #[serde(default = "default_tolerance")]
    pub tolerance: i64,
    /// Term budget passed to each search.
    #[serde(default = "default_max_terms")]
    pub max_terms: u8,
    /// A trial fails when the search yields fewer results than this.
    #[serde(default = "default_min_results")]
    pub min_results: usize,
    /// At most this many results are pulled per trial before stopping.
    #[serde(default = "default_result_cap")]
    pub result_cap: usize,
    /// Lower bound of the sampled target range; defaults to the dust floor.
    #[serde(default)]
    pub target_min: Option<i64>,
    /// Exclusive upper bound of the sampled target range.
    #[serde(default = "default_target_max")]
    pub target_max: i64,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
}

fn default_trials() -> usize {
    10_000
}

fn default_dust_floor() -> i64 {
    500
}

fn default_tolerance() -> i64 {
    100
}

fn default_max_terms() -> u8 {
    8
}

fn default_min_results() -> usize {
    50
}

fn default_result_cap() -> usize {
    50
}

fn default_target_max() -> i64 {
    4_300_000_000
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            dust_floor: default_dust_floor(),
            tolerance: default_tolerance(),
            max_terms: default_max_terms(),
            min_results: default_min_results(),
            result_cap: default_result_cap(),
            target_min: None,
            target_max: default_target_max(),
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl AnalyzeConfig {
    /// Parses a YAML configuration document; missing fields take defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, DenomError> {
        serde_yaml::from_str(contents).map_err(|err| {
            DenomError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })
    }

    /// Effective lower bound of the sampled target range.
    pub fn effective_target_min(&self) -> i64 {
        self.target_min.unwrap_or(self.dust_floor).max(1)
    }

    /// Checks the cross-field constraints the trial loop relies on.
    pub fn validate(&self) -> Result<(), DenomError> {
        if self.trials == 0 {
            return Err(DenomError::Config(ErrorInfo::new(
                "config-trials",
                "at least one trial is required",
            )));
        }
        if self.dust_floor < 0 || self.tolerance < 0 {
            return Err(DenomError::Config(
                ErrorInfo::new("config-sign", "dust_floor and tolerance must be non-negative")
                    .with_context("dust_floor", self.dust_floor.to_string())
                    .with_context("tolerance", self.tolerance.to_string()),
            ));
        }
        if self.effective_target_min() >= self.target_max {
            return Err(DenomError::Config(
                ErrorInfo::new("config-target-range", "target range is empty")
                    .with_context("target_min", self.effective_target_min().to_string())
                    .with_context("target_max", self.target_max.to_string()),
            ));
        }
        if self.min_results > self.result_cap {
            return Err(DenomError::Config(
                ErrorInfo::new(
                    "config-min-results",
                    "min_results cannot exceed result_cap",
                )
                .with_context("min_results", self.min_results.to_string())
                .with_context("result_cap", self.result_cap.to_string())
                .with_hint("the trial loop stops pulling results at result_cap"),
            ));
        }
        Ok(())
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed; each trial runs on a derived substream.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label recorded in reports for bookkeeping.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x0DE0_0DE0_0DE0_0DE0_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}
