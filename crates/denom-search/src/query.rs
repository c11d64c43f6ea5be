use denom_core::errors::{DenomError, ErrorInfo};
use denom_core::{MAX_DENOMINATIONS, MAX_PATH_TERMS};
use serde::{Deserialize, Serialize};

/// Parameters of one decomposition query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Amount to decompose.
    pub target: i64,
    /// Maximum acceptable shortfall between a result sum and the target,
    /// inclusive. Overshoot is never accepted.
    #[serde(default)]
    pub tolerance: i64,
    /// Maximum number of terms per decomposition, 1 through 8.
    #[serde(default = "default_max_terms")]
    pub max_terms: u8,
    /// When set, an exact hit stops every open sibling group below the
    /// top level, bounding output volume at the cost of completeness.
    /// The halt is immediate: branches still open when the hit occurs are
    /// abandoned along with their unstarted siblings, and only the
    /// top-level loop goes on to try the remaining starting indices.
    #[serde(default)]
    pub exact_cutoff: bool,
}

fn default_max_terms() -> u8 {
    MAX_PATH_TERMS as u8
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            target: 0,
            tolerance: 0,
            max_terms: default_max_terms(),
            exact_cutoff: false,
        }
    }
}

impl SearchParams {
    /// Validates the parameter ranges mandated by the path encoding.
    pub fn validate(&self) -> Result<(), DenomError> {
        if self.target < 0 {
            return Err(DenomError::Query(
                ErrorInfo::new("query-target", "target must be non-negative")
                    .with_context("target", self.target.to_string()),
            ));
        }
        if self.tolerance < 0 {
            return Err(DenomError::Query(
                ErrorInfo::new("query-tolerance", "tolerance must be non-negative")
                    .with_context("tolerance", self.tolerance.to_string()),
            ));
        }
        if self.max_terms == 0 || self.max_terms as usize > MAX_PATH_TERMS {
            return Err(DenomError::Query(
                ErrorInfo::new("query-max-terms", "max_terms must lie in 1..=8")
                    .with_context("max_terms", self.max_terms.to_string())
                    .with_hint("the path encoding packs one byte per term into a u64"),
            ));
        }
        Ok(())
    }
}

/// Validates the active denomination sequence handed to [`crate::decompose`]:
/// strictly descending, unique, positive, at most 256 entries. An empty
/// sequence is allowed and makes the search yield nothing.
pub fn validate_descending(denoms: &[i64]) -> Result<(), DenomError> {
    if denoms.len() > MAX_DENOMINATIONS {
        return Err(DenomError::Table(
            ErrorInfo::new("table-capacity", "active sequence too large")
                .with_context("length", denoms.len().to_string())
                .with_context("cap", MAX_DENOMINATIONS.to_string()),
        ));
    }
    for (position, window) in denoms.windows(2).enumerate() {
        if window[0] <= window[1] {
            return Err(DenomError::Query(
                ErrorInfo::new(
                    "query-order",
                    "denominations must be strictly descending and unique",
                )
                .with_context("position", (position + 1).to_string())
                .with_context("value", window[1].to_string()),
            ));
        }
    }
    if let Some(&last) = denoms.last() {
        if last <= 0 {
            return Err(DenomError::Query(
                ErrorInfo::new("query-sign", "denominations must be positive")
                    .with_context("value", last.to_string()),
            ));
        }
    }
    Ok(())
}
