use std::time::Instant;

use denom_core::errors::DenomError;
use denom_core::{DenominationTable, RngHandle};
use denom_search::{decompose, SearchParams};
use rand::Rng;

use crate::config::AnalyzeConfig;
use crate::report::{FailureReport, TrialFailure};

/// Runs the configured number of trials against `table` and aggregates the
/// empirical failure rate.
///
/// Each trial derives its own RNG substream from the master seed, samples a
/// target uniformly in the configured range, rebuilds the active range for
/// that target, and pulls at most `result_cap` results from the search. The
/// search's laziness matters here: trials that reach the cap stop the
/// enumeration early.
pub fn run(config: &AnalyzeConfig, table: &DenominationTable) -> Result<FailureReport, DenomError> {
    config.validate()?;
    let master_seed = config.seed_policy.master_seed;
    let target_min = config.effective_target_min();
    let started_at = chrono::Utc::now().to_rfc3339();
    let clock = Instant::now();

    let mut failures = Vec::new();
    for trial in 0..config.trials {
        let mut rng = RngHandle::substream(master_seed, trial as u64);
        let target = rng.gen_range(target_min..config.target_max);
        let denoms = table.active(config.dust_floor, target);
        let params = SearchParams {
            target,
            tolerance: config.tolerance,
            max_terms: config.max_terms,
            exact_cutoff: false,
        };
        let results_found = decompose(&params, denoms)?
            .take(config.result_cap)
            .count();
        if results_found < config.min_results {
            failures.push(TrialFailure {
                trial,
                target,
                results_found,
            });
        }
    }

    let elapsed_ms = clock.elapsed().as_secs_f64() * 1_000.0;
    let failure_rate = failures.len() as f64 / config.trials as f64;
    Ok(FailureReport {
        config: config.clone(),
        master_seed,
        started_at,
        trials: config.trials,
        failures,
        failure_rate,
        success_rate: 1.0 - failure_rate,
        elapsed_ms,
        mean_trial_ms: elapsed_ms / config.trials as f64,
    })
}
