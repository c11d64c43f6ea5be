use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use denom_harness::{run as run_harness, AnalyzeConfig};

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// YAML configuration for the harness; defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory for report.json and failures.csv.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Overrides the configured master seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// JSON file holding an ascending denomination table; defaults to the
    /// standard table.
    #[arg(long)]
    pub table: Option<PathBuf>,
}

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => AnalyzeConfig::from_yaml(&fs::read_to_string(path)?)?,
        None => AnalyzeConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed_policy.master_seed = seed;
    }
    let table = super::load_table(args.table.as_deref())?;

    let report = run_harness(&config, &table)?;

    for failure in &report.failures {
        println!(
            "trial = {}  target = {}  results = {}",
            failure.trial, failure.target, failure.results_found
        );
    }
    println!("Failure rate = {}", report.failure_rate);
    println!("Success rate = {}", report.success_rate);
    println!(
        "Finished after {:.3}ms, average {:.6}ms per trial",
        report.elapsed_ms, report.mean_trial_ms
    );

    if let Some(out) = &args.out {
        fs::create_dir_all(out)?;
        report.write_json(&out.join("report.json"))?;
        report.write_failures_csv(&out.join("failures.csv"))?;
    }
    Ok(())
}
