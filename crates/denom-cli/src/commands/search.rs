use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use denom_search::{decompose, SearchParams};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Amount to decompose.
    #[arg(long)]
    pub target: i64,
    /// Maximum acceptable shortfall, inclusive.
    #[arg(long, default_value_t = 0)]
    pub tolerance: i64,
    /// Maximum number of terms (1 through 8).
    #[arg(long, default_value_t = 8)]
    pub max_terms: u8,
    /// Exclude denominations at or below this value.
    #[arg(long, default_value_t = 0)]
    pub dust: i64,
    /// Print at most this many decompositions.
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
    /// Stop sibling branches once an exact match is found.
    #[arg(long)]
    pub exact_cutoff: bool,
    /// JSON file holding an ascending denomination table; defaults to the
    /// standard table.
    #[arg(long)]
    pub table: Option<PathBuf>,
}

pub fn run(args: &SearchArgs) -> Result<(), Box<dyn Error>> {
    let table = super::load_table(args.table.as_deref())?;
    let denoms = table.active(args.dust, args.target);

    let params = SearchParams {
        target: args.target,
        tolerance: args.tolerance,
        max_terms: args.max_terms,
        exact_cutoff: args.exact_cutoff,
    };
    let results: Vec<_> = decompose(&params, denoms)?.take(args.limit).collect();

    for result in &results {
        let rendered: Vec<String> = result
            .values(denoms)
            .iter()
            .map(|value| value.to_string())
            .collect();
        println!("Sum: {} -> [{}]", result.sum, rendered.join(", "));
    }
    println!(
        "{} decomposition(s) of {} within tolerance {}",
        results.len(),
        args.target,
        args.tolerance
    );
    Ok(())
}
