use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    analyze::{self, AnalyzeArgs},
    search::{self, SearchArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "denom", about = "Bounded denomination decomposition search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one decomposition query and print the results.
    Search(SearchArgs),
    /// Run the failure-rate harness over many sampled targets.
    Analyze(AnalyzeArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Search(args) => search::run(&args),
        Command::Analyze(args) => analyze::run(&args),
    }
}
