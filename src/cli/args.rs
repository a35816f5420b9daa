// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "salescope", version, about = "Seller performance reports from purchase records")]
pub struct Cli {
    /// Sales data file: JSON with sellers, products and purchase_records
    pub input: PathBuf,
    /// Print the report as JSON instead of the formatted table
    #[arg(long)]
    pub json: bool,
    /// Fail when any input collection is empty
    #[arg(long)]
    pub strict: bool,
    /// Revenue strategy to apply per line item
    #[arg(long, value_name = "NAME")]
    pub revenue: Option<String>,
}
