// src/bin/salescope.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use salescope_core::analysis::{analyze_sales, AnalyzerOptions};
use salescope_core::cli::Cli;
use salescope_core::config::Config;
use salescope_core::input;
use salescope_core::reporting;
use salescope_core::strategy::{revenue_strategy_by_name, RankTierBonus};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    let strategy_name = cli
        .revenue
        .unwrap_or(config.preferences.revenue_strategy);
    let revenue = revenue_strategy_by_name(&strategy_name)?;
    let options = AnalyzerOptions {
        revenue: revenue.as_ref(),
        bonus: &RankTierBonus,
        strict: cli.strict || config.preferences.strict,
    };

    let data = input::load_sales_file(&cli.input)?;
    let report = analyze_sales(&data, &options)?;

    if cli.json {
        println!("{}", reporting::json::render(&report)?);
    } else {
        reporting::console::print_report(&report);
    }
    Ok(())
}
