// src/reporting/console.rs
use colored::Colorize;

use crate::types::{AnalysisReport, Diagnostic, SellerReport};

/// Prints the ranked seller table, any data-quality diagnostics and a
/// summary line to stdout.
pub fn print_report(report: &AnalysisReport) {
    println!("{}", "SALES PERFORMANCE".bold());

    if report.sellers.is_empty() {
        println!("  {}", "no sellers in input".dimmed());
    }
    for (rank, seller) in report.sellers.iter().enumerate() {
        print_seller(rank, seller);
    }

    if report.has_diagnostics() {
        println!();
        println!("{}", "Diagnostics:".yellow().bold());
        for diagnostic in &report.diagnostics {
            print_diagnostic(diagnostic);
        }
    }

    println!();
    print_summary(report);
}

fn print_seller(rank: usize, seller: &SellerReport) {
    let place = format!("#{}", rank + 1);
    let place = match rank {
        0 => place.green().bold(),
        1 | 2 => place.cyan(),
        _ => place.normal(),
    };

    println!(
        "  {place} {:<24} revenue {:>10.2}  profit {:>10.2}  bonus {:>8.2}  ({})",
        seller.name,
        seller.revenue,
        seller.profit,
        seller.bonus,
        pluralize(seller.sales_count, "sale"),
    );

    if !seller.top_products.is_empty() {
        let top: Vec<String> = seller
            .top_products
            .iter()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .collect();
        println!("      {} {}", "top:".dimmed(), top.join(", ").dimmed());
    }
}

fn print_diagnostic(diagnostic: &Diagnostic) {
    let location = match &diagnostic.sku {
        Some(sku) => format!("record {} [{sku}]", diagnostic.record),
        None => format!("record {}", diagnostic.record),
    };
    println!("  {} {}", location.yellow(), diagnostic.message);
}

fn print_summary(report: &AnalysisReport) {
    let line = format!(
        "{} in input, {} processed, {}, {}",
        pluralize(report.records_total as u64, "record"),
        report.records_processed(),
        pluralize(report.sellers.len() as u64, "seller"),
        pluralize(report.diagnostics.len() as u64, "diagnostic"),
    );
    println!("{}", line.dimmed());
}

fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
