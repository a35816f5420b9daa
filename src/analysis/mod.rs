// src/analysis/mod.rs
//! The aggregation pipeline: validate → index → fold → rank → report.
//!
//! Everything here is synchronous and local to one call. No state survives
//! an invocation, so concurrent calls with disjoint inputs are independent.

mod fold;
mod index;
mod rank;

use std::collections::HashMap;

use crate::error::{SalesError, ValidationError};
use crate::strategy::{BonusStrategy, RevenueStrategy};
use crate::types::{AnalysisReport, SalesData};

pub(crate) use index::SellerAccumulator;

/// Strategies and toggles for one analysis run.
pub struct AnalyzerOptions<'a> {
    pub revenue: &'a dyn RevenueStrategy,
    pub bonus: &'a dyn BonusStrategy,
    /// Reject empty input collections instead of producing an empty report.
    pub strict: bool,
}

/// Checks the input collections before any processing.
///
/// # Errors
/// In strict mode, returns `ValidationError::EmptySection` when any of the
/// three collections is empty.
pub fn validate(data: &SalesData, strict: bool) -> Result<(), ValidationError> {
    if !strict {
        return Ok(());
    }
    if data.sellers.is_empty() {
        return Err(ValidationError::EmptySection("sellers"));
    }
    if data.products.is_empty() {
        return Err(ValidationError::EmptySection("products"));
    }
    if data.purchase_records.is_empty() {
        return Err(ValidationError::EmptySection("purchase_records"));
    }
    Ok(())
}

/// Runs the full pipeline over fully materialized input.
///
/// Purchase records referencing an unknown seller are skipped whole; line
/// items referencing an unknown SKU or carrying unusable numbers are skipped
/// individually. Both show up in the report's diagnostics, never as errors.
///
/// # Errors
/// Returns a validation error in strict mode when a collection is empty.
pub fn analyze_sales(
    data: &SalesData,
    options: &AnalyzerOptions,
) -> Result<AnalysisReport, SalesError> {
    validate(data, options.strict)?;

    let (mut accumulators, seller_index) = index::build_seller_index(&data.sellers);
    let product_index = index::build_product_index(&data.products);

    let mut diagnostics = Vec::new();
    let records_skipped = fold::fold_records(
        &data.purchase_records,
        &mut accumulators,
        &seller_index,
        &product_index,
        options.revenue,
        &mut diagnostics,
    );

    let sellers = rank::rank_and_annotate(accumulators, options.bonus);

    Ok(AnalysisReport {
        sellers,
        diagnostics,
        records_total: data.purchase_records.len(),
        records_skipped,
    })
}

/// Rounds to 2 decimal places, half away from zero.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) type SellerIndex = HashMap<String, usize>;

#[cfg(test)]
mod tests {
    use super::round_cents;

    #[test]
    fn test_round_cents_half_away_from_zero() {
        // 0.125 is exactly representable, so the half-cent is a true tie.
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
        assert_eq!(round_cents(2.344), 2.34);
        assert_eq!(round_cents(7.0), 7.0);
    }
}
