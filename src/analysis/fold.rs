// src/analysis/fold.rs
//! The accumulation step: purchase records folded into seller totals.

use std::collections::HashMap;

use super::{round_cents, SellerAccumulator, SellerIndex};
use crate::strategy::RevenueStrategy;
use crate::types::{Diagnostic, DiagnosticKind, LineItem, Product, PurchaseRecord};

/// Folds every record in input order. Returns the number of records skipped
/// because their seller id matched nothing.
pub(crate) fn fold_records(
    records: &[PurchaseRecord],
    accumulators: &mut [SellerAccumulator],
    seller_index: &SellerIndex,
    product_index: &HashMap<&str, &Product>,
    revenue: &dyn RevenueStrategy,
    diagnostics: &mut Vec<Diagnostic>,
) -> usize {
    let mut skipped = 0;

    for (record_idx, record) in records.iter().enumerate() {
        let Some(&position) = seller_index.get(&record.seller_id) else {
            skipped += 1;
            diagnostics.push(Diagnostic::record_level(
                record_idx,
                DiagnosticKind::UnknownSeller,
                format!("unknown seller id `{}`, record skipped", record.seller_id),
            ));
            continue;
        };
        let seller = &mut accumulators[position];

        // One increment per record, regardless of how many items it holds
        // or how many of them resolve.
        seller.sales_count += 1;

        for item in &record.items {
            fold_item(record_idx, item, seller, product_index, revenue, diagnostics);
        }
    }

    skipped
}

fn fold_item(
    record_idx: usize,
    item: &LineItem,
    seller: &mut SellerAccumulator,
    product_index: &HashMap<&str, &Product>,
    revenue: &dyn RevenueStrategy,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Some(product) = product_index.get(item.sku.as_str()) else {
        diagnostics.push(Diagnostic::item_level(
            record_idx,
            &item.sku,
            DiagnosticKind::UnknownSku,
            format!("unknown SKU `{}`, item skipped", item.sku),
        ));
        return;
    };

    if let Some(problem) = check_numbers(item) {
        diagnostics.push(Diagnostic::item_level(
            record_idx,
            &item.sku,
            DiagnosticKind::BadNumber,
            problem,
        ));
        return;
    }

    let item_revenue = revenue.compute_revenue(item, product);
    if !item_revenue.is_finite() {
        diagnostics.push(Diagnostic::item_level(
            record_idx,
            &item.sku,
            DiagnosticKind::BadRevenue,
            format!("revenue strategy produced {item_revenue}, item skipped"),
        ));
        return;
    }

    let cost = product.purchase_price * f64::from(item.quantity);
    let item_profit = item_revenue - cost;

    // Per-addition rounding keeps totals free of accumulated float drift.
    seller.revenue = round_cents(seller.revenue + round_cents(item_revenue));
    seller.profit = round_cents(seller.profit + round_cents(item_profit));
    seller.record_sale(&item.sku, item.quantity);
}

/// In-band value checks. Typed deserialization already rejects wrong JSON
/// types, so what is left is finiteness and range.
fn check_numbers(item: &LineItem) -> Option<String> {
    if !item.sale_price.is_finite() {
        return Some(format!("sale price {} is not a number", item.sale_price));
    }
    if item.quantity == 0 {
        return Some("quantity must be a positive integer".to_string());
    }
    if !item.discount.is_finite() || !(0.0..=100.0).contains(&item.discount) {
        return Some(format!(
            "discount {} outside the 0-100 range",
            item.discount
        ));
    }
    None
}
