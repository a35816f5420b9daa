// src/analysis/rank.rs
//! Ranking, bonus assignment and report shaping.

use super::{round_cents, SellerAccumulator};
use crate::strategy::BonusStrategy;
use crate::types::{SellerReport, TopProduct};

const TOP_PRODUCTS_LIMIT: usize = 10;

/// Sorts accumulators by descending profit (ties by descending revenue,
/// remaining ties keep input order), assigns tier bonuses and derives each
/// seller's top-products list.
pub(crate) fn rank_and_annotate(
    mut accumulators: Vec<SellerAccumulator>,
    bonus: &dyn BonusStrategy,
) -> Vec<SellerReport> {
    accumulators.sort_by(|a, b| {
        b.profit
            .total_cmp(&a.profit)
            .then(b.revenue.total_cmp(&a.revenue))
    });

    let total = accumulators.len();
    accumulators
        .iter()
        .enumerate()
        .map(|(rank, seller)| {
            let percent = bonus.compute_bonus(rank, total, seller.profit);
            finalize(seller, percent)
        })
        .collect()
}

fn finalize(seller: &SellerAccumulator, bonus_percent: f64) -> SellerReport {
    SellerReport {
        seller_id: seller.seller_id.clone(),
        name: seller.name.clone(),
        revenue: round_cents(seller.revenue),
        profit: round_cents(seller.profit),
        sales_count: seller.sales_count,
        top_products: top_products(seller),
        bonus: round_cents(seller.profit * bonus_percent / 100.0),
    }
}

/// At most 10 SKUs by cumulative quantity sold, descending; equal quantities
/// keep the order the SKUs were first encountered in.
fn top_products(seller: &SellerAccumulator) -> Vec<TopProduct> {
    let mut sold: Vec<_> = seller.products_sold.iter().collect();
    sold.sort_by(|(_, a), (_, b)| {
        b.quantity.cmp(&a.quantity).then(a.order.cmp(&b.order))
    });
    sold.truncate(TOP_PRODUCTS_LIMIT);

    sold.into_iter()
        .map(|(sku, entry)| TopProduct {
            sku: sku.clone(),
            quantity: entry.quantity,
        })
        .collect()
}
