// src/strategy.rs
//! Injectable revenue and bonus calculators.
//!
//! The aggregator never hardcodes a formula: it is handed one implementation
//! of each trait and applies it per line item (revenue) and per ranked
//! seller (bonus percentage).

use crate::error::ValidationError;
use crate::types::{LineItem, Product};

/// Per-item revenue formula.
pub trait RevenueStrategy {
    /// Revenue for one line item given its product card. A non-finite
    /// result makes the fold skip the item.
    fn compute_revenue(&self, item: &LineItem, product: &Product) -> f64;
}

/// Rank-based bonus percentage.
pub trait BonusStrategy {
    /// Bonus percentage for the seller at zero-based `rank` out of `total`
    /// sellers, given the seller's total profit.
    fn compute_bonus(&self, rank: usize, total: usize, profit: f64) -> f64;
}

/// Canonical formula: `sale_price * quantity * (1 - discount / 100)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountedRevenue;

impl RevenueStrategy for DiscountedRevenue {
    fn compute_revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let quantity = f64::from(item.quantity);
        item.sale_price * quantity * (1.0 - item.discount / 100.0)
    }
}

/// Margin variant: `(sale_price - purchase_price) * quantity`, ignoring
/// discounts. Falls back to 0 when any operand is not a finite number.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarginRevenue;

impl RevenueStrategy for MarginRevenue {
    fn compute_revenue(&self, item: &LineItem, product: &Product) -> f64 {
        if !item.sale_price.is_finite() || !product.purchase_price.is_finite() {
            return 0.0;
        }
        let per_unit = item.sale_price - product.purchase_price;
        per_unit * f64::from(item.quantity)
    }
}

/// Canonical tiering: first place 15%, second and third 10%, last place 0%,
/// everyone else 5%. With a single seller the first-place rule wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankTierBonus;

impl BonusStrategy for RankTierBonus {
    fn compute_bonus(&self, rank: usize, total: usize, _profit: f64) -> f64 {
        if rank == 0 {
            15.0
        } else if rank == 1 || rank == 2 {
            10.0
        } else if rank + 1 == total {
            0.0
        } else {
            5.0
        }
    }
}

/// Resolves a revenue strategy by its user-facing name.
///
/// # Errors
/// Returns `ValidationError::UnknownStrategy` for names other than
/// `discounted` or `margin`.
pub fn revenue_strategy_by_name(
    name: &str,
) -> Result<Box<dyn RevenueStrategy>, ValidationError> {
    match name {
        "discounted" => Ok(Box::new(DiscountedRevenue)),
        "margin" => Ok(Box::new(MarginRevenue)),
        other => Err(ValidationError::UnknownStrategy(other.to_string())),
    }
}
