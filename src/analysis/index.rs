// src/analysis/index.rs
//! Lookup structures built once per analysis call.

use std::collections::HashMap;

use super::SellerIndex;
use crate::types::{Product, Seller};

/// Per-seller running totals, created zeroed before the fold and consumed
/// when the report is shaped.
#[derive(Debug, Clone)]
pub(crate) struct SellerAccumulator {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    /// SKU → cumulative quantity plus the order the SKU was first seen in,
    /// so top-product ties can fall back to encounter order.
    pub products_sold: HashMap<String, SoldQuantity>,
    next_order: usize,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SoldQuantity {
    pub order: usize,
    pub quantity: u64,
}

impl SellerAccumulator {
    fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: HashMap::new(),
            next_order: 0,
        }
    }

    /// Adds `quantity` to the SKU's counter, registering the SKU on first
    /// occurrence.
    pub fn record_sale(&mut self, sku: &str, quantity: u32) {
        if let Some(entry) = self.products_sold.get_mut(sku) {
            entry.quantity += u64::from(quantity);
        } else {
            self.products_sold.insert(
                sku.to_string(),
                SoldQuantity {
                    order: self.next_order,
                    quantity: u64::from(quantity),
                },
            );
            self.next_order += 1;
        }
    }
}

/// One zeroed accumulator per input seller, in input order, plus an id →
/// position map. Duplicate ids overwrite earlier positions (last-write-wins;
/// uniqueness is the data contract, not enforced here).
pub(crate) fn build_seller_index(
    sellers: &[Seller],
) -> (Vec<SellerAccumulator>, SellerIndex) {
    let accumulators: Vec<SellerAccumulator> =
        sellers.iter().map(SellerAccumulator::new).collect();

    let mut index = HashMap::with_capacity(sellers.len());
    for (position, seller) in sellers.iter().enumerate() {
        index.insert(seller.id.clone(), position);
    }

    (accumulators, index)
}

/// SKU → product card, last-write-wins on duplicate SKUs.
pub(crate) fn build_product_index(products: &[Product]) -> HashMap<&str, &Product> {
    products.iter().map(|p| (p.sku.as_str(), p)).collect()
}
