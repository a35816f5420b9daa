// src/types.rs
use serde::{Deserialize, Serialize};

/// Immutable seller reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Seller {
    /// Display name: first and last name joined by a single space,
    /// empty parts omitted.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|p| !p.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Immutable product reference data, keyed by SKU.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub purchase_price: f64,
}

/// One line of a purchase record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    pub sale_price: f64,
    /// Discount percentage, 0–100. Absent means no discount.
    #[serde(default)]
    pub discount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub items: Vec<LineItem>,
}

/// The three input collections, fully materialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// One entry of a seller's top-products list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Final per-seller statistics, ordered by rank in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

/// Why a record or item was skipped during the fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnknownSeller,
    UnknownSku,
    BadNumber,
    BadRevenue,
}

/// A single skipped record or line item. Data-quality notes, never fatal.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Zero-based index of the purchase record in the input.
    pub record: usize,
    pub sku: Option<String>,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn record_level(record: usize, kind: DiagnosticKind, message: String) -> Self {
        Self { record, sku: None, kind, message }
    }

    #[must_use]
    pub fn item_level(record: usize, sku: &str, kind: DiagnosticKind, message: String) -> Self {
        Self { record, sku: Some(sku.to_string()), kind, message }
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisReport {
    pub sellers: Vec<SellerReport>,
    pub diagnostics: Vec<Diagnostic>,
    pub records_total: usize,
    pub records_skipped: usize,
}

impl AnalysisReport {
    /// Returns true if any record or item was skipped.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of records that were folded into seller totals.
    #[must_use]
    pub fn records_processed(&self) -> usize {
        self.records_total - self.records_skipped
    }
}
