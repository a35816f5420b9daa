// tests/integration_core.rs
use std::fs;

use tempfile::TempDir;

use salescope_core::analysis::{analyze_sales, AnalyzerOptions};
use salescope_core::error::SalesError;
use salescope_core::input::load_sales_file;
use salescope_core::reporting;
use salescope_core::strategy::{DiscountedRevenue, RankTierBonus};

const PAYLOAD: &str = r#"{
    "sellers": [
        {"id": "s1", "first_name": "Ada", "last_name": "Lovelace"},
        {"id": "s2", "first_name": "Alan", "last_name": "Turing"}
    ],
    "products": [
        {"sku": "A", "purchase_price": 10.0}
    ],
    "purchase_records": [
        {"seller_id": "s1", "items": [{"sku": "A", "quantity": 5, "sale_price": 20.0}]},
        {"seller_id": "s2", "items": [{"sku": "A", "quantity": 1, "sale_price": 15.0}]},
        {"seller_id": "ghost", "items": [{"sku": "A", "quantity": 1, "sale_price": 15.0}]}
    ]
}"#;

#[test]
fn test_file_to_json_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sales.json");
    fs::write(&path, PAYLOAD).unwrap();

    let data = load_sales_file(&path).unwrap();
    let options = AnalyzerOptions {
        revenue: &DiscountedRevenue,
        bonus: &RankTierBonus,
        strict: true,
    };
    let report = analyze_sales(&data, &options).unwrap();

    assert_eq!(report.sellers.len(), 2);
    assert_eq!(report.records_skipped, 1);

    let json = reporting::json::render(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["sellers"][0]["seller_id"], "s1");
    assert_eq!(parsed["sellers"][0]["bonus"], 7.5);
    assert_eq!(parsed["records_total"], 3);
    assert_eq!(parsed["diagnostics"][0]["kind"], "unknown_seller");
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let err = load_sales_file(&path).unwrap_err();
    match err {
        SalesError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected I/O error, got {other}"),
    }
}
