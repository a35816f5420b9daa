// tests/unit_input.rs
use salescope_core::analysis::validate;
use salescope_core::error::{SalesError, ValidationError};
use salescope_core::input::parse_sales_data;
use salescope_core::types::SalesData;

const MINIMAL: &str = r#"{
    "sellers": [{"id": "s1", "first_name": "Ada", "last_name": "Lovelace"}],
    "products": [{"sku": "A", "purchase_price": 10.0}],
    "purchase_records": [
        {"seller_id": "s1", "items": [{"sku": "A", "quantity": 2, "sale_price": 15.0}]}
    ]
}"#;

#[test]
fn test_parse_minimal_payload() {
    let data = parse_sales_data(MINIMAL).unwrap();
    assert_eq!(data.sellers.len(), 1);
    assert_eq!(data.products.len(), 1);
    assert_eq!(data.purchase_records.len(), 1);
}

#[test]
fn test_absent_discount_defaults_to_zero() {
    let data = parse_sales_data(MINIMAL).unwrap();
    assert_eq!(data.purchase_records[0].items[0].discount, 0.0);
}

#[test]
fn test_top_level_must_be_object() {
    let err = parse_sales_data("[1, 2, 3]").unwrap_err();
    assert!(matches!(
        err,
        SalesError::Validation(ValidationError::NotAnObject)
    ));
}

#[test]
fn test_missing_section_rejected() {
    let err = parse_sales_data(r#"{"sellers": [], "products": []}"#).unwrap_err();
    assert!(matches!(
        err,
        SalesError::Validation(ValidationError::NotASequence("purchase_records"))
    ));
}

#[test]
fn test_non_array_section_rejected() {
    let err = parse_sales_data(
        r#"{"sellers": {}, "products": [], "purchase_records": []}"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SalesError::Validation(ValidationError::NotASequence("sellers"))
    ));
}

#[test]
fn test_wrong_field_type_is_a_json_error() {
    let text = r#"{
        "sellers": [],
        "products": [{"sku": "A", "purchase_price": "ten"}],
        "purchase_records": []
    }"#;
    assert!(matches!(parse_sales_data(text).unwrap_err(), SalesError::Json(_)));
}

#[test]
fn test_strict_validation_rejects_empty_sections() {
    let empty = SalesData {
        sellers: vec![],
        products: vec![],
        purchase_records: vec![],
    };
    assert_eq!(
        validate(&empty, true).unwrap_err(),
        ValidationError::EmptySection("sellers")
    );
    assert!(validate(&empty, false).is_ok());
}
