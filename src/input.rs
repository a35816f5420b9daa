// src/input.rs
//! Input loading: reads the JSON payload and checks its top-level shape
//! before handing it to typed deserialization.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SalesError, ValidationError};
use crate::types::SalesData;

const SECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

/// Parses sales data from a JSON string.
///
/// # Errors
/// Returns `ValidationError::NotAnObject` when the top-level value is not an
/// object, `ValidationError::NotASequence` when any of the three sections is
/// missing or not an array, and `SalesError::Json` when a field inside a
/// section has the wrong type.
pub fn parse_sales_data(text: &str) -> Result<SalesData> {
    let value: Value = serde_json::from_str(text)?;

    let Some(object) = value.as_object() else {
        return Err(ValidationError::NotAnObject.into());
    };
    for section in SECTIONS {
        if !object.get(section).is_some_and(Value::is_array) {
            return Err(ValidationError::NotASequence(section).into());
        }
    }

    Ok(serde_json::from_value(value)?)
}

/// Reads and parses a sales data file.
///
/// # Errors
/// I/O failures carry the offending path; parse failures as in
/// [`parse_sales_data`].
pub fn load_sales_file(path: &Path) -> Result<SalesData> {
    let text = fs::read_to_string(path).map_err(|source| SalesError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_sales_data(&text)
}
