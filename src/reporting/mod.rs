// src/reporting/mod.rs
//! Report rendering: human-readable console output and JSON.

pub mod console;
pub mod json;
