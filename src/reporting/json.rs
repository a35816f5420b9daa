// src/reporting/json.rs
use crate::error::Result;
use crate::types::AnalysisReport;

/// Serializes the full report, diagnostics included, as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
