//! JSON reporter for comparison results

use crate::compare::ComparisonReport;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a comparison as JSON, followed by a newline
    pub fn format(report: &ComparisonReport, pretty: bool) -> Result<String> {
        let mut output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        output.push('\n');
        Ok(output)
    }
}
