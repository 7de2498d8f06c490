//! Comparison result reporting
//!
//! This module handles formatting and outputting a [`ComparisonReport`].
//!
//! # Output Formats
//!
//! - **Console**: statistics blocks, improvement line and ASCII bar chart
//! - **JSON**: machine-readable rendering of the same report
//!
//! # Example
//!
//! ```no_run
//! use bench_compare::reporter::{Reporter, OutputFormat};
//! use bench_compare::ComparisonReport;
//!
//! # fn example(report: ComparisonReport) -> anyhow::Result<()> {
//! Reporter::new(OutputFormat::Console).report(&report)?;
//! # Ok(())
//! # }
//! ```

mod chart;
mod console;
mod json;

use anyhow::Result;
use std::io::{self, Write};

use crate::compare::ComparisonReport;
use crate::config::ChartConfig;

pub use chart::BarChart;
pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for comparison reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text with an ASCII chart
    #[default]
    Console,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Reporter for comparison results
pub struct Reporter {
    format: OutputFormat,
    chart: ChartConfig,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            chart: ChartConfig::default(),
        }
    }

    /// Use the given chart settings for console output
    pub fn with_chart(mut self, chart: ChartConfig) -> Self {
        self.chart = chart;
        self
    }

    /// Report results to stdout
    pub fn report(&self, report: &ComparisonReport) -> Result<()> {
        let output = self.format_report(report)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        match self.format {
            OutputFormat::Console => ConsoleReporter::format(report, &self.chart),
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
