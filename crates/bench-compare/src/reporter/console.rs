//! Console reporter for comparison results
//!
//! Prints each series' statistics, the improvement line and the bar chart.

use anyhow::Result;
use std::fmt::Write;

use super::chart::{write_legend, BarChart};
use crate::compare::{ComparisonReport, SeriesReport};
use crate::config::ChartConfig;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a comparison for console output
    pub fn format(report: &ComparisonReport, chart: &ChartConfig) -> Result<String> {
        let mut output = String::new();
        let unit = &report.unit;

        Self::format_series(&mut output, &report.baseline, unit)?;
        writeln!(output)?;
        Self::format_series(&mut output, &report.candidate, unit)?;

        writeln!(output)?;
        match report.improvement_percent {
            Some(percent) => writeln!(
                output,
                "Performance Improvement: {:.2}% ({} over {})",
                percent, report.candidate.label, report.baseline.label
            )?,
            None => writeln!(
                output,
                "Performance Improvement: undefined (baseline mean is zero)"
            )?,
        }

        writeln!(output)?;
        writeln!(output, "Simple ASCII Visualization:")?;
        writeln!(output, "{} ({})", chart.title, unit)?;
        writeln!(output, "    |")?;

        BarChart::new(
            chart.height,
            report.baseline.summary.mean,
            report.candidate.summary.mean,
        )
        .write_rows(&mut output)?;

        writeln!(output, "     +----------------------")?;
        write_legend(
            &mut output,
            &report.baseline.chart_label,
            &report.candidate.chart_label,
        )?;

        Ok(output)
    }

    fn format_series(output: &mut String, series: &SeriesReport, unit: &str) -> Result<()> {
        let summary = &series.summary;

        writeln!(output, "{} Statistics:", series.label)?;
        writeln!(output, "  Mean: {:.6} {}", summary.mean, unit)?;
        writeln!(output, "  Median: {:.6} {}", summary.median, unit)?;
        writeln!(output, "  Min: {:.6} {}", summary.min, unit)?;
        writeln!(output, "  Max: {:.6} {}", summary.max, unit)?;
        writeln!(output, "  Std Dev: {:.6} {}", summary.std_dev, unit)?;
        Ok(())
    }
}
