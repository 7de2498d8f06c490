//! Baseline vs candidate comparison
//!
//! Ties the pipeline together: each configured series is loaded and
//! summarized, then the candidate's mean is compared against the baseline's.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::config::{Config, SeriesConfig};
use crate::error::CompareError;
use crate::samples::{load_samples, SamplesFormat};
use crate::stats::Summary;

/// A summarized input series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReport {
    /// Name used in the statistics headings
    pub label: String,
    /// Name printed under the chart bar
    pub chart_label: String,
    /// File the samples were read from
    pub source: String,
    /// Number of rows discarded while reading
    pub skipped_rows: usize,
    pub summary: Summary,
}

/// Everything a reporter needs to render one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub baseline: SeriesReport,
    pub candidate: SeriesReport,
    /// Unit of every timing value in the report
    pub unit: String,
    /// `None` when the baseline mean is zero
    pub improvement_percent: Option<f64>,
}

impl ComparisonReport {
    pub fn new(baseline: SeriesReport, candidate: SeriesReport, unit: impl Into<String>) -> Self {
        let improvement_percent =
            improvement_percent(baseline.summary.mean, candidate.summary.mean);
        Self {
            baseline,
            candidate,
            unit: unit.into(),
            improvement_percent,
        }
    }
}

/// Relative reduction of the candidate mean versus the baseline mean, in percent.
///
/// Positive when the candidate is faster. Returns `None` when the baseline
/// is zero, since the ratio is undefined.
///
/// # Examples
///
/// ```
/// use bench_compare::improvement_percent;
///
/// assert_eq!(improvement_percent(100.0, 80.0), Some(20.0));
/// assert_eq!(improvement_percent(0.0, 80.0), None);
/// ```
pub fn improvement_percent(baseline_mean: f64, candidate_mean: f64) -> Option<f64> {
    if baseline_mean == 0.0 {
        return None;
    }
    let percent = (baseline_mean - candidate_mean) / baseline_mean * 100.0;
    percent.is_finite().then_some(percent)
}

/// Load and summarize both configured series.
///
/// # Errors
///
/// Fails if either file cannot be read, or if either yields fewer than two
/// valid samples.
pub fn compare_files(config: &Config) -> Result<ComparisonReport, CompareError> {
    let baseline = summarize_series(&config.baseline, &config.input)?;
    let candidate = summarize_series(&config.candidate, &config.input)?;

    let report = ComparisonReport::new(baseline, candidate, config.input.unit.clone());
    match report.improvement_percent {
        Some(percent) => info!(improvement = percent, "Comparison complete"),
        None => warn!("Baseline mean is zero, improvement is undefined"),
    }
    Ok(report)
}

#[instrument(skip_all, fields(series = %series.label))]
fn summarize_series(
    series: &SeriesConfig,
    format: &SamplesFormat,
) -> Result<SeriesReport, CompareError> {
    let set = load_samples(&series.path, format)?;
    let summary = Summary::from_samples(&set.samples).map_err(|source| CompareError::Stats {
        label: series.label.clone(),
        source,
    })?;

    Ok(SeriesReport {
        label: series.label.clone(),
        chart_label: series.chart_label().to_string(),
        source: series.path.display().to_string(),
        skipped_rows: set.skipped_rows,
        summary,
    })
}
