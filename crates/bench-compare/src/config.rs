//! Configuration for a comparison run
//!
//! This module provides TOML-based configuration naming the two sample
//! files, how to read them, and how to draw the chart. Every section is
//! optional and defaults to the virtual-call vs function-pointer comparison.

use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::samples::SamplesFormat;

/// Default file holding the baseline samples
pub const DEFAULT_BASELINE_PATH: &str = "benchmark_virtual.csv";
/// Default file holding the candidate samples
pub const DEFAULT_CANDIDATE_PATH: &str = "benchmark_function_ptr.csv";

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Series the improvement is measured against
    #[serde(default = "SeriesConfig::default_baseline")]
    pub baseline: SeriesConfig,
    /// Series being evaluated
    #[serde(default = "SeriesConfig::default_candidate")]
    pub candidate: SeriesConfig,
    /// Layout shared by both sample files
    #[serde(default)]
    pub input: SamplesFormat,
    /// ASCII chart settings
    #[serde(default)]
    pub chart: ChartConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baseline: SeriesConfig::default_baseline(),
            candidate: SeriesConfig::default_candidate(),
            input: SamplesFormat::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - A value is out of range (see [`Config::validate`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bench_compare::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("compare.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use bench_compare::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let toml = r#"
    ///     [chart]
    ///     height = 10
    /// "#;
    /// let config = Config::from_str(toml)?;
    /// assert_eq!(config.chart.height, 10);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no run could succeed with.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.chart.height > 0, "chart.height must be at least 1");
        ensure!(
            self.input.delimiter.is_ascii(),
            "input.delimiter must be a single ASCII character"
        );
        ensure!(
            !self.baseline.label.trim().is_empty() && !self.candidate.label.trim().is_empty(),
            "series labels must not be empty"
        );
        Ok(())
    }
}

/// One input series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Name used in the statistics headings
    pub label: String,
    /// Name printed under the chart bars (defaults to `label`)
    #[serde(default)]
    pub chart_label: Option<String>,
    /// Samples file
    pub path: PathBuf,
}

impl SeriesConfig {
    fn default_baseline() -> Self {
        Self {
            label: "Virtual Functions".to_string(),
            chart_label: Some("Virtual Function".to_string()),
            path: PathBuf::from(DEFAULT_BASELINE_PATH),
        }
    }

    fn default_candidate() -> Self {
        Self {
            label: "Function Pointers".to_string(),
            chart_label: None,
            path: PathBuf::from(DEFAULT_CANDIDATE_PATH),
        }
    }

    /// Label to print under the chart bar
    pub fn chart_label(&self) -> &str {
        self.chart_label.as_deref().unwrap_or(&self.label)
    }
}

/// ASCII chart configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartConfig {
    /// Chart heading, printed with the sample unit (default: "Average Update Time")
    #[serde(default = "default_chart_title")]
    pub title: String,
    /// Number of vertical levels (default: 20)
    #[serde(default = "default_chart_height")]
    pub height: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_chart_title(),
            height: default_chart_height(),
        }
    }
}

fn default_chart_title() -> String {
    "Average Update Time".to_string()
}

fn default_chart_height() -> usize {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();

        assert_eq!(config.baseline.label, "Virtual Functions");
        assert_eq!(config.baseline.chart_label(), "Virtual Function");
        assert_eq!(config.baseline.path, PathBuf::from("benchmark_virtual.csv"));
        assert_eq!(config.candidate.label, "Function Pointers");
        assert_eq!(config.candidate.chart_label(), "Function Pointers");
        assert_eq!(config.candidate.path, PathBuf::from("benchmark_function_ptr.csv"));
        assert_eq!(config.input, SamplesFormat::default());
        assert_eq!(config.chart, ChartConfig::default());
    }

    #[test]
    fn test_default_matches_empty_toml() {
        let parsed = Config::from_str("").unwrap();
        let default = Config::default();

        assert_eq!(parsed.baseline, default.baseline);
        assert_eq!(parsed.candidate, default.candidate);
        assert_eq!(parsed.chart.height, 20);
        assert_eq!(parsed.chart.title, "Average Update Time");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [baseline]
            label = "Mutex"
            chart_label = "Mutex Lock"
            path = "runs/mutex.csv"

            [candidate]
            label = "Spin Lock"
            path = "runs/spin.csv"

            [input]
            delimiter = ";"
            has_header = false
            value_column = 3
            unit = "ns"

            [chart]
            title = "Lock Acquire Time"
            height = 10
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.baseline.label, "Mutex");
        assert_eq!(config.baseline.chart_label(), "Mutex Lock");
        assert_eq!(config.baseline.path, PathBuf::from("runs/mutex.csv"));
        assert_eq!(config.candidate.chart_label(), "Spin Lock");
        assert_eq!(config.input.delimiter, ';');
        assert!(!config.input.has_header);
        assert_eq!(config.input.value_column, 3);
        assert_eq!(config.input.unit, "ns");
        assert_eq!(config.chart.title, "Lock Acquire Time");
        assert_eq!(config.chart.height, 10);
    }

    #[test]
    fn test_partial_input_section_keeps_other_defaults() {
        let config = Config::from_str("[input]\nvalue_column = 2\n").unwrap();

        assert_eq!(config.input.value_column, 2);
        assert_eq!(config.input.delimiter, ',');
        assert!(config.input.has_header);
    }

    #[test]
    fn test_series_requires_path() {
        let err = Config::from_str("[baseline]\nlabel = \"Only a label\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("path"));
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = Config::from_str("[chart]\nheight = 0\n").unwrap_err();
        assert!(err.to_string().contains("chart.height"));
    }

    #[test]
    fn test_multi_char_delimiter_rejected() {
        assert!(Config::from_str("[input]\ndelimiter = \";;\"\n").is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/compare.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compare.toml");
        fs::write(&path, "[chart]\ntitle = \"Frame Time\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.chart.title, "Frame Time");
    }
}
