//! Timing comparison for two benchmark result files
//!
//! This crate reads two delimited files of timing samples, summarizes each
//! one (mean, median, min, max, sample standard deviation), derives the
//! relative improvement of the candidate over the baseline, and renders the
//! result as a console report with an ASCII bar chart or as JSON.
//!
//! # Example
//!
//! ```no_run
//! use bench_compare::{compare_files, Config, OutputFormat, Reporter};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::from_file("compare.toml")?;
//! let report = compare_files(&config)?;
//!
//! Reporter::new(OutputFormat::Console)
//!     .with_chart(config.chart.clone())
//!     .report(&report)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Every section is optional; omitted sections fall back to the built-in
//! comparison of `benchmark_virtual.csv` against `benchmark_function_ptr.csv`.
//!
//! ```toml
//! [baseline]
//! label = "Virtual Functions"
//! chart_label = "Virtual Function"
//! path = "benchmark_virtual.csv"
//!
//! [candidate]
//! label = "Function Pointers"
//! path = "benchmark_function_ptr.csv"
//!
//! [input]
//! delimiter = ","
//! has_header = true
//! value_column = 1
//! unit = "µs"
//!
//! [chart]
//! title = "Average Update Time"
//! height = 20
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod reporter;
pub mod samples;
pub mod stats;

// Re-export main types for convenience
pub use compare::{compare_files, improvement_percent, ComparisonReport, SeriesReport};
pub use config::{ChartConfig, Config, SeriesConfig};
pub use error::{CompareError, StatsError};
pub use reporter::{OutputFormat, Reporter};
pub use samples::{load_samples, read_samples, SampleSet, SamplesFormat};
pub use stats::Summary;
