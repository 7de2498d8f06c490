//! bench-compare binary
//!
//! Compares two benchmark timing files and prints the report to stdout.

use std::path::PathBuf;

use anyhow::Context;
use bench_compare::{compare_files, Config, OutputFormat, Reporter};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "bench-compare")]
#[command(
    version,
    about = "Compare the timing samples of two benchmark result files"
)]
struct Args {
    /// Baseline samples file (default: benchmark_virtual.csv)
    baseline: Option<PathBuf>,

    /// Candidate samples file (default: benchmark_function_ptr.csv)
    candidate: Option<PathBuf>,

    /// TOML file with labels, input layout and chart settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Console)]
    format: Format,

    /// Minimum level of diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Console,
    Json,
    JsonPretty,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Console => OutputFormat::Console,
            Format::Json => OutputFormat::Json,
            Format::JsonPretty => OutputFormat::JsonPretty,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(args.log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(path) = args.baseline {
        config.baseline.path = path;
    }
    if let Some(path) = args.candidate {
        config.candidate.path = path;
    }

    tracing::debug!(
        baseline = %config.baseline.path.display(),
        candidate = %config.candidate.path.display(),
        "Comparing benchmark files"
    );

    let report = compare_files(&config).context("Comparison failed")?;

    Reporter::new(args.format.into())
        .with_chart(config.chart)
        .report(&report)?;

    Ok(())
}
