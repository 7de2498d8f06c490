use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a sample sequence cannot be summarized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("no samples to summarize")]
    Empty,

    #[error("sample standard deviation needs at least 2 samples, got {count}")]
    InsufficientSamples { count: usize },
}

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Failed to open samples file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read samples: {0}")]
    Csv(#[from] csv::Error),

    #[error("Delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    #[error("Cannot summarize series '{label}'")]
    Stats {
        label: String,
        #[source]
        source: StatsError,
    },
}
