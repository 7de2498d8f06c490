//! Timing sample loading from delimited text files.
//!
//! A samples file has a header row followed by data rows; one column of each
//! row holds a timing value. Rows that are too short or whose value does not
//! parse are skipped so that a partially corrupted benchmark dump still
//! yields the usable measurements.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::CompareError;

/// Layout of a samples file (the `[input]` configuration section).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SamplesFormat {
    /// Field delimiter (default: `,`)
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Whether the first row is a header to discard (default: true)
    #[serde(default = "default_has_header")]
    pub has_header: bool,
    /// Zero-based index of the column holding the timing value (default: 1)
    #[serde(default = "default_value_column")]
    pub value_column: usize,
    /// Unit of the timing values, used for display only (default: `µs`)
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl Default for SamplesFormat {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_header: default_has_header(),
            value_column: default_value_column(),
            unit: default_unit(),
        }
    }
}

impl SamplesFormat {
    fn delimiter_byte(&self) -> Result<u8, CompareError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(CompareError::InvalidDelimiter(self.delimiter))
        }
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_has_header() -> bool {
    true
}

fn default_value_column() -> usize {
    1
}

fn default_unit() -> String {
    "µs".to_string()
}

/// Samples read from one file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    /// Parsed timing values
    pub samples: Vec<f64>,
    /// Number of data rows that were discarded as malformed
    pub skipped_rows: usize,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Load samples from a file on disk.
///
/// The file is opened, fully read and closed before this returns.
///
/// # Errors
///
/// Returns [`CompareError::Io`] if the file cannot be opened and
/// [`CompareError::Csv`] if reading from it fails part way. Malformed rows
/// are never an error.
///
/// # Example
///
/// ```no_run
/// use bench_compare::samples::{load_samples, SamplesFormat};
///
/// # fn example() -> Result<(), bench_compare::CompareError> {
/// let set = load_samples("benchmark_virtual.csv".as_ref(), &SamplesFormat::default())?;
/// println!("{} samples", set.len());
/// # Ok(())
/// # }
/// ```
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_samples(path: &Path, format: &SamplesFormat) -> Result<SampleSet, CompareError> {
    let file = File::open(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let set = read_samples(file, format)?;
    info!(
        samples = set.len(),
        skipped = set.skipped_rows,
        "Loaded samples"
    );
    Ok(set)
}

/// Parse samples from any reader.
///
/// # Example
///
/// ```
/// use bench_compare::samples::{read_samples, SamplesFormat};
///
/// let data = "id,time\n1,10.0\n2,abc\n3,30.0\n";
/// let set = read_samples(data.as_bytes(), &SamplesFormat::default()).unwrap();
/// assert_eq!(set.samples, vec![10.0, 30.0]);
/// assert_eq!(set.skipped_rows, 1);
/// ```
pub fn read_samples<R: Read>(reader: R, format: &SamplesFormat) -> Result<SampleSet, CompareError> {
    let delimiter = format.delimiter_byte()?;
    let mut reader = BufReader::new(reader);

    // The header is the first physical line, even when it is blank; the csv
    // reader would skip a blank line and take the first data row instead.
    if format.has_header {
        let mut header = Vec::new();
        reader
            .read_until(b'\n', &mut header)
            .map_err(csv::Error::from)?;
    }

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut set = SampleSet::default();
    let mut record = ByteRecord::new();

    while csv_reader.read_byte_record(&mut record)? {
        match parse_value(&record, format.value_column) {
            Some(value) => set.samples.push(value),
            None => {
                set.skipped_rows += 1;
                debug!(
                    line = record.position().map(|pos| pos.line()),
                    fields = record.len(),
                    "Skipping malformed row"
                );
            }
        }
    }

    Ok(set)
}

/// Extract a finite number from the given column, if there is one.
fn parse_value(record: &ByteRecord, column: usize) -> Option<f64> {
    let field = record.get(column)?;
    let text = std::str::from_utf8(field).ok()?;
    let value: f64 = text.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn read(data: &str) -> SampleSet {
        read_samples(data.as_bytes(), &SamplesFormat::default()).unwrap()
    }

    #[test]
    fn test_read_simple_file() {
        let set = read("iteration,time_us\n1,10.0\n2,20.0\n3,30.0\n");

        assert_eq!(set.samples, vec![10.0, 20.0, 30.0]);
        assert_eq!(set.skipped_rows, 0);
    }

    #[test]
    fn test_non_numeric_row_skipped_and_order_kept() {
        let set = read("iteration,time_us\n1,10.0\n2,abc\n3,30.0\n4,5.5\n");

        assert_eq!(set.samples, vec![10.0, 30.0, 5.5]);
        assert_eq!(set.skipped_rows, 1);
    }

    #[test]
    fn test_short_rows_skipped() {
        let set = read("iteration,time_us\n1\n2,20.0\n3,\n");

        assert_eq!(set.samples, vec![20.0]);
        assert_eq!(set.skipped_rows, 2);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let set = read("iteration,time_us,note\n1,10.0,warm\n2,20.0,steady,extra\n");

        assert_eq!(set.samples, vec![10.0, 20.0]);
    }

    #[test]
    fn test_header_is_discarded_even_if_numeric() {
        let set = read("0,99.0\n1,10.0\n");

        assert_eq!(set.samples, vec![10.0]);
    }

    #[test]
    fn test_blank_first_line_is_the_header() {
        let set = read("\n1,10.0\n2,20.0\n");

        assert_eq!(set.samples, vec![10.0, 20.0]);
        assert_eq!(set.skipped_rows, 0);
    }

    #[test]
    fn test_crlf_header_discarded() {
        let set = read("iteration,time_us\r\n1,10.0\r\n");
        assert_eq!(set.samples, vec![10.0]);
    }

    #[test]
    fn test_header_only_yields_empty_set() {
        let set = read("iteration,time_us\n");

        assert!(set.is_empty());
        assert_eq!(set.skipped_rows, 0);
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        let set = read("");
        assert!(set.is_empty());
    }

    #[test]
    fn test_whitespace_around_value_accepted() {
        let set = read("iteration,time_us\n1, 12.5 \n2,\t7\n");

        assert_eq!(set.samples, vec![12.5, 7.0]);
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let set = read("iteration,time_us\n1,NaN\n2,inf\n3,-infinity\n4,1e3\n");

        assert_eq!(set.samples, vec![1000.0]);
        assert_eq!(set.skipped_rows, 3);
    }

    #[test]
    fn test_crlf_and_quoted_fields() {
        let set = read("iteration,time_us\r\n1,\"10.25\"\r\n\"2,5\",11.0\r\n");

        assert_eq!(set.samples, vec![10.25, 11.0]);
    }

    #[test]
    fn test_invalid_utf8_row_skipped() {
        let mut data = b"iteration,time_us\n1,10.0\n2,".to_vec();
        data.extend_from_slice(&[0xff, 0xfe]);
        data.extend_from_slice(b"\n3,30.0\n");

        let set = read_samples(data.as_slice(), &SamplesFormat::default()).unwrap();
        assert_eq!(set.samples, vec![10.0, 30.0]);
        assert_eq!(set.skipped_rows, 1);
    }

    #[test]
    fn test_custom_delimiter_and_column() {
        let format = SamplesFormat {
            delimiter: ';',
            value_column: 2,
            ..SamplesFormat::default()
        };
        let data = "run;label;time\n1;a;3.5\n2;b;4.5\n";

        let set = read_samples(data.as_bytes(), &format).unwrap();
        assert_eq!(set.samples, vec![3.5, 4.5]);
    }

    #[test]
    fn test_without_header() {
        let format = SamplesFormat {
            has_header: false,
            ..SamplesFormat::default()
        };

        let set = read_samples("1,10.0\n2,20.0\n".as_bytes(), &format).unwrap();
        assert_eq!(set.samples, vec![10.0, 20.0]);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let format = SamplesFormat {
            delimiter: '§',
            ..SamplesFormat::default()
        };

        let err = read_samples("a§b\n".as_bytes(), &format).unwrap_err();
        assert!(matches!(err, CompareError::InvalidDelimiter('§')));
    }

    #[test]
    fn test_load_samples_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "iteration,time_us\n1,1.5\n2,2.5\n").unwrap();

        let set = load_samples(file.path(), &SamplesFormat::default()).unwrap();
        assert_eq!(set.samples, vec![1.5, 2.5]);
    }

    #[test]
    fn test_load_samples_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = load_samples(&path, &SamplesFormat::default()).unwrap_err();
        match err {
            CompareError::Io { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_format_defaults() {
        let format = SamplesFormat::default();

        assert_eq!(format.delimiter, ',');
        assert!(format.has_header);
        assert_eq!(format.value_column, 1);
        assert_eq!(format.unit, "µs");
    }
}
