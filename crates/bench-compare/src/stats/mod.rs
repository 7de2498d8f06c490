//! Descriptive statistics over timing samples
//!
//! # Examples
//!
//! ```
//! use bench_compare::stats::Summary;
//!
//! let summary = Summary::from_samples(&[10.0, 20.0, 30.0]).unwrap();
//! assert_eq!(summary.mean, 20.0);
//! assert_eq!(summary.median, 20.0);
//! assert_eq!(summary.std_dev, 10.0);
//! ```

pub mod summary;

pub use summary::{mean, median, sample_std_dev, Summary};
