//! Five-number summary of a sample sequence.

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Descriptive statistics of one sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    pub count: usize,
}

impl Summary {
    /// Compute summary statistics from samples.
    ///
    /// # Errors
    ///
    /// * [`StatsError::Empty`] - if `samples` is empty
    /// * [`StatsError::InsufficientSamples`] - if there is only one sample,
    ///   since the sample standard deviation is undefined
    ///
    /// # Examples
    ///
    /// ```
    /// use bench_compare::stats::Summary;
    ///
    /// let data = vec![4.0, 1.0, 3.0, 2.0];
    /// let summary = Summary::from_samples(&data).unwrap();
    /// assert_eq!(summary.count, 4);
    /// assert_eq!(summary.median, 2.5);
    /// assert_eq!(summary.min, 1.0);
    /// assert_eq!(summary.max, 4.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self, StatsError> {
        match samples.len() {
            0 => return Err(StatsError::Empty),
            1 => return Err(StatsError::InsufficientSamples { count: 1 }),
            _ => {}
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = mean(samples).ok_or(StatsError::Empty)?;
        let std_dev = sample_std_dev(samples, mean)
            .ok_or(StatsError::InsufficientSamples { count: samples.len() })?;
        let median = median(&sorted).ok_or(StatsError::Empty)?;

        Ok(Summary {
            mean,
            median,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            std_dev,
            count: samples.len(),
        })
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let count = samples.len() as f64;
    let sum: f64 = samples.iter().sum();
    if sum.is_finite() {
        return Some(sum / count);
    }

    // The plain sum overflowed; divide each term first.
    Some(samples.iter().map(|&x| x / count).sum())
}

/// Median of an already sorted slice.
///
/// Even-length input yields the mean of the two middle values.
pub fn median(sorted: &[f64]) -> Option<f64> {
    let count = sorted.len();
    if count == 0 {
        return None;
    }

    let mid = count / 2;
    if count % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Sample standard deviation around a precomputed mean.
///
/// Returns `None` with fewer than two samples.
pub fn sample_std_dev(samples: &[f64], mean: f64) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }

    let degrees_of_freedom = (samples.len() - 1) as f64;
    let squared_diffs: f64 = samples.iter().map(|&x| (x - mean).powi(2)).sum();
    if squared_diffs.is_finite() {
        return Some((squared_diffs / degrees_of_freedom).sqrt());
    }

    // Squares overflowed; work in units of the largest magnitude.
    let scale = samples.iter().fold(mean.abs(), |acc, &x| acc.max(x.abs()));
    let scaled_diffs: f64 = samples
        .iter()
        .map(|&x| (x / scale - mean / scale).powi(2))
        .sum();
    Some(scale * (scaled_diffs / degrees_of_freedom).sqrt())
}
