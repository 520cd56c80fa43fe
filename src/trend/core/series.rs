//! Metric series — raw per-commit samples and their outlier-free subset.
//!
//! Purpose
//! -------
//! Own the ingestion boundary of the engine: accept per-commit samples in
//! chronological order (oldest first), coerce missing samples to `0`, and
//! reject non-finite values before any fitting happens. Also define
//! [`CleanedSeries`], the subset that survives outlier removal.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every value in a [`MetricSeries`] is finite.
//! - A [`CleanedSeries`] is never empty and its `kept` indices are strictly
//!   increasing positions into the raw series it was derived from.
//!
//! Conventions
//! -----------
//! - Index 0 is the oldest analyzed commit; the last index is the newest.
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::trend::errors::{EngineResult, TrendError};

/// MetricSeries — validated, chronologically ordered metric samples.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    values: Vec<f64>,
}

impl MetricSeries {
    /// Wrap finite samples.
    ///
    /// Errors
    /// ------
    /// - `TrendError::NonFiniteSample` for the first NaN/±inf entry.
    pub fn new(values: &[f64]) -> EngineResult<Self> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(TrendError::NonFiniteSample { index, value });
        }
        Ok(MetricSeries { values: values.to_vec() })
    }

    /// Wrap samples where `None` marks a commit without a measurement.
    ///
    /// Missing samples become `0`, matching what the analytics API
    /// delivers for commits it could not measure.
    pub fn from_optional(values: &[Option<f64>]) -> EngineResult<Self> {
        let coerced: Vec<f64> = values.iter().map(|v| v.unwrap_or(0.0)).collect();
        MetricSeries::new(&coerced)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Content hash used as the series identity for memoization.
    ///
    /// Two series have the same identity when they hold bit-identical
    /// samples in the same order.
    pub fn identity(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.values.len().hash(&mut hasher);
        for value in &self.values {
            value.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}

/// CleanedSeries — samples retained after outlier removal.
///
/// Fields
/// ------
/// - `values`: retained samples in original order.
/// - `kept`: raw-series index of each retained sample.
/// - `inlier_min` / `inlier_max`: range of the retained values, used only to
///   mark outliers when plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedSeries {
    values: Vec<f64>,
    kept: Vec<usize>,
    raw_len: usize,
    inlier_min: f64,
    inlier_max: f64,
}

impl CleanedSeries {
    /// Build from retained `(raw index, value)` pairs. `pairs` must be
    /// non-empty and ordered by index.
    pub(crate) fn from_kept(pairs: Vec<(usize, f64)>, raw_len: usize) -> Self {
        let (kept, values): (Vec<usize>, Vec<f64>) = pairs.into_iter().unzip();
        let inlier_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let inlier_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        CleanedSeries { values, kept, raw_len, inlier_min, inlier_max }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Most recent retained sample.
    pub fn last(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    /// Position of the most recent retained sample in fit coordinates.
    pub fn anchor(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    pub fn kept_indices(&self) -> &[usize] {
        &self.kept
    }

    /// Raw-series indices that were dropped as outliers.
    pub fn outlier_indices(&self) -> Vec<usize> {
        let mut kept = self.kept.iter().peekable();
        (0..self.raw_len)
            .filter(|index| {
                if kept.peek() == Some(&index) {
                    kept.next();
                    false
                } else {
                    true
                }
            })
            .collect()
    }

    pub fn inlier_bounds(&self) -> (f64, f64) {
        (self.inlier_min, self.inlier_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Non-finite samples are rejected with their position.
    //
    // Given
    // -----
    // - [1, 2, NaN, inf].
    //
    // Expect
    // ------
    // - `NonFiniteSample { index: 2, .. }`.
    fn metric_series_new_rejects_first_non_finite_sample() {
        match MetricSeries::new(&[1.0, 2.0, f64::NAN, f64::INFINITY]) {
            Err(TrendError::NonFiniteSample { index, value }) => {
                assert_eq!(index, 2);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteSample, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Missing samples are coerced to zero at the ingestion boundary.
    fn from_optional_coerces_missing_to_zero() {
        let series = MetricSeries::from_optional(&[Some(3.0), None, Some(5.0)]).unwrap();
        assert_eq!(series.values(), &[3.0, 0.0, 5.0]);
    }

    #[test]
    // Purpose
    // -------
    // Identity depends on content and order only.
    //
    // Given
    // -----
    // - Two equal series and one permutation.
    //
    // Expect
    // ------
    // - Equal series share an identity; the permutation differs.
    fn identity_tracks_content_and_order() {
        // Arrange
        let a = MetricSeries::new(&[1.0, 2.0, 3.0]).unwrap();
        let b = MetricSeries::new(&[1.0, 2.0, 3.0]).unwrap();
        let c = MetricSeries::new(&[3.0, 2.0, 1.0]).unwrap();

        // Act / Assert
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a.identity(), c.identity());
    }

    #[test]
    // Purpose
    // -------
    // Outlier indices are the complement of kept indices.
    //
    // Given
    // -----
    // - Raw length 6 with indices 0, 1, 2, 4, 5 kept.
    //
    // Expect
    // ------
    // - `outlier_indices() == [3]`, inlier bounds span the kept values,
    //   anchor is 4.
    fn cleaned_series_reports_outliers_and_bounds() {
        // Arrange
        let pairs = vec![(0, 10.0), (1, 11.0), (2, 9.0), (4, 10.0), (5, 12.0)];

        // Act
        let cleaned = CleanedSeries::from_kept(pairs, 6);

        // Assert
        assert_eq!(cleaned.outlier_indices(), vec![3]);
        assert_eq!(cleaned.inlier_bounds(), (9.0, 12.0));
        assert_eq!(cleaned.anchor(), 4);
        assert_eq!(cleaned.last(), 12.0);
    }
}
