//! Outlier removal — Tukey IQR fencing over a metric series.
//!
//! Purpose
//! -------
//! Drop samples that deviate sharply from the bulk of a short per-commit
//! history (a one-off spike from a broken analysis, a vendored directory
//! briefly counted) before any curve is fitted.
//!
//! Key behaviors
//! -------------
//! - Compute the lower/upper quartiles with `statrs` order statistics and
//!   keep samples inside `[Q1 − k·IQR, Q3 + k·IQR]` (default `k = 1.5`).
//! - Never return an empty [`CleanedSeries`]: if the fence would reject
//!   everything, the original series is returned untouched.
//! - Series shorter than [`MIN_FENCE_POINTS`] are passed through; there is
//!   no meaningful "bulk" to compare against.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite (guaranteed by [`crate::trend::MetricSeries`]).
//! - The retained samples keep their original relative order.
use log::{debug, trace};
use statrs::statistics::{Data, OrderStatistics};

use crate::trend::{
    core::series::CleanedSeries,
    errors::{EngineResult, TrendError},
};

/// Tukey's fence multiplier.
pub const DEFAULT_FENCE: f64 = 1.5;

/// Below this many samples the filter passes the series through unchanged.
pub const MIN_FENCE_POINTS: usize = 3;

/// OutlierFilter — IQR fence with a configurable multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierFilter {
    fence: f64,
}

impl Default for OutlierFilter {
    fn default() -> Self {
        OutlierFilter { fence: DEFAULT_FENCE }
    }
}

impl OutlierFilter {
    /// Filter with a custom fence multiplier.
    ///
    /// Errors
    /// ------
    /// - `TrendError::InvalidFence` unless `fence` is finite and `> 0`.
    pub fn new(fence: f64) -> EngineResult<Self> {
        if !fence.is_finite() || fence <= 0.0 {
            return Err(TrendError::InvalidFence { value: fence });
        }
        Ok(OutlierFilter { fence })
    }

    pub fn fence(&self) -> f64 {
        self.fence
    }

    /// Remove outliers from `values`.
    ///
    /// Returns
    /// -------
    /// [`CleanedSeries`]
    ///   Retained samples with their raw indices and inlier bounds. Equal to
    ///   the input when it is shorter than [`MIN_FENCE_POINTS`] or when the
    ///   fence would reject every sample. An empty input yields an empty
    ///   series; callers substitute a placeholder before filtering.
    pub fn filter(&self, values: &[f64]) -> CleanedSeries {
        let all = || values.iter().copied().enumerate().collect::<Vec<_>>();
        if values.len() < MIN_FENCE_POINTS {
            return CleanedSeries::from_kept(all(), values.len());
        }

        let mut data = Data::new(values.to_vec());
        let q1 = data.lower_quartile();
        let q3 = data.upper_quartile();
        let spread = self.fence * (q3 - q1);
        let (low, high) = (q1 - spread, q3 + spread);
        trace!("outlier fence: q1={q1}, q3={q3}, accepted range=[{low}, {high}]");

        let kept: Vec<(usize, f64)> =
            all().into_iter().filter(|&(_, v)| v >= low && v <= high).collect();
        if kept.is_empty() {
            debug!("outlier fence rejected all {} samples; keeping the raw series", values.len());
            return CleanedSeries::from_kept(all(), values.len());
        }
        if kept.len() < values.len() {
            let dropped = values.len() - kept.len();
            debug!("outlier fence dropped {dropped} of {} samples", values.len());
        }
        CleanedSeries::from_kept(kept, values.len())
    }
}
