//! Display range — the padded value-axis interval for the evolution chart.
//!
//! Purpose
//! -------
//! Compute one `[min, max]` interval that contains everything the chart
//! draws for a metric (history, smoothed curve, forecast, and its error
//! band) and is never narrower than the metric's `min_range`, so a nearly
//! constant series is not blown up into visual noise.
//!
//! Key behaviors
//! -------------
//! - Collect the clamped/rounded raw history (outliers included, since they
//!   are still plotted), the fitted curve at every cleaned position, the
//!   ensemble forecast at `anchor + k` for `k = 0..5`, and
//!   `forecast × (1 ± ratio)` at the same steps.
//! - If the collected span is at least `min_range`, pad 5% of each
//!   endpoint's magnitude outward.
//! - Otherwise return an interval of exactly `min_range` centered on the
//!   midpoint of the collected span.
//!
//! Invariants & assumptions
//! ------------------------
//! - `width() >= min_range`.
//! - Every collected value lies inside the returned interval.
//!
//! Conventions
//! -----------
//! - Padding is `lo − 0.05·|lo|` / `hi + 0.05·|hi|`, which equals
//!   `lo·0.95` / `hi·1.05` for non-negative metrics.
use serde::Serialize;

use crate::trend::core::{bounds::ValueBounds, traits::Predictor};

/// Relative padding applied to each end of a wide-enough range.
pub const RANGE_PADDING: f64 = 0.05;

/// Forecast steps `0..RANGE_FORECAST_STEPS` past the anchor included in the
/// range.
pub const RANGE_FORECAST_STEPS: usize = 5;

/// DisplayRange — closed value-axis interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

impl DisplayRange {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.max + self.min) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Padded or widened range over all plotted values.
///
/// Parameters
/// ----------
/// - `actual`: every plotted sample, outliers included (clamped/rounded
///   here).
/// - `curve`: global polynomial, evaluated at positions `0..=anchor`.
/// - `ensemble`: forecaster, evaluated at `anchor + k`, `k = 0..5`.
/// - `error_band_ratio`: symmetric band fraction applied to forecasts.
/// - `min_range`: minimum width.
/// - `anchor`: position of the newest cleaned sample.
/// - `bounds`: clamp/round applied to every collected value.
pub fn compute_range<C: Predictor, E: Predictor>(
    actual: &[f64], curve: &C, ensemble: &E, error_band_ratio: f64, min_range: f64,
    anchor: usize, bounds: &ValueBounds,
) -> DisplayRange {
    let history = actual.iter().map(|&v| bounds.clamp_round(v));
    let fitted = (0..=anchor).map(|i| bounds.clamp_round(curve.predict(i as f64)));
    let forecast = (0..RANGE_FORECAST_STEPS).flat_map(|k| {
        let value = ensemble.predict((anchor + k) as f64);
        [value, value * (1.0 - error_band_ratio), value * (1.0 + error_band_ratio)]
            .map(|v| bounds.clamp_round(v))
    });

    let (lo, hi) = history
        .chain(fitted)
        .chain(forecast)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if hi - lo >= min_range {
        DisplayRange { min: lo - RANGE_PADDING * lo.abs(), max: hi + RANGE_PADDING * hi.abs() }
    } else {
        let center = (hi + lo) / 2.0;
        DisplayRange { min: center - min_range / 2.0, max: center + min_range / 2.0 }
    }
}
