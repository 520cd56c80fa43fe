//! Threshold ETA — how many commits until the smoothed curve reaches a
//! metric's danger threshold.
//!
//! Scans the global polynomial ([`crate::trend::core::curve::FittedCurve`],
//! not the ensemble) at positions `anchor + i − 1` for `i = 1..=5`: step 1
//! is the newest position itself, step 5 is four positions ahead. The first
//! step whose clamped/rounded value is on the dangerous side of the
//! threshold is returned.
use crate::trend::core::{bounds::ValueBounds, definition::ThresholdForecast, traits::Predictor};

/// Number of steps scanned.
pub const THRESHOLD_HORIZON: usize = 5;

/// First step in `1..=THRESHOLD_HORIZON` at which `curve` crosses
/// `threshold`, or `None` when no threshold is configured or none of the
/// steps crosses it.
pub fn forecast_crossing<P: Predictor>(
    threshold: Option<&ThresholdForecast>, curve: &P, anchor: usize, bounds: &ValueBounds,
) -> Option<usize> {
    let threshold = threshold?;
    (1..=THRESHOLD_HORIZON).find(|&step| {
        let value = bounds.clamp_round(curve.predict((anchor + step - 1) as f64));
        threshold.is_crossed_by(value)
    })
}
