//! Trend classification — compare the current value against the ensemble's
//! near-term forecast with a 5% dead zone.
//!
//! Purpose
//! -------
//! Label the direction a metric is heading as `up`, `flat`, or `down`. The
//! label describes the raw metric only; whether that is good news depends
//! on the metric's [`FavorableDirection`] and is resolved by
//! [`TrendClassification::assess`] for presentation.
//!
//! Key behaviors
//! -------------
//! - `a = clamp_round(current)`, `b = clamp_round(ensemble(anchor + 2))`,
//!   `f4 = clamp_round(ensemble(anchor + 4))`.
//! - `f4 == 0` → `flat` unconditionally.
//! - `a − b > 0.05·a` → `down`; `a − b >= −0.05·a` → `flat`; else `up`.
//!
//! Conventions
//! -----------
//! - `anchor` is the position of the newest cleaned sample (`len − 1`).
use std::fmt;

use serde::Serialize;

use crate::trend::core::{bounds::ValueBounds, definition::FavorableDirection, traits::Predictor};

/// Relative half-width of the "flat" dead zone.
pub const FLAT_BAND: f64 = 0.05;

/// Steps past the anchor used for the near-term comparison.
pub const NEAR_TERM_STEPS: usize = 2;

/// Steps past the anchor of the zero-forecast guard (and mid-term forecast).
pub const MID_TERM_STEPS: usize = 4;

/// Direction of the raw metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendClassification {
    Up,
    Flat,
    Down,
}

/// Direction judged against what is favorable for the metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendAssessment {
    Improving,
    Stable,
    Worsening,
}

impl TrendClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendClassification::Up => "up",
            TrendClassification::Flat => "flat",
            TrendClassification::Down => "down",
        }
    }

    /// Map the raw direction onto good/bad news for a metric.
    ///
    /// Metrics with [`FavorableDirection::Neutral`] are always `Stable`.
    pub fn assess(&self, favorable: FavorableDirection) -> TrendAssessment {
        match (self, favorable) {
            (TrendClassification::Flat, _) | (_, FavorableDirection::Neutral) => {
                TrendAssessment::Stable
            }
            (TrendClassification::Up, FavorableDirection::Up)
            | (TrendClassification::Down, FavorableDirection::Down) => TrendAssessment::Improving,
            _ => TrendAssessment::Worsening,
        }
    }
}

impl fmt::Display for TrendClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify from already clamped/rounded values.
///
/// Parameters
/// ----------
/// - `current`: `a`, the newest value.
/// - `near_term`: `b`, the forecast two steps past the anchor.
/// - `mid_term`: the forecast four steps past the anchor.
pub fn classify_values(current: f64, near_term: f64, mid_term: f64) -> TrendClassification {
    if mid_term == 0.0 {
        return TrendClassification::Flat;
    }
    let delta = current - near_term;
    if delta > FLAT_BAND * current {
        TrendClassification::Down
    } else if delta >= -FLAT_BAND * current {
        TrendClassification::Flat
    } else {
        TrendClassification::Up
    }
}

/// Classify the trend of a series whose newest sample sits at `anchor`.
pub fn classify<P: Predictor>(
    last_value: f64, ensemble: &P, anchor: usize, bounds: &ValueBounds,
) -> TrendClassification {
    let current = bounds.clamp_round(last_value);
    let near_term = bounds.clamp_round(ensemble.predict((anchor + NEAR_TERM_STEPS) as f64));
    let mid_term = bounds.clamp_round(ensemble.predict((anchor + MID_TERM_STEPS) as f64));
    classify_values(current, near_term, mid_term)
}
