//! Trend engine — turn one metric's per-commit history into a
//! [`TrendResult`].
//!
//! Purpose
//! -------
//! Provide the single public entry point of the crate. Given a
//! [`MetricDefinition`] and a [`MetricSeries`], run the full pipeline:
//! outlier removal, global polynomial smoothing, error band, trailing-window
//! ensemble forecast, trend classification, threshold ETA, and display
//! range, then package every chart- and chip-facing value.
//!
//! Key behaviors
//! -------------
//! - Data flow: `MetricSeries → OutlierFilter → CleanedSeries`, then
//!   `CleanedSeries → FittedCurve → {error band, threshold ETA, range}` and,
//!   independently, `CleanedSeries → ForecastEnsemble → {classification,
//!   forecasts, range}`.
//! - An empty series is treated as the single sample `0`.
//! - The display range also spans the raw samples dropped as outliers,
//!   since the chart still plots and marks them.
//! - Every metric value in the result passes through
//!   [`ValueBounds::clamp_round`](crate::trend::core::bounds::ValueBounds::clamp_round).
//!
//! Invariants & assumptions
//! ------------------------
//! - Pure and deterministic: identical inputs give bit-identical results.
//! - Never fails on a validated series; the `EngineResult` only carries the
//!   least-squares backend error, which finite inputs do not trigger.
//! - `anchor = cleaned.len() − 1`; "k steps ahead" means position
//!   `anchor + k`.
//!
//! Downstream usage
//! ----------------
//! - Call [`compute_trend`] per metric and series, or [`compute_trend_for`]
//!   with a [`MetricRegistry`] and a metric key.
//! - Wrap calls in [`crate::trend::TrendCache`] to keep the latest result
//!   per metric, reused while the series is unchanged.
//!
//! Testing notes
//! -------------
//! - Unit tests here check result assembly (forecast points, percent
//!   change, empty series). End-to-end behavior is exercised in the
//!   integration tests.
use log::debug;
use serde::Serialize;

use crate::{
    numerics::rounding::round_to,
    trend::{
        core::{
            classify::{MID_TERM_STEPS, NEAR_TERM_STEPS, TrendClassification, classify},
            curve::FittedCurve,
            definition::MetricDefinition,
            ensemble::ForecastEnsemble,
            error_band::error_band_ratio,
            outliers::OutlierFilter,
            range::{DisplayRange, compute_range},
            registry::MetricRegistry,
            series::MetricSeries,
            threshold::forecast_crossing,
        },
        errors::EngineResult,
    },
};

/// Forecast points reported past the newest sample.
pub const FORECAST_STEPS: usize = 4;

/// Digits kept for `percent_change`.
pub const PERCENT_PRECISION: u32 = 1;

/// ForecastPoint — one ensemble forecast with its error band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// Steps past the newest sample (`1..=FORECAST_STEPS`).
    pub step: usize,
    /// Position in cleaned-series coordinates (`anchor + step`).
    pub position: usize,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

/// TrendResult — everything the evolution view renders for one metric.
///
/// Fields
/// ------
/// - `metric`: key of the definition used.
/// - `classification`: raw direction of the metric.
/// - `current`: newest cleaned value.
/// - `near_term_forecast` / `mid_term_forecast`: ensemble at `anchor + 2` /
///   `anchor + 4`.
/// - `percent_change`: `(near_term − current) / |current| · 100`, one
///   decimal; `0` when `current == 0`.
/// - `threshold_eta`: steps until the danger threshold is reached, if
///   within the five-step horizon.
/// - `display_range`: chart value axis.
/// - `error_band_ratio`: relative mean-absolute-error fraction.
/// - `effective_order`: polynomial degree actually fitted.
/// - `history`, `fitted`: cleaned values and smoothed curve per position.
/// - `forecast`: ensemble forecasts at steps `1..=FORECAST_STEPS`.
/// - `outlier_indices`, `inlier_bounds`: for marking dropped samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub metric: String,
    pub classification: TrendClassification,
    pub current: f64,
    pub near_term_forecast: f64,
    pub mid_term_forecast: f64,
    pub percent_change: f64,
    pub threshold_eta: Option<usize>,
    pub display_range: DisplayRange,
    pub error_band_ratio: f64,
    pub effective_order: usize,
    pub history: Vec<f64>,
    pub fitted: Vec<f64>,
    pub forecast: Vec<ForecastPoint>,
    pub outlier_indices: Vec<usize>,
    pub inlier_bounds: (f64, f64),
}

/// Run the trend pipeline with the default IQR outlier fence.
///
/// Examples
/// --------
/// ```rust
/// # use quality_trends::trend::{MetricRegistry, MetricSeries, TrendClassification, compute_trend};
/// let registry = MetricRegistry::builtin();
/// let loc = registry.require("LogicalLOC").unwrap();
/// let series = MetricSeries::new(&[100.0, 110.0, 120.0, 130.0, 140.0, 150.0]).unwrap();
///
/// let result = compute_trend(loc, &series).unwrap();
/// assert_eq!(result.classification, TrendClassification::Up);
/// assert!(result.display_range.width() >= loc.min_range());
/// ```
pub fn compute_trend(
    definition: &MetricDefinition, series: &MetricSeries,
) -> EngineResult<TrendResult> {
    compute_trend_with(definition, series, &OutlierFilter::default())
}

/// Look up `key` in `registry` and run [`compute_trend`].
///
/// Errors
/// ------
/// - `TrendError::UnknownMetric` when the key is not registered.
pub fn compute_trend_for(
    registry: &MetricRegistry, key: &str, series: &MetricSeries,
) -> EngineResult<TrendResult> {
    compute_trend(registry.require(key)?, series)
}

/// Run the trend pipeline with an explicit outlier filter.
pub fn compute_trend_with(
    definition: &MetricDefinition, series: &MetricSeries, filter: &OutlierFilter,
) -> EngineResult<TrendResult> {
    let bounds = definition.bounds();
    let placeholder = [0.0];
    let raw: &[f64] = if series.is_empty() {
        debug!("{}: empty series; substituting a single zero sample", definition.key());
        &placeholder
    } else {
        series.values()
    };

    let cleaned = filter.filter(raw);
    let values = cleaned.values();
    let anchor = cleaned.anchor();

    let curve = FittedCurve::fit(values, definition.polynomial_order())?;
    let band = error_band_ratio(values, &curve);
    let ensemble = ForecastEnsemble::build(values)?;

    let classification = classify(cleaned.last(), &ensemble, anchor, bounds);
    let current = bounds.clamp_round(cleaned.last());
    let near_term_forecast =
        bounds.clamp_round(ensemble.evaluate((anchor + NEAR_TERM_STEPS) as f64));
    let mid_term_forecast = bounds.clamp_round(ensemble.evaluate((anchor + MID_TERM_STEPS) as f64));

    let forecast = (1..=FORECAST_STEPS)
        .map(|step| {
            let position = anchor + step;
            let raw_value = ensemble.evaluate(position as f64);
            let a = bounds.clamp_round(raw_value * (1.0 - band));
            let b = bounds.clamp_round(raw_value * (1.0 + band));
            ForecastPoint {
                step,
                position,
                value: bounds.clamp_round(raw_value),
                lower: a.min(b),
                upper: a.max(b),
            }
        })
        .collect();

    Ok(TrendResult {
        metric: definition.key().to_string(),
        classification,
        current,
        near_term_forecast,
        mid_term_forecast,
        percent_change: percent_change(current, near_term_forecast),
        threshold_eta: forecast_crossing(definition.threshold(), &curve, anchor, bounds),
        display_range: compute_range(
            raw,
            &curve,
            &ensemble,
            band,
            definition.min_range(),
            anchor,
            bounds,
        ),
        error_band_ratio: band,
        effective_order: curve.degree(),
        history: values.iter().map(|&v| bounds.clamp_round(v)).collect(),
        fitted: curve.fitted_values().into_iter().map(|v| bounds.clamp_round(v)).collect(),
        forecast,
        outlier_indices: cleaned.outlier_indices(),
        inlier_bounds: cleaned.inlier_bounds(),
    })
}

// ---- Helper methods ----

fn percent_change(current: f64, forecast: f64) -> f64 {
    if current == 0.0 {
        return 0.0;
    }
    round_to((forecast - current) / current.abs() * 100.0, PERCENT_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trend::core::{
        bounds::ValueBounds, classify::TrendClassification, definition::FavorableDirection,
    };
    use approx::assert_abs_diff_eq;

    fn definition(min_range: f64) -> MetricDefinition {
        MetricDefinition::new(
            "Synthetic",
            "Synthetic metric",
            ValueBounds::new(0.0, 1000.0, 1).unwrap(),
            2,
            min_range,
            FavorableDirection::Neutral,
        )
        .unwrap()
    }

    #[test]
    // Purpose
    // -------
    // An empty series is computed as the single sample 0.
    //
    // Given
    // -----
    // - `MetricSeries::new(&[])`, min range 4.
    //
    // Expect
    // ------
    // - Flat, current 0, history [0], range [−2, 2], no outliers.
    fn empty_series_is_treated_as_single_zero() {
        // Arrange
        let series = MetricSeries::new(&[]).unwrap();

        // Act
        let result = compute_trend(&definition(4.0), &series).unwrap();

        // Assert
        assert_eq!(result.classification, TrendClassification::Flat);
        assert_eq!(result.current, 0.0);
        assert_eq!(result.history, vec![0.0]);
        assert_eq!(result.display_range, DisplayRange { min: -2.0, max: 2.0 });
        assert!(result.outlier_indices.is_empty());
        assert_eq!(result.percent_change, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Forecast points sit at anchor + step with an ordered band.
    //
    // Given
    // -----
    // - A noisy rising series [10, 13, 11, 16, 15, 19].
    //
    // Expect
    // ------
    // - Four points at positions 6..=9; lower <= value <= upper; the first
    //   point's value matches a direct ensemble evaluation.
    fn forecast_points_are_anchored_and_banded() {
        // Arrange
        let values = [10.0, 13.0, 11.0, 16.0, 15.0, 19.0];
        let series = MetricSeries::new(&values).unwrap();
        let def = definition(1.0);

        // Act
        let result = compute_trend(&def, &series).unwrap();

        // Assert
        let positions: Vec<usize> = result.forecast.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![6, 7, 8, 9]);
        for point in &result.forecast {
            assert!(point.lower <= point.value && point.value <= point.upper, "{point:?}");
        }
        let direct = ForecastEnsemble::build(&values).unwrap().evaluate(6.0);
        assert_abs_diff_eq!(result.forecast[0].value, def.bounds().clamp_round(direct));
        assert!(result.error_band_ratio > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Percent change is relative to the magnitude of the current value.
    fn percent_change_is_relative_and_guarded() {
        assert_abs_diff_eq!(percent_change(150.0, 190.0), 26.7, epsilon = 1e-9);
        assert_abs_diff_eq!(percent_change(-10.0, -5.0), 50.0, epsilon = 1e-9);
        assert_eq!(percent_change(0.0, 5.0), 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Unknown metric keys surface as `UnknownMetric`.
    fn compute_trend_for_reports_unknown_metric() {
        let series = MetricSeries::new(&[1.0]).unwrap();
        let err = compute_trend_for(&MetricRegistry::builtin(), "Nope", &series).unwrap_err();
        assert!(matches!(err, crate::trend::TrendError::UnknownMetric { .. }));
    }
}
