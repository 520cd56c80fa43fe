//! trend — quality-metric trend classification and short-horizon forecasts.
//!
//! Purpose
//! -------
//! Turn the per-commit history of a code-quality metric (lines of code,
//! cyclomatic complexity, comment density, duplication, ...) into what the
//! evolution view shows next to its chart: a direction chip (`up` / `flat`
//! / `down`), near- and mid-term forecasts, an optional "threshold reached
//! in N commits" warning, and a value-axis range that keeps small
//! fluctuations from looking dramatic.
//!
//! Key behaviors
//! -------------
//! - Configuration lives in [`core::MetricRegistry`]: one
//!   [`core::MetricDefinition`] per metric key with its domain bounds,
//!   display precision, polynomial order, minimum range, favorable
//!   direction, and optional danger threshold.
//! - [`models::compute_trend`] runs the pipeline: IQR outlier removal,
//!   global polynomial smoothing, mean-absolute-error band, ensemble of
//!   trailing-window linear fits, classification, threshold scan, and
//!   display range.
//! - [`models::TrendCache`] memoizes results per metric and series.
//! - All failures are reported through [`TrendError`] / [`EngineResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Samples are finite `f64`s, oldest first; the engine never sees NaN.
//! - Every value handed back to callers is clamped to the metric's bounds
//!   and rounded to its precision.
//! - Computation is pure and deterministic.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use quality_trends::trend::prelude::*;
//!
//! let registry = MetricRegistry::builtin();
//! let series = MetricSeries::new(&[3.0, 3.0, 3.0, 3.0]).unwrap();
//! let result = compute_trend_for(&registry, "CC", &series).unwrap();
//! assert_eq!(result.classification, TrendClassification::Flat);
//! assert_eq!(result.threshold_eta, None);
//! ```

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    CleanedSeries, DisplayRange, FavorableDirection, MetricDefinition, MetricDefinitionConfig,
    MetricRegistry, MetricSeries, OutlierFilter, ThresholdDirection, ThresholdForecast,
    TrendAssessment, TrendClassification, ValueBounds,
};

pub use self::errors::{EngineResult, TrendError};

pub use self::models::{
    ForecastPoint, TrendCache, TrendResult, compute_trend, compute_trend_for, compute_trend_with,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use quality_trends::trend::prelude::*;
//
// to import the registry, series, engine, and result types in one line.

pub mod prelude {
    pub use super::{
        DisplayRange, EngineResult, FavorableDirection, ForecastPoint, MetricDefinition,
        MetricRegistry, MetricSeries, ThresholdDirection, ThresholdForecast, TrendAssessment,
        TrendCache, TrendClassification, TrendError, TrendResult, ValueBounds, compute_trend,
        compute_trend_for,
    };
}
