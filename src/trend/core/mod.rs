//! trend::core — metric configuration, series types, and the individual
//! stages of the trend pipeline.
//!
//! Purpose
//! -------
//! House the building blocks that [`crate::trend::models::engine`] wires
//! together. Each stage is usable on its own and is connected to the others
//! only through the typed values defined here.
//!
//! Key behaviors
//! -------------
//! - Configuration: [`bounds`] (domain clamp + precision),
//!   [`definition`] (per-metric settings and threshold), [`registry`]
//!   (immutable key → definition table).
//! - Data: [`series`] (validated raw samples, cleaned subset).
//! - Stages, leaves first: [`outliers`] → [`curve`] (global polynomial) →
//!   [`error_band`]; [`ensemble`] (trailing-window lines) → [`classify`];
//!   [`threshold`] (scan of the global polynomial); [`range`] (display
//!   interval over everything plotted).
//! - [`traits::Predictor`] is the common evaluation seam for curves.
//!
//! Invariants & assumptions
//! ------------------------
//! - All values exposed to callers pass through
//!   [`bounds::ValueBounds::clamp_round`].
//! - Positions are 0-based over the cleaned series; `anchor = len − 1`.
//!
//! Conventions
//! -----------
//! - Stages are pure functions of their inputs; only the degenerate-case
//!   branches emit `log` debug records.
//!
//! Testing notes
//! -------------
//! - Each stage carries unit tests and, where a general invariant exists, a
//!   `proptest` property. End-to-end scenarios live in
//!   `tests/integration_trend_pipeline.rs`.

pub mod bounds;
pub mod classify;
pub mod curve;
pub mod definition;
pub mod ensemble;
pub mod error_band;
pub mod outliers;
pub mod range;
pub mod registry;
pub mod series;
pub mod threshold;
pub mod traits;

pub use self::bounds::ValueBounds;
pub use self::classify::{TrendAssessment, TrendClassification, classify, classify_values};
pub use self::curve::{FittedCurve, effective_degree};
pub use self::definition::{
    FavorableDirection, MetricDefinition, MetricDefinitionConfig, ThresholdDirection,
    ThresholdForecast,
};
pub use self::ensemble::ForecastEnsemble;
pub use self::error_band::error_band_ratio;
pub use self::outliers::OutlierFilter;
pub use self::range::{DisplayRange, compute_range};
pub use self::registry::MetricRegistry;
pub use self::series::{CleanedSeries, MetricSeries};
pub use self::threshold::forecast_crossing;
pub use self::traits::Predictor;
