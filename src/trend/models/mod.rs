//! trend::models — the assembled trend engine and its memo cache.
//!
//! Purpose
//! -------
//! Wire the stages from [`crate::trend::core`] into the public
//! [`compute_trend`] operation and provide [`TrendCache`] for callers that
//! recompute the same metric repeatedly.
//!
//! Testing notes
//! -------------
//! - [`engine`] tests cover result assembly; [`cache`] tests cover hit/miss
//!   bookkeeping. End-to-end tests live in `tests/integration_trend_pipeline.rs`.

pub mod cache;
pub mod engine;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cache::TrendCache;
pub use self::engine::{
    ForecastPoint, TrendResult, compute_trend, compute_trend_for, compute_trend_with,
};
