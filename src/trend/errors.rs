//! Errors for the quality-metric trend engine (metric definitions, registry
//! configuration, sample ingestion, and curve fitting).
//!
//! This module defines the engine error type, [`TrendError`], and the result
//! alias [`EngineResult`]. The engine itself never fails on a well-formed
//! numeric series: degenerate inputs are resolved by clamping, defaulting, or
//! sentinel values. Errors are reserved for configuration mistakes and for
//! malformed samples reaching the ingestion boundary.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to the raw series as supplied.
//! - Metric keys are reported verbatim so callers can surface them in logs.
//! - Least-squares failures from [`crate::numerics`] are normalized to
//!   [`TrendError::FitFailed`].
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::numerics::errors::NumericsError;

/// Crate-wide result alias for trend-engine operations.
pub type EngineResult<T> = Result<T, TrendError>;

/// Unified error type for the trend engine.
///
/// Covers sample validation, metric-definition checks, registry lookups and
/// parsing, and the (normally unreachable) least-squares failure path.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendError {
    // ---- Input/data validation ----
    /// A sample is NaN/±inf.
    NonFiniteSample { index: usize, value: f64 },

    // ---- Metric definition validation ----
    /// Metric key must be a non-empty string.
    EmptyMetricKey,

    /// Bounds must be ordered, non-NaN, and representable at the precision.
    InvalidBounds { lower: f64, upper: f64, reason: &'static str },

    /// Rounding precision exceeds the supported number of digits.
    InvalidPrecision { precision: u32, max: u32 },

    /// Minimum display range must be finite and non-negative.
    InvalidMinRange { value: f64 },

    /// Threshold value must be finite.
    InvalidThreshold { value: f64 },

    /// Outlier fence multiplier must be finite and > 0.
    InvalidFence { value: f64 },

    // ---- Registry ----
    /// Two definitions share the same metric key.
    DuplicateMetric { key: String },

    /// No definition is registered for the requested key.
    UnknownMetric { key: String },

    /// Registry JSON could not be parsed.
    InvalidRegistryJson { reason: String },

    // ---- Fitting ----
    /// Least-squares backend failed; include a human-readable reason.
    FitFailed { reason: String },
}

impl std::error::Error for TrendError {}

impl std::fmt::Display for TrendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            TrendError::NonFiniteSample { index, value } => {
                write!(f, "Sample at index {index} is non-finite: {value}")
            }
            // ---- Metric definition validation ----
            TrendError::EmptyMetricKey => write!(f, "Metric key must not be empty."),
            TrendError::InvalidBounds { lower, upper, reason } => {
                write!(f, "Invalid metric bounds [{lower}, {upper}]; {reason}")
            }
            TrendError::InvalidPrecision { precision, max } => {
                write!(f, "Precision must be at most {max} digits; got: {precision}")
            }
            TrendError::InvalidMinRange { value } => {
                write!(f, "Minimum display range must be finite and >= 0; got: {value}")
            }
            TrendError::InvalidThreshold { value } => {
                write!(f, "Threshold must be finite; got: {value}")
            }
            TrendError::InvalidFence { value } => {
                write!(f, "Outlier fence multiplier must be finite and > 0; got: {value}")
            }
            // ---- Registry ----
            TrendError::DuplicateMetric { key } => {
                write!(f, "Metric '{key}' is defined more than once.")
            }
            TrendError::UnknownMetric { key } => {
                write!(f, "No metric definition registered for '{key}'.")
            }
            TrendError::InvalidRegistryJson { reason } => {
                write!(f, "Metric registry JSON is invalid: {reason}")
            }
            // ---- Fitting ----
            TrendError::FitFailed { reason } => write!(f, "Curve fit failed: {reason}"),
        }
    }
}

impl From<NumericsError> for TrendError {
    fn from(err: NumericsError) -> Self {
        TrendError::FitFailed { reason: err.to_string() }
    }
}

impl From<serde_json::Error> for TrendError {
    fn from(err: serde_json::Error) -> Self {
        TrendError::InvalidRegistryJson { reason: err.to_string() }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TrendError> for PyErr {
    fn from(err: TrendError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
