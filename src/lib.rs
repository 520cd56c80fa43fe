//! quality_trends — trend classification and short-horizon forecasts for
//! code-quality metrics, with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and, with the `python-bindings`
//! feature, as the PyO3 bridge exposing the trend engine through the
//! `_quality_trends` extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules: [`trend`] (metric registry, series,
//!   pipeline stages, engine, cache) and [`numerics`] (least squares,
//!   rounding).
//! - Define the `TrendReport` `#[pyclass]`, the `compute_trend` /
//!   `metric_keys` `#[pyfunction]`s, and the `#[pymodule]` initializer.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work happens in the inner modules; this file performs
//!   only FFI glue and error mapping.
//! - Python callers always use [`trend::MetricRegistry::builtin`].
//!
//! Conventions
//! -----------
//! - `TrendError`s raised through the bindings surface as `ValueError`.
//!
//! Downstream usage
//! ----------------
//! - Rust code should depend on [`trend`] (or [`trend::prelude`]) and can
//!   ignore the items gated behind `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Engine behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_trend_pipeline.rs`; the bindings add no logic of
//!   their own beyond conversion.

pub mod numerics;
pub mod trend;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    trend::{MetricRegistry, TrendResult, compute_trend_for},
    utils::extract_series,
};

/// TrendReport — Python-facing view of a [`TrendResult`].
///
/// Constructed only by `compute_trend(metric_key, values)`; every property
/// mirrors the field of the same name on [`TrendResult`].
#[cfg(feature = "python-bindings")]
#[pyclass(module = "quality_trends", frozen)]
pub struct TrendReport {
    inner: TrendResult,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl TrendReport {
    #[getter]
    pub fn metric(&self) -> String {
        self.inner.metric.clone()
    }

    /// `"up"`, `"flat"` or `"down"`.
    #[getter]
    pub fn classification(&self) -> &'static str {
        self.inner.classification.as_str()
    }

    #[getter]
    pub fn current(&self) -> f64 {
        self.inner.current
    }

    #[getter]
    pub fn near_term_forecast(&self) -> f64 {
        self.inner.near_term_forecast
    }

    #[getter]
    pub fn mid_term_forecast(&self) -> f64 {
        self.inner.mid_term_forecast
    }

    #[getter]
    pub fn percent_change(&self) -> f64 {
        self.inner.percent_change
    }

    /// Commits until the danger threshold is reached, or `None`.
    #[getter]
    pub fn threshold_eta(&self) -> Option<usize> {
        self.inner.threshold_eta
    }

    /// `(min, max)` of the chart value axis.
    #[getter]
    pub fn display_range(&self) -> (f64, f64) {
        (self.inner.display_range.min, self.inner.display_range.max)
    }

    #[getter]
    pub fn error_band_ratio(&self) -> f64 {
        self.inner.error_band_ratio
    }

    #[getter]
    pub fn effective_order(&self) -> usize {
        self.inner.effective_order
    }

    #[getter]
    pub fn history(&self) -> Vec<f64> {
        self.inner.history.clone()
    }

    #[getter]
    pub fn fitted(&self) -> Vec<f64> {
        self.inner.fitted.clone()
    }

    /// `[(step, value, lower, upper), ...]` for steps 1..=4.
    #[getter]
    pub fn forecast(&self) -> Vec<(usize, f64, f64, f64)> {
        self.inner.forecast.iter().map(|p| (p.step, p.value, p.lower, p.upper)).collect()
    }

    #[getter]
    pub fn outlier_indices(&self) -> Vec<usize> {
        self.inner.outlier_indices.clone()
    }

    /// Serialize the full result as camelCase JSON.
    pub fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "TrendReport(metric={:?}, classification={:?}, current={}, threshold_eta={:?})",
            self.inner.metric,
            self.inner.classification.as_str(),
            self.inner.current,
            self.inner.threshold_eta
        )
    }
}

/// Compute the trend of `values` for the built-in metric `metric_key`.
///
/// `values` may be a numpy array, a pandas Series, or a sequence of
/// `float | None` (`None` is read as `0`).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "compute_trend", signature = (metric_key, values))]
fn py_compute_trend<'py>(metric_key: &str, values: &Bound<'py, PyAny>) -> PyResult<TrendReport> {
    let series = extract_series(values)?;
    let inner = compute_trend_for(&MetricRegistry::builtin(), metric_key, &series)?;
    Ok(TrendReport { inner })
}

/// Keys of the built-in metric registry, sorted.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn metric_keys() -> Vec<String> {
    MetricRegistry::builtin().keys().map(str::to_string).collect()
}

/// Python module initializer for `_quality_trends`.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _quality_trends(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<TrendReport>()?;
    m.add_function(wrap_pyfunction!(py_compute_trend, m)?)?;
    m.add_function(wrap_pyfunction!(metric_keys, m)?)?;
    Ok(())
}
