//! PyO3 input helpers shared by the bindings in `lib.rs`.
//!
//! Everything here is compiled only with the `python-bindings` feature.
#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::trend::core::series::MetricSeries;

/// Convert a Python metric history into a [`MetricSeries`].
///
/// Accepts, in order of preference:
/// - a contiguous 1-D `numpy.ndarray` of `float64` (NaN is rejected),
/// - anything with a `to_numpy()` method yielding such an array (pandas),
/// - a sequence of `float | None`, where `None` is read as `0`.
///
/// Errors
/// ------
/// - `TypeError` when the object is none of the above.
/// - `ValueError` when a sample is not finite.
#[cfg(feature = "python-bindings")]
pub fn extract_series<'py>(raw_data: &Bound<'py, PyAny>) -> PyResult<MetricSeries> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if let Ok(slice) = arr_ro.as_slice() {
            return Ok(MetricSeries::new(slice)?);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if let Ok(slice) = series_ro.as_slice() {
                return Ok(MetricSeries::new(slice)?);
            }
        }
    }

    let values: Vec<Option<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float")
    })?;
    Ok(MetricSeries::from_optional(&values)?)
}
