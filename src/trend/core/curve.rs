//! Global polynomial smoothing of a cleaned metric series.
//!
//! Purpose
//! -------
//! Fit an ordinary least-squares polynomial through `(i, values[i])` for
//! `i = 0..len` and expose it as an evaluable [`FittedCurve`]. The curve is
//! drawn over the history as the smoothed trend line and extrapolated a few
//! positions ahead for the threshold forecast.
//!
//! Key behaviors
//! -------------
//! - Cap the requested order at `len − 1` via [`effective_degree`] so the
//!   system is never underdetermined; a single sample yields the constant
//!   curve through it.
//! - Delegate the solve to [`crate::numerics::least_squares`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are finite. An empty slice yields the zero constant; the engine
//!   never passes one.
//! - `degree() == effective_degree(order, len)` for every fitted curve.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exact recovery, degree clamping, the single-sample
//!   constant, extrapolation, and a property test for the degree rule.
use log::debug;
use ndarray::Array1;

use crate::{
    numerics::least_squares::{horner, solve_least_squares, vandermonde},
    trend::{core::traits::Predictor, errors::EngineResult},
};

/// Polynomial degree actually fitted for `len` points at a requested
/// `order`: `min(order, len − 1)`, and `0` for empty input.
pub fn effective_degree(order: usize, len: usize) -> usize {
    order.min(len.saturating_sub(1))
}

/// FittedCurve — least-squares polynomial over series positions.
///
/// Fields
/// ------
/// - `coefficients`: ascending-power coefficients (`c[0]` is the intercept).
/// - `len`: number of samples the curve was fitted to.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedCurve {
    coefficients: Array1<f64>,
    len: usize,
}

impl FittedCurve {
    /// Fit a polynomial of degree `min(order, values.len() − 1)`.
    ///
    /// Errors
    /// ------
    /// - `TrendError::FitFailed` if the SVD backend fails, which does not
    ///   happen for finite input under the degree cap.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use quality_trends::trend::core::{curve::FittedCurve, traits::Predictor};
    /// let curve = FittedCurve::fit(&[1.0, 3.0, 5.0, 7.0], 1).unwrap();
    /// assert!((curve.predict(4.0) - 9.0).abs() < 1e-9);
    /// ```
    pub fn fit(values: &[f64], order: usize) -> EngineResult<Self> {
        if values.is_empty() {
            return Ok(FittedCurve { coefficients: Array1::zeros(1), len: 0 });
        }
        let degree = effective_degree(order, values.len());
        if degree < order {
            debug!(
                "polynomial order {order} capped at {degree} for a {}-point series",
                values.len()
            );
        }
        let positions: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        let design = vandermonde(&positions, degree);
        let targets = Array1::from_iter(values.iter().copied());
        let coefficients = solve_least_squares(&design, &targets)?;
        Ok(FittedCurve { coefficients, len: values.len() })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Number of samples the curve was fitted to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Curve values at every fitted position `0..len`.
    pub fn fitted_values(&self) -> Vec<f64> {
        (0..self.len).map(|i| self.predict(i as f64)).collect()
    }
}

impl Predictor for FittedCurve {
    fn predict(&self, position: f64) -> f64 {
        horner(&self.coefficients, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const TOL: f64 = 1e-8;

    #[test]
    // Purpose
    // -------
    // A single sample yields the constant curve through it.
    //
    // Given
    // -----
    // - [42] at requested order 3.
    //
    // Expect
    // ------
    // - Degree 0; predictions at 0 and 7 are both 42.
    fn fit_single_sample_is_constant() {
        // Act
        let curve = FittedCurve::fit(&[42.0], 3).unwrap();

        // Assert
        assert_eq!(curve.degree(), 0);
        assert_abs_diff_eq!(curve.predict(0.0), 42.0, epsilon = TOL);
        assert_abs_diff_eq!(curve.predict(7.0), 42.0, epsilon = TOL);
    }

    #[test]
    // Purpose
    // -------
    // A quadratic fit to linear data reproduces and extrapolates the line.
    //
    // Given
    // -----
    // - y = 1 + 0.5 i for i = 0..6 at order 2.
    //
    // Expect
    // ------
    // - Degree 2; predict(6) = 4 and predict(9) = 5.5.
    fn fit_extrapolates_linear_data() {
        // Arrange
        let values = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5];

        // Act
        let curve = FittedCurve::fit(&values, 2).unwrap();

        // Assert
        assert_eq!(curve.degree(), 2);
        assert_abs_diff_eq!(curve.predict(6.0), 4.0, epsilon = TOL);
        assert_abs_diff_eq!(curve.predict(9.0), 5.5, epsilon = TOL);
    }

    #[test]
    // Purpose
    // -------
    // Fitted values over the history match the smoothing, not the raw data.
    //
    // Given
    // -----
    // - [1, 3, 2, 5] at order 1 (closed form: 1.1 + 1.1 i).
    //
    // Expect
    // ------
    // - Fitted values [1.1, 2.2, 3.3, 4.4].
    fn fitted_values_follow_least_squares_line() {
        let curve = FittedCurve::fit(&[1.0, 3.0, 2.0, 5.0], 1).unwrap();
        let fitted = curve.fitted_values();
        for (got, want) in fitted.iter().zip([1.1, 2.2, 3.3, 4.4]) {
            assert_abs_diff_eq!(*got, want, epsilon = TOL);
        }
    }

    #[test]
    // Purpose
    // -------
    // Empty input degrades to the zero constant rather than failing.
    fn fit_empty_is_zero_constant() {
        let curve = FittedCurve::fit(&[], 2).unwrap();
        assert!(curve.is_empty());
        assert_eq!(curve.predict(3.0), 0.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_degree_is_min_of_order_and_len_minus_one(
            values in prop::collection::vec(-1000.0f64..1000.0, 1..20),
            order in 0usize..6,
        ) {
            let curve = FittedCurve::fit(&values, order).unwrap();
            prop_assert_eq!(curve.degree(), order.min(values.len() - 1));
            prop_assert_eq!(curve.degree(), effective_degree(order, values.len()));
        }
    }
}
