//! Relative mean-absolute-error band between a fitted curve and the data it
//! smooths.
//!
//! The ratio `mean|yᵢ − f(i)| / mean|yᵢ|` is a fraction, not a coefficient
//! of determination. The engine applies it symmetrically to forecasts as
//! `forecast × (1 ± ratio)`.
use log::debug;

use crate::trend::core::traits::Predictor;

/// Mean absolute residual of `curve` over `values`, relative to the mean
/// absolute value of `values`.
///
/// Returns `0` for empty input or when every value is zero.
pub fn error_band_ratio<P: Predictor>(values: &[f64], curve: &P) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean_abs_error =
        values.iter().enumerate().map(|(i, &y)| (y - curve.predict(i as f64)).abs()).sum::<f64>()
            / n;
    let mean_abs_value = values.iter().map(|y| y.abs()).sum::<f64>() / n;
    if mean_abs_value == 0.0 {
        debug!("error band: mean absolute value is zero; reporting a zero band");
        return 0.0;
    }
    mean_abs_error / mean_abs_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    // Purpose
    // -------
    // Hand-computed ratio against a constant predictor.
    //
    // Given
    // -----
    // - values [8, 12], curve ≡ 10.
    //
    // Expect
    // ------
    // - mean|err| = 2, mean|y| = 10, ratio = 0.2.
    fn ratio_matches_hand_computation() {
        let ratio = error_band_ratio(&[8.0, 12.0], &|_: f64| 10.0);
        assert_abs_diff_eq!(ratio, 0.2, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // A perfect fit yields a zero band.
    fn ratio_is_zero_for_exact_fit() {
        let ratio = error_band_ratio(&[1.0, 2.0, 3.0], &|x: f64| 1.0 + x);
        assert_abs_diff_eq!(ratio, 0.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // All-zero data returns 0 instead of NaN/inf.
    //
    // Given
    // -----
    // - values [0, 0, 0], curve ≡ 1 (non-zero error).
    //
    // Expect
    // ------
    // - Exactly 0.
    fn ratio_guards_zero_mean_value() {
        assert_eq!(error_band_ratio(&[0.0, 0.0, 0.0], &|_: f64| 1.0), 0.0);
        assert_eq!(error_band_ratio(&[], &|_: f64| 1.0), 0.0);
    }
}
