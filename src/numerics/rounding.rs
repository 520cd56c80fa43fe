//! Decimal rounding and shared tolerances.
//!
//! Metric values are shown to users at a fixed number of decimal digits, so
//! every value leaving the engine is rounded half away from zero at the
//! metric's precision. The tolerances here are shared by the solver and by
//! definition validation.

/// Largest supported rounding precision (decimal digits).
///
/// `10^MAX_PRECISION` stays far below the range where `f64` loses integer
/// resolution for typical metric magnitudes.
pub const MAX_PRECISION: u32 = 10;

/// Singular values at or below this are treated as zero by the SVD solve.
pub const SVD_EPS: f64 = 1e-12;

/// Relative tolerance when checking that a bound is representable at a
/// given precision.
pub const ROUNDING_TOL: f64 = 1e-9;

/// Round `value` to `precision` decimal digits, half away from zero.
///
/// Non-finite inputs are returned unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Whether `value` is (numerically) a multiple of `10^-precision`.
///
/// Infinite values are considered representable; they act as open bounds.
pub fn is_representable(value: f64, precision: u32) -> bool {
    if value.is_infinite() {
        return true;
    }
    (round_to(value, precision) - value).abs() <= ROUNDING_TOL * value.abs().max(1.0)
}
