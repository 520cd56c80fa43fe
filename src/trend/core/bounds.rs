//! Value bounds for quality metrics — the domain clamp and display precision
//! applied to every value the engine exposes.
//!
//! Purpose
//! -------
//! Provide a small, validated container for a metric's `[lower, upper]`
//! domain and its rounding precision, plus the `clamp_round` operation that
//! maps any raw model output onto a presentable metric value.
//!
//! Key behaviors
//! -------------
//! - Construct [`ValueBounds`] values that reject NaN bounds, inverted
//!   intervals, excessive precision, and bounds that cannot be expressed at
//!   the configured precision.
//! - Clamp into the domain, round, and clamp again so the result is always
//!   inside the interval and carries at most `precision` decimal digits.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lower <= upper`; either side may be infinite to leave the domain open.
//! - `precision <= MAX_PRECISION`.
//! - Finite bounds are multiples of `10^-precision`, so rounding a value in
//!   the interval never leaves it.
//!
//! Conventions
//! -----------
//! - Invalid configurations return `TrendError::InvalidBounds` /
//!   `TrendError::InvalidPrecision` rather than panicking.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every rejection branch of [`ValueBounds::new`] and the
//!   clamp/round behavior at, inside, and beyond both bounds; a property test
//!   checks the in-range and digit-count guarantees over random inputs.
use crate::{
    numerics::rounding::{MAX_PRECISION, is_representable, round_to},
    trend::errors::{EngineResult, TrendError},
};

/// ValueBounds — domain clamp and rounding precision for one metric.
///
/// Fields
/// ------
/// - `lower`: `f64`
///   Smallest admissible metric value (may be `-inf`).
/// - `upper`: `f64`
///   Largest admissible metric value (may be `+inf`).
/// - `precision`: `u32`
///   Number of decimal digits kept by [`ValueBounds::clamp_round`].
///
/// Invariants
/// ----------
/// - Established by [`ValueBounds::new`]; see the module docs.
///
/// Performance
/// -----------
/// - `Copy`; clamp/round is a handful of flops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueBounds {
    pub(crate) lower: f64,
    pub(crate) upper: f64,
    pub(crate) precision: u32,
}

impl ValueBounds {
    /// Construct validated bounds.
    ///
    /// Parameters
    /// ----------
    /// - `lower`, `upper`: `f64`
    ///   Domain interval; infinite values leave that side open.
    /// - `precision`: `u32`
    ///   Decimal digits kept when rounding.
    ///
    /// Errors
    /// ------
    /// - `TrendError::InvalidBounds`
    ///   Returned when either bound is NaN, `lower > upper`, `lower == +inf`,
    ///   `upper == -inf`, or a finite bound is not a multiple of
    ///   `10^-precision`.
    /// - `TrendError::InvalidPrecision`
    ///   Returned when `precision > MAX_PRECISION`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use quality_trends::trend::core::bounds::ValueBounds;
    /// let pct = ValueBounds::new(0.0, 100.0, 1).unwrap();
    /// assert_eq!(pct.clamp_round(101.37), 100.0);
    /// assert_eq!(pct.clamp_round(12.345), 12.3);
    ///
    /// assert!(ValueBounds::new(5.0, 1.0, 0).is_err());
    /// ```
    pub fn new(lower: f64, upper: f64, precision: u32) -> EngineResult<Self> {
        if precision > MAX_PRECISION {
            return Err(TrendError::InvalidPrecision { precision, max: MAX_PRECISION });
        }
        if lower.is_nan() || upper.is_nan() {
            return Err(TrendError::InvalidBounds {
                lower,
                upper,
                reason: "bounds must not be NaN.",
            });
        }
        if lower > upper {
            return Err(TrendError::InvalidBounds {
                lower,
                upper,
                reason: "lower bound must not exceed upper bound.",
            });
        }
        if lower == f64::INFINITY || upper == f64::NEG_INFINITY {
            return Err(TrendError::InvalidBounds {
                lower,
                upper,
                reason: "bounds must enclose at least one finite value.",
            });
        }
        if !is_representable(lower, precision) || !is_representable(upper, precision) {
            return Err(TrendError::InvalidBounds {
                lower,
                upper,
                reason: "finite bounds must be representable at the configured precision.",
            });
        }
        Ok(ValueBounds { lower, upper, precision })
    }

    /// Bounds that only round: `(-inf, +inf)` at `precision` digits.
    pub fn unbounded(precision: u32) -> EngineResult<Self> {
        ValueBounds::new(f64::NEG_INFINITY, f64::INFINITY, precision)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Clamp into `[lower, upper]` without rounding.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lower).min(self.upper)
    }

    /// Clamp into `[lower, upper]`, then round to `precision` digits.
    ///
    /// The result is always inside the interval because finite bounds are
    /// representable at the precision; the trailing clamp only absorbs
    /// floating-point residue at the edges.
    pub fn clamp_round(&self, value: f64) -> f64 {
        self.clamp(round_to(self.clamp(value), self.precision))
    }

    /// Whether `value` lies inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::rounding::ROUNDING_TOL;
    use proptest::prelude::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance of valid bounds, including open sides.
    // - Each rejection branch of `ValueBounds::new`.
    // - `clamp_round` below, inside, and above the interval.
    // - Property: output in range with at most `precision` digits.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that well-formed bounds are accepted and stored verbatim.
    //
    // Given
    // -----
    // - [0, 100] at precision 1 and an unbounded precision-2 domain.
    //
    // Expect
    // ------
    // - Both constructions succeed with the given fields.
    fn value_bounds_new_accepts_valid_inputs() {
        // Act
        let pct = ValueBounds::new(0.0, 100.0, 1).unwrap();
        let open = ValueBounds::unbounded(2).unwrap();

        // Assert
        assert_eq!((pct.lower(), pct.upper(), pct.precision()), (0.0, 100.0, 1));
        assert_eq!(open.lower(), f64::NEG_INFINITY);
        assert_eq!(open.upper(), f64::INFINITY);
    }

    #[test]
    // Purpose
    // -------
    // Exercise every rejection branch.
    //
    // Given
    // -----
    // - NaN bound, inverted interval, empty infinite interval, a bound not
    //   representable at the precision, and excessive precision.
    //
    // Expect
    // ------
    // - `InvalidBounds` for the first four, `InvalidPrecision` for the last.
    fn value_bounds_new_rejects_invalid_inputs() {
        for (lower, upper, precision) in [
            (f64::NAN, 1.0, 0),
            (5.0, 1.0, 0),
            (f64::INFINITY, f64::INFINITY, 0),
            (0.05, 1.0, 1),
        ] {
            match ValueBounds::new(lower, upper, precision) {
                Err(TrendError::InvalidBounds { .. }) => {}
                other => panic!("expected InvalidBounds for ({lower}, {upper}), got {other:?}"),
            }
        }
        assert_eq!(
            ValueBounds::new(0.0, 1.0, MAX_PRECISION + 1),
            Err(TrendError::InvalidPrecision { precision: MAX_PRECISION + 1, max: MAX_PRECISION })
        );
    }

    #[test]
    // Purpose
    // -------
    // Check clamp and rounding on both sides and inside the interval.
    //
    // Given
    // -----
    // - Bounds [0, 100] at precision 1.
    //
    // Expect
    // ------
    // - −3 → 0, 250 → 100, 42.26 → 42.3.
    fn clamp_round_clamps_then_rounds() {
        // Arrange
        let bounds = ValueBounds::new(0.0, 100.0, 1).unwrap();

        // Act / Assert
        assert_eq!(bounds.clamp_round(-3.0), 0.0);
        assert_eq!(bounds.clamp_round(250.0), 100.0);
        assert!((bounds.clamp_round(42.26) - 42.3).abs() < 1e-12);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_clamp_round_stays_in_range_with_bounded_digits(
            value in -1.0e6f64..1.0e6,
            lower in -1000i32..1000,
            width in 0i32..2000,
            precision in 0u32..5,
        ) {
            let lower = lower as f64;
            let upper = lower + width as f64;
            let bounds = ValueBounds::new(lower, upper, precision).unwrap();

            let out = bounds.clamp_round(value);

            prop_assert!(bounds.contains(out));
            let scaled = out * 10f64.powi(precision as i32);
            prop_assert!((scaled - scaled.round()).abs() <= ROUNDING_TOL * scaled.abs().max(1.0));
        }
    }
}
