//! Predictor — the seam between curve construction and curve consumers.
//!
//! The error-band estimator, threshold scan, and range computation only ever
//! evaluate a curve at a position; they do not care whether it is the global
//! polynomial smoothing or the averaged trailing-window ensemble. Both
//! implement [`Predictor`], and so can test doubles.

/// A real-valued function of a (possibly extrapolated) series position.
///
/// Positions use the 0-based coordinates of the cleaned series: `0` is the
/// oldest retained sample and `len − 1` the newest. Positions beyond that
/// are forecasts.
pub trait Predictor {
    fn predict(&self, position: f64) -> f64;
}

impl<F> Predictor for F
where
    F: Fn(f64) -> f64,
{
    fn predict(&self, position: f64) -> f64 {
        self(position)
    }
}
