//! Trailing-window linear ensemble — the smoothed near-term forecaster.
//!
//! Purpose
//! -------
//! Produce a short-horizon forecast that does not hinge on one choice of
//! look-back window. For every window length `w = 2..=N`, the `w` most
//! recent samples are fitted with a straight line, and the ensemble's value
//! at a position is the mean of all those lines at that position.
//!
//! Key behaviors
//! -------------
//! - Each member line is fitted on **local** indices `0..w`: local `0` is
//!   the oldest sample in its window and local `w − 1` is the series' newest
//!   sample.
//! - [`ForecastEnsemble::evaluate`] feeds the *same* position to every
//!   member, whatever its window length. Members with different `w` have
//!   differently anchored local axes, so a shared position means a
//!   different distance past the newest sample for each of them. The
//!   dashboard's forecasts depend on exactly this averaging, and it is
//!   reproduced here without realignment.
//! - With fewer than two samples there are no members and every position
//!   evaluates to the last observed value.
//!
//! Invariants & assumptions
//! ------------------------
//! - `members().len() == N − 1` for `N >= 2`, else `0`.
//! - Member `k` (0-based) was fitted on the trailing window of length
//!   `k + 2`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the degenerate cases, exact lines (every member
//!   coincides up to its local shift), and a hand-computed mean for a
//!   non-linear series.
use crate::trend::{
    core::{curve::FittedCurve, traits::Predictor},
    errors::EngineResult,
};

/// ForecastEnsemble — mean of trailing-window linear fits.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEnsemble {
    members: Vec<FittedCurve>,
    last: f64,
}

impl ForecastEnsemble {
    /// Fit one degree-1 line per trailing window `w = 2..=values.len()`.
    ///
    /// Errors
    /// ------
    /// - `TrendError::FitFailed` only if the least-squares backend fails.
    pub fn build(values: &[f64]) -> EngineResult<Self> {
        let n = values.len();
        let members = (2..=n)
            .map(|w| FittedCurve::fit(&values[n - w..], 1))
            .collect::<EngineResult<Vec<_>>>()?;
        Ok(ForecastEnsemble { members, last: values.last().copied().unwrap_or(0.0) })
    }

    /// Mean of all member lines at `position`, or the last observed value
    /// when the ensemble is empty.
    pub fn evaluate(&self, position: f64) -> f64 {
        if self.members.is_empty() {
            return self.last;
        }
        let total: f64 = self.members.iter().map(|line| line.predict(position)).sum();
        total / self.members.len() as f64
    }

    pub fn members(&self) -> &[FittedCurve] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Predictor for ForecastEnsemble {
    fn predict(&self, position: f64) -> f64 {
        self.evaluate(position)
    }
}
