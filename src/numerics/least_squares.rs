//! Ordinary least-squares polynomial regression — Vandermonde design plus an
//! SVD solve.
//!
//! Purpose
//! -------
//! Provide the single numerical kernel behind every curve in the trend
//! engine: fit coefficients `c₀..c_d` minimizing `Σ (yᵢ − Σⱼ cⱼ xᵢʲ)²` and
//! evaluate the resulting polynomial anywhere on the real line.
//!
//! Key behaviors
//! -------------
//! - Build the `n × (d + 1)` Vandermonde design matrix in `ndarray` form.
//! - Copy it into a `nalgebra::DMatrix` and solve the least-squares system
//!   through a thin SVD, which handles rank-deficient designs gracefully.
//! - Evaluate polynomials with Horner's scheme.
//!
//! Invariants & assumptions
//! ------------------------
//! - Callers never request more coefficients than points; this is checked
//!   and reported as [`NumericsError::Underdetermined`].
//! - Positions are small non-negative indices (≤ a few dozen), so the
//!   monomial basis stays well-conditioned for the low degrees used.
//!
//! Conventions
//! -----------
//! - Coefficients are stored in ascending power order: `c[0]` is the
//!   intercept, `c[d]` multiplies `xᵈ`.
//! - Pure functions: no logging, no global state.
//!
//! Testing notes
//! -------------
//! - Unit tests recover exact lines and parabolas, check the least-squares
//!   solution on a noisy line against the closed form, and exercise the
//!   shape-error branches.
use crate::numerics::{
    errors::{NumericsError, NumericsResult},
    rounding::SVD_EPS,
};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

/// vandermonde — design matrix of monomials `xᵢʲ` for `j = 0..=degree`.
///
/// Parameters
/// ----------
/// - `positions`: `&[f64]`
///   Abscissae `xᵢ`, one per row.
/// - `degree`: `usize`
///   Highest power; the matrix has `degree + 1` columns.
///
/// Returns
/// -------
/// `Array2<f64>`
///   Row-major `n × (degree + 1)` design with a leading column of ones.
pub fn vandermonde(positions: &[f64], degree: usize) -> Array2<f64> {
    Array2::from_shape_fn((positions.len(), degree + 1), |(i, j)| positions[i].powi(j as i32))
}

/// solve_least_squares — minimize `‖X c − y‖₂` over `c`.
///
/// Parameters
/// ----------
/// - `design`: `&Array2<f64>`
///   `n × k` design matrix (typically from [`vandermonde`]).
/// - `targets`: `&Array1<f64>`
///   Length-`n` response vector.
///
/// Returns
/// -------
/// `NumericsResult<Array1<f64>>`
///   Length-`k` coefficient vector.
///
/// Errors
/// ------
/// - `NumericsError::DimensionMismatch` when `targets.len() != n`.
/// - `NumericsError::Underdetermined` when `n < k`.
/// - `NumericsError::SolveFailed` if the SVD backend rejects the system.
///
/// Notes
/// -----
/// - The copy into `nalgebra` is column-major to match `DMatrix` storage.
/// - Singular values at or below [`SVD_EPS`] are zeroed, yielding the
///   minimum-norm solution on rank-deficient designs.
pub fn solve_least_squares(
    design: &Array2<f64>, targets: &Array1<f64>,
) -> NumericsResult<Array1<f64>> {
    let (rows, cols) = design.dim();
    if targets.len() != rows {
        return Err(NumericsError::DimensionMismatch { rows, targets: targets.len() });
    }
    if rows < cols {
        return Err(NumericsError::Underdetermined { points: rows, coefficients: cols });
    }

    let mut design_nalg = DMatrix::<f64>::zeros(rows, cols);
    fill_dmatrix(design, &mut design_nalg);
    let rhs = DVector::from_iterator(rows, targets.iter().copied());

    let svd = design_nalg.svd(true, true);
    let solution =
        svd.solve(&rhs, SVD_EPS).map_err(|reason| NumericsError::SolveFailed { reason })?;
    Ok(Array1::from_iter(solution.iter().copied()))
}

/// horner — evaluate `Σⱼ cⱼ xʲ` with ascending-order coefficients.
pub fn horner(coefficients: &Array1<f64>, x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

// ---- Helper methods ----

fn fill_dmatrix(design: &Array2<f64>, design_nalg: &mut DMatrix<f64>) {
    for j in 0..design.ncols() {
        for i in 0..design.nrows() {
            design_nalg[(i, j)] = design[[i, j]];
        }
    }
}
