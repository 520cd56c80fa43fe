//! numerics::errors — failure modes of the shared least-squares primitives.
//!
//! Purpose
//! -------
//! Give the numeric helpers in [`crate::numerics`] their own small error
//! surface so they do not depend on any particular model layer. The trend
//! engine lifts these into [`crate::trend::TrendError`] via `From`.
//!
//! Conventions
//! -----------
//! - Shapes are reported as `(rows, cols)` of the design matrix.
//! - Every variant is cheap to clone and compare so it can be asserted on
//!   directly in tests.

/// Result alias for routines in [`crate::numerics`].
pub type NumericsResult<T> = Result<T, NumericsError>;

/// NumericsError — shape and solver failures in least-squares fitting.
///
/// Variants
/// --------
/// - `DimensionMismatch { rows, targets }`
///   The design matrix and target vector disagree on the number of points.
/// - `Underdetermined { points, coefficients }`
///   Fewer points than free coefficients were supplied.
/// - `SolveFailed { reason }`
///   The SVD backend refused to solve the system.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericsError {
    DimensionMismatch { rows: usize, targets: usize },
    Underdetermined { points: usize, coefficients: usize },
    SolveFailed { reason: &'static str },
}

impl std::error::Error for NumericsError {}

impl std::fmt::Display for NumericsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericsError::DimensionMismatch { rows, targets } => {
                write!(f, "Design matrix has {rows} rows but {targets} targets were supplied.")
            }
            NumericsError::Underdetermined { points, coefficients } => write!(
                f,
                "Underdetermined least squares: {points} points, {coefficients} coefficients."
            ),
            NumericsError::SolveFailed { reason } => {
                write!(f, "Least-squares solve failed: {reason}")
            }
        }
    }
}
