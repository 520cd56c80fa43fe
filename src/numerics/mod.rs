//! numerics — least-squares regression and decimal rounding primitives.
//!
//! Purpose
//! -------
//! Collect the small numerical kernels shared by every stage of the trend
//! engine: polynomial least squares (ndarray design matrix solved through a
//! nalgebra SVD), Horner evaluation, and precision-aware rounding. Keeping
//! them here lets the trend layer read as policy rather than arithmetic.
//!
//! Key behaviors
//! -------------
//! - [`least_squares`]: Vandermonde construction, SVD solve, Horner.
//! - [`rounding`]: half-away-from-zero decimal rounding, representability
//!   checks, and shared tolerances.
//! - [`errors`]: [`NumericsError`] / [`NumericsResult`] for shape and solver
//!   failures, lifted into `TrendError` by the trend layer.
//!
//! Conventions
//! -----------
//! - Everything here is pure: no logging, no I/O, no global state.
//! - Polynomial coefficients are ascending-power `Array1<f64>` vectors.

pub mod errors;
pub mod least_squares;
pub mod rounding;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{NumericsError, NumericsResult};
pub use self::least_squares::{horner, solve_least_squares, vandermonde};
pub use self::rounding::{MAX_PRECISION, ROUNDING_TOL, SVD_EPS, is_representable, round_to};
