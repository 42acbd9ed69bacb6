//! Metric parameterized by a full covariance matrix.
//!
//! The covariance has units of length², unlike the Cholesky factor, so
//! `dense_metric(diag(ell²))` equals `diagonal_metric(ell)`. Factorization
//! happens once, here; the returned metric only runs triangular solves.

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::metrics::cholesky::{cholesky_metric, CholeskyMetric};
use crate::primitives::errors::MetricError;
use crate::primitives::matrix::{SquareMatrix, Triangle};

/// A full-rank general metric `r ↦ rᵀ cov⁻¹ r`.
///
/// Only the lower triangle of `cov` is read by the factorization. A matrix
/// that is not positive definite fails here with
/// [`MetricError::NotPositiveDefinite`].
pub fn dense_metric<T: FloatLinalg>(
    cov: &SquareMatrix<T>,
    triangle: Triangle,
) -> Result<CholeskyMetric<T>, MetricError> {
    let n = cov.dim();
    let factor =
        T::cholesky(cov.as_slice(), n, triangle).ok_or(MetricError::NotPositiveDefinite)?;
    let chol = SquareMatrix::from_row_slice(n, &factor)?;
    Ok(cholesky_metric(chol, triangle))
}
