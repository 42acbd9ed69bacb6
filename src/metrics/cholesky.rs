//! Metric parameterized by a Cholesky factor.
//!
//! ## Purpose
//!
//! This module provides `cholesky_metric`, the quadratic form
//! `r ↦ rᵀ Σ⁻¹ r` for `Σ` given through its triangular factor. The inverse is
//! never formed: the metric solves the triangular system and takes the squared
//! norm of the solution.
//!
//! ## Key concepts
//!
//! * **Lower**: `Σ = L·Lᵀ`; the stage solves `L·y = r`.
//! * **Upper**: `Σ = Uᵀ·U`; the stage solves `Uᵀ·y = r`.
//!
//! In both orientations `‖y‖² = rᵀ Σ⁻¹ r`, so a factor and its transpose with
//! the opposite flag describe the same metric. The units of the factor are
//! length: `cholesky_metric(diag(ell))` equals `diagonal_metric(ell)`.
//!
//! ## Non-goals
//!
//! * The factor is not checked for triangularity or a positive diagonal.
//!   A zero pivot surfaces as `MetricError::SingularFactor` at evaluation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::metrics::compose::{compose, Compose, Stage};
use crate::metrics::unit::UnitMetric;
use crate::primitives::errors::MetricError;
use crate::primitives::matrix::{SquareMatrix, Triangle};

// ============================================================================
// TriangularSolve Stage
// ============================================================================

/// Whitening transform `r ↦ y` with `‖y‖² = rᵀ Σ⁻¹ r`.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularSolve<T> {
    factor: SquareMatrix<T>,
    triangle: Triangle,
}

impl<T: FloatLinalg> TriangularSolve<T> {
    /// Solve against `factor`, read as the given triangle.
    #[inline]
    pub fn new(factor: SquareMatrix<T>, triangle: Triangle) -> Self {
        Self { factor, triangle }
    }

    /// The captured factor.
    #[inline]
    pub fn factor(&self) -> &SquareMatrix<T> {
        &self.factor
    }

    /// Orientation of the captured factor.
    #[inline]
    pub fn triangle(&self) -> Triangle {
        self.triangle
    }

    fn solve(&self, r: &[T]) -> Result<Vec<T>, MetricError> {
        let n = self.factor.dim();
        if n == 0 {
            return Err(MetricError::EmptyInput);
        }
        if r.len() != n {
            return Err(MetricError::DimensionMismatch {
                expected: n,
                got: r.len(),
            });
        }
        T::solve_triangular(self.factor.as_slice(), r, n, self.triangle)
            .ok_or(MetricError::SingularFactor)
    }
}

impl<'a, T: FloatLinalg> Stage<&'a [T]> for TriangularSolve<T> {
    type Output = Vec<T>;

    #[inline]
    fn apply(&self, r: &'a [T]) -> Result<Vec<T>, MetricError> {
        self.solve(r)
    }
}

impl<T: FloatLinalg> Stage<Vec<T>> for TriangularSolve<T> {
    type Output = Vec<T>;

    #[inline]
    fn apply(&self, r: Vec<T>) -> Result<Vec<T>, MetricError> {
        self.solve(&r)
    }
}

// ============================================================================
// CholeskyMetric
// ============================================================================

/// `r ↦ ‖chol⁻¹ r‖²`.
pub type CholeskyMetric<T> = Compose<UnitMetric, TriangularSolve<T>>;

/// A general metric parameterized by its Cholesky factor.
pub fn cholesky_metric<T: FloatLinalg>(chol: SquareMatrix<T>, triangle: Triangle) -> CholeskyMetric<T> {
    compose(UnitMetric, TriangularSolve::new(chol, triangle))
}

impl<T: FloatLinalg> CholeskyMetric<T> {
    /// The captured triangular factor.
    #[inline]
    pub fn factor(&self) -> &SquareMatrix<T> {
        self.inner().factor()
    }

    /// Orientation of the captured factor.
    #[inline]
    pub fn triangle(&self) -> Triangle {
        self.inner().triangle()
    }

    /// Dimensionality `D`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.factor().dim()
    }
}
