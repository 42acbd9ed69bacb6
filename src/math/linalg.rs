//! Linear algebra backend abstraction.
//!
//! ## Purpose
//!
//! This module provides the two factorization primitives metrics consume:
//! Cholesky factorization of a symmetric positive-definite matrix and the
//! triangular solve against its factor. Both delegate to nalgebra.
//!
//! ## Design notes
//!
//! * Matrices cross this boundary as flat row-major slices, matching
//!   `SquareMatrix` storage.
//! * Failures come back as `None`; callers map them onto `MetricError`.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//!
//! ## Key concepts
//!
//! * **Orientation**: A `Lower` factor satisfies `Σ = L·Lᵀ`, an `Upper` one
//!   `Σ = Uᵀ·U`. The solve always whitens against `Σ`, so for an upper factor
//!   it solves `Uᵀ·y = b`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::matrix::Triangle;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + Send + Sync + 'static {
    /// Cholesky factor of the row-major `n × n` matrix `a` in the requested orientation.
    fn cholesky(a: &[Self], n: usize, triangle: Triangle) -> Option<Vec<Self>>;
    /// Whitening solve `y` with `‖y‖² = bᵀ Σ⁻¹ b` for the factor of `Σ`.
    fn solve_triangular(factor: &[Self], b: &[Self], n: usize, triangle: Triangle)
        -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn cholesky(a: &[Self], n: usize, triangle: Triangle) -> Option<Vec<Self>> {
        nalgebra_backend::cholesky(a, n, triangle)
    }
    #[inline]
    fn solve_triangular(
        factor: &[Self],
        b: &[Self],
        n: usize,
        triangle: Triangle,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_triangular(factor, b, n, triangle)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn cholesky(a: &[Self], n: usize, triangle: Triangle) -> Option<Vec<Self>> {
        nalgebra_backend::cholesky(a, n, triangle)
    }
    #[inline]
    fn solve_triangular(
        factor: &[Self],
        b: &[Self],
        n: usize,
        triangle: Triangle,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_triangular(factor, b, n, triangle)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Cholesky factorization; only the lower triangle of `a` is read.
    ///
    /// Fails on a negative, zero or NaN pivot.
    pub fn cholesky<T: RealField + Copy>(a: &[T], n: usize, triangle: Triangle) -> Option<Vec<T>> {
        let matrix = DMatrix::from_row_slice(n, n, a);
        let lower = matrix.cholesky()?.l();
        if lower.diagonal().iter().any(|&d| !(d > T::zero())) {
            return None;
        }

        // Column-major storage of Lᵀ is the row-major storage of L, and vice versa.
        let factor = match triangle {
            Triangle::Lower => lower.transpose(),
            Triangle::Upper => lower,
        };
        Some(factor.as_slice().to_vec())
    }

    /// Solve `L·y = b` (lower) or `Uᵀ·y = b` (upper).
    pub fn solve_triangular<T: RealField + Copy>(
        factor: &[T],
        b: &[T],
        n: usize,
        triangle: Triangle,
    ) -> Option<Vec<T>> {
        let matrix = DMatrix::from_row_slice(n, n, factor);
        let rhs = DVector::from_column_slice(b);

        let solution = match triangle {
            Triangle::Lower => matrix.solve_lower_triangular(&rhs),
            Triangle::Upper => matrix.tr_solve_upper_triangular(&rhs),
        }?;
        Some(solution.as_slice().to_vec())
    }
}
