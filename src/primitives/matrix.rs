//! Square matrix storage and triangular orientation.
//!
//! ## Purpose
//!
//! Covariance matrices and Cholesky factors are small, dense and square. This
//! module provides an owned row-major container for them, independent of the
//! linear algebra backend, together with the `Triangle` orientation flag used
//! by factorization and triangular solves.
//!
//! ## Invariants
//!
//! * `data.len() == dim * dim` for every `SquareMatrix`.
//! * The checked constructors reject `dim == 0` with `EmptyInput`. The array
//!   conversion cannot fail, so a `0 × 0` array yields an empty matrix that
//!   metrics reject at evaluation.
//! * Storage is row-major: entry `(i, j)` lives at `data[i * dim + j]`.
//!
//! ## Non-goals
//!
//! * This module does not implement arithmetic beyond what metrics need.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MetricError;

// ============================================================================
// Triangle
// ============================================================================

/// Which triangle of a factor holds its nonzero entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Triangle {
    /// `L` with `Σ = L·Lᵀ`.
    #[default]
    Lower,

    /// `U` with `Σ = Uᵀ·U`.
    Upper,
}

impl Triangle {
    /// Map a `lower` flag onto an orientation.
    #[inline]
    pub fn from_lower(lower: bool) -> Self {
        if lower {
            Triangle::Lower
        } else {
            Triangle::Upper
        }
    }

    /// True for `Triangle::Lower`.
    #[inline]
    pub fn is_lower(self) -> bool {
        matches!(self, Triangle::Lower)
    }

    /// The opposite orientation (the triangle of the transposed factor).
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Triangle::Lower => Triangle::Upper,
            Triangle::Upper => Triangle::Lower,
        }
    }

    /// True when `(row, col)` lies outside this triangle.
    #[inline]
    pub fn is_off_triangle(self, row: usize, col: usize) -> bool {
        match self {
            Triangle::Lower => col > row,
            Triangle::Upper => col < row,
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Triangle::Lower => write!(f, "lower"),
            Triangle::Upper => write!(f, "upper"),
        }
    }
}

// ============================================================================
// SquareMatrix
// ============================================================================

/// An owned, row-major `D×D` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    dim: usize,
    data: Vec<T>,
}

impl<T: Float> SquareMatrix<T> {
    /// Build from a flat row-major slice of length `dim * dim`.
    pub fn from_row_slice(dim: usize, data: &[T]) -> Result<Self, MetricError> {
        if dim == 0 || data.is_empty() {
            return Err(MetricError::EmptyInput);
        }
        if data.len() != dim * dim {
            return Err(MetricError::NotSquare {
                rows: dim,
                cols: data.len() / dim,
            });
        }
        Ok(Self {
            dim,
            data: data.to_vec(),
        })
    }

    /// Build from a sequence of rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MetricError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(MetricError::EmptyInput);
        }

        let mut data = Vec::with_capacity(dim * dim);
        for row in rows {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(MetricError::NotSquare {
                    rows: dim,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { dim, data })
    }

    /// Diagonal matrix with the given entries.
    pub fn from_diagonal(diagonal: &[T]) -> Result<Self, MetricError> {
        let dim = diagonal.len();
        if dim == 0 {
            return Err(MetricError::EmptyInput);
        }

        let mut data = vec![T::zero(); dim * dim];
        for (i, &d) in diagonal.iter().enumerate() {
            data[i * dim + i] = d;
        }

        Ok(Self { dim, data })
    }

    /// The `dim × dim` identity.
    pub fn identity(dim: usize) -> Result<Self, MetricError> {
        Self::from_diagonal(&vec![T::one(); dim])
    }

    /// Dimensionality `D`.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.dim + col]
    }

    /// Row-major backing storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.dim..(i + 1) * self.dim]
    }

    /// Diagonal entries.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.dim).map(|i| self.get(i, i)).collect()
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Self {
        let n = self.dim;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(self.data[j * n + i]);
            }
        }
        Self { dim: n, data }
    }

    /// Matrix-vector product `A·x`.
    ///
    /// Returns `DimensionMismatch` when `x.len() != dim`.
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, MetricError> {
        if x.len() != self.dim {
            return Err(MetricError::DimensionMismatch {
                expected: self.dim,
                got: x.len(),
            });
        }
        Ok((0..self.dim)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(x.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }

    /// Matrix product `A·B`.
    pub fn matmul(&self, other: &Self) -> Result<Self, MetricError> {
        if other.dim != self.dim {
            return Err(MetricError::DimensionMismatch {
                expected: self.dim,
                got: other.dim,
            });
        }

        let n = self.dim;
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            for k in 0..n {
                let a = self.data[i * n + k];
                for j in 0..n {
                    data[i * n + j] = data[i * n + j] + a * other.data[k * n + j];
                }
            }
        }

        Ok(Self { dim: n, data })
    }
}

/// Build from nested row arrays.
///
/// `N` should be at least 1. An empty `[[T; 0]; 0]` produces a `0 × 0` matrix,
/// which `cholesky_metric` rejects with `EmptyInput` when evaluated.
impl<T: Float, const N: usize> From<[[T; N]; N]> for SquareMatrix<T> {
    fn from(rows: [[T; N]; N]) -> Self {
        let mut data = Vec::with_capacity(N * N);
        for row in rows.iter() {
            data.extend_from_slice(row);
        }
        Self { dim: N, data }
    }
}
