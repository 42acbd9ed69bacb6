//! Error types for metric construction and evaluation.
//!
//! ## Purpose
//!
//! This module defines `MetricError`, the single error type returned by every
//! fallible operation in the crate. Errors raised by the linear algebra backend
//! (failed factorization, singular solve) are translated into variants here and
//! otherwise propagated unchanged.
//!
//! ## Design notes
//!
//! * **no_std friendly**: `Display` is implemented by hand; `std::error::Error`
//!   is only implemented when the `std` feature is enabled.
//! * **Stable messages**: Display strings are part of the public surface.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// Internal dependencies
use crate::primitives::matrix::Triangle;

// ============================================================================
// MetricError
// ============================================================================

/// Errors raised while building or evaluating a metric.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricError {
    /// A difference vector or matrix with no elements.
    EmptyInput,

    /// Feature dimensionality must be at least 1.
    InvalidDimensions(usize),

    /// Trailing axis length does not match the metric's dimensionality.
    DimensionMismatch {
        /// Length the metric expects.
        expected: usize,
        /// Length that was supplied.
        got: usize,
    },

    /// Matrix storage is not square.
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the offending row (or implied column count).
        cols: usize,
    },

    /// Cholesky factorization failed.
    NotPositiveDefinite,

    /// Triangular solve hit a zero pivot.
    SingularFactor,

    /// A length scale is zero, negative or not finite.
    InvalidLengthScale(String),

    /// A NaN or infinite value where a finite one is required.
    InvalidNumericValue(String),

    /// A nonzero entry on the wrong side of the diagonal.
    NotTriangular {
        /// Orientation the factor was declared with.
        triangle: Triangle,
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// Covariance entries `(row, col)` and `(col, row)` differ.
    NotSymmetric {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// Symmetry tolerance must be finite and non-negative.
    InvalidTolerance(f64),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },

    /// `build()` was called without selecting a metric kind.
    MissingMetricKind,
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricError::EmptyInput => write!(f, "Input is empty"),
            MetricError::InvalidDimensions(d) => {
                write!(f, "Invalid dimensions: {} (must be at least 1)", d)
            }
            MetricError::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, got)
            }
            MetricError::NotSquare { rows, cols } => {
                write!(f, "Matrix is not square: {} rows, {} columns", rows, cols)
            }
            MetricError::NotPositiveDefinite => {
                write!(f, "Cholesky factorization failed: matrix is not positive definite")
            }
            MetricError::SingularFactor => {
                write!(f, "Triangular solve failed: factor is singular")
            }
            MetricError::InvalidLengthScale(msg) => write!(f, "Invalid length scale: {}", msg),
            MetricError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            MetricError::NotTriangular { triangle, row, col } => write!(
                f,
                "Factor is not {} triangular: nonzero entry at ({}, {})",
                triangle, row, col
            ),
            MetricError::NotSymmetric { row, col } => write!(
                f,
                "Covariance is not symmetric: entries ({}, {}) and ({}, {}) differ",
                row, col, col, row
            ),
            MetricError::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be >= 0 and finite)", tol)
            }
            MetricError::DuplicateParameter { parameter } => {
                write!(f, "Parameter '{}' was set multiple times", parameter)
            }
            MetricError::MissingMetricKind => {
                write!(f, "No metric kind selected (use .kind(), .length_scale(), .covariance() or .cholesky_factor())")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MetricError {}
