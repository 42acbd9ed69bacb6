//! Input validation for metric parameters.
//!
//! ## Purpose
//!
//! The metric constructors accept whatever they are given and leave failures
//! to the numerical backend. This module provides the checks that
//! `Validation::Strict` runs up front instead, so that bad parameters fail at
//! construction with a precise message rather than as an infinite metric or a
//! late solve failure.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A length scale or Cholesky factor that passes validation yields a metric
//!   whose evaluation cannot fail on a correctly sized input.
//!
//! ## Non-goals
//!
//! * This module does not test positive-definiteness directly; a symmetric
//!   matrix that is indefinite still fails in the factorization.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::metrics::diagonal::LengthScale;
use crate::primitives::errors::MetricError;
use crate::primitives::matrix::{SquareMatrix, Triangle};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for metric parameters.
///
/// All methods return `Result<(), MetricError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a length scale: non-empty, every entry finite and positive.
    pub fn validate_length_scale<T: Float>(ell: &LengthScale<T>) -> Result<(), MetricError> {
        let values = ell.values();
        if values.is_empty() {
            return Err(MetricError::EmptyInput);
        }

        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() || v <= T::zero() {
                return Err(MetricError::InvalidLengthScale(format!(
                    "ell[{}]={} (must be > 0 and finite)",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that the matrix is non-empty and every entry is finite.
    pub fn validate_finite<T: Float>(m: &SquareMatrix<T>, name: &str) -> Result<(), MetricError> {
        let n = m.dim();
        if n == 0 {
            return Err(MetricError::EmptyInput);
        }
        for (idx, &v) in m.as_slice().iter().enumerate() {
            if !v.is_finite() {
                return Err(MetricError::InvalidNumericValue(format!(
                    "{}[{}][{}]={}",
                    name,
                    idx / n,
                    idx % n,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a covariance matrix: finite and symmetric within `tolerance`.
    ///
    /// Entries are compared relative to their magnitude (absolutely below 1).
    pub fn validate_covariance<T: Float>(
        cov: &SquareMatrix<T>,
        tolerance: T,
    ) -> Result<(), MetricError> {
        Self::validate_finite(cov, "cov")?;

        let n = cov.dim();
        for row in 0..n {
            for col in (row + 1)..n {
                let a = cov.get(row, col);
                let b = cov.get(col, row);
                let scale = a.abs().max(b.abs()).max(T::one());
                if (a - b).abs() > tolerance * scale {
                    return Err(MetricError::NotSymmetric { row, col });
                }
            }
        }

        for i in 0..n {
            let d = cov.get(i, i);
            if d <= T::zero() {
                return Err(MetricError::InvalidNumericValue(format!(
                    "cov[{}][{}]={} (variance must be > 0)",
                    i,
                    i,
                    d.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a Cholesky factor: finite, zero outside `triangle`, positive diagonal.
    pub fn validate_cholesky_factor<T: Float>(
        chol: &SquareMatrix<T>,
        triangle: Triangle,
    ) -> Result<(), MetricError> {
        Self::validate_finite(chol, "chol")?;

        let n = chol.dim();
        for row in 0..n {
            for col in 0..n {
                if triangle.is_off_triangle(row, col) && chol.get(row, col) != T::zero() {
                    return Err(MetricError::NotTriangular { triangle, row, col });
                }
            }
        }

        for i in 0..n {
            let d = chol.get(i, i);
            if d <= T::zero() {
                return Err(MetricError::InvalidNumericValue(format!(
                    "chol[{}][{}]={} (diagonal must be > 0)",
                    i,
                    i,
                    d.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate the symmetry tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), MetricError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(MetricError::InvalidTolerance(tol.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameter was set multiple times.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), MetricError> {
        if let Some(param) = duplicate_param {
            return Err(MetricError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
