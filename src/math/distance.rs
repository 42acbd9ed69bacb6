//! Squared-norm reduction shared by every metric.
//!
//! ## Purpose
//!
//! Every metric in this crate ends in the same step: the squared Euclidean
//! norm of a (possibly transformed) difference vector. This module provides
//! that reduction for a single vector and for a flat batch of vectors.
//!
//! ## Key concepts
//!
//! * **Feature axis**: A batch is a flat row-major slice; the reduction runs
//!   over the trailing axis of length `dimensions`.
//!
//! ## Invariants
//!
//! * The result is non-negative for finite input.
//! * The empty vector reduces to zero.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MetricError;

/// Sum of squares of `r`: the metric with unit length scale.
#[inline]
pub fn unit_metric<T: Float>(r: &[T]) -> T {
    r.iter().fold(T::zero(), |acc, &x| acc + x * x)
}

/// Apply [`unit_metric`] to each row of a flat row-major batch.
pub fn unit_metric_batch<T: Float>(r: &[T], dimensions: usize) -> Result<Vec<T>, MetricError> {
    check_batch_shape(r.len(), dimensions)?;
    Ok(r.chunks_exact(dimensions).map(unit_metric).collect())
}

/// Check that a flat batch of length `len` splits into rows of `dimensions`.
///
/// On mismatch, `got` carries the full batch length.
#[inline]
pub fn check_batch_shape(len: usize, dimensions: usize) -> Result<(), MetricError> {
    if dimensions == 0 {
        return Err(MetricError::InvalidDimensions(dimensions));
    }
    if len % dimensions != 0 {
        return Err(MetricError::DimensionMismatch {
            expected: dimensions,
            got: len,
        });
    }
    Ok(())
}
