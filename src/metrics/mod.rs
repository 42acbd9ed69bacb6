//! Layer 3: Metrics
//!
//! # Purpose
//!
//! This layer builds distance metrics by composition. Every metric is the
//! squared-norm reduction ([`UnitMetric`](unit::UnitMetric)) applied after a
//! linear transform of the difference vector:
//! - [`diagonal`]: elementwise scaling by `1/ell`
//! - [`cholesky`]: triangular solve against a Cholesky factor
//! - [`dense`]: eager factorization of a covariance, then the Cholesky metric
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Metrics ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::distance::check_batch_shape;
use crate::primitives::errors::MetricError;

/// Stage trait and right-to-left composition.
pub mod compose;

/// The unit-length-scale metric and the pairwise difference stage.
pub mod unit;

/// Per-dimension (or isotropic) length-scale metric.
pub mod diagonal;

/// Metric parameterized by a Cholesky factor.
pub mod cholesky;

/// Metric parameterized by a full covariance matrix.
pub mod dense;

use compose::Stage;

// ============================================================================
// Metric Trait
// ============================================================================

/// A distance metric: reduces a difference vector `r = x - x'` to a scalar.
///
/// Implemented for every [`Stage`] that maps `&[T]` to `T`, so composed stages,
/// plain functions and the builder's [`AnyMetric`](crate::prelude::AnyMetric) are
/// all metrics. The trait is object safe.
pub trait Metric<T> {
    /// Evaluate the metric on one difference vector.
    fn evaluate(&self, r: &[T]) -> Result<T, MetricError>;

    /// Evaluate the metric on each row of a flat row-major batch.
    ///
    /// Leading batch structure is preserved: the output has one value per row.
    fn evaluate_batch(&self, r: &[T], dimensions: usize) -> Result<Vec<T>, MetricError> {
        check_batch_shape(r.len(), dimensions)?;
        r.chunks_exact(dimensions)
            .map(|row| self.evaluate(row))
            .collect()
    }
}

impl<T, S> Metric<T> for S
where
    S: for<'a> Stage<&'a [T], Output = T>,
{
    #[inline]
    fn evaluate(&self, r: &[T]) -> Result<T, MetricError> {
        self.apply(r)
    }
}
