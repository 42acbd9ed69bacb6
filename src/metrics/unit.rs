//! The unit metric and the pairwise difference stage.
//!
//! `UnitMetric` is the terminal stage of every metric in the crate: it reduces
//! a vector to its squared Euclidean norm. `Difference` is the usual innermost
//! stage when a metric is evaluated on two points instead of their difference.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::distance::unit_metric;
use crate::metrics::compose::Stage;
use crate::primitives::errors::MetricError;

// ============================================================================
// UnitMetric
// ============================================================================

/// Squared Euclidean norm: the metric with a unit length scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UnitMetric;

impl<'a, T: Float> Stage<&'a [T]> for UnitMetric {
    type Output = T;

    #[inline]
    fn apply(&self, r: &'a [T]) -> Result<T, MetricError> {
        Ok(unit_metric(r))
    }
}

impl<T: Float> Stage<Vec<T>> for UnitMetric {
    type Output = T;

    #[inline]
    fn apply(&self, r: Vec<T>) -> Result<T, MetricError> {
        Ok(unit_metric(&r))
    }
}

// ============================================================================
// Difference
// ============================================================================

/// Takes a pair of points `(x, x')` and returns `x - x'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Difference;

impl<'a, T: Float> Stage<(&'a [T], &'a [T])> for Difference {
    type Output = Vec<T>;

    fn apply(&self, (x, y): (&'a [T], &'a [T])) -> Result<Vec<T>, MetricError> {
        if x.len() != y.len() {
            return Err(MetricError::DimensionMismatch {
                expected: x.len(),
                got: y.len(),
            });
        }
        Ok(x.iter().zip(y.iter()).map(|(&a, &b)| a - b).collect())
    }
}
