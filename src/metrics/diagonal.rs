//! Diagonal (per-dimension length-scale) metric.
//!
//! ## Purpose
//!
//! This module provides `diagonal_metric`, which scales each component of the
//! difference vector by the reciprocal of its length scale before the
//! squared-norm reduction: `r ↦ Σᵢ (rᵢ / ellᵢ)²`.
//!
//! ## Design notes
//!
//! * **Eager reciprocal**: `1/ell` is computed once at construction; evaluation
//!   is a multiply per component.
//! * **Broadcasting**: A scalar or single-element scale applies to every
//!   dimension. A longer scale must match the difference vector exactly;
//!   a mismatch fails at evaluation time, not construction time.
//! * **Permissive**: Zero or negative scales are not rejected here. Use
//!   `Validation::Strict` on the builder to check them up front.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::metrics::compose::{compose, Compose, Stage};
use crate::metrics::unit::UnitMetric;
use crate::primitives::errors::MetricError;

// ============================================================================
// LengthScale
// ============================================================================

/// A length scale: one value for every dimension, or one per dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthScale<T> {
    /// Same scale along every dimension.
    Isotropic(T),

    /// One scale per dimension.
    Diagonal(Vec<T>),
}

impl<T: Float> LengthScale<T> {
    /// The scale values as a slice (length 1 when isotropic).
    #[inline]
    pub fn values(&self) -> &[T] {
        match self {
            LengthScale::Isotropic(s) => core::slice::from_ref(s),
            LengthScale::Diagonal(v) => v,
        }
    }

    /// Dimensionality this scale pins down, if any.
    ///
    /// Scalars and single-element scales broadcast, so they return `None`.
    #[inline]
    pub fn dimensions(&self) -> Option<usize> {
        match self {
            LengthScale::Diagonal(v) if v.len() != 1 => Some(v.len()),
            _ => None,
        }
    }

    /// Elementwise reciprocal `1/ell`.
    pub fn reciprocal(&self) -> Self {
        match self {
            LengthScale::Isotropic(s) => LengthScale::Isotropic(s.recip()),
            LengthScale::Diagonal(v) => LengthScale::Diagonal(v.iter().map(|s| s.recip()).collect()),
        }
    }
}

impl<T: Float> From<T> for LengthScale<T> {
    fn from(value: T) -> Self {
        LengthScale::Isotropic(value)
    }
}

impl<T: Float> From<Vec<T>> for LengthScale<T> {
    fn from(values: Vec<T>) -> Self {
        LengthScale::Diagonal(values)
    }
}

impl<T: Float> From<&[T]> for LengthScale<T> {
    fn from(values: &[T]) -> Self {
        LengthScale::Diagonal(values.to_vec())
    }
}

impl<T: Float, const N: usize> From<[T; N]> for LengthScale<T> {
    fn from(values: [T; N]) -> Self {
        LengthScale::Diagonal(values.to_vec())
    }
}

// ============================================================================
// Scale Stage
// ============================================================================

/// Elementwise multiply by a fixed factor, broadcast over the feature axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale<T> {
    factor: LengthScale<T>,
}

impl<T: Float> Scale<T> {
    /// Multiply by `factor` as given.
    #[inline]
    pub fn new(factor: LengthScale<T>) -> Self {
        Self { factor }
    }

    /// Multiply by `1/ell`.
    #[inline]
    pub fn inverse_of(ell: &LengthScale<T>) -> Self {
        Self::new(ell.reciprocal())
    }

    /// The multiplier applied to each component.
    #[inline]
    pub fn factor(&self) -> &LengthScale<T> {
        &self.factor
    }

    fn scale(&self, r: &[T]) -> Result<Vec<T>, MetricError> {
        match self.factor.values() {
            [s] => Ok(r.iter().map(|&x| x * *s).collect()),
            factors if factors.len() == r.len() => Ok(r
                .iter()
                .zip(factors.iter())
                .map(|(&x, &s)| x * s)
                .collect()),
            factors => Err(MetricError::DimensionMismatch {
                expected: factors.len(),
                got: r.len(),
            }),
        }
    }
}

impl<'a, T: Float> Stage<&'a [T]> for Scale<T> {
    type Output = Vec<T>;

    #[inline]
    fn apply(&self, r: &'a [T]) -> Result<Vec<T>, MetricError> {
        self.scale(r)
    }
}

impl<T: Float> Stage<Vec<T>> for Scale<T> {
    type Output = Vec<T>;

    #[inline]
    fn apply(&self, r: Vec<T>) -> Result<Vec<T>, MetricError> {
        self.scale(&r)
    }
}

// ============================================================================
// DiagonalMetric
// ============================================================================

/// `r ↦ ‖r / ell‖²`.
pub type DiagonalMetric<T> = Compose<UnitMetric, Scale<T>>;

/// A metric with a length scale per dimension.
///
/// A scalar `ell` gives an isotropic metric. `diagonal_metric(ell)` agrees
/// with `cholesky_metric(diag(ell))` and `dense_metric(diag(ell²))`.
pub fn diagonal_metric<T: Float>(ell: impl Into<LengthScale<T>>) -> DiagonalMetric<T> {
    compose(UnitMetric, Scale::inverse_of(&ell.into()))
}

impl<T: Float> DiagonalMetric<T> {
    /// Reciprocal length scales `1/ell` captured at construction.
    #[inline]
    pub fn inverse_length_scale(&self) -> &LengthScale<T> {
        self.inner().factor()
    }

    /// Length scales `ell` (recomputed from the stored reciprocal).
    pub fn length_scale(&self) -> LengthScale<T> {
        self.inner().factor().reciprocal()
    }
}
