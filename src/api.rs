//! High-level API for building metrics.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the metric
//! constructors re-exported from the metrics layer, and a fluent builder for
//! choosing a metric kind, the factor orientation and how strictly parameters
//! are validated.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Permissive by default**: `Validation::Permissive` builds exactly what the
//!   constructors build; `Validation::Strict` checks parameters first.
//! * **Type-Safe**: Generic over `FloatLinalg` types (f32 and f64).
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MetricBuilder`] via `MetricBuilder::new()`.
//! 2. Pick a kind (`.length_scale()`, `.covariance()`, `.cholesky_factor()`, `.unit()`).
//! 3. Optionally set `.triangle()` and `.validate()`.
//! 4. Call `.build()` to get an [`AnyMetric`].

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::math::distance::{unit_metric, unit_metric_batch};
pub use crate::metrics::cholesky::{cholesky_metric, CholeskyMetric, TriangularSolve};
pub use crate::metrics::compose::{compose, Compose, Stage};
pub use crate::metrics::dense::dense_metric;
pub use crate::metrics::diagonal::{diagonal_metric, DiagonalMetric, LengthScale, Scale};
pub use crate::metrics::unit::{Difference, UnitMetric};
pub use crate::metrics::Metric;
pub use crate::primitives::errors::MetricError;
pub use crate::primitives::matrix::{SquareMatrix, Triangle};

/// Default relative tolerance for the covariance symmetry check.
pub const DEFAULT_SYMMETRY_TOLERANCE: f64 = 1e-8;

// ============================================================================
// Configuration Types
// ============================================================================

/// Which metric the builder constructs.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricKind<T> {
    /// Squared Euclidean norm.
    Unit,

    /// Length scale, isotropic or per dimension.
    Diagonal(LengthScale<T>),

    /// Full covariance matrix (units of length²).
    Dense(SquareMatrix<T>),

    /// Triangular Cholesky factor (units of length).
    Cholesky(SquareMatrix<T>),
}

/// How thoroughly `build()` checks parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Leave failures to the numerical backend.
    #[default]
    Permissive,

    /// Reject non-positive scales, asymmetric covariances and malformed factors up front.
    Strict,
}

// ============================================================================
// AnyMetric
// ============================================================================

/// A metric produced by [`MetricBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMetric<T> {
    /// See [`UnitMetric`].
    Unit(UnitMetric),

    /// See [`diagonal_metric`].
    Diagonal(DiagonalMetric<T>),

    /// See [`cholesky_metric`] and [`dense_metric`].
    Cholesky(CholeskyMetric<T>),
}

impl<T: FloatLinalg> AnyMetric<T> {
    /// Dimensionality fixed by the metric's parameters, if any.
    pub fn dimensions(&self) -> Option<usize> {
        match self {
            AnyMetric::Unit(_) => None,
            AnyMetric::Diagonal(m) => m.inverse_length_scale().dimensions(),
            AnyMetric::Cholesky(m) => Some(m.dim()),
        }
    }
}

impl<'a, T: FloatLinalg> Stage<&'a [T]> for AnyMetric<T> {
    type Output = T;

    fn apply(&self, r: &'a [T]) -> Result<T, MetricError> {
        match self {
            AnyMetric::Unit(m) => m.apply(r),
            AnyMetric::Diagonal(m) => m.apply(r),
            AnyMetric::Cholesky(m) => m.apply(r),
        }
    }
}

// ============================================================================
// MetricBuilder
// ============================================================================

/// Fluent builder for configuring a metric.
#[derive(Debug, Clone)]
pub struct MetricBuilder<T: FloatLinalg> {
    /// Metric kind and its parameters.
    pub kind: Option<MetricKind<T>>,

    /// Factor orientation (default: Lower).
    pub triangle: Option<Triangle>,

    /// Parameter checking (default: Permissive).
    pub validation: Option<Validation>,

    /// Relative tolerance for the covariance symmetry check (Strict only).
    pub symmetry_tolerance: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for MetricBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> MetricBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            kind: None,
            triangle: None,
            validation: None,
            symmetry_tolerance: None,
            duplicate_param: None,
        }
    }

    /// Set the metric kind.
    pub fn kind(mut self, kind: MetricKind<T>) -> Self {
        if self.kind.is_some() {
            self.duplicate_param = Some("kind");
        }
        self.kind = Some(kind);
        self
    }

    /// Squared Euclidean norm.
    pub fn unit(self) -> Self {
        self.kind(MetricKind::Unit)
    }

    /// Diagonal metric with the given length scale.
    pub fn length_scale(self, ell: impl Into<LengthScale<T>>) -> Self {
        self.kind(MetricKind::Diagonal(ell.into()))
    }

    /// Dense metric with the given covariance.
    pub fn covariance(self, cov: SquareMatrix<T>) -> Self {
        self.kind(MetricKind::Dense(cov))
    }

    /// Cholesky metric with the given factor.
    pub fn cholesky_factor(self, chol: SquareMatrix<T>) -> Self {
        self.kind(MetricKind::Cholesky(chol))
    }

    /// Set the factor orientation.
    pub fn triangle(mut self, triangle: Triangle) -> Self {
        if self.triangle.is_some() {
            self.duplicate_param = Some("triangle");
        }
        self.triangle = Some(triangle);
        self
    }

    /// Set the factor orientation from a `lower` flag.
    pub fn lower(self, lower: bool) -> Self {
        self.triangle(Triangle::from_lower(lower))
    }

    /// Set the validation mode.
    pub fn validation(mut self, validation: Validation) -> Self {
        if self.validation.is_some() {
            self.duplicate_param = Some("validation");
        }
        self.validation = Some(validation);
        self
    }

    /// Shorthand for `.validation(Validation::Strict)`.
    pub fn validate(self) -> Self {
        self.validation(Validation::Strict)
    }

    /// Set the relative tolerance for the covariance symmetry check.
    pub fn symmetry_tolerance(mut self, tolerance: T) -> Self {
        if self.symmetry_tolerance.is_some() {
            self.duplicate_param = Some("symmetry_tolerance");
        }
        self.symmetry_tolerance = Some(tolerance);
        self
    }

    /// Validate the configuration and construct the metric.
    ///
    /// Dense covariances are factored here, once.
    pub fn build(self) -> Result<AnyMetric<T>, MetricError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let triangle = self.triangle.unwrap_or_default();
        let validation = self.validation.unwrap_or_default();
        let tolerance = match self.symmetry_tolerance {
            Some(tol) => tol,
            None => T::from(DEFAULT_SYMMETRY_TOLERANCE).unwrap_or_else(T::epsilon),
        };
        Validator::validate_tolerance(tolerance)?;

        let kind = self.kind.ok_or(MetricError::MissingMetricKind)?;

        if validation == Validation::Strict {
            match &kind {
                MetricKind::Unit => {}
                MetricKind::Diagonal(ell) => Validator::validate_length_scale(ell)?,
                MetricKind::Dense(cov) => Validator::validate_covariance(cov, tolerance)?,
                MetricKind::Cholesky(chol) => {
                    Validator::validate_cholesky_factor(chol, triangle)?
                }
            }
        }

        let metric = match kind {
            MetricKind::Unit => AnyMetric::Unit(UnitMetric),
            MetricKind::Diagonal(ell) => AnyMetric::Diagonal(diagonal_metric(ell)),
            MetricKind::Dense(cov) => AnyMetric::Cholesky(dense_metric(&cov, triangle)?),
            MetricKind::Cholesky(chol) => AnyMetric::Cholesky(cholesky_metric(chol, triangle)),
        };

        Ok(metric)
    }
}
