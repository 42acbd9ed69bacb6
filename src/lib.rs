//! # gp-metrics — Composable distance metrics for Gaussian-process kernels
//!
//! Stationary covariance kernels do not look at two input points directly.
//! They look at a *distance* between them: the difference vector
//! `r = x - x'` reduced to a scalar by a metric. This crate provides those
//! metrics, built by composition rather than inheritance.
//!
//! ## What is a metric here?
//!
//! Every metric is the squared Euclidean norm applied after a linear
//! transform of the difference vector:
//!
//! | Metric              | Transform            | Value                  |
//! |---------------------|----------------------|------------------------|
//! | `UnitMetric`        | none                 | `Σᵢ rᵢ²`               |
//! | `diagonal_metric`   | multiply by `1/ell`  | `Σᵢ (rᵢ / ellᵢ)²`      |
//! | `cholesky_metric`   | solve `L·y = r`      | `rᵀ (L·Lᵀ)⁻¹ r`        |
//! | `dense_metric`      | factor, then solve   | `rᵀ Σ⁻¹ r`             |
//!
//! The three parameterizations agree: `diagonal_metric(ell)`,
//! `cholesky_metric(diag(ell))` and `dense_metric(diag(ell²))` are the same
//! metric. The covariance has units of length², the factor and `ell` units of
//! length.
//!
//! ## Quick Start
//!
//! ```rust
//! use gp_metrics::prelude::*;
//!
//! // Per-dimension length scales
//! let metric = diagonal_metric(vec![2.0_f64, 4.0]);
//! assert_eq!(metric.evaluate(&[4.0, 8.0])?, 8.0);
//!
//! // The same metric from a covariance (units of length²)
//! let cov = SquareMatrix::from([[4.0_f64, 0.0], [0.0, 16.0]]);
//! let dense = dense_metric(&cov, Lower)?;
//! assert!((dense.evaluate(&[4.0, 8.0])? - 8.0).abs() < 1e-12);
//! # Result::<(), MetricError>::Ok(())
//! ```
//!
//! ## Composition
//!
//! Metrics are [`Stage`](prelude::Stage) values and compose right to left:
//! `compose(f, g)` runs `g` first. Only the innermost stage sees the raw
//! arguments, so it may take a tuple; [`Difference`](prelude::Difference) uses
//! this to turn a pair of points into a difference vector.
//!
//! ```rust
//! use gp_metrics::prelude::*;
//!
//! let pairwise = compose(diagonal_metric(2.0_f64), Difference);
//! let x = [1.0, 2.0];
//! let y = [3.0, 6.0];
//!
//! // r = [-2, -4], scaled by 1/2 → [-1, -2]
//! assert_eq!(pairwise.apply((&x[..], &y[..]))?, 5.0);
//! # Result::<(), MetricError>::Ok(())
//! ```
//!
//! ## Builder
//!
//! The builder selects a metric kind at runtime and can validate parameters
//! before construction:
//!
//! ```rust
//! use gp_metrics::prelude::*;
//!
//! let metric = MetricBuilder::new()
//!     .covariance(SquareMatrix::from([[4.0_f64, 0.0], [0.0, 16.0]]))
//!     .triangle(Upper)
//!     .validate()
//!     .build()?;
//!
//! let batch = [4.0, 8.0, 2.0, 0.0];
//! let values = metric.evaluate_batch(&batch, 2)?;
//! assert_eq!(values.len(), 2);
//! # Result::<(), MetricError>::Ok(())
//! ```
//!
//! ## Errors
//!
//! Construction and evaluation return `Result<_, MetricError>`:
//!
//! - A covariance that is not positive definite fails in `dense_metric`,
//!   at construction.
//! - A singular factor fails when the metric is evaluated.
//! - A length-scale or factor whose size does not match the difference vector
//!   fails when the metric is evaluated.
//!
//! Nothing is retried or recovered; errors from any stage pass through
//! composition unchanged.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! gp-metrics = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and matrix storage.
mod primitives;

// Layer 2: Math - squared-norm reduction and the nalgebra backend.
mod math;

// Layer 3: Metrics - stages, composition and the metric constructors.
mod metrics;

// Layer 4: Engine - opt-in parameter validation.
mod engine;

// High-level API: re-exports and the `MetricBuilder`.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use gp_metrics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        cholesky_metric, compose, dense_metric, diagonal_metric, unit_metric, unit_metric_batch,
        AnyMetric, CholeskyMetric, Compose, DiagonalMetric, Difference, LengthScale, Metric,
        MetricBuilder, MetricError, MetricKind, Scale, SquareMatrix, Stage,
        Triangle::{self, Lower, Upper},
        TriangularSolve, UnitMetric,
        Validation::{self, Permissive, Strict},
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal metric constructors.
    pub mod metrics {
        pub use crate::metrics::*;
    }
    /// Internal validation engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
