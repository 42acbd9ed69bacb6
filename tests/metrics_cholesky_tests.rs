#![cfg(feature = "dev")]
//! Tests for the Cholesky-parameterized metric.
//!
//! ## Test Organization
//!
//! 1. **Known Values** - Identity and diagonal factors
//! 2. **Orientation** - Lower factor vs. transposed upper factor
//! 3. **Failures** - Singular factors and size mismatches

use approx::assert_relative_eq;

use gp_metrics::internals::math::distance::unit_metric;
use gp_metrics::internals::metrics::cholesky::{cholesky_metric, TriangularSolve};
use gp_metrics::internals::metrics::compose::Stage;
use gp_metrics::internals::metrics::diagonal::diagonal_metric;
use gp_metrics::internals::metrics::Metric;
use gp_metrics::internals::primitives::errors::MetricError;
use gp_metrics::internals::primitives::matrix::{SquareMatrix, Triangle};

fn lower_factor() -> SquareMatrix<f64> {
    SquareMatrix::from([[2.0, 0.0, 0.0], [0.5, 1.5, 0.0], [-0.3, 0.8, 1.1]])
}

/// rᵀ (L·Lᵀ)⁻¹ r via explicit forward substitution.
fn reference_quadratic_form(l: &SquareMatrix<f64>, r: &[f64]) -> f64 {
    let n = l.dim();
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut acc = r[i];
        for j in 0..i {
            acc -= l.get(i, j) * y[j];
        }
        y[i] = acc / l.get(i, i);
    }
    y.iter().map(|v| v * v).sum()
}

// ============================================================================
// Known Value Tests
// ============================================================================

#[test]
fn test_identity_factor_is_unit_metric() {
    let metric = cholesky_metric(SquareMatrix::identity(3).unwrap(), Triangle::Lower);
    let r = [1.0, -2.0, 0.5];
    assert_relative_eq!(metric.evaluate(&r).unwrap(), unit_metric(&r));
}

#[test]
fn test_diagonal_factor_matches_diagonal_metric() {
    let ell = [2.0_f64, 4.0];
    let chol = SquareMatrix::from_diagonal(&ell).unwrap();
    let metric = cholesky_metric(chol, Triangle::Lower);
    let r = [4.0, 8.0];
    assert_relative_eq!(metric.evaluate(&r).unwrap(), 8.0);
    assert_relative_eq!(
        metric.evaluate(&r).unwrap(),
        diagonal_metric(ell).evaluate(&r).unwrap()
    );
}

#[test]
fn test_general_factor_matches_reference() {
    let l = lower_factor();
    let metric = cholesky_metric(l.clone(), Triangle::Lower);
    for r in [[1.0, 0.0, 0.0], [0.3, -1.2, 2.0], [-4.0, 2.5, 0.1]] {
        assert_relative_eq!(
            metric.evaluate(&r).unwrap(),
            reference_quadratic_form(&l, &r),
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_cholesky_batch() {
    let metric = cholesky_metric(lower_factor(), Triangle::Lower);
    let r = [0.3, -1.2, 2.0, -4.0, 2.5, 0.1];
    let out = metric.evaluate_batch(&r, 3).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], metric.evaluate(&r[..3]).unwrap());
    assert_eq!(out[1], metric.evaluate(&r[3..]).unwrap());
}

#[test]
fn test_accessors() {
    let l = lower_factor();
    let metric = cholesky_metric(l.clone(), Triangle::Lower);
    assert_eq!(metric.factor(), &l);
    assert_eq!(metric.triangle(), Triangle::Lower);
    assert_eq!(metric.dim(), 3);
}

// ============================================================================
// Orientation Tests
// ============================================================================

#[test]
fn test_lower_and_transposed_upper_agree() {
    let l = lower_factor();
    let lower = cholesky_metric(l.clone(), Triangle::Lower);
    let upper = cholesky_metric(l.transpose(), Triangle::Upper);
    for r in [[0.3, -1.2, 2.0], [-4.0, 2.5, 0.1], [1.0, 1.0, 1.0]] {
        assert_relative_eq!(
            lower.evaluate(&r).unwrap(),
            upper.evaluate(&r).unwrap(),
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_triangular_solve_whitens() {
    // L·y = r with L = [[2, 0], [1, 1]], r = [4, 3] → y = [2, 1]
    let solve = TriangularSolve::new(
        SquareMatrix::from([[2.0, 0.0], [1.0, 1.0]]),
        Triangle::Lower,
    );
    let y = solve.apply(&[4.0, 3.0][..]).unwrap();
    assert_relative_eq!(y[0], 2.0);
    assert_relative_eq!(y[1], 1.0);
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_singular_factor_fails_at_evaluation() {
    // Construction succeeds; the zero pivot surfaces on the call.
    let chol = SquareMatrix::from([[1.0, 0.0], [2.0, 0.0]]);
    let metric = cholesky_metric(chol, Triangle::Lower);
    assert_eq!(
        metric.evaluate(&[1.0, 1.0]),
        Err(MetricError::SingularFactor)
    );
}

#[test]
fn test_dimension_mismatch() {
    let metric = cholesky_metric(lower_factor(), Triangle::Lower);
    assert_eq!(
        metric.evaluate(&[1.0, 2.0]),
        Err(MetricError::DimensionMismatch {
            expected: 3,
            got: 2
        })
    );
}

#[test]
fn test_empty_factor_fails_at_evaluation() {
    // The array conversion cannot reject a 0 x 0 factor; evaluation does.
    let metric = cholesky_metric(SquareMatrix::from([[0.0f64; 0]; 0]), Triangle::Lower);
    assert_eq!(metric.evaluate(&[]), Err(MetricError::EmptyInput));
}

#[test]
fn test_cholesky_f32() {
    let chol = SquareMatrix::from([[2.0f32, 0.0], [0.0, 4.0]]);
    let metric = cholesky_metric(chol, Triangle::Upper);
    assert_relative_eq!(metric.evaluate(&[4.0f32, 8.0]).unwrap(), 8.0f32);
}
