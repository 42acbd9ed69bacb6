#![cfg(feature = "dev")]

use gp_metrics::internals::primitives::errors::MetricError;
use gp_metrics::internals::primitives::matrix::Triangle;

#[test]
fn test_metric_error_display() {
    // EmptyInput
    let err = MetricError::EmptyInput;
    assert_eq!(format!("{}", err), "Input is empty");

    // InvalidDimensions
    let err = MetricError::InvalidDimensions(0);
    assert_eq!(
        format!("{}", err),
        "Invalid dimensions: 0 (must be at least 1)"
    );

    // DimensionMismatch
    let err = MetricError::DimensionMismatch {
        expected: 3,
        got: 2,
    };
    assert_eq!(format!("{}", err), "Dimension mismatch: expected 3, got 2");

    // NotSquare
    let err = MetricError::NotSquare { rows: 2, cols: 3 };
    assert_eq!(
        format!("{}", err),
        "Matrix is not square: 2 rows, 3 columns"
    );

    // NotPositiveDefinite
    let err = MetricError::NotPositiveDefinite;
    assert_eq!(
        format!("{}", err),
        "Cholesky factorization failed: matrix is not positive definite"
    );

    // SingularFactor
    let err = MetricError::SingularFactor;
    assert_eq!(
        format!("{}", err),
        "Triangular solve failed: factor is singular"
    );

    // InvalidLengthScale
    let err = MetricError::InvalidLengthScale("ell[0]=-1".to_string());
    assert_eq!(format!("{}", err), "Invalid length scale: ell[0]=-1");

    // InvalidNumericValue
    let err = MetricError::InvalidNumericValue("NaN detected".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: NaN detected");

    // NotTriangular
    let err = MetricError::NotTriangular {
        triangle: Triangle::Lower,
        row: 0,
        col: 1,
    };
    assert_eq!(
        format!("{}", err),
        "Factor is not lower triangular: nonzero entry at (0, 1)"
    );

    // NotSymmetric
    let err = MetricError::NotSymmetric { row: 0, col: 2 };
    assert_eq!(
        format!("{}", err),
        "Covariance is not symmetric: entries (0, 2) and (2, 0) differ"
    );

    // InvalidTolerance
    let err = MetricError::InvalidTolerance(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tolerance: -1 (must be >= 0 and finite)"
    );

    // DuplicateParameter
    let err = MetricError::DuplicateParameter { parameter: "kind" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'kind' was set multiple times"
    );
}

#[test]
fn test_metric_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&MetricError::SingularFactor);
}

#[test]
fn test_metric_error_clone_eq() {
    let err = MetricError::DimensionMismatch {
        expected: 2,
        got: 5,
    };
    assert_eq!(err.clone(), err);
    assert_ne!(err, MetricError::EmptyInput);
}
