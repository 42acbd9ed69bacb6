#![cfg(feature = "dev")]
//! Tests for stages and right-to-left composition.
//!
//! ## Test Organization
//!
//! 1. **Single Stage** - Composition of one stage
//! 2. **Ordering** - Right-to-left application
//! 3. **Variadic Innermost** - Tuple arguments to the first stage
//! 4. **Error Propagation** - Failures short-circuit the chain

use std::cell::Cell;

use approx::assert_relative_eq;

use gp_metrics::compose;
use gp_metrics::internals::metrics::compose::{Compose, Stage};
use gp_metrics::internals::metrics::unit::{Difference, UnitMetric};
use gp_metrics::internals::metrics::Metric;
use gp_metrics::internals::primitives::errors::MetricError;

fn double(x: f64) -> Result<f64, MetricError> {
    Ok(2.0 * x)
}

fn increment(x: f64) -> Result<f64, MetricError> {
    Ok(x + 1.0)
}

fn square(x: f64) -> Result<f64, MetricError> {
    Ok(x * x)
}

fn add((a, b): (f64, f64)) -> Result<f64, MetricError> {
    Ok(a + b)
}

fn fail(_: f64) -> Result<f64, MetricError> {
    Err(MetricError::SingularFactor)
}

// ============================================================================
// Single Stage Tests
// ============================================================================

#[test]
fn test_compose_single_is_identity_wrapping() {
    let f = compose!(double);
    assert_eq!(f.apply(3.5).unwrap(), double(3.5).unwrap());
}

#[test]
fn test_compose_single_trailing_comma() {
    let f = compose!(increment,);
    assert_eq!(f.apply(1.0).unwrap(), 2.0);
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[test]
fn test_compose_two_applies_right_first() {
    // double(increment(3)) = 8, increment(double(3)) = 7
    let f = Compose::new(double, increment);
    assert_eq!(f.apply(3.0).unwrap(), 8.0);

    let g = gp_metrics::internals::metrics::compose::compose(increment, double);
    assert_eq!(g.apply(3.0).unwrap(), 7.0);
}

#[test]
fn test_compose_three_nests_right_to_left() {
    // square(double(increment(2))) = square(6) = 36
    let f = compose!(square, double, increment);
    let expected = square(double(increment(2.0).unwrap()).unwrap()).unwrap();
    assert_eq!(f.apply(2.0).unwrap(), expected);
    assert_eq!(f.apply(2.0).unwrap(), 36.0);
}

#[test]
fn test_compose_is_associative() {
    let left = Compose::new(Compose::new(square, double), increment);
    let right = Compose::new(square, Compose::new(double, increment));
    for x in [-2.0, 0.0, 0.5, 3.0] {
        assert_eq!(left.apply(x).unwrap(), right.apply(x).unwrap());
    }
}

#[test]
fn test_compose_accessors() {
    let f = Compose::new(UnitMetric, Difference);
    assert_eq!(*f.outer(), UnitMetric);
    assert_eq!(*f.inner(), Difference);
    let (outer, inner) = f.into_parts();
    assert_eq!(outer, UnitMetric);
    assert_eq!(inner, Difference);
}

// ============================================================================
// Variadic Innermost Tests
// ============================================================================

#[test]
fn test_compose_tuple_innermost() {
    // square(double(add(1, 2))) = square(6) = 36
    let f = compose!(square, double, add);
    assert_eq!(f.apply((1.0, 2.0)).unwrap(), 36.0);
}

#[test]
fn test_compose_unit_after_difference() {
    let metric = compose!(UnitMetric, Difference);
    let x = [1.0, 2.0, 3.0];
    let y = [4.0, 6.0, 3.0];
    // diff: [-3, -4, 0] → 25
    assert_relative_eq!(metric.apply((&x[..], &y[..])).unwrap(), 25.0);
}

#[test]
fn test_difference_length_mismatch() {
    let x = [1.0, 2.0];
    let y = [1.0];
    assert_eq!(
        Difference.apply((&x[..], &y[..])),
        Err(MetricError::DimensionMismatch {
            expected: 2,
            got: 1
        })
    );
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

#[test]
fn test_compose_error_propagates_unchanged() {
    let f = compose!(double, fail);
    assert_eq!(f.apply(1.0), Err(MetricError::SingularFactor));
}

#[test]
fn test_compose_error_short_circuits() {
    let calls = Cell::new(0);
    let counting = |x: f64| -> Result<f64, MetricError> {
        calls.set(calls.get() + 1);
        Ok(x)
    };

    let f = compose!(&counting, fail);
    assert!(f.apply(1.0).is_err());
    assert_eq!(calls.get(), 0);

    let g = compose!(&counting, double);
    assert_eq!(g.apply(1.0).unwrap(), 2.0);
    assert_eq!(calls.get(), 1);
}

// ============================================================================
// Functions as Metrics
// ============================================================================

fn manhattan_like(r: &[f64]) -> Result<f64, MetricError> {
    Ok(r.iter().map(|x| x.abs()).sum())
}

#[test]
fn test_plain_function_is_metric() {
    assert_eq!(manhattan_like.evaluate(&[1.0, -2.0]).unwrap(), 3.0);
    assert_eq!(
        manhattan_like.evaluate_batch(&[1.0, -2.0, 0.5, 0.5], 2).unwrap(),
        vec![3.0, 1.0]
    );
}

#[test]
fn test_unit_metric_stage_on_slice_and_vec() {
    let r = [3.0, 4.0];
    assert_eq!(UnitMetric.apply(&r[..]).unwrap(), 25.0);
    assert_eq!(UnitMetric.apply(vec![3.0, 4.0]).unwrap(), 25.0);
    assert_eq!(UnitMetric.evaluate(&r).unwrap(), 25.0);
}
