//! Stages and right-to-left composition.
//!
//! ## Purpose
//!
//! Metrics are not a type hierarchy; they are function values chained
//! together. This module defines the [`Stage`] trait (a fallible unary
//! function value) and [`Compose`], which glues two stages so that the
//! right-hand one runs first.
//!
//! ## Design notes
//!
//! * **Math order**: `compose(f, g)` applies `g` first, then `f`.
//! * **Variadic innermost**: Only the rightmost stage sees the raw call
//!   arguments, so it may take a tuple. Every stage to its left receives
//!   exactly one value: the previous stage's output.
//! * **No neutral element**: [`compose!`](crate::compose) requires at least
//!   one stage; `compose!()` does not compile.
//! * **Errors pass through**: A failing stage short-circuits the chain and its
//!   error reaches the caller unchanged.
//!
//! ## Invariants
//!
//! * `Compose` holds its stages immutably; applying it never mutates them.

// Internal dependencies
use crate::primitives::errors::MetricError;

// ============================================================================
// Stage Trait
// ============================================================================

/// A fallible function value from `In` to [`Stage::Output`].
///
/// Any `Fn(In) -> Result<Out, MetricError>` is a stage, so plain functions
/// and closures compose with the metric types in this crate.
pub trait Stage<In> {
    /// Value produced by this stage.
    type Output;

    /// Run the stage on `input`.
    fn apply(&self, input: In) -> Result<Self::Output, MetricError>;
}

impl<F, In, Out> Stage<In> for F
where
    F: Fn(In) -> Result<Out, MetricError>,
{
    type Output = Out;

    #[inline]
    fn apply(&self, input: In) -> Result<Out, MetricError> {
        self(input)
    }
}

// ============================================================================
// Compose
// ============================================================================

/// Two stages chained as `outer ∘ inner`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compose<F, G> {
    outer: F,
    inner: G,
}

impl<F, G> Compose<F, G> {
    /// Chain `outer` after `inner`.
    #[inline]
    pub fn new(outer: F, inner: G) -> Self {
        Self { outer, inner }
    }

    /// The stage applied last.
    #[inline]
    pub fn outer(&self) -> &F {
        &self.outer
    }

    /// The stage applied first.
    #[inline]
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Split back into `(outer, inner)`.
    #[inline]
    pub fn into_parts(self) -> (F, G) {
        (self.outer, self.inner)
    }
}

impl<In, F, G> Stage<In> for Compose<F, G>
where
    G: Stage<In>,
    F: Stage<G::Output>,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, input: In) -> Result<F::Output, MetricError> {
        self.outer.apply(self.inner.apply(input)?)
    }
}

/// Compose two stages: the result applies `inner`, then `outer`.
#[inline]
pub fn compose<F, G>(outer: F, inner: G) -> Compose<F, G> {
    Compose::new(outer, inner)
}

/// Compose one or more stages right to left.
///
/// `compose!(f1, f2, ..., fn)` applies `fn` to the raw input first and `f1`
/// last. A single stage is returned unchanged.
///
/// ```
/// use gp_metrics::prelude::*;
///
/// fn double(x: f64) -> Result<f64, MetricError> {
///     Ok(2.0 * x)
/// }
/// fn increment(x: f64) -> Result<f64, MetricError> {
///     Ok(x + 1.0)
/// }
///
/// // increment first, then double
/// let f = gp_metrics::compose!(double, increment);
/// assert_eq!(f.apply(3.0)?, 8.0);
/// # Result::<(), MetricError>::Ok(())
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        compile_error!("compose! requires at least one stage")
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::prelude::Compose::new($f, $crate::compose!($($rest),+))
    };
}
