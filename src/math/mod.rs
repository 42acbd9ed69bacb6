//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks metrics are made of:
//! - The squared-norm reduction (`unit_metric`)
//! - Cholesky factorization and triangular solves
//!
//! These are pure functions with no metric-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Metrics
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Squared Euclidean norm reductions.
pub mod distance;

/// Linear algebra backend (nalgebra).
pub mod linalg;
