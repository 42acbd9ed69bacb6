//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer holds the opt-in checks the builder runs before constructing a
//! metric. The metric constructors themselves stay permissive.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Metrics
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation for metric parameters.
pub mod validator;
