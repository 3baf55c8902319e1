//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer defines what an operation computes, independent of how buffers
//! are walked:
//! - Kernel contracts (unary, binary, ternary, aggregate)
//! - Concrete operator kernels
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Kernel traits.
pub mod kernel;

/// Operator kernels.
pub mod operators;
