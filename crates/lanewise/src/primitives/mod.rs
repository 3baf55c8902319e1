//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the element and lane abstractions, buffer views, operand
//! kinds, and error types used throughout the crate. It has zero internal
//! dependencies outside this layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Lane abstraction over `wide` vector types.
pub mod lane;

/// Numeric element trait.
pub mod element;

/// Buffer views and overlap detection.
pub mod view;

/// Broadcast operand kinds.
pub mod operand;

/// Dispatch policy.
pub mod backend;

/// Interleaved record reinterpretation.
pub mod interleave;
