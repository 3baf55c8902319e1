//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer walks buffers: it validates call arguments, packs broadcast
//! lanes, and drives kernels over full lanes and scalar tails.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Lane packing for broadcast operands.
pub mod packing;

/// Elementwise apply engine.
pub mod apply;

/// Reduction engine.
pub mod aggregate;
