//! # lanewise: Lane-Batched Elementwise and Reduction Kernels for Rust
//!
//! A small generic engine that applies elementwise numeric functions and
//! reductions over contiguous numeric buffers. Full batches ("lanes") run on
//! portable SIMD vectors from [`wide`](https://docs.rs/wide); the remainder and
//! element types without vector support run a scalar loop.
//!
//! ## What does it do?
//!
//! * **Elementwise**: `add`, `subtract`, `multiply`, `divide`, `negate`, `square`,
//!   and the fused `add_multiply` (`(x + y) * z`).
//! * **Broadcast**: The second and third operands may be a buffer, a scalar, or a
//!   2-/3-field tuple repeated across interleaved `(x, y)` / `(x, y, z)` records.
//! * **Reductions**: `sum`, `product`, `min`, `max`, `average`, and per-field
//!   `sum_2d`/`average_2d`/`sum_3d`/`average_3d` over interleaved records.
//! * **Safety**: Every call validates lengths, shapes, and aliasing before the
//!   first write. A rejected call leaves the destination unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let x = vec![1.0_f64, 11.0];
//! let mut out = vec![0.0; 2];
//!
//! // Scalar broadcast
//! add(&x, 12.0_f64, &mut out)?;
//! assert_eq!(out, [13.0, 23.0]);
//!
//! // Buffer operand
//! add(&x, &[12.0, 13.0], &mut out)?;
//! assert_eq!(out, [13.0, 24.0]);
//!
//! // Reductions
//! assert_eq!(sum(&x), 12.0);
//! assert_eq!(average(&[1.0_f64, 2.0]), Some(1.5));
//! # Result::<(), TensorError>::Ok(())
//! ```
//!
//! ### Interleaved Records
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let points = [[0.0_f32, 1.0], [2.0, 3.0]];
//! let mut out = [0.0_f32; 4];
//!
//! // (x + 24) * 2 and (y + 25) * 3 for every record
//! add_multiply(flatten_pairs(&points), (24.0_f32, 25.0), (2.0_f32, 3.0), &mut out)?;
//! assert_eq!(out, [48.0, 78.0, 52.0, 84.0]);
//!
//! let (sx, sy) = sum_2d(flatten_pairs(&points))?;
//! assert_eq!((sx, sy), (2.0, 4.0));
//! # Result::<(), TensorError>::Ok(())
//! ```
//!
//! ### In-Place Operations
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! let mut x = vec![1_i32, 2, 3];
//! multiply_in_place(&mut x, 2_i32)?;
//! assert_eq!(x, [2, 4, 6]);
//! # Result::<(), TensorError>::Ok(())
//! ```
//!
//! ### Configuration
//!
//! ```rust
//! use lanewise::prelude::*;
//!
//! // Force the scalar loop (e.g. to compare against the vectorized path)
//! let engine = Engine::builder().dispatch(Scalar).build()?;
//! assert_eq!(engine.sum(&[1_u8, 2, 3]), 6);
//! # Result::<(), TensorError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Elementwise operations and record reductions return
//! `Result<_, TensorError>`:
//!
//! - **`ArgumentLength`**: A buffer operand or the destination has the wrong length.
//! - **`ArgumentShape`**: The buffer length is not a multiple of the tuple stride.
//! - **`ArgumentAlias`**: An input partially overlaps the destination.
//!
//! ## Element Types
//!
//! | Type    | Lane     | Vectorized |
//! |---------|----------|------------|
//! | `f32`   | `f32x8`  | yes        |
//! | `f64`   | `f64x4`  | yes        |
//! | `i8`    | `i8x16`  | yes        |
//! | `i16`   | `i16x16` | yes        |
//! | `i32`   | `i32x8`  | yes        |
//! | `i64`   | `i64x4`  | yes        |
//! | `u8`    | `u8x16`  | yes        |
//! | `u16`   | `u16x8`  | yes        |
//! | `u32`   | `u32x4`  | yes        |
//! | `u64`, `usize`, `isize` | single | no |
//!
//! Integer arithmetic wraps on overflow on both the lane path and the scalar
//! path, so results never depend on buffer length or dispatch policy.
//!
//! ## Feature Flags
//!
//! - **`std`** (default): Implements `std::error::Error` for `TensorError`.
//! - **`dev`**: Exposes internal modules under `internals` for testing.
//!
//! ## no_std Support
//!
//! The crate is `no_std` compatible with `default-features = false`.
//! No allocation is ever performed.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - elements, lanes, views, and errors.
mod primitives;

// Layer 2: Math - kernel contracts and operator kernels.
mod math;

// Layer 3: Engine - validation and buffer traversal.
mod engine;

// High-level API for derived numeric operations.
mod api;

// Standard lanewise prelude.
pub mod prelude {
    pub use crate::api::{
        add, add_in_place, add_multiply, add_multiply_in_place, average, average_2d,
        average_3d, divide, divide_in_place, max, min, multiply, multiply_in_place, negate,
        negate_in_place, product, square, square_in_place, subtract, subtract_in_place, sum,
        sum_2d, sum_3d,
        Dispatch,
        Dispatch::{Auto, Scalar},
        Element, Engine, EngineBuilder, Operand, TensorError,
    };
    pub use crate::primitives::interleave::{
        as_pairs, as_triplets, flatten_pairs, flatten_pairs_mut, flatten_triplets,
        flatten_triplets_mut,
    };
    pub use crate::primitives::view::{overlaps, slices_overlap, Span, SpanMut};
}

// Building blocks for custom kernels.
//
// Exposes the kernel contracts and the engines that drive them, so new
// operations can be written without going through the derived API.
pub mod kernels {
    pub use crate::engine::aggregate::{aggregate, aggregate_pairs, aggregate_triplets};
    pub use crate::engine::apply::{apply_binary, apply_ternary, apply_unary};
    pub use crate::math::kernel::{AggregateKernel, BinaryKernel, TernaryKernel, UnaryKernel};
    pub use crate::math::operators::{
        AddMultiply, Addition, Division, Maximum, Minimum, Multiplication, Negation, Squaring,
        Subtraction,
    };
    pub use crate::primitives::backend::Dispatch;
    pub use crate::primitives::lane::{Lane, Single};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
