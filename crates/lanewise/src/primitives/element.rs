//! Numeric element types accepted by the engines.
//!
//! ## Purpose
//!
//! This module defines the `Element` trait, which ties a scalar numeric type to
//! its lane type and states whether lanes for it are hardware accelerated.
//!
//! ## Design notes
//!
//! * **Generic arithmetic**: Bounds come from `num_traits::Num`. Kernels use the
//!   `wrapping_*` methods so that integer overflow wraps on the scalar path, the
//!   same as on integer lanes. Floats use plain IEEE arithmetic.
//! * **Plain old data**: Elements are `bytemuck::Pod`, which lets interleaved
//!   `[T; 2]`/`[T; 3]` records be viewed as flat buffers.
//! * **Extremes**: `lowest`/`highest` are the identities of min/max reductions
//!   (infinities for floats, `MIN`/`MAX` for integers).
//!
//! ## Key concepts
//!
//! | Element | Lane      | Accelerated |
//! |---------|-----------|-------------|
//! | `f32`   | `f32x8`   | yes         |
//! | `f64`   | `f64x4`   | yes         |
//! | `i8`    | `i8x16`   | yes         |
//! | `i16`   | `i16x16`  | yes         |
//! | `i32`   | `i32x8`   | yes         |
//! | `i64`   | `i64x4`   | yes         |
//! | `u8`    | `u8x16`   | yes         |
//! | `u16`   | `u16x8`   | yes         |
//! | `u32`   | `u32x4`   | yes         |
//! | `u64`, `usize`, `isize` | `Single` | no |
//!
//! ## Invariants
//!
//! * `ACCELERATED` implies `Lane::WIDTH > 1`.
//! * `wrapping_*` on one element equals the matching `Lane` operation on that
//!   element, for every element type.

// External dependencies
use bytemuck::Pod;
use core::fmt::Debug;
use num_traits::{Num, NumCast, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use wide::{f32x8, f64x4, i16x16, i32x8, i64x4, i8x16, u16x8, u32x4, u8x16};

// Internal dependencies
use crate::primitives::lane::{Lane, Single};

// ============================================================================
// Element Trait
// ============================================================================

/// A numeric type that can be stored in an engine buffer.
pub trait Element:
    Num + NumCast + Copy + PartialOrd + Debug + Default + Pod + Send + Sync + 'static
{
    /// Lane type used for batched processing.
    type Lane: Lane<Self>;

    /// Whether `Lane` maps to hardware vector instructions.
    const ACCELERATED: bool;

    /// Smallest representable value (negative infinity for floats).
    fn lowest() -> Self;

    /// Largest representable value (positive infinity for floats).
    fn highest() -> Self;

    /// Smaller of two values.
    fn minimum(self, other: Self) -> Self;

    /// Larger of two values.
    fn maximum(self, other: Self) -> Self;

    /// `self + other`, wrapping around on integer overflow.
    fn wrapping_add(self, other: Self) -> Self;

    /// `self - other`, wrapping around on integer overflow.
    fn wrapping_sub(self, other: Self) -> Self;

    /// `self * other`, wrapping around on integer overflow.
    fn wrapping_mul(self, other: Self) -> Self;

    /// `-self`, wrapping around on integer overflow (`MIN` stays `MIN`).
    fn wrapping_neg(self) -> Self;
}

// ============================================================================
// Implementations
// ============================================================================

macro_rules! impl_float_element {
    ($elem:ty, $lane:ty) => {
        impl Element for $elem {
            type Lane = $lane;
            const ACCELERATED: bool = true;

            #[inline]
            fn lowest() -> Self {
                <$elem>::NEG_INFINITY
            }

            #[inline]
            fn highest() -> Self {
                <$elem>::INFINITY
            }

            #[inline]
            fn minimum(self, other: Self) -> Self {
                <$elem>::min(self, other)
            }

            #[inline]
            fn maximum(self, other: Self) -> Self {
                <$elem>::max(self, other)
            }

            #[inline(always)]
            fn wrapping_add(self, other: Self) -> Self {
                self + other
            }

            #[inline(always)]
            fn wrapping_sub(self, other: Self) -> Self {
                self - other
            }

            #[inline(always)]
            fn wrapping_mul(self, other: Self) -> Self {
                self * other
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                -self
            }
        }
    };
}

macro_rules! impl_int_element {
    ($elem:ty, $lane:ty, $accelerated:expr) => {
        impl Element for $elem {
            type Lane = $lane;
            const ACCELERATED: bool = $accelerated;

            #[inline]
            fn lowest() -> Self {
                <$elem>::MIN
            }

            #[inline]
            fn highest() -> Self {
                <$elem>::MAX
            }

            #[inline]
            fn minimum(self, other: Self) -> Self {
                Ord::min(self, other)
            }

            #[inline]
            fn maximum(self, other: Self) -> Self {
                Ord::max(self, other)
            }

            #[inline(always)]
            fn wrapping_add(self, other: Self) -> Self {
                WrappingAdd::wrapping_add(&self, &other)
            }

            #[inline(always)]
            fn wrapping_sub(self, other: Self) -> Self {
                WrappingSub::wrapping_sub(&self, &other)
            }

            #[inline(always)]
            fn wrapping_mul(self, other: Self) -> Self {
                WrappingMul::wrapping_mul(&self, &other)
            }

            #[inline(always)]
            fn wrapping_neg(self) -> Self {
                WrappingNeg::wrapping_neg(&self)
            }
        }
    };
}

impl_float_element!(f32, f32x8);
impl_float_element!(f64, f64x4);

impl_int_element!(i8, i8x16, true);
impl_int_element!(i16, i16x16, true);
impl_int_element!(i32, i32x8, true);
impl_int_element!(i64, i64x4, true);
impl_int_element!(u8, u8x16, true);
impl_int_element!(u16, u16x8, true);
impl_int_element!(u32, u32x4, true);
impl_int_element!(u64, Single<u64>, false);
impl_int_element!(usize, Single<usize>, false);
impl_int_element!(isize, Single<isize>, false);
