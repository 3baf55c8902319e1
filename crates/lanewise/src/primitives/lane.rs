//! Lane abstraction over `wide` vector types.
//!
//! ## Purpose
//!
//! This module defines the `Lane` trait, a fixed-width batch of elements that
//! the engines process as one unit, and implements it for the `wide` SIMD
//! types plus a one-element fallback for element types without acceleration.
//!
//! ## Design notes
//!
//! * **Portable**: `wide` selects SSE/AVX/NEON/WASM instructions at compile time
//!   and falls back to plain arrays elsewhere, so the engines never touch intrinsics.
//! * **Array bridge**: Conversions to and from `[T; N]` go through `bytemuck::cast`,
//!   which every `wide` type supports.
//! * **Integer semantics**: Integer lanes wrap on overflow, like the `wide` operators.
//!   Operations `wide` does not provide for a type are computed element by element.
//!
//! ## Key concepts
//!
//! * **Width**: Number of elements per lane (`WIDTH`), e.g. 8 for `f32x8`.
//! * **Single**: A width-1 lane used for unaccelerated element types.
//!
//! ## Invariants
//!
//! * `load`/`store` touch exactly `WIDTH` consecutive elements.
//! * `extract(i)` returns the element stored at offset `i` by `store`.
//!
//! ## Non-goals
//!
//! * Masked or gather/scatter loads.
//! * Horizontal operations beyond a plain left fold.

// External dependencies
use core::fmt::Debug;
use core::ptr;
use wide::{f32x8, f64x4, i16x16, i32x8, i64x4, i8x16, u16x8, u32x4, u8x16};

// ============================================================================
// Lane Trait
// ============================================================================

/// A fixed-width batch of `T` values processed as one operation.
pub trait Lane<T: Copy>: Copy + Debug {
    /// Number of elements in the lane.
    const WIDTH: usize;

    /// Lane with every element set to `value`.
    fn splat(value: T) -> Self;

    /// Lane whose element `i` is `f(i)`.
    fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self;

    /// Element at offset `index` (`index < WIDTH`).
    fn extract(self, index: usize) -> T;

    /// Left fold over the elements in offset order.
    fn fold<F: FnMut(T, T) -> T>(self, init: T, f: F) -> T;

    /// Read `WIDTH` consecutive elements starting at `src`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `WIDTH` elements. No alignment is required.
    unsafe fn load(src: *const T) -> Self;

    /// Write the lane to `WIDTH` consecutive elements starting at `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `WIDTH` elements. No alignment is required.
    unsafe fn store(self, dst: *mut T);

    /// Element-wise sum.
    fn add(self, rhs: Self) -> Self;

    /// Element-wise difference.
    fn sub(self, rhs: Self) -> Self;

    /// Element-wise product.
    fn mul(self, rhs: Self) -> Self;

    /// Element-wise quotient.
    fn div(self, rhs: Self) -> Self;

    /// Element-wise negation.
    fn neg(self) -> Self;

    /// Element-wise minimum.
    fn min(self, rhs: Self) -> Self;

    /// Element-wise maximum.
    fn max(self, rhs: Self) -> Self;
}

// ============================================================================
// Shared Plumbing
// ============================================================================

macro_rules! lane_plumbing {
    ($lane:ty, $elem:ty, $width:literal) => {
        const WIDTH: usize = $width;

        #[inline(always)]
        fn splat(value: $elem) -> Self {
            <$lane>::splat(value)
        }

        #[inline(always)]
        fn from_fn<F: FnMut(usize) -> $elem>(f: F) -> Self {
            let fields: [$elem; $width] = core::array::from_fn(f);
            bytemuck::cast(fields)
        }

        #[inline(always)]
        fn extract(self, index: usize) -> $elem {
            let fields: [$elem; $width] = bytemuck::cast(self);
            fields[index]
        }

        #[inline(always)]
        fn fold<F: FnMut($elem, $elem) -> $elem>(self, init: $elem, f: F) -> $elem {
            let fields: [$elem; $width] = bytemuck::cast(self);
            fields.into_iter().fold(init, f)
        }

        #[inline(always)]
        unsafe fn load(src: *const $elem) -> Self {
            bytemuck::cast(ptr::read_unaligned(src as *const [$elem; $width]))
        }

        #[inline(always)]
        unsafe fn store(self, dst: *mut $elem) {
            let fields: [$elem; $width] = bytemuck::cast(self);
            ptr::write_unaligned(dst as *mut [$elem; $width], fields);
        }
    };
}

macro_rules! zip_map {
    ($elem:ty, $width:literal, $lhs:expr, $rhs:expr, $f:expr) => {{
        let a: [$elem; $width] = bytemuck::cast($lhs);
        let b: [$elem; $width] = bytemuck::cast($rhs);
        let out: [$elem; $width] = core::array::from_fn(|i| $f(a[i], b[i]));
        bytemuck::cast(out)
    }};
}

// ============================================================================
// Float Lanes
// ============================================================================

macro_rules! impl_float_lane {
    ($lane:ty, $elem:ty, $width:literal) => {
        impl Lane<$elem> for $lane {
            lane_plumbing!($lane, $elem, $width);

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn neg(self) -> Self {
                -self
            }

            // Per-element so NaN handling matches `<$elem>::min` exactly.
            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                zip_map!($elem, $width, self, rhs, <$elem>::min)
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                zip_map!($elem, $width, self, rhs, <$elem>::max)
            }
        }
    };
}

impl_float_lane!(f32x8, f32, 8);
impl_float_lane!(f64x4, f64, 4);

// ============================================================================
// Integer Lanes
// ============================================================================

macro_rules! impl_int_lane {
    (@common $lane:ty, $elem:ty, $width:literal, $mul:expr) => {
        impl Lane<$elem> for $lane {
            lane_plumbing!($lane, $elem, $width);

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                ($mul)(self, rhs)
            }

            // No SIMD integer division; panics on a zero divisor like the scalar path.
            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                zip_map!($elem, $width, self, rhs, |a: $elem, b: $elem| a / b)
            }

            #[inline(always)]
            fn neg(self) -> Self {
                <$lane>::splat(0) - self
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                zip_map!($elem, $width, self, rhs, Ord::min)
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                zip_map!($elem, $width, self, rhs, Ord::max)
            }
        }
    };
    ($lane:ty, $elem:ty, $width:literal, mul = native) => {
        impl_int_lane!(@common $lane, $elem, $width, |a: $lane, b: $lane| a * b);
    };
    ($lane:ty, $elem:ty, $width:literal, mul = mapped) => {
        impl_int_lane!(@common $lane, $elem, $width, |a: $lane, b: $lane| -> $lane {
            zip_map!($elem, $width, a, b, <$elem>::wrapping_mul)
        });
    };
}

impl_int_lane!(i8x16, i8, 16, mul = mapped);
impl_int_lane!(i16x16, i16, 16, mul = native);
impl_int_lane!(i32x8, i32, 8, mul = native);
impl_int_lane!(i64x4, i64, 4, mul = mapped);
impl_int_lane!(u8x16, u8, 16, mul = mapped);
impl_int_lane!(u16x8, u16, 8, mul = mapped);
impl_int_lane!(u32x4, u32, 4, mul = mapped);

// ============================================================================
// Single-Element Fallback
// ============================================================================

/// Width-1 lane for element types without hardware acceleration.
///
/// The engines never take a lane path for these types; the implementation
/// exists so every element type shares the same generic code.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct Single<T>(pub T);

macro_rules! impl_single_lane {
    ($($elem:ty),* $(,)?) => {$(
        impl Lane<$elem> for Single<$elem> {
            const WIDTH: usize = 1;

            #[inline(always)]
            fn splat(value: $elem) -> Self {
                Single(value)
            }

            #[inline(always)]
            fn from_fn<F: FnMut(usize) -> $elem>(mut f: F) -> Self {
                Single(f(0))
            }

            #[inline(always)]
            fn extract(self, _index: usize) -> $elem {
                self.0
            }

            #[inline(always)]
            fn fold<F: FnMut($elem, $elem) -> $elem>(self, init: $elem, mut f: F) -> $elem {
                f(init, self.0)
            }

            #[inline(always)]
            unsafe fn load(src: *const $elem) -> Self {
                Single(ptr::read_unaligned(src))
            }

            #[inline(always)]
            unsafe fn store(self, dst: *mut $elem) {
                ptr::write_unaligned(dst, self.0);
            }

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Single(self.0.wrapping_add(rhs.0))
            }

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Single(self.0.wrapping_sub(rhs.0))
            }

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Single(self.0.wrapping_mul(rhs.0))
            }

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Single(self.0 / rhs.0)
            }

            #[inline(always)]
            fn neg(self) -> Self {
                Single(self.0.wrapping_neg())
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Single(Ord::min(self.0, rhs.0))
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Single(Ord::max(self.0, rhs.0))
            }
        }
    )*};
}

impl_single_lane!(isize, u64, usize);
