//! Elementwise apply engine.
//!
//! ## Purpose
//!
//! This module drives unary, binary, and ternary kernels over a source buffer
//! and writes the results into a destination buffer. The second and third
//! operands may each be a full buffer, a scalar, a pair, or a triplet.
//!
//! ## Design notes
//!
//! * **Validate-then-mutate**: Lengths, shapes, and aliasing are checked before the
//!   first write.
//! * **Lane path**: Full lanes are processed with `invoke_lane`, broadcasts use a lane
//!   packed once per call, and the tail falls back to `invoke`.
//! * **Stride fallback**: When the lane width is not a multiple of a tuple stride
//!   (e.g. triplets over 8-wide lanes), the whole call runs the scalar loop.
//! * **Raw access**: Elements move through raw pointers inside `unsafe` blocks that
//!   only run after validation, which is what permits in-place calls.
//!
//! ## Key concepts
//!
//! * **In-place**: A source that starts at the destination's address is allowed;
//!   each lane/element is read before the same position is written.
//! * **Partial destination**: A destination longer than the source keeps its extra
//!   elements untouched.
//!
//! ## Invariants
//!
//! * On error the destination is unchanged.
//! * Exactly `source.len()` destination elements are written on success.
//!
//! ## Non-goals
//!
//! * Broadcasting between buffers of different lengths.

// Internal dependencies
use crate::engine::packing::{lanes_enabled, Prepared};
use crate::engine::validator::Validator;
use crate::math::kernel::{BinaryKernel, TernaryKernel, UnaryKernel};
use crate::primitives::backend::Dispatch;
use crate::primitives::element::Element;
use crate::primitives::errors::TensorError;
use crate::primitives::lane::Lane;
use crate::primitives::operand::Operand;
use crate::primitives::view::{Span, SpanMut};

// ============================================================================
// Unary
// ============================================================================

/// Write `kernel(x[i])` to `destination[i]` for every `i` in `source`.
pub fn apply_unary<T, K>(
    kernel: &K,
    source: Span<'_, T>,
    mut destination: SpanMut<'_, T>,
    dispatch: Dispatch,
) -> Result<(), TensorError>
where
    T: Element,
    K: UnaryKernel<T>,
{
    let len = source.len();

    Validator::validate_destination(len, destination.len())?;
    Validator::validate_no_alias("x", source, &destination)?;

    let mut i = 0;

    if lanes_enabled::<T>(dispatch, len, &[]) {
        let width = <T::Lane as Lane<T>>::WIDTH;
        let end = len - len % width;

        while i < end {
            // SAFETY: i + width <= end <= len for source and destination.
            unsafe {
                let r = kernel.invoke_lane(source.load(i));
                destination.store(i, r);
            }
            i += width;
        }
    }

    while i < len {
        // SAFETY: i < len for source and destination.
        unsafe {
            let r = kernel.invoke(source.read(i));
            destination.write(i, r);
        }
        i += 1;
    }

    Ok(())
}

// ============================================================================
// Binary
// ============================================================================

/// Write `kernel(x[i], y[i])` to `destination[i]` for every `i` in `source`.
///
/// `y` is a full buffer, or a scalar/tuple broadcast across `source`.
pub fn apply_binary<T, K>(
    kernel: &K,
    source: Span<'_, T>,
    y: Operand<'_, T>,
    mut destination: SpanMut<'_, T>,
    dispatch: Dispatch,
) -> Result<(), TensorError>
where
    T: Element,
    K: BinaryKernel<T>,
{
    let len = source.len();

    Validator::validate_destination(len, destination.len())?;
    Validator::validate_operand("y", &y, len)?;
    Validator::validate_no_alias("x", source, &destination)?;
    Validator::validate_operand_alias("y", &y, &destination)?;

    let y_stride = y.stride();
    let y = Prepared::new(y);
    let mut i = 0;

    if lanes_enabled::<T>(dispatch, len, &[y_stride]) {
        let width = <T::Lane as Lane<T>>::WIDTH;
        let end = len - len % width;

        while i < end {
            // SAFETY: i + width <= len for every buffer; i is a multiple of width,
            // and width of every stride, so broadcast lanes are in phase.
            unsafe {
                let r = kernel.invoke_lane(source.load(i), y.lane(i));
                destination.store(i, r);
            }
            i += width;
        }
    }

    while i < len {
        // SAFETY: i < len for every buffer.
        unsafe {
            let r = kernel.invoke(source.read(i), y.scalar(i));
            destination.write(i, r);
        }
        i += 1;
    }

    Ok(())
}

// ============================================================================
// Ternary
// ============================================================================

/// Write `kernel(x[i], y[i], z[i])` to `destination[i]` for every `i` in `source`.
///
/// `y` and `z` are each a full buffer, or a scalar/tuple broadcast across `source`.
pub fn apply_ternary<T, K>(
    kernel: &K,
    source: Span<'_, T>,
    y: Operand<'_, T>,
    z: Operand<'_, T>,
    mut destination: SpanMut<'_, T>,
    dispatch: Dispatch,
) -> Result<(), TensorError>
where
    T: Element,
    K: TernaryKernel<T>,
{
    let len = source.len();

    Validator::validate_destination(len, destination.len())?;
    Validator::validate_operand("y", &y, len)?;
    Validator::validate_operand("z", &z, len)?;
    Validator::validate_no_alias("x", source, &destination)?;
    Validator::validate_operand_alias("y", &y, &destination)?;
    Validator::validate_operand_alias("z", &z, &destination)?;

    let strides = [y.stride(), z.stride()];
    let y = Prepared::new(y);
    let z = Prepared::new(z);
    let mut i = 0;

    if lanes_enabled::<T>(dispatch, len, &strides) {
        let width = <T::Lane as Lane<T>>::WIDTH;
        let end = len - len % width;

        while i < end {
            // SAFETY: as in `apply_binary`.
            unsafe {
                let r = kernel.invoke_lane(source.load(i), y.lane(i), z.lane(i));
                destination.store(i, r);
            }
            i += width;
        }
    }

    while i < len {
        // SAFETY: i < len for every buffer.
        unsafe {
            let r = kernel.invoke(source.read(i), y.scalar(i), z.scalar(i));
            destination.write(i, r);
        }
        i += 1;
    }

    Ok(())
}
