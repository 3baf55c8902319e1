//! Aggregate (reduction) engine.
//!
//! ## Purpose
//!
//! This module reduces a buffer to a single value, or interleaved buffers to a
//! per-field pair or triplet, using an aggregate kernel.
//!
//! ## Design notes
//!
//! * **Two accumulators**: Full lanes accumulate into a lane of partial results, the
//!   tail into a scalar; the kernel's `combine` merges them at the end.
//! * **Pairs**: The lane path runs only when the lane width is greater than 2 and
//!   even. Even lane offsets then always hold item1 and odd offsets item2.
//! * **Triplets**: Always the scalar per-record loop. Common lane widths (4, 8, 16)
//!   are not multiples of 3.
//!
//! ## Invariants
//!
//! * Reducing an empty buffer returns the kernel identity.
//! * Pair and triplet reductions reject lengths that are not multiples of 2 and 3.
//!
//! ## Non-goals
//!
//! * Compensated (Kahan) summation; floating-point results may differ from a
//!   strict left fold by reassociation.

// External dependencies
use log::trace;

// Internal dependencies
use crate::engine::packing::{lanes_enabled, pack};
use crate::engine::validator::Validator;
use crate::math::kernel::AggregateKernel;
use crate::primitives::backend::Dispatch;
use crate::primitives::element::Element;
use crate::primitives::errors::TensorError;
use crate::primitives::lane::Lane;
use crate::primitives::view::Span;

// ============================================================================
// Linear
// ============================================================================

/// Reduce every element of `source` with `kernel`.
pub fn aggregate<T, K>(kernel: &K, source: Span<'_, T>, dispatch: Dispatch) -> T
where
    T: Element,
    K: AggregateKernel<T>,
{
    let len = source.len();
    let mut scalar_acc = kernel.identity();

    if len == 0 {
        return scalar_acc;
    }

    let mut i = 0;

    if lanes_enabled::<T>(dispatch, len, &[]) {
        let width = <T::Lane as Lane<T>>::WIDTH;
        let end = len - len % width;
        let mut lane_acc = <T::Lane as Lane<T>>::splat(kernel.identity());

        while i < end {
            // SAFETY: i + width <= len.
            lane_acc = kernel.invoke_lane(lane_acc, unsafe { source.load(i) });
            i += width;
        }

        while i < len {
            // SAFETY: i < len.
            scalar_acc = kernel.invoke(scalar_acc, unsafe { source.read(i) });
            i += 1;
        }

        return kernel.combine(scalar_acc, lane_acc);
    }

    while i < len {
        // SAFETY: i < len.
        scalar_acc = kernel.invoke(scalar_acc, unsafe { source.read(i) });
        i += 1;
    }

    scalar_acc
}

// ============================================================================
// Pairs
// ============================================================================

/// Reduce interleaved `(item1, item2)` records field by field.
///
/// Returns `ArgumentShape` if `source.len()` is odd.
pub fn aggregate_pairs<T, K>(
    kernel: &K,
    source: Span<'_, T>,
    dispatch: Dispatch,
) -> Result<(T, T), TensorError>
where
    T: Element,
    K: AggregateKernel<T>,
{
    let len = source.len();
    Validator::validate_stride(len, 2)?;

    let identity = kernel.identity();
    let mut item1 = identity;
    let mut item2 = identity;
    let mut i = 0;

    let width = <T::Lane as Lane<T>>::WIDTH;
    if width > 2 && lanes_enabled::<T>(dispatch, len, &[2]) {
        let end = len - len % width;
        let mut lane_acc = pack(&[identity, identity]);

        while i < end {
            // SAFETY: i + width <= len.
            lane_acc = kernel.invoke_lane(lane_acc, unsafe { source.load(i) });
            i += width;
        }

        for offset in (0..width).step_by(2) {
            item1 = kernel.invoke(item1, lane_acc.extract(offset));
            item2 = kernel.invoke(item2, lane_acc.extract(offset + 1));
        }
    } else if len > 0 {
        trace!("pair reduction over {len} elements uses scalar loop (lane width {width})");
    }

    while i < len {
        // SAFETY: len is even and i is even, so i + 1 < len.
        unsafe {
            item1 = kernel.invoke(item1, source.read(i));
            item2 = kernel.invoke(item2, source.read(i + 1));
        }
        i += 2;
    }

    Ok((item1, item2))
}

// ============================================================================
// Triplets
// ============================================================================

/// Reduce interleaved `(item1, item2, item3)` records field by field.
///
/// Returns `ArgumentShape` if `source.len()` is not a multiple of 3.
pub fn aggregate_triplets<T, K>(kernel: &K, source: Span<'_, T>) -> Result<(T, T, T), TensorError>
where
    T: Element,
    K: AggregateKernel<T>,
{
    let len = source.len();
    Validator::validate_stride(len, 3)?;

    let identity = kernel.identity();
    let mut item1 = identity;
    let mut item2 = identity;
    let mut item3 = identity;
    let mut i = 0;

    while i < len {
        // SAFETY: len is a multiple of 3 and so is i, so i + 2 < len.
        unsafe {
            item1 = kernel.invoke(item1, source.read(i));
            item2 = kernel.invoke(item2, source.read(i + 1));
            item3 = kernel.invoke(item3, source.read(i + 2));
        }
        i += 3;
    }

    Ok((item1, item2, item3))
}
