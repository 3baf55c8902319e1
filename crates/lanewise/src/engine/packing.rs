//! Lane packing for broadcast operands.
//!
//! ## Purpose
//!
//! This module builds the lane patterns used for scalar and tuple operands and
//! decides whether a call may take the lane path at all.
//!
//! ## Design notes
//!
//! * **Built once**: A broadcast lane is packed once per call and reused for every chunk.
//! * **Phase alignment**: Lane chunks start at multiples of `WIDTH`. When `WIDTH` is a
//!   multiple of the tuple stride, every chunk starts at field 0, so one pattern
//!   serves all chunks.
//!
//! ## Invariants
//!
//! * `pack(fields)` element `i` is `fields[i % fields.len()]`.

// External dependencies
use log::trace;

// Internal dependencies
use crate::primitives::backend::Dispatch;
use crate::primitives::element::Element;
use crate::primitives::lane::Lane;
use crate::primitives::operand::Operand;
use crate::primitives::view::Span;

// ============================================================================
// Packing
// ============================================================================

/// Lane holding `fields` repeated cyclically.
///
/// `fields` must be non-empty.
#[inline]
pub fn pack<T: Element>(fields: &[T]) -> T::Lane {
    debug_assert!(!fields.is_empty(), "pack: fields must be non-empty");
    let stride = fields.len();
    <T::Lane as Lane<T>>::from_fn(|i| fields[i % stride])
}

/// Whether a call over `len` elements may use lanes, given the tuple strides in use.
pub fn lanes_enabled<T: Element>(dispatch: Dispatch, len: usize, strides: &[usize]) -> bool {
    let width = <T::Lane as Lane<T>>::WIDTH;

    if !dispatch.allows_lanes::<T>() || len < width {
        return false;
    }

    if let Some(stride) = strides.iter().copied().find(|&s| width % s != 0) {
        trace!("lane width {width} is not a multiple of stride {stride}; using scalar loop");
        return false;
    }

    true
}

// ============================================================================
// Prepared Operands
// ============================================================================

/// An operand ready for the inner loops: a buffer, or a broadcast with its packed lane.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Prepared<'a, T: Element> {
    Buffer(Span<'a, T>),
    Broadcast {
        fields: [T; 3],
        stride: usize,
        lane: T::Lane,
    },
}

impl<'a, T: Element> Prepared<'a, T> {
    pub(crate) fn new(operand: Operand<'a, T>) -> Self {
        let (fields, stride) = match operand {
            Operand::Buffer(span) => return Prepared::Buffer(span),
            Operand::Scalar(v) => ([v, v, v], 1),
            Operand::Pair(a, b) => ([a, b, a], 2),
            Operand::Triplet(a, b, c) => ([a, b, c], 3),
        };

        Prepared::Broadcast {
            fields,
            stride,
            lane: pack(&fields[..stride]),
        }
    }

    /// Lane starting at element `index`.
    ///
    /// # Safety
    ///
    /// For buffers, `index + WIDTH <= len`. For broadcasts, `index` is a multiple of the stride.
    #[inline(always)]
    pub(crate) unsafe fn lane(&self, index: usize) -> T::Lane {
        match self {
            Prepared::Buffer(span) => span.load(index),
            Prepared::Broadcast { lane, .. } => *lane,
        }
    }

    /// Element `index`.
    ///
    /// # Safety
    ///
    /// For buffers, `index < len`.
    #[inline(always)]
    pub(crate) unsafe fn scalar(&self, index: usize) -> T {
        match self {
            Prepared::Buffer(span) => span.read(index),
            Prepared::Broadcast { fields, stride, .. } => fields[index % *stride],
        }
    }
}
