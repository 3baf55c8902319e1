//! Broadcast operands.
//!
//! ## Purpose
//!
//! This module defines `Operand`, the second and third argument kinds of the
//! elementwise operations: a full buffer, a scalar, or a 2-/3-field tuple that is
//! cyclically replicated across interleaved data.
//!
//! ## Key concepts
//!
//! * **Stride**: Number of interleaved fields an operand repeats over
//!   (1 for buffers and scalars, 2 for pairs, 3 for triplets).
//! * **Phase**: Element `i` of an interleaved buffer pairs with tuple field `i % stride`.
//!
//! ## Invariants
//!
//! * A tuple operand is only valid against buffers whose length is a multiple of its stride.

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::view::Span;

// ============================================================================
// Operand
// ============================================================================

/// An argument of an elementwise operation.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    /// Full buffer, same length as the source.
    Buffer(Span<'a, T>),

    /// Single value applied to every element.
    Scalar(T),

    /// 2-tuple applied to interleaved `(item1, item2)` records.
    Pair(T, T),

    /// 3-tuple applied to interleaved `(item1, item2, item3)` records.
    Triplet(T, T, T),
}

impl<'a, T> Operand<'a, T> {
    /// Interleaving stride of the operand.
    #[inline]
    pub fn stride(&self) -> usize {
        match self {
            Operand::Buffer(_) | Operand::Scalar(_) => 1,
            Operand::Pair(..) => 2,
            Operand::Triplet(..) => 3,
        }
    }

    /// The buffer view, if this is a full-buffer operand.
    #[inline]
    pub fn as_span(&self) -> Option<Span<'a, T>> {
        match self {
            Operand::Buffer(span) => Some(*span),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<'a, T> From<Span<'a, T>> for Operand<'a, T> {
    fn from(span: Span<'a, T>) -> Self {
        Operand::Buffer(span)
    }
}

impl<'a, T> From<&'a [T]> for Operand<'a, T> {
    fn from(slice: &'a [T]) -> Self {
        Operand::Buffer(Span::new(slice))
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Operand<'a, T> {
    fn from(array: &'a [T; N]) -> Self {
        Operand::Buffer(Span::new(array.as_slice()))
    }
}

#[cfg(feature = "std")]
impl<'a, T> From<&'a std::vec::Vec<T>> for Operand<'a, T> {
    fn from(vec: &'a std::vec::Vec<T>) -> Self {
        Operand::Buffer(Span::new(vec.as_slice()))
    }
}

impl<'a, T: Element> From<(T, T)> for Operand<'a, T> {
    fn from((item1, item2): (T, T)) -> Self {
        Operand::Pair(item1, item2)
    }
}

impl<'a, T: Element> From<(T, T, T)> for Operand<'a, T> {
    fn from((item1, item2, item3): (T, T, T)) -> Self {
        Operand::Triplet(item1, item2, item3)
    }
}

macro_rules! impl_scalar_operand {
    ($($elem:ty),* $(,)?) => {$(
        impl<'a> From<$elem> for Operand<'a, $elem> {
            fn from(value: $elem) -> Self {
                Operand::Scalar(value)
            }
        }
    )*};
}

impl_scalar_operand!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
