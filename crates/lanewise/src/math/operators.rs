//! Concrete operator kernels.
//!
//! ## Purpose
//!
//! This module provides the kernels behind the derived numeric operations:
//! arithmetic, negation, squaring, the fused add-then-multiply, and the
//! sum/product/min/max reductions.
//!
//! ## Key concepts
//!
//! | Kernel           | Form                   | Identity  | Combine                      |
//! |------------------|------------------------|-----------|------------------------------|
//! | `Addition`       | `x + y`                | `0`       | `total + hsum(lane)`         |
//! | `Subtraction`    | `x - y`                | -         | -                            |
//! | `Multiplication` | `x * y`                | `1`       | `total * hprod(lane)`        |
//! | `Division`       | `x / y`                | -         | -                            |
//! | `Negation`       | `-x`                   | -         | -                            |
//! | `Squaring`       | `x * x`                | -         | -                            |
//! | `AddMultiply`    | `(x + y) * z`          | -         | -                            |
//! | `Minimum`        | -                      | `highest` | `min(total, hmin(lane))`     |
//! | `Maximum`        | -                      | `lowest`  | `max(total, hmax(lane))`     |
//!
//! Integer forms wrap on overflow in both the scalar and the lane form, so a
//! call gives the same result whatever the buffer length or dispatch policy.
//! Integer division by zero panics on both paths.
//!
//! ## Invariants
//!
//! * All kernels are zero-sized and stateless.

// External dependencies
use core::ops::Neg;

// Internal dependencies
use crate::math::kernel::{AggregateKernel, BinaryKernel, TernaryKernel, UnaryKernel};
use crate::primitives::element::Element;
use crate::primitives::lane::Lane;

// ============================================================================
// Arithmetic
// ============================================================================

/// `x + y`; as a reduction, the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Addition;

impl<T: Element> BinaryKernel<T> for Addition {
    #[inline(always)]
    fn invoke(&self, x: T, y: T) -> T {
        x.wrapping_add(y)
    }

    #[inline(always)]
    fn invoke_lane(&self, x: T::Lane, y: T::Lane) -> T::Lane {
        x.add(y)
    }
}

impl<T: Element> AggregateKernel<T> for Addition {
    #[inline(always)]
    fn identity(&self) -> T {
        T::zero()
    }

    #[inline(always)]
    fn invoke(&self, acc: T, x: T) -> T {
        acc.wrapping_add(x)
    }

    #[inline(always)]
    fn invoke_lane(&self, acc: T::Lane, x: T::Lane) -> T::Lane {
        acc.add(x)
    }

    #[inline]
    fn combine(&self, scalar_acc: T, lane_acc: T::Lane) -> T {
        scalar_acc.wrapping_add(lane_acc.fold(T::zero(), T::wrapping_add))
    }
}

/// `x - y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Subtraction;

impl<T: Element> BinaryKernel<T> for Subtraction {
    #[inline(always)]
    fn invoke(&self, x: T, y: T) -> T {
        x.wrapping_sub(y)
    }

    #[inline(always)]
    fn invoke_lane(&self, x: T::Lane, y: T::Lane) -> T::Lane {
        x.sub(y)
    }
}

/// `x * y`; as a reduction, the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Multiplication;

impl<T: Element> BinaryKernel<T> for Multiplication {
    #[inline(always)]
    fn invoke(&self, x: T, y: T) -> T {
        x.wrapping_mul(y)
    }

    #[inline(always)]
    fn invoke_lane(&self, x: T::Lane, y: T::Lane) -> T::Lane {
        x.mul(y)
    }
}

impl<T: Element> AggregateKernel<T> for Multiplication {
    #[inline(always)]
    fn identity(&self) -> T {
        T::one()
    }

    #[inline(always)]
    fn invoke(&self, acc: T, x: T) -> T {
        acc.wrapping_mul(x)
    }

    #[inline(always)]
    fn invoke_lane(&self, acc: T::Lane, x: T::Lane) -> T::Lane {
        acc.mul(x)
    }

    #[inline]
    fn combine(&self, scalar_acc: T, lane_acc: T::Lane) -> T {
        scalar_acc.wrapping_mul(lane_acc.fold(T::one(), T::wrapping_mul))
    }
}

/// `x / y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Division;

impl<T: Element> BinaryKernel<T> for Division {
    #[inline(always)]
    fn invoke(&self, x: T, y: T) -> T {
        x / y
    }

    #[inline(always)]
    fn invoke_lane(&self, x: T::Lane, y: T::Lane) -> T::Lane {
        x.div(y)
    }
}

// ============================================================================
// Unary
// ============================================================================

/// `-x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Negation;

impl<T: Element + Neg<Output = T>> UnaryKernel<T> for Negation {
    #[inline(always)]
    fn invoke(&self, x: T) -> T {
        x.wrapping_neg()
    }

    #[inline(always)]
    fn invoke_lane(&self, x: T::Lane) -> T::Lane {
        x.neg()
    }
}

/// `x * x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Squaring;

impl<T: Element> UnaryKernel<T> for Squaring {
    #[inline(always)]
    fn invoke(&self, x: T) -> T {
        x.wrapping_mul(x)
    }

    #[inline(always)]
    fn invoke_lane(&self, x: T::Lane) -> T::Lane {
        x.mul(x)
    }
}

// ============================================================================
// Fused
// ============================================================================

/// `(x + y) * z` without a temporary buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddMultiply;

impl<T: Element> TernaryKernel<T> for AddMultiply {
    #[inline(always)]
    fn invoke(&self, x: T, y: T, z: T) -> T {
        x.wrapping_add(y).wrapping_mul(z)
    }

    #[inline(always)]
    fn invoke_lane(&self, x: T::Lane, y: T::Lane, z: T::Lane) -> T::Lane {
        x.add(y).mul(z)
    }
}

// ============================================================================
// Extremes
// ============================================================================

/// Smallest element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Minimum;

impl<T: Element> AggregateKernel<T> for Minimum {
    #[inline(always)]
    fn identity(&self) -> T {
        T::highest()
    }

    #[inline(always)]
    fn invoke(&self, acc: T, x: T) -> T {
        acc.minimum(x)
    }

    #[inline(always)]
    fn invoke_lane(&self, acc: T::Lane, x: T::Lane) -> T::Lane {
        acc.min(x)
    }

    #[inline]
    fn combine(&self, scalar_acc: T, lane_acc: T::Lane) -> T {
        scalar_acc.minimum(lane_acc.fold(T::highest(), T::minimum))
    }
}

/// Largest element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Maximum;

impl<T: Element> AggregateKernel<T> for Maximum {
    #[inline(always)]
    fn identity(&self) -> T {
        T::lowest()
    }

    #[inline(always)]
    fn invoke(&self, acc: T, x: T) -> T {
        acc.maximum(x)
    }

    #[inline(always)]
    fn invoke_lane(&self, acc: T::Lane, x: T::Lane) -> T::Lane {
        acc.max(x)
    }

    #[inline]
    fn combine(&self, scalar_acc: T, lane_acc: T::Lane) -> T {
        scalar_acc.maximum(lane_acc.fold(T::lowest(), T::maximum))
    }
}
