//! Operator kernel contracts.
//!
//! ## Purpose
//!
//! This module defines the traits an operation implements to be driven by the
//! apply and aggregate engines: a scalar form used for tails and unaccelerated
//! types, and a lane form used for full lanes.
//!
//! ## Design notes
//!
//! * **Monomorphized**: Engines are generic over the kernel type, so each kernel
//!   compiles to its own specialized loop.
//! * **Stateless**: Kernels take `&self` and hold no mutable state; the derived
//!   operations construct one per call.
//! * **Consistent forms**: For every input, `invoke_lane` element `i` must equal
//!   `invoke` applied to element `i` (up to floating-point reassociation).
//!
//! ## Key concepts
//!
//! * **Identity**: The seed of a reduction (`0` for sums, `1` for products).
//! * **Combine**: Folds the lane accumulator horizontally and merges it with the
//!   scalar accumulator of the tail.

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::lane::Lane;

// ============================================================================
// Elementwise Kernels
// ============================================================================

/// One-operand elementwise operation.
pub trait UnaryKernel<T: Element> {
    /// Apply to one element.
    fn invoke(&self, x: T) -> T;

    /// Apply to one lane.
    fn invoke_lane(&self, x: T::Lane) -> T::Lane;
}

/// Two-operand elementwise operation.
pub trait BinaryKernel<T: Element> {
    /// Apply to one element of each operand.
    fn invoke(&self, x: T, y: T) -> T;

    /// Apply to one lane of each operand.
    fn invoke_lane(&self, x: T::Lane, y: T::Lane) -> T::Lane;
}

/// Three-operand elementwise operation.
pub trait TernaryKernel<T: Element> {
    /// Apply to one element of each operand.
    fn invoke(&self, x: T, y: T, z: T) -> T;

    /// Apply to one lane of each operand.
    fn invoke_lane(&self, x: T::Lane, y: T::Lane, z: T::Lane) -> T::Lane;
}

// ============================================================================
// Aggregation Kernels
// ============================================================================

/// Reduction of a buffer to a single value.
pub trait AggregateKernel<T: Element> {
    /// Seed value; the result of reducing an empty buffer.
    fn identity(&self) -> T;

    /// Accumulate one element.
    fn invoke(&self, acc: T, x: T) -> T;

    /// Accumulate one lane, element by element.
    fn invoke_lane(&self, acc: T::Lane, x: T::Lane) -> T::Lane;

    /// Fold `lane_acc` horizontally and merge it into `scalar_acc`.
    ///
    /// The default folds every lane element through [`invoke`](Self::invoke).
    #[inline]
    fn combine(&self, scalar_acc: T, lane_acc: T::Lane) -> T {
        lane_acc.fold(scalar_acc, |acc, x| self.invoke(acc, x))
    }
}
