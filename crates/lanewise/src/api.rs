//! High-level API: derived numeric operations.
//!
//! ## Purpose
//!
//! This module provides the user-facing operations (`add`, `sum`, `average_2d`, ...)
//! as thin instantiations of the apply and aggregate engines, plus the `Engine`
//! value that carries the dispatch policy.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Operands accept slices, arrays, scalars, and tuples via `Into<Operand>`.
//! * **In-place**: Every elementwise operation has an `_in_place` form that writes
//!   back into its first argument.
//! * **Configurable**: `Engine::builder()` selects the dispatch policy; the free
//!   functions use `Engine::default()`.
//!
//! ## Key concepts
//!
//! * **2D/3D reductions**: `sum_2d`/`average_2d` treat the buffer as interleaved
//!   `(x, y)` records, `sum_3d`/`average_3d` as `(x, y, z)` records.
//! * **Averages**: Return `None` for empty input, or when the element count does
//!   not fit in `T`.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`EngineBuilder`] via `Engine::builder()`.
//! 2. Chain configuration methods (`.dispatch()`).
//! 3. Call `.build()` to validate and obtain an [`Engine`].

// External dependencies
use core::ops::Neg;
use num_traits::NumCast;

// Internal dependencies
use crate::engine::aggregate::{aggregate, aggregate_pairs, aggregate_triplets};
use crate::engine::apply::{apply_binary, apply_ternary, apply_unary};
use crate::engine::validator::Validator;
use crate::math::kernel::{AggregateKernel, BinaryKernel, TernaryKernel, UnaryKernel};
use crate::math::operators::{
    AddMultiply, Addition, Division, Maximum, Minimum, Multiplication, Negation, Squaring,
    Subtraction,
};
use crate::primitives::view::{Span, SpanMut};

// Publicly re-exported types
pub use crate::primitives::backend::Dispatch;
pub use crate::primitives::element::Element;
pub use crate::primitives::errors::TensorError;
pub use crate::primitives::operand::Operand;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for an [`Engine`].
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    /// Dispatch policy (default: `Auto`).
    pub dispatch: Option<Dispatch>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl EngineBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dispatch policy.
    pub fn dispatch(mut self, dispatch: Dispatch) -> Self {
        if self.dispatch.is_some() {
            self.duplicate_param = Some("dispatch");
        }
        self.dispatch = Some(dispatch);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<Engine, TensorError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Ok(Engine {
            dispatch: self.dispatch.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Entry point for the derived operations under a chosen dispatch policy.
///
/// `Engine` is a small `Copy` value with no state beyond its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    dispatch: Dispatch,
}

impl Engine {
    /// Engine with the default (`Auto`) dispatch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring an engine.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// The dispatch policy in use.
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    // ========================================================================
    // Engine Plumbing
    // ========================================================================

    fn unary<T: Element, K: UnaryKernel<T>>(
        &self,
        kernel: K,
        x: &[T],
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        apply_unary(&kernel, Span::new(x), SpanMut::new(destination), self.dispatch)
    }

    fn unary_in_place<T: Element, K: UnaryKernel<T>>(
        &self,
        kernel: K,
        x: &mut [T],
    ) -> Result<(), TensorError> {
        let destination = SpanMut::new(x);
        apply_unary(&kernel, destination.as_source(), destination, self.dispatch)
    }

    fn binary<'a, T: Element, K: BinaryKernel<T>>(
        &self,
        kernel: K,
        x: &[T],
        y: Operand<'a, T>,
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        apply_binary(
            &kernel,
            Span::new(x),
            y,
            SpanMut::new(destination),
            self.dispatch,
        )
    }

    fn binary_in_place<'a, T: Element, K: BinaryKernel<T>>(
        &self,
        kernel: K,
        x: &mut [T],
        y: Operand<'a, T>,
    ) -> Result<(), TensorError> {
        let destination = SpanMut::new(x);
        apply_binary(&kernel, destination.as_source(), y, destination, self.dispatch)
    }

    fn ternary<'a, T: Element, K: TernaryKernel<T>>(
        &self,
        kernel: K,
        x: &[T],
        y: Operand<'a, T>,
        z: Operand<'a, T>,
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        apply_ternary(
            &kernel,
            Span::new(x),
            y,
            z,
            SpanMut::new(destination),
            self.dispatch,
        )
    }

    fn reduce<T: Element, K: AggregateKernel<T>>(&self, kernel: K, x: &[T]) -> T {
        aggregate(&kernel, Span::new(x), self.dispatch)
    }

    // ========================================================================
    // Elementwise
    // ========================================================================

    /// `destination[i] = x[i] + y[i]`.
    pub fn add<'a, T: Element>(
        &self,
        x: &[T],
        y: impl Into<Operand<'a, T>>,
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        self.binary(Addition, x, y.into(), destination)
    }

    /// `x[i] += y[i]`.
    pub fn add_in_place<'a, T: Element>(
        &self,
        x: &mut [T],
        y: impl Into<Operand<'a, T>>,
    ) -> Result<(), TensorError> {
        self.binary_in_place(Addition, x, y.into())
    }

    /// `destination[i] = x[i] - y[i]`.
    pub fn subtract<'a, T: Element>(
        &self,
        x: &[T],
        y: impl Into<Operand<'a, T>>,
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        self.binary(Subtraction, x, y.into(), destination)
    }

    /// `x[i] -= y[i]`.
    pub fn subtract_in_place<'a, T: Element>(
        &self,
        x: &mut [T],
        y: impl Into<Operand<'a, T>>,
    ) -> Result<(), TensorError> {
        self.binary_in_place(Subtraction, x, y.into())
    }

    /// `destination[i] = x[i] * y[i]`.
    pub fn multiply<'a, T: Element>(
        &self,
        x: &[T],
        y: impl Into<Operand<'a, T>>,
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        self.binary(Multiplication, x, y.into(), destination)
    }

    /// `x[i] *= y[i]`.
    pub fn multiply_in_place<'a, T: Element>(
        &self,
        x: &mut [T],
        y: impl Into<Operand<'a, T>>,
    ) -> Result<(), TensorError> {
        self.binary_in_place(Multiplication, x, y.into())
    }

    /// `destination[i] = x[i] / y[i]`.
    ///
    /// Integer division by zero panics, as it does for scalar integers.
    pub fn divide<'a, T: Element>(
        &self,
        x: &[T],
        y: impl Into<Operand<'a, T>>,
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        self.binary(Division, x, y.into(), destination)
    }

    /// `x[i] /= y[i]`.
    pub fn divide_in_place<'a, T: Element>(
        &self,
        x: &mut [T],
        y: impl Into<Operand<'a, T>>,
    ) -> Result<(), TensorError> {
        self.binary_in_place(Division, x, y.into())
    }

    /// `destination[i] = -x[i]`.
    pub fn negate<T: Element + Neg<Output = T>>(
        &self,
        x: &[T],
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        self.unary(Negation, x, destination)
    }

    /// `x[i] = -x[i]`.
    pub fn negate_in_place<T: Element + Neg<Output = T>>(
        &self,
        x: &mut [T],
    ) -> Result<(), TensorError> {
        self.unary_in_place(Negation, x)
    }

    /// `destination[i] = x[i] * x[i]`.
    pub fn square<T: Element>(&self, x: &[T], destination: &mut [T]) -> Result<(), TensorError> {
        self.unary(Squaring, x, destination)
    }

    /// `x[i] = x[i] * x[i]`.
    pub fn square_in_place<T: Element>(&self, x: &mut [T]) -> Result<(), TensorError> {
        self.unary_in_place(Squaring, x)
    }

    /// `destination[i] = (x[i] + y[i]) * z[i]`.
    pub fn add_multiply<'a, T: Element>(
        &self,
        x: &[T],
        y: impl Into<Operand<'a, T>>,
        z: impl Into<Operand<'a, T>>,
        destination: &mut [T],
    ) -> Result<(), TensorError> {
        self.ternary(AddMultiply, x, y.into(), z.into(), destination)
    }

    /// `x[i] = (x[i] + y[i]) * z[i]`.
    pub fn add_multiply_in_place<'a, T: Element>(
        &self,
        x: &mut [T],
        y: impl Into<Operand<'a, T>>,
        z: impl Into<Operand<'a, T>>,
    ) -> Result<(), TensorError> {
        let destination = SpanMut::new(x);
        apply_ternary(
            &AddMultiply,
            destination.as_source(),
            y.into(),
            z.into(),
            destination,
            self.dispatch,
        )
    }

    // ========================================================================
    // Reductions
    // ========================================================================

    /// Sum of all elements; `0` for an empty buffer.
    pub fn sum<T: Element>(&self, x: &[T]) -> T {
        self.reduce(Addition, x)
    }

    /// Product of all elements; `1` for an empty buffer.
    pub fn product<T: Element>(&self, x: &[T]) -> T {
        self.reduce(Multiplication, x)
    }

    /// Smallest element, or `None` for an empty buffer.
    pub fn min<T: Element>(&self, x: &[T]) -> Option<T> {
        if x.is_empty() {
            return None;
        }
        Some(self.reduce(Minimum, x))
    }

    /// Largest element, or `None` for an empty buffer.
    pub fn max<T: Element>(&self, x: &[T]) -> Option<T> {
        if x.is_empty() {
            return None;
        }
        Some(self.reduce(Maximum, x))
    }

    /// Arithmetic mean.
    ///
    /// Returns `None` when the buffer is empty, and also when the element
    /// count cannot be represented in `T` (more than 127 `i8` values, for
    /// example). Check `x.is_empty()` to tell the two apart.
    ///
    /// Integer element types use integer division of the wrapping sum.
    pub fn average<T: Element>(&self, x: &[T]) -> Option<T> {
        if x.is_empty() {
            return None;
        }
        let count = <T as NumCast>::from(x.len())?;
        Some(self.sum(x) / count)
    }

    /// Per-field sums of interleaved `(x, y)` records.
    pub fn sum_2d<T: Element>(&self, x: &[T]) -> Result<(T, T), TensorError> {
        aggregate_pairs(&Addition, Span::new(x), self.dispatch)
    }

    /// Per-field means of interleaved `(x, y)` records.
    ///
    /// `Ok(None)` for an empty buffer, or when the record count does not fit in `T`.
    pub fn average_2d<T: Element>(&self, x: &[T]) -> Result<Option<(T, T)>, TensorError> {
        let (sum_x, sum_y) = self.sum_2d(x)?;
        if x.is_empty() {
            return Ok(None);
        }
        Ok(<T as NumCast>::from(x.len() / 2).map(|count| (sum_x / count, sum_y / count)))
    }

    /// Per-field sums of interleaved `(x, y, z)` records.
    pub fn sum_3d<T: Element>(&self, x: &[T]) -> Result<(T, T, T), TensorError> {
        aggregate_triplets(&Addition, Span::new(x))
    }

    /// Per-field means of interleaved `(x, y, z)` records.
    ///
    /// `Ok(None)` for an empty buffer, or when the record count does not fit in `T`.
    pub fn average_3d<T: Element>(&self, x: &[T]) -> Result<Option<(T, T, T)>, TensorError> {
        let (sum_x, sum_y, sum_z) = self.sum_3d(x)?;
        if x.is_empty() {
            return Ok(None);
        }
        Ok(<T as NumCast>::from(x.len() / 3)
            .map(|count| (sum_x / count, sum_y / count, sum_z / count)))
    }
}

// ============================================================================
// Free Functions (default engine)
// ============================================================================

/// `destination[i] = x[i] + y[i]`. See [`Engine::add`].
pub fn add<'a, T: Element>(
    x: &[T],
    y: impl Into<Operand<'a, T>>,
    destination: &mut [T],
) -> Result<(), TensorError> {
    Engine::default().add(x, y, destination)
}

/// `x[i] += y[i]`. See [`Engine::add_in_place`].
pub fn add_in_place<'a, T: Element>(
    x: &mut [T],
    y: impl Into<Operand<'a, T>>,
) -> Result<(), TensorError> {
    Engine::default().add_in_place(x, y)
}

/// `destination[i] = x[i] - y[i]`. See [`Engine::subtract`].
pub fn subtract<'a, T: Element>(
    x: &[T],
    y: impl Into<Operand<'a, T>>,
    destination: &mut [T],
) -> Result<(), TensorError> {
    Engine::default().subtract(x, y, destination)
}

/// `x[i] -= y[i]`. See [`Engine::subtract_in_place`].
pub fn subtract_in_place<'a, T: Element>(
    x: &mut [T],
    y: impl Into<Operand<'a, T>>,
) -> Result<(), TensorError> {
    Engine::default().subtract_in_place(x, y)
}

/// `destination[i] = x[i] * y[i]`. See [`Engine::multiply`].
pub fn multiply<'a, T: Element>(
    x: &[T],
    y: impl Into<Operand<'a, T>>,
    destination: &mut [T],
) -> Result<(), TensorError> {
    Engine::default().multiply(x, y, destination)
}

/// `x[i] *= y[i]`. See [`Engine::multiply_in_place`].
pub fn multiply_in_place<'a, T: Element>(
    x: &mut [T],
    y: impl Into<Operand<'a, T>>,
) -> Result<(), TensorError> {
    Engine::default().multiply_in_place(x, y)
}

/// `destination[i] = x[i] / y[i]`. See [`Engine::divide`].
pub fn divide<'a, T: Element>(
    x: &[T],
    y: impl Into<Operand<'a, T>>,
    destination: &mut [T],
) -> Result<(), TensorError> {
    Engine::default().divide(x, y, destination)
}

/// `x[i] /= y[i]`. See [`Engine::divide_in_place`].
pub fn divide_in_place<'a, T: Element>(
    x: &mut [T],
    y: impl Into<Operand<'a, T>>,
) -> Result<(), TensorError> {
    Engine::default().divide_in_place(x, y)
}

/// `destination[i] = -x[i]`. See [`Engine::negate`].
pub fn negate<T: Element + Neg<Output = T>>(
    x: &[T],
    destination: &mut [T],
) -> Result<(), TensorError> {
    Engine::default().negate(x, destination)
}

/// `x[i] = -x[i]`. See [`Engine::negate_in_place`].
pub fn negate_in_place<T: Element + Neg<Output = T>>(x: &mut [T]) -> Result<(), TensorError> {
    Engine::default().negate_in_place(x)
}

/// `destination[i] = x[i] * x[i]`. See [`Engine::square`].
pub fn square<T: Element>(x: &[T], destination: &mut [T]) -> Result<(), TensorError> {
    Engine::default().square(x, destination)
}

/// `x[i] = x[i] * x[i]`. See [`Engine::square_in_place`].
pub fn square_in_place<T: Element>(x: &mut [T]) -> Result<(), TensorError> {
    Engine::default().square_in_place(x)
}

/// `destination[i] = (x[i] + y[i]) * z[i]`. See [`Engine::add_multiply`].
pub fn add_multiply<'a, T: Element>(
    x: &[T],
    y: impl Into<Operand<'a, T>>,
    z: impl Into<Operand<'a, T>>,
    destination: &mut [T],
) -> Result<(), TensorError> {
    Engine::default().add_multiply(x, y, z, destination)
}

/// `x[i] = (x[i] + y[i]) * z[i]`. See [`Engine::add_multiply_in_place`].
pub fn add_multiply_in_place<'a, T: Element>(
    x: &mut [T],
    y: impl Into<Operand<'a, T>>,
    z: impl Into<Operand<'a, T>>,
) -> Result<(), TensorError> {
    Engine::default().add_multiply_in_place(x, y, z)
}

/// Sum of all elements. See [`Engine::sum`].
pub fn sum<T: Element>(x: &[T]) -> T {
    Engine::default().sum(x)
}

/// Product of all elements. See [`Engine::product`].
pub fn product<T: Element>(x: &[T]) -> T {
    Engine::default().product(x)
}

/// Smallest element. See [`Engine::min`].
pub fn min<T: Element>(x: &[T]) -> Option<T> {
    Engine::default().min(x)
}

/// Largest element. See [`Engine::max`].
pub fn max<T: Element>(x: &[T]) -> Option<T> {
    Engine::default().max(x)
}

/// Arithmetic mean of `x` on the default engine.
///
/// Returns `None` for an empty buffer, and also for a non-empty buffer whose
/// element count does not fit in `T`:
///
/// ```
/// use lanewise::prelude::*;
///
/// assert_eq!(average(&[2_i8, 4]), Some(3));
/// assert_eq!(average::<i8>(&[]), None);
/// // 200 does not fit in `i8`.
/// assert_eq!(average(&[1_i8; 200]), None);
/// ```
///
/// See [`Engine::average`].
pub fn average<T: Element>(x: &[T]) -> Option<T> {
    Engine::default().average(x)
}

/// Per-field sums of `(x, y)` records. See [`Engine::sum_2d`].
pub fn sum_2d<T: Element>(x: &[T]) -> Result<(T, T), TensorError> {
    Engine::default().sum_2d(x)
}

/// Per-field means of `(x, y)` records. See [`Engine::average_2d`].
pub fn average_2d<T: Element>(x: &[T]) -> Result<Option<(T, T)>, TensorError> {
    Engine::default().average_2d(x)
}

/// Per-field sums of `(x, y, z)` records. See [`Engine::sum_3d`].
pub fn sum_3d<T: Element>(x: &[T]) -> Result<(T, T, T), TensorError> {
    Engine::default().sum_3d(x)
}

/// Per-field means of `(x, y, z)` records. See [`Engine::average_3d`].
pub fn average_3d<T: Element>(x: &[T]) -> Result<Option<(T, T, T)>, TensorError> {
    Engine::default().average_3d(x)
}
