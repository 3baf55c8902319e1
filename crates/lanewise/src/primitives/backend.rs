//! Dispatch policy for lane-batched execution.
//!
//! ## Purpose
//!
//! This module defines the `Dispatch` enum used to choose, per engine, whether
//! the vectorized lane paths may run or every call must use the scalar loop.
//!
//! ## Design notes
//!
//! * **Hint, not guarantee**: `Auto` only enables lanes; an element type without
//!   acceleration, a short buffer, or an incompatible tuple stride still falls
//!   back to the scalar loop.
//! * **Testing aid**: `Scalar` gives a reference path to compare lane results against.
//!
//! ## Invariants
//!
//! * The default dispatch is always `Auto`.
//!
//! ## Non-goals
//!
//! * This module does not detect CPU features at runtime; lane widths are fixed by
//!   the `wide` types selected for each element.

// Internal dependencies
use crate::primitives::element::Element;
use crate::primitives::lane::Lane;

/// Execution dispatch policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch {
    /// Use lanes whenever the element type is accelerated.
    #[default]
    Auto,

    /// Always use the scalar loop.
    Scalar,
}

impl Dispatch {
    /// Whether lane paths may run for element type `T` under this policy.
    #[inline]
    pub fn allows_lanes<T: Element>(self) -> bool {
        self == Dispatch::Auto && T::ACCELERATED
    }

    /// Effective batch width for `T`: the lane width, or 1 when lanes are disabled.
    #[inline]
    pub fn lane_width<T: Element>(self) -> usize {
        if self.allows_lanes::<T>() {
            <T::Lane as Lane<T>>::WIDTH
        } else {
            1
        }
    }
}
