//! Error types for lane-batched tensor operations.
//!
//! ## Purpose
//!
//! This module defines the precondition failures that can be reported by the
//! apply and aggregate engines and by the engine builder.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending operand name and the lengths involved.
//! * **Allocation-free**: No variant owns heap data, so the type works in `no_std`
//!   without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Length**: An operand or destination has the wrong number of elements.
//! 2. **Alias**: The destination overlaps an input without being the same buffer.
//! 3. **Shape**: A length is not a multiple of the interleaving stride.
//!
//! ## Invariants
//!
//! * Every error is raised before the destination is written.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Domain range checks (e.g. trigonometric inputs) belong to callers.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for tensor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TensorError {
    /// An operand or the destination does not have the required length.
    ArgumentLength {
        /// Name of the offending operand (e.g. `"y"`, `"destination"`).
        operand: &'static str,
        /// Required number of elements (a minimum for the destination).
        expected: usize,
        /// Number of elements provided.
        got: usize,
    },

    /// The destination overlaps an input buffer without being the same buffer.
    ArgumentAlias {
        /// Name of the input that overlaps the destination.
        operand: &'static str,
    },

    /// The buffer length is not a multiple of the interleaving stride.
    ArgumentShape {
        /// Number of elements provided.
        len: usize,
        /// Required stride (2 for pairs, 3 for triplets).
        stride: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TensorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ArgumentLength {
                operand,
                expected,
                got,
            } => {
                if *operand == "destination" {
                    write!(
                        f,
                        "Length mismatch: destination has {got} elements, need at least {expected}"
                    )
                } else {
                    write!(
                        f,
                        "Length mismatch: operand '{operand}' has {got} elements, expected {expected}"
                    )
                }
            }
            Self::ArgumentAlias { operand } => {
                write!(
                    f,
                    "Destination overlaps operand '{operand}' without being the same buffer"
                )
            }
            Self::ArgumentShape { len, stride } => {
                write!(f, "Invalid shape: length {len} is not a multiple of {stride}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for TensorError {}
