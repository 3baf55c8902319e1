//! Argument validation for engine calls.
//!
//! ## Purpose
//!
//! This module checks the preconditions of every apply and aggregate call:
//! operand lengths, interleaving shape, and destination aliasing.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Validate-then-mutate**: Engines run every check before the first write, so a
//!   rejected call leaves the destination untouched.
//! * **Efficiency**: Checks are O(1) per operand.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not inspect element values (NaN, ranges).

// External dependencies
use log::debug;

// Internal dependencies
use crate::primitives::errors::TensorError;
use crate::primitives::operand::Operand;
use crate::primitives::view::{overlaps, Span, SpanMut};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for engine arguments.
///
/// Provides associated functions that return `Result<(), TensorError>` and
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Length Validation
    // ========================================================================

    /// Validate that a full-buffer operand has exactly `expected` elements.
    pub fn validate_length(
        operand: &'static str,
        expected: usize,
        got: usize,
    ) -> Result<(), TensorError> {
        if got != expected {
            debug!("rejecting call: operand '{operand}' has {got} elements, expected {expected}");
            return Err(TensorError::ArgumentLength {
                operand,
                expected,
                got,
            });
        }
        Ok(())
    }

    /// Validate that the destination can hold `required` elements.
    pub fn validate_destination(required: usize, got: usize) -> Result<(), TensorError> {
        if got < required {
            debug!("rejecting call: destination has {got} elements, need {required}");
            return Err(TensorError::ArgumentLength {
                operand: "destination",
                expected: required,
                got,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate that `len` is a multiple of the interleaving `stride`.
    pub fn validate_stride(len: usize, stride: usize) -> Result<(), TensorError> {
        if stride > 1 && len % stride != 0 {
            debug!("rejecting call: length {len} is not a multiple of {stride}");
            return Err(TensorError::ArgumentShape { len, stride });
        }
        Ok(())
    }

    // ========================================================================
    // Alias Validation
    // ========================================================================

    /// Validate that `source` is either the destination itself or disjoint from it.
    pub fn validate_no_alias<T>(
        operand: &'static str,
        source: Span<'_, T>,
        destination: &SpanMut<'_, T>,
    ) -> Result<(), TensorError> {
        if overlaps(source, destination.as_source()) {
            debug!("rejecting call: destination overlaps operand '{operand}'");
            return Err(TensorError::ArgumentAlias { operand });
        }
        Ok(())
    }

    // ========================================================================
    // Operand Validation
    // ========================================================================

    /// Validate the length and shape of an operand against a source of `len` elements.
    pub fn validate_operand<T>(
        name: &'static str,
        operand: &Operand<'_, T>,
        len: usize,
    ) -> Result<(), TensorError> {
        match operand {
            Operand::Buffer(span) => Self::validate_length(name, len, span.len()),
            _ => Self::validate_stride(len, operand.stride()),
        }
    }

    /// Validate that a buffer operand does not illegally overlap the destination.
    pub fn validate_operand_alias<T>(
        name: &'static str,
        operand: &Operand<'_, T>,
        destination: &SpanMut<'_, T>,
    ) -> Result<(), TensorError> {
        match operand.as_span() {
            Some(span) => Self::validate_no_alias(name, span, destination),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), TensorError> {
        if let Some(param) = duplicate_param {
            return Err(TensorError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
