#![cfg(feature = "dev")]
//! Tests for interleaved record reinterpretation.
//!
//! These tests verify:
//! - Record arrays flatten to field-major interleaved buffers
//! - Flat buffers reinterpret back to records when the length allows
//! - Mutable flattening writes through to the records
//!
//! ## Test Organization
//!
//! 1. **Flattening** - Pairs and triplets
//! 2. **Record Views** - Shape validation

use lanewise::internals::primitives::errors::TensorError;
use lanewise::internals::primitives::interleave::{
    as_pairs, as_triplets, flatten_pairs, flatten_pairs_mut, flatten_triplets,
    flatten_triplets_mut,
};

// ============================================================================
// Flattening Tests
// ============================================================================

/// Test that pairs flatten in record order.
#[test]
fn test_flatten_pairs() {
    let points = [[1.0_f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
    let flat = flatten_pairs(&points);

    assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(flat.as_ptr() as *const [f64; 2], points.as_ptr());
}

/// Test that triplets flatten in record order.
#[test]
fn test_flatten_triplets() {
    let points = [[1_i32, 2, 3], [4, 5, 6]];
    assert_eq!(flatten_triplets(&points), &[1, 2, 3, 4, 5, 6]);
}

/// Test that writes through a flattened view land in the records.
#[test]
fn test_flatten_mut_write_through() {
    let mut pairs = [[0_u8; 2]; 2];
    flatten_pairs_mut(&mut pairs)[3] = 9;
    assert_eq!(pairs, [[0, 0], [0, 9]]);

    let mut triplets = [[0.0_f32; 3]; 2];
    flatten_triplets_mut(&mut triplets)[4] = 1.5;
    assert_eq!(triplets[1], [0.0, 1.5, 0.0]);
}

/// Test flattening empty record arrays.
#[test]
fn test_flatten_empty() {
    let none: [[f64; 2]; 0] = [];
    assert!(flatten_pairs(&none).is_empty());
}

// ============================================================================
// Record View Tests
// ============================================================================

/// Test reinterpreting flat buffers as records.
#[test]
fn test_as_records() {
    let flat = [1_i16, 2, 3, 4, 5, 6];

    assert_eq!(as_pairs(&flat).unwrap(), &[[1, 2], [3, 4], [5, 6]]);
    assert_eq!(as_triplets(&flat).unwrap(), &[[1, 2, 3], [4, 5, 6]]);
}

/// Test that ragged buffers are rejected with a shape error.
#[test]
fn test_as_records_ragged() {
    let flat = [1.0_f32, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(
        as_pairs(&flat).unwrap_err(),
        TensorError::ArgumentShape { len: 5, stride: 2 }
    );
    assert_eq!(
        as_triplets(&flat).unwrap_err(),
        TensorError::ArgumentShape { len: 5, stride: 3 }
    );
}
