#![cfg(feature = "dev")]
//! Tests for the high-level API.
//!
//! These tests verify the derived numeric operations end to end:
//! - Elementwise operations with every operand kind
//! - In-place forms agree with destination-writing forms
//! - Reductions, averages, and record reductions
//! - Engine configuration through the builder
//!
//! ## Test Organization
//!
//! 1. **Elementwise Operations**
//! 2. **In-Place Operations**
//! 3. **Reductions**
//! 4. **Record Reductions**
//! 5. **Engine Configuration**

use approx::assert_relative_eq;

use lanewise::internals::api::*;
use lanewise::internals::primitives::interleave::{flatten_pairs, flatten_triplets};

// ============================================================================
// Elementwise Operation Tests
// ============================================================================

/// Test the reference addition scenarios.
#[test]
fn test_add_scenarios() {
    let x = [1.0_f64, 11.0];
    let mut out = [0.0_f64; 2];

    add(&x, 12.0_f64, &mut out).unwrap();
    assert_eq!(out, [13.0, 23.0]);

    add(&x, &[12.0, 13.0], &mut out).unwrap();
    assert_eq!(out, [13.0, 24.0]);
}

/// Test the reference fused add-multiply scenario.
#[test]
fn test_add_multiply_scenario() {
    let x = [0.0_f32, 1.0];
    let mut out = [0.0_f32; 2];

    add_multiply(&x, (24.0_f32, 25.0), &[2.0, 3.0], &mut out).unwrap();

    assert_eq!(out, [48.0, 78.0]);
}

/// Test subtraction, multiplication, and division with buffers.
#[test]
fn test_arithmetic_buffers() {
    let x: Vec<i32> = (1..=12).collect();
    let y: Vec<i32> = (1..=12).rev().collect();
    let mut out = vec![0_i32; 12];

    subtract(&x, &y, &mut out).unwrap();
    assert_eq!(out[0], -11);
    assert_eq!(out[11], 11);

    multiply(&x, &y, &mut out).unwrap();
    assert_eq!(out[0], 12);
    assert_eq!(out[5], 6 * 7);

    divide(&x, 2_i32, &mut out).unwrap();
    assert_eq!(out, vec![0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6]);
}

/// Test negation and squaring.
#[test]
fn test_negate_square() {
    let x = [1.5_f64, -2.0, 0.0, 3.0, 4.0];
    let mut out = [0.0_f64; 5];

    negate(&x, &mut out).unwrap();
    assert_eq!(out, [-1.5, 2.0, -0.0, -3.0, -4.0]);

    square(&x, &mut out).unwrap();
    assert_eq!(out, [2.25, 4.0, 0.0, 9.0, 16.0]);
}

/// Test triplet broadcast on three-field records.
#[test]
fn test_add_triplets() {
    let points = [[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let mut out = [0.0_f64; 6];

    add(flatten_triplets(&points), (10.0_f64, 20.0, 30.0), &mut out).unwrap();

    assert_eq!(out, [11.0, 22.0, 33.0, 14.0, 25.0, 36.0]);
}

/// Test that argument errors surface from the API.
#[test]
fn test_api_errors() {
    let x = [1_u16, 2, 3];
    let mut out = [0_u16; 3];

    assert_eq!(
        add(&x, &[1, 2], &mut out),
        Err(TensorError::ArgumentLength {
            operand: "y",
            expected: 3,
            got: 2
        })
    );
    assert_eq!(
        multiply(&x, (1_u16, 2), &mut out),
        Err(TensorError::ArgumentShape { len: 3, stride: 2 })
    );
    assert_eq!(out, [0, 0, 0]);
}

/// Test that integer overflow wraps whatever the buffer length.
#[test]
fn test_integer_overflow_wraps() {
    // 16 elements run entirely on lanes, 20 add a scalar tail.
    for len in [3, 16, 20] {
        let x = vec![200_u8; len];
        let mut out = vec![0_u8; len];

        add(&x, 100_u8, &mut out).unwrap();
        assert_eq!(out, vec![44_u8; len]);

        add_multiply(&x, 100_u8, 2_u8, &mut out).unwrap();
        assert_eq!(out, vec![88_u8; len]);
    }

    assert_eq!(sum(&[200_u8, 100]), 44);
    assert_eq!(product(&[i16::MAX, 2]), -2);

    let mut out = [0_i32; 1];
    negate(&[i32::MIN], &mut out).unwrap();
    assert_eq!(out, [i32::MIN]);
}

// ============================================================================
// In-Place Operation Tests
// ============================================================================

/// Test that every in-place form matches its destination-writing form.
#[test]
fn test_in_place_equivalence() {
    let x: Vec<f32> = (0..29).map(|i| i as f32 - 10.0).collect();
    let y: Vec<f32> = (0..29).map(|i| (i % 5) as f32 + 1.0).collect();
    let mut expected = vec![0.0_f32; 29];

    add(&x, &y, &mut expected).unwrap();
    let mut actual = x.clone();
    add_in_place(&mut actual, &y).unwrap();
    assert_eq!(actual, expected);

    subtract(&x, 2.0_f32, &mut expected).unwrap();
    let mut actual = x.clone();
    subtract_in_place(&mut actual, 2.0_f32).unwrap();
    assert_eq!(actual, expected);

    multiply(&x, &y, &mut expected).unwrap();
    let mut actual = x.clone();
    multiply_in_place(&mut actual, &y).unwrap();
    assert_eq!(actual, expected);

    divide(&x, &y, &mut expected).unwrap();
    let mut actual = x.clone();
    divide_in_place(&mut actual, &y).unwrap();
    assert_eq!(actual, expected);

    negate(&x, &mut expected).unwrap();
    let mut actual = x.clone();
    negate_in_place(&mut actual).unwrap();
    assert_eq!(actual, expected);

    square(&x, &mut expected).unwrap();
    let mut actual = x.clone();
    square_in_place(&mut actual).unwrap();
    assert_eq!(actual, expected);
}

/// Test in-place fused add-multiply on interleaved pairs.
#[test]
fn test_add_multiply_in_place() {
    let mut x: Vec<i32> = (0..18).collect();

    add_multiply_in_place(&mut x, 1_i32, (1_i32, 2)).unwrap();

    for (i, &v) in x.iter().enumerate() {
        let factor = if i % 2 == 0 { 1 } else { 2 };
        assert_eq!(v, (i as i32 + 1) * factor);
    }
}

// ============================================================================
// Reduction Tests
// ============================================================================

/// Test the reference sum scenarios.
#[test]
fn test_sum_scenarios() {
    let empty: [f64; 0] = [];
    assert_eq!(sum(&empty), 0.0);
    assert_eq!(sum(&[1_i32, 11]), 12);
    assert_eq!(sum(&vec![1.0_f64; 1000]), 1000.0);
}

/// Test the reference average scenarios.
#[test]
fn test_average_scenarios() {
    let empty: [f64; 0] = [];
    assert_eq!(average(&empty), None);
    assert_eq!(average(&[1.0_f64, 2.0]), Some(1.5));
}

/// Test that integer averages use integer division.
#[test]
fn test_average_integer() {
    assert_eq!(average(&[1_i32, 2]), Some(1));
    assert_eq!(average(&[10_u8, 20, 30]), Some(20));
}

/// Test that an element count not representable in `T` gives `None`.
#[test]
fn test_average_count_overflow() {
    let zeros = vec![0_i8; 200];
    assert!(!zeros.is_empty());
    assert_eq!(average(&zeros), None);
    assert_eq!(average(&zeros[..127]), Some(0));

    let pairs = vec![0_i8; 400];
    assert_eq!(average_2d(&pairs), Ok(None));
}

/// Test product, min, and max.
#[test]
fn test_product_min_max() {
    let x = [2.0_f64, -3.0, 0.5, 4.0, 1.0];

    assert_relative_eq!(product(&x), -12.0);
    assert_eq!(min(&x), Some(-3.0));
    assert_eq!(max(&x), Some(4.0));

    let empty: [u32; 0] = [];
    assert_eq!(product(&empty), 1);
    assert_eq!(min(&empty), None);
    assert_eq!(max(&empty), None);
}

// ============================================================================
// Record Reduction Tests
// ============================================================================

/// Test per-field sums and averages of pairs.
#[test]
fn test_sum_average_2d() {
    let points = [[1.0_f64, 10.0], [2.0, 20.0], [3.0, 30.0], [6.0, 60.0]];
    let flat = flatten_pairs(&points);

    assert_eq!(sum_2d(flat), Ok((12.0, 120.0)));
    assert_eq!(average_2d(flat), Ok(Some((3.0, 30.0))));

    let empty: [f64; 0] = [];
    assert_eq!(average_2d(&empty), Ok(None));
    assert_eq!(
        average_2d(&[1.0_f64, 2.0, 3.0]),
        Err(TensorError::ArgumentShape { len: 3, stride: 2 })
    );
}

/// Test per-field sums and averages of triplets.
#[test]
fn test_sum_average_3d() {
    let points = [[1_i32, 2, 3], [3, 4, 5]];
    let flat = flatten_triplets(&points);

    assert_eq!(sum_3d(flat), Ok((4, 6, 8)));
    assert_eq!(average_3d(flat), Ok(Some((2, 3, 4))));

    let empty: [i32; 0] = [];
    assert_eq!(average_3d(&empty), Ok(None));
    assert!(sum_3d(&[1_i32, 2]).is_err());
}

// ============================================================================
// Engine Configuration Tests
// ============================================================================

/// Test default and explicit dispatch configuration.
#[test]
fn test_engine_builder() {
    assert_eq!(Engine::new().dispatch(), Dispatch::Auto);

    let engine = Engine::builder().dispatch(Dispatch::Scalar).build().unwrap();
    assert_eq!(engine.dispatch(), Dispatch::Scalar);

    let engine = Engine::builder().build().unwrap();
    assert_eq!(engine, Engine::default());
}

/// Test that setting a parameter twice is rejected.
#[test]
fn test_engine_builder_duplicate() {
    let result = Engine::builder()
        .dispatch(Dispatch::Auto)
        .dispatch(Dispatch::Scalar)
        .build();

    assert_eq!(
        result,
        Err(TensorError::DuplicateParameter {
            parameter: "dispatch"
        })
    );
}

/// Test that a scalar-dispatch engine gives the same results.
#[test]
fn test_engine_scalar_matches_auto() {
    let scalar = Engine::builder().dispatch(Dispatch::Scalar).build().unwrap();
    let auto = Engine::new();

    let x: Vec<u8> = (0..50).map(|i| i % 4).collect();
    let mut a = vec![0_u8; 50];
    let mut b = vec![0_u8; 50];

    auto.add_multiply(&x, 1_u8, (2_u8, 3), &mut a).unwrap();
    scalar.add_multiply(&x, 1_u8, (2_u8, 3), &mut b).unwrap();

    assert_eq!(a, b);
    assert_eq!(auto.sum(&x), scalar.sum(&x));
    assert_eq!(auto.max(&x), Some(3));
    assert_eq!(scalar.min(&x), Some(0));
}
