#![cfg(feature = "dev")]
//! Property tests for lane/scalar equivalence.
//!
//! These tests verify, over lengths 0..200:
//! - Every elementwise operation gives the same result under `Auto` and
//!   forced `Scalar` dispatch, for accelerated and unaccelerated types
//! - Integer operations agree bit for bit over the full value range,
//!   including inputs that overflow and wrap
//! - Reductions, including per-field pair sums, agree across dispatch policies
//! - Sums are additive over concatenation
//!
//! Float inputs are small integer values, so float sums are exact in any
//! association order.

use core::fmt::Debug;
use core::ops::Neg;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use lanewise::internals::api::{Dispatch, Engine};
use lanewise::internals::primitives::element::Element;
use lanewise::internals::primitives::operand::Operand;

fn engines() -> (Engine, Engine) {
    let scalar = Engine::builder()
        .dispatch(Dispatch::Scalar)
        .build()
        .unwrap();
    (Engine::new(), scalar)
}

/// Two equal-length buffers of small integers.
fn int_pair(max: i32) -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    (0usize..200).prop_flat_map(move |n| {
        (
            prop::collection::vec(-max..=max, n),
            prop::collection::vec(-max..=max, n),
        )
    })
}

/// Two equal-length buffers over the full range of `T`.
fn full_range_pair<T>() -> impl Strategy<Value = (Vec<T>, Vec<T>)>
where
    T: Arbitrary + Debug + 'static,
{
    (0usize..200).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<T>(), n),
            prop::collection::vec(any::<T>(), n),
        )
    })
}

/// An even-length buffer of small integer-valued floats.
fn even_f32() -> impl Strategy<Value = Vec<f32>> {
    (0usize..100).prop_flat_map(|pairs| {
        prop::collection::vec((-50i16..=50).prop_map(f32::from), pairs * 2)
    })
}

/// Elementwise operations and reductions agree under both dispatch policies.
fn check_integer_dispatch<T: Element>(x: &[T], y: &[T], s: T) -> Result<(), TestCaseError> {
    let (auto, scalar) = engines();
    let mut a = vec![T::zero(); x.len()];
    let mut b = vec![T::zero(); x.len()];

    auto.add(x, y, &mut a).unwrap();
    scalar.add(x, y, &mut b).unwrap();
    prop_assert_eq!(&a, &b);

    auto.subtract(x, Operand::Scalar(s), &mut a).unwrap();
    scalar.subtract(x, Operand::Scalar(s), &mut b).unwrap();
    prop_assert_eq!(&a, &b);

    auto.multiply(x, y, &mut a).unwrap();
    scalar.multiply(x, y, &mut b).unwrap();
    prop_assert_eq!(&a, &b);

    auto.square(x, &mut a).unwrap();
    scalar.square(x, &mut b).unwrap();
    prop_assert_eq!(&a, &b);

    auto.add_multiply(x, Operand::Scalar(s), y, &mut a).unwrap();
    scalar.add_multiply(x, Operand::Scalar(s), y, &mut b).unwrap();
    prop_assert_eq!(&a, &b);

    prop_assert_eq!(auto.sum(x), scalar.sum(x));
    prop_assert_eq!(auto.product(x), scalar.product(x));
    prop_assert_eq!(auto.min(x), scalar.min(x));
    prop_assert_eq!(auto.max(x), scalar.max(x));

    let even = &x[..x.len() - x.len() % 2];
    prop_assert_eq!(auto.sum_2d(even), scalar.sum_2d(even));

    let mut c = vec![T::zero(); even.len()];
    let mut d = vec![T::zero(); even.len()];
    auto.multiply(even, (s, T::one()), &mut c).unwrap();
    scalar.multiply(even, (s, T::one()), &mut d).unwrap();
    prop_assert_eq!(&c, &d);

    Ok(())
}

/// Negation agrees under both dispatch policies, including at `MIN`.
fn check_negate_dispatch<T>(x: &[T]) -> Result<(), TestCaseError>
where
    T: Element + Neg<Output = T>,
{
    let (auto, scalar) = engines();
    let mut a = vec![T::zero(); x.len()];
    let mut b = vec![T::zero(); x.len()];

    auto.negate(x, &mut a).unwrap();
    scalar.negate(x, &mut b).unwrap();
    prop_assert_eq!(&a, &b);

    let mut edge = x.to_vec();
    edge.push(T::lowest());
    let mut c = vec![T::zero(); edge.len()];
    let mut d = vec![T::zero(); edge.len()];
    auto.negate(&edge, &mut c).unwrap();
    scalar.negate(&edge, &mut d).unwrap();
    prop_assert_eq!(&c, &d);
    prop_assert_eq!(c[edge.len() - 1], T::lowest());

    Ok(())
}

proptest! {
    #[test]
    fn prop_i8_full_range_dispatch_agree((x, y) in full_range_pair::<i8>(), s in any::<i8>()) {
        check_integer_dispatch(&x, &y, s)?;
        check_negate_dispatch(&x)?;
    }

    #[test]
    fn prop_i16_full_range_dispatch_agree((x, y) in full_range_pair::<i16>(), s in any::<i16>()) {
        check_integer_dispatch(&x, &y, s)?;
        check_negate_dispatch(&x)?;
    }

    #[test]
    fn prop_i32_full_range_dispatch_agree((x, y) in full_range_pair::<i32>(), s in any::<i32>()) {
        check_integer_dispatch(&x, &y, s)?;
        check_negate_dispatch(&x)?;
    }

    #[test]
    fn prop_i64_full_range_dispatch_agree((x, y) in full_range_pair::<i64>(), s in any::<i64>()) {
        check_integer_dispatch(&x, &y, s)?;
        check_negate_dispatch(&x)?;
    }

    #[test]
    fn prop_u8_full_range_dispatch_agree((x, y) in full_range_pair::<u8>(), s in any::<u8>()) {
        check_integer_dispatch(&x, &y, s)?;
    }

    #[test]
    fn prop_u16_full_range_dispatch_agree((x, y) in full_range_pair::<u16>(), s in any::<u16>()) {
        check_integer_dispatch(&x, &y, s)?;
    }

    #[test]
    fn prop_u32_full_range_dispatch_agree((x, y) in full_range_pair::<u32>(), s in any::<u32>()) {
        check_integer_dispatch(&x, &y, s)?;
    }

    #[test]
    fn prop_u64_full_range_dispatch_agree((x, y) in full_range_pair::<u64>(), s in any::<u64>()) {
        check_integer_dispatch(&x, &y, s)?;
    }

    #[test]
    fn prop_i32_add_matches_wrapping_loop((x, y) in full_range_pair::<i32>()) {
        let mut out = vec![0_i32; x.len()];
        Engine::new().add(&x, &y, &mut out).unwrap();

        let expected: Vec<i32> = x.iter().zip(&y).map(|(a, b)| a.wrapping_add(*b)).collect();
        prop_assert_eq!(&out, &expected);

        let total = x.iter().fold(0_i32, |acc, v| acc.wrapping_add(*v));
        prop_assert_eq!(Engine::new().sum(&x), total);
    }

    #[test]
    fn prop_add_multiply_f32_dispatch_agree(x in even_f32(), p in -8i16..8, q in -8i16..8) {
        let (auto, scalar) = engines();
        let (p, q) = (f32::from(p), f32::from(q));
        let mut a = vec![0.0_f32; x.len()];
        let mut b = vec![0.0_f32; x.len()];

        auto.add_multiply(&x, (p, q), 3.0_f32, &mut a).unwrap();
        scalar.add_multiply(&x, (p, q), 3.0_f32, &mut b).unwrap();
        prop_assert_eq!(&a, &b);

        auto.negate(&x, &mut a).unwrap();
        scalar.negate(&x, &mut b).unwrap();
        prop_assert_eq!(&a, &b);
    }

    #[test]
    fn prop_divide_f64_dispatch_agree(
        x in prop::collection::vec(-1.0e6f64..1.0e6, 0..200),
        d in 0.5f64..100.0,
    ) {
        let (auto, scalar) = engines();
        let mut a = vec![0.0_f64; x.len()];
        let mut b = vec![0.0_f64; x.len()];

        auto.divide(&x, d, &mut a).unwrap();
        scalar.divide(&x, d, &mut b).unwrap();
        prop_assert_eq!(&a, &b);

        auto.square(&x, &mut a).unwrap();
        scalar.square(&x, &mut b).unwrap();
        prop_assert_eq!(&a, &b);
    }

    #[test]
    fn prop_u64_matches_plain_loop(x in prop::collection::vec(0u64..1_000_000, 0..200)) {
        let engine = Engine::new();
        let mut out = vec![0_u64; x.len()];

        engine.add(&x, 7_u64, &mut out).unwrap();
        let expected: Vec<u64> = x.iter().map(|v| v + 7).collect();
        prop_assert_eq!(&out, &expected);
        prop_assert_eq!(engine.sum(&x), x.iter().sum::<u64>());
    }

    #[test]
    fn prop_sum_dispatch_agree(x in even_f32()) {
        let (auto, scalar) = engines();

        prop_assert_eq!(auto.sum(&x), scalar.sum(&x));
        prop_assert_eq!(auto.sum_2d(&x), scalar.sum_2d(&x));
        prop_assert_eq!(auto.average_2d(&x), scalar.average_2d(&x));
    }

    #[test]
    fn prop_sum_concatenation((x, y) in int_pair(10_000)) {
        let engine = Engine::new();
        let mut joined = x.clone();
        joined.extend_from_slice(&y);

        prop_assert_eq!(engine.sum(&joined), engine.sum(&x) + engine.sum(&y));
    }

    #[test]
    fn prop_in_place_matches_destination((x, y) in int_pair(1000)) {
        let engine = Engine::new();
        let mut expected = vec![0_i32; x.len()];
        engine.add_multiply(&x, &y, 2_i32, &mut expected).unwrap();

        let mut actual = x.clone();
        engine.add_multiply_in_place(&mut actual, &y, 2_i32).unwrap();
        prop_assert_eq!(&actual, &expected);
    }
}
