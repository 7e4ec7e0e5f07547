// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;

use proptest::prelude::*;

use crate::{ClampedU8, CoercionError, Lane, LaneKind, Value};

// =============================================================================
// LaneKind
// =============================================================================

#[test]
fn test_kind_metadata_matches_width() {
    assert_eq!(<i8 as Lane>::KIND, LaneKind::Int8);
    assert_eq!(<ClampedU8 as Lane>::KIND, LaneKind::Uint8Clamped);
    assert_eq!(<u64 as Lane>::KIND, LaneKind::BigUint64);

    assert_eq!(<i8 as Lane>::BYTES_PER_ELEMENT, 1);
    assert_eq!(<ClampedU8 as Lane>::BYTES_PER_ELEMENT, 1);
    assert_eq!(<u16 as Lane>::BYTES_PER_ELEMENT, 2);
    assert_eq!(<f32 as Lane>::BYTES_PER_ELEMENT, 4);
    assert_eq!(<f64 as Lane>::BYTES_PER_ELEMENT, 8);
    assert_eq!(<i64 as Lane>::BYTES_PER_ELEMENT, 8);

    for kind in [
        LaneKind::Int8,
        LaneKind::Uint8Clamped,
        LaneKind::Float32,
        LaneKind::BigInt64,
    ] {
        assert_eq!(kind.vec_tag(), format!("{}Vec", kind.name()));
    }

    assert_eq!(LaneKind::Int32.bytes_per_element(), 4);
    assert!(LaneKind::BigInt64.is_big_int());
    assert!(!LaneKind::Float64.is_big_int());
    assert_eq!(LaneKind::Uint16.to_string(), "Uint16");
}

// =============================================================================
// from_value() - integer lanes
// =============================================================================

#[test]
fn test_integer_lanes_wrap() {
    assert_eq!(u8::from_value(&Value::Number(256.0)), Ok(0));
    assert_eq!(u8::from_value(&Value::Number(-1.0)), Ok(255));
    assert_eq!(i8::from_value(&Value::Number(128.0)), Ok(-128));
    assert_eq!(i16::from_value(&Value::Number(32768.0)), Ok(-32768));
    assert_eq!(u32::from_value(&Value::Number(-1.0)), Ok(u32::MAX));
    assert_eq!(i32::from_value(&Value::Number(2147483648.0)), Ok(i32::MIN));
}

#[test]
fn test_integer_lanes_truncate_toward_zero() {
    assert_eq!(i32::from_value(&Value::Number(3.9)), Ok(3));
    assert_eq!(i32::from_value(&Value::Number(-3.9)), Ok(-3));
}

#[test]
fn test_integer_lanes_non_finite_is_zero() {
    assert_eq!(i32::from_value(&Value::Number(f64::NAN)), Ok(0));
    assert_eq!(u16::from_value(&Value::Number(f64::INFINITY)), Ok(0));
    assert_eq!(i8::from_value(&Value::Undefined), Ok(0));
}

#[test]
fn test_number_lanes_reject_big_int() {
    assert_eq!(
        i32::from_value(&Value::BigInt(1)),
        Err(CoercionError::BigIntToNumber)
    );
    assert_eq!(
        ClampedU8::from_value(&Value::BigInt(1)),
        Err(CoercionError::BigIntToNumber)
    );
}

#[test]
fn test_number_lanes_accept_other_values() {
    assert_eq!(u8::from_value(&Value::Bool(true)), Ok(1));
    assert_eq!(u8::from_value(&Value::Null), Ok(0));
    assert_eq!(u8::from_value(&Value::from("12")), Ok(12));
}

// =============================================================================
// from_value() - float lanes
// =============================================================================

#[test]
fn test_float_lanes() {
    assert_eq!(f64::from_value(&Value::Number(0.1)), Ok(0.1));
    assert_eq!(f32::from_value(&Value::Number(0.1)), Ok(0.1f32));
    assert!(f32::from_value(&Value::Undefined).expect("nan").is_nan());
    assert_eq!(f32::from_value(&Value::Number(1e300)), Ok(f32::INFINITY));
}

// =============================================================================
// from_value() - big-integer lanes
// =============================================================================

#[test]
fn test_big_int_lanes_wrap() {
    let two_pow_64 = 1i128 << 64;

    assert_eq!(i64::from_value(&Value::BigInt(two_pow_64)), Ok(0));
    assert_eq!(
        i64::from_value(&Value::BigInt(i128::from(i64::MAX) + 1)),
        Ok(i64::MIN)
    );
    assert_eq!(u64::from_value(&Value::BigInt(two_pow_64 + 5)), Ok(5));
    assert_eq!(u64::from_value(&Value::from("-2")), Ok(u64::MAX - 1));
}

#[test]
fn test_big_int_lanes_reject_numbers() {
    assert!(matches!(
        i64::from_value(&Value::Number(1.0)),
        Err(CoercionError::NotBigInt { .. })
    ));
    assert!(matches!(
        u64::from_value(&Value::Null),
        Err(CoercionError::NotBigInt { .. })
    ));
}

// =============================================================================
// into_value()
// =============================================================================

#[test]
fn test_into_value() {
    assert_eq!((-3i8).into_value(), Value::Number(-3.0));
    assert_eq!(ClampedU8(9).into_value(), Value::Number(9.0));
    assert_eq!(1.5f32.into_value(), Value::Number(1.5));
    assert_eq!(u64::MAX.into_value(), Value::BigInt(i128::from(u64::MAX)));
}

// =============================================================================
// same_value_zero() / lane_cmp() / render()
// =============================================================================

#[test]
fn test_same_value_zero() {
    assert!(f64::NAN.same_value_zero(&f64::NAN));
    assert!((-0.0f64).same_value_zero(&0.0));
    assert!(!1.0f32.same_value_zero(&2.0));
    assert!(5u8.same_value_zero(&5));
}

#[test]
fn test_lane_cmp_orders_floats() {
    let mut values = vec![f64::NAN, 3.0, 0.0, -0.0, f64::NEG_INFINITY, 1.0];
    values.sort_by(|a, b| a.lane_cmp(b));

    assert_eq!(values[0], f64::NEG_INFINITY);
    assert!(values[1] == 0.0 && values[1].is_sign_negative());
    assert!(values[2] == 0.0 && values[2].is_sign_positive());
    assert_eq!(&values[3..5], &[1.0, 3.0]);
    assert!(values[5].is_nan());

    assert_eq!(f32::NAN.lane_cmp(&f32::NAN), Ordering::Equal);
}

#[test]
fn test_render() {
    assert_eq!(1.0f64.render(), "1");
    assert_eq!((-0.0f64).render(), "0");
    assert_eq!(f64::NAN.render(), "NaN");
    assert_eq!(0.5f32.render(), "0.5");
    assert_eq!((-12i32).render(), "-12");
    assert_eq!(u64::MAX.render(), "18446744073709551615");
}

// =============================================================================
// proptest
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_lanes_agree_with_wrapping_casts(n in -1e12f64..1e12f64) {
        let truncated = n.trunc() as i64;

        prop_assert_eq!(i8::from_value(&Value::Number(n)), Ok(truncated as i8));
        prop_assert_eq!(u8::from_value(&Value::Number(n)), Ok(truncated as u8));
        prop_assert_eq!(i16::from_value(&Value::Number(n)), Ok(truncated as i16));
        prop_assert_eq!(u16::from_value(&Value::Number(n)), Ok(truncated as u16));
        prop_assert_eq!(i32::from_value(&Value::Number(n)), Ok(truncated as i32));
        prop_assert_eq!(u32::from_value(&Value::Number(n)), Ok(truncated as u32));
    }

    #[test]
    fn prop_native_values_roundtrip_through_value(x in any::<i32>()) {
        prop_assert_eq!(i32::from_value(&x.into_value()), Ok(x));
    }

    #[test]
    fn prop_big_int_lane_wraps(x in any::<i128>()) {
        prop_assert_eq!(i64::from_value(&Value::BigInt(x)), Ok(x as i64));
        prop_assert_eq!(u64::from_value(&Value::BigInt(x)), Ok(x as u64));
    }
}
