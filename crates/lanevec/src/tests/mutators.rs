// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lanevec_lane::{CoercionError, Value};

use crate::{BigUint64Vec, Float64Vec, Int32Vec, VecError};

fn big_int_error() -> VecError {
    VecError::Coercion(CoercionError::BigIntToNumber)
}

// =============================================================================
// push()
// =============================================================================

#[test]
fn test_push_returns_new_length() {
    let mut vec = Int32Vec::new();

    assert_eq!(vec.push(&[1, 2]), Ok(2));
    assert_eq!(vec.push(&[3]), Ok(3));
    assert_eq!(vec.as_slice(), [1, 2, 3]);
}

#[test]
fn test_push_nothing_keeps_capacity() {
    let mut vec = Int32Vec::of(&[1]);

    assert_eq!(vec.push::<i32>(&[]), Ok(1));
    assert_eq!(vec.capacity(), 1);
}

#[test]
fn test_push_dynamic_values() {
    let mut vec = BigUint64Vec::new();

    vec.push(&[Value::BigInt(-1), Value::from("0x10"), Value::Bool(true)])
        .expect("Failed to push");

    assert_eq!(vec.as_slice(), [u64::MAX, 16, 1]);
}

#[test]
fn test_push_conversion_failure_leaves_vec_unchanged() {
    let mut vec = Int32Vec::with_capacity(8).expect("Failed to create vec");
    vec.push(&[1, 2]).expect("Failed to push");

    let result = vec.push(&[Value::from(3.0), Value::BigInt(4)]);

    assert_eq!(result, Err(big_int_error()));
    assert_eq!(vec.as_slice(), [1, 2]);
    assert_eq!(vec.capacity_slice(), [1, 2, 0, 0, 0, 0, 0, 0]);
}

// =============================================================================
// pop() / shift()
// =============================================================================

#[test]
fn test_pop_returns_last_and_zeroizes() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);

    assert_eq!(vec.pop(), Ok(Some(3)));
    assert_eq!(vec.as_slice(), [1, 2]);
    assert_eq!(vec.capacity_slice(), [1, 2, 0]);
}

#[test]
fn test_shift_returns_first_and_moves_rest() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);

    assert_eq!(vec.shift(), Ok(Some(1)));
    assert_eq!(vec.as_slice(), [2, 3]);
    assert_eq!(vec.capacity_slice(), [2, 3, 0]);
}

#[test]
fn test_pop_and_shift_on_empty() {
    let mut vec = Float64Vec::new();

    assert_eq!(vec.pop(), Ok(None));
    assert_eq!(vec.shift(), Ok(None));
}

// =============================================================================
// unshift()
// =============================================================================

#[test]
fn test_unshift_prepends_in_order() {
    let mut vec = Int32Vec::of(&[3, 4]);

    assert_eq!(vec.unshift(&[1, 2]), Ok(4));
    assert_eq!(vec.as_slice(), [1, 2, 3, 4]);
}

#[test]
fn test_unshift_conversion_failure_restores_elements() {
    let mut vec = Int32Vec::with_capacity(8).expect("Failed to create vec");
    vec.push(&[1, 2, 3]).expect("Failed to push");

    let result = vec.unshift(&[Value::from(7.0), Value::from(8.0), Value::BigInt(9)]);

    assert_eq!(result, Err(big_int_error()));
    assert_eq!(vec.as_slice(), [1, 2, 3]);
    assert_eq!(vec.capacity_slice(), [1, 2, 3, 0, 0, 0, 0, 0]);
}

// =============================================================================
// splice()
// =============================================================================

#[test]
fn test_splice_replaces_range() {
    let mut vec = Int32Vec::of(&[20, 30, 40, 50]);

    let deleted = vec.splice(1, Some(2), &[99]).expect("Failed to splice");

    assert_eq!(deleted, [30, 40]);
    assert_eq!(vec.as_slice(), [20, 99, 50]);
    assert_eq!(vec.capacity_slice(), [20, 99, 50, 0]);
}

#[test]
fn test_splice_inserts_without_deleting() {
    let mut vec = Int32Vec::of(&[1, 4]);

    let deleted = vec.splice(1, Some(0), &[2, 3]).expect("Failed to splice");

    assert!(deleted.is_empty());
    assert_eq!(vec.as_slice(), [1, 2, 3, 4]);
}

#[test]
fn test_splice_without_count_removes_tail() {
    let mut vec = Int32Vec::of(&[1, 2, 3, 4]);

    let deleted = vec.splice::<i32>(-2, None, &[]).expect("Failed to splice");

    assert_eq!(deleted, [3, 4]);
    assert_eq!(vec.as_slice(), [1, 2]);
}

#[test]
fn test_splice_clamps_start_and_count() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);

    let deleted = vec.splice(10, Some(5), &[4]).expect("Failed to splice");
    assert!(deleted.is_empty());
    assert_eq!(vec.as_slice(), [1, 2, 3, 4]);

    let deleted = vec.splice(-10, Some(-1), &[0]).expect("Failed to splice");
    assert!(deleted.is_empty());
    assert_eq!(vec.as_slice(), [0, 1, 2, 3, 4]);

    let deleted = vec.splice::<i32>(3, Some(100), &[]).expect("Failed to splice");
    assert_eq!(deleted, [3, 4]);
    assert_eq!(vec.as_slice(), [0, 1, 2]);
}

#[test]
fn test_splice_growing_failure_restores_state() {
    let mut vec = Int32Vec::with_capacity(8).expect("Failed to create vec");
    vec.push(&[1, 2, 3, 4]).expect("Failed to push");

    let items = [Value::from(7.0), Value::from(8.0), Value::BigInt(9)];
    let result = vec.splice(1, Some(1), &items);

    assert_eq!(result, Err(big_int_error()));
    assert_eq!(vec.as_slice(), [1, 2, 3, 4]);
    assert_eq!(vec.capacity_slice(), [1, 2, 3, 4, 0, 0, 0, 0]);
}

#[test]
fn test_splice_shrinking_failure_restores_state() {
    let mut vec = Int32Vec::of(&[1, 2, 3, 4, 5]);

    let items = [Value::from(7.0), Value::BigInt(9)];
    let result = vec.splice(1, Some(3), &items);

    assert_eq!(result, Err(big_int_error()));
    assert_eq!(vec.as_slice(), [1, 2, 3, 4, 5]);
}

#[test]
fn test_splice_same_size_failure_restores_state() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);

    let items = [Value::from(7.0), Value::BigInt(9)];
    let result = vec.splice(0, Some(2), &items);

    assert_eq!(result, Err(big_int_error()));
    assert_eq!(vec.as_slice(), [1, 2, 3]);
}

#[test]
fn test_splice_sealed_length_change_is_error() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);
    vec.seal();

    assert_eq!(vec.splice(0, Some(1), &[7, 8]), Err(VecError::Sealed));
    assert_eq!(vec.splice::<i32>(0, Some(1), &[]), Err(VecError::Sealed));
    assert_eq!(vec.as_slice(), [1, 2, 3]);
}

// =============================================================================
// splice_values()
// =============================================================================

#[test]
fn test_splice_values_absent_count_removes_tail() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);

    let deleted = vec
        .splice_values::<i32>(&Value::from(1.0), None, &[])
        .expect("Failed to splice");

    assert_eq!(deleted, [2, 3]);
}

#[test]
fn test_splice_values_undefined_count_removes_nothing() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);

    let deleted = vec
        .splice_values(&Value::from(1.0), Some(&Value::Undefined), &[9])
        .expect("Failed to splice");

    assert!(deleted.is_empty());
    assert_eq!(vec.as_slice(), [1, 9, 2, 3]);
}

#[test]
fn test_splice_values_infinities_clamp() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);

    let deleted = vec
        .splice_values::<i32>(
            &Value::from(f64::NEG_INFINITY),
            Some(&Value::from(f64::INFINITY)),
            &[],
        )
        .expect("Failed to splice");

    assert_eq!(deleted, [1, 2, 3]);
    assert!(vec.is_empty());
}

#[test]
fn test_splice_values_big_int_argument_is_type_error() {
    let mut vec = Int32Vec::of(&[1, 2, 3]);

    assert_eq!(
        vec.splice_values::<i32>(&Value::BigInt(0), None, &[]),
        Err(big_int_error())
    );
    assert_eq!(vec.as_slice(), [1, 2, 3]);
}
