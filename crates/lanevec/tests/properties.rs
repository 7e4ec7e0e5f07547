// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod properties_tests {
    use lanevec::{Buffer, Float64Vec, Int16Vec, Int32Vec, Lane, Value, VecError};
    use proptest::prelude::*;

    fn elements() -> impl Strategy<Value = Vec<i32>> {
        prop::collection::vec(any::<i32>(), 0..32)
    }

    proptest! {
        #[test]
        fn prop_set_then_get_round_trips(values in prop::collection::vec(any::<i16>(), 1..16), seed in any::<usize>(), value in any::<i16>()) {
            let mut vec = Int16Vec::of(&values);
            let index = seed % values.len();

            vec.set(index, value).expect("Failed to set");

            prop_assert_eq!(vec.get(index), Some(value));
        }

        #[test]
        fn prop_dynamic_set_follows_lane_rule(n in -1e9f64..1e9f64) {
            let mut vec = Int16Vec::with_length(1).expect("Failed to create vec");

            vec.set(0, Value::Number(n)).expect("Failed to set");

            prop_assert_eq!(vec.get(0), i16::from_value(&Value::Number(n)).ok());
            prop_assert_eq!(vec.get(0), Some(n.trunc() as i64 as i16));
        }

        #[test]
        fn prop_float_set_is_identity(n in any::<f64>()) {
            let mut vec = Float64Vec::with_length(1).expect("Failed to create vec");

            vec.set(0, Value::Number(n)).expect("Failed to set");

            prop_assert_eq!(vec.get(0).map(f64::to_bits), Some(n.to_bits()));
        }

        #[test]
        fn prop_push_then_pop_restores(values in elements(), extra in any::<i32>()) {
            let mut vec = Int32Vec::of(&values);

            vec.push(&[extra]).expect("Failed to push");
            prop_assert_eq!(vec.pop(), Ok(Some(extra)));

            prop_assert_eq!(vec.len(), values.len());
            prop_assert_eq!(vec.as_slice(), values.as_slice());
        }

        #[test]
        fn prop_splice_then_reinsert_restores(values in elements(), start in -40isize..40, count in 0isize..40) {
            let mut vec = Int32Vec::of(&values);
            let length = values.len() as isize;
            let at = if start < 0 { (length + start).max(0) } else { start.min(length) };

            let deleted = vec.splice::<i32>(start, Some(count), &[]).expect("Failed to splice");
            prop_assert_eq!(vec.len(), values.len() - deleted.len());

            vec.splice(at, Some(0), &deleted).expect("Failed to splice");

            prop_assert_eq!(vec.as_slice(), values.as_slice());
        }

        #[test]
        fn prop_shrink_then_grow_yields_zeros(values in elements(), cut in any::<usize>()) {
            let mut vec = Int32Vec::of(&values);
            let length = values.len();
            let shorter = if length == 0 { 0 } else { cut % length };

            vec.set_length(shorter).expect("Failed to shrink");
            vec.set_length(length).expect("Failed to grow");

            prop_assert_eq!(&vec.as_slice()[..shorter], &values[..shorter]);
            prop_assert!(vec.as_slice()[shorter..].iter().all(|v| *v == 0));
        }

        #[test]
        fn prop_sealed_vec_rejects_resizing(values in prop::collection::vec(any::<i32>(), 1..16), value in any::<i32>()) {
            let mut vec = Int32Vec::of(&values);
            vec.seal();

            prop_assert_eq!(vec.push(&[value]), Err(VecError::Sealed));
            prop_assert_eq!(vec.pop(), Err(VecError::Sealed));
            prop_assert_eq!(vec.unshift(&[value]), Err(VecError::Sealed));
            prop_assert_eq!(vec.set_length(0), Err(VecError::Sealed));
            prop_assert_eq!(vec.as_slice(), values.as_slice());

            vec.set(0, value).expect("Failed to set");
            prop_assert_eq!(vec.get(0), Some(value));
        }

        #[test]
        fn prop_failed_unshift_restores(values in elements(), good in 0usize..4) {
            let mut vec = Int32Vec::of(&values);

            let mut items = vec![Value::Number(1.0); good];
            items.push(Value::BigInt(0));

            prop_assert!(vec.unshift(&items).is_err());
            prop_assert_eq!(vec.as_slice(), values.as_slice());

            let buffer = vec.into_buffer();
            prop_assert!(buffer.as_slice()[values.len()..].iter().all(|v| *v == 0));
        }

        #[test]
        fn prop_failed_splice_restores(values in elements(), start in -40isize..40, count in 0isize..40, good in 0usize..6) {
            let mut vec = Int32Vec::of(&values);

            let mut items = vec![Value::Number(1.0); good];
            items.push(Value::BigInt(0));

            prop_assert!(vec.splice(start, Some(count), &items).is_err());
            prop_assert_eq!(vec.as_slice(), values.as_slice());

            let buffer = vec.into_buffer();
            prop_assert!(buffer.as_slice()[values.len()..].iter().all(|v| *v == 0));
        }
    }
}
