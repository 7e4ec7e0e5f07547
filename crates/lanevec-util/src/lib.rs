// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared helpers for the lanevec crates.
//!
//! - Number rendering and parsing with the exact rules used to decide whether
//!   a property key is a canonical numeric index ([`number_to_string`],
//!   [`string_to_number`]).
//! - Index conversions for length and capacity arguments
//!   ([`to_integer_or_infinity`], [`to_index`]).
//! - Zeroization helpers for typed buffers ([`zeroize_slice`],
//!   [`is_slice_zeroed`]).
//!
//! # Example
//!
//! ```
//! use lanevec_util::{number_to_string, string_to_number};
//!
//! assert_eq!(number_to_string(1e21), "1e+21");
//! assert_eq!(number_to_string(-0.0), "0");
//! assert_eq!(string_to_number("  0x10 "), 16.0);
//! assert!(string_to_number("1_000").is_nan());
//! ```

#![warn(missing_docs)]

mod number;

pub use number::{number_to_string, string_to_number, to_index, to_integer_or_infinity};

use zeroize::{DefaultIsZeroes, Zeroize};

/// Largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as `f64` (2^53 − 1).
///
/// Lengths and capacities are capped at this value.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Exclusive upper bound of array indices (2^32 − 1).
///
/// Numeric keys below this bound enumerate before every other numeric key.
pub const ARRAY_INDEX_LIMIT: u64 = (1 << 32) - 1;

/// Overwrites every element of `slice` with its zero value.
///
/// Uses volatile writes through [`zeroize`], so the stores survive even when
/// the slice is about to be released.
///
/// # Example
///
/// ```
/// use lanevec_util::{is_slice_zeroed, zeroize_slice};
///
/// let mut data = [1.5f64, -2.0, 3.25];
/// zeroize_slice(&mut data);
/// assert!(is_slice_zeroed(&data));
/// ```
#[inline]
pub fn zeroize_slice<T: DefaultIsZeroes>(slice: &mut [T]) {
    slice.zeroize();
}

/// Returns `true` if every element of `slice` equals `T::default()`.
///
/// Floating point `-0.0` compares equal to `0.0` and therefore counts as
/// zeroed.
#[inline]
pub fn is_slice_zeroed<T: Default + PartialEq>(slice: &[T]) -> bool {
    let zero = T::default();
    slice.iter().all(|v| *v == zero)
}

/// Returns `true` if `value` is an integral number (no fractional part, not
/// NaN, not infinite).
#[inline]
pub fn is_integral_number(value: f64) -> bool {
    value.is_finite() && value.trunc() == value
}
