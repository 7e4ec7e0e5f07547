// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;
use core::fmt;

use lanevec_util::{ARRAY_INDEX_LIMIT, number_to_string, string_to_number};

use crate::cache::is_known_non_index;

/// Classification of a canonical numeric key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalKey {
    /// An array index: integer in `[0, 2^32 − 1)`.
    Index(u32),
    /// Any other number, including negatives, non-integers, large integers,
    /// infinities and `NaN`.
    Number(f64),
    /// The key `"-0"`.
    NegativeZero,
}

impl CanonicalKey {
    fn from_number(number: f64) -> Self {
        if number >= 0.0 && number < ARRAY_INDEX_LIMIT as f64 && number.trunc() == number {
            // -0 never reaches here, "-0" is special-cased before parsing
            CanonicalKey::Index(number as u32)
        } else {
            CanonicalKey::Number(number)
        }
    }

    /// The number routed to the host.
    pub fn as_number(self) -> f64 {
        match self {
            CanonicalKey::Index(index) => f64::from(index),
            CanonicalKey::Number(number) => number,
            CanonicalKey::NegativeZero => -0.0,
        }
    }

    /// Returns `true` for [`CanonicalKey::Index`].
    pub fn is_array_index(self) -> bool {
        matches!(self, CanonicalKey::Index(_))
    }
}

/// Characters a canonical numeric key may start with: a digit, `-`,
/// `I`(nfinity) or `N`(aN).
#[inline]
fn could_be_numeric(key: &str) -> bool {
    matches!(key.as_bytes().first(), Some(b'0'..=b'9' | b'-' | b'I' | b'N'))
}

/// Classifies `key` as a canonical numeric index, or `None` for ordinary
/// property names.
///
/// A key is canonical if rendering the number it parses to yields the key
/// back unchanged. `"-0"` is canonical even though `-0` renders as `"0"`.
pub fn classify(key: &str) -> Option<CanonicalKey> {
    if !could_be_numeric(key) || is_known_non_index(key) {
        return None;
    }

    if key == "-0" {
        return Some(CanonicalKey::NegativeZero);
    }

    let number = string_to_number(key);
    if number_to_string(number) != key {
        return None;
    }

    Some(CanonicalKey::from_number(number))
}

/// Parses `key` into the number routed to the host, if it is canonical.
///
/// ```rust
/// use lanevec_index::parse_index;
///
/// assert_eq!(parse_index("42"), Some(42.0));
/// assert!(parse_index("-0").is_some_and(|n| n == 0.0 && n.is_sign_negative()));
/// assert!(parse_index("NaN").is_some_and(f64::is_nan));
/// assert_eq!(parse_index("1.50"), None);
/// ```
#[inline]
pub fn parse_index(key: &str) -> Option<f64> {
    classify(key).map(CanonicalKey::as_number)
}

/// One entry of [`IndexRouter::own_keys`](crate::IndexRouter::own_keys).
#[derive(Debug, Clone, PartialEq)]
pub enum OwnKey {
    /// An element key reported by the host.
    Element(f64),
    /// An ordinary field name.
    Field(String),
}

impl fmt::Display for OwnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnKey::Element(index) => f.write_str(&number_to_string(*index)),
            OwnKey::Field(name) => f.write_str(name),
        }
    }
}

fn is_array_index(number: f64) -> bool {
    number >= 0.0
        && number < ARRAY_INDEX_LIMIT as f64
        && number.trunc() == number
        && !(number == 0.0 && number.is_sign_negative())
}

/// Element enumeration order: array indices ascending, then every other
/// number ascending (`-0` before `+0`, `NaN` last).
pub(crate) fn element_order(a: &f64, b: &f64) -> Ordering {
    match (is_array_index(*a), is_array_index(*b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.total_cmp(b),
        },
    }
}
