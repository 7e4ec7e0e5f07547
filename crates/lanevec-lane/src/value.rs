// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use lanevec_util::{number_to_string, string_to_number, to_integer_or_infinity};

use crate::error::CoercionError;

/// A dynamically typed value, as received from keyed access or dynamic
/// call sites.
///
/// Big integers are limited to the `i128` range, which covers every value
/// a 64-bit lane can hold plus one wrap in either direction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// An arbitrary-sign big integer.
    BigInt(i128),
    /// A string.
    String(String),
}

impl Value {
    /// Name of the value's type, as reported in coercion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
        }
    }

    /// Converts to a number.
    ///
    /// # Errors
    ///
    /// Returns [`CoercionError::BigIntToNumber`] for big integers.
    pub fn to_number(&self) -> Result<f64, CoercionError> {
        match self {
            Value::Undefined => Ok(f64::NAN),
            Value::Null => Ok(0.0),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Number(n) => Ok(*n),
            Value::BigInt(_) => Err(CoercionError::BigIntToNumber),
            Value::String(s) => Ok(string_to_number(s)),
        }
    }

    /// Converts to an integer (truncated toward zero, `NaN` as `0`, infinities
    /// kept).
    pub fn to_integer_or_infinity(&self) -> Result<f64, CoercionError> {
        self.to_number().map(to_integer_or_infinity)
    }

    /// Converts to a big integer.
    ///
    /// Booleans map to `0`/`1`; strings must be integer literals (decimal with
    /// optional sign, or `0x`/`0o`/`0b` prefixed).
    ///
    /// # Errors
    ///
    /// - [`CoercionError::NotBigInt`] for `undefined`, `null` and numbers.
    /// - [`CoercionError::BigIntSyntax`] for strings that are not integer
    ///   literals or do not fit in `i128`.
    pub fn to_big_int(&self) -> Result<i128, CoercionError> {
        match self {
            Value::Bool(b) => Ok(i128::from(*b)),
            Value::BigInt(b) => Ok(*b),
            Value::String(s) => string_to_big_int(s).ok_or_else(|| CoercionError::BigIntSyntax {
                text: s.clone(),
            }),
            Value::Undefined | Value::Null | Value::Number(_) => Err(CoercionError::NotBigInt {
                type_name: self.type_name(),
            }),
        }
    }

    /// Returns the number if this is [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }
}

fn string_to_big_int(text: &str) -> Option<i128> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Some(0);
    }

    let bytes = trimmed.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            let body = &trimmed[2..];
            // from_str_radix accepts a leading sign, the literal grammar does not
            if body.starts_with(['+', '-']) {
                return None;
            }
            return i128::from_str_radix(body, radix).ok();
        }
    }

    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    trimmed.parse::<i128>().ok()
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&number_to_string(*n)),
            Value::BigInt(b) => write!(f, "{b}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::BigInt(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
