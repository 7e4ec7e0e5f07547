// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Number <-> string conversions.

use crate::MAX_SAFE_INTEGER;

/// Renders `value` as the shortest decimal string that parses back to the
/// same `f64`.
///
/// Layout rules, with `k` significant digits and decimal exponent `n`
/// (`value = digits × 10^(n − k)`):
///
/// - `k ≤ n ≤ 21`: digits followed by `n − k` zeros (`"123000"`)
/// - `0 < n ≤ 21`: digits with a decimal point after `n` of them (`"1.5"`)
/// - `−6 < n ≤ 0`: `"0."`, `−n` zeros, then the digits (`"0.001"`)
/// - otherwise scientific with an explicit exponent sign (`"1e+21"`,
///   `"1.5e-7"`)
///
/// `NaN` renders as `"NaN"`, infinities as `"Infinity"`/`"-Infinity"`, and
/// both zeros as `"0"`.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }

    if value == 0.0 {
        return String::from("0");
    }

    if value.is_infinite() {
        return if value > 0.0 {
            String::from("Infinity")
        } else {
            String::from("-Infinity")
        };
    }

    if value < 0.0 {
        let mut out = String::from("-");
        out.push_str(&number_to_string(-value));
        return out;
    }

    let (digits, n) = shortest_digits(value);
    let k = digits.len() as i32;
    let mut out = String::with_capacity(digits.len() + 8);

    if k <= n && n <= 21 {
        out.push_str(&digits);
        push_zeros(&mut out, (n - k) as usize);
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        push_zeros(&mut out, (-n) as usize);
        out.push_str(&digits);
    } else {
        let exponent = n - 1;
        let (first, rest) = digits.split_at(1);
        out.push_str(first);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if exponent >= 0 { '+' } else { '-' });
        out.push_str(&format!("{}", exponent.unsigned_abs()));
    }

    out
}

/// Splits a finite positive `value` into its shortest round-trip digit string
/// and decimal exponent `n` (position of the decimal point).
fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` without precision emits the shortest round-trip mantissa.
    let rendered = format!("{value:e}");
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    (digits, exponent + 1)
}

fn push_zeros(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push('0');
    }
}

fn is_string_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Parses `text` with the string-to-number grammar.
///
/// - Leading and trailing whitespace (including line terminators and BOM)
///   is ignored; an empty or blank string is `0`.
/// - `0x`/`0X`, `0o`/`0O`, `0b`/`0B` prefixes select base 16, 8 and 2
///   (no sign allowed).
/// - `Infinity`, `+Infinity`, `-Infinity`.
/// - Decimal literals with optional sign, fraction and exponent.
///
/// Anything else, including Rust-only spellings like `inf` or `1_000`,
/// yields `NaN`.
pub fn string_to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(is_string_whitespace);

    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if !is_decimal_literal(trimmed) {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let body = &text[2..];
    if body.is_empty() {
        return Some(f64::NAN);
    }

    let mut acc = 0.0f64;
    for c in body.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }

    Some(acc)
}

/// `[+-]? (digits ('.' digits?)? | '.' digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Truncates toward zero, mapping `NaN` and `-0` to `+0`. Infinities are
/// kept.
#[inline]
pub fn to_integer_or_infinity(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }

    let truncated = value.trunc();
    if truncated == 0.0 { 0.0 } else { truncated }
}

/// Converts a length/capacity argument into an index.
///
/// Returns `None` when the truncated value is negative or exceeds
/// [`MAX_SAFE_INTEGER`](crate::MAX_SAFE_INTEGER).
#[inline]
pub fn to_index(value: f64) -> Option<u64> {
    let integer = to_integer_or_infinity(value);

    if !(0.0..=MAX_SAFE_INTEGER as f64).contains(&integer) {
        return None;
    }

    Some(integer as u64)
}
