// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod string_to_number_tests {
    use lanevec_util::string_to_number;

    #[test]
    fn test_string_to_number_blank_is_zero() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number(" \t\n"), 0.0);
    }

    #[test]
    fn test_string_to_number_decimal_forms() {
        assert_eq!(string_to_number("42"), 42.0);
        assert_eq!(string_to_number(" -1.5 "), -1.5);
        assert_eq!(string_to_number("+3"), 3.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("5."), 5.0);
        assert_eq!(string_to_number("1e3"), 1000.0);
        assert_eq!(string_to_number("1E-2"), 0.01);
    }

    #[test]
    fn test_string_to_number_radix_prefixes() {
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert!(string_to_number("0x").is_nan());
        assert!(string_to_number("-0x10").is_nan());
    }

    #[test]
    fn test_string_to_number_infinity_spellings() {
        assert_eq!(string_to_number("Infinity"), f64::INFINITY);
        assert_eq!(string_to_number("+Infinity"), f64::INFINITY);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("infinity").is_nan());
    }

    #[test]
    fn test_string_to_number_rejects_garbage() {
        assert!(string_to_number("abc").is_nan());
        assert!(string_to_number("1_000").is_nan());
        assert!(string_to_number("1e").is_nan());
        assert!(string_to_number(".").is_nan());
        assert!(string_to_number("--1").is_nan());
        assert!(string_to_number("nan").is_nan());
    }
}
