// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod zeroize_slice_tests {
    use lanevec_util::{is_integral_number, is_slice_zeroed, zeroize_slice};

    #[test]
    fn test_zeroize_slice_zeros_all_elements() {
        let mut data = vec![0xABu16; 512];
        zeroize_slice(&mut data);
        assert!(is_slice_zeroed(&data));
    }

    #[test]
    fn test_zeroize_slice_empty_slice() {
        let mut data: Vec<i64> = vec![];
        zeroize_slice(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_zeroize_slice_floats() {
        let mut data = [f32::NAN, -1.0, 7.5];
        zeroize_slice(&mut data);
        assert_eq!(data, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_is_slice_zeroed_detects_residue() {
        assert!(!is_slice_zeroed(&[0u8, 0, 1]));
        assert!(is_slice_zeroed::<u8>(&[]));
    }

    #[test]
    fn test_is_integral_number() {
        assert!(is_integral_number(3.0));
        assert!(is_integral_number(-0.0));
        assert!(!is_integral_number(0.5));
        assert!(!is_integral_number(f64::NAN));
        assert!(!is_integral_number(f64::INFINITY));
    }
}
