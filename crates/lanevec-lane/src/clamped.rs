// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::DefaultIsZeroes;

/// An 8-bit unsigned lane whose conversions clamp instead of wrapping.
///
/// Numbers are rounded half to even and clamped to `[0, 255]`; `NaN` maps
/// to `0`.
///
/// # Example
///
/// ```rust
/// use lanevec_lane::ClampedU8;
///
/// assert_eq!(ClampedU8::from_number(300.0), ClampedU8(255));
/// assert_eq!(ClampedU8::from_number(-5.0), ClampedU8(0));
/// assert_eq!(ClampedU8::from_number(1.5), ClampedU8(2));
/// assert_eq!(ClampedU8::from_number(2.5), ClampedU8(2));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ClampedU8(pub u8);

impl ClampedU8 {
    /// Converts a number with the clamping rule.
    pub fn from_number(number: f64) -> Self {
        if number.is_nan() || number <= 0.0 {
            return ClampedU8(0);
        }

        if number >= 255.0 {
            return ClampedU8(255);
        }

        let floor = number.floor();
        let half = floor + 0.5;

        let rounded = if number < half {
            floor
        } else if number > half {
            floor + 1.0
        } else if floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        };

        ClampedU8(rounded as u8)
    }

    /// Returns the raw byte.
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl DefaultIsZeroes for ClampedU8 {}

impl From<u8> for ClampedU8 {
    fn from(value: u8) -> Self {
        ClampedU8(value)
    }
}

impl From<ClampedU8> for u8 {
    fn from(value: ClampedU8) -> Self {
        value.0
    }
}
