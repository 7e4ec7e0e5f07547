// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;
use core::fmt;

use lanevec_util::number_to_string;
use zeroize::DefaultIsZeroes;

use crate::clamped::ClampedU8;
use crate::error::CoercionError;
use crate::value::Value;

/// Identifies an element width and its conversion family.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum LaneKind {
    /// 8-bit signed integer.
    Int8,
    /// 8-bit unsigned integer.
    Uint8,
    /// 8-bit unsigned integer with clamping conversion.
    Uint8Clamped,
    /// 16-bit signed integer.
    Int16,
    /// 16-bit unsigned integer.
    Uint16,
    /// 32-bit signed integer.
    Int32,
    /// 32-bit unsigned integer.
    Uint32,
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// 64-bit signed big integer.
    BigInt64,
    /// 64-bit unsigned big integer.
    BigUint64,
}

impl LaneKind {
    /// Short name (`"Int8"`, `"Float64"`, …).
    pub fn name(self) -> &'static str {
        match self {
            LaneKind::Int8 => "Int8",
            LaneKind::Uint8 => "Uint8",
            LaneKind::Uint8Clamped => "Uint8Clamped",
            LaneKind::Int16 => "Int16",
            LaneKind::Uint16 => "Uint16",
            LaneKind::Int32 => "Int32",
            LaneKind::Uint32 => "Uint32",
            LaneKind::Float32 => "Float32",
            LaneKind::Float64 => "Float64",
            LaneKind::BigInt64 => "BigInt64",
            LaneKind::BigUint64 => "BigUint64",
        }
    }

    /// Tag of the growable vector over this lane (`"Int8Vec"`, …).
    pub fn vec_tag(self) -> &'static str {
        match self {
            LaneKind::Int8 => "Int8Vec",
            LaneKind::Uint8 => "Uint8Vec",
            LaneKind::Uint8Clamped => "Uint8ClampedVec",
            LaneKind::Int16 => "Int16Vec",
            LaneKind::Uint16 => "Uint16Vec",
            LaneKind::Int32 => "Int32Vec",
            LaneKind::Uint32 => "Uint32Vec",
            LaneKind::Float32 => "Float32Vec",
            LaneKind::Float64 => "Float64Vec",
            LaneKind::BigInt64 => "BigInt64Vec",
            LaneKind::BigUint64 => "BigUint64Vec",
        }
    }

    /// Width of one element in bytes.
    pub fn bytes_per_element(self) -> usize {
        match self {
            LaneKind::Int8 | LaneKind::Uint8 | LaneKind::Uint8Clamped => 1,
            LaneKind::Int16 | LaneKind::Uint16 => 2,
            LaneKind::Int32 | LaneKind::Uint32 | LaneKind::Float32 => 4,
            LaneKind::Float64 | LaneKind::BigInt64 | LaneKind::BigUint64 => 8,
        }
    }

    /// Returns `true` for the 64-bit big-integer lanes.
    pub fn is_big_int(self) -> bool {
        matches!(self, LaneKind::BigInt64 | LaneKind::BigUint64)
    }
}

impl fmt::Display for LaneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One slot type of a typed buffer.
///
/// The zero value of a lane is its `Default` (`0`, `0.0`, or big-integer
/// `0`), and `DefaultIsZeroes` lets buffers wipe lanes with volatile writes.
pub trait Lane: DefaultIsZeroes + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Lane identity.
    const KIND: LaneKind;

    /// Width of one element in bytes.
    const BYTES_PER_ELEMENT: usize = core::mem::size_of::<Self>();

    /// Converts a dynamic value with the lane's native rule.
    ///
    /// # Errors
    ///
    /// Returns [`CoercionError`] when the value's type cannot be represented
    /// (big integer into a number lane, number into a big-integer lane, …).
    fn from_value(value: &Value) -> Result<Self, CoercionError>;

    /// Converts the element back into a dynamic value.
    fn into_value(self) -> Value;

    /// Equality where `NaN` equals `NaN` and `-0` equals `+0`.
    #[inline]
    fn same_value_zero(&self, other: &Self) -> bool {
        self == other
    }

    /// Numeric ordering used by sort: ascending, `-0` before `+0`, `NaN` last.
    fn lane_cmp(&self, other: &Self) -> Ordering;

    /// Renders the element the way a number or big integer prints.
    fn render(&self) -> String;
}

/// Truncates `number` and wraps it modulo `2^bits`. `NaN` and infinities
/// map to `0`.
#[inline]
fn wrap_number(number: f64, bits: u32) -> u64 {
    if !number.is_finite() {
        return 0;
    }

    let modulus = (1u64 << bits) as f64;
    number.trunc().rem_euclid(modulus) as u64
}

fn float_cmp(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}

macro_rules! impl_wrapping_lane {
    ($ty:ty, $unsigned:ty, $bits:expr, $kind:ident) => {
        impl Lane for $ty {
            const KIND: LaneKind = LaneKind::$kind;

            #[inline]
            fn from_value(value: &Value) -> Result<Self, CoercionError> {
                let number = value.to_number()?;
                Ok(wrap_number(number, $bits) as $unsigned as $ty)
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::Number(f64::from(self))
            }

            #[inline]
            fn lane_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    };
}

impl_wrapping_lane!(i8, u8, 8, Int8);
impl_wrapping_lane!(u8, u8, 8, Uint8);
impl_wrapping_lane!(i16, u16, 16, Int16);
impl_wrapping_lane!(u16, u16, 16, Uint16);
impl_wrapping_lane!(i32, u32, 32, Int32);
impl_wrapping_lane!(u32, u32, 32, Uint32);

impl Lane for ClampedU8 {
    const KIND: LaneKind = LaneKind::Uint8Clamped;

    #[inline]
    fn from_value(value: &Value) -> Result<Self, CoercionError> {
        value.to_number().map(ClampedU8::from_number)
    }

    #[inline]
    fn into_value(self) -> Value {
        Value::Number(f64::from(self.0))
    }

    #[inline]
    fn lane_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn render(&self) -> String {
        self.0.to_string()
    }
}

macro_rules! impl_float_lane {
    ($ty:ty, $kind:ident) => {
        impl Lane for $ty {
            const KIND: LaneKind = LaneKind::$kind;

            #[inline]
            fn from_value(value: &Value) -> Result<Self, CoercionError> {
                Ok(value.to_number()? as $ty)
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::Number(f64::from(self))
            }

            #[inline]
            fn same_value_zero(&self, other: &Self) -> bool {
                (self.is_nan() && other.is_nan()) || self == other
            }

            #[inline]
            fn lane_cmp(&self, other: &Self) -> Ordering {
                float_cmp(f64::from(*self), f64::from(*other))
            }

            fn render(&self) -> String {
                number_to_string(f64::from(*self))
            }
        }
    };
}

impl_float_lane!(f32, Float32);
impl_float_lane!(f64, Float64);

macro_rules! impl_big_int_lane {
    ($ty:ty, $kind:ident) => {
        impl Lane for $ty {
            const KIND: LaneKind = LaneKind::$kind;

            #[inline]
            fn from_value(value: &Value) -> Result<Self, CoercionError> {
                // i128 -> 64-bit casts wrap modulo 2^64
                Ok(value.to_big_int()? as $ty)
            }

            #[inline]
            fn into_value(self) -> Value {
                Value::BigInt(i128::from(self))
            }

            #[inline]
            fn lane_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn render(&self) -> String {
                self.to_string()
            }
        }
    };
}

impl_big_int_lane!(i64, BigInt64);
impl_big_int_lane!(u64, BigUint64);
