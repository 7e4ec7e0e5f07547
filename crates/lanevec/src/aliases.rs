// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lanevec_lane::ClampedU8;

use crate::typed_vec::TypedVec;

// Aliases pin the default buffer; name `TypedVec<L, B>` for any other.

/// Growable vector of `i8`.
pub type Int8Vec = TypedVec<i8>;
/// Growable vector of `u8`.
pub type Uint8Vec = TypedVec<u8>;
/// Growable vector of clamping bytes.
pub type Uint8ClampedVec = TypedVec<ClampedU8>;
/// Growable vector of `i16`.
pub type Int16Vec = TypedVec<i16>;
/// Growable vector of `u16`.
pub type Uint16Vec = TypedVec<u16>;
/// Growable vector of `i32`.
pub type Int32Vec = TypedVec<i32>;
/// Growable vector of `u32`.
pub type Uint32Vec = TypedVec<u32>;
/// Growable vector of `f32`.
pub type Float32Vec = TypedVec<f32>;
/// Growable vector of `f64`.
pub type Float64Vec = TypedVec<f64>;
/// Growable vector of 64-bit signed big integers.
pub type BigInt64Vec = TypedVec<i64>;
/// Growable vector of 64-bit unsigned big integers.
pub type BigUint64Vec = TypedVec<u64>;
