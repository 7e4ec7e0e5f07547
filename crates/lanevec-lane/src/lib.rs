// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element-width lanes for typed vectors.
//!
//! A *lane* is the fixed-size numeric representation backing one slot of a
//! typed buffer. Every lane implements [`Lane`], which fixes:
//!
//! - its [`LaneKind`] and `BYTES_PER_ELEMENT`,
//! - the deterministic conversion from a dynamic [`Value`],
//! - the conversion back into a [`Value`],
//! - equality and ordering rules used by search and sort helpers.
//!
//! | lane          | kind           | conversion from a number                      |
//! |---------------|----------------|-----------------------------------------------|
//! | `i8`          | `Int8`         | truncate, wrap modulo 2^8                     |
//! | `u8`          | `Uint8`        | truncate, wrap modulo 2^8                     |
//! | [`ClampedU8`] | `Uint8Clamped` | round half to even, clamp to `[0, 255]`       |
//! | `i16` / `u16` | `Int16`/…      | truncate, wrap modulo 2^16                    |
//! | `i32` / `u32` | `Int32`/…      | truncate, wrap modulo 2^32                    |
//! | `f32`         | `Float32`      | round to nearest                              |
//! | `f64`         | `Float64`      | identity                                      |
//! | `i64` / `u64` | `BigInt64`/…   | numbers rejected, big integers wrap mod 2^64  |
//!
//! `NaN` and infinities become `0` in every integer lane.
//!
//! # Example
//!
//! ```rust
//! use lanevec_lane::{ClampedU8, Lane, Value};
//!
//! assert_eq!(u8::from_value(&Value::Number(300.0)), Ok(44));
//! assert_eq!(i8::from_value(&Value::Number(-129.9)), Ok(127));
//! assert_eq!(ClampedU8::from_value(&Value::Number(2.5)), Ok(ClampedU8(2)));
//! assert!(f64::from_value(&Value::BigInt(1)).is_err());
//! assert_eq!(u64::from_value(&Value::BigInt(-1)), Ok(u64::MAX));
//! ```

#![warn(missing_docs)]

mod clamped;
mod error;
mod lane;
mod to_lane;
mod value;

#[cfg(test)]
mod tests;

pub use clamped::ClampedU8;
pub use error::CoercionError;
pub use lane::{Lane, LaneKind};
pub use to_lane::ToLane;
pub use value::Value;
