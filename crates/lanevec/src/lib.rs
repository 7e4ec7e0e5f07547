// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable typed vectors.
//!
//! A [`TypedVec`] is a typed array that can change length: push, pop,
//! shift, unshift and splice work like on an ordinary list, while the
//! elements stay packed in a fixed-capacity lane buffer.
//!
//! ## Core Concepts
//!
//! - **Lanes**: eleven element types (`i8` … `u64`, [`ClampedU8`], `f32`,
//!   `f64`), each with its own conversion rule from a dynamic [`Value`].
//! - **Buffers**: the elements live in a [`Buffer`] of `capacity` slots.
//!   Growth doubles the capacity and either transfers the buffer in place
//!   or copies into a new one and zeroizes the old.
//! - **Sealing**: [`TypedVec::seal`] fixes length and capacity for good;
//!   element writes keep working.
//! - **Keyed access**: [`VecRouter`] exposes the elements under canonical
//!   numeric keys (`"0"`, `"1"`, …) next to ordinary named fields.
//!
//! ## Example
//!
//! ```rust
//! use lanevec::{Float64Vec, Value, VecError};
//!
//! fn example() -> Result<(), VecError> {
//!     let mut vec = Float64Vec::with_capacity(2)?;
//!
//!     vec.push(&[1.5, 2.5, 3.5])?;
//!     assert!(vec.capacity() >= 3);
//!
//!     vec.push(&[Value::from("4.5")])?;
//!     assert_eq!(vec.to_string(), "1.5,2.5,3.5,4.5");
//!
//!     let mut router = vec.into_router();
//!     router.set("0", Value::Number(9.0)).expect("Failed to set element");
//!     assert_eq!(router.get("0"), Some(Value::Number(9.0)));
//!     assert_eq!(router.get("01"), None);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - `realloc`: use [`ReallocBuffer`] (in-place growth) as the default
//!   buffer.
//! - `test_utils`: expose buffer behaviour injection for failure tests.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod aliases;
mod error;
mod indexable;
mod mutators;
mod traversal;
mod typed_vec;

pub use aliases::{
    BigInt64Vec, BigUint64Vec, Float32Vec, Float64Vec, Int8Vec, Int16Vec, Int32Vec, Uint8ClampedVec,
    Uint8Vec, Uint16Vec, Uint32Vec,
};
pub use error::{ErrorKind, RangeError, VecError};
pub use indexable::VecRouter;
pub use typed_vec::TypedVec;

pub use lanevec_buffer::{Buffer, BufferError, DefaultBuffer, Element, PortableBuffer, ReallocBuffer};
pub use lanevec_index::{
    CanonicalKey, DerivedObject, Extensibility, IndexRouter, Indexable, OwnKey, PropertyDescriptor,
    PropertyValue, RouterError, add_non_index_cache, classify,
};
pub use lanevec_lane::{ClampedU8, CoercionError, Lane, LaneKind, ToLane, Value};
pub use lanevec_util::MAX_SAFE_INTEGER;

#[cfg(any(test, feature = "test_utils"))]
pub use lanevec_buffer::BufferBehaviour;
