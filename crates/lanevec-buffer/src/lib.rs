// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity element buffers with automatic zeroization.
//!
//! A buffer owns exactly `capacity` zero-initialized slots of an element
//! type. It never grows on its own: a growable container on top decides when
//! to reallocate and asks the buffer for one of two strategies.
//!
//! # Buffer Types
//!
//! ## PortableBuffer
//!
//! - Boxed slice of exactly `capacity` slots
//! - No in-place transfer: growth allocates a fresh buffer, copies the live
//!   prefix, then zeroizes the vacated buffer before it is freed
//! - Zeroized on drop
//!
//! ## ReallocBuffer
//!
//! - `Vec`-backed
//! - Supports in-place transfer through the allocator's `realloc`
//! - Zeroized on drop (including spare capacity)
//!
//! The `realloc` feature selects [`ReallocBuffer`] as [`DefaultBuffer`];
//! without it [`PortableBuffer`] is used.
//!
//! # Example
//!
//! ```rust
//! use lanevec_buffer::{Buffer, BufferError, PortableBuffer};
//!
//! fn example() -> Result<(), BufferError> {
//!     let mut buffer = PortableBuffer::<u16>::try_with_capacity(4)?;
//!     assert_eq!(buffer.as_slice(), [0, 0, 0, 0]);
//!
//!     buffer.set(1, 7);
//!     assert_eq!(buffer.get(1), Some(7));
//!     assert_eq!(buffer.get(4), None);
//!
//!     // Portable buffers never transfer in place
//!     assert!(!buffer.try_transfer(8)?);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod portable_buffer;
mod realloc_buffer;
mod traits;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::BufferBehaviour;

pub use error::BufferError;
pub use portable_buffer::PortableBuffer;
pub use realloc_buffer::ReallocBuffer;
pub use traits::{Buffer, Element};

/// Buffer used by growable containers when none is named explicitly.
#[cfg(feature = "realloc")]
pub type DefaultBuffer<T> = ReallocBuffer<T>;

/// Buffer used by growable containers when none is named explicitly.
#[cfg(not(feature = "realloc"))]
pub type DefaultBuffer<T> = PortableBuffer<T>;
