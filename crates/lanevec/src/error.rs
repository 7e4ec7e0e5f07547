// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for lanevec.

use lanevec_buffer::BufferError;
use lanevec_lane::CoercionError;
use thiserror::Error;

/// A length, capacity, offset or index outside its valid range.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum RangeError {
    /// The resulting length or capacity would exceed `2^53 − 1`.
    #[error("invalid typed vec length: {requested}")]
    LengthOverflow {
        /// Requested length or capacity.
        requested: u64,
    },

    /// A capacity below the current length was requested.
    #[error("new capacity {capacity} is smaller than length {length}")]
    CapacityBelowLength {
        /// Requested capacity.
        capacity: usize,
        /// Current length.
        length: usize,
    },

    /// Buffer allocation failed.
    #[error("BufferError: {0}")]
    Buffer(#[from] BufferError),

    /// Vectors always start at the beginning of their buffer.
    #[error("byte offset must be 0, got {offset}")]
    NonZeroOffset {
        /// Rejected offset.
        offset: usize,
    },

    /// An explicit length larger than the supplied buffer.
    #[error("length {length} exceeds buffer capacity {capacity}")]
    LengthExceedsBuffer {
        /// Requested length.
        length: usize,
        /// Capacity of the supplied buffer.
        capacity: usize,
    },

    /// A dynamic length or capacity argument that is negative or too large.
    #[error("invalid index: {text}")]
    InvalidIndex {
        /// The rejected value, rendered.
        text: String,
    },

    /// A relative index outside `[-len, len)`.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange {
        /// Rejected relative index.
        index: isize,
        /// Current length.
        length: usize,
    },
}

/// Broad category of a [`VecError`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    /// Out-of-range length, capacity or allocation failure.
    Range,
    /// Length change on a sealed vector.
    State,
    /// Value conversion failure.
    Type,
}

/// Errors that can occur when working with typed vectors.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum VecError {
    /// See [`RangeError`].
    #[error("RangeError: {0}")]
    Range(#[from] RangeError),

    /// The vector is sealed; its length can no longer change.
    #[error("cannot resize a sealed typed vec")]
    Sealed,

    /// A value could not be converted to the lane type.
    #[error("TypeError: {0}")]
    Coercion(#[from] CoercionError),
}

impl VecError {
    /// Broad category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VecError::Range(_) => ErrorKind::Range,
            VecError::Sealed => ErrorKind::State,
            VecError::Coercion(_) => ErrorKind::Type,
        }
    }
}

impl From<BufferError> for VecError {
    fn from(error: BufferError) -> Self {
        VecError::Range(RangeError::Buffer(error))
    }
}
