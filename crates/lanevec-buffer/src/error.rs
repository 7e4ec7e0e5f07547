// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for lanevec-buffer.

use thiserror::Error;

/// Errors that can occur when allocating or transferring buffers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The allocator refused the request, or its byte size overflows.
    #[error("failed to allocate a buffer of {requested} elements")]
    AllocationFailed {
        /// Requested capacity, in elements.
        requested: usize,
    },
}
