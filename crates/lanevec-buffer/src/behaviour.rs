// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Test behaviour for injecting failures in buffer operations.
///
/// This is only available with the `test_utils` feature and lets containers
/// exercise their error and fallback paths without exhausting memory.
///
/// The behaviour is sticky: once set, it remains active until changed.
/// Buffers produced by [`Buffer::try_allocate`](crate::Buffer::try_allocate)
/// inherit it.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use lanevec_buffer::{Buffer, BufferBehaviour, PortableBuffer};
///
///     #[test]
///     fn test_allocation_failure() {
///         let mut buffer = PortableBuffer::<u8>::try_with_capacity(4).unwrap();
///         buffer.change_behaviour(BufferBehaviour::FailAtAllocate);
///
///         assert!(buffer.try_allocate(8).is_err());
///     }
/// }
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BufferBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// `try_allocate()` and `try_transfer()` fail with `AllocationFailed`.
    FailAtAllocate,
    /// `try_transfer()` declines, forcing the copy-and-zero path.
    RefuseTransfer,
}
