// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::ops::Range;

use alloc::vec::Vec;

use zeroize::{DefaultIsZeroes, Zeroize};

use crate::error::BufferError;

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::BufferBehaviour;

/// Element types a buffer can hold.
///
/// The zero value is `Default`; `DefaultIsZeroes` lets buffers wipe slots
/// with volatile writes.
pub trait Element: DefaultIsZeroes + fmt::Debug + Send + Sync {}

impl<T> Element for T where T: DefaultIsZeroes + fmt::Debug + Send + Sync {}

/// Fixed-capacity store of `T` slots, all zero-initialized on allocation.
pub trait Buffer<T: Element>: Sized + Send + Sync + fmt::Debug {
    /// Allocates `capacity` zeroed slots.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] when the allocator refuses
    /// the request. Never aborts.
    fn try_with_capacity(capacity: usize) -> Result<Self, BufferError>;

    /// Takes ownership of `values`; the capacity equals `values.len()`.
    fn from_vec(values: Vec<T>) -> Self;

    /// Number of slots.
    fn capacity(&self) -> usize;

    /// Every slot, `[0, capacity)`.
    fn as_slice(&self) -> &[T];

    /// Every slot, `[0, capacity)`, mutably.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Allocates a sibling buffer of `capacity` zeroed slots.
    ///
    /// # Errors
    ///
    /// See [`Buffer::try_with_capacity`].
    fn try_allocate(&self, capacity: usize) -> Result<Self, BufferError> {
        Self::try_with_capacity(capacity)
    }

    /// Resizes this buffer to exactly `capacity` slots without a visible
    /// copy, keeping the common prefix and zero-filling new slots.
    ///
    /// Returns `Ok(false)` when the buffer cannot transfer in place; the
    /// caller must then fall back to allocate, copy and zeroize.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] when the transfer was
    /// attempted and the allocator refused it. The buffer is unchanged.
    fn try_transfer(&mut self, capacity: usize) -> Result<bool, BufferError> {
        let _ = capacity;
        Ok(false)
    }

    /// Reads slot `index`, or `None` past capacity.
    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).copied()
    }

    /// Writes slot `index`. Returns `false` (and writes nothing) past
    /// capacity.
    #[inline]
    fn set(&mut self, index: usize, value: T) -> bool {
        match self.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Fills `range` (clipped to capacity) with `value`.
    fn fill(&mut self, value: T, range: Range<usize>) {
        let slots = self.as_mut_slice();
        let end = range.end.min(slots.len());

        if range.start < end {
            slots[range.start..end].fill(value);
        }
    }

    /// Copies `src` to start at `dest`. Overlapping ranges are handled.
    ///
    /// # Panics
    ///
    /// Panics if either range exceeds the capacity.
    #[inline]
    fn copy_within(&mut self, src: Range<usize>, dest: usize) {
        self.as_mut_slice().copy_within(src, dest);
    }

    /// Zeroizes `range` (clipped to capacity) with volatile writes.
    fn zeroize_range(&mut self, range: Range<usize>) {
        let slots = self.as_mut_slice();
        let end = range.end.min(slots.len());

        if range.start < end {
            slots[range.start..end].zeroize();
        }
    }

    /// Changes the injected test behaviour of this buffer.
    #[cfg(any(test, feature = "test_utils"))]
    fn change_behaviour(&mut self, behaviour: BufferBehaviour);
}
