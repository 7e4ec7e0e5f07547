// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ReallocBuffer - `Vec`-backed buffer with in-place transfer.
//!
//! `try_transfer` hands the allocation to the allocator's `realloc`, which
//! may extend the block in place or move it. A moved block is released by
//! the allocator without being wiped; pick [`PortableBuffer`] when vacated
//! memory must be zeroized.
//!
//! [`PortableBuffer`]: crate::PortableBuffer

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::error::BufferError;
use crate::traits::{Buffer, Element};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::BufferBehaviour;

/// `Vec` whose length is always the buffer capacity.
pub struct ReallocBuffer<T: Element> {
    inner: Vec<T>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: BufferBehaviour,
}

impl<T: Element> ReallocBuffer<T> {
    fn from_inner(inner: Vec<T>) -> Self {
        Self {
            inner,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: BufferBehaviour::default(),
        }
    }
}

impl<T: Element> core::fmt::Debug for ReallocBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReallocBuffer")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<T: Element> Drop for ReallocBuffer<T> {
    fn drop(&mut self) {
        // Also wipes spare capacity left behind by a shrinking transfer
        self.inner.zeroize();
    }
}

impl<T: Element> Buffer<T> for ReallocBuffer<T> {
    fn try_with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let mut inner = Vec::new();
        inner
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailed {
                requested: capacity,
            })?;
        inner.resize(capacity, T::default());

        Ok(Self::from_inner(inner))
    }

    fn from_vec(values: Vec<T>) -> Self {
        Self::from_inner(values)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.inner
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner
    }

    fn try_allocate(&self, capacity: usize) -> Result<Self, BufferError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, BufferBehaviour::FailAtAllocate) {
            return Err(BufferError::AllocationFailed {
                requested: capacity,
            });
        }

        #[allow(unused_mut)]
        let mut buffer = Self::try_with_capacity(capacity)?;

        #[cfg(any(test, feature = "test_utils"))]
        {
            buffer.behaviour = self.behaviour;
        }

        Ok(buffer)
    }

    fn try_transfer(&mut self, capacity: usize) -> Result<bool, BufferError> {
        #[cfg(any(test, feature = "test_utils"))]
        match self.behaviour {
            BufferBehaviour::RefuseTransfer => return Ok(false),
            BufferBehaviour::FailAtAllocate => {
                return Err(BufferError::AllocationFailed {
                    requested: capacity,
                });
            }
            BufferBehaviour::None => {}
        }

        let current = self.inner.len();

        if capacity > current {
            self.inner
                .try_reserve_exact(capacity - current)
                .map_err(|_| BufferError::AllocationFailed {
                    requested: capacity,
                })?;
            self.inner.resize(capacity, T::default());
        } else if capacity < current {
            self.inner[capacity..].zeroize();
            self.inner.truncate(capacity);
            self.inner.shrink_to_fit();
        }

        tracing::trace!(from = current, to = capacity, "buffer transferred in place");

        Ok(true)
    }

    #[cfg(any(test, feature = "test_utils"))]
    fn change_behaviour(&mut self, behaviour: BufferBehaviour) {
        self.behaviour = behaviour;
    }
}
