// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PortableBuffer - boxed-slice buffer without in-place transfer.
//!
//! Works everywhere. Growth goes through allocate, copy and zeroize.

use alloc::boxed::Box;
use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::error::BufferError;
use crate::traits::{Buffer, Element};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::BufferBehaviour;

/// Boxed slice of exactly `capacity` slots, zeroized on drop.
pub struct PortableBuffer<T: Element> {
    inner: Box<[T]>,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: BufferBehaviour,
}

impl<T: Element> PortableBuffer<T> {
    fn from_boxed(inner: Box<[T]>) -> Self {
        Self {
            inner,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: BufferBehaviour::default(),
        }
    }
}

impl<T: Element> core::fmt::Debug for PortableBuffer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PortableBuffer")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<T: Element> Drop for PortableBuffer<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Element> Buffer<T> for PortableBuffer<T> {
    fn try_with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let mut inner = Vec::new();
        inner
            .try_reserve_exact(capacity)
            .map_err(|_| BufferError::AllocationFailed {
                requested: capacity,
            })?;
        inner.resize(capacity, T::default());

        Ok(Self::from_boxed(inner.into_boxed_slice()))
    }

    fn from_vec(values: Vec<T>) -> Self {
        Self::from_boxed(values.into_boxed_slice())
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

    #[cfg(any(test, feature = "test_utils"))]
    fn change_behaviour(&mut self, behaviour: BufferBehaviour) {
        self.behaviour = behaviour;
    }
}
