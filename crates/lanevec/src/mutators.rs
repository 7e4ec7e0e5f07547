// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length-changing operations.
//!
//! Every mutator checks overflow and sealing before touching the buffer, and
//! converts items into their final slots one by one. A conversion failure
//! puts the vector back into its prior state (length, elements and zeroed
//! spare slots) before the error is returned.

use lanevec_buffer::Buffer;
use lanevec_lane::{Lane, ToLane, Value};

use crate::error::{RangeError, VecError};
use crate::typed_vec::{MAX_LENGTH, TypedVec, resolve_relative};

impl<L: Lane, B: Buffer<L>> TypedVec<L, B> {
    /// Appends `items` and returns the new length.
    ///
    /// # Errors
    ///
    /// - [`RangeError::LengthOverflow`](crate::RangeError::LengthOverflow) if
    ///   the new length would exceed `2^53 − 1`.
    /// - [`VecError::Sealed`] if `items` is non-empty on a sealed vector.
    /// - [`VecError::Coercion`] if an item cannot be converted. The vector is
    ///   left unchanged.
    pub fn push<V: ToLane<L>>(&mut self, items: &[V]) -> Result<usize, VecError> {
        let old_length = self.length;
        let new_length = checked_add(old_length, items.len())?;

        if items.is_empty() {
            return Ok(old_length);
        }

        self.ensure_mutable()?;
        self.ensure_capacity(new_length)?;

        if let Err(error) = self.write_items(old_length, items) {
            self.buffer.zeroize_range(old_length..new_length);
            return Err(error);
        }

        self.length = new_length;
        Ok(new_length)
    }

    /// Removes and returns the last element, or `Ok(None)` when empty.
    ///
    /// # Errors
    ///
    /// [`VecError::Sealed`] on a sealed, non-empty vector.
    pub fn pop(&mut self) -> Result<Option<L>, VecError> {
        let Some(last) = self.length.checked_sub(1) else {
            return Ok(None);
        };

        self.ensure_mutable()?;

        let value = self.buffer.get(last);
        self.buffer.zeroize_range(last..self.length);
        self.length = last;

        Ok(value)
    }

    /// Removes and returns the first element, or `Ok(None)` when empty.
    ///
    /// # Errors
    ///
    /// [`VecError::Sealed`] on a sealed, non-empty vector.
    pub fn shift(&mut self) -> Result<Option<L>, VecError> {
        let Some(last) = self.length.checked_sub(1) else {
            return Ok(None);
        };

        self.ensure_mutable()?;

        let value = self.buffer.get(0);
        self.buffer.copy_within(1..self.length, 0);
        self.buffer.zeroize_range(last..self.length);
        self.length = last;

        Ok(value)
    }

    /// Prepends `items`, in order, and returns the new length.
    ///
    /// # Errors
    ///
    /// As [`TypedVec::push`]. On a conversion failure the elements are
    /// shifted back.
    pub fn unshift<V: ToLane<L>>(&mut self, items: &[V]) -> Result<usize, VecError> {
        let old_length = self.length;
        let count = items.len();
        let new_length = checked_add(old_length, count)?;

        if count == 0 {
            return Ok(old_length);
        }

        self.ensure_mutable()?;
        self.ensure_capacity(new_length)?;

        self.buffer.copy_within(0..old_length, count);

        if let Err(error) = self.write_items(0, items) {
            self.buffer.copy_within(count..new_length, 0);
            self.buffer.zeroize_range(old_length..new_length);
            return Err(error);
        }

        self.length = new_length;
        Ok(new_length)
    }

    /// Removes `delete_count` elements starting at `start`, inserts `items`
    /// in their place and returns the removed elements.
    ///
    /// A negative `start` counts from the end. `delete_count` is clamped to
    /// `[0, len − start]`; `None` removes everything from `start` on.
    ///
    /// # Errors
    ///
    /// - [`RangeError::LengthOverflow`](crate::RangeError::LengthOverflow) if
    ///   the new length would exceed `2^53 − 1`.
    /// - [`VecError::Sealed`] if the length would change on a sealed vector.
    ///   Same-size replacement is allowed.
    /// - [`VecError::Coercion`] if an item cannot be converted. The vector is
    ///   left unchanged.
    pub fn splice<V: ToLane<L>>(
        &mut self,
        start: isize,
        delete_count: Option<isize>,
        items: &[V],
    ) -> Result<Vec<L>, VecError> {
        let start = resolve_relative(start as f64, self.length);
        let available = self.length - start;

        let delete_count = match delete_count {
            None => available,
            Some(count) => count.clamp(0, available.min(isize::MAX as usize) as isize) as usize,
        };

        self.splice_range(start, delete_count, items)
    }

    /// [`TypedVec::splice`] with dynamic arguments.
    ///
    /// `start` and `delete_count` are converted to integers (`NaN` and
    /// `undefined` read as `0`, infinities clamp). An absent `delete_count`
    /// removes everything from `start` on; an explicit `undefined` removes
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`VecError::Coercion`] for big-integer arguments, otherwise as
    /// [`TypedVec::splice`].
    pub fn splice_values<V: ToLane<L>>(
        &mut self,
        start: &Value,
        delete_count: Option<&Value>,
        items: &[V],
    ) -> Result<Vec<L>, VecError> {
        let start = resolve_relative(start.to_number()?, self.length);
        let available = self.length - start;

        let delete_count = match delete_count {
            None => available,
            Some(count) => {
                let count = count.to_integer_or_infinity()?;
                if count <= 0.0 {
                    0
                } else if count >= available as f64 {
                    available
                } else {
                    count as usize
                }
            }
        };

        self.splice_range(start, delete_count, items)
    }

    /// Splice over a resolved range: `start <= len`,
    /// `start + delete_count <= len`.
    fn splice_range<V: ToLane<L>>(
        &mut self,
        start: usize,
        delete_count: usize,
        items: &[V],
    ) -> Result<Vec<L>, VecError> {
        let old_length = self.length;
        let count = items.len();
        let new_length = checked_add(old_length - delete_count, count)?;

        if new_length != old_length {
            self.ensure_mutable()?;
        }
        self.ensure_capacity(new_length)?;

        let deleted = self.buffer.as_slice()[start..start + delete_count].to_vec();
        let tail = start + delete_count..old_length;

        if count != delete_count {
            self.buffer.copy_within(tail.clone(), start + count);
        }

        if let Err(error) = self.write_items(start, items) {
            if count != delete_count {
                self.buffer
                    .copy_within(start + count..start + count + tail.len(), start + delete_count);
            }
            self.buffer.as_mut_slice()[start..start + delete_count].copy_from_slice(&deleted);
            if new_length > old_length {
                self.buffer.zeroize_range(old_length..new_length);
            }
            return Err(error);
        }

        if new_length < old_length {
            self.buffer.zeroize_range(new_length..old_length);
        }

        self.length = new_length;
        Ok(deleted)
    }

    /// Converts `items` into slots `[at, at + items.len())`. Stops at the
    /// first failure; earlier slots keep their new values.
    fn write_items<V: ToLane<L>>(&mut self, at: usize, items: &[V]) -> Result<(), VecError> {
        let slots = &mut self.buffer.as_mut_slice()[at..at + items.len()];

        for (slot, item) in slots.iter_mut().zip(items) {
            *slot = item.to_lane()?;
        }

        Ok(())
    }
}

#[inline]
fn checked_add(length: usize, count: usize) -> Result<usize, RangeError> {
    match length.checked_add(count) {
        Some(total) if total <= MAX_LENGTH => Ok(total),
        _ => Err(RangeError::LengthOverflow {
            requested: (length as u64).saturating_add(count as u64),
        }),
    }
}
