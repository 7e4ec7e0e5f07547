// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut};

use lanevec_buffer::{Buffer, DefaultBuffer};
use lanevec_index::Extensibility;
use lanevec_lane::{Lane, ToLane, Value};
use lanevec_util::{MAX_SAFE_INTEGER, to_index, to_integer_or_infinity, zeroize_slice};

#[cfg(any(test, feature = "test_utils"))]
use lanevec_buffer::BufferBehaviour;

use crate::error::{RangeError, VecError};

/// Upper bound of every length and capacity (`2^53 − 1`, or `usize::MAX` on
/// narrower targets).
pub(crate) const MAX_LENGTH: usize = if MAX_SAFE_INTEGER > usize::MAX as u64 {
    usize::MAX
} else {
    MAX_SAFE_INTEGER as usize
};

/// Growable vector of lane `L` over a fixed-capacity buffer `B`.
///
/// The buffer owns `capacity` slots; the first `len` are the elements.
/// Slots past `len` are zero right after any growth. Growth is amortized
/// (capacity doubles) and either transfers the buffer in place or
/// allocates a new one, copies the live prefix and zeroizes the old one.
///
/// Once sealed, the length never changes again, and neither does the
/// capacity; element writes keep working.
///
/// # Example
///
/// ```rust
/// use lanevec::{Int32Vec, VecError};
///
/// fn example() -> Result<(), VecError> {
///     let mut vec = Int32Vec::of(&[10, 20, 30]);
///
///     assert_eq!(vec.push(&[40, 50])?, 5);
///     assert_eq!(vec.shift()?, Some(10));
///     assert_eq!(vec.as_slice(), [20, 30, 40, 50]);
///
///     let deleted = vec.splice(1, Some(2), &[99])?;
///     assert_eq!(deleted, [30, 40]);
///     assert_eq!(vec.as_slice(), [20, 99, 50]);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct TypedVec<L: Lane, B: Buffer<L> = DefaultBuffer<L>> {
    pub(crate) buffer: B,
    pub(crate) length: usize,
    pub(crate) extensibility: Extensibility,
    _lane: PhantomData<L>,
}

impl<L: Lane, B: Buffer<L>> TypedVec<L, B> {
    /// Width of one element in bytes.
    pub const BYTES_PER_ELEMENT: usize = L::BYTES_PER_ELEMENT;

    fn from_parts(buffer: B, length: usize) -> Self {
        Self {
            buffer,
            length,
            extensibility: Extensibility::Extensible,
            _lane: PhantomData,
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty vector with zero capacity.
    pub fn new() -> Self {
        Self::from_parts(B::from_vec(Vec::new()), 0)
    }

    /// Creates an empty vector with `capacity` zeroed slots.
    ///
    /// # Errors
    ///
    /// [`RangeError`] if `capacity` exceeds `2^53 − 1` or allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, VecError> {
        check_length(capacity)?;
        let buffer = B::try_with_capacity(capacity)?;

        Ok(Self::from_parts(buffer, 0))
    }

    /// Creates a vector of `length` zeros.
    ///
    /// # Errors
    ///
    /// See [`TypedVec::with_capacity`].
    pub fn with_length(length: usize) -> Result<Self, VecError> {
        let mut vec = Self::with_capacity(length)?;
        vec.length = length;

        Ok(vec)
    }

    /// Creates a vector from native lane values.
    pub fn of(items: &[L]) -> Self {
        Self::promote_from(B::from_vec(items.to_vec()))
    }

    /// Creates a vector by converting every element of `values`.
    ///
    /// # Errors
    ///
    /// [`VecError::Coercion`] for the first value that cannot be converted.
    pub fn from_values<V: ToLane<L>>(values: &[V]) -> Result<Self, VecError> {
        let lanes = values
            .iter()
            .map(|value| value.to_lane())
            .collect::<Result<Vec<L>, _>>()?;

        Ok(Self::promote_from(B::from_vec(lanes)))
    }

    /// Creates a vector by mapping every element of `source` (with its index)
    /// and converting the result.
    ///
    /// # Errors
    ///
    /// [`VecError::Coercion`] for the first mapped value that cannot be
    /// converted.
    pub fn from_iter_mapped<I, F, V>(source: I, mut mapper: F) -> Result<Self, VecError>
    where
        I: IntoIterator,
        F: FnMut(I::Item, usize) -> V,
        V: ToLane<L>,
    {
        let lanes = source
            .into_iter()
            .enumerate()
            .map(|(index, item)| mapper(item, index).to_lane())
            .collect::<Result<Vec<L>, _>>()?;

        Ok(Self::promote_from(B::from_vec(lanes)))
    }

    /// Wraps an existing buffer.
    ///
    /// `byte_offset` must be `0`. `length` defaults to the buffer capacity.
    ///
    /// # Errors
    ///
    /// - [`RangeError::NonZeroOffset`] for any other offset.
    /// - [`RangeError::LengthExceedsBuffer`] when `length` exceeds the
    ///   buffer capacity.
    pub fn from_buffer(buffer: B, byte_offset: usize, length: Option<usize>) -> Result<Self, VecError> {
        if byte_offset != 0 {
            return Err(RangeError::NonZeroOffset {
                offset: byte_offset,
            }
            .into());
        }

        let capacity = buffer.capacity();
        let length = length.unwrap_or(capacity);

        if length > capacity {
            return Err(RangeError::LengthExceedsBuffer { length, capacity }.into());
        }

        Ok(Self::from_parts(buffer, length))
    }

    /// Takes ownership of a same-lane buffer; every slot becomes an element.
    pub fn promote_from(buffer: B) -> Self {
        let length = buffer.capacity();
        Self::from_parts(buffer, length)
    }

    /// Releases the buffer, including the slots past `len`.
    pub fn into_buffer(self) -> B {
        self.buffer
    }

    // =========================================================================
    // Capacity
    // =========================================================================

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Reallocates to exactly `capacity` slots. Not amortized.
    ///
    /// # Errors
    ///
    /// - [`RangeError::CapacityBelowLength`] if `capacity < len`.
    /// - [`VecError::Sealed`] if the capacity would change on a sealed
    ///   vector.
    /// - [`RangeError`] if allocation fails.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), VecError> {
        check_length(capacity)?;

        if capacity < self.length {
            return Err(RangeError::CapacityBelowLength {
                capacity,
                length: self.length,
            }
            .into());
        }

        if capacity == self.capacity() {
            return Ok(());
        }

        self.ensure_mutable()?;
        self.reallocate(capacity)
    }

    /// [`TypedVec::set_capacity`] with a dynamic argument converted by
    /// `ToIndex`.
    ///
    /// # Errors
    ///
    /// [`RangeError::InvalidIndex`] for negative or too large values,
    /// [`VecError::Coercion`] for big integers, otherwise as
    /// [`TypedVec::set_capacity`].
    pub fn set_capacity_value(&mut self, capacity: &Value) -> Result<(), VecError> {
        let capacity = value_to_index(capacity)?;
        self.set_capacity(capacity)
    }

    /// Grows the capacity to at least `demand` slots.
    ///
    /// The new capacity is `max(capacity * 2, demand)`, capped at
    /// `2^53 − 1`. Does nothing when the capacity already suffices.
    ///
    /// # Errors
    ///
    /// - [`RangeError::LengthOverflow`] if `demand` exceeds `2^53 − 1`.
    /// - [`VecError::Sealed`] if growth is needed on a sealed vector.
    /// - [`RangeError`] if allocation fails.
    pub fn ensure_capacity(&mut self, demand: usize) -> Result<(), VecError> {
        check_length(demand)?;

        let capacity = self.capacity();
        if demand <= capacity {
            return Ok(());
        }

        self.ensure_mutable()?;
        self.grow_to(demand, capacity)
    }

    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, demand: usize, capacity: usize) -> Result<(), VecError> {
        let target = capacity.saturating_mul(2).max(demand).min(MAX_LENGTH);
        self.reallocate(target)
    }

    /// Reallocates to `len` slots.
    ///
    /// # Errors
    ///
    /// As [`TypedVec::set_capacity`].
    pub fn shrink_to_fit(&mut self) -> Result<(), VecError> {
        self.set_capacity(self.length)
    }

    /// Moves the elements into a buffer of exactly `capacity` slots: in
    /// place when the buffer supports it, otherwise allocate, copy the live
    /// prefix, zeroize the vacated buffer and swap.
    fn reallocate(&mut self, capacity: usize) -> Result<(), VecError> {
        let old_capacity = self.capacity();

        if self.buffer.try_transfer(capacity)? {
            // Transfer keeps every old slot, stale tail included
            self.buffer.zeroize_range(self.length.min(capacity)..capacity);

            tracing::trace!(
                lane = L::KIND.name(),
                from = old_capacity,
                to = capacity,
                strategy = "transfer",
                "typed vec reallocated"
            );
            return Ok(());
        }

        let mut new_buffer = self.buffer.try_allocate(capacity)?;
        let kept = self.length.min(capacity);
        new_buffer.as_mut_slice()[..kept].copy_from_slice(&self.buffer.as_slice()[..kept]);

        zeroize_slice(self.buffer.as_mut_slice());
        self.buffer = new_buffer;

        tracing::trace!(
            lane = L::KIND.name(),
            from = old_capacity,
            to = capacity,
            strategy = "copy",
            "typed vec reallocated"
        );

        Ok(())
    }

    // =========================================================================
    // Length
    // =========================================================================

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Resizes the vector. New elements are zero; removed elements are
    /// zeroized.
    ///
    /// # Errors
    ///
    /// - [`VecError::Sealed`] if the length would change on a sealed vector.
    /// - [`RangeError`] if `length` exceeds `2^53 − 1` or allocation fails.
    pub fn set_length(&mut self, length: usize) -> Result<(), VecError> {
        check_length(length)?;

        let old_length = self.length;
        if length == old_length {
            return Ok(());
        }

        self.ensure_mutable()?;

        if length > old_length {
            self.ensure_capacity(length)?;
            self.buffer.zeroize_range(old_length..length);
        } else {
            self.buffer.zeroize_range(length..old_length);
        }

        self.length = length;
        Ok(())
    }

    /// [`TypedVec::set_length`] with a dynamic argument converted by
    /// `ToIndex`.
    ///
    /// # Errors
    ///
    /// [`RangeError::InvalidIndex`] for negative or too large values,
    /// [`VecError::Coercion`] for big integers, otherwise as
    /// [`TypedVec::set_length`].
    pub fn set_length_value(&mut self, length: &Value) -> Result<(), VecError> {
        let length = value_to_index(length)?;
        self.set_length(length)
    }

    /// Length in bytes.
    #[inline]
    pub fn byte_length(&self) -> usize {
        self.length * L::BYTES_PER_ELEMENT
    }

    /// Offset of the first element in the buffer. Always `0`.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        0
    }

    /// Width of one element in bytes.
    #[inline]
    pub fn bytes_per_element(&self) -> usize {
        L::BYTES_PER_ELEMENT
    }

    /// Type tag (`"Int8Vec"`, `"Float64Vec"`, …).
    #[inline]
    pub fn tag(&self) -> &'static str {
        L::KIND.vec_tag()
    }

    // =========================================================================
    // Elements
    // =========================================================================

    /// Element at `index`, or `None` past `len`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<L> {
        self.as_slice().get(index).copied()
    }

    /// Converts `value` and writes it at `index`.
    ///
    /// The conversion runs first; writes past `len` are then dropped
    /// silently. Allowed on sealed vectors.
    ///
    /// # Errors
    ///
    /// [`VecError::Coercion`] if `value` cannot be converted.
    pub fn set<V: ToLane<L>>(&mut self, index: usize, value: V) -> Result<(), VecError> {
        let lane = value.to_lane()?;

        if let Some(slot) = self.as_mut_slice().get_mut(index) {
            *slot = lane;
        }

        Ok(())
    }

    /// Element at `index` counted from the start, or from the end when
    /// negative.
    pub fn at(&self, index: isize) -> Option<L> {
        let index = if index >= 0 {
            index.unsigned_abs()
        } else {
            self.length.checked_sub(index.unsigned_abs())?
        };

        self.get(index)
    }

    /// [`TypedVec::at`] with a dynamic argument: truncated toward zero, `NaN`
    /// and `-0` read as `0`, infinities are out of range.
    ///
    /// # Errors
    ///
    /// [`VecError::Coercion`] for big integers.
    pub fn at_value(&self, index: &Value) -> Result<Option<L>, VecError> {
        let index = index.to_integer_or_infinity()?;

        if !index.is_finite() {
            return Ok(None);
        }

        let resolved = if index >= 0.0 {
            index
        } else {
            self.length as f64 + index
        };

        if resolved < 0.0 || resolved >= self.length as f64 {
            return Ok(None);
        }

        Ok(self.get(resolved as usize))
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The elements, `[0, len)`.
    #[inline]
    pub fn as_slice(&self) -> &[L] {
        &self.buffer.as_slice()[..self.length]
    }

    /// The elements, `[0, len)`, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [L] {
        let length = self.length;
        &mut self.buffer.as_mut_slice()[..length]
    }

    // =========================================================================
    // Sealing
    // =========================================================================

    /// Irreversibly fixes the length and capacity.
    pub fn seal(&mut self) {
        if self.extensibility == Extensibility::Sealed {
            return;
        }

        self.extensibility = Extensibility::Sealed;
        tracing::debug!(
            tag = L::KIND.vec_tag(),
            len = self.length,
            capacity = self.capacity(),
            "typed vec sealed"
        );
    }

    /// Returns `true` once [`TypedVec::seal`] ran.
    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.extensibility == Extensibility::Sealed
    }

    /// Current extensibility state.
    #[inline]
    pub fn extensibility(&self) -> Extensibility {
        self.extensibility
    }

    pub(crate) fn ensure_mutable(&self) -> Result<(), VecError> {
        match self.extensibility {
            Extensibility::Extensible => Ok(()),
            Extensibility::Sealed => Err(VecError::Sealed),
        }
    }

    /// Changes the injected test behaviour of the underlying buffer.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_buffer_behaviour(&mut self, behaviour: BufferBehaviour) {
        self.buffer.change_behaviour(behaviour);
    }

    /// Every slot of the underlying buffer, including those past `len`.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn capacity_slice(&self) -> &[L] {
        self.buffer.as_slice()
    }
}

/// Rejects lengths and capacities above `2^53 − 1`.
#[inline]
pub(crate) fn check_length(length: usize) -> Result<(), RangeError> {
    if length > MAX_LENGTH {
        return Err(RangeError::LengthOverflow {
            requested: length as u64,
        });
    }

    Ok(())
}

fn value_to_index(value: &Value) -> Result<usize, VecError> {
    let number = value.to_number()?;

    to_index(number)
        .and_then(|index| usize::try_from(index).ok())
        .ok_or_else(|| {
            RangeError::InvalidIndex {
                text: value.to_string(),
            }
            .into()
        })
}

/// Resolves a relative position into `[0, len]`: negative values count
/// from the end, `-∞` is `0`.
pub(crate) fn resolve_relative(position: f64, length: usize) -> usize {
    let position = to_integer_or_infinity(position);

    if position < 0.0 {
        let from_end = length as f64 + position;
        if from_end <= 0.0 { 0 } else { from_end as usize }
    } else if position >= length as f64 {
        length
    } else {
        position as usize
    }
}

impl<L: Lane, B: Buffer<L>> Default for TypedVec<L, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lane, B: Buffer<L>> Clone for TypedVec<L, B> {
    /// Copies every slot, so the clone keeps the capacity. The clone is
    /// extensible.
    fn clone(&self) -> Self {
        Self::from_parts(B::from_vec(self.buffer.as_slice().to_vec()), self.length)
    }
}

impl<L: Lane, B: Buffer<L>> PartialEq for TypedVec<L, B> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<L: Lane, B: Buffer<L>> Deref for TypedVec<L, B> {
    type Target = [L];

    fn deref(&self) -> &[L] {
        self.as_slice()
    }
}

impl<L: Lane, B: Buffer<L>> DerefMut for TypedVec<L, B> {
    fn deref_mut(&mut self) -> &mut [L] {
        self.as_mut_slice()
    }
}

impl<L: Lane, B: Buffer<L>> FromIterator<L> for TypedVec<L, B> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self::promote_from(B::from_vec(iter.into_iter().collect()))
    }
}

impl<L: Lane, B: Buffer<L>> fmt::Debug for TypedVec<L, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(L::KIND.vec_tag())
            .field("len", &self.length)
            .field("capacity", &self.capacity())
            .field("sealed", &self.is_sealed())
            .finish()
    }
}
