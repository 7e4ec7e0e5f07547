// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::iter::{Copied, Enumerate};
use core::ops::Range;
use core::slice;

use lanevec_buffer::Buffer;
use lanevec_lane::{Lane, ToLane};

use crate::error::{RangeError, VecError};
use crate::typed_vec::{TypedVec, resolve_relative};

impl<L: Lane, B: Buffer<L>> TypedVec<L, B> {
    /// Returns `true` if any element equals `value`, with `NaN` matching
    /// `NaN`.
    pub fn includes(&self, value: L) -> bool {
        self.as_slice().iter().any(|item| item.same_value_zero(&value))
    }

    /// First position of `value` at or after `from` (default `0`, negative
    /// counts from the end). Uses strict equality, so `NaN` is never found.
    pub fn index_of(&self, value: L, from: Option<isize>) -> Option<usize> {
        let start = resolve_relative(from.unwrap_or(0) as f64, self.length);

        self.as_slice()[start..]
            .iter()
            .position(|item| *item == value)
            .map(|offset| start + offset)
    }

    /// Last position of `value` at or before `from` (default `len − 1`,
    /// negative counts from the end).
    pub fn last_index_of(&self, value: L, from: Option<isize>) -> Option<usize> {
        let end = match from {
            None => self.length,
            Some(from) if from >= 0 => self.length.min(from.unsigned_abs().saturating_add(1)),
            Some(from) => self.length.checked_sub(from.unsigned_abs() - 1)?,
        };

        self.as_slice()[..end].iter().rposition(|item| *item == value)
    }

    /// Renders every element and joins them with `separator`.
    pub fn join(&self, separator: &str) -> String {
        let mut joined = String::new();

        for (index, item) in self.as_slice().iter().enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.push_str(&item.render());
        }

        joined
    }

    /// Sorts the elements numerically: `-0` before `+0`, `NaN` last.
    pub fn sort(&mut self) {
        self.as_mut_slice().sort_by(|a, b| a.lane_cmp(b));
    }

    /// Copies `[start, end)` into a new `Vec`. Negative positions count from
    /// the end; `end` defaults to `len`.
    pub fn slice(&self, start: isize, end: Option<isize>) -> Vec<L> {
        self.subarray(start, end).to_vec()
    }

    /// Borrows `[start, end)`, resolved like [`TypedVec::slice`].
    pub fn subarray(&self, start: isize, end: Option<isize>) -> &[L] {
        let range = self.relative_range(start, end);
        &self.as_slice()[range]
    }

    fn relative_range(&self, start: isize, end: Option<isize>) -> Range<usize> {
        let start = resolve_relative(start as f64, self.length);
        let end = end.map_or(self.length, |end| resolve_relative(end as f64, self.length));

        start..end.max(start)
    }

    /// Copies the elements with the one at `index` replaced by `value`.
    /// Negative `index` counts from the end.
    ///
    /// # Errors
    ///
    /// - [`VecError::Coercion`] if `value` cannot be converted (checked
    ///   first).
    /// - [`RangeError::IndexOutOfRange`] if `index` is outside
    ///   `[-len, len)`.
    pub fn with<V: ToLane<L>>(&self, index: isize, value: V) -> Result<Vec<L>, VecError> {
        let lane = value.to_lane()?;

        let resolved = if index >= 0 {
            Some(index.unsigned_abs())
        } else {
            self.length.checked_sub(index.unsigned_abs())
        };

        let Some(position) = resolved.filter(|position| *position < self.length) else {
            return Err(RangeError::IndexOutOfRange {
                index,
                length: self.length,
            }
            .into());
        };

        let mut copy = self.as_slice().to_vec();
        copy[position] = lane;

        Ok(copy)
    }

    /// Every live index, `0..len`.
    #[inline]
    pub fn keys(&self) -> Range<usize> {
        0..self.length
    }

    /// Every element, in order.
    #[inline]
    pub fn values(&self) -> Copied<slice::Iter<'_, L>> {
        self.as_slice().iter().copied()
    }

    /// Every `(index, element)` pair, in order.
    #[inline]
    pub fn entries(&self) -> Enumerate<Copied<slice::Iter<'_, L>>> {
        self.values().enumerate()
    }
}

impl<L: Lane, B: Buffer<L>> fmt::Display for TypedVec<L, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(","))
    }
}

impl<'a, L: Lane, B: Buffer<L>> IntoIterator for &'a TypedVec<L, B> {
    type Item = L;
    type IntoIter = Copied<slice::Iter<'a, L>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
