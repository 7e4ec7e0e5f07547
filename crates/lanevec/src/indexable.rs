// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lanevec_buffer::{Buffer, DefaultBuffer};
use lanevec_index::{IndexRouter, Indexable};
use lanevec_lane::{Lane, Value};
use lanevec_util::is_integral_number;

use crate::error::VecError;
use crate::typed_vec::TypedVec;

/// A typed vector behind keyed access: `"0"`, `"1"`, … reach the elements,
/// every other key is an ordinary field.
pub type VecRouter<L, B = DefaultBuffer<L>> = IndexRouter<TypedVec<L, B>>;

impl<L: Lane, B: Buffer<L>> TypedVec<L, B> {
    /// Position of a live element, if `index` designates one. `-0`,
    /// fractions and positions past `len` do not.
    fn live_position(&self, index: f64) -> Option<usize> {
        let live = is_integral_number(index)
            && !(index == 0.0 && index.is_sign_negative())
            && index >= 0.0
            && index < self.length as f64;

        live.then_some(index as usize)
    }

    /// Wraps this vector in a [`VecRouter`].
    pub fn into_router(self) -> VecRouter<L, B> {
        IndexRouter::new(self)
    }
}

impl<L: Lane, B: Buffer<L>> Indexable for TypedVec<L, B> {
    type Value = Value;
    type Error = VecError;

    fn has_element(&self, index: f64) -> bool {
        self.live_position(index).is_some()
    }

    fn get_element(&self, index: f64) -> Option<Value> {
        let position = self.live_position(index)?;
        self.get(position).map(Lane::into_value)
    }

    /// Converts first, so a bad value fails even for a dead index.
    fn set_element(&mut self, index: f64, value: Value) -> Result<(), VecError> {
        let lane = L::from_value(&value)?;

        if let Some(position) = self.live_position(index) {
            self.as_mut_slice()[position] = lane;
        }

        Ok(())
    }

    fn element_keys(&self) -> Vec<f64> {
        self.keys().map(|index| index as f64).collect()
    }

    fn is_extensible(&self) -> bool {
        !self.is_sealed()
    }

    fn prevent_extensions(&mut self) {
        self.seal();
    }
}
