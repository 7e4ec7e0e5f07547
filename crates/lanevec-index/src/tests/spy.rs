// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Host that records every contract call.

use std::cell::RefCell;

use crate::Indexable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Call {
    Has(f64),
    Get(f64),
    Set(f64, i32),
    Keys,
    PreventExtensions,
}

#[derive(Debug, Default)]
pub(crate) struct SpyHost {
    /// Live indices, compared bitwise so `-0` and `+0` stay distinct.
    pub(crate) live: Vec<f64>,
    /// Every read returns this value.
    pub(crate) value: i32,
    /// `set_element` fails when set.
    pub(crate) reject_writes: bool,
    /// Reported through `is_extensible`.
    pub(crate) sealed: bool,
    pub(crate) calls: RefCell<Vec<Call>>,
}

impl SpyHost {
    pub(crate) fn with_live(live: &[f64]) -> Self {
        Self {
            live: live.to_vec(),
            value: 42,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn is_live(&self, index: f64) -> bool {
        self.live.iter().any(|k| k.to_bits() == index.to_bits())
    }
}

impl Indexable for SpyHost {
    type Value = i32;
    type Error = &'static str;

    fn has_element(&self, index: f64) -> bool {
        self.calls.borrow_mut().push(Call::Has(index));
        self.is_live(index)
    }

    fn get_element(&self, index: f64) -> Option<i32> {
        self.calls.borrow_mut().push(Call::Get(index));
        self.is_live(index).then_some(self.value)
    }

    fn set_element(&mut self, index: f64, value: i32) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(Call::Set(index, value));
        if self.reject_writes {
            return Err("rejected");
        }
        Ok(())
    }

    fn element_keys(&self) -> Vec<f64> {
        self.calls.borrow_mut().push(Call::Keys);
        self.live.clone()
    }

    fn is_extensible(&self) -> bool {
        !self.sealed
    }

    fn prevent_extensions(&mut self) {
        self.calls.borrow_mut().push(Call::PreventExtensions);
    }
}
