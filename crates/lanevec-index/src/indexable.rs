// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Capability contract of an array-like host.
///
/// Every `index` argument is the number parsed from a canonical numeric key
/// and may be any `f64`: non-safe integers, non-integers, `-0`, infinities
/// and `NaN` included.
///
/// Once the host stops being extensible, [`has_element`] and
/// [`element_keys`] must return stable results.
///
/// [`has_element`]: Indexable::has_element
/// [`element_keys`]: Indexable::element_keys
pub trait Indexable {
    /// Element value handed across the contract.
    type Value: Clone;

    /// Error of a rejected element write.
    type Error;

    /// Returns `true` if `index` designates a live element.
    fn has_element(&self, index: f64) -> bool;

    /// Reads the element at `index`, or `None` when `has_element(index)` is
    /// `false`.
    fn get_element(&self, index: f64) -> Option<Self::Value>;

    /// Writes the element at `index`. Must do nothing (and succeed) when
    /// `index` is not a live element.
    ///
    /// # Errors
    ///
    /// Host-specific, e.g. the value cannot be converted to the element
    /// type.
    fn set_element(&mut self, index: f64, value: Self::Value) -> Result<(), Self::Error>;

    /// Every live index, without duplicates and consistent with
    /// [`Indexable::has_element`].
    fn element_keys(&self) -> Vec<f64>;

    /// Returns `false` once the host has stopped accepting new elements.
    /// A router wrapping such a host starts sealed.
    fn is_extensible(&self) -> bool {
        true
    }

    /// Called once when the router owning this host becomes sealed, after the
    /// element keys have been materialized.
    fn prevent_extensions(&mut self) {}
}
