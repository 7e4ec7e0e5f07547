// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// A partial property definition, as passed to
/// [`IndexRouter::define_own_property`](crate::IndexRouter::define_own_property).
///
/// Unset attributes are `None`. Accessors are only tracked by presence:
/// routers never store accessor properties, they only reject them.
///
/// # Example
///
/// ```rust
/// use lanevec_index::PropertyDescriptor;
///
/// let descriptor = PropertyDescriptor::with_value(1.5).writable(true);
/// assert_eq!(descriptor.value, Some(1.5));
/// assert_eq!(descriptor.writable, Some(true));
/// assert_eq!(descriptor.enumerable, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor<V> {
    /// `value`, if supplied.
    pub value: Option<V>,
    /// `writable`, if supplied.
    pub writable: Option<bool>,
    /// `enumerable`, if supplied.
    pub enumerable: Option<bool>,
    /// `configurable`, if supplied.
    pub configurable: Option<bool>,
    /// `get` was supplied (even as an absent function).
    pub has_getter: bool,
    /// `set` was supplied (even as an absent function).
    pub has_setter: bool,
}

impl<V> Default for PropertyDescriptor<V> {
    fn default() -> Self {
        Self {
            value: None,
            writable: None,
            enumerable: None,
            configurable: None,
            has_getter: false,
            has_setter: false,
        }
    }
}

impl<V> PropertyDescriptor<V> {
    /// Descriptor with no attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Descriptor supplying only `value`.
    pub fn with_value(value: V) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Sets `writable`.
    pub fn writable(mut self, writable: bool) -> Self {
        self.writable = Some(writable);
        self
    }

    /// Sets `enumerable`.
    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    /// Sets `configurable`.
    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    /// Marks a getter as supplied.
    pub fn getter(mut self) -> Self {
        self.has_getter = true;
        self
    }

    /// Marks a setter as supplied.
    pub fn setter(mut self) -> Self {
        self.has_setter = true;
        self
    }

    /// Returns `true` if a getter or setter was supplied.
    pub fn is_accessor(&self) -> bool {
        self.has_getter || self.has_setter
    }

    /// Returns `true` if a value or writability was supplied.
    pub fn is_data(&self) -> bool {
        self.value.is_some() || self.writable.is_some()
    }
}

/// A complete data property as stored or reported by a router.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyValue<V> {
    /// Current value.
    pub value: V,
    /// Whether assignments are accepted.
    pub writable: bool,
    /// Whether the property is listed by enumeration helpers.
    pub enumerable: bool,
    /// Whether the property may be deleted or redefined.
    pub configurable: bool,
}

impl<V> PropertyValue<V> {
    /// Writable, enumerable and configurable property holding `value`.
    pub fn open(value: V) -> Self {
        Self {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }
}
