// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use indexmap::IndexMap;

use crate::descriptor::{PropertyDescriptor, PropertyValue};
use crate::error::RouterError;
use crate::indexable::Indexable;
use crate::key::{OwnKey, element_order, parse_index};

type RouterResult<T, H> = Result<T, RouterError<<H as Indexable>::Error>>;

/// Whether a router (and its host) may still change shape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Extensibility {
    /// New fields may be added; the host may change its element set.
    #[default]
    Extensible,
    /// Irrevocable: no new fields, element keys frozen.
    Sealed,
}

/// Keyed access over an [`Indexable`] host.
///
/// Canonical numeric keys are routed to the host; every other key is an
/// ordinary field stored on the router, in insertion order.
///
/// # Example
///
/// ```rust
/// use lanevec_index::{IndexRouter, Indexable};
///
/// struct Squares(usize);
///
/// impl Indexable for Squares {
///     type Value = f64;
///     type Error = core::convert::Infallible;
///
///     fn has_element(&self, index: f64) -> bool {
///         index.fract() == 0.0 && index >= 0.0 && index < self.0 as f64
///             && !(index == 0.0 && index.is_sign_negative())
///     }
///
///     fn get_element(&self, index: f64) -> Option<f64> {
///         self.has_element(index).then(|| index * index)
///     }
///
///     fn set_element(&mut self, _: f64, _: f64) -> Result<(), Self::Error> {
///         Ok(())
///     }
///
///     fn element_keys(&self) -> Vec<f64> {
///         (0..self.0).map(|i| i as f64).collect()
///     }
/// }
///
/// let mut router = IndexRouter::new(Squares(3));
/// router.set("name", 1.0).unwrap();
///
/// assert_eq!(router.get("2"), Some(4.0));
/// assert_eq!(router.get("-0"), None);
/// assert_eq!(router.get("name"), Some(1.0));
///
/// let keys: Vec<String> = router.own_keys().iter().map(ToString::to_string).collect();
/// assert_eq!(keys, ["0", "1", "2", "name"]);
/// ```
pub struct IndexRouter<H: Indexable> {
    host: H,
    fields: IndexMap<String, PropertyValue<H::Value>>,
    extensibility: Extensibility,
    materialized: Vec<f64>,
}

impl<H> fmt::Debug for IndexRouter<H>
where
    H: Indexable + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexRouter")
            .field("host", &self.host)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("extensibility", &self.extensibility)
            .finish_non_exhaustive()
    }
}

impl<H> IndexRouter<H>
where
    H: Indexable,
    H::Value: Default,
{
    /// Wraps `host` with no fields.
    ///
    /// The router starts extensible, unless the host reports
    /// [`Indexable::is_extensible`] as `false`: then the element keys are
    /// materialized right away and the router starts sealed.
    pub fn new(host: H) -> Self {
        let mut router = Self {
            host,
            fields: IndexMap::new(),
            extensibility: Extensibility::Extensible,
            materialized: Vec::new(),
        };

        if !router.host.is_extensible() {
            router.materialize();
        }

        router
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The wrapped host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwraps the host, dropping every field.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Current extensibility state.
    pub fn extensibility(&self) -> Extensibility {
        self.extensibility
    }

    /// Returns `true` until [`IndexRouter::prevent_extensions`] runs.
    pub fn is_extensible(&self) -> bool {
        self.extensibility == Extensibility::Extensible
    }

    /// Element keys captured when the router was sealed, in enumeration
    /// order. Empty while extensible.
    pub fn materialized_keys(&self) -> &[f64] {
        &self.materialized
    }

    /// Existence check.
    pub fn has(&self, key: &str) -> bool {
        match parse_index(key) {
            Some(index) => self.host.has_element(index),
            None => self.fields.contains_key(key),
        }
    }

    /// Reads `key`. Numeric keys go straight to `get_element`.
    pub fn get(&self, key: &str) -> Option<H::Value> {
        match parse_index(key) {
            Some(index) => self.host.get_element(index),
            None => self.fields.get(key).map(|field| field.value.clone()),
        }
    }

    /// Reads `key` through `receiver`, an object that inherits from this
    /// router: the receiver's own fields shadow the router.
    pub fn get_via(&self, receiver: &DerivedObject<H::Value>, key: &str) -> Option<H::Value> {
        match receiver.get_own(key) {
            Some(value) => Some(value.clone()),
            None => self.get(key),
        }
    }

    /// Describes `key` as an own property.
    ///
    /// Live elements are reported as writable, enumerable and configurable
    /// data properties.
    pub fn get_own_property(&self, key: &str) -> Option<PropertyValue<H::Value>> {
        match parse_index(key) {
            Some(index) => {
                if !self.host.has_element(index) {
                    return None;
                }

                let value = self.host.get_element(index).unwrap_or_default();
                Some(PropertyValue::open(value))
            }
            None => self.fields.get(key).cloned(),
        }
    }

    /// Direct assignment.
    ///
    /// Numeric keys always reach `set_element`, whether or not the index is
    /// live; the host decides what an invalid index means.
    ///
    /// # Errors
    ///
    /// - [`RouterError::Host`] if the host rejects the element write.
    /// - [`RouterError::ReadOnly`] for a non-writable field.
    /// - [`RouterError::NotExtensible`] for a new field on a sealed router.
    pub fn set(&mut self, key: &str, value: H::Value) -> RouterResult<(), H> {
        if let Some(index) = parse_index(key) {
            return self
                .host
                .set_element(index, value)
                .map_err(RouterError::Host);
        }

        match self.fields.get_mut(key) {
            Some(field) if !field.writable => Err(RouterError::ReadOnly {
                key: key.to_owned(),
            }),
            Some(field) => {
                field.value = value;
                Ok(())
            }
            None => {
                self.ensure_extensible(key)?;
                self.fields
                    .insert(key.to_owned(), PropertyValue::open(value));
                Ok(())
            }
        }
    }

    /// Assignment through `receiver`, an object that inherits from this
    /// router.
    ///
    /// The router's elements are never mutated: a numeric key is dropped
    /// silently when the index is not live and otherwise becomes an own
    /// field of the receiver.
    ///
    /// # Errors
    ///
    /// [`RouterError::ReadOnly`] when the router holds a non-writable field
    /// named `key`.
    pub fn set_via(
        &self,
        receiver: &mut DerivedObject<H::Value>,
        key: &str,
        value: H::Value,
    ) -> RouterResult<(), H> {
        match parse_index(key) {
            Some(index) => {
                if self.host.has_element(index) {
                    receiver.insert(key, value);
                }
                Ok(())
            }
            None => {
                if receiver.get_own(key).is_none()
                    && self.fields.get(key).is_some_and(|field| !field.writable)
                {
                    return Err(RouterError::ReadOnly {
                        key: key.to_owned(),
                    });
                }
                receiver.insert(key, value);
                Ok(())
            }
        }
    }

    /// Defines or updates `key` from a partial descriptor.
    ///
    /// For numeric keys every attribute check happens before the host is
    /// consulted: a request that is non-configurable, non-enumerable,
    /// non-writable or carries accessors fails without calling
    /// `has_element`. A supplied value (even the default one) is then
    /// written with `set_element`; attribute-only requests write nothing.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidDescriptor`] when data and accessor fields are
    ///   mixed.
    /// - [`RouterError::NotDefinable`] for a rejected attribute combination,
    ///   a dead index, or a change to a non-configurable field.
    /// - [`RouterError::NotExtensible`] for a new field on a sealed router.
    /// - [`RouterError::Host`] if the host rejects the element write.
    pub fn define_own_property(
        &mut self,
        key: &str,
        descriptor: PropertyDescriptor<H::Value>,
    ) -> RouterResult<(), H> {
        if descriptor.is_accessor() && descriptor.is_data() {
            return Err(RouterError::InvalidDescriptor);
        }

        match parse_index(key) {
            Some(index) => self.define_element(key, index, descriptor),
            None => self.define_field(key, descriptor),
        }
    }

    fn define_element(
        &mut self,
        key: &str,
        index: f64,
        descriptor: PropertyDescriptor<H::Value>,
    ) -> RouterResult<(), H> {
        let rejected = descriptor.configurable == Some(false)
            || descriptor.enumerable == Some(false)
            || descriptor.is_accessor()
            || descriptor.writable == Some(false);

        if rejected || !self.host.has_element(index) {
            return Err(RouterError::NotDefinable {
                key: key.to_owned(),
            });
        }

        if let Some(value) = descriptor.value {
            self.host
                .set_element(index, value)
                .map_err(RouterError::Host)?;
        }

        Ok(())
    }

    fn define_field(
        &mut self,
        key: &str,
        descriptor: PropertyDescriptor<H::Value>,
    ) -> RouterResult<(), H> {
        // Fields are data properties only
        if descriptor.is_accessor() {
            return Err(RouterError::NotDefinable {
                key: key.to_owned(),
            });
        }

        let Some(field) = self.fields.get_mut(key) else {
            self.ensure_extensible(key)?;
            let field = PropertyValue {
                value: descriptor.value.unwrap_or_default(),
                writable: descriptor.writable.unwrap_or(false),
                enumerable: descriptor.enumerable.unwrap_or(false),
                configurable: descriptor.configurable.unwrap_or(false),
            };
            self.fields.insert(key.to_owned(), field);
            return Ok(());
        };

        if !field.configurable {
            let widens = descriptor.configurable == Some(true)
                || descriptor
                    .enumerable
                    .is_some_and(|enumerable| enumerable != field.enumerable)
                || (!field.writable
                    && (descriptor.writable == Some(true) || descriptor.value.is_some()));

            if widens {
                return Err(RouterError::NotDefinable {
                    key: key.to_owned(),
                });
            }
        }

        if let Some(value) = descriptor.value {
            field.value = value;
        }
        if let Some(writable) = descriptor.writable {
            field.writable = writable;
        }
        if let Some(enumerable) = descriptor.enumerable {
            field.enumerable = enumerable;
        }
        if let Some(configurable) = descriptor.configurable {
            field.configurable = configurable;
        }

        Ok(())
    }

    /// Deletes `key`.
    ///
    /// Deleting a numeric key succeeds (and does nothing) only when the
    /// index is not live.
    ///
    /// # Errors
    ///
    /// [`RouterError::NotDeletable`] for a live element or a
    /// non-configurable field.
    pub fn delete(&mut self, key: &str) -> RouterResult<(), H> {
        if let Some(index) = parse_index(key) {
            if self.host.has_element(index) {
                return Err(RouterError::NotDeletable {
                    key: key.to_owned(),
                });
            }
            return Ok(());
        }

        if self.fields.get(key).is_some_and(|field| !field.configurable) {
            return Err(RouterError::NotDeletable {
                key: key.to_owned(),
            });
        }

        self.fields.shift_remove(key);
        Ok(())
    }

    /// Every own key: element keys (array indices ascending, then other
    /// numbers ascending) followed by field names in insertion order.
    ///
    /// Duplicates reported by the host are kept. Once sealed the element
    /// keys come from the snapshot taken by
    /// [`IndexRouter::prevent_extensions`].
    pub fn own_keys(&self) -> Vec<OwnKey> {
        let elements = match self.extensibility {
            Extensibility::Extensible => {
                let mut keys = self.host.element_keys();
                keys.sort_by(element_order);
                keys
            }
            Extensibility::Sealed => self.materialized.clone(),
        };

        elements
            .into_iter()
            .map(OwnKey::Element)
            .chain(self.fields.keys().cloned().map(OwnKey::Field))
            .collect()
    }

    /// Seals the router. Irreversible and idempotent.
    ///
    /// Every current element key is materialized first, then the host is
    /// told through [`Indexable::prevent_extensions`]. Reads keep routing
    /// through `get_element`.
    pub fn prevent_extensions(&mut self) {
        if self.extensibility == Extensibility::Sealed {
            return;
        }

        self.materialize();
        self.host.prevent_extensions();
    }

    fn materialize(&mut self) {
        let mut keys = self.host.element_keys();
        keys.sort_by(element_order);
        self.materialized = keys;
        self.extensibility = Extensibility::Sealed;

        tracing::debug!(
            elements = self.materialized.len(),
            fields = self.fields.len(),
            "router sealed"
        );
    }

    fn ensure_extensible(&self, key: &str) -> RouterResult<(), H> {
        match self.extensibility {
            Extensibility::Extensible => Ok(()),
            Extensibility::Sealed => Err(RouterError::NotExtensible {
                key: key.to_owned(),
            }),
        }
    }
}

/// An ordinary object whose prototype is an [`IndexRouter`].
///
/// Only stores own fields; lookups that miss fall back to the router via
/// [`IndexRouter::get_via`].
#[derive(Debug, Clone)]
pub struct DerivedObject<V> {
    fields: IndexMap<String, V>,
}

impl<V> Default for DerivedObject<V> {
    fn default() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }
}

impl<V> DerivedObject<V> {
    /// Object without own fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Own field `key`, if any.
    pub fn get_own(&self, key: &str) -> Option<&V> {
        self.fields.get(key)
    }

    /// Returns `true` if `key` is an own field.
    pub fn has_own(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Own field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn insert(&mut self, key: &str, value: V) {
        self.fields.insert(key.to_owned(), value);
    }
}
