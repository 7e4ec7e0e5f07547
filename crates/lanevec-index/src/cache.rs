// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Process-wide set of names known not to be canonical numeric keys.
//!
//! Seeded with the property names of the base object every value inherits
//! from. Grows through [`add_non_index_cache`]; never shrinks.

use std::collections::HashSet;
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::key::classify;

const BASE_OBJECT_NAMES: [&str; 12] = [
    "constructor",
    "__defineGetter__",
    "__defineSetter__",
    "hasOwnProperty",
    "__lookupGetter__",
    "__lookupSetter__",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "toString",
    "valueOf",
    "__proto__",
    "toLocaleString",
];

static NON_INDEX_CACHE: LazyLock<RwLock<HashSet<String>>> = LazyLock::new(|| {
    RwLock::new(
        BASE_OBJECT_NAMES
            .iter()
            .map(|name| (*name).to_owned())
            .collect(),
    )
});

/// Returns `true` if `name` was registered as a non-index name.
pub fn is_known_non_index(name: &str) -> bool {
    NON_INDEX_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains(name)
}

/// Registers `name` as a known non-index name.
///
/// Names that are canonical numeric keys are ignored, so registration can
/// never change how a key is classified.
///
/// Returns `true` if the name was newly added.
///
/// ```rust
/// use lanevec_index::{add_non_index_cache, is_known_non_index};
///
/// assert!(is_known_non_index("toString"));
///
/// add_non_index_cache("-1");
/// assert!(!is_known_non_index("-1"));
/// ```
pub fn add_non_index_cache(name: &str) -> bool {
    if classify(name).is_some() {
        return false;
    }

    let added = NON_INDEX_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.to_owned());

    if added {
        tracing::trace!(name, "non-index cache grown");
    }

    added
}
