// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Numeric-key routing for array-like objects.
//!
//! An [`IndexRouter`] wraps a host implementing [`Indexable`] and gives it
//! keyed access with string property keys. Every key is classified first:
//!
//! - A *canonical numeric index* is a string that is exactly the shortest
//!   round-trip rendering of some number (`"0"`, `"-1"`, `"0.5"`,
//!   `"1e+21"`, `"NaN"`, `"Infinity"`), plus the special key `"-0"`.
//!   These keys are routed to the host.
//! - Every other key (`"01"`, `"+1"`, `"1.0"`, `"1e21"`, `"foo"`) is an
//!   ordinary field stored on the router.
//!
//! # Example
//!
//! ```rust
//! use lanevec_index::{CanonicalKey, classify};
//!
//! assert_eq!(classify("7"), Some(CanonicalKey::Index(7)));
//! assert_eq!(classify("-0"), Some(CanonicalKey::NegativeZero));
//! assert_eq!(classify("0.5"), Some(CanonicalKey::Number(0.5)));
//! assert_eq!(classify("01"), None);
//! assert_eq!(classify("toString"), None);
//! ```

#![warn(missing_docs)]

mod cache;
mod descriptor;
mod error;
mod indexable;
mod key;
mod router;

#[cfg(test)]
mod tests;

pub use cache::{add_non_index_cache, is_known_non_index};
pub use descriptor::{PropertyDescriptor, PropertyValue};
pub use error::RouterError;
pub use indexable::Indexable;
pub use key::{CanonicalKey, OwnKey, classify, parse_index};
pub use router::{DerivedObject, Extensibility, IndexRouter};
