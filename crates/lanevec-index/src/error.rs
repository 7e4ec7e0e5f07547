// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for lanevec-index.

use thiserror::Error;

/// Errors reported by [`IndexRouter`](crate::IndexRouter) operations.
///
/// Every variant except [`RouterError::Host`] is a type error of the
/// property protocol. Host errors carry whatever the host's
/// `set_element` reported (typically a value coercion failure).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError<E> {
    /// The descriptor carries both a value or writability and an accessor.
    #[error("property descriptor cannot both specify accessors and a value or writable attribute")]
    InvalidDescriptor,

    /// A define request that the property cannot honour.
    #[error("cannot define property {key:?}")]
    NotDefinable {
        /// The rejected key.
        key: String,
    },

    /// The property is a valid element or a non-configurable field.
    #[error("cannot delete property {key:?}")]
    NotDeletable {
        /// The rejected key.
        key: String,
    },

    /// A new field on a sealed router.
    #[error("cannot add property {key:?}, object is not extensible")]
    NotExtensible {
        /// The rejected key.
        key: String,
    },

    /// Assignment to a non-writable field.
    #[error("cannot assign to read only property {key:?}")]
    ReadOnly {
        /// The rejected key.
        key: String,
    },

    /// The host rejected an element write.
    #[error(transparent)]
    Host(E),
}
