// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for lanevec-lane.

use thiserror::Error;

/// A value could not be represented in the target lane.
///
/// Every variant is a type error: the input has the wrong kind for the
/// lane, not a wrong magnitude (magnitudes always wrap or clamp).
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CoercionError {
    /// A big integer was written to a number lane.
    #[error("cannot convert a BigInt value to a number")]
    BigIntToNumber,

    /// A value of the given type was written to a big-integer lane.
    #[error("cannot convert {type_name} to a BigInt")]
    NotBigInt {
        /// Type name of the rejected value (`"number"`, `"undefined"`, …).
        type_name: &'static str,
    },

    /// A string written to a big-integer lane is not an integer literal.
    #[error("cannot parse {text:?} as a BigInt")]
    BigIntSyntax {
        /// The rejected text.
        text: String,
    },
}
