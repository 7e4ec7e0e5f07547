// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::CoercionError;
use crate::lane::Lane;
use crate::value::Value;

/// Anything that can be written into a lane of type `L`.
///
/// Native lane values pass through unchanged; dynamic [`Value`]s go
/// through [`Lane::from_value`]. Mutators on typed vectors are generic over
/// this trait so the same code path serves typed and dynamic callers.
pub trait ToLane<L: Lane> {
    /// Converts `self` into a lane value.
    ///
    /// # Errors
    ///
    /// Returns [`CoercionError`] when the conversion is a type error.
    fn to_lane(&self) -> Result<L, CoercionError>;
}

impl<L: Lane> ToLane<L> for L {
    #[inline(always)]
    fn to_lane(&self) -> Result<L, CoercionError> {
        Ok(*self)
    }
}

impl<L: Lane> ToLane<L> for Value {
    #[inline]
    fn to_lane(&self) -> Result<L, CoercionError> {
        L::from_value(self)
    }
}
