// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::Edges;

/// Error returned when a handle or overlay cannot be built.
///
/// Both kinds are raised only at construction time. Drag handling never fails.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeError {
    /// The edge pattern is not one of the eight legal handle positions.
    ///
    /// Carries the offending bit pattern.
    InvalidPosition(Edges),
    /// The target's container does not place children at absolute offsets.
    NotAbsolutelyPositioned,
}

impl fmt::Debug for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(edges) => {
                write!(f, "InvalidPosition({:#06b})", edges.bits())
            }
            Self::NotAbsolutelyPositioned => f.write_str("NotAbsolutelyPositioned"),
        }
    }
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition(edges) => write!(
                f,
                "edge pattern {:#06b} is not a valid handle position",
                edges.bits()
            ),
            Self::NotAbsolutelyPositioned => {
                f.write_str("resize target must be a child of an absolutely positioned surface")
            }
        }
    }
}

impl core::error::Error for ResizeError {}
