// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle positions, drag axes, and cursor hints.

use crate::ResizeError;

bitflags::bitflags! {
    /// Raw edge flags describing where a handle sits on its target.
    ///
    /// This is the unvalidated bit pattern. A legal handle position carries at
    /// most one vertical flag ([`TOP`](Self::TOP) or [`BOTTOM`](Self::BOTTOM))
    /// and at most one horizontal flag ([`LEFT`](Self::LEFT) or
    /// [`RIGHT`](Self::RIGHT)); use [`HandlePosition::from_edges`] to validate.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// The top edge.
        const TOP    = 0b0001;
        /// The bottom edge.
        const BOTTOM = 0b0010;
        /// The left edge.
        const LEFT   = 0b0100;
        /// The right edge.
        const RIGHT  = 0b1000;
        /// The top-left corner.
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        /// The top-right corner.
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        /// The bottom-left corner.
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        /// The bottom-right corner.
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

bitflags::bitflags! {
    /// Directions a handle may be dragged in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DragAxes: u8 {
        /// Toward negative y.
        const UP    = 0b0001;
        /// Toward positive y.
        const DOWN  = 0b0010;
        /// Toward negative x.
        const LEFT  = 0b0100;
        /// Toward positive x.
        const RIGHT = 0b1000;
        /// Both vertical directions.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        /// Both horizontal directions.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Every direction.
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

/// One of the eight legal handle positions around a target.
///
/// Each position is the validated form of an [`Edges`] pattern: edges carry a
/// single flag, corners the union of one vertical and one horizontal flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandlePosition {
    /// Middle of the top edge.
    Top,
    /// Middle of the bottom edge.
    Bottom,
    /// Middle of the left edge.
    Left,
    /// Middle of the right edge.
    Right,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl HandlePosition {
    /// Number of handle positions.
    pub const COUNT: usize = 8;

    /// Every position, in slot order (see [`HandlePosition::index`]).
    pub const ALL: [Self; Self::COUNT] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Validate an edge pattern.
    ///
    /// Fails with [`ResizeError::InvalidPosition`] when `edges` asserts both
    /// vertical flags, both horizontal flags, no flag at all, or any bit
    /// outside the four edge flags.
    ///
    /// ```
    /// use understory_resize::{Edges, HandlePosition, ResizeError};
    ///
    /// assert_eq!(
    ///     HandlePosition::from_edges(Edges::TOP | Edges::LEFT),
    ///     Ok(HandlePosition::TopLeft)
    /// );
    /// assert_eq!(
    ///     HandlePosition::from_edges(Edges::TOP | Edges::BOTTOM),
    ///     Err(ResizeError::InvalidPosition(Edges::TOP | Edges::BOTTOM))
    /// );
    /// ```
    pub fn from_edges(edges: Edges) -> Result<Self, ResizeError> {
        if edges.bits() & !Edges::all().bits() != 0 {
            return Err(ResizeError::InvalidPosition(edges));
        }
        let vertical = edges & (Edges::TOP | Edges::BOTTOM);
        let horizontal = edges & (Edges::LEFT | Edges::RIGHT);
        let position = match (vertical, horizontal) {
            (v, h) if v == Edges::TOP && h.is_empty() => Self::Top,
            (v, h) if v == Edges::BOTTOM && h.is_empty() => Self::Bottom,
            (v, h) if v.is_empty() && h == Edges::LEFT => Self::Left,
            (v, h) if v.is_empty() && h == Edges::RIGHT => Self::Right,
            (v, h) if v == Edges::TOP && h == Edges::LEFT => Self::TopLeft,
            (v, h) if v == Edges::TOP && h == Edges::RIGHT => Self::TopRight,
            (v, h) if v == Edges::BOTTOM && h == Edges::LEFT => Self::BottomLeft,
            (v, h) if v == Edges::BOTTOM && h == Edges::RIGHT => Self::BottomRight,
            _ => return Err(ResizeError::InvalidPosition(edges)),
        };
        Ok(position)
    }

    /// The edge flags for this position.
    #[must_use]
    pub const fn edges(self) -> Edges {
        match self {
            Self::Top => Edges::TOP,
            Self::Bottom => Edges::BOTTOM,
            Self::Left => Edges::LEFT,
            Self::Right => Edges::RIGHT,
            Self::TopLeft => Edges::TOP_LEFT,
            Self::TopRight => Edges::TOP_RIGHT,
            Self::BottomLeft => Edges::BOTTOM_LEFT,
            Self::BottomRight => Edges::BOTTOM_RIGHT,
        }
    }

    /// Slot of this position in [`HandlePosition::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the four corner positions.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    /// The fixed axis set a handle at this position is built with.
    ///
    /// Top and bottom edges move vertically, left and right edges move
    /// horizontally, and corners move in every direction.
    #[must_use]
    pub const fn default_axes(self) -> DragAxes {
        match self {
            Self::Top | Self::Bottom => DragAxes::VERTICAL,
            Self::Left | Self::Right => DragAxes::HORIZONTAL,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight => DragAxes::ALL,
        }
    }

    /// The resize cursor a host should show over this position.
    #[must_use]
    pub const fn cursor(self) -> ResizeCursor {
        match self {
            Self::Top | Self::Bottom => ResizeCursor::NorthSouth,
            Self::Left | Self::Right => ResizeCursor::EastWest,
            Self::TopLeft | Self::BottomRight => ResizeCursor::NorthWestSouthEast,
            Self::TopRight | Self::BottomLeft => ResizeCursor::NorthEastSouthWest,
        }
    }
}

impl TryFrom<Edges> for HandlePosition {
    type Error = ResizeError;

    fn try_from(edges: Edges) -> Result<Self, Self::Error> {
        Self::from_edges(edges)
    }
}

impl From<HandlePosition> for Edges {
    fn from(position: HandlePosition) -> Self {
        position.edges()
    }
}

/// Cursor hint for a handle.
///
/// The names follow the double-headed arrow each cursor shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeCursor {
    /// Vertical double arrow.
    NorthSouth,
    /// Horizontal double arrow.
    EastWest,
    /// Diagonal arrow from top-left to bottom-right.
    NorthWestSouthEast,
    /// Diagonal arrow from top-right to bottom-left.
    NorthEastSouthWest,
}
