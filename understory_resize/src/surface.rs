// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::HandlePosition;

/// Host layout contract for a surface that places elements at absolute offsets.
///
/// The surface owns every element's geometry; a [`ResizeOverlay`](crate::ResizeOverlay)
/// reads the target's size and offset from here on each drag and writes the
/// result straight back. Nothing is cached on the overlay side.
///
/// `Target` is whatever key the host uses to name an element.
pub trait PositionableSurface {
    /// Key naming one element on the surface.
    type Target: Copy;

    /// Returns `true` if `target`'s container places it by absolute left/top
    /// offset rather than by flow layout.
    fn has_absolute_placement(&self, target: Self::Target) -> bool;

    /// Current width and height of `target`.
    fn size(&self, target: Self::Target) -> Size;

    /// Set the width and height of `target`.
    fn set_size(&mut self, target: Self::Target, size: Size);

    /// Absolute left/top offset of `target` within its container.
    fn offset(&self, target: Self::Target) -> Point;

    /// Set the absolute left/top offset of `target`.
    fn set_offset(&mut self, target: Self::Target, offset: Point);

    /// Declared minimum width and height of `target`, if any.
    fn min_size(&self, target: Self::Target) -> (Option<f64>, Option<f64>);

    /// Place the visual for the handle at `position` at `rect`.
    ///
    /// `rect` is in `target`-local coordinates. The default does nothing, for
    /// hosts that draw handles from [`ResizeOverlay::visuals`](crate::ResizeOverlay::visuals)
    /// instead.
    fn place_handle(&mut self, target: Self::Target, position: HandlePosition, rect: Rect) {
        let _ = (target, position, rect);
    }
}
