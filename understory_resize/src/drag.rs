// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gesture tracking: turn absolute pointer positions into per-move deltas.
//!
//! The overlay applies each delta directly to the target's live geometry, so
//! a gesture must report the movement since the previous pointer position,
//! never a running total.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_resize::drag::DragGesture;
//!
//! let mut gesture = DragGesture::default();
//! gesture.begin(Point::new(10.0, 20.0));
//!
//! assert_eq!(gesture.advance(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(gesture.advance(Point::new(16.0, 30.0)), Some(Vec2::new(1.0, 5.0)));
//!
//! // Ending reports the offset of the whole gesture.
//! assert_eq!(gesture.end(Point::new(16.0, 30.0)), Some(Vec2::new(6.0, 10.0)));
//! assert!(!gesture.is_active());
//! ```

use kurbo::{Point, Vec2};

/// Pointer state for one drag gesture.
#[derive(Debug, Clone, Default, Copy, PartialEq)]
pub struct DragGesture {
    origin: Option<Point>,
    last: Option<Point>,
}

impl DragGesture {
    /// Start a gesture at `pos`, discarding any gesture already in progress.
    pub fn begin(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Move the pointer to `pos`, returning the movement since the last position.
    ///
    /// Returns `None` when no gesture is active.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last.as_mut()?;
        let delta = pos - *last;
        *last = pos;
        Some(delta)
    }

    /// Finish the gesture at `pos`, returning its total offset from the origin.
    ///
    /// Returns `None` when no gesture is active.
    pub fn end(&mut self, pos: Point) -> Option<Vec2> {
        let origin = self.origin.take()?;
        self.last = None;
        Some(pos - origin)
    }

    /// Where the active gesture started.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}
