// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize handles and the events they emit.

use kurbo::{Point, Vec2};

use crate::drag::DragGesture;
use crate::{DragAxes, Edges, HandlePosition, ResizeCursor, ResizeError};

/// A drag lifecycle event emitted by a [`Handle`].
///
/// Events are delivered to [`ResizeOverlay::handle_event`](crate::ResizeOverlay::handle_event)
/// in the order the pointer produced them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HandleEvent {
    /// A drag began on the handle at `position`.
    DragStarted {
        /// The handle being dragged.
        position: HandlePosition,
        /// Pointer position where the drag began.
        origin: Point,
    },
    /// The pointer moved by `delta` since the previous event of this drag.
    DragDelta {
        /// The handle being dragged.
        position: HandlePosition,
        /// Movement since the previous pointer position.
        delta: Vec2,
    },
    /// The drag on the handle at `position` ended.
    DragCompleted {
        /// The handle that was dragged.
        position: HandlePosition,
        /// Offset between the start and end of the drag.
        total: Vec2,
    },
}

impl HandleEvent {
    /// The handle this event came from.
    #[must_use]
    pub fn position(&self) -> HandlePosition {
        match *self {
            Self::DragStarted { position, .. }
            | Self::DragDelta { position, .. }
            | Self::DragCompleted { position, .. } => position,
        }
    }
}

/// One draggable resize handle.
///
/// A handle knows where it sits ([`HandlePosition`]) and which directions it
/// may move in ([`DragAxes`]). Both are fixed at construction. The only other
/// state is the pointer gesture in progress, if any.
#[derive(Clone, Debug)]
pub struct Handle {
    position: HandlePosition,
    axes: DragAxes,
    gesture: DragGesture,
}

impl Handle {
    /// Create a handle at `edges` that may be dragged along `axes`.
    ///
    /// Fails with [`ResizeError::InvalidPosition`] if `edges` is not one of the
    /// eight legal positions.
    ///
    /// ```
    /// use understory_resize::{DragAxes, Edges, Handle, HandlePosition};
    ///
    /// let handle = Handle::new(Edges::BOTTOM | Edges::RIGHT, DragAxes::ALL).unwrap();
    /// assert_eq!(handle.position(), HandlePosition::BottomRight);
    ///
    /// assert!(Handle::new(Edges::LEFT | Edges::RIGHT, DragAxes::HORIZONTAL).is_err());
    /// ```
    pub fn new(edges: Edges, axes: DragAxes) -> Result<Self, ResizeError> {
        let position = HandlePosition::from_edges(edges)?;
        Ok(Self {
            position,
            axes,
            gesture: DragGesture::default(),
        })
    }

    /// Where this handle sits on its target.
    #[must_use]
    pub fn position(&self) -> HandlePosition {
        self.position
    }

    /// The edge flags of [`Handle::position`].
    #[must_use]
    pub fn edges(&self) -> Edges {
        self.position.edges()
    }

    /// Directions this handle may be dragged in.
    #[must_use]
    pub fn axes(&self) -> DragAxes {
        self.axes
    }

    /// Cursor hint for this handle.
    #[must_use]
    pub fn cursor(&self) -> ResizeCursor {
        self.position.cursor()
    }

    /// Collapse a raw pointer delta onto the allowed axes.
    ///
    /// | Axes           | x            | y            |
    /// |----------------|--------------|--------------|
    /// | `UP`           | 0            | `min(0, dy)` |
    /// | `DOWN`         | 0            | `max(0, dy)` |
    /// | `LEFT`         | `min(0, dx)` | 0            |
    /// | `RIGHT`        | `max(0, dx)` | 0            |
    /// | `VERTICAL`     | 0            | `dy`         |
    /// | `HORIZONTAL`   | `dx`         | 0            |
    /// | `ALL`          | `dx`         | `dy`         |
    ///
    /// Any other axis combination resolves to zero.
    #[must_use]
    pub fn resolve_delta(&self, delta: Vec2) -> Vec2 {
        let axes = self.axes;
        if axes == DragAxes::ALL {
            delta
        } else if axes == DragAxes::VERTICAL {
            Vec2::new(0.0, delta.y)
        } else if axes == DragAxes::HORIZONTAL {
            Vec2::new(delta.x, 0.0)
        } else if axes == DragAxes::UP {
            Vec2::new(0.0, delta.y.min(0.0))
        } else if axes == DragAxes::DOWN {
            Vec2::new(0.0, delta.y.max(0.0))
        } else if axes == DragAxes::LEFT {
            Vec2::new(delta.x.min(0.0), 0.0)
        } else if axes == DragAxes::RIGHT {
            Vec2::new(delta.x.max(0.0), 0.0)
        } else {
            Vec2::ZERO
        }
    }

    /// Start dragging this handle from pointer position `origin`.
    pub fn begin_drag(&mut self, origin: Point) -> HandleEvent {
        self.gesture.begin(origin);
        HandleEvent::DragStarted {
            position: self.position,
            origin,
        }
    }

    /// Move the pointer to `pos` during a drag.
    ///
    /// Returns the movement since the previous pointer position, or `None` if
    /// this handle is not being dragged.
    pub fn drag_to(&mut self, pos: Point) -> Option<HandleEvent> {
        let delta = self.gesture.advance(pos)?;
        Some(HandleEvent::DragDelta {
            position: self.position,
            delta,
        })
    }

    /// Release the pointer at `pos`, ending the drag.
    ///
    /// Returns `None` if this handle is not being dragged.
    pub fn end_drag(&mut self, pos: Point) -> Option<HandleEvent> {
        let total = self.gesture.end(pos)?;
        Some(HandleEvent::DragCompleted {
            position: self.position,
            total,
        })
    }

    /// Returns `true` while this handle is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_active()
    }
}
