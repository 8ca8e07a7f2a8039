// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`PositionableSurface`] for tests, demos, and headless hosts.
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use understory_resize::canvas::Canvas;
//! use understory_resize::{HandlePosition, OverlayConfig, ResizeOverlay};
//!
//! let mut canvas = Canvas::new();
//! let button = canvas.insert(Rect::new(20.0, 20.0, 120.0, 60.0));
//!
//! let mut overlay = ResizeOverlay::attach(&canvas, button, OverlayConfig::default()).unwrap();
//! overlay.arrange_from_target(&mut canvas);
//! overlay.apply_drag(&mut canvas, HandlePosition::BottomRight, Vec2::new(10.0, 5.0));
//!
//! assert_eq!(canvas.rect(button), Some(Rect::new(20.0, 20.0, 130.0, 65.0)));
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::{HandlePosition, PositionableSurface};

/// Identifier for an element on a [`Canvas`].
///
/// A slot index plus a generation; removing an element makes its id stale and
/// a stale id never aliases a later element in the same slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(u32, u32);

impl ElementId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// How an element's container lays it out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Placed at an explicit left/top offset.
    #[default]
    Absolute,
    /// Placed by a flow layout; offsets are not under the element's control.
    Flow,
}

/// Geometry of one canvas element.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Left/top offset within the canvas.
    pub offset: Point,
    /// Width and height.
    pub size: Size,
    /// Declared minimum width, if any.
    pub min_width: Option<f64>,
    /// Declared minimum height, if any.
    pub min_height: Option<f64>,
    /// How the element's container places it.
    pub placement: Placement,
    /// Handle rectangles last placed on this element, in element-local coordinates.
    pub handles: [Option<Rect>; HandlePosition::COUNT],
}

impl Element {
    fn new(rect: Rect, placement: Placement) -> Self {
        Self {
            offset: rect.origin(),
            size: rect.size(),
            min_width: None,
            min_height: None,
            placement,
            handles: [None; HandlePosition::COUNT],
        }
    }

    /// Bounds in canvas coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.size)
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// A free-positioning surface holding elements by [`ElementId`].
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl Canvas {
    /// Create an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an absolutely placed element covering `rect`.
    ///
    /// # Panics
    ///
    /// Panics if the canvas would need more than `u32::MAX` slots.
    pub fn insert(&mut self, rect: Rect) -> ElementId {
        self.insert_with(Element::new(rect, Placement::Absolute))
    }

    /// Add an element whose container uses flow layout.
    ///
    /// Overlays refuse to attach to these.
    ///
    /// # Panics
    ///
    /// Panics if the canvas would need more than `u32::MAX` slots.
    pub fn insert_flow(&mut self, size: Size) -> ElementId {
        self.insert_with(Element::new(
            Rect::from_origin_size(Point::ZERO, size),
            Placement::Flow,
        ))
    }

    fn insert_with(&mut self, element: Element) -> ElementId {
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.element = Some(element);
            ElementId(idx, slot.generation)
        } else {
            let idx = slot_index(self.slots.len());
            self.slots.push(Slot {
                generation: 1,
                element: Some(element),
            });
            ElementId(idx, 1)
        }
    }

    /// Remove an element, returning its last geometry.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let element = slot.element.take()?;
        self.free.push(id.0);
        Some(element)
    }

    /// Returns `true` if `id` names a live element.
    #[must_use]
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// The element named by `id`.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation == id.1 {
            slot.element.as_ref()
        } else {
            None
        }
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation == id.1 {
            slot.element.as_mut()
        } else {
            None
        }
    }

    /// Bounds of `id` in canvas coordinates.
    #[must_use]
    pub fn rect(&self, id: ElementId) -> Option<Rect> {
        self.get(id).map(Element::rect)
    }

    /// Declare a minimum width and height for `id`.
    pub fn set_min_size(&mut self, id: ElementId, min_width: Option<f64>, min_height: Option<f64>) {
        if let Some(element) = self.get_mut(id) {
            element.min_width = min_width;
            element.min_height = min_height;
        }
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.element.is_some()).count()
    }

    /// Returns `true` if the canvas holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PositionableSurface for Canvas {
    type Target = ElementId;

    fn has_absolute_placement(&self, target: ElementId) -> bool {
        self.get(target)
            .is_some_and(|e| e.placement == Placement::Absolute)
    }

    fn size(&self, target: ElementId) -> Size {
        self.get(target).map_or(Size::ZERO, |e| e.size)
    }

    fn set_size(&mut self, target: ElementId, size: Size) {
        if let Some(element) = self.get_mut(target) {
            element.size = size;
        }
    }

    fn offset(&self, target: ElementId) -> Point {
        self.get(target).map_or(Point::ZERO, |e| e.offset)
    }

    fn set_offset(&mut self, target: ElementId, offset: Point) {
        if let Some(element) = self.get_mut(target) {
            element.offset = offset;
        }
    }

    fn min_size(&self, target: ElementId) -> (Option<f64>, Option<f64>) {
        self.get(target)
            .map_or((None, None), |e| (e.min_width, e.min_height))
    }

    fn place_handle(&mut self, target: ElementId, position: HandlePosition, rect: Rect) {
        if let Some(element) = self.get_mut(target) {
            element.handles[position.index()] = Some(rect);
        }
    }
}

fn slot_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("canvas slot index {len} exceeds u32::MAX"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_read_back() {
        let mut canvas = Canvas::new();
        assert!(canvas.is_empty());
        let id = canvas.insert(Rect::new(10.0, 20.0, 110.0, 70.0));

        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.offset(id), Point::new(10.0, 20.0));
        assert_eq!(canvas.size(id), Size::new(100.0, 50.0));
        assert!(canvas.has_absolute_placement(id));
        assert_eq!(canvas.min_size(id), (None, None));
    }

    #[test]
    fn slot_index_accepts_the_last_u32() {
        assert_eq!(slot_index(u32::MAX as usize), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "exceeds u32::MAX")]
    fn slot_index_overflow_panics() {
        let _ = slot_index(u32::MAX as usize + 1);
    }

    #[test]
    fn flow_children_are_not_absolutely_placed() {
        let mut canvas = Canvas::new();
        let id = canvas.insert_flow(Size::new(40.0, 20.0));
        assert!(!canvas.has_absolute_placement(id));
    }

    #[test]
    fn removed_ids_go_stale() {
        let mut canvas = Canvas::new();
        let old = canvas.insert(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(canvas.remove(old).is_some());
        assert!(!canvas.is_alive(old));
        assert_eq!(canvas.remove(old), None);

        let new = canvas.insert(Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_ne!(old, new);
        assert!(canvas.is_alive(new));
        assert!(!canvas.has_absolute_placement(old));
        assert_eq!(canvas.size(old), Size::ZERO);

        canvas.set_size(old, Size::new(99.0, 99.0));
        assert_eq!(canvas.size(new), Size::new(20.0, 20.0));
    }

    #[test]
    fn placed_handles_are_recorded() {
        let mut canvas = Canvas::new();
        let id = canvas.insert(Rect::new(0.0, 0.0, 10.0, 10.0));
        let rect = Rect::new(-5.0, -5.0, 5.0, 5.0);
        canvas.place_handle(id, HandlePosition::TopLeft, rect);
        assert_eq!(
            canvas.get(id).unwrap().handles[HandlePosition::TopLeft.index()],
            Some(rect)
        );
    }
}
