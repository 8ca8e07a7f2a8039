// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resize overlay: eight handles bound to one target.

use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, trace};
use peniko::Color;

use crate::{
    Edges, Handle, HandleEvent, HandlePosition, OverlayConfig, PositionableSurface, ResizeCursor,
    ResizeError,
};

/// Placement rectangle of the handle at `position` for a target of `size`.
///
/// The rectangle is `thickness` × `thickness` in target-local coordinates and
/// straddles the target's boundary: its center sits exactly on the edge
/// midpoint or corner that `position` names.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_resize::{HandlePosition, handle_rect};
///
/// let rect = handle_rect(HandlePosition::Right, Size::new(100.0, 40.0), 10.0);
/// assert_eq!(rect, Rect::new(95.0, 15.0, 105.0, 25.0));
/// ```
#[must_use]
pub fn handle_rect(position: HandlePosition, size: Size, thickness: f64) -> Rect {
    let half = thickness / 2.0;
    let edges = position.edges();
    let x = if edges.contains(Edges::LEFT) {
        -half
    } else if edges.contains(Edges::RIGHT) {
        size.width - half
    } else {
        size.width / 2.0 - half
    };
    let y = if edges.contains(Edges::TOP) {
        -half
    } else if edges.contains(Edges::BOTTOM) {
        size.height - half
    } else {
        size.height / 2.0 - half
    };
    Rect::from_origin_size((x, y), (thickness, thickness))
}

/// What the presentation layer needs to draw one handle.
#[derive(Clone, Copy, Debug)]
pub struct HandleVisual {
    /// Which handle this is.
    pub position: HandlePosition,
    /// Placement in target-local coordinates, from the last arrange pass.
    pub rect: Rect,
    /// Cursor to show while hovering the handle.
    pub cursor: ResizeCursor,
    /// Fill color with the configured opacity applied.
    pub color: Color,
}

/// Hit-test order: corners take precedence where rectangles overlap on small targets.
const HIT_ORDER: [HandlePosition; HandlePosition::COUNT] = [
    HandlePosition::TopLeft,
    HandlePosition::TopRight,
    HandlePosition::BottomLeft,
    HandlePosition::BottomRight,
    HandlePosition::Top,
    HandlePosition::Bottom,
    HandlePosition::Left,
    HandlePosition::Right,
];

/// Eight resize handles bound to a single target on a [`PositionableSurface`].
///
/// The overlay owns its handles and their placement, and turns handle drags
/// into size and offset changes on the target. The surface stays the single
/// source of truth for the target's geometry: every drag reads the current
/// size and offset from it and writes the result back before returning.
///
/// ## Resize rules
///
/// A drag delta is first collapsed onto the dragged handle's
/// [axes](Handle::resolve_delta), then applied per edge:
///
/// - Top: the height shrinks by `dy` and the top offset moves by `dy`, as long
///   as the new height stays above the minimum. Otherwise the height is set to
///   the minimum and the offset is left alone.
/// - Bottom: the height grows by `dy`, never below the minimum. The offset
///   does not move.
/// - Left and Right follow the same rules with width and the left offset.
///
/// Corner handles apply one vertical and one horizontal rule in the same drag.
///
/// ## Minimum size
///
/// Cached at [`attach`](Self::attach): the target's declared minimum width and
/// height where present, otherwise three times the handle thickness. A
/// non-finite declared minimum counts as absent and a negative one as zero.
#[derive(Clone, Debug)]
pub struct ResizeOverlay<T> {
    target: T,
    config: OverlayConfig,
    handles: [Handle; HandlePosition::COUNT],
    rects: [Rect; HandlePosition::COUNT],
    min_size: Size,
    active: Option<HandlePosition>,
}

impl<T: Copy> ResizeOverlay<T> {
    /// Attach an overlay to `target` on `surface`.
    ///
    /// Fails with [`ResizeError::NotAbsolutelyPositioned`] if the target's
    /// container does not support absolute placement. Handle construction
    /// errors are propagated and no overlay is produced.
    pub fn attach<S>(surface: &S, target: T, config: OverlayConfig) -> Result<Self, ResizeError>
    where
        S: PositionableSurface<Target = T> + ?Sized,
    {
        if !surface.has_absolute_placement(target) {
            return Err(ResizeError::NotAbsolutelyPositioned);
        }
        let handles = build_handles()?;

        let thickness = config.handle_thickness();
        let fallback = 3.0 * thickness;
        let (min_width, min_height) = surface.min_size(target);
        let min_size = Size::new(
            declared_min(min_width).unwrap_or(fallback),
            declared_min(min_height).unwrap_or(fallback),
        );
        debug!(
            "attached resize overlay: thickness {thickness}, min size {}x{}",
            min_size.width, min_size.height
        );

        let size = surface.size(target);
        let rects = HandlePosition::ALL.map(|position| handle_rect(position, size, thickness));
        Ok(Self {
            target,
            config,
            handles,
            rects,
            min_size,
            active: None,
        })
    }

    /// The element this overlay resizes.
    pub fn target(&self) -> T {
        self.target
    }

    /// The configuration the overlay was attached with.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Minimum width and height the target is kept at.
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// The handle at `position`.
    pub fn handle(&self, position: HandlePosition) -> &Handle {
        &self.handles[position.index()]
    }

    /// Mutable access to the handle at `position`, for hosts that route
    /// pointer input to handles themselves.
    ///
    /// Feed the events it returns to [`handle_event`](Self::handle_event).
    pub fn handle_mut(&mut self, position: HandlePosition) -> &mut Handle {
        &mut self.handles[position.index()]
    }

    /// All handles, in [`HandlePosition::ALL`] order.
    pub fn handles(&self) -> &[Handle; HandlePosition::COUNT] {
        &self.handles
    }

    /// Placement of the handle at `position` from the last arrange pass.
    pub fn handle_rect(&self, position: HandlePosition) -> Rect {
        self.rects[position.index()]
    }

    /// Placements of all handles, in [`HandlePosition::ALL`] order.
    pub fn handle_rects(&self) -> &[Rect; HandlePosition::COUNT] {
        &self.rects
    }

    /// The handle currently being dragged through the pointer methods.
    pub fn active_handle(&self) -> Option<HandlePosition> {
        self.active
    }

    /// Lay out the handles for a finalized target size.
    ///
    /// Call this whenever the host finalizes the overlay's bounds. `final_size`
    /// must be the arranged size, after any zoom or transform adjustment, not
    /// the intrinsic content size. Each rectangle is handed to
    /// [`PositionableSurface::place_handle`].
    pub fn arrange<S>(&mut self, surface: &mut S, final_size: Size)
    where
        S: PositionableSurface<Target = T> + ?Sized,
    {
        let thickness = self.config.handle_thickness();
        for position in HandlePosition::ALL {
            let rect = handle_rect(position, final_size, thickness);
            self.rects[position.index()] = rect;
            surface.place_handle(self.target, position, rect);
        }
    }

    /// [`arrange`](Self::arrange) using the target's current size on `surface`.
    pub fn arrange_from_target<S>(&mut self, surface: &mut S)
    where
        S: PositionableSurface<Target = T> + ?Sized,
    {
        let size = surface.size(self.target);
        self.arrange(surface, size);
    }

    /// Draw data for every handle, in [`HandlePosition::ALL`] order.
    pub fn visuals(&self) -> impl Iterator<Item = HandleVisual> + '_ {
        let color = self.config.effective_color();
        self.handles.iter().map(move |handle| HandleVisual {
            position: handle.position(),
            rect: self.rects[handle.position().index()],
            cursor: handle.cursor(),
            color,
        })
    }

    /// Find the handle under `local`, a point in target-local coordinates.
    pub fn hit_test(&self, local: Point) -> Option<HandlePosition> {
        HIT_ORDER
            .into_iter()
            .find(|position| self.rects[position.index()].contains(local))
    }

    /// Process one handle event.
    ///
    /// Deltas are applied to the target immediately, so the target's geometry
    /// is consistent between events. Drag start and completion change nothing.
    pub fn handle_event<S>(&mut self, surface: &mut S, event: HandleEvent)
    where
        S: PositionableSurface<Target = T> + ?Sized,
    {
        match event {
            HandleEvent::DragStarted { position, origin } => {
                trace!("drag started on {position:?} at ({}, {})", origin.x, origin.y);
            }
            HandleEvent::DragDelta { position, delta } => {
                self.apply_drag(surface, position, delta);
            }
            HandleEvent::DragCompleted { position, total } => {
                trace!("drag completed on {position:?}, total ({}, {})", total.x, total.y);
            }
        }
    }

    /// Resize the target for a drag of `delta` on the handle at `position`.
    ///
    /// See the [type-level docs](Self) for the rules.
    pub fn apply_drag<S>(&mut self, surface: &mut S, position: HandlePosition, delta: Vec2)
    where
        S: PositionableSurface<Target = T> + ?Sized,
    {
        let delta = self.handles[position.index()].resolve_delta(delta);
        let edges = position.edges();
        let min = self.min_size;
        let mut size = surface.size(self.target);
        let mut offset = surface.offset(self.target);

        if edges.contains(Edges::TOP) {
            let height = size.height - delta.y;
            if height > min.height {
                offset.y += delta.y;
                size.height = height;
            } else {
                trace!("top drag clamped at min height {}", min.height);
                size.height = min.height;
            }
        } else if edges.contains(Edges::BOTTOM) {
            size.height = (size.height + delta.y).max(min.height);
        }

        if edges.contains(Edges::LEFT) {
            let width = size.width - delta.x;
            if width > min.width {
                offset.x += delta.x;
                size.width = width;
            } else {
                trace!("left drag clamped at min width {}", min.width);
                size.width = min.width;
            }
        } else if edges.contains(Edges::RIGHT) {
            size.width = (size.width + delta.x).max(min.width);
        }

        trace!(
            "{position:?} drag ({}, {}): size {}x{}, offset ({}, {})",
            delta.x, delta.y, size.width, size.height, offset.x, offset.y
        );
        surface.set_size(self.target, size);
        surface.set_offset(self.target, offset);
    }

    /// Pointer pressed at `pos`, in surface coordinates.
    ///
    /// A drag already in progress is completed first, whether or not the new
    /// press lands on a handle. If a handle is under the pointer its drag
    /// begins and its position is returned.
    pub fn pointer_down<S>(&mut self, surface: &mut S, pos: Point) -> Option<HandlePosition>
    where
        S: PositionableSurface<Target = T> + ?Sized,
    {
        self.pointer_up(surface, pos);
        let local = pos - surface.offset(self.target).to_vec2();
        let position = self.hit_test(local)?;

        let event = self.handles[position.index()].begin_drag(pos);
        self.active = Some(position);
        self.handle_event(surface, event);
        Some(position)
    }

    /// Pointer moved to `pos`, in surface coordinates.
    ///
    /// Returns `true` if a handle drag consumed the move.
    pub fn pointer_move<S>(&mut self, surface: &mut S, pos: Point) -> bool
    where
        S: PositionableSurface<Target = T> + ?Sized,
    {
        let Some(position) = self.active else {
            return false;
        };
        if let Some(event) = self.handles[position.index()].drag_to(pos) {
            self.handle_event(surface, event);
        }
        true
    }

    /// Pointer released at `pos`, in surface coordinates.
    ///
    /// Returns the handle whose drag ended, if any.
    pub fn pointer_up<S>(&mut self, surface: &mut S, pos: Point) -> Option<HandlePosition>
    where
        S: PositionableSurface<Target = T> + ?Sized,
    {
        let position = self.active.take()?;
        if let Some(event) = self.handles[position.index()].end_drag(pos) {
            self.handle_event(surface, event);
        }
        Some(position)
    }
}

/// A usable declared minimum: non-finite values count as undeclared, negative ones as zero.
fn declared_min(min: Option<f64>) -> Option<f64> {
    min.filter(|m| m.is_finite()).map(|m| m.max(0.0))
}

fn build_handles() -> Result<[Handle; HandlePosition::COUNT], ResizeError> {
    let [top, bottom, left, right, top_left, top_right, bottom_left, bottom_right] =
        HandlePosition::ALL.map(|position| Handle::new(position.edges(), position.default_axes()));
    Ok([
        top?,
        bottom?,
        left?,
        right?,
        top_left?,
        top_right?,
        bottom_left?,
        bottom_right?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DragAxes;

    /// A single element on an absolutely positioned surface.
    #[derive(Debug)]
    struct Single {
        absolute: bool,
        size: Size,
        offset: Point,
        min: (Option<f64>, Option<f64>),
        placed: usize,
    }

    impl Single {
        fn new(width: f64, height: f64) -> Self {
            Self {
                absolute: true,
                size: Size::new(width, height),
                offset: Point::ZERO,
                min: (None, None),
                placed: 0,
            }
        }
    }

    impl PositionableSurface for Single {
        type Target = ();

        fn has_absolute_placement(&self, (): ()) -> bool {
            self.absolute
        }

        fn size(&self, (): ()) -> Size {
            self.size
        }

        fn set_size(&mut self, (): (), size: Size) {
            self.size = size;
        }

        fn offset(&self, (): ()) -> Point {
            self.offset
        }

        fn set_offset(&mut self, (): (), offset: Point) {
            self.offset = offset;
        }

        fn min_size(&self, (): ()) -> (Option<f64>, Option<f64>) {
            self.min
        }

        fn place_handle(&mut self, (): (), _: HandlePosition, _: Rect) {
            self.placed += 1;
        }
    }

    fn overlay(surface: &Single) -> ResizeOverlay<()> {
        ResizeOverlay::attach(surface, (), OverlayConfig::default()).unwrap()
    }

    #[test]
    fn attach_rejects_flow_layout() {
        let mut surface = Single::new(50.0, 50.0);
        surface.absolute = false;
        let err = ResizeOverlay::attach(&surface, (), OverlayConfig::default()).unwrap_err();
        assert_eq!(err, ResizeError::NotAbsolutelyPositioned);
    }

    #[test]
    fn attach_builds_fixed_axis_table() {
        let surface = Single::new(50.0, 50.0);
        let overlay = overlay(&surface);
        for (i, handle) in overlay.handles().iter().enumerate() {
            assert_eq!(handle.position(), HandlePosition::ALL[i]);
        }
        use HandlePosition::*;
        assert_eq!(overlay.handle(Top).axes(), DragAxes::VERTICAL);
        assert_eq!(overlay.handle(Bottom).axes(), DragAxes::VERTICAL);
        assert_eq!(overlay.handle(Left).axes(), DragAxes::HORIZONTAL);
        assert_eq!(overlay.handle(Right).axes(), DragAxes::HORIZONTAL);
        for corner in [TopLeft, TopRight, BottomLeft, BottomRight] {
            assert_eq!(overlay.handle(corner).axes(), DragAxes::ALL);
        }
    }

    #[test]
    fn min_size_defaults_to_three_thicknesses() {
        let surface = Single::new(50.0, 50.0);
        assert_eq!(overlay(&surface).min_size(), Size::new(30.0, 30.0));

        let thin = ResizeOverlay::attach(
            &surface,
            (),
            OverlayConfig::default().with_handle_thickness(4.0),
        )
        .unwrap();
        assert_eq!(thin.min_size(), Size::new(12.0, 12.0));
    }

    #[test]
    fn declared_min_size_wins_per_axis() {
        let mut surface = Single::new(50.0, 50.0);
        surface.min = (Some(5.0), None);
        assert_eq!(overlay(&surface).min_size(), Size::new(5.0, 30.0));
    }

    #[test]
    fn handle_rects_match_layout_table() {
        let (w, h, t) = (120.0, 60.0, 10.0);
        let size = Size::new(w, h);
        let expect = |x: f64, y: f64| Rect::new(x, y, x + t, y + t);
        use HandlePosition::*;
        assert_eq!(handle_rect(Top, size, t), expect(w / 2.0 - t / 2.0, -t / 2.0));
        assert_eq!(handle_rect(Bottom, size, t), expect(w / 2.0 - t / 2.0, h - t / 2.0));
        assert_eq!(handle_rect(Left, size, t), expect(-t / 2.0, h / 2.0 - t / 2.0));
        assert_eq!(handle_rect(Right, size, t), expect(w - t / 2.0, h / 2.0 - t / 2.0));
        assert_eq!(handle_rect(TopLeft, size, t), expect(-t / 2.0, -t / 2.0));
        assert_eq!(handle_rect(TopRight, size, t), expect(w - t / 2.0, -t / 2.0));
        assert_eq!(handle_rect(BottomLeft, size, t), expect(-t / 2.0, h - t / 2.0));
        assert_eq!(handle_rect(BottomRight, size, t), expect(w - t / 2.0, h - t / 2.0));
    }

    #[test]
    fn arrange_places_every_handle() {
        let mut surface = Single::new(50.0, 50.0);
        let mut overlay = overlay(&surface);
        overlay.arrange(&mut surface, Size::new(200.0, 100.0));

        assert_eq!(surface.placed, HandlePosition::COUNT);
        assert_eq!(
            overlay.handle_rect(HandlePosition::BottomRight),
            Rect::new(195.0, 95.0, 205.0, 105.0)
        );
    }

    #[test]
    fn bottom_drag_grows_height() {
        let mut surface = Single::new(100.0, 100.0);
        surface.min = (Some(20.0), Some(20.0));
        let mut overlay = overlay(&surface);

        overlay.apply_drag(&mut surface, HandlePosition::Bottom, Vec2::new(0.0, 5.0));
        assert_eq!(surface.size, Size::new(100.0, 105.0));
        assert_eq!(surface.offset, Point::ZERO);
    }

    #[test]
    fn top_drag_commits_above_minimum() {
        let mut surface = Single::new(100.0, 100.0);
        surface.min = (Some(20.0), Some(20.0));
        let mut overlay = overlay(&surface);

        overlay.apply_drag(&mut surface, HandlePosition::Top, Vec2::new(0.0, 30.0));
        assert_eq!(surface.size.height, 70.0);
        assert_eq!(surface.offset.y, 30.0);
    }

    #[test]
    fn top_drag_clamps_without_moving_offset() {
        let mut surface = Single::new(100.0, 100.0);
        surface.min = (Some(20.0), Some(20.0));
        let mut overlay = overlay(&surface);

        overlay.apply_drag(&mut surface, HandlePosition::Top, Vec2::new(0.0, 90.0));
        assert_eq!(surface.size.height, 20.0);
        assert_eq!(surface.offset.y, 0.0);
    }

    #[test]
    fn edge_handles_ignore_the_cross_axis() {
        let mut surface = Single::new(100.0, 100.0);
        let mut overlay = overlay(&surface);

        overlay.apply_drag(&mut surface, HandlePosition::Right, Vec2::new(10.0, 40.0));
        assert_eq!(surface.size, Size::new(110.0, 100.0));
        overlay.apply_drag(&mut surface, HandlePosition::Bottom, Vec2::new(40.0, 10.0));
        assert_eq!(surface.size, Size::new(110.0, 110.0));
        assert_eq!(surface.offset, Point::ZERO);
    }

    #[test]
    fn hit_test_prefers_corners() {
        let surface = Single::new(12.0, 12.0);
        let overlay = overlay(&surface);
        // Top spans x 1..11, TopLeft spans x -5..5; both cover (3, 0).
        assert_eq!(
            overlay.hit_test(Point::new(3.0, 0.0)),
            Some(HandlePosition::TopLeft)
        );
        assert_eq!(
            overlay.hit_test(Point::new(8.0, 0.0)),
            Some(HandlePosition::TopRight)
        );
        assert_eq!(overlay.hit_test(Point::new(6.0, 6.0)), None);
    }

    #[test]
    fn visuals_carry_cursor_and_effective_color() {
        let surface = Single::new(40.0, 40.0);
        let overlay = ResizeOverlay::attach(
            &surface,
            (),
            OverlayConfig::default().with_handle_opacity(0.25),
        )
        .unwrap();
        let visuals: alloc::vec::Vec<_> = overlay.visuals().collect();
        assert_eq!(visuals.len(), HandlePosition::COUNT);
        assert_eq!(visuals[4].position, HandlePosition::TopLeft);
        assert_eq!(visuals[4].cursor, ResizeCursor::NorthWestSouthEast);
        assert_eq!(visuals[4].rect, Rect::new(-5.0, -5.0, 5.0, 5.0));
        assert_eq!(visuals[4].color.components[3], 0.25);
    }
}
