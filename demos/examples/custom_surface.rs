// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided surface.
//!
//! Implement `PositionableSurface` for a tiny scene that stores one panel and
//! renders it at 2x zoom. Handles are arranged against the zoomed size, and
//! the host draws them from `ResizeOverlay::visuals`.
//!
//! Run:
//! - `cargo run -p understory_resize_demos --example custom_surface`

use kurbo::{Point, Size, Vec2};
use understory_resize::{
    HandleEvent, HandlePosition, OverlayConfig, PositionableSurface, ResizeOverlay,
};
use understory_resize_demos::{describe, init_logging};

/// A scene with a single absolutely positioned panel.
struct Scene {
    panel_offset: Point,
    panel_size: Size,
}

/// The only element in the scene.
#[derive(Copy, Clone, Debug)]
struct Panel;

impl PositionableSurface for Scene {
    type Target = Panel;

    fn has_absolute_placement(&self, _: Panel) -> bool {
        true
    }

    fn size(&self, _: Panel) -> Size {
        self.panel_size
    }

    fn set_size(&mut self, _: Panel, size: Size) {
        self.panel_size = size;
    }

    fn offset(&self, _: Panel) -> Point {
        self.panel_offset
    }

    fn set_offset(&mut self, _: Panel, offset: Point) {
        self.panel_offset = offset;
    }

    fn min_size(&self, _: Panel) -> (Option<f64>, Option<f64>) {
        (Some(40.0), Some(24.0))
    }
}

const ZOOM: f64 = 2.0;

fn main() {
    init_logging();

    let mut scene = Scene {
        panel_offset: Point::new(10.0, 10.0),
        panel_size: Size::new(100.0, 50.0),
    };
    let config = OverlayConfig::default()
        .with_handle_thickness(8.0)
        .with_handle_opacity(0.6)
        .with_handle_color(peniko::color::palette::css::DODGER_BLUE);

    let mut overlay = match ResizeOverlay::attach(&scene, Panel, config) {
        Ok(overlay) => overlay,
        Err(err) => {
            eprintln!("cannot attach: {err}");
            return;
        }
    };

    // Drive the bottom-right handle directly, as a host with its own hit
    // testing would.
    let handle = overlay.handle_mut(HandlePosition::BottomRight);
    let mut events: Vec<HandleEvent> = vec![handle.begin_drag(Point::new(0.0, 0.0))];
    events.extend(handle.drag_to(Point::new(12.0, 6.0)));
    events.extend(handle.drag_to(Point::new(-200.0, 6.0)));
    events.extend(handle.end_drag(Point::new(-200.0, 6.0)));

    for event in events {
        overlay.handle_event(&mut scene, event);
        if let HandleEvent::DragDelta { delta, .. } = event {
            print_state(&scene, delta);
        }
    }

    // The host renders at 2x, so the arranged size is the zoomed size.
    let zoomed = scene.panel_size * ZOOM;
    overlay.arrange(&mut scene, zoomed);
    for visual in overlay.visuals() {
        let [r, g, b, a] = visual.color.components;
        println!(
            "{:?}: {} cursor {:?} rgba({r:.2}, {g:.2}, {b:.2}, {a:.2})",
            visual.position,
            describe(visual.rect),
            visual.cursor
        );
    }
}

fn print_state(scene: &Scene, delta: Vec2) {
    println!(
        "after ({}, {}): panel at {:?}, size {}x{}",
        delta.x, delta.y, scene.panel_offset, scene.panel_size.width, scene.panel_size.height
    );
}
