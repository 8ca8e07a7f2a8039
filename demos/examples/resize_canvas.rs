// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize a button on a canvas.
//!
//! Script a few pointer gestures against the in-memory `Canvas` and print the
//! button's bounds after each one.
//!
//! Run:
//! - `cargo run -p understory_resize_demos --example resize_canvas`

use kurbo::{Point, Rect};
use understory_resize::canvas::Canvas;
use understory_resize::{OverlayConfig, ResizeOverlay};
use understory_resize_demos::{describe, init_logging};

fn main() {
    init_logging();

    let mut canvas = Canvas::new();
    let button = canvas.insert(Rect::new(40.0, 40.0, 160.0, 80.0));
    canvas.set_min_size(button, Some(60.0), None);

    let mut overlay = match ResizeOverlay::attach(&canvas, button, OverlayConfig::default()) {
        Ok(overlay) => overlay,
        Err(err) => {
            eprintln!("cannot resize button: {err}");
            return;
        }
    };
    overlay.arrange_from_target(&mut canvas);
    println!(
        "button {}, min size {}x{}",
        describe(canvas.rect(button).unwrap_or_default()),
        overlay.min_size().width,
        overlay.min_size().height
    );

    // (label, press, moves...)
    let gestures: [(&str, Point, &[Point]); 4] = [
        (
            "bottom-right outward",
            Point::new(160.0, 80.0),
            &[Point::new(170.0, 90.0), Point::new(190.0, 110.0)],
        ),
        (
            "top edge down past the minimum",
            Point::new(115.0, 40.0),
            &[Point::new(115.0, 80.0), Point::new(115.0, 200.0)],
        ),
        (
            "left edge inward",
            Point::new(40.0, 55.0),
            &[Point::new(70.0, 55.0)],
        ),
        (
            "empty space",
            Point::new(100.0, 60.0),
            &[Point::new(0.0, 0.0)],
        ),
    ];

    for (label, press, moves) in gestures {
        let Some(grabbed) = overlay.pointer_down(&mut canvas, press) else {
            println!("{label}: no handle under {press:?}");
            continue;
        };
        let mut last = press;
        for &pos in moves {
            overlay.pointer_move(&mut canvas, pos);
            last = pos;
        }
        overlay.pointer_up(&mut canvas, last);
        overlay.arrange_from_target(&mut canvas);

        println!(
            "{label} ({grabbed:?}): button {}",
            describe(canvas.rect(button).unwrap_or_default())
        );
    }

    let flow_child = canvas.insert_flow(kurbo::Size::new(80.0, 24.0));
    if let Err(err) = ResizeOverlay::attach(&canvas, flow_child, OverlayConfig::default()) {
        println!("flow child: {err}");
    }
}
