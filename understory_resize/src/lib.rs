// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_resize --heading-base-level=0

//! Understory Resize: a resize-handle overlay for absolutely positioned elements.
//!
//! Given one rectangular element placed on a free-positioning surface (a
//! canvas-like container that places children at explicit left/top offsets),
//! a [`ResizeOverlay`] surrounds it with eight square [`Handle`]s, one on each
//! edge midpoint and corner. Dragging a handle changes the element's width,
//! height, and offset, never letting either dimension drop below a minimum.
//!
//! The crate is headless. It does not draw anything or read input devices.
//! Callers are expected to:
//! - Implement [`PositionableSurface`] for their layout system (or use the
//!   in-memory [`canvas::Canvas`]).
//! - Call [`ResizeOverlay::arrange`] whenever the target's arranged size is
//!   finalized, and draw handles from [`ResizeOverlay::visuals`] or from
//!   [`PositionableSurface::place_handle`].
//! - Feed pointer positions to [`ResizeOverlay::pointer_down`],
//!   [`ResizeOverlay::pointer_move`], and [`ResizeOverlay::pointer_up`], or
//!   drive [`Handle`]s directly and pass their [`HandleEvent`]s to
//!   [`ResizeOverlay::handle_event`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_resize::canvas::Canvas;
//! use understory_resize::{HandlePosition, OverlayConfig, ResizeOverlay};
//!
//! let mut canvas = Canvas::new();
//! let panel = canvas.insert(Rect::new(0.0, 0.0, 100.0, 100.0));
//! canvas.set_min_size(panel, Some(20.0), Some(20.0));
//!
//! let mut overlay = ResizeOverlay::attach(&canvas, panel, OverlayConfig::default()).unwrap();
//! overlay.arrange_from_target(&mut canvas);
//!
//! // Grab the top handle (centered on the top edge) and drag it down by 30.
//! let grabbed = overlay.pointer_down(&mut canvas, Point::new(50.0, 0.0));
//! assert_eq!(grabbed, Some(HandlePosition::Top));
//! overlay.pointer_move(&mut canvas, Point::new(50.0, 30.0));
//! overlay.pointer_up(&mut canvas, Point::new(50.0, 30.0));
//!
//! assert_eq!(canvas.rect(panel), Some(Rect::new(0.0, 30.0, 100.0, 100.0)));
//!
//! // Dragging the top handle past the bottom edge clamps at the minimum
//! // height. The top edge stays where it was.
//! overlay.arrange_from_target(&mut canvas);
//! overlay.pointer_down(&mut canvas, Point::new(50.0, 30.0));
//! overlay.pointer_move(&mut canvas, Point::new(50.0, 500.0));
//! assert_eq!(canvas.get(panel).unwrap().size, Size::new(100.0, 20.0));
//! assert_eq!(canvas.get(panel).unwrap().offset, Point::new(0.0, 30.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and Peniko against the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod canvas;
mod config;
pub mod drag;
mod error;
mod handle;
mod overlay;
mod position;
mod surface;

pub use config::OverlayConfig;
pub use error::ResizeError;
pub use handle::{Handle, HandleEvent};
pub use overlay::{HandleVisual, ResizeOverlay, handle_rect};
pub use position::{DragAxes, Edges, HandlePosition, ResizeCursor};
pub use surface::PositionableSurface;
