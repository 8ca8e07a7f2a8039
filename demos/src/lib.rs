// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the `understory_resize` demos.

use kurbo::Rect;

/// Install an `env_logger` logger, defaulting to `trace` for `understory_resize`.
///
/// Set `RUST_LOG` to override, for example `RUST_LOG=understory_resize=debug`.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("understory_resize=trace");
    // A second call from the same process is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Format a rectangle as `x,y wxh`.
pub fn describe(rect: Rect) -> String {
    format!(
        "{},{} {}x{}",
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    )
}
