// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::palette;

/// Immutable configuration for a [`ResizeOverlay`](crate::ResizeOverlay).
///
/// Only the thickness affects geometry: it is the side length of each square
/// handle and, when the target declares no minimum, a third of the minimum
/// width and height. Opacity and color are passed through to the presentation
/// layer via [`HandleVisual`](crate::HandleVisual).
///
/// ```
/// use understory_resize::OverlayConfig;
///
/// let config = OverlayConfig::default()
///     .with_handle_thickness(8.0)
///     .with_handle_opacity(1.5);
/// assert_eq!(config.handle_thickness(), 8.0);
/// assert_eq!(config.handle_opacity(), 1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OverlayConfig {
    handle_thickness: f64,
    handle_opacity: f32,
    handle_color: Color,
}

impl OverlayConfig {
    /// Default handle side length in pixels.
    pub const DEFAULT_HANDLE_THICKNESS: f64 = 10.0;

    /// Set the handle side length.
    ///
    /// Negative and non-finite values are treated as zero.
    #[must_use]
    pub fn with_handle_thickness(mut self, thickness: f64) -> Self {
        self.handle_thickness = if thickness.is_finite() {
            thickness.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Set the handle opacity, clamped into `0.0..=1.0`.
    #[must_use]
    pub fn with_handle_opacity(mut self, opacity: f32) -> Self {
        self.handle_opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the handle fill color.
    #[must_use]
    pub fn with_handle_color(mut self, color: Color) -> Self {
        self.handle_color = color;
        self
    }

    /// Handle side length in pixels.
    #[must_use]
    pub fn handle_thickness(&self) -> f64 {
        self.handle_thickness
    }

    /// Handle opacity in `0.0..=1.0`.
    #[must_use]
    pub fn handle_opacity(&self) -> f32 {
        self.handle_opacity
    }

    /// Handle fill color, without opacity applied.
    #[must_use]
    pub fn handle_color(&self) -> Color {
        self.handle_color
    }

    /// Handle fill color with [`OverlayConfig::handle_opacity`] applied.
    #[must_use]
    pub fn effective_color(&self) -> Color {
        self.handle_color.multiply_alpha(self.handle_opacity)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            handle_thickness: Self::DEFAULT_HANDLE_THICKNESS,
            handle_opacity: 1.0,
            handle_color: palette::css::RED,
        }
    }
}
