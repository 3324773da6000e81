//! Geometry basis: the drawing surface and the two inset sets derived from it.

use crate::models::Insets;

/// Screen bounds and safe area read from the active window in one go.
///
/// Capture a snapshot once per layout pass so every rectangle is derived from
/// the same geometry state. Fields are private so every snapshot goes through
/// [`WindowSnapshot::new`] and its insets are never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSnapshot {
    width: f64,
    height: f64,
    safe_area: Insets,
}

impl WindowSnapshot {
    /// Creates a snapshot; insets are clamped to be non-negative.
    #[must_use]
    pub fn new(width: f64, height: f64, safe_area: Insets) -> Self {
        Self {
            width,
            height,
            safe_area: Insets::new(
                safe_area.top,
                safe_area.left,
                safe_area.bottom,
                safe_area.right,
            ),
        }
    }

    /// Screen width in logical points.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Screen height in logical points.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Platform safe-area insets, clamped to be non-negative.
    #[must_use]
    pub const fn safe_area(&self) -> Insets {
        self.safe_area
    }
}

/// Resolved drawing surface for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryBasis {
    /// Screen width
    pub width: f64,
    /// Screen height
    pub height: f64,
    /// Insets that keep controls clear of notches and home indicators
    pub control_insets: Insets,
    /// Insets for the emulated display: top only
    pub viewport_insets: Insets,
}

/// Derives control and viewport insets from a window snapshot.
///
/// Controls honour the full safe area. The emulated display keeps only the top
/// inset so it can extend to the left, right, and bottom physical edges.
#[must_use]
pub fn resolve_basis(window: &WindowSnapshot) -> GeometryBasis {
    GeometryBasis {
        width: window.width(),
        height: window.height(),
        control_insets: window.safe_area(),
        viewport_insets: Insets::top_only(window.safe_area().top),
    }
}
