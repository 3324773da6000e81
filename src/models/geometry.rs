//! Screen-space primitives shared by every layout: rectangles and insets.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in logical points.
///
/// The origin is the top-left corner of the full screen bounds. Rectangles
/// produced by the layout generator already include any safe-area offset, so
/// consumers can hit-test and draw them without a further transform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a square with side `size`.
    #[must_use]
    pub const fn square(x: f64, y: f64, size: f64) -> Self {
        Self::new(x, y, size, size)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns true if `other` lies entirely within this rectangle (edges inclusive).
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Shrinks the rectangle by the given insets.
    ///
    /// Width and height are computed by subtraction so the result exactly
    /// tiles the remaining space.
    #[must_use]
    pub fn inset_by(&self, insets: &Insets) -> Self {
        Self {
            x: self.x + insets.left,
            y: self.y + insets.top,
            width: self.width - insets.horizontal(),
            height: self.height - insets.vertical(),
        }
    }
}

/// Distances from each screen edge, in logical points.
///
/// All four values are non-negative. Use [`Insets::new`] to clamp untrusted
/// values coming from a platform query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Distance from the top edge
    pub top: f64,
    /// Distance from the left edge
    pub left: f64,
    /// Distance from the bottom edge
    pub bottom: f64,
    /// Distance from the right edge
    pub right: f64,
}

impl Insets {
    /// No insets on any edge.
    pub const ZERO: Self = Self {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    /// Creates insets, clamping negative (or NaN) values to zero.
    #[must_use]
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top: non_negative(top),
            left: non_negative(left),
            bottom: non_negative(bottom),
            right: non_negative(right),
        }
    }

    /// Insets that keep only the top edge.
    #[must_use]
    pub fn top_only(top: f64) -> Self {
        Self::new(top, 0.0, 0.0, 0.0)
    }

    /// Combined left + right inset.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Combined top + bottom inset.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

fn non_negative(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}
