//! Touch controls: the semantic control tags and their positioned hit regions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::Rect;

/// Semantic tag of a touch control.
///
/// `Left` and `Right` tag the two thumbsticks; everything else is a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlType {
    /// Face button A
    A,
    /// Face button B
    B,
    /// Face button X
    X,
    /// Face button Y
    Y,
    /// Directional pad up
    DpadUp,
    /// Directional pad down
    DpadDown,
    /// Directional pad left
    DpadLeft,
    /// Directional pad right
    DpadRight,
    /// Left shoulder
    L,
    /// Left trigger
    #[serde(rename = "zl")]
    ZL,
    /// Right shoulder
    R,
    /// Right trigger
    #[serde(rename = "zr")]
    ZR,
    /// Home system button
    Home,
    /// Minus (select) system button
    Minus,
    /// Plus (start) system button
    Plus,
    /// Front-end settings placeholder
    Settings,
    /// Left thumbstick
    Left,
    /// Right thumbstick
    Right,
}

impl ControlType {
    /// Returns true for the two thumbstick tags.
    #[must_use]
    pub const fn is_thumbstick(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Name used in serialized skins (e.g., "dpadUp", "zl").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::X => "x",
            Self::Y => "y",
            Self::DpadUp => "dpadUp",
            Self::DpadDown => "dpadDown",
            Self::DpadLeft => "dpadLeft",
            Self::DpadRight => "dpadRight",
            Self::L => "l",
            Self::ZL => "zl",
            Self::R => "r",
            Self::ZR => "zr",
            Self::Home => "home",
            Self::Minus => "minus",
            Self::Plus => "plus",
            Self::Settings => "settings",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A positioned touch hit region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlElement {
    /// Left edge in screen coordinates
    pub x: f64,
    /// Top edge in screen coordinates
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
    /// Semantic tag
    #[serde(rename = "type")]
    pub kind: ControlType,
}

impl ControlElement {
    /// Places a control at the given frame.
    #[must_use]
    pub const fn new(frame: Rect, kind: ControlType) -> Self {
        Self {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            kind,
        }
    }

    /// The control's rectangle.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Rectangle the emulated console's frame is drawn into.
pub type Viewport = Rect;
