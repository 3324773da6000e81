//! The skin record: per-orientation control layouts plus authorship metadata.
//!
//! Field names serialize in camelCase so a skin written by this crate has the
//! same shape as skin JSON files hand-authored for the front-end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::control::{ControlElement, ControlType, Viewport};
use super::geometry::Rect;

/// One orientation's complete layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orientation {
    /// Opacity applied to every control in this orientation
    pub shared_alpha: f64,
    /// Buttons, in draw order
    pub buttons: Vec<ControlElement>,
    /// Emulated display viewports
    pub screens: Vec<Viewport>,
    /// Thumbsticks
    pub thumbsticks: Vec<ControlElement>,
}

impl Orientation {
    /// Finds a button or thumbstick by tag.
    #[must_use]
    pub fn control(&self, kind: ControlType) -> Option<&ControlElement> {
        let group = if kind.is_thumbstick() {
            &self.thumbsticks
        } else {
            &self.buttons
        };
        group.iter().find(|element| element.kind == kind)
    }

    /// Iterates every button followed by every thumbstick.
    pub fn controls(&self) -> impl Iterator<Item = &ControlElement> {
        self.buttons.iter().chain(self.thumbsticks.iter())
    }

    /// Lists every rectangle that falls outside `[0, width] x [0, height]`.
    ///
    /// Controls are reported by tag; viewports as `screen[i]`.
    #[must_use]
    pub fn out_of_bounds(&self, width: f64, height: f64) -> Vec<String> {
        let bounds = Rect::new(0.0, 0.0, width, height);

        let controls = self
            .controls()
            .filter(|element| !bounds.contains_rect(&element.frame()))
            .map(|element| element.kind.to_string());

        let screens = self
            .screens
            .iter()
            .enumerate()
            .filter(|(_, screen)| !bounds.contains_rect(screen))
            .map(|(index, _)| format!("screen[{index}]"));

        controls.chain(screens).collect()
    }
}

/// Device orientation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrientationKind {
    /// Upright
    Portrait,
    /// Rotated with the home side to the left
    LandscapeLeft,
    /// Rotated with the home side to the right
    LandscapeRight,
}

impl OrientationKind {
    /// All orientations.
    pub const ALL: [Self; 3] = [Self::Portrait, Self::LandscapeLeft, Self::LandscapeRight];
}

impl fmt::Display for OrientationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Portrait => "portrait",
            Self::LandscapeLeft => "landscape-left",
            Self::LandscapeRight => "landscape-right",
        })
    }
}

impl FromStr for OrientationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape-left" | "landscapeleft" => Ok(Self::LandscapeLeft),
            "landscape-right" | "landscaperight" => Ok(Self::LandscapeRight),
            other => Err(format!(
                "Unknown orientation '{other}'. Must be 'portrait', 'landscape-left', or 'landscape-right'"
            )),
        }
    }
}

/// Layouts for every orientation plus the machines they were built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orientations {
    /// Upright layout
    pub portrait: Orientation,
    /// Landscape-left layout
    pub landscape_left: Orientation,
    /// Landscape-right layout
    pub landscape_right: Orientation,
    /// Hardware identifiers this skin supports
    pub supported_devices: Vec<String>,
}

/// Social account platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SocialPlatform {
    /// twitter.com / x.com
    Twitter,
    /// github.com
    Github,
    /// Discord username
    Discord,
    /// Mastodon handle
    Mastodon,
    /// Personal website
    Website,
}

/// A social account of the skin author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    /// Platform the handle belongs to
    #[serde(rename = "type")]
    pub platform: SocialPlatform,
    /// Account handle, without a leading '@'
    #[serde(rename = "username")]
    pub handle: String,
}

/// Skin author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name
    pub name: String,
    /// Social accounts, in display order
    pub socials: Vec<Social>,
}

/// Emulator core a skin targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Core {
    /// Nintendo 3DS
    Cytrus,
    /// Nintendo DS
    Grape,
    /// PlayStation
    Lychee,
    /// Nintendo Switch
    Sudachi,
    /// Game Boy
    Kiwi,
    /// Super Nintendo
    Mango,
    /// PlayStation 2
    Cherry,
    /// Nintendo Entertainment System
    Peach,
}

/// Complete touch-control configuration for one front-end session.
///
/// Built fresh on every request and owned by the caller. Rotation is handled
/// by picking the matching [`Orientations`] member, never by regenerating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skin {
    /// Who made the skin
    pub author: Author,
    /// Target emulator core
    pub core: Core,
    /// Per-orientation layouts
    pub orientations: Orientations,
    /// Display title
    pub title: String,
}

impl Skin {
    /// Returns the layout for the given orientation.
    #[must_use]
    pub fn orientation(&self, kind: OrientationKind) -> &Orientation {
        match kind {
            OrientationKind::Portrait => &self.orientations.portrait,
            OrientationKind::LandscapeLeft => &self.orientations.landscape_left,
            OrientationKind::LandscapeRight => &self.orientations.landscape_right,
        }
    }
}
