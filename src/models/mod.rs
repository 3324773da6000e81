//! Data models for skins, controls, and the hardware catalog.
//!
//! This module contains all the core data structures used throughout the crate.
//! Models are plain data and carry no layout logic of their own.

pub mod control;
pub mod device;
pub mod geometry;
pub mod skin;

// Re-export all model types
pub use control::{ControlElement, ControlType, Viewport};
pub use device::{DeviceFamily, Machine, CATALOG};
pub use geometry::{Insets, Rect};
pub use skin::{
    Author, Core, Orientation, OrientationKind, Orientations, Skin, Social, SocialPlatform,
};
