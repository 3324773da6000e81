//! Application-wide constants.
//!
//! This module defines constants used throughout the crate, including the
//! application name and the metadata stamped onto the default skin.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "TouchSkin";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "touchskin";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "TOUCHSKIN_CONFIG_DIR";

/// Machine a simulator host resolves to.
pub const DEFAULT_SIMULATOR_MACHINE: &str = "iPhone16,2";

/// Title of the built-in skin.
pub const DEFAULT_SKIN_TITLE: &str = "Default Skin";

/// Author of the built-in skin.
pub const DEFAULT_SKIN_AUTHOR: &str = "Antique";

/// Twitter handle of the built-in skin's author.
pub const DEFAULT_SKIN_AUTHOR_TWITTER: &str = "antique_codes";
