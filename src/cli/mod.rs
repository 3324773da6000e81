//! CLI command handlers for TouchSkin.
//!
//! This module provides headless, scriptable access to the layout pipeline
//! for automation, testing, and skin authoring.

pub mod catalog;
pub mod classify;
pub mod common;
pub mod config;
pub mod skin;

// Re-export types used by main.rs and tests
pub use catalog::CatalogArgs;
pub use classify::ClassifyArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use skin::SkinArgs;
