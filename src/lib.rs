//! TouchSkin Library
//!
//! This library provides the on-screen virtual controller layout engine for
//! emulator front-ends: device classification, geometry basis resolution,
//! per-family layout generation, and default skin assembly.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
