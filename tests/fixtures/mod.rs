//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use touchskin::models::{DeviceFamily, Insets};
use touchskin::services::WindowSnapshot;

/// Path to the touchskin binary
pub fn touchskin_bin() -> &'static str {
    env!("CARGO_BIN_EXE_touchskin")
}

/// Creates an empty config directory so tests never read the user's config.
pub fn isolated_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Runs the binary with an isolated config directory.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(touchskin_bin())
        .env("TOUCHSKIN_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Writes a config.toml into the given directory.
pub fn write_config(config_dir: &Path, content: &str) {
    std::fs::write(config_dir.join("config.toml"), content).expect("Failed to write config");
}

/// A representative device per family with its real screen and safe area.
pub struct DeviceFixture {
    pub identifier: &'static str,
    pub family: DeviceFamily,
    pub window: WindowSnapshot,
}

/// Real device geometry, one or more per family; iPhone17,1 is in landscape.
pub fn representative_devices() -> Vec<DeviceFixture> {
    vec![
        DeviceFixture {
            identifier: "iPhone12,8",
            family: DeviceFamily::PhoneMini,
            window: WindowSnapshot::new(375.0, 667.0, Insets::new(20.0, 0.0, 0.0, 0.0)),
        },
        DeviceFixture {
            identifier: "iPhone14,4",
            family: DeviceFamily::PhoneMini,
            window: WindowSnapshot::new(375.0, 812.0, Insets::new(47.0, 0.0, 34.0, 0.0)),
        },
        DeviceFixture {
            identifier: "iPhone10,1",
            family: DeviceFamily::Phone,
            window: WindowSnapshot::new(375.0, 667.0, Insets::new(20.0, 0.0, 0.0, 0.0)),
        },
        DeviceFixture {
            identifier: "iPhone16,2",
            family: DeviceFamily::Phone,
            window: WindowSnapshot::new(430.0, 932.0, Insets::new(59.0, 0.0, 34.0, 0.0)),
        },
        DeviceFixture {
            identifier: "iPhone17,1",
            family: DeviceFamily::Phone,
            window: WindowSnapshot::new(874.0, 402.0, Insets::new(0.0, 62.0, 21.0, 62.0)),
        },
        DeviceFixture {
            identifier: "iPad11,1",
            family: DeviceFamily::Tablet,
            window: WindowSnapshot::new(768.0, 1024.0, Insets::new(20.0, 0.0, 0.0, 0.0)),
        },
        DeviceFixture {
            identifier: "iPad13,18",
            family: DeviceFamily::Tablet,
            window: WindowSnapshot::new(820.0, 1180.0, Insets::new(24.0, 0.0, 20.0, 0.0)),
        },
        DeviceFixture {
            identifier: "iPad16,6",
            family: DeviceFamily::Tablet,
            window: WindowSnapshot::new(1032.0, 1376.0, Insets::new(24.0, 0.0, 20.0, 0.0)),
        },
    ]
}
