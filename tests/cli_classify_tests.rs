//! End-to-end tests for `touchskin classify` and `touchskin catalog` commands.

mod fixtures;

use fixtures::*;

#[test]
fn test_classify_known_device_json() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(&["classify", "iPhone13,1", "--json"], config_dir.path());

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["identifier"], "iPhone13,1");
    assert_eq!(result["family"], "phone-mini");
    assert_eq!(result["name"], "iPhone 12 mini");
    assert_eq!(result["recognized"], true);
    assert_eq!(result["well_formed"], true);
}

#[test]
fn test_classify_known_device_plain() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(&["classify", "iPad13,18"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Family:     tablet"));
    assert!(stdout.contains("✓ Supported"));
}

#[test]
fn test_classify_unknown_but_well_formed() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(&["classify", "iPhone99,1", "--json"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["recognized"], false);
    assert_eq!(result["well_formed"], true);
    assert!(result.get("family").is_none());
}

#[test]
fn test_classify_malformed() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(&["classify", "FooBar1,1"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Malformed identifier"));
}

#[test]
fn test_classify_empty_identifier() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(&["classify", ""], config_dir.path());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_classify_simulator_override() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(
        &["classify", "x86_64", "--simulator", "--json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(result["identifier"], "x86_64");
    assert_eq!(result["effective_identifier"], "iPhone16,2");
    assert_eq!(result["family"], "phone");
}

#[test]
fn test_catalog_json_filtered() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(
        &["catalog", "--family", "phone-mini", "--json"],
        config_dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let machines: Vec<serde_json::Value> =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(machines.len(), 4);
    assert!(machines.iter().all(|m| m["family"] == "phone-mini"));
}

#[test]
fn test_catalog_plain_lists_all_families() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(&["catalog"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("phone-mini ("));
    assert!(stdout.contains("phone ("));
    assert!(stdout.contains("tablet ("));
    assert!(stdout.contains("iPhone 15 Pro Max"));
}

#[test]
fn test_catalog_invalid_family() {
    let config_dir = isolated_config_dir();
    let output = run_isolated(&["catalog", "--family", "watch"], config_dir.path());

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown device family"));
}
