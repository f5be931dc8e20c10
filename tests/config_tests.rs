// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use snapcam::Config;
use snapcam::config::{load_from_path, save_to_path};
use snapcam::constants::sensor;
use std::path::PathBuf;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(
        config.mirror_front_preview,
        "Front preview should be mirrored by default"
    );
    assert!(!config.hardware_torch);
    assert!(config.language.is_none());
    assert_eq!(
        config.sensor_resolution(),
        (sensor::DEFAULT_WIDTH, sensor::DEFAULT_HEIGHT)
    );
}

#[test]
fn test_config_directories_fall_back_to_defaults() {
    let config = Config::default();
    assert_eq!(
        config.library_directory(),
        snapcam::storage::default_library_directory()
    );
    assert_eq!(
        config.capture_directory(),
        snapcam::storage::default_capture_directory()
    );

    let config = Config {
        library_directory: Some(PathBuf::from("/srv/photos")),
        ..Config::default()
    };
    assert_eq!(config.library_directory(), PathBuf::from("/srv/photos"));
}

#[test]
fn test_sensor_resolution_is_clamped() {
    let config = Config {
        sensor_width: 0,
        sensor_height: sensor::MAX_DIMENSION * 2,
        ..Config::default()
    };
    assert_eq!(config.sensor_resolution(), (1, sensor::MAX_DIMENSION));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_from_path(&dir.path().join("missing.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "hardware_torch": true, "language": "th" }"#).unwrap();

    let config = load_from_path(&path).unwrap();
    assert!(config.hardware_torch);
    assert_eq!(config.language.as_deref(), Some("th"));
    assert!(config.mirror_front_preview);
}

#[test]
fn test_invalid_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert_eq!(load_from_path(&path).unwrap(), Config::default());
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = Config {
        sensor_width: 640,
        sensor_height: 480,
        ..Config::default()
    };

    save_to_path(&config, &path).unwrap();
    assert_eq!(load_from_path(&path).unwrap(), config);
}
