// SPDX-License-Identifier: GPL-3.0-only

//! User configuration stored as `config.json` in the config directory

use crate::constants::{self, sensor};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where captures wait for review (default: cache directory)
    pub capture_directory: Option<PathBuf>,
    /// Photo library directory (default: ~/Pictures/snapcam)
    pub library_directory: Option<PathBuf>,
    /// Virtual sensor width
    pub sensor_width: u32,
    /// Virtual sensor height
    pub sensor_height: u32,
    /// Mirror the front camera (selfie mode)
    pub mirror_front_preview: bool,
    /// Drive sysfs flash LEDs with the torch signal
    pub hardware_torch: bool,
    /// UI language override, e.g. "th"
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_directory: None,
            library_directory: None,
            sensor_width: sensor::DEFAULT_WIDTH,
            sensor_height: sensor::DEFAULT_HEIGHT,
            mirror_front_preview: true,
            hardware_torch: false,
            language: None,
        }
    }
}

impl Config {
    /// Capture directory, configured or default
    pub fn capture_directory(&self) -> PathBuf {
        self.capture_directory
            .clone()
            .unwrap_or_else(crate::storage::default_capture_directory)
    }

    /// Library directory, configured or default
    pub fn library_directory(&self) -> PathBuf {
        self.library_directory
            .clone()
            .unwrap_or_else(crate::storage::default_library_directory)
    }

    /// Sensor resolution clamped to `1..=MAX_DIMENSION`
    pub fn sensor_resolution(&self) -> (u32, u32) {
        (
            self.sensor_width.clamp(1, sensor::MAX_DIMENSION),
            self.sensor_height.clamp(1, sensor::MAX_DIMENSION),
        )
    }
}

/// Application config directory
pub fn config_directory() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(constants::APP_DIR_NAME))
}

/// Path of the stored permission decisions
pub fn permissions_path() -> PathBuf {
    config_directory()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::PERMISSIONS_FILE)
}

/// Load the config from the default location
pub fn load() -> AppResult<Config> {
    match config_directory() {
        Some(dir) => load_from_path(&dir.join(constants::CONFIG_FILE)),
        None => Ok(Config::default()),
    }
}

/// Load from `path`; a missing file yields defaults, an unparsable one
/// yields defaults with a warning
pub fn load_from_path(path: &Path) -> AppResult<Config> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_preserves_fields() {
        let config = Config {
            library_directory: Some(PathBuf::from("/tmp/library")),
            language: Some("th".to_string()),
            hardware_torch: true,
            ..Default::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        save_to_path(&config, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from_path(&dir.path().join("config.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_invalid_json_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert_eq!(load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "sensor_width": 640 }"#).unwrap();
        let loaded = load_from_path(&path).unwrap();
        assert_eq!(loaded.sensor_width, 640);
        assert_eq!(loaded.sensor_height, sensor::DEFAULT_HEIGHT);
        assert!(loaded.mirror_front_preview);
    }

    #[test]
    fn test_sensor_resolution_clamped() {
        let config = Config {
            sensor_width: 0,
            sensor_height: 100_000,
            ..Default::default()
        };
        assert_eq!(config.sensor_resolution(), (1, sensor::MAX_DIMENSION));
    }
}
