// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Directory name used under the config, cache and pictures directories
pub const APP_DIR_NAME: &str = "snapcam";

/// Configuration file name
pub const CONFIG_FILE: &str = "config.json";

/// Stored permission decisions file name
pub const PERMISSIONS_FILE: &str = "permissions.json";

/// Log file used while the terminal UI owns the screen
pub const LOG_FILE: &str = "snapcam.log";

/// Still capture settings
pub mod capture {
    /// Maximum quality
    pub const QUALITY: f32 = 1.0;
}

/// Virtual sensor resolution
pub mod sensor {
    pub const DEFAULT_WIDTH: u32 = 1280;
    pub const DEFAULT_HEIGHT: u32 = 720;
    /// Largest resolution accepted from the config
    pub const MAX_DIMENSION: u32 = 7680;
}

/// Terminal UI
pub mod terminal {
    use super::Duration;

    /// Input poll timeout, also the preview frame interval
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);
}
