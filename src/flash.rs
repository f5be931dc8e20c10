// SPDX-License-Identifier: GPL-3.0-only

//! Flash mode and hardware torch control
//!
//! [`FlashMode`] is the user-facing setting cycled from the preview. Only
//! [`FlashMode::On`] asserts the torch; `Auto` is an illumination hint and
//! does not fire anything at capture time.
//!
//! Torch LEDs are discovered at `/sys/class/leds/*:flash` and driven through
//! the `brightness` file, which is group-writable by `feedbackd`.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Flash operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlashMode {
    /// Flash is off
    #[default]
    Off,
    /// Continuous illumination while previewing
    On,
    /// Left to the platform
    Auto,
}

impl FlashMode {
    /// All modes in cycle order
    pub const ALL: [FlashMode; 3] = [FlashMode::Off, FlashMode::On, FlashMode::Auto];

    /// Cycle to the next mode: Off -> On -> Auto -> Off
    pub fn next(self) -> Self {
        match self {
            FlashMode::Off => FlashMode::On,
            FlashMode::On => FlashMode::Auto,
            FlashMode::Auto => FlashMode::Off,
        }
    }

    /// Whether the torch is asserted in this mode
    pub fn asserts_torch(self) -> bool {
        self == FlashMode::On
    }

    /// Localized label shown on the flash button
    pub fn label(&self) -> String {
        match self {
            FlashMode::Off => crate::fl!("flash-off"),
            FlashMode::On => crate::fl!("flash-on"),
            FlashMode::Auto => crate::fl!("flash-auto"),
        }
    }

    /// Mode name as shown under the flash button
    pub fn as_upper(&self) -> &'static str {
        match self {
            FlashMode::Off => "OFF",
            FlashMode::On => "ON",
            FlashMode::Auto => "AUTO",
        }
    }
}

impl std::fmt::Display for FlashMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlashMode::Off => write!(f, "off"),
            FlashMode::On => write!(f, "on"),
            FlashMode::Auto => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for FlashMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(FlashMode::Off),
            "on" => Ok(FlashMode::On),
            "auto" => Ok(FlashMode::Auto),
            other => Err(format!("unknown flash mode '{other}' (expected off, on or auto)")),
        }
    }
}

/// A torch LED discovered via sysfs
#[derive(Debug, Clone)]
pub struct TorchDevice {
    /// Sysfs path, e.g. `/sys/class/leds/white:flash`
    path: PathBuf,
    /// Maximum brightness value (from `max_brightness` file)
    max_brightness: u32,
    /// Directory basename
    name: String,
}

impl TorchDevice {
    /// Scan `/sys/class/leds/` for writable `*:flash` entries
    pub fn discover() -> Vec<TorchDevice> {
        Self::discover_in(Path::new("/sys/class/leds"))
    }

    /// Scan `leds_dir` for writable `*:flash` entries
    pub fn discover_in(leds_dir: &Path) -> Vec<TorchDevice> {
        let Ok(entries) = std::fs::read_dir(leds_dir) else {
            warn!(path = %leds_dir.display(), "Cannot read LED class directory, torch discovery skipped");
            return Vec::new();
        };

        let mut devices = Vec::new();

        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name_str) = name.to_str() else {
                continue;
            };

            if !name_str.ends_with(":flash") {
                continue;
            }

            let led_path = entry.path();
            let max_brightness_path = led_path.join("max_brightness");

            let max_brightness = match std::fs::read_to_string(&max_brightness_path) {
                Ok(s) => match s.trim().parse::<u32>() {
                    Ok(v) if v > 0 => v,
                    _ => {
                        warn!(
                            path = %max_brightness_path.display(),
                            "Invalid max_brightness value"
                        );
                        continue;
                    }
                },
                Err(e) => {
                    warn!(
                        path = %max_brightness_path.display(),
                        error = %e,
                        "Cannot read max_brightness"
                    );
                    continue;
                }
            };

            let brightness_path = led_path.join("brightness");
            if let Err(e) = std::fs::OpenOptions::new()
                .write(true)
                .open(&brightness_path)
            {
                warn!(
                    path = %brightness_path.display(),
                    error = %e,
                    "Cannot write brightness, user may need to be in 'feedbackd' group"
                );
                continue;
            }

            info!(name = name_str, max_brightness, "Discovered torch LED");

            devices.push(TorchDevice {
                path: led_path,
                max_brightness,
                name: name_str.to_string(),
            });
        }

        // white before yellow
        devices.sort_by(|a, b| a.name.cmp(&b.name));
        devices
    }

    /// Device name (e.g. "white:flash")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set raw brightness value (0 = off, max_brightness = full)
    pub fn set_brightness(&self, value: u32) -> io::Result<()> {
        let clamped = value.min(self.max_brightness);
        std::fs::write(self.path.join("brightness"), clamped.to_string())
    }

    /// Turn off the LED
    pub fn off(&self) -> io::Result<()> {
        self.set_brightness(0)
    }

    /// Turn on at full brightness
    pub fn on(&self) -> io::Result<()> {
        self.set_brightness(self.max_brightness)
    }
}

/// Switch every device on or off, logging failures
pub fn set_all(devices: &[TorchDevice], enabled: bool) {
    for dev in devices {
        let result = if enabled { dev.on() } else { dev.off() };
        if let Err(e) = result {
            warn!(device = %dev.name, enabled, error = %e, "Failed to switch torch LED");
        }
    }
}
