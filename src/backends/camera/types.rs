// SPDX-License-Identifier: GPL-3.0-only
// Shared types for camera capability abstraction

//! Shared types for camera backends

use crate::flash::FlashMode;
use serde::{Deserialize, Serialize};

/// Which physical camera is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facing {
    /// Rear camera
    #[default]
    Back,
    /// Front (selfie) camera
    Front,
}

impl Facing {
    /// The other camera
    pub fn flipped(self) -> Self {
        match self {
            Facing::Back => Facing::Front,
            Facing::Front => Facing::Back,
        }
    }

    /// Localized display name
    pub fn label(&self) -> String {
        match self {
            Facing::Back => crate::fl!("facing-back"),
            Facing::Front => crate::fl!("facing-front"),
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Back => write!(f, "back"),
            Facing::Front => write!(f, "front"),
        }
    }
}

/// Camera configuration selected by the user
///
/// Only mutated through explicit toggles while the live preview is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Active camera
    pub facing: Facing,
    /// Flash mode
    pub flash: FlashMode,
}

impl CameraConfig {
    /// Whether the continuous illumination should be on for this config
    pub fn wants_torch(&self) -> bool {
        self.flash.asserts_torch()
    }
}

/// Options passed to the camera for a still capture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// Encoding quality in `0.0..=1.0`
    pub quality: f32,
    /// Return the image payload inline as base64
    pub base64: bool,
    /// Skip the platform's post-capture processing (orientation, mirroring)
    pub skip_processing: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            quality: crate::constants::capture::QUALITY,
            base64: false,
            skip_processing: false,
        }
    }
}

impl CaptureOptions {
    /// Quality mapped to a JPEG quality factor (1-100)
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8
    }
}

/// A still photo produced by the camera
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPhoto {
    /// Opaque storage handle, usually a `file://` uri
    pub uri: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// Error types for backend operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Backend is not available on this system
    NotAvailable(String),
    /// Device is busy with another operation
    Busy,
    /// Caller is not authorized
    PermissionDenied(String),
    /// General I/O error
    IoError(String),
    /// Image encoding failed
    EncodingFailed(String),
    /// Other errors
    Other(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::NotAvailable(msg) => write!(f, "Backend not available: {}", msg),
            BackendError::Busy => write!(f, "Device is busy"),
            BackendError::PermissionDenied(msg) => write!(f, "Permission denied: {}", msg),
            BackendError::IoError(msg) => write!(f, "I/O error: {}", msg),
            BackendError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            BackendError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

impl From<std::io::Error> for BackendError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            BackendError::PermissionDenied(err.to_string())
        } else {
            BackendError::IoError(err.to_string())
        }
    }
}

impl From<image::ImageError> for BackendError {
    fn from(err: image::ImageError) -> Self {
        BackendError::EncodingFailed(err.to_string())
    }
}
