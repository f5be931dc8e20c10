// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the camera application

use crate::permissions::PermissionKind;
use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
///
/// Every variant is terminal for the attempt that produced it and is shown
/// to the user as a notice. None of them stops the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A required permission was not granted
    PermissionDenied(PermissionKind),
    /// Photo capture errors
    Capture(CaptureError),
    /// Saving to the media library failed
    Save(SaveError),
    /// Configuration errors
    Config(String),
    /// Storage/filesystem errors
    Storage(String),
}

/// Photo capture errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Camera is busy with another operation
    Busy,
    /// Camera capability is not available
    Unavailable(String),
    /// Capture failed
    Failed(String),
}

/// Media library save errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// Media library access was not granted
    AccessDenied,
    /// Save failed
    Failed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::PermissionDenied(kind) => write!(f, "Permission denied: {}", kind),
            AppError::Capture(e) => write!(f, "Capture error: {}", e),
            AppError::Save(e) => write!(f, "Save error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Busy => write!(f, "Camera is busy"),
            CaptureError::Unavailable(msg) => write!(f, "Camera unavailable: {}", msg),
            CaptureError::Failed(msg) => write!(f, "Capture failed: {}", msg),
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::AccessDenied => write!(f, "Media library access denied"),
            SaveError::Failed(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for SaveError {}

impl From<CaptureError> for AppError {
    fn from(err: CaptureError) -> Self {
        AppError::Capture(err)
    }
}

impl From<SaveError> for AppError {
    fn from(err: SaveError) -> Self {
        AppError::Save(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let err = AppError::from(CaptureError::Failed("sensor timeout".into()));
        assert_eq!(
            err.to_string(),
            "Capture error: Capture failed: sensor timeout"
        );

        let err = AppError::PermissionDenied(PermissionKind::Camera);
        assert_eq!(err.to_string(), "Permission denied: camera");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(AppError::from(io), AppError::Storage(_)));
    }
}
