// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::backends::camera::{CameraConfig, CapturedPhoto};
use crate::errors::AppError;
use crate::permissions::Permissions;
use serde::{Deserialize, Serialize};

/// Which screen is shown
///
/// The captured photo lives inside [`ViewState::Review`], so a photo exists
/// exactly while the review screen is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    /// Camera permission not resolved yet
    #[default]
    Loading,
    /// Camera permission missing; offers a manual re-request
    PermissionDenied,
    /// Live camera preview
    Preview,
    /// Reviewing a captured photo, camera inactive
    Review {
        /// The captured photo
        photo: CapturedPhoto,
    },
}

impl ViewState {
    pub fn is_preview(&self) -> bool {
        matches!(self, ViewState::Preview)
    }

    pub fn is_review(&self) -> bool {
        matches!(self, ViewState::Review { .. })
    }

    /// The photo under review
    pub fn photo(&self) -> Option<&CapturedPhoto> {
        match self {
            ViewState::Review { photo } => Some(photo),
            _ => None,
        }
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::PermissionDenied => "permission-denied",
            ViewState::Preview => "preview",
            ViewState::Review { .. } => "review",
        }
    }
}

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    /// An action succeeded
    Confirmation,
    /// An action failed
    Error,
}

/// Blocking message shown to the user until dismissed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn confirmation(title: String, body: String) -> Self {
        Self {
            kind: NoticeKind::Confirmation,
            title,
            body,
        }
    }

    pub fn error(title: String, body: String) -> Self {
        Self {
            kind: NoticeKind::Error,
            title,
            body,
        }
    }
}

/// Everything the UI renders from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControllerState {
    pub view: ViewState,
    pub config: CameraConfig,
    pub permissions: Permissions,
    /// Torch currently asserted
    pub torch: bool,
    pub notice: Option<Notice>,
}

/// Result of dispatching one user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action ran
    Applied,
    /// Not legal in the current state; nothing happened
    Ignored,
    /// The action ran and failed; only a notice was raised
    Failed(AppError),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_only_in_review() {
        let photo = CapturedPhoto {
            uri: "file:///tmp/a.jpg".to_string(),
            width: 4,
            height: 3,
        };
        assert_eq!(ViewState::Preview.photo(), None);
        assert_eq!(
            ViewState::Review {
                photo: photo.clone()
            }
            .photo(),
            Some(&photo)
        );
    }

    #[test]
    fn test_state_serializes() {
        let state = ControllerState {
            view: ViewState::Review {
                photo: CapturedPhoto {
                    uri: "file:///tmp/a.jpg".to_string(),
                    width: 4,
                    height: 3,
                },
            },
            ..Default::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: ControllerState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
