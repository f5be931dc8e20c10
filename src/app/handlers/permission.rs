// SPDX-License-Identifier: GPL-3.0-only

//! Permission handlers
//!
//! Resolves the permission gate at startup and handles the manual camera
//! re-request from the permission screen.

use crate::app::CaptureController;
use crate::app::state::{Notice, Outcome, ViewState};
use crate::backends::camera::CameraCapability;
use crate::backends::media_library::MediaLibrary;
use crate::backends::permissions::PermissionPlatform;
use crate::errors::AppError;
use crate::fl;
use crate::permissions::{PermissionKind, PermissionState};
use tracing::{debug, info, warn};

impl<C, M, P> CaptureController<C, M, P>
where
    C: CameraCapability,
    M: MediaLibrary,
    P: PermissionPlatform,
{
    /// Resolve permissions and leave the loading screen
    ///
    /// Goes to the preview when the camera is already authorized, to the
    /// permission screen otherwise. Only runs once, from `Loading`.
    pub async fn initialize(&mut self) -> Outcome {
        if self.state.view != ViewState::Loading {
            debug!(view = self.state.view.name(), "Already initialized");
            return Outcome::Ignored;
        }

        self.state.permissions = self.gate.initialize().await;
        if self.state.permissions.camera.is_granted() {
            self.enter_preview();
        } else {
            info!(camera = ?self.state.permissions.camera, "Camera not authorized");
            self.state.view = ViewState::PermissionDenied;
        }
        Outcome::Applied
    }

    /// Ask for camera access again (loading or permission screen only)
    pub async fn request_camera_permission(&mut self) -> Outcome {
        if !matches!(
            self.state.view,
            ViewState::Loading | ViewState::PermissionDenied
        ) {
            debug!(view = self.state.view.name(), "Ignoring camera permission request");
            return Outcome::Ignored;
        }

        let camera = self.gate.request_camera_permission().await;
        self.state.permissions = self.gate.permissions();
        // Media access is requested once; cover a request issued before init
        if self.state.permissions.media_library == PermissionState::Unknown {
            self.gate.request_media_permission().await;
            self.state.permissions = self.gate.permissions();
        }

        if camera.is_granted() {
            self.enter_preview();
            Outcome::Applied
        } else {
            warn!("Camera permission denied");
            self.state.view = ViewState::PermissionDenied;
            self.state.notice = Some(Notice::error(
                fl!("permission-denied-title"),
                fl!("permission-denied-body"),
            ));
            Outcome::Failed(AppError::PermissionDenied(PermissionKind::Camera))
        }
    }
}
