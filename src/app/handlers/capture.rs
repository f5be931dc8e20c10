// SPDX-License-Identifier: GPL-3.0-only

//! Capture operations handlers
//!
//! Handles still capture, retake and saving to the media library.

use crate::app::CaptureController;
use crate::app::state::{Notice, Outcome, ViewState};
use crate::backends::camera::{BackendError, CameraCapability, CaptureOptions};
use crate::backends::media_library::MediaLibrary;
use crate::backends::permissions::PermissionPlatform;
use crate::errors::{AppError, CaptureError, SaveError};
use crate::fl;
use tracing::{debug, error, info, warn};

impl<C, M, P> CaptureController<C, M, P>
where
    C: CameraCapability,
    M: MediaLibrary,
    P: PermissionPlatform,
{
    /// Take a still photo (preview only)
    ///
    /// On success the camera is released and the review screen shows the
    /// photo. On failure the preview stays and an error notice is raised.
    pub async fn capture(&mut self) -> Outcome {
        if !self.state.view.is_preview() {
            debug!(view = self.state.view.name(), "Ignoring capture");
            return Outcome::Ignored;
        }

        let options = CaptureOptions::default();
        info!(
            facing = %self.state.config.facing,
            flash = %self.state.config.flash,
            quality = options.quality,
            "Capturing photo..."
        );

        match self.camera.capture_photo(self.state.config, options).await {
            Ok(photo) => {
                info!(uri = %photo.uri, width = photo.width, height = photo.height, "Photo captured");
                self.release_camera();
                self.state.view = ViewState::Review { photo };
                Outcome::Applied
            }
            Err(e) => {
                error!(error = %e, "Failed to capture photo");
                self.state.notice = Some(Notice::error(fl!("error-title"), fl!("capture-failed")));
                Outcome::Failed(AppError::Capture(capture_error(e)))
            }
        }
    }

    /// Discard the photo and return to the preview (review only)
    pub fn retake(&mut self) -> Outcome {
        if !self.state.view.is_review() {
            debug!(view = self.state.view.name(), "Ignoring retake");
            return Outcome::Ignored;
        }

        info!("Discarding photo");
        self.enter_preview();
        Outcome::Applied
    }

    /// Save the photo to the media library (review only)
    ///
    /// Never changes the view; the user may save again or retake.
    ///
    /// The library is only invoked once media-library access was granted by
    /// the permission gate. Without a grant the save fails with
    /// [`SaveError::AccessDenied`] and nothing is written, since a library
    /// backend such as [`FilesystemLibrary`] has no consent check of its own.
    ///
    /// [`FilesystemLibrary`]: crate::backends::media_library::FilesystemLibrary
    pub async fn save(&mut self) -> Outcome {
        let Some(uri) = self.state.view.photo().map(|photo| photo.uri.clone()) else {
            debug!(view = self.state.view.name(), "Ignoring save");
            return Outcome::Ignored;
        };

        if !self.state.permissions.media_library.is_granted() {
            warn!(
                media_library = ?self.state.permissions.media_library,
                "Cannot save without media library access"
            );
            return self.save_failed(SaveError::AccessDenied);
        }

        match self.library.persist(&uri).await {
            Ok(stored) => {
                info!(uri = %uri, stored = %stored, "Photo saved");
                self.state.notice = Some(Notice::confirmation(
                    fl!("save-success-title"),
                    fl!("save-success-body"),
                ));
                Outcome::Applied
            }
            Err(e) => {
                error!(uri = %uri, error = %e, "Failed to save photo");
                self.save_failed(save_error(e))
            }
        }
    }

    fn save_failed(&mut self, err: SaveError) -> Outcome {
        self.state.notice = Some(Notice::error(fl!("error-title"), fl!("save-failed")));
        Outcome::Failed(AppError::Save(err))
    }
}

fn capture_error(err: BackendError) -> CaptureError {
    match err {
        BackendError::Busy => CaptureError::Busy,
        BackendError::NotAvailable(msg) => CaptureError::Unavailable(msg),
        other => CaptureError::Failed(other.to_string()),
    }
}

fn save_error(err: BackendError) -> SaveError {
    match err {
        BackendError::PermissionDenied(_) => SaveError::AccessDenied,
        other => SaveError::Failed(other.to_string()),
    }
}
