// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! Front-ends translate input into a [`Message`] and hand it to
//! [`CaptureController::update`], which routes it to the handler for its
//! domain:
//!
//! - `handlers::permission`: startup resolution, camera re-request
//! - `handlers::camera`: facing and flash toggles
//! - `handlers::capture`: capture, retake, save

use crate::app::CaptureController;
use crate::app::state::Outcome;
use crate::backends::camera::CameraCapability;
use crate::backends::media_library::MediaLibrary;
use crate::backends::permissions::PermissionPlatform;
use tracing::debug;

/// User interactions and the startup event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Resolve permissions on startup
    Initialize,
    /// "Allow camera access" pressed
    RequestCameraPermission,
    /// Shutter pressed
    Capture,
    /// Retake pressed
    Retake,
    /// Save pressed
    Save,
    /// Camera switch pressed
    ToggleFacing,
    /// Flash button pressed
    ToggleFlash,
    /// Notice acknowledged
    DismissNotice,
}

impl<C, M, P> CaptureController<C, M, P>
where
    C: CameraCapability,
    M: MediaLibrary,
    P: PermissionPlatform,
{
    /// Main message handler - routes messages to handler methods
    pub async fn update(&mut self, message: Message) -> Outcome {
        debug!(?message, view = self.state.view.name(), "Handling message");
        match message {
            Message::Initialize => self.initialize().await,
            Message::RequestCameraPermission => self.request_camera_permission().await,
            Message::Capture => self.capture().await,
            Message::Retake => self.retake(),
            Message::Save => self.save().await,
            Message::ToggleFacing => self.toggle_facing(),
            Message::ToggleFlash => self.toggle_flash(),
            Message::DismissNotice => match self.dismiss_notice() {
                Some(_) => Outcome::Applied,
                None => Outcome::Ignored,
            },
        }
    }
}
