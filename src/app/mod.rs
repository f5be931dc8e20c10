// SPDX-License-Identifier: GPL-3.0-only

//! Capture view controller
//!
//! This module contains the controller state machine that decides which
//! screen is shown and which camera operations are legal.
//!
//! # Architecture
//!
//! - `state`: State types (ViewState, ControllerState, Notice, Outcome)
//! - `handlers`: Operations grouped by domain (permission, camera, capture)
//! - `update`: Message dispatch
//!
//! ```text
//! Loading ──► PermissionDenied ──(allow)──► Preview ◄──(retake)── Review
//!    │                                         │                    ▲
//!    └────────────(granted)───────────────────►└─────(capture)──────┘
//! ```
//!
//! All state lives in one [`ControllerState`] owned by the controller. The
//! capabilities are injected, so tests drive the controller with fakes.

mod handlers;
mod state;
mod update;

pub use state::{ControllerState, Notice, NoticeKind, Outcome, ViewState};
pub use update::Message;

use crate::backends::camera::{CameraCapability, CameraConfig, CapturedPhoto};
use crate::backends::media_library::MediaLibrary;
use crate::backends::permissions::PermissionPlatform;
use crate::permissions::{PermissionGate, Permissions};

/// Controller owning the UI state and the capabilities it drives
pub struct CaptureController<C, M, P> {
    camera: C,
    library: M,
    gate: PermissionGate<P>,
    state: ControllerState,
}

impl<C, M, P> CaptureController<C, M, P>
where
    C: CameraCapability,
    M: MediaLibrary,
    P: PermissionPlatform,
{
    /// Create a controller in the loading state
    ///
    /// Call [`CaptureController::initialize`] to resolve permissions.
    pub fn new(camera: C, library: M, platform: P) -> Self {
        Self {
            camera,
            library,
            gate: PermissionGate::new(platform),
            state: ControllerState::default(),
        }
    }

    /// Full UI state
    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Copy of the UI state
    pub fn snapshot(&self) -> ControllerState {
        self.state.clone()
    }

    pub fn view(&self) -> &ViewState {
        &self.state.view
    }

    pub fn config(&self) -> CameraConfig {
        self.state.config
    }

    /// The photo under review, if any
    pub fn photo(&self) -> Option<&CapturedPhoto> {
        self.state.view.photo()
    }

    /// Whether the torch is asserted
    pub fn torch(&self) -> bool {
        self.state.torch
    }

    pub fn permissions(&self) -> Permissions {
        self.state.permissions
    }

    /// Pending notice, if any
    pub fn notice(&self) -> Option<&Notice> {
        self.state.notice.as_ref()
    }

    /// Dismiss the pending notice
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.state.notice.take()
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn library(&self) -> &M {
        &self.library
    }

    /// Release the camera when the view is torn down
    pub fn shutdown(&mut self) {
        if self.state.view.is_preview() {
            self.release_camera();
        }
    }
}
