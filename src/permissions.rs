// SPDX-License-Identifier: GPL-3.0-only

//! Permission gate
//!
//! Tracks camera and media-library authorization for the session. The gate
//! resolves before the capture controller shows any camera UI. A granted
//! permission never reverts within a session, and nothing is retried
//! automatically: a denied camera stays denied until the user asks again.

use crate::backends::permissions::PermissionPlatform;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Authorization state of one permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PermissionState {
    /// Not decided yet
    #[default]
    Unknown,
    /// Refused by the user or the platform
    Denied,
    /// Allowed
    Granted,
}

impl PermissionState {
    pub fn is_granted(self) -> bool {
        self == PermissionState::Granted
    }
}

/// Permissions the application needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionKind {
    /// Access to the camera device
    Camera,
    /// Write access to the photo library
    MediaLibrary,
}

impl std::fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionKind::Camera => write!(f, "camera"),
            PermissionKind::MediaLibrary => write!(f, "media library"),
        }
    }
}

/// Snapshot of both permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Permissions {
    pub camera: PermissionState,
    pub media_library: PermissionState,
}

impl Permissions {
    fn slot(&mut self, kind: PermissionKind) -> &mut PermissionState {
        match kind {
            PermissionKind::Camera => &mut self.camera,
            PermissionKind::MediaLibrary => &mut self.media_library,
        }
    }

    /// Record a resolved state, keeping an earlier grant
    fn record(&mut self, kind: PermissionKind, state: PermissionState) -> PermissionState {
        let slot = self.slot(kind);
        if *slot != PermissionState::Granted {
            *slot = state;
        }
        *slot
    }
}

/// Gate in front of the camera UI
pub struct PermissionGate<P> {
    platform: P,
    permissions: Permissions,
}

impl<P: PermissionPlatform> PermissionGate<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            permissions: Permissions::default(),
        }
    }

    /// Query the current camera authorization and request media-library
    /// access once
    pub async fn initialize(&mut self) -> Permissions {
        let camera = match self.platform.query(PermissionKind::Camera).await {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "Camera permission query failed, treating as denied");
                PermissionState::Denied
            }
        };
        self.permissions.record(PermissionKind::Camera, camera);
        self.request_media_permission().await;

        info!(
            camera = ?self.permissions.camera,
            media_library = ?self.permissions.media_library,
            "Permissions resolved"
        );
        self.permissions
    }

    /// Last known camera authorization
    pub fn current_camera_permission(&self) -> PermissionState {
        self.permissions.camera
    }

    /// Last known media-library authorization
    pub fn current_media_permission(&self) -> PermissionState {
        self.permissions.media_library
    }

    /// Both permissions
    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Ask the platform for camera access
    ///
    /// A grant is cached for the session. Otherwise the platform consent flow
    /// runs; a platform error counts as a denial.
    pub async fn request_camera_permission(&mut self) -> PermissionState {
        if self.permissions.camera.is_granted() {
            return PermissionState::Granted;
        }
        self.request(PermissionKind::Camera).await
    }

    /// Ask the platform for media-library access
    ///
    /// Runs once: a decided state is returned without calling the platform.
    pub async fn request_media_permission(&mut self) -> PermissionState {
        if self.permissions.media_library != PermissionState::Unknown {
            return self.permissions.media_library;
        }
        self.request(PermissionKind::MediaLibrary).await
    }

    async fn request(&mut self, kind: PermissionKind) -> PermissionState {
        debug!(%kind, "Requesting permission");
        let state = match self.platform.request(kind).await {
            Ok(PermissionState::Unknown) => PermissionState::Denied,
            Ok(state) => state,
            Err(e) => {
                warn!(%kind, error = %e, "Permission request failed, treating as denied");
                PermissionState::Denied
            }
        };
        let state = self.permissions.record(kind, state);
        info!(%kind, ?state, "Permission request resolved");
        state
    }
}
