// SPDX-License-Identifier: GPL-3.0-only

//! Permission platform
//!
//! Desktop systems have no camera consent dialog, so [`DesktopPermissions`]
//! keeps the user's decisions in `permissions.json` next to the config file.
//! Camera consent is given through the in-app "Allow camera access" button;
//! media-library access is granted when the library directory is writable.

use crate::backends::camera::{BackendError, BackendResult};
use crate::permissions::{PermissionKind, PermissionState, Permissions};
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Host platform authorization
pub trait PermissionPlatform {
    /// Current decision without prompting
    fn query(&self, kind: PermissionKind) -> impl Future<Output = BackendResult<PermissionState>>;

    /// Run the consent flow if needed and return the decision
    fn request(
        &mut self,
        kind: PermissionKind,
    ) -> impl Future<Output = BackendResult<PermissionState>>;
}

/// Permission platform backed by a decisions file
#[derive(Debug, Clone)]
pub struct DesktopPermissions {
    store_path: PathBuf,
    library_dir: PathBuf,
}

impl DesktopPermissions {
    pub fn new(store_path: PathBuf, library_dir: PathBuf) -> Self {
        Self {
            store_path,
            library_dir,
        }
    }

    /// Path of the decisions file
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    async fn persist(&self, kind: PermissionKind, state: PermissionState) {
        let mut decisions = load_decisions(&self.store_path).await;
        match kind {
            PermissionKind::Camera => decisions.camera = state,
            PermissionKind::MediaLibrary => decisions.media_library = state,
        }
        if let Err(e) = save_decisions(&self.store_path, &decisions).await {
            warn!(path = %self.store_path.display(), error = %e, "Failed to store permission decision");
        }
    }

    async fn library_writable(&self) -> BackendResult<bool> {
        tokio::fs::create_dir_all(&self.library_dir).await?;
        let metadata = tokio::fs::metadata(&self.library_dir).await?;
        Ok(metadata.is_dir() && !metadata.permissions().readonly())
    }
}

impl PermissionPlatform for DesktopPermissions {
    async fn query(&self, kind: PermissionKind) -> BackendResult<PermissionState> {
        let decisions = load_decisions(&self.store_path).await;
        let state = match kind {
            PermissionKind::Camera => decisions.camera,
            PermissionKind::MediaLibrary => decisions.media_library,
        };
        debug!(%kind, ?state, "Stored permission decision");
        Ok(state)
    }

    async fn request(&mut self, kind: PermissionKind) -> BackendResult<PermissionState> {
        let state = match kind {
            // The request is issued from the allow button, which is the consent
            PermissionKind::Camera => PermissionState::Granted,
            PermissionKind::MediaLibrary => match self.library_writable().await {
                Ok(true) => PermissionState::Granted,
                Ok(false) => PermissionState::Denied,
                Err(e) => {
                    warn!(
                        path = %self.library_dir.display(),
                        error = %e,
                        "Library directory not accessible"
                    );
                    PermissionState::Denied
                }
            },
        };
        info!(%kind, ?state, "Permission decision");
        self.persist(kind, state).await;
        Ok(state)
    }
}

/// Read stored decisions, falling back to undecided on any error
pub async fn load_decisions(path: &Path) -> Permissions {
    let Ok(content) = tokio::fs::read_to_string(path).await else {
        return Permissions::default();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Ignoring unreadable permission decisions");
        Permissions::default()
    })
}

/// Write decisions, creating the parent directory
pub async fn save_decisions(path: &Path, decisions: &Permissions) -> BackendResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let content = serde_json::to_string_pretty(decisions)
        .map_err(|e| BackendError::Other(e.to_string()))?;
    tokio::fs::write(path, content).await?;
    Ok(())
}

/// Forget all stored decisions
pub async fn reset_decisions(path: &Path) -> BackendResult<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
