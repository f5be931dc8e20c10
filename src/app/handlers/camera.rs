// SPDX-License-Identifier: GPL-3.0-only

//! Camera configuration handlers
//!
//! Handles facing and flash toggles and keeps the torch signal in sync with
//! the preview.

use crate::app::CaptureController;
use crate::app::state::{Outcome, ViewState};
use crate::backends::camera::CameraCapability;
use crate::backends::media_library::MediaLibrary;
use crate::backends::permissions::PermissionPlatform;
use tracing::{debug, info};

impl<C, M, P> CaptureController<C, M, P>
where
    C: CameraCapability,
    M: MediaLibrary,
    P: PermissionPlatform,
{
    /// Flip between the back and front camera (preview only)
    pub fn toggle_facing(&mut self) -> Outcome {
        if !self.state.view.is_preview() {
            debug!(view = self.state.view.name(), "Ignoring facing toggle");
            return Outcome::Ignored;
        }

        self.state.config.facing = self.state.config.facing.flipped();
        info!(facing = %self.state.config.facing, "Switched camera");
        self.camera.render_live_preview(&self.state.config);
        Outcome::Applied
    }

    /// Cycle flash Off -> On -> Auto -> Off (preview only)
    pub fn toggle_flash(&mut self) -> Outcome {
        if !self.state.view.is_preview() {
            debug!(view = self.state.view.name(), "Ignoring flash toggle");
            return Outcome::Ignored;
        }

        self.state.config.flash = self.state.config.flash.next();
        info!(flash = %self.state.config.flash, "Flash mode changed");
        self.camera.render_live_preview(&self.state.config);
        self.sync_torch();
        Outcome::Applied
    }

    /// Show the live preview with the current config
    pub(crate) fn enter_preview(&mut self) {
        self.state.view = ViewState::Preview;
        self.camera.render_live_preview(&self.state.config);
        self.sync_torch();
    }

    /// Drop the torch and release the preview stream
    pub(crate) fn release_camera(&mut self) {
        if self.state.torch {
            self.camera.set_torch(false);
            self.state.torch = false;
        }
        self.camera.release_preview();
    }

    /// Torch is asserted exactly while previewing with flash On
    fn sync_torch(&mut self) {
        let wanted = self.state.view.is_preview() && self.state.config.wants_torch();
        if wanted != self.state.torch {
            debug!(torch = wanted, "Torch signal");
            self.camera.set_torch(wanted);
            self.state.torch = wanted;
        }
    }
}
