// SPDX-License-Identifier: GPL-3.0-only

//! Camera capability abstraction
//!
//! The controller never touches camera hardware directly. It drives a
//! [`CameraCapability`] which renders the live preview, switches the torch
//! and takes still photos.
//!
//! ```text
//! ┌──────────────────────┐
//! │  CaptureController   │
//! └──────────┬───────────┘
//!            │
//!            ▼
//! ┌──────────────────────┐
//! │ CameraCapability     │  ← Common interface
//! └──────────┬───────────┘
//!            │
//!            ▼
//!     ┌──────────────┐
//!     │VirtualCamera │  ← Concrete implementation
//!     └──────────────┘
//! ```

pub mod types;

pub use types::*;

use std::future::Future;

/// Camera capability used by the capture controller
pub trait CameraCapability {
    /// Start (or reconfigure) the live preview for `config`
    fn render_live_preview(&mut self, config: &CameraConfig);

    /// Release the preview stream and the camera device
    fn release_preview(&mut self);

    /// Assert or release the continuous illumination used during preview
    fn set_torch(&mut self, enabled: bool);

    /// Take a still photo
    ///
    /// # Returns
    /// * `Ok(CapturedPhoto)` - Handle to the stored image
    /// * `Err(BackendError)` - Hardware busy, capability unavailable, encoding failure
    fn capture_photo(
        &mut self,
        config: CameraConfig,
        options: CaptureOptions,
    ) -> impl Future<Output = BackendResult<CapturedPhoto>>;
}
