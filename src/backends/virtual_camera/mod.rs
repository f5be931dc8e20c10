// SPDX-License-Identifier: GPL-3.0-only

//! Virtual camera
//!
//! A [`CameraCapability`] that needs no hardware. Preview frames and stills
//! are synthetic test patterns; stills are JPEG encoded into the capture
//! directory and handed back as `file://` uris. When torch LEDs were
//! discovered, the torch signal drives them.
//!
//! ```text
//! CameraConfig ──► pattern::render ──► mirror (front, processing on)
//!                                          │
//!                                          ▼
//!                              JPEG encode (spawn_blocking)
//!                                          │
//!                                          ▼
//!                               <capture_dir>/<uuid>.jpg
//! ```

pub mod pattern;

use crate::backends::camera::{
    BackendError, BackendResult, CameraCapability, CameraConfig, CaptureOptions, CapturedPhoto,
    Facing,
};
use crate::flash::{self, TorchDevice};
use crate::storage;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Synthetic camera
pub struct VirtualCamera {
    capture_dir: PathBuf,
    width: u32,
    height: u32,
    mirror_front: bool,
    torch_devices: Vec<TorchDevice>,
    /// Config of the running preview, `None` when released
    preview: Option<CameraConfig>,
    torch: bool,
    frame_counter: u64,
}

impl VirtualCamera {
    pub fn new(capture_dir: PathBuf, width: u32, height: u32) -> Self {
        Self {
            capture_dir,
            width,
            height,
            mirror_front: true,
            torch_devices: Vec::new(),
            preview: None,
            torch: false,
            frame_counter: 0,
        }
    }

    /// Mirror front camera output (selfie mode)
    pub fn with_mirror_front(mut self, mirror: bool) -> Self {
        self.mirror_front = mirror;
        self
    }

    /// Drive these LEDs with the torch signal
    pub fn with_torch_devices(mut self, devices: Vec<TorchDevice>) -> Self {
        self.torch_devices = devices;
        self
    }

    pub fn capture_dir(&self) -> &Path {
        &self.capture_dir
    }

    /// Whether the preview stream is running
    pub fn is_previewing(&self) -> bool {
        self.preview.is_some()
    }

    /// Whether the torch is lit
    pub fn torch(&self) -> bool {
        self.torch
    }

    /// Next preview frame scaled to `width`x`height`, `None` when released
    pub fn preview_frame(&mut self, width: u32, height: u32) -> Option<RgbImage> {
        let config = self.preview?;
        self.frame_counter = self.frame_counter.wrapping_add(1);
        let frame = pattern::render(config.facing, width, height, self.frame_counter, self.torch);
        Some(self.process(frame, config.facing, false))
    }

    fn process(&self, frame: RgbImage, facing: Facing, skip_processing: bool) -> RgbImage {
        if facing == Facing::Front && self.mirror_front && !skip_processing {
            image::imageops::flip_horizontal(&frame)
        } else {
            frame
        }
    }
}

impl CameraCapability for VirtualCamera {
    fn render_live_preview(&mut self, config: &CameraConfig) {
        if self.preview.is_none() {
            info!(facing = %config.facing, "Starting virtual camera preview");
        } else {
            debug!(facing = %config.facing, flash = %config.flash, "Reconfiguring preview");
        }
        self.preview = Some(*config);
    }

    fn release_preview(&mut self) {
        if self.preview.take().is_some() {
            info!("Virtual camera preview released");
        }
        if self.torch {
            self.set_torch(false);
        }
    }

    fn set_torch(&mut self, enabled: bool) {
        if self.torch == enabled {
            return;
        }
        debug!(enabled, leds = self.torch_devices.len(), "Torch");
        self.torch = enabled;
        flash::set_all(&self.torch_devices, enabled);
    }

    async fn capture_photo(
        &mut self,
        config: CameraConfig,
        options: CaptureOptions,
    ) -> BackendResult<CapturedPhoto> {
        if self.preview.is_none() {
            return Err(BackendError::NotAvailable(
                "preview is not running".to_string(),
            ));
        }
        if options.base64 {
            warn!("Inline base64 payloads are not produced by the virtual camera");
        }

        let frame = pattern::render(config.facing, self.width, self.height, 0, self.torch);
        let frame = self.process(frame, config.facing, options.skip_processing);
        let (width, height) = frame.dimensions();

        tokio::fs::create_dir_all(&self.capture_dir).await?;
        let path = self
            .capture_dir
            .join(format!("{}.jpg", uuid::Uuid::new_v4()));

        let quality = options.jpeg_quality();
        let encode_path = path.clone();
        tokio::task::spawn_blocking(move || -> BackendResult<()> {
            let file = std::fs::File::create(&encode_path)?;
            let mut writer = BufWriter::new(file);
            JpegEncoder::new_with_quality(&mut writer, quality).encode_image(&frame)?;
            Ok(())
        })
        .await
        .map_err(|e| BackendError::Other(format!("encoder task failed: {e}")))??;

        info!(path = %path.display(), width, height, quality, "Photo captured");

        Ok(CapturedPhoto {
            uri: storage::path_to_uri(&path),
            width,
            height,
        })
    }
}

impl Drop for VirtualCamera {
    fn drop(&mut self) {
        // LEDs outlive the process; never leave one lit
        if self.torch {
            info!("Virtual camera dropped with torch lit, switching it off");
            self.torch = false;
            flash::set_all(&self.torch_devices, false);
        }
    }
}
