// SPDX-License-Identifier: GPL-3.0-only

//! Snap Camera - a minimal camera application
//!
//! Requests camera and media-library permissions, shows a live preview with
//! flash and front/back toggles, captures a still photo, reviews it and
//! optionally saves it to the photo library.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Capture view controller state machine
//! - [`permissions`]: Permission gate
//! - [`backends`]: Camera, media library and permission capabilities
//! - [`flash`]: Flash modes and torch LEDs
//! - [`config`]: User configuration handling
//! - [`storage`]: Photo paths, uris and file naming
//! - [`terminal`]: Terminal front-end
//!
//! # Example
//!
//! ```no_run
//! use snapcam::app::{CaptureController, Message};
//! use snapcam::backends::media_library::FilesystemLibrary;
//! use snapcam::backends::permissions::DesktopPermissions;
//! use snapcam::backends::virtual_camera::VirtualCamera;
//!
//! # async fn run() {
//! let camera = VirtualCamera::new("/tmp/captures".into(), 640, 480);
//! let library = FilesystemLibrary::new("/tmp/library".into());
//! let platform = DesktopPermissions::new("/tmp/permissions.json".into(), "/tmp/library".into());
//!
//! let mut controller = CaptureController::new(camera, library, platform);
//! controller.update(Message::Initialize).await;
//! controller.update(Message::RequestCameraPermission).await;
//! controller.update(Message::Capture).await;
//! controller.update(Message::Save).await;
//! # }
//! ```

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod flash;
pub mod i18n;
pub mod permissions;
pub mod storage;
pub mod terminal;

// Re-export commonly used types
pub use app::{CaptureController, ControllerState, Message, Notice, NoticeKind, Outcome, ViewState};
pub use backends::camera::{CameraConfig, CapturedPhoto, Facing};
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use flash::FlashMode;
pub use permissions::{PermissionKind, PermissionState};
