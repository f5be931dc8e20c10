// SPDX-License-Identifier: GPL-3.0-only

//! Fake capabilities recording every call

#![allow(dead_code)]

use snapcam::backends::camera::{
    BackendError, BackendResult, CameraCapability, CameraConfig, CaptureOptions, CapturedPhoto,
};
use snapcam::backends::media_library::MediaLibrary;
use snapcam::backends::permissions::PermissionPlatform;
use snapcam::{CaptureController, PermissionKind, PermissionState};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum CameraCall {
    RenderPreview(CameraConfig),
    Release,
    Torch(bool),
    Capture(CameraConfig, CaptureOptions),
}

#[derive(Default)]
pub struct FakeCamera {
    pub calls: Vec<CameraCall>,
    pub capture_results: VecDeque<BackendResult<CapturedPhoto>>,
    pub torch: bool,
}

impl FakeCamera {
    pub fn capture_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, CameraCall::Capture(..)))
            .count()
    }
}

pub fn photo(uri: &str) -> CapturedPhoto {
    CapturedPhoto {
        uri: uri.to_string(),
        width: 4032,
        height: 3024,
    }
}

impl CameraCapability for FakeCamera {
    fn render_live_preview(&mut self, config: &CameraConfig) {
        self.calls.push(CameraCall::RenderPreview(*config));
    }

    fn release_preview(&mut self) {
        self.calls.push(CameraCall::Release);
    }

    fn set_torch(&mut self, enabled: bool) {
        self.torch = enabled;
        self.calls.push(CameraCall::Torch(enabled));
    }

    fn capture_photo(
        &mut self,
        config: CameraConfig,
        options: CaptureOptions,
    ) -> impl Future<Output = BackendResult<CapturedPhoto>> {
        self.calls.push(CameraCall::Capture(config, options));
        let result = self
            .capture_results
            .pop_front()
            .unwrap_or_else(|| Ok(photo("file:///tmp/default.jpg")));
        futures::future::ready(result)
    }
}

#[derive(Default)]
pub struct FakeLibrary {
    pub persisted: Vec<String>,
    pub fail_with: Option<BackendError>,
}

impl MediaLibrary for FakeLibrary {
    fn persist(&mut self, uri: &str) -> impl Future<Output = BackendResult<String>> {
        self.persisted.push(uri.to_string());
        let result = match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(format!("library://{}", self.persisted.len())),
        };
        futures::future::ready(result)
    }
}

/// Shared record of platform calls, readable after the gate took ownership
pub type PlatformLog = Rc<RefCell<Vec<(PermissionKind, &'static str)>>>;

pub struct FakePlatform {
    pub camera_query: BackendResult<PermissionState>,
    pub camera_request: BackendResult<PermissionState>,
    pub media_request: BackendResult<PermissionState>,
    pub log: PlatformLog,
}

impl FakePlatform {
    pub fn new(camera_query: PermissionState) -> Self {
        Self {
            camera_query: Ok(camera_query),
            camera_request: Ok(PermissionState::Granted),
            media_request: Ok(PermissionState::Granted),
            log: PlatformLog::default(),
        }
    }

    pub fn granted() -> Self {
        Self::new(PermissionState::Granted)
    }

    pub fn with_camera_request(mut self, result: BackendResult<PermissionState>) -> Self {
        self.camera_request = result;
        self
    }

    pub fn with_media_request(mut self, result: BackendResult<PermissionState>) -> Self {
        self.media_request = result;
        self
    }

    pub fn calls(&self) -> usize {
        self.log.borrow().len()
    }
}

impl PermissionPlatform for FakePlatform {
    fn query(&self, kind: PermissionKind) -> impl Future<Output = BackendResult<PermissionState>> {
        self.log.borrow_mut().push((kind, "query"));
        let result = match kind {
            PermissionKind::Camera => self.camera_query.clone(),
            PermissionKind::MediaLibrary => Ok(PermissionState::Unknown),
        };
        futures::future::ready(result)
    }

    fn request(
        &mut self,
        kind: PermissionKind,
    ) -> impl Future<Output = BackendResult<PermissionState>> {
        self.log.borrow_mut().push((kind, "request"));
        let result = match kind {
            PermissionKind::Camera => self.camera_request.clone(),
            PermissionKind::MediaLibrary => self.media_request.clone(),
        };
        futures::future::ready(result)
    }
}

pub type FakeController = CaptureController<FakeCamera, FakeLibrary, FakePlatform>;

pub fn controller(platform: FakePlatform) -> FakeController {
    CaptureController::new(FakeCamera::default(), FakeLibrary::default(), platform)
}

/// Controller already showing the live preview
pub async fn previewing() -> FakeController {
    let mut controller = controller(FakePlatform::granted());
    controller.initialize().await;
    assert!(controller.view().is_preview());
    controller
}
