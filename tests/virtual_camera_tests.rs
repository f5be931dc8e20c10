// SPDX-License-Identifier: GPL-3.0-only

//! End-to-end tests with the virtual camera, filesystem library and
//! desktop permission store

use snapcam::backends::media_library::FilesystemLibrary;
use snapcam::backends::permissions::{DesktopPermissions, load_decisions};
use snapcam::backends::virtual_camera::VirtualCamera;
use snapcam::flash::TorchDevice;
use snapcam::{CaptureController, Message, NoticeKind, Outcome, PermissionState, ViewState};
use std::path::Path;

type DesktopController = CaptureController<VirtualCamera, FilesystemLibrary, DesktopPermissions>;

fn desktop_controller(root: &Path) -> DesktopController {
    CaptureController::new(
        VirtualCamera::new(root.join("captures"), 96, 64),
        FilesystemLibrary::new(root.join("Pictures")),
        DesktopPermissions::new(root.join("permissions.json"), root.join("Pictures")),
    )
}

/// Fake sysfs LED at full brightness 255, returns its brightness file
fn fake_led(root: &Path) -> std::path::PathBuf {
    let led = root.join("leds").join("white:flash");
    std::fs::create_dir_all(&led).unwrap();
    std::fs::write(led.join("max_brightness"), "255").unwrap();
    std::fs::write(led.join("brightness"), "0").unwrap();
    led.join("brightness")
}

fn lit_controller(root: &Path, capture_dir: std::path::PathBuf) -> DesktopController {
    let camera = VirtualCamera::new(capture_dir, 32, 24)
        .with_torch_devices(TorchDevice::discover_in(&root.join("leds")));
    CaptureController::new(
        camera,
        FilesystemLibrary::new(root.join("Pictures")),
        DesktopPermissions::new(root.join("permissions.json"), root.join("Pictures")),
    )
}

fn library_files(root: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(root.join("Pictures")) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn test_first_run_asks_for_camera_then_saves() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = desktop_controller(dir.path());

    controller.update(Message::Initialize).await;
    assert_eq!(*controller.view(), ViewState::PermissionDenied);
    assert!(!controller.camera().is_previewing());

    assert_eq!(
        controller.update(Message::RequestCameraPermission).await,
        Outcome::Applied
    );
    assert!(controller.view().is_preview());
    assert!(controller.camera().is_previewing());
    assert!(controller.camera_mut().preview_frame(16, 8).is_some());

    controller.update(Message::ToggleFlash).await;
    assert!(controller.camera().torch());

    assert_eq!(controller.update(Message::Capture).await, Outcome::Applied);
    assert!(controller.view().is_review());
    assert!(!controller.camera().is_previewing());
    assert!(!controller.camera().torch());

    let photo = controller.photo().cloned().unwrap();
    assert_eq!((photo.width, photo.height), (96, 64));
    let captured = snapcam::storage::uri_to_path(&photo.uri).unwrap();
    assert!(captured.exists());

    assert_eq!(controller.update(Message::Save).await, Outcome::Applied);
    assert_eq!(
        controller.notice().map(|n| n.kind),
        Some(NoticeKind::Confirmation)
    );
    let files = library_files(dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("IMG_") && files[0].ends_with(".jpg"));

    let decisions = load_decisions(&dir.path().join("permissions.json")).await;
    assert_eq!(decisions.camera, PermissionState::Granted);
    assert_eq!(decisions.media_library, PermissionState::Granted);
}

#[tokio::test]
async fn test_stored_grant_skips_permission_screen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut first = desktop_controller(dir.path());
        first.update(Message::Initialize).await;
        first.update(Message::RequestCameraPermission).await;
        first.shutdown();
    }

    let mut controller = desktop_controller(dir.path());
    controller.update(Message::Initialize).await;
    assert!(controller.view().is_preview());
    assert!(controller.notice().is_none());
}

#[tokio::test]
async fn test_retake_then_capture_again() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = desktop_controller(dir.path());
    controller.update(Message::Initialize).await;
    controller.update(Message::RequestCameraPermission).await;

    controller.update(Message::Capture).await;
    let first = controller.photo().cloned().unwrap();
    assert_eq!(controller.update(Message::Retake).await, Outcome::Applied);
    assert!(controller.camera().is_previewing());

    controller.update(Message::ToggleFacing).await;
    controller.update(Message::Capture).await;
    let second = controller.photo().cloned().unwrap();
    assert_ne!(first.uri, second.uri);
    // Nothing saved without an explicit save
    assert!(library_files(dir.path()).is_empty());
}

#[tokio::test]
async fn test_dropping_controller_switches_torch_off() {
    let dir = tempfile::tempdir().unwrap();
    let brightness = fake_led(dir.path());
    let mut controller = lit_controller(dir.path(), dir.path().join("captures"));

    controller.update(Message::Initialize).await;
    controller.update(Message::RequestCameraPermission).await;
    controller.update(Message::ToggleFlash).await;
    assert_eq!(std::fs::read_to_string(&brightness).unwrap(), "255");

    drop(controller);
    assert_eq!(std::fs::read_to_string(&brightness).unwrap(), "0");
}

#[tokio::test]
async fn test_failed_capture_then_drop_switches_torch_off() {
    let dir = tempfile::tempdir().unwrap();
    let brightness = fake_led(dir.path());
    // A file where the capture directory should be
    let blocked = dir.path().join("captures");
    std::fs::write(&blocked, b"").unwrap();
    let mut controller = lit_controller(dir.path(), blocked);

    controller.update(Message::Initialize).await;
    controller.update(Message::RequestCameraPermission).await;
    controller.update(Message::ToggleFlash).await;

    let outcome = controller.update(Message::Capture).await;
    assert!(matches!(outcome, Outcome::Failed(_)));
    assert!(controller.view().is_preview());
    assert_eq!(std::fs::read_to_string(&brightness).unwrap(), "255");

    drop(controller);
    assert_eq!(std::fs::read_to_string(&brightness).unwrap(), "0");
}
