// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for camera operations
//!
//! This module provides command-line functionality for:
//! - Taking a photo through the capture controller
//! - Showing or resetting stored permission decisions

use snapcam::app::{Message, Outcome, ViewState};
use snapcam::backends::permissions::{load_decisions, reset_decisions};
use snapcam::{Config, Facing, FlashMode, PermissionState};

/// Take a photo with the requested facing and flash, optionally saving it
pub fn take_photo(
    config: &Config,
    front: bool,
    flash: FlashMode,
    save: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    let mut controller = snapcam::terminal::build_controller(config);

    let result = rt.block_on(async {
        controller.update(Message::Initialize).await;
        if *controller.view() == ViewState::PermissionDenied {
            // Running the command is the consent
            if let Outcome::Failed(e) = controller.update(Message::RequestCameraPermission).await {
                return Err(Box::new(e) as Box<dyn std::error::Error>);
            }
        }

        if front && controller.config().facing == Facing::Back {
            controller.update(Message::ToggleFacing).await;
        }
        for _ in FlashMode::ALL {
            if controller.config().flash == flash {
                break;
            }
            controller.update(Message::ToggleFlash).await;
        }

        println!(
            "Using {} camera, flash {}",
            controller.config().facing,
            controller.config().flash
        );
        println!("Capturing...");
        if let Outcome::Failed(e) = controller.update(Message::Capture).await {
            return Err(Box::new(e) as Box<dyn std::error::Error>);
        }
        if let Some(photo) = controller.photo() {
            println!("Photo captured: {} ({}x{})", photo.uri, photo.width, photo.height);
        }

        if save {
            match controller.update(Message::Save).await {
                Outcome::Failed(e) => return Err(Box::new(e) as Box<dyn std::error::Error>),
                _ => {
                    if let Some(notice) = controller.dismiss_notice() {
                        println!("{}: {}", notice.title, notice.body);
                    }
                }
            }
        }
        Ok(())
    });

    // Release the camera and torch on every exit path
    controller.shutdown();
    result
}

/// Print stored permission decisions, or forget them
pub fn permissions(reset: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    let path = snapcam::config::permissions_path();

    if reset {
        rt.block_on(reset_decisions(&path))?;
        println!("Permission decisions reset: {}", path.display());
        return Ok(());
    }

    let decisions = rt.block_on(load_decisions(&path));
    println!("Permission decisions ({}):", path.display());
    println!("  camera:        {}", describe(decisions.camera));
    println!("  media library: {}", describe(decisions.media_library));
    Ok(())
}

fn describe(state: PermissionState) -> &'static str {
    match state {
        PermissionState::Unknown => "not decided",
        PermissionState::Denied => "denied",
        PermissionState::Granted => "granted",
    }
}
