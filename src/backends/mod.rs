// SPDX-License-Identifier: GPL-3.0-only

//! Capability layer between the controller and the host platform
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            CaptureController                │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────┴────────────────────────┐
//! │              Backend Layer                  │
//! │  ┌─────────────┐ ┌─────────────┐ ┌────────┐ │
//! │  │   Camera    │ │Media library│ │ Perms  │ │
//! │  │  (virtual)  │ │ (directory) │ │ (file) │ │
//! │  └─────────────┘ └─────────────┘ └────────┘ │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`camera`]: Camera capability trait and shared types
//! - [`media_library`]: Photo library capability
//! - [`permissions`]: Host authorization
//! - [`virtual_camera`]: Hardware-free camera implementation

pub mod camera;
pub mod media_library;
pub mod permissions;
pub mod virtual_camera;
