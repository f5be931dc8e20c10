// SPDX-License-Identifier: GPL-3.0-only

//! Controller operation modules
//!
//! Operations are grouped by functional domain; each one checks that it is
//! legal in the current view and returns [`Outcome::Ignored`] otherwise,
//! without touching any capability.
//!
//! [`Outcome::Ignored`]: crate::app::Outcome::Ignored

pub mod camera;
pub mod capture;
pub mod permission;
