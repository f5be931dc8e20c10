// SPDX-License-Identifier: GPL-3.0-only

//! Synthetic frames for the virtual camera
//!
//! The rear camera shows scrolling colour bars, the front camera a radial
//! gradient. The torch lifts the brightness of either.

use crate::backends::camera::Facing;
use image::{Rgb, RgbImage};

/// SMPTE-style bar colours
const BARS: [[u8; 3]; 7] = [
    [192, 192, 192],
    [192, 192, 0],
    [0, 192, 192],
    [0, 192, 0],
    [192, 0, 192],
    [192, 0, 0],
    [0, 0, 192],
];

/// Added to every channel while the torch is on
const TORCH_BOOST: u8 = 48;

/// Render one frame
///
/// `phase` advances the animation; captures use a fixed phase.
pub fn render(facing: Facing, width: u32, height: u32, phase: u64, torch: bool) -> RgbImage {
    let width = width.max(1);
    let height = height.max(1);

    let mut img = match facing {
        Facing::Back => color_bars(width, height, phase),
        Facing::Front => radial_gradient(width, height, phase),
    };

    if torch {
        for pixel in img.pixels_mut() {
            for channel in pixel.0.iter_mut() {
                *channel = channel.saturating_add(TORCH_BOOST);
            }
        }
    }
    img
}

fn color_bars(width: u32, height: u32, phase: u64) -> RgbImage {
    let bar_width = (width / BARS.len() as u32).max(1);
    let shift = (phase % width as u64) as u32;
    RgbImage::from_fn(width, height, |x, _| {
        let idx = ((x + shift) % width / bar_width) as usize % BARS.len();
        Rgb(BARS[idx])
    })
}

fn radial_gradient(width: u32, height: u32, phase: u64) -> RgbImage {
    let cx = width as f32 / 2.0;
    let cy = height as f32 / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt().max(1.0);
    let hue_shift = (phase % 256) as u8;
    RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let t = ((dx * dx + dy * dy).sqrt() / max_dist).clamp(0.0, 1.0);
        let v = (255.0 * (1.0 - t)) as u8;
        Rgb([v, v.wrapping_add(hue_shift) / 2, 255 - v / 2])
    })
}
