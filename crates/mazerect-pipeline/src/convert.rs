// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Format adaptation — channel conversions to the canonical RGBA
// representation used for returned, persisted, and visualized rasters.

use image::{DynamicImage, GrayImage, RgbImage, Rgba, RgbaImage};
use mazerect_core::error::{MazerectError, Result};

/// Convert a grayscale or RGB raster to RGBA.
///
/// Accepts exactly 1-channel grayscale (luma replicated into all three color
/// channels) or 3-channel color. Any other channel configuration, including
/// an already-4-channel raster, is an error rather than a pass-through.
pub fn to_rgba(image: &DynamicImage) -> Result<RgbaImage> {
    match image {
        DynamicImage::ImageLuma8(gray) => Ok(gray_to_rgba(gray)),
        DynamicImage::ImageRgb8(rgb) => Ok(rgb_to_rgba(rgb)),
        other => Err(MazerectError::UnsupportedFormat(format!(
            "cannot convert {:?} to RGBA (expected 8-bit grayscale or RGB)",
            other.color()
        ))),
    }
}

/// Replicate luma into R, G, and B with an opaque alpha channel.
pub fn gray_to_rgba(gray: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(gray.width(), gray.height(), |x, y| {
        let v = gray.get_pixel(x, y).0[0];
        Rgba([v, v, v, 255])
    })
}

/// Append an opaque alpha channel to an RGB raster.
pub fn rgb_to_rgba(rgb: &RgbImage) -> RgbaImage {
    RgbaImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let image::Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        Rgba([r, g, b, 255])
    })
}
