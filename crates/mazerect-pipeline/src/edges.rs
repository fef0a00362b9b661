// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge extraction — Canny edge detection on the cleaned grayscale raster.

use image::GrayImage;
use imageproc::edges::canny;
use tracing::{debug, instrument};

/// Detect edges in the cleaned raster.
///
/// Produces a binary map: edge pixels are 255, everything else 0.
#[instrument(skip(image), fields(low, high))]
pub fn detect(image: &GrayImage, low: f32, high: f32) -> GrayImage {
    let edges = canny(image, low, high);
    debug!("Canny edge detection complete");
    edges
}
