// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rectification — the final pipeline stage, keyed on how many corners were
// detected. Exactly four corners trigger a perspective warp into the
// canonical destination frame; anything else annotates the original raster.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use imageproc::geometric_transformations::{Interpolation, Projection, warp_into};
use mazerect_core::error::Result;
use mazerect_core::{CornerDetection, OrderedQuad, PipelineConfig, Point};
use tracing::{debug, info, instrument, warn};

use crate::convert;

/// Corner marker color: red, in the native RGB channel order.
const MARKER_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Produce the final annotated RGBA raster for a corner detection result.
///
/// - Four corners: the original raster is warped so the quadrilateral fills a
///   `dest_width` x `dest_height` frame, and markers are drawn at the frame's
///   own corners.
/// - Any other count: markers are drawn at the detected points on a color
///   copy of the unwarped original.
/// - No corners: the original is returned as a color copy with no markers.
#[instrument(skip(original, detection, config), fields(corners = detection.corner_count()))]
pub fn rectify(
    original: &GrayImage,
    detection: &CornerDetection,
    config: &PipelineConfig,
) -> Result<RgbaImage> {
    match detection {
        CornerDetection::None => {
            info!("No corners detected; returning unwarped copy");
            annotate_original(original, &[], config.marker_radius)
        }
        CornerDetection::Unordered(points) => {
            info!(
                corners = points.len(),
                "Non-quadrilateral detection; annotating original raster"
            );
            annotate_original(original, points, config.marker_radius)
        }
        CornerDetection::Quad(quad) => warp_quad(original, quad, config),
    }
}

/// Warp the quadrilateral onto the destination frame and mark its corners.
fn warp_quad(original: &GrayImage, quad: &OrderedQuad, config: &PipelineConfig) -> Result<RgbaImage> {
    let (dest_w, dest_h) = (config.dest_width, config.dest_height);

    let src: [(f32, f32); 4] = quad
        .as_array()
        .map(|p| (p.x as f32, p.y as f32));
    let dest: [(f32, f32); 4] = [
        (0.0, 0.0),                                   // top-left
        ((dest_w - 1) as f32, 0.0),                   // top-right
        ((dest_w - 1) as f32, (dest_h - 1) as f32),   // bottom-right
        (0.0, (dest_h - 1) as f32),                   // bottom-left
    ];

    let Some(projection) = Projection::from_control_points(src, dest) else {
        warn!(?quad, "Degenerate quadrilateral; falling back to annotated original");
        return annotate_original(original, &quad.as_array(), config.marker_radius);
    };

    let mut warped = GrayImage::new(dest_w, dest_h);
    warp_into(
        original,
        &projection,
        Interpolation::Bilinear,
        Luma([0u8]),
        &mut warped,
    );
    debug!(dest_w, dest_h, "Perspective warp applied");

    let mut color = DynamicImage::ImageLuma8(warped).to_rgb8();
    let corners = [
        (0i32, 0i32),
        (dest_w as i32 - 1, 0),
        (dest_w as i32 - 1, dest_h as i32 - 1),
        (0, dest_h as i32 - 1),
    ];
    for (x, y) in corners {
        draw_filled_circle_mut(&mut color, (x, y), config.marker_radius as i32, MARKER_COLOR);
    }

    convert::to_rgba(&DynamicImage::ImageRgb8(color))
}

/// Color copy of the original raster with markers at the given points.
fn annotate_original(original: &GrayImage, points: &[Point], radius: u32) -> Result<RgbaImage> {
    let mut color: RgbImage = DynamicImage::ImageLuma8(original.clone()).to_rgb8();
    for p in points {
        draw_filled_circle_mut(&mut color, (p.x, p.y), radius as i32, MARKER_COLOR);
    }
    convert::to_rgba(&DynamicImage::ImageRgb8(color))
}
