// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Boundary selection — extract contours from the edge map, discard those
// whose bounding box comes too close to the image borders, and keep the
// largest remaining one.

use image::GrayImage;
use imageproc::contours::{Contour, find_contours};
use imageproc::point::Point;
use mazerect_core::BoundingBox;
use tracing::{debug, instrument};

/// Trace all contours in a binary edge map.
///
/// Uses Suzuki-Abe border following; the traversal is row-major, so the
/// returned order is deterministic for a given edge map.
pub fn extract_contours(edges: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(edges)
}

/// Select the largest outer contour that keeps `margin` pixels clear of every
/// image border, or `None` when no contour qualifies.
///
/// Only top-level contours are considered, matching external-only retrieval.
/// Comparison is strictly greater-than on area: among equal-area candidates
/// the first one in extraction order wins, which makes the selection
/// reproducible.
#[instrument(skip(contours), fields(count = contours.len(), margin))]
pub fn select_boundary(
    contours: &[Contour<i32>],
    image_width: u32,
    image_height: u32,
    margin: u32,
) -> Option<Vec<Point<i32>>> {
    let mut max_area = 0.0f64;
    let mut largest: Option<&Contour<i32>> = None;

    for contour in contours {
        if contour.parent.is_some() {
            continue;
        }
        let area = contour_area(&contour.points);
        if area > max_area {
            let Some(bbox) = bounding_box(&contour.points) else {
                continue;
            };
            if bbox.clear_of_borders(image_width, image_height, margin) {
                max_area = area;
                largest = Some(contour);
            }
        }
    }

    match largest {
        Some(contour) => {
            debug!(
                area = max_area,
                points = contour.points.len(),
                "Boundary contour selected"
            );
            Some(contour.points.clone())
        }
        None => {
            debug!("No contour clears the border margin");
            None
        }
    }
}

/// Enclosed area of a closed point sequence via the shoelace formula.
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0f64;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x as f64 * points[j].y as f64;
        area -= points[j].x as f64 * points[i].y as f64;
    }
    area.abs() / 2.0
}

/// Axis-aligned bounding box of a point set, or `None` for an empty set.
pub fn bounding_box(points: &[Point<i32>]) -> Option<BoundingBox> {
    let first = points.first()?;
    let (mut min_x, mut max_x) = (first.x, first.x);
    let (mut min_y, mut max_y) = (first.y, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    Some(BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}
