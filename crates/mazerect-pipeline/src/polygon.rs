// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Polygon approximation — reduce a dense boundary contour to a few vertices
// with Douglas-Peucker, using a tolerance proportional to the perimeter.

use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;
use tracing::{debug, instrument};

/// Approximate a closed contour by a polygon.
///
/// The tolerance is `epsilon_factor` times the closed-curve perimeter, so
/// the approximation adapts to the contour's scale. The result may have any
/// vertex count >= 1; callers must not assume a quadrilateral.
#[instrument(skip(contour), fields(points = contour.len(), epsilon_factor))]
pub fn approximate(contour: &[Point<i32>], epsilon_factor: f64) -> Vec<Point<i32>> {
    let perimeter = arc_length(contour, true);
    let epsilon = epsilon_factor * perimeter;
    let polygon = approximate_polygon_dp(contour, epsilon, true);
    debug!(
        perimeter,
        epsilon,
        vertices = polygon.len(),
        "Polygon approximation complete"
    );
    polygon
}
