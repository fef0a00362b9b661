// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Corner classification — assign semantic roles (top-left, top-right,
// bottom-right, bottom-left) to the vertices of an approximated boundary
// polygon.

use mazerect_core::{CornerDetection, OrderedQuad, Point};
use tracing::{debug, instrument};

/// Classify an approximated polygon by its vertex count.
///
/// Exactly four vertices are ordered for perspective mapping; any other
/// non-zero count passes through in its original sequence, and an empty
/// polygon yields `CornerDetection::None`.
#[instrument(skip(polygon), fields(vertices = polygon.len()))]
pub fn classify(polygon: &[imageproc::point::Point<i32>]) -> CornerDetection {
    let points: Vec<Point> = polygon.iter().map(|p| Point::new(p.x, p.y)).collect();
    let detection = match points.len() {
        0 => CornerDetection::None,
        4 => {
            let quad = order_corners([points[0], points[1], points[2], points[3]]);
            CornerDetection::Quad(quad)
        }
        _ => CornerDetection::Unordered(points),
    };
    debug!(corners = detection.corner_count(), "Corners classified");
    detection
}

/// Order four points as [top-left, top-right, bottom-right, bottom-left].
///
/// Top-left has the smallest `x + y`, bottom-right the largest; top-right has
/// the smallest `y - x`, bottom-left the largest. Ties go to the first
/// extremum in input order.
pub fn order_corners(points: [Point; 4]) -> OrderedQuad {
    let top_left = extremum(&points, |p| p.x + p.y, false);
    let bottom_right = extremum(&points, |p| p.x + p.y, true);
    let top_right = extremum(&points, |p| p.y - p.x, false);
    let bottom_left = extremum(&points, |p| p.y - p.x, true);

    OrderedQuad {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    }
}

/// First point minimising (or, with `maximise`, maximising) the key.
fn extremum(points: &[Point; 4], key: fn(&Point) -> i32, maximise: bool) -> Point {
    let mut best = points[0];
    let mut best_key = key(&points[0]);
    for p in &points[1..] {
        let k = key(p);
        let better = if maximise { k > best_key } else { k < best_key };
        if better {
            best = *p;
            best_key = k;
        }
    }
    best
}
