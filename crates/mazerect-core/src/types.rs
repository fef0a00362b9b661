// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core geometry types for the maze rectification pipeline.

use serde::{Deserialize, Serialize};

/// A 2D point in raster coordinates (origin top-left, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding box of a contour.
///
/// Uses the inclusive-extent convention: `width = max_x - min_x + 1`, so a
/// single-pixel contour has a 1x1 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    /// Whether the box lies strictly inside an `image_width` x `image_height`
    /// raster, keeping at least `margin` pixels clear of every edge.
    pub fn clear_of_borders(&self, image_width: u32, image_height: u32, margin: u32) -> bool {
        let margin = margin as i64;
        let x = self.x as i64;
        let y = self.y as i64;
        x > margin
            && y > margin
            && x + (self.width as i64) < image_width as i64 - margin
            && y + (self.height as i64) < image_height as i64 - margin
    }
}

/// Four corner points with assigned semantic roles.
///
/// The array order is fixed as [top-left, top-right, bottom-right,
/// bottom-left]; the perspective transform relies on this order to map each
/// corner onto the matching corner of the destination rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedQuad {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_right: Point,
    pub bottom_left: Point,
}

impl OrderedQuad {
    /// Corners in canonical order [TL, TR, BR, BL].
    pub fn as_array(&self) -> [Point; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

/// Outcome of corner classification on an approximated boundary polygon.
///
/// Each variant carries only the data the rectification stage needs: nothing,
/// the raw unordered vertices, or a fully ordered quadrilateral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerDetection {
    /// The approximation produced no vertices at all.
    None,
    /// Some vertex count other than four; points kept in original sequence.
    Unordered(Vec<Point>),
    /// Exactly four vertices, ordered and ready for perspective mapping.
    Quad(OrderedQuad),
}

impl CornerDetection {
    /// Number of detected corner points.
    pub fn corner_count(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Unordered(points) => points.len(),
            Self::Quad(_) => 4,
        }
    }

    /// All corner points in their stored order.
    pub fn points(&self) -> Vec<Point> {
        match self {
            Self::None => Vec::new(),
            Self::Unordered(points) => points.clone(),
            Self::Quad(quad) => quad.as_array().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_respects_margin_strictly() {
        let inside = BoundingBox {
            x: 21,
            y: 21,
            width: 100,
            height: 100,
        };
        assert!(inside.clear_of_borders(200, 200, 20));

        // x == margin fails the strict inequality.
        let on_edge = BoundingBox {
            x: 20,
            y: 21,
            width: 100,
            height: 100,
        };
        assert!(!on_edge.clear_of_borders(200, 200, 20));

        // Touching the far side fails too: x + width == image_width - margin.
        let far_edge = BoundingBox {
            x: 21,
            y: 21,
            width: 159,
            height: 100,
        };
        assert!(!far_edge.clear_of_borders(200, 200, 20));
    }

    #[test]
    fn corner_detection_counts() {
        assert_eq!(CornerDetection::None.corner_count(), 0);

        let partial = CornerDetection::Unordered(vec![Point::new(1, 2), Point::new(3, 4)]);
        assert_eq!(partial.corner_count(), 2);

        let quad = CornerDetection::Quad(OrderedQuad {
            top_left: Point::new(0, 0),
            top_right: Point::new(10, 0),
            bottom_right: Point::new(10, 10),
            bottom_left: Point::new(0, 10),
        });
        assert_eq!(quad.corner_count(), 4);
        assert_eq!(quad.points().len(), 4);
    }
}
