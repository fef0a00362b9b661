// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters for the maze rectification pipeline.
///
/// Every field can be overridden independently; a partial JSON document fills
/// the remaining fields from the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Gaussian blur kernel size in pixels (odd; default 5 for a 5x5 kernel).
    pub blur_kernel: u32,
    /// Morphological closing kernel size (default 5).
    pub close_kernel: u32,
    /// Morphological closing iterations (default 6).
    pub close_iterations: u32,
    /// Morphological opening kernel size (default 3).
    pub open_kernel: u32,
    /// Morphological opening iterations (default 4).
    pub open_iterations: u32,
    /// Erosion kernel size (default 3).
    pub erode_kernel: u32,
    /// Erosion iterations (default 3).
    pub erode_iterations: u32,
    /// Canny low threshold (default 50).
    pub canny_low: f32,
    /// Canny high threshold (default 150).
    pub canny_high: f32,
    /// Minimum distance (px) a boundary's bounding box must keep from every
    /// image edge to be considered (default 20).
    pub border_margin: u32,
    /// Polygon approximation tolerance as a fraction of the contour
    /// perimeter (default 0.02).
    pub epsilon_factor: f64,
    /// Width of the rectified output raster (default 1280).
    pub dest_width: u32,
    /// Height of the rectified output raster (default 720).
    pub dest_height: u32,
    /// Radius of the corner markers in pixels (default 10).
    pub marker_radius: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            blur_kernel: 5,
            close_kernel: 5,
            close_iterations: 6,
            open_kernel: 3,
            open_iterations: 4,
            erode_kernel: 3,
            erode_iterations: 3,
            canny_low: 50.0,
            canny_high: 150.0,
            border_margin: 20,
            epsilon_factor: 0.02,
            dest_width: 1280,
            dest_height: 720,
            marker_radius: 10,
        }
    }
}
