// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Diagnostics — optional per-stage raster snapshots. The pipeline reports
// intermediate rasters to a sink; sinks decide what to do with them, keeping
// the processing stages free of any display or filesystem concerns.

use image::{DynamicImage, GrayImage, Luma};
use imageproc::contours::Contour;
use mazerect_core::error::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Receiver for intermediate pipeline rasters.
///
/// Recording is purely observational: sinks must not influence the data
/// flowing through the pipeline, and recording failures are not fatal.
pub trait DiagnosticsSink {
    fn record(&mut self, stage: &str, image: &DynamicImage);
}

/// Sink that discards everything. The default when no diagnostics were
/// requested.
#[derive(Debug, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn record(&mut self, _stage: &str, _image: &DynamicImage) {}
}

/// Sink that writes each recorded stage as a numbered PNG into a directory.
#[derive(Debug)]
pub struct SnapshotDir {
    dir: PathBuf,
    seq: u32,
}

impl SnapshotDir {
    /// Create the snapshot directory (and parents) if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            seq: 0,
        })
    }

    /// Directory the snapshots are written into.
    pub fn path(&self) -> &Path {
        &self.dir
    }
}

impl DiagnosticsSink for SnapshotDir {
    fn record(&mut self, stage: &str, image: &DynamicImage) {
        self.seq += 1;
        let file = self.dir.join(format!("{:02}-{}.png", self.seq, stage));
        match image.save(&file) {
            Ok(()) => debug!(stage, path = %file.display(), "Stage snapshot written"),
            Err(err) => warn!(stage, %err, "Failed to write stage snapshot"),
        }
    }
}

/// Render all contours as white traces on a black raster, for the contour
/// overlay snapshot.
pub fn contour_overlay(contours: &[Contour<i32>], width: u32, height: u32) -> GrayImage {
    let mut overlay = GrayImage::new(width, height);
    for contour in contours {
        for p in &contour.points {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < width && (p.y as u32) < height {
                overlay.put_pixel(p.x as u32, p.y as u32, Luma([255u8]));
            }
        }
    }
    overlay
}
