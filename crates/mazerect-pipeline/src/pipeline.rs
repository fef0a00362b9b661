// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pipeline orchestration — composes the processing stages into the full
// maze rectification run: blur, morphological cleanup, edge detection,
// boundary selection, polygon approximation, corner classification,
// rectification, RGBA conversion.

use image::{DynamicImage, GrayImage, RgbaImage};
use mazerect_core::error::{MazerectError, Result};
use mazerect_core::{CornerDetection, PipelineConfig};
use tracing::{info, instrument};

use crate::diagnostics::{DiagnosticsSink, contour_overlay};
use crate::{boundary, corners, edges, polygon, preprocess, rectify};

/// The maze rectification pipeline.
///
/// Each call to [`process`](Self::process) is an independent, synchronous
/// unit of work: stages run sequentially, every stage consumes the previous
/// stage's output, and no state is shared between runs.
pub struct MazeRectifier {
    config: PipelineConfig,
}

impl MazeRectifier {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load an image from disk as grayscale and process it.
    ///
    /// Any image the codecs can decode is accepted; color input is reduced
    /// to luma before the pipeline runs.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn process_path(
        &self,
        path: impl AsRef<std::path::Path>,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<RectifyOutcome> {
        let decoded = image::open(path.as_ref()).map_err(|err| {
            MazerectError::Input(format!("{}: {}", path.as_ref().display(), err))
        })?;
        let gray = decoded.to_luma8();
        info!(
            width = gray.width(),
            height = gray.height(),
            "Input image loaded"
        );
        self.process(gray, sink)
    }

    /// Run the full pipeline on a decoded grayscale raster.
    #[instrument(skip_all, fields(width = original.width(), height = original.height()))]
    pub fn process(
        &self,
        original: GrayImage,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<RectifyOutcome> {
        let config = &self.config;
        let (width, height) = original.dimensions();

        sink.record("original", &DynamicImage::ImageLuma8(original.clone()));

        let blurred = preprocess::blur(&original, config.blur_kernel);
        sink.record("blurred", &DynamicImage::ImageLuma8(blurred.clone()));

        let cleaned = preprocess::cleanup(&blurred, config);
        sink.record("morphology", &DynamicImage::ImageLuma8(cleaned.clone()));

        let edge_map = edges::detect(&cleaned, config.canny_low, config.canny_high);
        sink.record("edges", &DynamicImage::ImageLuma8(edge_map.clone()));

        let contours = boundary::extract_contours(&edge_map);
        sink.record(
            "contours",
            &DynamicImage::ImageLuma8(contour_overlay(&contours, width, height)),
        );

        let boundary_points =
            boundary::select_boundary(&contours, width, height, config.border_margin)
                .ok_or(MazerectError::NoBoundary)?;

        let approximated = polygon::approximate(&boundary_points, config.epsilon_factor);
        let detection = corners::classify(&approximated);
        info!(corners = detection.corner_count(), "Corners detected");

        let annotated = rectify::rectify(&original, &detection, config)?;
        sink.record("annotated", &DynamicImage::ImageRgba8(annotated.clone()));

        Ok(RectifyOutcome {
            image: annotated,
            corners: detection,
        })
    }
}

/// Result of a pipeline run: the final RGBA raster plus what was detected.
#[derive(Debug, Clone)]
pub struct RectifyOutcome {
    /// Final annotated raster (warped when four corners were found,
    /// otherwise the annotated original).
    pub image: RgbaImage,
    /// The corner classification the raster was produced from.
    pub corners: CornerDetection,
}

impl RectifyOutcome {
    /// Number of corners that were detected.
    pub fn corner_count(&self) -> usize {
        self.corners.corner_count()
    }

    /// Persist the final raster. The format is inferred from the file
    /// extension.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.image.save(path.as_ref()).map_err(|err| {
            MazerectError::Output(format!("{}: {}", path.as_ref().display(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;
    use image::{Luma, Rgba};

    /// White background with a filled dark quadrilateral: the simplest image
    /// with a clear interior boundary away from the borders.
    fn quad_image(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> GrayImage {
        let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }
        img
    }

    #[test]
    fn clean_quadrilateral_is_rectified_end_to_end() {
        let img = quad_image(400, 300, 100, 80, 300, 220);

        let rectifier = MazeRectifier::with_defaults();
        let outcome = rectifier
            .process(img, &mut NullSink)
            .expect("pipeline should find the boundary");

        assert_eq!(outcome.corner_count(), 4);
        assert!(matches!(outcome.corners, CornerDetection::Quad(_)));
        assert_eq!(outcome.image.dimensions(), (1280, 720));

        // Red markers at the destination frame's extreme corners.
        for (x, y) in [(3u32, 3u32), (1276, 3), (1276, 716), (3, 716)] {
            assert_eq!(
                outcome.image.get_pixel(x, y),
                &Rgba([255, 0, 0, 255]),
                "expected a corner marker at ({x}, {y})"
            );
        }
    }

    #[test]
    fn blank_image_raises_no_boundary() {
        let img = GrayImage::from_pixel(400, 300, Luma([255u8]));

        let rectifier = MazeRectifier::with_defaults();
        let err = rectifier.process(img, &mut NullSink).unwrap_err();
        assert!(matches!(err, MazerectError::NoBoundary));
    }

    #[test]
    fn missing_file_raises_input_error() {
        let rectifier = MazeRectifier::with_defaults();
        let err = rectifier
            .process_path("/nonexistent/maze.png", &mut NullSink)
            .unwrap_err();
        assert!(matches!(err, MazerectError::Input(_)));
    }

    #[test]
    fn saved_outcome_round_trips_losslessly() {
        let img = quad_image(400, 300, 100, 80, 300, 220);

        let config = PipelineConfig {
            dest_width: 320,
            dest_height: 240,
            ..PipelineConfig::default()
        };
        let outcome = MazeRectifier::new(config)
            .process(img, &mut NullSink)
            .expect("pipeline succeeds");

        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("rectified.png");
        outcome.save(&path).expect("save PNG");

        let reloaded = image::open(&path).expect("reopen").to_rgba8();
        assert_eq!(reloaded.dimensions(), outcome.image.dimensions());
        assert!(
            reloaded
                .pixels()
                .zip(outcome.image.pixels())
                .all(|(a, b)| a == b),
            "PNG round-trip must preserve pixel content exactly"
        );
    }

    #[test]
    fn snapshot_sink_sees_every_stage() {
        struct LabelSink(Vec<String>);
        impl DiagnosticsSink for LabelSink {
            fn record(&mut self, stage: &str, _image: &DynamicImage) {
                self.0.push(stage.to_string());
            }
        }

        let img = quad_image(400, 300, 100, 80, 300, 220);
        let mut sink = LabelSink(Vec::new());
        MazeRectifier::with_defaults()
            .process(img, &mut sink)
            .expect("pipeline succeeds");

        assert_eq!(
            sink.0,
            vec![
                "original",
                "blurred",
                "morphology",
                "edges",
                "contours",
                "annotated"
            ]
        );
    }
}
