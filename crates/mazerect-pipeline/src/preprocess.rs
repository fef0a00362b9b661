// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preprocessing — Gaussian blur and morphological cleanup of the grayscale
// input before edge detection. Thin wrappers over `imageproc`'s filter and
// grayscale morphology primitives.

use image::GrayImage;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::{Mask, grayscale_dilate, grayscale_erode};
use mazerect_core::PipelineConfig;
use tracing::{debug, instrument};

/// Blur the image with a Gaussian kernel of the configured size.
///
/// The sigma is derived from the kernel size with the standard rule
/// `sigma = 0.3 * ((k - 1) * 0.5 - 1) + 0.8`, so a 5x5 kernel gives
/// sigma 1.1.
#[instrument(skip(image), fields(kernel))]
pub fn blur(image: &GrayImage, kernel: u32) -> GrayImage {
    let sigma = sigma_for_kernel(kernel);
    debug!(sigma, "Applying Gaussian blur");
    gaussian_blur_f32(image, sigma)
}

/// Morphological cleanup: closing fills small holes and gaps, opening removes
/// small noise, and a final erosion sharpens the remaining dark structure.
#[instrument(skip(image, config))]
pub fn cleanup(image: &GrayImage, config: &PipelineConfig) -> GrayImage {
    let closed = close(
        image,
        &square_mask(config.close_kernel),
        config.close_iterations,
    );
    debug!(
        kernel = config.close_kernel,
        iterations = config.close_iterations,
        "Closing applied"
    );

    let opened = open(
        &closed,
        &square_mask(config.open_kernel),
        config.open_iterations,
    );
    debug!(
        kernel = config.open_kernel,
        iterations = config.open_iterations,
        "Opening applied"
    );

    let eroded = erode(
        &opened,
        &square_mask(config.erode_kernel),
        config.erode_iterations,
    );
    debug!(
        kernel = config.erode_kernel,
        iterations = config.erode_iterations,
        "Erosion applied"
    );

    eroded
}

/// Square structuring element matching an OpenCV-style `k`x`k` rect kernel.
fn square_mask(kernel: u32) -> Mask {
    let radius = ((kernel.max(1) - 1) / 2).min(u8::MAX as u32) as u8;
    Mask::square(radius)
}

fn sigma_for_kernel(kernel: u32) -> f32 {
    0.3 * ((kernel.max(1) as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Iterated closing: all dilations first, then the matching erosions.
fn close(image: &GrayImage, mask: &Mask, iterations: u32) -> GrayImage {
    let dilated = repeat(image, mask, iterations, grayscale_dilate);
    repeat(&dilated, mask, iterations, grayscale_erode)
}

/// Iterated opening: all erosions first, then the matching dilations.
fn open(image: &GrayImage, mask: &Mask, iterations: u32) -> GrayImage {
    let eroded = repeat(image, mask, iterations, grayscale_erode);
    repeat(&eroded, mask, iterations, grayscale_dilate)
}

fn erode(image: &GrayImage, mask: &Mask, iterations: u32) -> GrayImage {
    repeat(image, mask, iterations, grayscale_erode)
}

fn repeat(
    image: &GrayImage,
    mask: &Mask,
    iterations: u32,
    op: fn(&GrayImage, &Mask) -> GrayImage,
) -> GrayImage {
    let mut current = image.clone();
    for _ in 0..iterations {
        current = op(&current, mask);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn blur_preserves_dimensions() {
        let img = GrayImage::from_pixel(64, 48, Luma([180u8]));
        let blurred = blur(&img, 5);
        assert_eq!(blurred.dimensions(), (64, 48));
    }

    #[test]
    fn sigma_matches_kernel_rule() {
        // 5x5 kernel: 0.3 * ((5-1)*0.5 - 1) + 0.8 = 1.1
        assert!((sigma_for_kernel(5) - 1.1).abs() < 1e-6);
        assert!((sigma_for_kernel(3) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn cleanup_preserves_dimensions() {
        let img = GrayImage::from_pixel(80, 60, Luma([200u8]));
        let cleaned = cleanup(&img, &PipelineConfig::default());
        assert_eq!(cleaned.dimensions(), (80, 60));
    }

    #[test]
    fn closing_removes_isolated_dark_pixel() {
        // A single dark pixel on a light background is a hole smaller than
        // the closing kernel, so it must be filled.
        let mut img = GrayImage::from_pixel(100, 100, Luma([255u8]));
        img.put_pixel(50, 50, Luma([0u8]));

        let config = PipelineConfig::default();
        let cleaned = cleanup(&img, &config);

        assert_eq!(cleaned.get_pixel(50, 50).0[0], 255);
    }

    #[test]
    fn cleanup_keeps_uniform_interior_uniform() {
        let img = GrayImage::from_pixel(100, 100, Luma([128u8]));
        let cleaned = cleanup(&img, &PipelineConfig::default());
        for y in 40..60 {
            for x in 40..60 {
                assert_eq!(cleaned.get_pixel(x, y).0[0], 128);
            }
        }
    }
}
