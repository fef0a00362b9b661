// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the mazerect-pipeline crate. Benchmarks the full
// rectification pipeline on a small synthetic test image.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{GrayImage, Luma};

use mazerect_core::PipelineConfig;
use mazerect_pipeline::{MazeRectifier, NullSink};

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark the full pipeline on a 200x150 synthetic grayscale image.
///
/// Uses the same pattern as the pipeline unit tests: a filled dark
/// quadrilateral on a white background, which exercises the complete path
/// including the perspective warp. The destination frame is shrunk so the
/// warp cost stays proportionate to the input.
fn bench_full_pipeline(c: &mut Criterion) {
    let (width, height) = (200u32, 150u32);
    let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));
    for y in 40..110 {
        for x in 50..150 {
            img.put_pixel(x, y, Luma([0u8]));
        }
    }

    let config = PipelineConfig {
        dest_width: 320,
        dest_height: 180,
        ..PipelineConfig::default()
    };
    let rectifier = MazeRectifier::new(config);

    c.bench_function("full_pipeline (200x150)", |b| {
        b.iter(|| {
            let outcome = rectifier
                .process(black_box(img.clone()), &mut NullSink)
                .expect("pipeline succeeds on the synthetic image");
            black_box(outcome.image);
        });
    });
}

criterion_group!(benches, bench_full_pipeline);
criterion_main!(benches);
