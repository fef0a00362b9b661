// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Mazerect.

use thiserror::Error;

/// Top-level error type for all Mazerect operations.
///
/// Every pipeline failure is fatal: stages never retry, and errors propagate
/// unmodified to the caller.
#[derive(Debug, Error)]
pub enum MazerectError {
    // -- Pipeline errors --
    #[error("cannot read input image: {0}")]
    Input(String),

    #[error(
        "no suitable boundary found: ensure the maze has a distinct outline away from the image edges"
    )]
    NoBoundary,

    #[error("unsupported raster format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to write output image: {0}")]
    Output(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MazerectError>;
