// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mazerect — Command-line entry point. Parses arguments, initialises
// logging, runs the rectification pipeline once, and reports the outcome.

use clap::Parser;
use std::path::PathBuf;

use mazerect_core::PipelineConfig;
use mazerect_core::error::Result;
use mazerect_pipeline::{DiagnosticsSink, MazeRectifier, NullSink, SnapshotDir};

#[derive(Parser)]
#[command(name = "mazerect")]
#[command(
    about = "Locate a quadrilateral maze boundary in a photograph, rectify it, and mark its corners"
)]
#[command(version)]
struct Cli {
    /// Path to the input maze image.
    image_path: PathBuf,

    /// Path to save the processed maze image with corners.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write intermediate processing stages as PNG snapshots.
    #[arg(long)]
    visualize: bool,

    /// Directory for --visualize snapshots (default: mazerect-stages).
    #[arg(long, default_value = "mazerect-stages")]
    snapshot_dir: PathBuf,

    /// JSON file with pipeline parameter overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let rectifier = MazeRectifier::new(config);

    let mut snapshot_sink;
    let mut null_sink = NullSink;
    let sink: &mut dyn DiagnosticsSink = if cli.visualize {
        snapshot_sink = SnapshotDir::new(&cli.snapshot_dir)?;
        println!(
            "Writing stage snapshots to '{}'",
            snapshot_sink.path().display()
        );
        &mut snapshot_sink
    } else {
        &mut null_sink
    };

    let outcome = rectifier.process_path(&cli.image_path, sink)?;
    println!("Detected number of corners: {}", outcome.corner_count());

    if let Some(output) = &cli.output {
        outcome.save(output)?;
        println!(
            "Processed maze image with corners saved to '{}'",
            output.display()
        );
    }

    println!("Maze processing completed successfully.");
    Ok(())
}

fn load_config(cli: &Cli) -> Result<PipelineConfig> {
    match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let config = serde_json::from_str(&text)?;
            tracing::debug!(path = %path.display(), "Pipeline config loaded");
            Ok(config)
        }
        None => Ok(PipelineConfig::default()),
    }
}
