//! PillowMap - Head Position Heatmaps from Pillow Pressure Sensors
//!
//! Reads a sensor CSV, renders one heatmap per row and combines them into a
//! looping GIF.

mod cli;

use anyhow::Context;
use cli::Cli;
use pillowmap_core::PipelineConfig;
use pillowmap_render::FramePipeline;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing; library `log` records are forwarded too
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config: flags > file > defaults
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    cli.apply(&mut config);

    let pipeline = FramePipeline::new(config).context("invalid configuration")?;

    // Ctrl+C stops claiming new frames; frames in flight finish
    let cancel = pipeline.cancel_token();
    ctrlc::set_handler(move || {
        warn!("Interrupt received, stopping after current frames");
        cancel.cancel();
    })?;

    let config = pipeline.config();
    info!(
        "Reading {} -> {} ({} workers)",
        config.input.display(),
        config.output_dir.display(),
        pipeline.workers()
    );

    let summary = pipeline.run()?;

    info!(
        "Done: {} frames, animation {}",
        summary.frames.len(),
        summary.animation.path.display()
    );
    if let Some(manifest) = &summary.manifest {
        info!("Manifest: {}", manifest.display());
    }

    Ok(())
}
