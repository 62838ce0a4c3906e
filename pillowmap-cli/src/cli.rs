//! Command-Line Interface

use clap::Parser;
use pillowmap_core::{PipelineConfig, Resolution};
use std::path::PathBuf;

/// PillowMap - Turn pillow pressure-sensor logs into head-position heatmaps
#[derive(Parser, Debug)]
#[command(name = "pillowmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON config file (flags below override its values)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sensor CSV file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for frames, manifest and animation
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Animation playback rate (frames per second)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Falloff radius around the head position (cm)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Mesh samples per axis
    #[arg(long)]
    pub resolution: Option<usize>,

    /// Render threads (default: available parallelism)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Do not write frames.json
    #[arg(long)]
    pub no_manifest: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Overlay explicit flags onto a loaded or default config
    pub fn apply(&self, config: &mut PipelineConfig) {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(fps) = self.fps {
            config.animation.fps = fps;
        }
        if let Some(radius) = self.radius {
            config.field.radius = radius;
        }
        if let Some(n) = self.resolution {
            config.field.resolution = Resolution::square(n);
        }
        if let Some(workers) = self.workers {
            config.workers = Some(workers);
        }
        if self.no_manifest {
            config.manifest = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["pillowmap"]).unwrap();
        let mut config = PipelineConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, PipelineConfig::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "pillowmap",
            "--input", "night.csv",
            "--output-dir", "frames",
            "--fps", "10",
            "--radius", "12.5",
            "--resolution", "50",
            "--workers", "2",
            "--no-manifest",
            "-v",
        ])
        .unwrap();

        let mut config = PipelineConfig::default();
        config.animation.fps = 3;
        cli.apply(&mut config);

        assert_eq!(config.input, PathBuf::from("night.csv"));
        assert_eq!(config.output_dir, PathBuf::from("frames"));
        assert_eq!(config.animation.fps, 10);
        assert_eq!(config.field.radius, 12.5);
        assert_eq!(config.field.resolution, Resolution::square(50));
        assert_eq!(config.workers, Some(2));
        assert!(!config.manifest);
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        assert!(Cli::try_parse_from(["pillowmap", "--fps", "fast"]).is_err());
    }
}
