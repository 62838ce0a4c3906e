//! Pipeline Configuration
//!
//! ## Overview
//!
//! A run is fully described by one [`PipelineConfig`]: where to read rows,
//! how the sensors are laid out, how the field is sampled, how frames look
//! and where everything is written. Defaults reproduce the reference setup:
//! a 60 × 40 cm pillow with corner sensors, a 100 × 100 mesh, 10 cm
//! falloff, 600 × 400 px Jet frames and a 5 fps GIF under `output/`.
//!
//! ## File Format
//!
//! Configs are JSON. Every section is optional; missing keys keep their
//! defaults.
//!
//! ```json
//! {
//!   "input": "sensor_data/sensor_data.csv",
//!   "output_dir": "output",
//!   "domain": { "width": 60.0, "height": 40.0 },
//!   "sensors": [
//!     { "id": "Pressure1", "x": 0.0,  "y": 0.0 },
//!     { "id": "Pressure2", "x": 60.0, "y": 0.0 },
//!     { "id": "Pressure3", "x": 0.0,  "y": 40.0 },
//!     { "id": "Pressure4", "x": 60.0, "y": 40.0 }
//!   ],
//!   "field": { "resolution": { "columns": 100, "rows": 100 }, "radius": 10.0 },
//!   "render": { "width_px": 600, "height_px": 400, "color_scale": "jet" },
//!   "animation": { "fps": 5, "file_name": "heatmap_animation.gif" },
//!   "workers": 4
//! }
//! ```
//!
//! ## Validation
//!
//! [`PipelineConfig::validate`] checks everything that can be checked before
//! any file is touched: layout, mesh, raster size, playback rate and worker
//! count. A config that validates can still fail at run time only on I/O.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::output::{
    DEFAULT_ANIMATION_FILE, DEFAULT_FPS, DEFAULT_FRAME_HEIGHT_PX, DEFAULT_FRAME_PREFIX,
    DEFAULT_FRAME_WIDTH_PX, DEFAULT_INPUT_PATH, DEFAULT_LEGEND_LABEL, DEFAULT_MANIFEST_FILE,
    DEFAULT_OUTPUT_DIR, DEFAULT_TITLE, MAX_FRAME_SIDE_PX, MIN_FRAME_SIDE_PX,
};
use crate::errors::ConfigError;
use crate::field::FieldSpec;
use crate::geometry::Domain;
use crate::layout::{SensorLayout, SensorSpec};

/// Color mapping from intensity to pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScale {
    /// Blue → cyan → yellow → red rainbow
    #[default]
    Jet,
    /// Black → white
    Grayscale,
}

/// Look of each rendered frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Frame width in pixels
    pub width_px: u32,
    /// Frame height in pixels
    pub height_px: u32,
    /// Intensity color mapping
    pub color_scale: ColorScale,
    /// Title text; the frame number is appended
    pub title: String,
    /// Caption of the color legend
    pub legend_label: String,
    /// Prefix of per-frame file names
    pub frame_prefix: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_FRAME_WIDTH_PX,
            height_px: DEFAULT_FRAME_HEIGHT_PX,
            color_scale: ColorScale::default(),
            title: DEFAULT_TITLE.to_owned(),
            legend_label: DEFAULT_LEGEND_LABEL.to_owned(),
            frame_prefix: DEFAULT_FRAME_PREFIX.to_owned(),
        }
    }
}

/// Animation output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Playback rate in frames per second
    pub fps: u32,
    /// File name inside the output directory
    pub file_name: String,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            file_name: DEFAULT_ANIMATION_FILE.to_owned(),
        }
    }
}

/// Complete description of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// CSV file with one row per time step
    pub input: PathBuf,
    /// Directory receiving frames, manifest and animation
    pub output_dir: PathBuf,
    /// Physical surface size
    pub domain: Domain,
    /// Sensor identifiers and coordinates
    pub sensors: Vec<SensorSpec>,
    /// Mesh and falloff
    pub field: FieldSpec,
    /// Frame appearance
    pub render: RenderSettings,
    /// Animation output
    pub animation: AnimationSettings,
    /// Render threads; `None` uses available parallelism
    pub workers: Option<usize>,
    /// Write a JSON manifest of frames next to the animation
    pub manifest: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let layout = SensorLayout::default();
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            domain: layout.domain(),
            sensors: layout.sensors().to_vec(),
            field: FieldSpec::default(),
            render: RenderSettings::default(),
            animation: AnimationSettings::default(),
            workers: None,
            manifest: true,
        }
    }
}

impl PipelineConfig {
    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validated sensor layout
    pub fn layout(&self) -> Result<SensorLayout, ConfigError> {
        Ok(SensorLayout::new(self.domain, self.sensors.clone())?)
    }

    /// Check every setting that does not require I/O
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout()?;
        self.field.validate()?;

        let sides = MIN_FRAME_SIDE_PX..=MAX_FRAME_SIDE_PX;
        if !sides.contains(&self.render.width_px) || !sides.contains(&self.render.height_px) {
            return Err(ConfigError::Invalid {
                setting: "render.width_px/height_px",
                reason: "frames must be between 64 and 8192 pixels per side",
            });
        }
        if self.render.frame_prefix.is_empty() || self.render.frame_prefix.contains(['/', '\\']) {
            return Err(ConfigError::Invalid {
                setting: "render.frame_prefix",
                reason: "must be a non-empty file name prefix",
            });
        }
        if self.animation.fps == 0 || self.animation.fps > 100 {
            return Err(ConfigError::Invalid {
                setting: "animation.fps",
                reason: "must be between 1 and 100",
            });
        }
        if self.animation.file_name.is_empty() {
            return Err(ConfigError::Invalid {
                setting: "animation.file_name",
                reason: "must not be empty",
            });
        }
        if self.workers == Some(0) {
            return Err(ConfigError::Invalid {
                setting: "workers",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Path of the animation file
    pub fn animation_path(&self) -> PathBuf {
        self.output_dir.join(&self.animation.file_name)
    }

    /// Path of the frame manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir.join(DEFAULT_MANIFEST_FILE)
    }
}
