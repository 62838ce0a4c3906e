//! Error Types for Rendering, Composition and Batch Runs
//!
//! Every error here is fatal to the run. A frame that fails to render is
//! never skipped: skipping would shift every later frame one slot away from
//! its input row.
//!
//! ## Categories
//!
//! - [`RenderError`]: one frame could not be drawn or written
//! - [`CompositionError`]: frames could not be decoded or the GIF could not
//!   be encoded
//! - [`PipelineError`]: everything a full run can fail with, including
//!   input and configuration errors from `pillowmap-core`

use std::path::PathBuf;

use pillowmap_core::{ConfigError, FieldError, InputError};
use thiserror::Error;

/// Failure to compute or persist one heatmap frame
#[derive(Error, Debug)]
pub enum RenderError {
    /// Field parameters rejected
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Plotting backend failed (fonts, geometry, buffer)
    #[error("failed to draw heatmap: {0}")]
    Draw(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Requested frame is empty or larger than any display
    #[error("frame size {width} x {height} must be between 1 and {max} pixels per side")]
    FrameSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Largest accepted side
        max: u32,
    },

    /// Raster buffer does not match the requested size
    #[error("raster buffer does not match {width} x {height}")]
    Buffer {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Encoded frame could not be written
    #[error("failed to write frame {path}: {source}")]
    Write {
        /// Target path
        path: PathBuf,
        /// Encoder or I/O failure
        #[source]
        source: image::ImageError,
    },
}

/// Failure to build the animation from rendered frames
#[derive(Error, Debug)]
pub enum CompositionError {
    /// Nothing to animate
    #[error("no frames to compose")]
    NoFrames,

    /// Frame missing or not a readable image
    #[error("failed to decode frame {path}: {source}")]
    Decode {
        /// Frame path
        path: PathBuf,
        /// Decoder or I/O failure
        #[source]
        source: image::ImageError,
    },

    /// Frame size differs from the first frame
    #[error("frame {path} is {found:?}, expected {expected:?}")]
    DimensionMismatch {
        /// Frame path
        path: PathBuf,
        /// Size of the first frame
        expected: (u32, u32),
        /// Size of this frame
        found: (u32, u32),
    },

    /// Animation file could not be created or written
    #[error("failed to encode animation {path}: {source}")]
    Encode {
        /// Animation path
        path: PathBuf,
        /// Encoder or I/O failure
        #[source]
        source: image::ImageError,
    },
}

/// Anything that aborts a batch run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Configuration rejected before any work
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Input file or row rejected
    #[error(transparent)]
    Input(#[from] InputError),

    /// Output directory could not be created
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        /// Directory path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A frame failed; lowest failing index is reported
    #[error("frame {index} ({path}) failed: {source}")]
    Render {
        /// Frame index (== input row)
        index: usize,
        /// Frame path
        path: PathBuf,
        /// What went wrong
        #[source]
        source: RenderError,
    },

    /// Animation step failed
    #[error(transparent)]
    Composition(#[from] CompositionError),

    /// Frame manifest could not be written
    #[error("failed to write manifest {path}: {source}")]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Run stopped through its cancel token
    #[error("cancelled after {completed} of {total} frames")]
    Cancelled {
        /// Frames written before stopping
        completed: usize,
        /// Frames requested
        total: usize,
    },

    /// A render thread panicked
    #[error("render worker panicked")]
    WorkerPanicked,
}
