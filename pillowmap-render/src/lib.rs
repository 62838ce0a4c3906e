//! Rendering and animation for PillowMap
//!
//! Takes the positions and intensity fields computed by `pillowmap-core`
//! and turns them into files:
//!
//! - [`HeatmapRenderer`]: one titled, legended PNG per field
//! - [`AnimationCompositor`]: one looping GIF from an ordered frame list
//! - [`FramePipeline`]: the whole batch run, CSV to GIF, rendering frames
//!   on a scoped worker pool
//!
//! ```no_run
//! use pillowmap_core::PipelineConfig;
//! use pillowmap_render::FramePipeline;
//!
//! let pipeline = FramePipeline::new(PipelineConfig::default())?;
//! let summary = pipeline.run()?;
//! println!("{} frames -> {}", summary.frames.len(), summary.animation.path.display());
//! # Ok::<(), pillowmap_render::PipelineError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod colormap;
pub mod compositor;
pub mod errors;
pub mod frame;
pub mod heatmap;
pub mod naming;
pub mod pipeline;

// Public API
pub use colormap::ColorMap;
pub use compositor::{AnimationCompositor, AnimationSummary};
pub use errors::{CompositionError, PipelineError, RenderError};
pub use frame::{Frame, FrameSequence};
pub use heatmap::HeatmapRenderer;
pub use naming::FrameNaming;
pub use pipeline::{CancelToken, FramePipeline, RunSummary};
