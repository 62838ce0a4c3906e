//! Core engine for PillowMap
//!
//! Turns rows of pillow pressure-sensor forces into estimated head positions
//! and synthetic intensity fields around them. Rendering and animation live
//! in `pillowmap-render`; everything here is pure computation plus the CSV
//! reader that feeds it.
//!
//! Data flows strictly forward:
//!
//! ```text
//! CSV rows ─► SensorReading ─► PositionEstimator ─► Point ─► IntensityField
//! ```
//!
//! ```rust
//! use pillowmap_core::{
//!     IntensityField, FieldSpec, PositionEstimator, SensorLayout, SensorReading,
//!     WeightedCentroid,
//! };
//!
//! let layout = SensorLayout::default();
//! let estimator = WeightedCentroid::new(layout.clone());
//!
//! // Head resting toward the lower-left corner
//! let reading = SensorReading::new(0, &layout, vec![8.0, 2.0, 2.0, 0.0])?;
//! let position = estimator.estimate(&reading);
//!
//! let field = IntensityField::from_spec(position, layout.domain(), &FieldSpec::default())?;
//! assert!(field.max() <= 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod constants;
pub mod errors;
pub mod estimator;
pub mod field;
pub mod geometry;
pub mod layout;
pub mod reading;
pub mod stream;

// Public API
pub use config::{AnimationSettings, ColorScale, PipelineConfig, RenderSettings};
pub use errors::{ConfigError, FieldError, InputError, InputResult, LayoutError};
pub use estimator::{estimate_position, PositionEstimator, WeightedCentroid};
pub use field::{FieldSpec, IntensityField, RadialFalloff, Resolution};
pub use geometry::{Domain, Point};
pub use layout::{SensorLayout, SensorLayoutBuilder, SensorSpec};
pub use reading::SensorReading;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
