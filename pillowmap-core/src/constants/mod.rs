//! Constants for PillowMap Core
//!
//! This module provides centralized, documented constants used throughout
//! PillowMap. Every default a run falls back to when no config file is given
//! lives here, with units in the name.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Pillow**: Physical surface size and the default sensor placement
//! - **Field**: Mesh resolution and falloff radius of the intensity field
//! - **Output**: Raster size, playback rate and file naming
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units

/// Physical surface dimensions and default sensor placement.
pub mod pillow;

/// Intensity field sampling parameters.
pub mod field;

/// Rendering and animation output defaults.
pub mod output;

// Re-export commonly used constants for convenience
pub use pillow::{PILLOW_WIDTH_CM, PILLOW_HEIGHT_CM, DEFAULT_SENSOR_POSITIONS};

pub use field::{DEFAULT_MESH_RESOLUTION, DEFAULT_FALLOFF_RADIUS_CM, MAX_MESH_RESOLUTION};

pub use output::{
    DEFAULT_FRAME_WIDTH_PX, DEFAULT_FRAME_HEIGHT_PX, DEFAULT_FPS,
    MIN_FRAME_INDEX_DIGITS, MIN_FRAME_SIDE_PX, MAX_FRAME_SIDE_PX,
};
