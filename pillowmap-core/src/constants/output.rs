//! Output Defaults

/// Rendered frame width (px).
pub const DEFAULT_FRAME_WIDTH_PX: u32 = 600;

/// Rendered frame height (px).
pub const DEFAULT_FRAME_HEIGHT_PX: u32 = 400;

/// Smallest accepted frame side (px); below this the title and legend
/// leave no room for the plot.
pub const MIN_FRAME_SIDE_PX: u32 = 64;

/// Largest accepted frame side (px).
pub const MAX_FRAME_SIDE_PX: u32 = 8192;

/// Animation playback rate (frames per second).
pub const DEFAULT_FPS: u32 = 5;

/// Minimum zero-padding of the frame index in file names.
///
/// Padding grows past this when the run has more frames, so lexicographic
/// order always equals frame order.
pub const MIN_FRAME_INDEX_DIGITS: usize = 3;

/// Default CSV input path.
pub const DEFAULT_INPUT_PATH: &str = "sensor_data/sensor_data.csv";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Prefix of per-frame image files.
pub const DEFAULT_FRAME_PREFIX: &str = "heatmap";

/// Animation file name inside the output directory.
pub const DEFAULT_ANIMATION_FILE: &str = "heatmap_animation.gif";

/// Frame manifest file name inside the output directory.
pub const DEFAULT_MANIFEST_FILE: &str = "frames.json";

/// Default heatmap title.
pub const DEFAULT_TITLE: &str = "Estimated Head Position Heatmap";

/// Default legend caption.
pub const DEFAULT_LEGEND_LABEL: &str = "Pressure Intensity";
