//! Error Types for Input, Layout and Field Failures
//!
//! ## Design Philosophy
//!
//! PillowMap is a batch job: a single bad row or a bad configuration value
//! aborts the whole run. Errors therefore carry enough context to point the
//! user at the offending line, column or setting without a second pass.
//!
//! 1. **One enum per concern**: input parsing, sensor layout, field
//!    parameters and configuration loading each have their own type, so a
//!    caller can tell "fix the CSV" apart from "fix the config".
//!
//! 2. **Positions are file lines**: every row-level error reports the
//!    1-based line number of the CSV file, header included.
//!
//! 3. **No silent skipping**: a row that cannot be turned into a
//!    [`SensorReading`](crate::reading::SensorReading) is an error, never a
//!    dropped frame, because frame indices must stay aligned with rows.
//!
//! ## Error Categories
//!
//! ### Input
//! - `Io`: file missing or unreadable
//! - `EmptyInput`: no header row
//! - `MissingColumn`: a configured sensor has no column in the header
//! - `MissingField` / `InvalidNumber` / `InvalidForce`: bad row contents
//!
//! ### Configuration
//! - [`LayoutError`]: unusable sensor table
//! - [`FieldError`]: unusable mesh resolution or falloff radius
//! - [`ConfigError`]: config file problems, wrapping the two above
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use pillowmap_core::{InputError, stream::CsvReadingStream, SensorLayout};
//!
//! fn load(path: &str) -> Result<usize, InputError> {
//!     let layout = SensorLayout::default();
//!     let readings = CsvReadingStream::open(path, &layout)?.read_all()?;
//!     Ok(readings.len())
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for input operations
pub type InputResult<T> = Result<T, InputError>;

/// Failures while reading and validating sensor rows
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file could not be opened or read
    #[error("failed to read input {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// File has no header row
    #[error("input {path} is empty (no header row)")]
    EmptyInput {
        /// File being read
        path: PathBuf,
    },

    /// A configured sensor has no matching header column
    #[error("sensor column '{sensor}' not found in header")]
    MissingColumn {
        /// Sensor identifier from the layout
        sensor: String,
    },

    /// Row ended before the sensor column
    #[error("line {line}: missing value for sensor '{sensor}'")]
    MissingField {
        /// 1-based file line
        line: usize,
        /// Sensor identifier from the layout
        sensor: String,
    },

    /// Value is not a number
    #[error("line {line}: value '{value}' for sensor '{sensor}' is not a number")]
    InvalidNumber {
        /// 1-based file line
        line: usize,
        /// Sensor identifier from the layout
        sensor: String,
        /// Raw text of the field
        value: String,
    },

    /// Force is negative, NaN or infinite
    #[error(
        "{}force {force} for sensor '{sensor}' must be finite and non-negative",
        line_prefix(.line)
    )]
    InvalidForce {
        /// 1-based file line, when the reading came from a file
        line: Option<usize>,
        /// Sensor identifier from the layout
        sensor: String,
        /// Offending value
        force: f64,
    },

    /// Force vector length differs from the layout's sensor count
    #[error("expected {expected} forces, got {found}")]
    SensorCountMismatch {
        /// Sensors in the layout
        expected: usize,
        /// Forces supplied
        found: usize,
    },

    /// Reading built from a map lacks one of the layout's sensors
    #[error("reading has no force for sensor '{sensor}'")]
    MissingSensor {
        /// Sensor identifier from the layout
        sensor: String,
    },
}

impl InputError {
    /// Attach a file line to a row-level error that lacks one
    pub fn at_line(self, line: usize) -> Self {
        match self {
            InputError::InvalidForce {
                line: None,
                sensor,
                force,
            } => InputError::InvalidForce {
                line: Some(line),
                sensor,
                force,
            },
            other => other,
        }
    }
}

fn line_prefix(line: &Option<usize>) -> String {
    line.map(|line| format!("line {}: ", line)).unwrap_or_default()
}

/// Problems with the sensor coordinate table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Layout has no sensors at all
    #[error("sensor layout is empty")]
    Empty,

    /// Domain has zero, negative or non-finite size
    #[error("domain {width} x {height} must be finite and positive")]
    InvalidDomain {
        /// Domain width
        width: f64,
        /// Domain height
        height: f64,
    },

    /// Identifier is empty or whitespace
    #[error("sensor identifier at position {index} is blank")]
    BlankIdentifier {
        /// Position in the layout
        index: usize,
    },

    /// Identifier appears twice
    #[error("sensor identifier '{id}' appears more than once")]
    DuplicateIdentifier {
        /// Repeated identifier
        id: String,
    },

    /// Coordinate is non-finite or lies outside the domain
    #[error("sensor '{id}' at ({x}, {y}) lies outside the domain")]
    OutOfDomain {
        /// Sensor identifier
        id: String,
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },
}

/// Problems with the intensity mesh parameters
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FieldError {
    /// Mesh needs at least two samples per axis to span the domain
    #[error("mesh resolution {columns} x {rows} must be at least 2 x 2")]
    ResolutionTooSmall {
        /// Samples along x
        columns: usize,
        /// Samples along y
        rows: usize,
    },

    /// Mesh would need more memory than any frame warrants
    #[error("mesh resolution {columns} x {rows} exceeds {max} samples per axis")]
    ResolutionTooLarge {
        /// Samples along x
        columns: usize,
        /// Samples along y
        rows: usize,
        /// Largest accepted samples per axis
        max: usize,
    },

    /// Falloff radius is zero, negative or non-finite
    #[error("falloff radius {radius} must be finite and positive")]
    InvalidRadius {
        /// Offending radius
        radius: f64,
    },
}

/// Failures loading or validating a pipeline configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`PipelineConfig`](crate::config::PipelineConfig)
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Sensor table rejected
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Mesh parameters rejected
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Any other setting out of range
    #[error("invalid setting '{setting}': {reason}")]
    Invalid {
        /// Setting name as it appears in the config file
        setting: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_errors_mention_line() {
        let err = InputError::InvalidNumber {
            line: 4,
            sensor: "Pressure2".into(),
            value: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("Pressure2"));
        assert!(msg.contains("abc"));
    }

    #[test]
    fn invalid_force_mentions_line_only_when_known() {
        let err = InputError::InvalidForce {
            line: None,
            sensor: "Pressure3".into(),
            force: -3.0,
        };
        assert_eq!(
            err.to_string(),
            "force -3 for sensor 'Pressure3' must be finite and non-negative"
        );

        let err = err.at_line(7);
        assert!(err.to_string().starts_with("line 7: force -3"));
        assert!(matches!(err, InputError::InvalidForce { line: Some(7), .. }));
    }

    #[test]
    fn config_error_wraps_layout_transparently() {
        let err: ConfigError = LayoutError::Empty.into();
        assert_eq!(err.to_string(), "sensor layout is empty");
    }
}
