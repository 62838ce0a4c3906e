//! Streaming of sensor rows from external sources
//!
//! Input is an external concern: this module turns raw tabular data into
//! validated [`SensorReading`](crate::reading::SensorReading)s and rejects
//! anything the estimator could not handle. Downstream code assumes every
//! reading is well-formed.
//!
//! ## Module Organization
//!
//! - Shared statistics (this file)
//! - `file` - CSV files with a header row

pub mod file;

pub use file::CsvReadingStream;

/// Statistics for row streaming
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadingStats {
    /// Readings produced successfully
    pub rows_read: usize,
    /// Lines consumed, header and blank lines included
    pub lines_processed: usize,
    /// Blank lines skipped
    pub blank_lines: usize,
    /// Header columns not mapped to a sensor
    pub columns_ignored: usize,
    /// Rows rejected
    pub parse_errors: usize,
    /// Bytes read from the source
    pub bytes_read: usize,
}
