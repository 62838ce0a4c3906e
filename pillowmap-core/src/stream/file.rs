//! File-based streaming of sensor rows
//!
//! Reads pressure logs exported as CSV with a header row. Each sensor in the
//! [`SensorLayout`] is matched to the header column of the same name;
//! every other column (timestamps, pandas index, temperature, ...) is
//! ignored.
//!
//! ## Format
//!
//! ```csv
//! Timestamp,Pressure1,Pressure2,Pressure3,Pressure4
//! 2024-05-01 23:00:00,12.0,3.5,0.0,1.25
//! 2024-05-01 23:00:01,11.0,4.0,0.5,1.0
//! ```
//!
//! - Fields are split on `,` and trimmed. A field may be wrapped in double
//!   quotes, in which case it can contain commas and `""` stands for one
//!   quote character. Quoted fields cannot span lines.
//! - A UTF-8 byte order mark before the header is ignored.
//! - Blank lines are skipped and do not consume a row index.
//! - Row indices count data rows from 0, in file order. Error messages use
//!   1-based file line numbers instead.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pillowmap_core::{stream::CsvReadingStream, SensorLayout};
//!
//! let layout = SensorLayout::default();
//! let mut stream = CsvReadingStream::open("sensor_data/sensor_data.csv", &layout)?;
//! for reading in &mut stream {
//!     let reading = reading?;
//!     println!("row {} total {}", reading.row(), reading.total_force());
//! }
//! println!("{} rows", stream.stats().rows_read);
//! # Ok::<(), pillowmap_core::InputError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::errors::{InputError, InputResult};
use crate::layout::SensorLayout;
use crate::reading::SensorReading;

use super::ReadingStats;

/// CSV-backed iterator of [`SensorReading`]s
///
/// Stops at the first error; the iterator yields that error once and then
/// ends, so a malformed row can never be skipped over silently.
pub struct CsvReadingStream<R> {
    /// Line source
    reader: R,
    /// Label used in error messages
    path: PathBuf,
    /// Layout the rows are validated against
    layout: SensorLayout,
    /// Header column index of each sensor, in layout order
    columns: Vec<usize>,
    /// Reusable line buffer
    line: String,
    /// 1-based number of the last line read
    line_number: usize,
    /// Next data row index
    next_row: usize,
    /// Set after EOF or the first error
    done: bool,
    /// Statistics
    stats: ReadingStats,
}

impl CsvReadingStream<BufReader<File>> {
    /// Open a CSV file and resolve sensor columns from its header
    pub fn open(path: impl AsRef<Path>, layout: &SensorLayout) -> InputResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path, layout)
    }
}

impl<R: BufRead> CsvReadingStream<R> {
    /// Wrap any buffered reader; `path` is only used in error messages
    pub fn from_reader(
        reader: R,
        path: impl Into<PathBuf>,
        layout: &SensorLayout,
    ) -> InputResult<Self> {
        let mut stream = Self {
            reader,
            path: path.into(),
            layout: layout.clone(),
            columns: Vec::with_capacity(layout.len()),
            line: String::new(),
            line_number: 0,
            next_row: 0,
            done: false,
            stats: ReadingStats::default(),
        };
        stream.read_header()?;
        Ok(stream)
    }

    /// Get statistics
    pub fn stats(&self) -> &ReadingStats {
        &self.stats
    }

    /// Drain the stream, failing on the first bad row
    pub fn read_all(mut self) -> InputResult<Vec<SensorReading>> {
        let mut readings = Vec::new();
        for reading in &mut self {
            readings.push(reading?);
        }
        log_info!(
            "read {} rows from {} ({} lines)",
            self.stats.rows_read,
            self.path.display(),
            self.stats.lines_processed
        );
        Ok(readings)
    }

    /// Read next non-blank line into `self.line`, `false` on EOF
    fn next_line(&mut self) -> InputResult<bool> {
        loop {
            self.line.clear();
            let bytes = self
                .reader
                .read_line(&mut self.line)
                .map_err(|source| InputError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            if bytes == 0 {
                return Ok(false);
            }
            self.line_number += 1;
            self.stats.lines_processed += 1;
            self.stats.bytes_read += bytes;

            if self.line.trim().is_empty() {
                self.stats.blank_lines += 1;
                continue;
            }
            return Ok(true);
        }
    }

    fn read_header(&mut self) -> InputResult<()> {
        if !self.next_line()? {
            return Err(InputError::EmptyInput {
                path: self.path.clone(),
            });
        }

        let header = self.line.trim_start_matches('\u{feff}');
        let names = split_fields(header);

        for id in self.layout.ids() {
            let column = names
                .iter()
                .position(|name| name.as_str() == id)
                .ok_or_else(|| InputError::MissingColumn {
                    sensor: id.to_owned(),
                })?;
            self.columns.push(column);
        }

        for (index, name) in names.iter().enumerate() {
            if !self.columns.contains(&index) {
                log_debug!("ignoring column '{}'", name);
                self.stats.columns_ignored += 1;
            }
        }
        Ok(())
    }

    fn parse_row(&mut self) -> InputResult<SensorReading> {
        let fields = split_fields(&self.line);
        let line = self.line_number;

        let mut forces = Vec::with_capacity(self.columns.len());
        for (sensor, &column) in self.layout.sensors().iter().zip(&self.columns) {
            let raw = fields
                .get(column)
                .map(String::as_str)
                .filter(|raw| !raw.is_empty())
                .ok_or_else(|| InputError::MissingField {
                    line,
                    sensor: sensor.id.clone(),
                })?;
            let value = raw.parse::<f64>().map_err(|_| InputError::InvalidNumber {
                line,
                sensor: sensor.id.clone(),
                value: raw.to_owned(),
            })?;
            forces.push(value);
        }

        let reading = SensorReading::new(self.next_row, &self.layout, forces)
            .map_err(|e| e.at_line(line))?;
        self.next_row += 1;
        self.stats.rows_read += 1;
        Ok(reading)
    }
}

impl<R: BufRead> Iterator for CsvReadingStream<R> {
    type Item = InputResult<SensorReading>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = match self.next_line() {
            Ok(true) => self.parse_row(),
            Ok(false) => {
                self.done = true;
                return None;
            }
            Err(e) => Err(e),
        };
        if result.is_err() {
            self.stats.parse_errors += 1;
            self.done = true;
        }
        Some(result)
    }
}

/// Split one CSV line into trimmed, unquoted fields
fn split_fields(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field).trim().to_owned()),
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_owned());
    fields
}
