//! Shared fixtures for pillowmap-core integration tests
//!
//! - Sensor layouts used by the concrete scenarios
//! - CSV writers backed by temporary files

#![allow(dead_code)]

use std::io::Write;

use pillowmap_core::{Domain, Point, SensorLayout};
use tempfile::NamedTempFile;

/// Header written by the pillow logger
pub const HEADER: &str = "Timestamp,Pressure1,Pressure2,Pressure3,Pressure4";

/// Corner layout with an explicit domain
pub fn corner_layout(width: f64, height: f64) -> SensorLayout {
    SensorLayout::builder(Domain::new(width, height).unwrap())
        .sensor("Pressure1", Point::new(0.0, 0.0))
        .sensor("Pressure2", Point::new(width, 0.0))
        .sensor("Pressure3", Point::new(0.0, height))
        .sensor("Pressure4", Point::new(width, height))
        .build()
        .unwrap()
}

/// Write a CSV fixture: header line plus one line per row
pub fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", header).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Timestamped logger rows from force tuples
pub fn logger_rows(forces: &[[f64; 4]]) -> Vec<String> {
    forces
        .iter()
        .enumerate()
        .map(|(i, f)| format!("2024-05-01 23:00:{:02},{},{},{},{}", i % 60, f[0], f[1], f[2], f[3]))
        .collect()
}

/// Approximate point equality
pub fn assert_point_near(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
