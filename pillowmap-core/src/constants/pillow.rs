//! Pillow Surface Specifications
//!
//! The reference hardware is a rectangular pillow insert with one force
//! sensing resistor under each corner.

/// Width of the sensing surface (cm).
pub const PILLOW_WIDTH_CM: f64 = 60.0;

/// Height of the sensing surface (cm).
pub const PILLOW_HEIGHT_CM: f64 = 40.0;

/// Default sensor identifiers and their corner coordinates (cm).
///
/// Identifiers match the CSV column names written by the logger firmware.
/// Numbering runs left to right along the bottom edge, then along the top
/// edge:
///
/// ```text
///  (0,40) Pressure3 ──────── Pressure4 (60,40)
///         │                          │
///         │                          │
///  (0,0)  Pressure1 ──────── Pressure2 (60,0)
/// ```
pub const DEFAULT_SENSOR_POSITIONS: [(&str, f64, f64); 4] = [
    ("Pressure1", 0.0, 0.0),
    ("Pressure2", PILLOW_WIDTH_CM, 0.0),
    ("Pressure3", 0.0, PILLOW_HEIGHT_CM),
    ("Pressure4", PILLOW_WIDTH_CM, PILLOW_HEIGHT_CM),
];
