//! Sensor Layout: the fixed identifier → coordinate table
//!
//! ## Overview
//!
//! A [`SensorLayout`] binds each sensor identifier (the CSV column name) to
//! the physical point where that sensor sits, and fixes the [`Domain`] those
//! points live in. It is an immutable value: the estimator, the CSV reader
//! and the pipeline all borrow the same layout, and two runs with different
//! layouts can coexist in one process.
//!
//! ## Validation
//!
//! Construction rejects tables that would make the estimate meaningless:
//!
//! - no sensors at all
//! - blank or repeated identifiers
//! - a coordinate that is NaN, infinite or outside the domain
//!
//! Because every sensor lies inside the (convex) domain, any force-weighted
//! average of sensor positions does too.
//!
//! ## Example
//!
//! ```rust
//! use pillowmap_core::{Domain, Point, SensorLayout};
//!
//! let layout = SensorLayout::builder(Domain::new(60.0, 40.0)?)
//!     .sensor("left", Point::new(0.0, 20.0))
//!     .sensor("right", Point::new(60.0, 20.0))
//!     .build()?;
//! assert_eq!(layout.len(), 2);
//! # Ok::<(), pillowmap_core::LayoutError>(())
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::constants::pillow::DEFAULT_SENSOR_POSITIONS;
use crate::errors::LayoutError;
use crate::geometry::{Domain, Point};

/// One labelled sensor position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSpec {
    /// Identifier, also the CSV column name
    pub id: String,
    /// Horizontal coordinate (cm)
    pub x: f64,
    /// Vertical coordinate (cm)
    pub y: f64,
}

impl SensorSpec {
    /// Create a sensor entry
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            x: position.x,
            y: position.y,
        }
    }

    /// Sensor coordinate as a point
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Immutable, validated sensor coordinate table
#[derive(Debug, Clone, PartialEq)]
pub struct SensorLayout {
    domain: Domain,
    sensors: Vec<SensorSpec>,
}

impl Default for SensorLayout {
    /// Four corner sensors on the 60 × 40 cm pillow
    fn default() -> Self {
        let sensors = DEFAULT_SENSOR_POSITIONS
            .iter()
            .map(|&(id, x, y)| SensorSpec::new(id, Point::new(x, y)))
            .collect();
        Self {
            domain: Domain::default(),
            sensors,
        }
    }
}

impl SensorLayout {
    /// Validate and build a layout from a list of sensors
    pub fn new(domain: Domain, sensors: Vec<SensorSpec>) -> Result<Self, LayoutError> {
        domain.check()?;
        if sensors.is_empty() {
            return Err(LayoutError::Empty);
        }

        let mut seen = HashSet::with_capacity(sensors.len());
        for (index, sensor) in sensors.iter().enumerate() {
            if sensor.id.trim().is_empty() {
                return Err(LayoutError::BlankIdentifier { index });
            }
            if !seen.insert(sensor.id.as_str()) {
                return Err(LayoutError::DuplicateIdentifier {
                    id: sensor.id.clone(),
                });
            }
            let position = sensor.position();
            if !position.is_finite() || !domain.contains(&position) {
                return Err(LayoutError::OutOfDomain {
                    id: sensor.id.clone(),
                    x: sensor.x,
                    y: sensor.y,
                });
            }
        }

        Ok(Self { domain, sensors })
    }

    /// Start a layout for the given domain
    pub fn builder(domain: Domain) -> SensorLayoutBuilder {
        SensorLayoutBuilder {
            domain,
            sensors: Vec::new(),
        }
    }

    /// Physical extent the sensors live in
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Sensors in layout order
    pub fn sensors(&self) -> &[SensorSpec] {
        &self.sensors
    }

    /// Number of sensors
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Always false for a validated layout
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Position of a sensor in layout order, by identifier
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sensors.iter().position(|s| s.id == id)
    }

    /// Iterate over identifiers in layout order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sensors.iter().map(|s| s.id.as_str())
    }

    /// Unweighted centroid of all sensor coordinates
    pub fn centroid(&self) -> Point {
        let n = self.sensors.len() as f64;
        let (sx, sy) = self
            .sensors
            .iter()
            .fold((0.0, 0.0), |(sx, sy), s| (sx + s.x, sy + s.y));
        Point::new(sx / n, sy / n)
    }
}

/// Fluent builder for [`SensorLayout`]
#[derive(Debug, Clone)]
pub struct SensorLayoutBuilder {
    domain: Domain,
    sensors: Vec<SensorSpec>,
}

impl SensorLayoutBuilder {
    /// Append a sensor
    pub fn sensor(mut self, id: impl Into<String>, position: Point) -> Self {
        self.sensors.push(SensorSpec::new(id, position));
        self
    }

    /// Validate and finish
    pub fn build(self) -> Result<SensorLayout, LayoutError> {
        SensorLayout::new(self.domain, self.sensors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_has_four_corners() {
        let layout = SensorLayout::default();
        assert_eq!(layout.len(), 4);
        assert_eq!(layout.index_of("Pressure1"), Some(0));
        assert_eq!(layout.sensors()[0].position(), Point::new(0.0, 0.0));
        assert_eq!(layout.sensors()[3].position(), Point::new(60.0, 40.0));
        assert_eq!(layout.centroid(), Point::new(30.0, 20.0));
    }

    #[test]
    fn default_layout_passes_validation() {
        let layout = SensorLayout::default();
        let rebuilt = SensorLayout::new(layout.domain(), layout.sensors().to_vec());
        assert_eq!(rebuilt, Ok(layout));
    }

    #[test]
    fn rejects_empty_layout() {
        let result = SensorLayout::new(Domain::default(), Vec::new());
        assert_eq!(result, Err(LayoutError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = SensorLayout::builder(Domain::default())
            .sensor("a", Point::new(0.0, 0.0))
            .sensor("a", Point::new(1.0, 1.0))
            .build();
        assert!(matches!(result, Err(LayoutError::DuplicateIdentifier { .. })));
    }

    #[test]
    fn rejects_blank_ids() {
        let result = SensorLayout::builder(Domain::default())
            .sensor("ok", Point::new(0.0, 0.0))
            .sensor("  ", Point::new(1.0, 1.0))
            .build();
        assert_eq!(result, Err(LayoutError::BlankIdentifier { index: 1 }));
    }

    #[test]
    fn rejects_sensor_outside_domain() {
        let result = SensorLayout::builder(Domain::default())
            .sensor("far", Point::new(61.0, 0.0))
            .build();
        assert!(matches!(result, Err(LayoutError::OutOfDomain { .. })));

        let result = SensorLayout::builder(Domain::default())
            .sensor("nan", Point::new(f64::NAN, 0.0))
            .build();
        assert!(matches!(result, Err(LayoutError::OutOfDomain { .. })));
    }

    #[test]
    fn supports_arbitrary_sensor_counts() {
        let layout = SensorLayout::builder(Domain::default())
            .sensor("a", Point::new(0.0, 0.0))
            .sensor("b", Point::new(30.0, 40.0))
            .sensor("c", Point::new(60.0, 0.0))
            .build()
            .unwrap();
        assert_eq!(layout.ids().collect::<Vec<_>>(), ["a", "b", "c"]);
    }
}
