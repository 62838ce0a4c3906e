//! Sensor readings: one time step of force values
//!
//! Forces are stored index-aligned with a [`SensorLayout`], so the estimator
//! can zip them with sensor coordinates without any lookups. A reading also
//! remembers which input row it came from; that row number becomes the frame
//! index downstream.

use std::collections::HashMap;

use crate::errors::{InputError, InputResult};
use crate::layout::SensorLayout;

/// One row of validated, non-negative forces
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    row: usize,
    forces: Vec<f64>,
}

impl SensorReading {
    /// Build from forces already in layout order
    ///
    /// Every force must be finite and non-negative, and there must be
    /// exactly one force per sensor.
    pub fn new(row: usize, layout: &SensorLayout, forces: Vec<f64>) -> InputResult<Self> {
        if forces.len() != layout.len() {
            return Err(InputError::SensorCountMismatch {
                expected: layout.len(),
                found: forces.len(),
            });
        }
        for (sensor, &force) in layout.sensors().iter().zip(&forces) {
            check_force(&sensor.id, force)?;
        }
        Ok(Self { row, forces })
    }

    /// Build from an identifier → force map
    ///
    /// Entries whose identifier is not part of the layout are ignored.
    pub fn from_map(
        row: usize,
        layout: &SensorLayout,
        values: &HashMap<String, f64>,
    ) -> InputResult<Self> {
        let forces = layout
            .sensors()
            .iter()
            .map(|sensor| {
                let force = *values.get(&sensor.id).ok_or_else(|| InputError::MissingSensor {
                    sensor: sensor.id.clone(),
                })?;
                check_force(&sensor.id, force)?;
                Ok(force)
            })
            .collect::<InputResult<Vec<_>>>()?;
        Ok(Self { row, forces })
    }

    /// Zero-based input row this reading came from
    pub fn row(&self) -> usize {
        self.row
    }

    /// Forces in layout order
    pub fn forces(&self) -> &[f64] {
        &self.forces
    }

    /// Sum of all forces
    pub fn total_force(&self) -> f64 {
        self.forces.iter().sum()
    }
}

fn check_force(sensor: &str, force: f64) -> InputResult<()> {
    if force.is_finite() && force >= 0.0 {
        Ok(())
    } else {
        Err(InputError::InvalidForce {
            line: None,
            sensor: sensor.to_owned(),
            force,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|&(k, v)| (k.to_owned(), v)).collect()
    }

    #[test]
    fn from_map_orders_by_layout() {
        let layout = SensorLayout::default();
        let values = map(&[
            ("Pressure4", 4.0),
            ("Pressure2", 2.0),
            ("Pressure1", 1.0),
            ("Pressure3", 3.0),
            ("Temperature", 22.0),
        ]);
        let reading = SensorReading::from_map(7, &layout, &values).unwrap();
        assert_eq!(reading.forces(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(reading.row(), 7);
        assert_eq!(reading.total_force(), 10.0);
    }

    #[test]
    fn from_map_requires_every_sensor() {
        let layout = SensorLayout::default();
        let values = map(&[("Pressure1", 1.0), ("Pressure2", 2.0), ("Pressure3", 3.0)]);
        let err = SensorReading::from_map(0, &layout, &values).unwrap_err();
        assert!(matches!(err, InputError::MissingSensor { sensor } if sensor == "Pressure4"));
    }

    #[test]
    fn rejects_negative_and_nan_forces() {
        let layout = SensorLayout::default();
        let err = SensorReading::new(0, &layout, vec![1.0, -0.5, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, InputError::InvalidForce { sensor, .. } if sensor == "Pressure2"));

        let err = SensorReading::new(0, &layout, vec![f64::NAN, 0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, InputError::InvalidForce { .. }));
    }

    #[test]
    fn new_checks_length() {
        let layout = SensorLayout::default();
        let err = SensorReading::new(0, &layout, vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, InputError::SensorCountMismatch { expected: 4, found: 2 }));
        assert!(SensorReading::new(0, &layout, vec![1.0; 5]).is_err());
        assert!(SensorReading::new(0, &layout, vec![0.0; 4]).is_ok());
    }
}
