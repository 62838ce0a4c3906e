//! Radial Intensity Fields
//!
//! ## Model
//!
//! The heatmap shows a synthetic "pressure" cone centered on the estimated
//! head position:
//!
//! ```text
//! I(p) = clamp(1 - |p - c| / r, 0, 1)
//! ```
//!
//! - `I = 1` exactly at the center `c`
//! - falls linearly with distance
//! - `I = 0` at and beyond the falloff radius `r`
//!
//! ## Mesh
//!
//! The field is sampled on a uniform mesh spanning the *physical* domain:
//! `columns` samples evenly spaced over `[0, width]` and `rows` samples over
//! `[0, height]`, both endpoints included. The two axes are spaced
//! independently, so a 60 × 40 cm pillow sampled 100 × 100 has 0.606 cm
//! spacing along x and 0.404 cm along y. Every frame of a run uses the same
//! convention.
//!
//! ```text
//! row rows-1  ●───●───●───●   y = height
//!             │   │   │   │
//! row 0       ●───●───●───●   y = 0
//!           x=0          x=width
//! ```
//!
//! Storage is row-major with row 0 at `y = 0` (origin lower-left).
//!
//! ## Purity
//!
//! Computing a field touches no files and no shared state; frames can be
//! computed on any thread in any order.

use serde::{Deserialize, Serialize};

use crate::constants::field::{
    DEFAULT_FALLOFF_RADIUS_CM, DEFAULT_MESH_RESOLUTION, MAX_MESH_RESOLUTION,
};
use crate::errors::FieldError;
use crate::geometry::{Domain, Point};

/// Number of mesh samples along each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Samples along x
    pub columns: usize,
    /// Samples along y
    pub rows: usize,
}

impl Resolution {
    /// Square mesh with `n` samples per axis
    pub const fn square(n: usize) -> Self {
        Self { columns: n, rows: n }
    }

    /// Total number of samples
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    /// True when there are no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), FieldError> {
        if self.columns < 2 || self.rows < 2 {
            Err(FieldError::ResolutionTooSmall {
                columns: self.columns,
                rows: self.rows,
            })
        } else if self.columns > MAX_MESH_RESOLUTION || self.rows > MAX_MESH_RESOLUTION {
            Err(FieldError::ResolutionTooLarge {
                columns: self.columns,
                rows: self.rows,
                max: MAX_MESH_RESOLUTION,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::square(DEFAULT_MESH_RESOLUTION)
    }
}

/// Linear falloff cone around a center point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialFalloff {
    center: Point,
    radius: f64,
}

impl RadialFalloff {
    /// Create a falloff, rejecting non-positive or non-finite radii
    pub fn new(center: Point, radius: f64) -> Result<Self, FieldError> {
        check_radius(radius)?;
        Ok(Self { center, radius })
    }

    /// Center of the cone
    pub fn center(&self) -> Point {
        self.center
    }

    /// Distance at which intensity reaches zero
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Intensity in `[0, 1]` at a point
    pub fn intensity(&self, p: &Point) -> f64 {
        self.intensity_at_distance(self.center.distance(p))
    }

    /// Intensity in `[0, 1]` at a given distance from the center
    pub fn intensity_at_distance(&self, distance: f64) -> f64 {
        (1.0 - distance / self.radius).clamp(0.0, 1.0)
    }
}

/// Parameters shared by every frame of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSpec {
    /// Mesh samples per axis
    pub resolution: Resolution,
    /// Falloff radius (cm)
    pub radius: f64,
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            radius: DEFAULT_FALLOFF_RADIUS_CM,
        }
    }
}

impl FieldSpec {
    /// Check resolution and radius
    pub fn validate(&self) -> Result<(), FieldError> {
        self.resolution.check()?;
        check_radius(self.radius)
    }
}

/// Dense grid of intensity samples over the physical domain
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    domain: Domain,
    resolution: Resolution,
    values: Vec<f64>,
}

impl IntensityField {
    /// Sample the radial falloff around `center` on a uniform mesh
    pub fn radial(
        center: Point,
        domain: Domain,
        resolution: Resolution,
        radius: f64,
    ) -> Result<Self, FieldError> {
        resolution.check()?;
        let falloff = RadialFalloff::new(center, radius)?;

        let mut values = Vec::with_capacity(resolution.len());
        for row in 0..resolution.rows {
            let y = mesh_coordinate(row, resolution.rows, domain.height);
            for column in 0..resolution.columns {
                let x = mesh_coordinate(column, resolution.columns, domain.width);
                values.push(falloff.intensity(&Point::new(x, y)));
            }
        }

        Ok(Self {
            domain,
            resolution,
            values,
        })
    }

    /// Sample using a shared [`FieldSpec`]
    pub fn from_spec(center: Point, domain: Domain, spec: &FieldSpec) -> Result<Self, FieldError> {
        Self::radial(center, domain, spec.resolution, spec.radius)
    }

    /// Physical extent of the mesh
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Mesh size
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Row-major samples, row 0 at `y = 0`
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sample at a mesh index, `None` outside the mesh
    pub fn get(&self, column: usize, row: usize) -> Option<f64> {
        if column >= self.resolution.columns || row >= self.resolution.rows {
            return None;
        }
        self.values.get(row * self.resolution.columns + column).copied()
    }

    /// Physical coordinate of a mesh index
    pub fn mesh_point(&self, column: usize, row: usize) -> Point {
        Point::new(
            mesh_coordinate(column, self.resolution.columns, self.domain.width),
            mesh_coordinate(row, self.resolution.rows, self.domain.height),
        )
    }

    /// Largest sample value
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    /// Iterate `(column, row, value)` in storage order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let columns = self.resolution.columns;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % columns, i / columns, v))
    }
}

/// `linspace(0, extent, samples)[index]`, exact at both ends
fn mesh_coordinate(index: usize, samples: usize, extent: f64) -> f64 {
    if index + 1 == samples {
        extent
    } else {
        extent * index as f64 / (samples - 1) as f64
    }
}

fn check_radius(radius: f64) -> Result<(), FieldError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(FieldError::InvalidRadius { radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falloff_is_one_at_center_and_zero_at_radius() {
        let f = RadialFalloff::new(Point::new(10.0, 10.0), 10.0).unwrap();
        assert_eq!(f.intensity(&Point::new(10.0, 10.0)), 1.0);
        assert_eq!(f.intensity(&Point::new(20.0, 10.0)), 0.0);
        assert_eq!(f.intensity(&Point::new(50.0, 50.0)), 0.0);
        assert!((f.intensity(&Point::new(15.0, 10.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(RadialFalloff::new(Point::default(), 0.0).is_err());
        assert!(RadialFalloff::new(Point::default(), -1.0).is_err());
        assert!(RadialFalloff::new(Point::default(), f64::NAN).is_err());
    }

    #[test]
    fn rejects_tiny_mesh() {
        let result = IntensityField::radial(
            Point::default(),
            Domain::default(),
            Resolution { columns: 1, rows: 10 },
            10.0,
        );
        assert_eq!(
            result,
            Err(FieldError::ResolutionTooSmall { columns: 1, rows: 10 })
        );
    }

    #[test]
    fn rejects_oversized_mesh() {
        let result = IntensityField::radial(
            Point::default(),
            Domain::default(),
            Resolution { columns: 10, rows: usize::MAX },
            10.0,
        );
        assert!(matches!(
            result,
            Err(FieldError::ResolutionTooLarge { rows: usize::MAX, max: MAX_MESH_RESOLUTION, .. })
        ));

        let spec = FieldSpec {
            resolution: Resolution::square(MAX_MESH_RESOLUTION),
            radius: 10.0,
        };
        assert!(spec.validate().is_ok());
        let spec = FieldSpec {
            resolution: Resolution::square(MAX_MESH_RESOLUTION + 1),
            ..spec
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn mesh_spans_physical_domain_per_axis() {
        let field = IntensityField::radial(
            Point::new(30.0, 20.0),
            Domain::default(),
            Resolution { columns: 7, rows: 5 },
            10.0,
        )
        .unwrap();
        assert_eq!(field.values().len(), 35);
        assert_eq!(field.mesh_point(0, 0), Point::new(0.0, 0.0));
        assert_eq!(field.mesh_point(6, 4), Point::new(60.0, 40.0));
        assert_eq!(field.mesh_point(3, 2), Point::new(30.0, 20.0));
        assert_eq!(field.mesh_point(1, 1), Point::new(10.0, 10.0));
    }

    #[test]
    fn center_sample_is_one_when_on_mesh() {
        let field = IntensityField::radial(
            Point::new(30.0, 20.0),
            Domain::default(),
            Resolution { columns: 7, rows: 5 },
            10.0,
        )
        .unwrap();
        assert_eq!(field.get(3, 2), Some(1.0));
        assert_eq!(field.max(), 1.0);
        // Neighbours are exactly one radius away
        assert_eq!(field.get(2, 2), Some(0.0));
        assert_eq!(field.get(3, 1), Some(0.0));
        assert_eq!(field.get(7, 0), None);
    }

    #[test]
    fn row_zero_is_bottom_edge() {
        let field = IntensityField::radial(
            Point::new(0.0, 0.0),
            Domain::default(),
            Resolution::square(11),
            10.0,
        )
        .unwrap();
        assert_eq!(field.get(0, 0), Some(1.0));
        assert_eq!(field.get(0, 10), Some(0.0));
    }

    #[test]
    fn values_stay_in_unit_interval() {
        let field = IntensityField::from_spec(
            Point::new(12.3, 33.3),
            Domain::default(),
            &FieldSpec::default(),
        )
        .unwrap();
        assert_eq!(field.values().len(), 100 * 100);
        assert!(field.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn cells_iterate_row_major() {
        let field = IntensityField::radial(
            Point::new(0.0, 0.0),
            Domain::default(),
            Resolution { columns: 3, rows: 2 },
            100.0,
        )
        .unwrap();
        let coords: Vec<_> = field.cells().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(coords, [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }
}
