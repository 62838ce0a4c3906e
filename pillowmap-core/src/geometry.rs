//! Planar geometry for the sensing surface
//!
//! All coordinates are physical centimetres with the origin in the lower-left
//! corner of the pillow. `x` grows to the right, `y` grows upward.

use serde::{Deserialize, Serialize};

use crate::constants::pillow::{PILLOW_HEIGHT_CM, PILLOW_WIDTH_CM};
use crate::errors::LayoutError;

/// A point on the sensing surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate (cm)
    pub x: f64,
    /// Vertical coordinate (cm)
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Rectangular physical extent `[0, width] × [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Extent along x (cm)
    pub width: f64,
    /// Extent along y (cm)
    pub height: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            width: PILLOW_WIDTH_CM,
            height: PILLOW_HEIGHT_CM,
        }
    }
}

impl Domain {
    /// Create a domain, rejecting empty or non-finite extents
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        let domain = Self { width, height };
        domain.check()?;
        Ok(domain)
    }

    pub(crate) fn check(&self) -> Result<(), LayoutError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(LayoutError::InvalidDomain {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Geometric center, where zero total force lands
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Closed-interval membership test
    pub fn contains(&self, p: &Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Project a point onto the rectangle
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }
}
