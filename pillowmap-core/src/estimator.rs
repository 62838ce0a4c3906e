//! Head Position Estimation from Corner Forces
//!
//! ## Background
//!
//! A head resting on the pillow presses down on every sensor, but the
//! sensors closest to the contact patch carry most of the load. Treating
//! each force as a weight on its sensor's coordinate gives the
//! force-weighted centroid:
//!
//! ```text
//! x = Σ(Fᵢ · xᵢ) / ΣFᵢ
//! y = Σ(Fᵢ · yᵢ) / ΣFᵢ
//! ```
//!
//! ## Degenerate Input
//!
//! An empty pillow reads zero on every sensor. The centroid is undefined
//! there, so the estimate is the exact center of the domain. This keeps one
//! frame per row even when nobody is lying down.
//!
//! ## Bounds
//!
//! A convex combination of in-domain points is in the domain. The result is
//! still clamped so float rounding at the edges can never push it out.
//! Forces are divided by the largest one before summing, so readings near
//! `f64::MAX` give the same centroid as their scaled-down equivalents.

use crate::geometry::Point;
use crate::layout::SensorLayout;
use crate::reading::SensorReading;

/// Maps one reading to one position on the surface
pub trait PositionEstimator {
    /// Estimate where the head is for this reading
    fn estimate(&self, reading: &SensorReading) -> Point;

    /// Layout the estimator was built for
    fn layout(&self) -> &SensorLayout;
}

/// Force-weighted centroid of the sensor coordinates
#[derive(Debug, Clone)]
pub struct WeightedCentroid {
    layout: SensorLayout,
}

impl WeightedCentroid {
    /// Create an estimator for a layout
    pub fn new(layout: SensorLayout) -> Self {
        Self { layout }
    }
}

impl Default for WeightedCentroid {
    fn default() -> Self {
        Self::new(SensorLayout::default())
    }
}

impl PositionEstimator for WeightedCentroid {
    fn estimate(&self, reading: &SensorReading) -> Point {
        estimate_position(&self.layout, reading.forces())
    }

    fn layout(&self) -> &SensorLayout {
        &self.layout
    }
}

/// Force-weighted centroid for forces given in layout order
///
/// Forces beyond the layout length are ignored; missing trailing forces count
/// as zero, and so do negative or non-finite ones. Zero total force returns
/// `layout.domain().center()`.
pub fn estimate_position(layout: &SensorLayout, forces: &[f64]) -> Point {
    let domain = layout.domain();
    let weight = |f: f64| if f.is_finite() && f > 0.0 { f } else { 0.0 };

    // Weights are scaled into [0, 1] so the sums stay finite for any force
    let scale = forces
        .iter()
        .take(layout.len())
        .fold(0.0, |m: f64, &f| m.max(weight(f)));
    if scale == 0.0 {
        return domain.center();
    }

    let (total, sum_x, sum_y) = layout
        .sensors()
        .iter()
        .zip(forces)
        .fold((0.0, 0.0, 0.0), |(t, sx, sy), (sensor, &f)| {
            let w = weight(f) / scale;
            (t + w, sx + w * sensor.x, sy + w * sensor.y)
        });

    domain.clamp(Point::new(sum_x / total, sum_y / total))
}
