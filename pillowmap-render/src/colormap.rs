//! Intensity → color mapping
//!
//! ## Jet
//!
//! The classic rainbow scale: dark blue at 0, through cyan, yellow and red,
//! to dark red at 1. Each channel is a piecewise-linear function of the
//! intensity:
//!
//! ```text
//!        0.0   0.11  0.125 0.34  0.35  0.375 0.64  0.65  0.66  0.89  0.91  1.0
//! red    0                       0                       1     1           0.5
//! green  0           0                 1     1                       0     0
//! blue   0.5   1           1                       0                       0
//! ```
//!
//! ## Grayscale
//!
//! Black at 0, white at 1.
//!
//! Inputs outside `[0, 1]` are clamped and NaN maps to 0, so every frame of
//! a run maps the same intensity to the same color.

use pillowmap_core::ColorScale;

type Anchors = &'static [(f64, f64)];

const JET_RED: Anchors = &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const JET_GREEN: Anchors = &[
    (0.0, 0.0),
    (0.125, 0.0),
    (0.375, 1.0),
    (0.64, 1.0),
    (0.91, 0.0),
    (1.0, 0.0),
];
const JET_BLUE: Anchors = &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

/// Maps a normalized intensity to an RGB triple
pub trait ColorMap {
    /// Color for an intensity in `[0, 1]`
    fn rgb(&self, t: f64) -> [u8; 3];
}

impl ColorMap for ColorScale {
    fn rgb(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            ColorScale::Jet => [
                channel(interpolate(JET_RED, t)),
                channel(interpolate(JET_GREEN, t)),
                channel(interpolate(JET_BLUE, t)),
            ],
            ColorScale::Grayscale => {
                let v = channel(t);
                [v, v, v]
            }
        }
    }
}

fn interpolate(anchors: Anchors, t: f64) -> f64 {
    for pair in anchors.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if t <= x1 {
            return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
        }
    }
    anchors.last().map_or(0.0, |&(_, y)| y)
}

fn channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
