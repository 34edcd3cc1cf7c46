use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::ComputedPoint;

/// Metric used when searching for the computed point closest to a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceMethod {
    /// Straight-line distance in pixel space.
    #[default]
    Pythagoras,
    /// Horizontal distance only.
    ClosestX,
    /// Vertical distance only.
    ClosestY,
}

/// Euclidean distance between two pixel-space points.
#[must_use]
pub fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Inclusive point-in-rectangle test.
#[must_use]
pub fn is_point_in_box(px: f64, py: f64, x: f64, y: f64, width: f64, height: f64) -> bool {
    x <= px && px <= x + width && y <= py && py <= y + height
}

/// Returns the computed point nearest to `(x, y)` under `method`.
///
/// Ties keep the earliest point in sequence order.
#[must_use]
pub fn nearest_point(
    points: &[ComputedPoint],
    x: f64,
    y: f64,
    method: DistanceMethod,
) -> Option<ComputedPoint> {
    points
        .iter()
        .copied()
        .filter(|point| point.render_x.is_finite() && point.render_y.is_finite())
        .min_by_key(|point| {
            let probe = match method {
                DistanceMethod::Pythagoras => (point.render_x, point.render_y),
                DistanceMethod::ClosestX => (point.render_x, y),
                DistanceMethod::ClosestY => (x, point.render_y),
            };
            OrderedFloat(distance(probe, (x, y)))
        })
}
