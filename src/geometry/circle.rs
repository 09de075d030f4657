use std::f64::consts::TAU;

use crate::foundation::core::{Point, Ring};

/// Target arc length per circle segment, in planar units.
const SEGMENT_ARC_LEN: f64 = 3.0;

/// Minimum segment count for very small (or zero-radius) circles.
const MIN_SEGMENTS: usize = 4;

/// Segment count for a circle of the given radius:
/// `max(ceil(2*pi*r / 3), 4)`, so larger circles get a denser outline.
pub fn segment_count(radius: f64) -> usize {
    let r = radius.max(0.0);
    ((TAU * r / SEGMENT_ARC_LEN).ceil() as usize).max(MIN_SEGMENTS)
}

/// Closed ring approximating a circle: `segment_count(radius) + 1` points
/// evenly spaced by angle, last equal to first. Pure and deterministic.
pub fn circle_ring(radius: f64, center: Point) -> Ring {
    let r = radius.max(0.0);
    let segments = segment_count(r);
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let angle = TAU * (i as f64) / (segments as f64);
        points.push(Point::new(
            center.x + r * angle.cos(),
            center.y + r * angle.sin(),
        ));
    }
    points.push(points[0]);
    Ring::new(points)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/circle.rs"]
mod tests;
