use crate::foundation::error::{CartoError, CartoResult};
use crate::foundation::math;

pub use kurbo::{BezPath, Point, Vec2};

/// Fixed height/width ratio of the render viewport.
pub const VIEWPORT_ASPECT: f64 = 0.6;

/// County identifier (FIPS-style code, leading zeros significant).
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CountyId(pub String);

impl CountyId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountyId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// State identifier carried through from the feature collection.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct StateId(pub String);

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Render viewport in planar units. Height is always derived from width via
/// [`VIEWPORT_ASPECT`]; the host supplies width only.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn from_width(width: f64) -> CartoResult<Self> {
        if !(width > 0.0) || !width.is_finite() {
            return Err(CartoError::validation("Viewport width must be finite and > 0"));
        }
        Ok(Self {
            width,
            height: width * VIEWPORT_ASPECT,
        })
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Straight-alpha RGBA color. Opacity multipliers travel separately on draw
/// operations, so colors stay unpremultiplied here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Closed polygon boundary in planar coordinates (last point equals first).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ring {
    points: Vec<Point>,
}

impl Ring {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => {
                self.points.len() >= 2 && (*last - *first).hypot() < 1e-9
            }
            _ => false,
        }
    }

    /// Vertices without the duplicate closing point.
    pub fn open_points(&self) -> Vec<Point> {
        let mut points = self.points.clone();
        if self.is_closed() {
            points.pop();
        }
        points
    }

    /// Signed shoelace area (positive for counterclockwise winding in y-up
    /// coordinates).
    pub fn signed_area(&self) -> f64 {
        math::signed_area(&self.points)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted planar centroid, falling back to the vertex mean for
    /// degenerate (near-zero-area) rings.
    pub fn centroid(&self) -> Point {
        math::polygon_centroid(&self.points)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
