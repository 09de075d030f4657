//! Viewport-fitted map projection.
//!
//! Geographic (longitude/latitude) coordinates are mapped to planar viewport
//! coordinates with an Albers equal-area conic configured for the
//! conterminous United States. Scale and translation derive from the
//! viewport, so a resize produces a fresh projection (and therefore a fresh
//! prepared-county set).

use geo_types::Coord;

use crate::foundation::core::{Point, Viewport};

/// Standard parallels of the conic (degrees).
const PARALLEL_LO_DEG: f64 = 29.5;
const PARALLEL_HI_DEG: f64 = 45.5;

/// Central meridian and projection-origin latitude (degrees).
const CENTRAL_MERIDIAN_DEG: f64 = -96.0;
const ORIGIN_LAT_DEG: f64 = 37.5;

/// Projection scale per unit of viewport width.
const SCALE_PER_WIDTH: f64 = 1070.0 / 960.0;

/// Longitude/latitude window the projection accepts. Coordinates outside it
/// (offshore territories, bad data) are unprojectable.
const LON_MIN_DEG: f64 = -126.0;
const LON_MAX_DEG: f64 = -66.0;
const LAT_MIN_DEG: f64 = 24.0;
const LAT_MAX_DEG: f64 = 50.0;

/// Albers equal-area conic fitted to a viewport.
#[derive(Clone, Debug)]
pub struct MapProjection {
    viewport: Viewport,
    scale: f64,
    translate: Point,
    n: f64,
    c: f64,
    rho0: f64,
}

impl MapProjection {
    /// Derives scale and translation from the viewport and precomputes the
    /// conic constants.
    pub fn fit_viewport(viewport: Viewport) -> Self {
        let phi1 = PARALLEL_LO_DEG.to_radians();
        let phi2 = PARALLEL_HI_DEG.to_radians();
        let phi0 = ORIGIN_LAT_DEG.to_radians();

        let n = (phi1.sin() + phi2.sin()) / 2.0;
        let c = phi1.cos().powi(2) + 2.0 * n * phi1.sin();
        let rho0 = (c - 2.0 * n * phi0.sin()).sqrt() / n;

        Self {
            viewport,
            scale: viewport.width * SCALE_PER_WIDTH,
            translate: viewport.center(),
            n,
            c,
            rho0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Maps a geographic coordinate to planar viewport coordinates, or `None`
    /// when the coordinate falls outside the projection domain.
    pub fn project(&self, coord: Coord<f64>) -> Option<Point> {
        if !self.in_domain(coord) {
            return None;
        }
        let lambda = (coord.x - CENTRAL_MERIDIAN_DEG).to_radians();
        let phi = coord.y.to_radians();

        let rho = (self.c - 2.0 * self.n * phi.sin()).sqrt() / self.n;
        let theta = self.n * lambda;

        // Conic y grows northward; viewport y grows downward.
        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();
        Some(Point::new(
            self.translate.x + self.scale * x,
            self.translate.y - self.scale * y,
        ))
    }

    fn in_domain(&self, coord: Coord<f64>) -> bool {
        coord.x.is_finite()
            && coord.y.is_finite()
            && (LON_MIN_DEG..=LON_MAX_DEG).contains(&coord.x)
            && (LAT_MIN_DEG..=LAT_MAX_DEG).contains(&coord.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/projection.rs"]
mod tests;
