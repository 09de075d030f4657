//! Geometry preprocessing.
//!
//! Turns raw county features into the immutable [`PreparedCounty`] set the
//! renderer consumes. Preparation runs to completion synchronously, once per
//! (viewport, data) pair; a resize discards the whole set and rebuilds it.

use geo::Centroid;
use geo_types::{Coord, LineString, Polygon};

use crate::data::model::{CountyFeature, GeoRing, PopulationTable};
use crate::foundation::core::{CountyId, Point, Ring, StateId};
use crate::foundation::math::SqrtScale;
use crate::geometry::circle::circle_ring;
use crate::geometry::projection::MapProjection;
use crate::morph::builder::{MorphInterpolator, build_morph};

/// Absolute planar area below which a ring is "tiny": excluded from morph
/// targets and rendered only as a fading background element.
pub const TINY_RING_AREA: f64 = 16.0;

/// One county, fully prepared for rendering. Immutable once built; the set
/// is discarded wholesale on resize or teardown.
#[derive(Clone, Debug)]
pub struct PreparedCounty {
    pub id: CountyId,
    pub state: StateId,
    /// Population, when the table has an entry for this county.
    pub population: Option<u64>,
    /// Projected rings that survived projection, in input order.
    pub rings: Vec<Ring>,
    /// Index of the ring with greatest absolute planar area.
    pub dominant: usize,
    /// Sorted indices of tiny rings (never contains `dominant`).
    pub tiny: Vec<usize>,
    /// Planar centroid, projected from the geographic centroid of the
    /// dominant ring's source geometry.
    pub centroid: Point,
    /// Sqrt-scaled population radius, clamped into `[0, max_radius]`.
    pub radius: f64,
    /// Target circle ring at `(radius, centroid)`.
    pub circle: Ring,
    /// Fixed interpolator from the non-tiny rings to the circle.
    pub morph: MorphInterpolator,
    /// True when combined construction fell back to the dominant ring and
    /// the secondary rings were dropped from the morph.
    pub rings_dropped: bool,
}

impl PreparedCounty {
    pub fn is_tiny(&self, ring_idx: usize) -> bool {
        self.tiny.binary_search(&ring_idx).is_ok()
    }

    pub fn tiny_rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        self.tiny.iter().filter_map(|&idx| self.rings.get(idx))
    }
}

/// Preparation counters, reported alongside the prepared set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrepareStats {
    /// Counties prepared.
    pub counties: usize,
    /// Features skipped because no ring survived projection.
    pub features_skipped: usize,
    /// Rings dropped because a coordinate failed to project.
    pub rings_dropped_unprojectable: usize,
    /// Features with no population entry (scaled as zero).
    pub missing_population: usize,
    /// Combined morphs that degraded to the dominant ring.
    pub morph_fallbacks: usize,
}

/// Builds the full prepared-county set, sorted population-descending.
#[tracing::instrument(skip(features, population, projection), fields(features = features.len()))]
pub fn prepare_counties(
    features: &[CountyFeature],
    population: &PopulationTable,
    projection: &MapProjection,
    max_radius: f64,
) -> (Vec<PreparedCounty>, PrepareStats) {
    let mut stats = PrepareStats::default();

    let max_population = features
        .iter()
        .filter_map(|f| population.get(&f.id))
        .max()
        .unwrap_or(0);
    let radius_scale = SqrtScale::new(max_population as f64, max_radius.max(0.0));

    let mut out = Vec::with_capacity(features.len());
    for feature in features {
        if let Some(prepared) =
            prepare_feature(feature, population, projection, radius_scale, &mut stats)
        {
            out.push(prepared);
        }
    }

    // Population-descending draw order, ties by id, so larger circles layer
    // underneath smaller ones.
    out.sort_by(|a, b| {
        b.population
            .unwrap_or(0)
            .cmp(&a.population.unwrap_or(0))
            .then_with(|| a.id.cmp(&b.id))
    });

    stats.counties = out.len();
    (out, stats)
}

fn prepare_feature(
    feature: &CountyFeature,
    population: &PopulationTable,
    projection: &MapProjection,
    radius_scale: SqrtScale,
    stats: &mut PrepareStats,
) -> Option<PreparedCounty> {
    let mut rings = Vec::new();
    let mut sources: Vec<&GeoRing> = Vec::new();
    for (idx, geo_ring) in feature.geometry.rings().into_iter().enumerate() {
        match project_ring(projection, geo_ring) {
            Some(ring) => {
                rings.push(ring);
                sources.push(geo_ring);
            }
            None => {
                stats.rings_dropped_unprojectable += 1;
                tracing::warn!(
                    county = %feature.id,
                    ring = idx,
                    "coordinate failed to project; ring dropped"
                );
            }
        }
    }
    if rings.is_empty() {
        stats.features_skipped += 1;
        tracing::warn!(county = %feature.id, "no projectable rings; feature skipped");
        return None;
    }

    let areas: Vec<f64> = rings.iter().map(Ring::area).collect();
    let dominant = areas
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    let tiny: Vec<usize> = if rings.len() > 1 {
        (0..rings.len())
            .filter(|&idx| idx != dominant && areas[idx] < TINY_RING_AREA)
            .collect()
    } else {
        Vec::new()
    };

    let centroid = geographic_centroid(sources[dominant])
        .and_then(|c| projection.project(c))
        .unwrap_or_else(|| rings[dominant].centroid());

    let pop = population.get(&feature.id);
    if pop.is_none() {
        stats.missing_population += 1;
        tracing::warn!(county = %feature.id, "no population entry; scaling as zero");
    }

    let radius = radius_scale.map(pop.unwrap_or(0) as f64);
    let circle = circle_ring(radius, centroid);

    let morph_sources: Vec<Ring> = (0..rings.len())
        .filter(|idx| !tiny.contains(idx))
        .map(|idx| rings[idx].clone())
        .collect();
    let dominant_in_sources = (0..dominant).filter(|idx| !tiny.contains(idx)).count();
    let build = build_morph(&morph_sources, dominant_in_sources, &circle);
    if build.rings_dropped {
        stats.morph_fallbacks += 1;
        tracing::warn!(
            county = %feature.id,
            "combined morph construction infeasible; morphing dominant ring only"
        );
    }

    Some(PreparedCounty {
        id: feature.id.clone(),
        state: feature.state.clone(),
        population: pop,
        rings,
        dominant,
        tiny,
        centroid,
        radius,
        circle,
        morph: build.interpolator,
        rings_dropped: build.rings_dropped,
    })
}

/// Projects a geographic ring; any unprojectable coordinate discards the
/// whole ring.
fn project_ring(projection: &MapProjection, geo_ring: &GeoRing) -> Option<Ring> {
    if geo_ring.is_empty() {
        return None;
    }
    let mut points = Vec::with_capacity(geo_ring.len());
    for coord in geo_ring {
        points.push(projection.project(*coord)?);
    }
    Some(Ring::new(points))
}

/// Geographic centroid of a source ring.
fn geographic_centroid(geo_ring: &GeoRing) -> Option<Coord<f64>> {
    if geo_ring.len() < 3 {
        return geo_ring.first().copied();
    }
    let polygon = Polygon::new(LineString::from(geo_ring.clone()), vec![]);
    polygon.centroid().map(|p| Coord { x: p.x(), y: p.y() })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/prepare.rs"]
mod tests;
