//! Data model filled in by the external data loader.
//!
//! The crate never reads files or networks itself; the loader deserializes
//! (or constructs) these types and hands them to the session.

use std::collections::HashMap;

use geo_types::Coord;

use crate::foundation::core::{CountyId, StateId};

/// One closed ring of geographic (longitude/latitude) coordinates.
pub type GeoRing = Vec<Coord<f64>>;

/// A county feature as supplied by the loader.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountyFeature {
    pub id: CountyId,
    pub state: StateId,
    pub geometry: CountyGeometry,
}

/// County geometry: a single polygon (exterior ring plus optional holes) or a
/// set of polygons. Downstream preparation is variant-agnostic and works on
/// the flat [`CountyGeometry::rings`] view.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "rings")]
pub enum CountyGeometry {
    Polygon(Vec<GeoRing>),
    MultiPolygon(Vec<Vec<GeoRing>>),
}

impl CountyGeometry {
    /// Uniform flat view over every ring of either variant, in input order.
    pub fn rings(&self) -> Vec<&GeoRing> {
        match self {
            Self::Polygon(rings) => rings.iter().collect(),
            Self::MultiPolygon(polygons) => polygons.iter().flatten().collect(),
        }
    }

    pub fn ring_count(&self) -> usize {
        match self {
            Self::Polygon(rings) => rings.len(),
            Self::MultiPolygon(polygons) => polygons.iter().map(Vec::len).sum(),
        }
    }
}

/// Identifier -> population lookup built from loader-supplied rows.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PopulationTable {
    by_id: HashMap<String, u64>,
}

impl PopulationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from ordered rows. The first row is a header and is
    /// skipped; each remaining row is `[identifier, population, ..]`. Rows
    /// that are short or carry an unparseable population are tolerated with
    /// a warning.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut table = Self::new();
        for (idx, row) in rows.iter().enumerate().skip(1) {
            let (Some(id), Some(raw)) = (row.first(), row.get(1)) else {
                tracing::warn!(row = idx, "population row too short; skipped");
                continue;
            };
            match raw.trim().parse::<u64>() {
                Ok(population) => table.insert(CountyId(id.trim().to_owned()), population),
                Err(_) => {
                    tracing::warn!(row = idx, id = %id, "unparseable population; row skipped");
                }
            }
        }
        table
    }

    pub fn insert(&mut self, id: CountyId, population: u64) {
        self.by_id.insert(id.0, population);
    }

    pub fn get(&self, id: &CountyId) -> Option<u64> {
        self.by_id.get(id.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/model.rs"]
mod tests;
