use super::*;

use geo_types::Coord;

fn ring(coords: &[(f64, f64)]) -> GeoRing {
    coords.iter().map(|&(x, y)| Coord { x, y }).collect()
}

#[test]
fn polygon_rings_view_is_flat_and_ordered() {
    let geometry = CountyGeometry::Polygon(vec![
        ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
        ring(&[(0.2, 0.2), (0.4, 0.2), (0.4, 0.4), (0.2, 0.2)]),
    ]);
    assert_eq!(geometry.ring_count(), 2);
    let rings = geometry.rings();
    assert_eq!(rings.len(), 2);
    assert_eq!(rings[0][1], Coord { x: 1.0, y: 0.0 });
}

#[test]
fn multipolygon_rings_view_flattens_all_parts() {
    let geometry = CountyGeometry::MultiPolygon(vec![
        vec![ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)])],
        vec![
            ring(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)]),
            ring(&[(5.2, 5.2), (5.4, 5.2), (5.4, 5.4), (5.2, 5.2)]),
        ],
    ]);
    assert_eq!(geometry.ring_count(), 3);
    assert_eq!(geometry.rings().len(), 3);
}

#[test]
fn population_rows_skip_header_and_tolerate_junk() {
    let rows = vec![
        vec!["id".to_owned(), "population".to_owned()],
        vec!["01001".to_owned(), "55200".to_owned()],
        vec!["01003".to_owned(), "not-a-number".to_owned()],
        vec!["01005".to_owned()],
        vec!["01007".to_owned(), " 22500 ".to_owned()],
    ];
    let table = PopulationTable::from_rows(&rows);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(&CountyId::from("01001")), Some(55200));
    assert_eq!(table.get(&CountyId::from("01003")), None);
    assert_eq!(table.get(&CountyId::from("01007")), Some(22500));
    // The header row itself is not an entry.
    assert_eq!(table.get(&CountyId::from("id")), None);
}

#[test]
fn missing_identifier_lookup_is_none() {
    let table = PopulationTable::new();
    assert!(table.is_empty());
    assert_eq!(table.get(&CountyId::from("99999")), None);
}

#[test]
fn feature_deserializes_from_loader_json() {
    let json = r#"{
        "id": "06075",
        "state": "06",
        "geometry": {
            "kind": "Polygon",
            "rings": [[
                {"x": -122.51, "y": 37.71},
                {"x": -122.36, "y": 37.71},
                {"x": -122.36, "y": 37.83},
                {"x": -122.51, "y": 37.71}
            ]]
        }
    }"#;
    let feature: CountyFeature = serde_json::from_str(json).unwrap();
    assert_eq!(feature.id, CountyId::from("06075"));
    assert_eq!(feature.geometry.ring_count(), 1);
    assert_eq!(feature.geometry.rings()[0].len(), 4);
}
