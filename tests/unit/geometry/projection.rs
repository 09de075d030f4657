use super::*;

use crate::foundation::core::Viewport;

fn projection(width: f64) -> MapProjection {
    MapProjection::fit_viewport(Viewport::from_width(width).unwrap())
}

#[test]
fn projection_origin_maps_to_viewport_center() {
    let proj = projection(960.0);
    let center = proj.viewport().center();
    let p = proj.project(Coord { x: -96.0, y: 37.5 }).unwrap();
    assert!((p.x - center.x).abs() < 1e-9);
    assert!((p.y - center.y).abs() < 1e-9);
}

#[test]
fn x_increases_eastward_and_y_decreases_northward() {
    let proj = projection(960.0);
    let west = proj.project(Coord { x: -100.0, y: 37.5 }).unwrap();
    let east = proj.project(Coord { x: -92.0, y: 37.5 }).unwrap();
    assert!(west.x < east.x);

    let south = proj.project(Coord { x: -96.0, y: 30.0 }).unwrap();
    let north = proj.project(Coord { x: -96.0, y: 45.0 }).unwrap();
    assert!(north.y < south.y);
}

#[test]
fn out_of_domain_coordinates_are_unprojectable() {
    let proj = projection(960.0);
    // Aleutian-range longitude, well outside the conterminous window.
    assert!(proj.project(Coord { x: -150.0, y: 60.0 }).is_none());
    assert!(proj.project(Coord { x: 10.0, y: 48.0 }).is_none());
    assert!(
        proj.project(Coord {
            x: f64::NAN,
            y: 40.0
        })
        .is_none()
    );
}

#[test]
fn scale_and_translation_follow_viewport_width() {
    let small = projection(960.0);
    let large = projection(1920.0);
    let coord = Coord { x: -90.0, y: 40.0 };

    let p_small = small.project(coord).unwrap();
    let p_large = large.project(coord).unwrap();

    let off_small = p_small - small.viewport().center();
    let off_large = p_large - large.viewport().center();

    // Same geographic point, twice the width: offset from center doubles.
    assert!((off_large.x - 2.0 * off_small.x).abs() < 1e-9);
    assert!((off_large.y - 2.0 * off_small.y).abs() < 1e-9);
}

#[test]
fn equal_area_parallels_project_without_distortion_blowup() {
    let proj = projection(960.0);
    // Both standard parallels stay comfortably inside the viewport.
    let viewport = proj.viewport();
    for lat in [29.5, 45.5] {
        let p = proj.project(Coord { x: -96.0, y: lat }).unwrap();
        assert!(p.x > 0.0 && p.x < viewport.width);
        assert!(p.y > 0.0 && p.y < viewport.height);
    }
}
