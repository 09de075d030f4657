use super::*;

fn square(side: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(side, 0.0),
        Point::new(side, side),
        Point::new(0.0, side),
    ]
}

#[test]
fn shoelace_matches_known_area() {
    assert_eq!(signed_area(&square(10.0)), 100.0);
    // Duplicate closing point contributes nothing.
    let mut closed = square(10.0);
    closed.push(closed[0]);
    assert_eq!(signed_area(&closed), 100.0);
}

#[test]
fn shoelace_degenerate_inputs_are_zero() {
    assert_eq!(signed_area(&[]), 0.0);
    assert_eq!(signed_area(&[Point::new(1.0, 1.0)]), 0.0);
    assert_eq!(signed_area(&[Point::new(1.0, 1.0), Point::new(2.0, 2.0)]), 0.0);
}

#[test]
fn centroid_falls_back_to_vertex_mean_for_zero_area() {
    let collinear = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 2.0),
    ];
    let c = polygon_centroid(&collinear);
    assert!((c.x - 1.0).abs() < 1e-12);
    assert!((c.y - 1.0).abs() < 1e-12);
}

#[test]
fn lerp_point_endpoints_and_midpoint() {
    let a = Point::new(0.0, 4.0);
    let b = Point::new(10.0, -4.0);
    assert_eq!(lerp_point(a, b, 0.0), a);
    assert_eq!(lerp_point(a, b, 1.0), b);
    assert_eq!(lerp_point(a, b, 0.5), Point::new(5.0, 0.0));
}

#[test]
fn sqrt_scale_worked_example() {
    // maxPopulation = 1000, maxRadius = 30, population = 250 => 15.0
    let scale = SqrtScale::new(1000.0, 30.0);
    assert_eq!(scale.map(250.0), 15.0);
}

#[test]
fn sqrt_scale_boundaries_and_clamping() {
    let scale = SqrtScale::new(1000.0, 30.0);
    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(1000.0), 30.0);
    // Out-of-domain inputs clamp to the range.
    assert_eq!(scale.map(4000.0), 30.0);
    assert_eq!(scale.map(-5.0), 0.0);
}

#[test]
fn sqrt_scale_is_monotone() {
    let scale = SqrtScale::new(1000.0, 30.0);
    let mut last = -1.0;
    for p in [0.0, 1.0, 10.0, 250.0, 500.0, 999.0, 1000.0] {
        let r = scale.map(p);
        assert!(r >= last);
        last = r;
    }
}

#[test]
fn sqrt_scale_empty_domain_is_zero() {
    let scale = SqrtScale::new(0.0, 30.0);
    assert_eq!(scale.map(123.0), 0.0);
}
