use super::*;

#[test]
fn worked_example_segment_count() {
    // r = 15 => ceil(2*pi*15 / 3) = ceil(31.42) = 32 segments, 33 points.
    assert_eq!(segment_count(15.0), 32);
    let ring = circle_ring(15.0, Point::new(0.0, 0.0));
    assert_eq!(ring.len(), 33);
}

#[test]
fn ring_is_closed_and_vertices_lie_on_the_circle() {
    let center = Point::new(100.0, 50.0);
    let r = 15.0;
    let ring = circle_ring(r, center);
    assert!(ring.is_closed());
    for p in ring.points() {
        let dist = (*p - center).hypot();
        assert!((dist - r).abs() < 1e-9);
    }
}

#[test]
fn zero_radius_collapses_to_minimum_segments_at_center() {
    let center = Point::new(3.0, 4.0);
    let ring = circle_ring(0.0, center);
    assert_eq!(segment_count(0.0), 4);
    assert_eq!(ring.len(), 5);
    for p in ring.points() {
        assert_eq!(*p, center);
    }
}

#[test]
fn segment_count_grows_with_radius() {
    let mut last = 0;
    for r in [0.0, 1.0, 5.0, 15.0, 30.0, 120.0] {
        let n = segment_count(r);
        assert!(n >= last);
        assert!(n >= 4);
        last = n;
    }
}

#[test]
fn generator_is_pure_and_deterministic() {
    let a = circle_ring(7.25, Point::new(-4.0, 9.0));
    let b = circle_ring(7.25, Point::new(-4.0, 9.0));
    assert_eq!(a, b);
}
