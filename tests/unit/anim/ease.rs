use super::*;

fn all_eases() -> Vec<Ease> {
    vec![
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::smooth(),
    ]
}

#[test]
fn endpoints_are_stable() {
    for ease in all_eases() {
        assert!(ease.apply(0.0).abs() < 1e-6);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in all_eases() {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?} not monotone at 0.25/0.5");
        assert!(b < c, "{ease:?} not monotone at 0.5/0.75");
    }
}

#[test]
fn input_is_clamped() {
    for ease in all_eases() {
        assert!(ease.apply(-1.0).abs() < 1e-6);
        assert!((ease.apply(2.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn linear_control_points_reduce_to_identity() {
    let bezier = Ease::CubicBezier {
        x1: 1.0 / 3.0,
        y1: 1.0 / 3.0,
        x2: 2.0 / 3.0,
        y2: 2.0 / 3.0,
    };
    for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
        assert!((bezier.apply(t) - t).abs() < 1e-4);
    }
}

#[test]
fn smooth_is_symmetric_about_the_midpoint() {
    let smooth = Ease::smooth();
    assert!((smooth.apply(0.5) - 0.5).abs() < 1e-4);
    for t in [0.1, 0.2, 0.3, 0.4] {
        let a = smooth.apply(t);
        let b = smooth.apply(1.0 - t);
        assert!((a + b - 1.0).abs() < 1e-4);
    }
}

#[test]
fn smooth_eases_in_and_out() {
    let smooth = Ease::smooth();
    // Slower than linear near the start, faster near the end.
    assert!(smooth.apply(0.1) < 0.1);
    assert!(smooth.apply(0.9) > 0.9);
}
