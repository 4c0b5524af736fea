use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn quadratic_values() {
    assert_eq!(Ease::EaseIn.apply(0.5), 0.25);
    assert_eq!(Ease::EaseOut.apply(0.5), 0.75);
    assert_eq!(Ease::EaseInOut.apply(0.25), 0.125);
    assert_eq!(Ease::EaseInOut.apply(0.75), 0.875);
}

#[test]
fn bezier_uses_y_component_at_raw_progress() {
    // x control values do not participate.
    let a = Ease::cubic_bezier(0.0, 0.0, 1.0, 1.0).apply(0.5);
    let b = Ease::cubic_bezier(0.9, 0.0, 0.1, 1.0).apply(0.5);
    assert_eq!(a, b);
    // y(0.5) = 3*0.25*0.5*y1 + 3*0.5*0.25*y2 + 0.125
    assert!((a - 0.5).abs() < 1e-12);

    let c = Ease::cubic_bezier(0.4, 0.0, 0.2, 1.0).apply(0.5);
    assert!((c - (0.375 + 0.125)).abs() < 1e-12);
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(Ease::EaseIn.apply(-1.0), 0.0);
    assert_eq!(Ease::EaseIn.apply(2.0), 1.0);
}

#[test]
fn serde_names_are_camel_case() {
    let e: Ease = serde_json::from_str("\"easeInOut\"").unwrap();
    assert_eq!(e, Ease::EaseInOut);
    let e: Ease =
        serde_json::from_str(r#"{"cubicBezier":{"x1":0.1,"y1":0.2,"x2":0.3,"y2":0.4}}"#).unwrap();
    assert_eq!(e, Ease::cubic_bezier(0.1, 0.2, 0.3, 0.4));
}
