use super::*;
use crate::animation::keyframes::Keyframe;

fn timing(duration: f64) -> Timing {
    Timing::over(duration)
}

#[test]
fn zero_before_start_and_delay() {
    let t = Timing {
        start: TimeRef::Absolute(100.0),
        delay: 50.0,
        ..timing(200.0)
    };
    for time in [-10.0, 0.0, 99.0, 149.0, 150.0] {
        assert_eq!(phase(time, &t, 0), 0.0, "{time}");
    }
    assert!(phase(151.0, &t, 0) > 0.0);
}

#[test]
fn instantaneous_once_started() {
    let t = Timing {
        delay: 10.0,
        ..timing(0.0)
    };
    assert_eq!(phase(10.0, &t, 0), 0.0);
    assert_eq!(phase(10.5, &t, 0), 1.0);
    let neg = timing(-5.0);
    assert_eq!(phase(1.0, &neg, 0), 1.0);
}

#[test]
fn non_looping_is_monotonic_and_clamped() {
    let t = Timing {
        ease: Ease::EaseInOut,
        ..timing(1000.0)
    };
    let mut prev = 0.0;
    for i in 0..=120 {
        let p = phase(f64::from(i) * 10.0, &t, 0);
        assert!(p >= prev);
        assert!((0.0..=1.0).contains(&p));
        prev = p;
    }
    assert_eq!(phase(5000.0, &t, 0), 1.0);
}

#[test]
fn looping_is_periodic_and_holds_during_gap() {
    let t = Timing {
        looping: true,
        repeat_delay: 100.0,
        delay: 20.0,
        ..timing(400.0)
    };
    let cycle = t.cycle();
    assert_eq!(cycle, 500.0);
    for time in [21.0, 120.0, 250.0, 419.0, 470.0] {
        assert_eq!(phase(time, &t, 0), phase(time + cycle, &t, 0), "{time}");
        assert_eq!(phase(time, &t, 0), phase(time + 3.0 * cycle, &t, 0), "{time}");
    }
    // Local 450 is inside the repeat gap.
    assert_eq!(phase(470.0, &t, 0), 1.0);
    assert_eq!(phase(220.0, &t, 0), 0.5);
}

#[test]
fn negative_cycle_clamps_to_duration() {
    let t = Timing {
        looping: true,
        repeat_delay: -1000.0,
        ..timing(100.0)
    };
    assert_eq!(t.cycle(), 100.0);
    assert_eq!(phase(150.0, &t, 0), 0.5);
}

#[test]
fn stagger_shifts_each_unit() {
    let t = Timing {
        stagger: 100.0,
        ..timing(100.0)
    };
    assert_eq!(phase(50.0, &t, 0), 0.5);
    assert_eq!(phase(150.0, &t, 1), 0.5);
    assert_eq!(phase(150.0, &t, 2), 0.0);
    assert_eq!(t.end_time(2), 300.0);
}

#[test]
fn symbolic_start_resolves_against_scene_origin() {
    let spec = TimingSpec::new(0.0, 10.0, 100.0).start("scene+200");
    assert_eq!(spec.value_at(200.0, 0), 0.0);
    assert_eq!(spec.value_at(250.0, 0), 5.0);

    let prev = TimingSpec::new(0.0, 10.0, 100.0).start("prev.end+50");
    assert_eq!(prev.value_at(100.0, 0), 5.0);
}

#[test]
fn value_at_returns_exact_endpoints() {
    let spec = TimingSpec::new(ColorValue::new("red"), ColorValue::new("blue"), 100.0);
    assert_eq!(spec.value_at(0.0, 0).as_str(), "red");
    assert_eq!(spec.value_at(50.0, 0).as_str(), "rgb(128, 0, 128)");
    assert_eq!(spec.value_at(100.0, 0).as_str(), "blue");

    let broken = TimingSpec::new(ColorValue::new("???"), ColorValue::new("blue"), 100.0);
    assert_eq!(broken.value_at(50.0, 0).as_str(), "???");
}

#[test]
fn keyframes_loop_and_hold_during_gap() {
    let kf = Keyframes::new(vec![
        Keyframe::new(0.0, 0.0),
        Keyframe::new(100.0, 100.0),
    ])
    .unwrap();
    let spec = TimingSpec::from_keyframes(kf)
        .looping(true)
        .repeat_delay(50.0);
    assert_eq!(spec.value_at(50.0, 0), 50.0);
    assert_eq!(spec.value_at(120.0, 0), 100.0);
    assert_eq!(spec.value_at(200.0, 0), 50.0);
    assert_eq!(spec.end_time(0), 150.0);
}

#[test]
fn keyframes_outlasting_duration_extend_end_time() {
    let kf = Keyframes::new(vec![Keyframe::new(0.0, 1.0), Keyframe::new(800.0, 2.0)]).unwrap();
    let mut spec = TimingSpec::from_keyframes(kf).delay(100.0);
    spec.timing.duration = 200.0;
    assert_eq!(spec.end_time(0), 900.0);
}

#[test]
fn json_shape_uses_camel_case_and_loop_keyword() {
    let spec: TimingSpec<f64> = serde_json::from_str(
        r#"{"from":0,"to":1,"duration":300,"loop":true,"repeatDelay":100,"start":"scene+50","ease":"easeOut"}"#,
    )
    .unwrap();
    assert!(spec.timing.looping);
    assert_eq!(spec.timing.repeat_delay, 100.0);
    assert_eq!(spec.timing.start, TimeRef::SceneRelative(50.0));
    assert_eq!(spec.timing.ease, Ease::EaseOut);

    let kf: TimingSpec<f64> =
        serde_json::from_str(r#"{"keyframes":[{"time":0,"value":3}],"duration":10}"#).unwrap();
    assert_eq!(kf.value_at(1e6, 0), 3.0);
}

#[test]
fn validate_rejects_non_finite() {
    assert!(timing(100.0).validate().is_ok());
    assert!(timing(f64::INFINITY).validate().is_err());
}

#[test]
fn bezier_overshoot_and_anticipation_are_interpolated() {
    let over = TimingSpec::new(0.0, 100.0, 1000.0).ease(Ease::cubic_bezier(0.3, 2.0, 0.7, 2.0));
    assert!((over.value_at(500.0, 0) - 162.5).abs() < 1e-9);
    assert_eq!(over.value_at(1000.0, 0), 100.0);

    let under = TimingSpec::new(0.0, 100.0, 1000.0).ease(Ease::cubic_bezier(0.3, -1.0, 0.7, 0.0));
    assert!((under.value_at(250.0, 0) + 40.625).abs() < 1e-9);
    assert_eq!(under.value_at(0.0, 0), 0.0);
}
