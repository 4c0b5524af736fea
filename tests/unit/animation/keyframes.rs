use super::*;
use crate::animation::color::ColorValue;

fn ramp() -> Keyframes<f64> {
    Keyframes::new(vec![
        Keyframe::new(100.0, 10.0),
        Keyframe::new(200.0, 20.0),
        Keyframe::new(400.0, 0.0),
    ])
    .unwrap()
}

#[test]
fn rejects_empty_and_unsorted() {
    assert!(Keyframes::<f64>::new(vec![]).is_err());
    assert!(Keyframes::new(vec![Keyframe::new(10.0, 1.0), Keyframe::new(5.0, 2.0)]).is_err());
    assert!(Keyframes::new(vec![Keyframe::new(f64::NAN, 1.0)]).is_err());
}

#[test]
fn exact_values_at_keyframe_times() {
    let k = ramp();
    assert_eq!(k.sample(100.0, Ease::Linear), 10.0);
    assert_eq!(k.sample(200.0, Ease::EaseIn), 20.0);
    assert_eq!(k.sample(400.0, Ease::EaseOut), 0.0);
}

#[test]
fn clamps_outside_range() {
    let k = ramp();
    assert_eq!(k.sample(0.0, Ease::Linear), 10.0);
    assert_eq!(k.sample(-50.0, Ease::Linear), 10.0);
    assert_eq!(k.sample(10_000.0, Ease::Linear), 0.0);
}

#[test]
fn interpolates_within_segment_with_ease() {
    let k = ramp();
    assert_eq!(k.sample(150.0, Ease::Linear), 15.0);
    assert_eq!(k.sample(300.0, Ease::Linear), 10.0);
    // EaseIn(0.5) = 0.25
    assert_eq!(k.sample(150.0, Ease::EaseIn), 12.5);
}

#[test]
fn single_keyframe_is_constant() {
    let k = Keyframes::new(vec![Keyframe::new(250.0, 7.0)]).unwrap();
    for t in [-1.0, 0.0, 250.0, 1e9] {
        assert_eq!(k.sample(t, Ease::Linear), 7.0);
    }
}

#[test]
fn color_keyframes_keep_stored_strings_at_key_times() {
    let k = Keyframes::new(vec![
        Keyframe::new(0.0, ColorValue::new("red")),
        Keyframe::new(100.0, ColorValue::new("blue")),
    ])
    .unwrap();
    assert_eq!(k.sample(0.0, Ease::Linear).as_str(), "red");
    assert_eq!(k.sample(50.0, Ease::Linear).as_str(), "rgb(128, 0, 128)");
    assert_eq!(k.sample(100.0, Ease::Linear).as_str(), "blue");
}

#[test]
fn json_validation_runs_on_deserialize() {
    let ok: Keyframes<f64> =
        serde_json::from_str(r#"[{"time":0,"value":1},{"time":10,"value":2}]"#).unwrap();
    assert_eq!(ok.keys().len(), 2);
    assert!(serde_json::from_str::<Keyframes<f64>>("[]").is_err());
}
