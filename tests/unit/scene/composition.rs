use super::*;
use crate::shape::leaf::Shape;
use crate::animation::timing::TimingSpec;

const CANVAS: Canvas = Canvas {
    width: 100,
    height: 100,
};

#[test]
fn explicit_duration_wins() {
    let scene = Scene::new(
        CANVAS,
        vec![Shape::circle(1.0).opacity(TimingSpec::new(0.0, 1.0, 900.0)).into()],
    );
    assert_eq!(scene.estimated_duration().unwrap(), 900.0);
    assert_eq!(scene.with_duration(250.0).estimated_duration().unwrap(), 250.0);
}

#[test]
fn factory_duration_failure_is_an_error() {
    let scene = Scene::from_factory(CANVAS, |_| Err(anyhow::anyhow!("no items")));
    let err = scene.estimated_duration().unwrap_err();
    assert!(matches!(err, FlowsceneError::Scene(_)));
    assert!(err.to_string().contains("no items"));
    assert!(format!("{scene:?}").contains("factory"));
}

#[test]
fn loads_from_json_string() {
    let scene = Scene::from_json_str(
        r##"{
            "canvas": { "width": 8, "height": 8 },
            "background": "#102030",
            "items": [ { "shape": { "kind": "circle", "radius": 2 } } ]
        }"##,
    )
    .unwrap();
    assert_eq!(scene.canvas, Canvas { width: 8, height: 8 });
    assert_eq!(scene.background, Some(ColorValue::from("#102030")));
    assert_eq!(scene.items_at(0.0).unwrap().len(), 1);
    assert!(!scene.is_dynamic());
}

#[test]
fn malformed_json_maps_to_serde_error() {
    let err = Scene::from_json_str("{").unwrap_err();
    assert!(matches!(err, FlowsceneError::Serde(_)));
    let missing = Scene::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(missing, FlowsceneError::Validation(_)));
}
