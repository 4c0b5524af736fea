use super::*;
use crate::eval::evaluable::Evaluable;

fn parse(v: serde_json::Value) -> SceneDef {
    serde_json::from_value(v).unwrap()
}

#[test]
fn defaults_fill_in_version_and_items() {
    let def = parse(serde_json::json!({ "canvas": { "width": 64, "height": 32 } }));
    assert_eq!(def.version, SCENE_VERSION);
    assert!(def.items.is_empty());
    assert!(def.validate().is_ok());
}

#[test]
fn validate_rejects_bad_documents() {
    let zero = parse(serde_json::json!({ "canvas": { "width": 0, "height": 32 } }));
    assert!(zero.validate().is_err());

    let version = parse(serde_json::json!({ "version": "9", "canvas": { "width": 1, "height": 1 } }));
    let err = version.validate().unwrap_err().to_string();
    assert!(err.contains("unsupported scene version"));

    let negative = parse(serde_json::json!({
        "canvas": { "width": 1, "height": 1 },
        "duration": -5.0
    }));
    assert!(negative.validate().is_err());
}

#[test]
fn keyframes_must_be_sorted() {
    let res: Result<SceneDef, _> = serde_json::from_value(serde_json::json!({
        "canvas": { "width": 1, "height": 1 },
        "items": [{ "shape": {
            "kind": "circle", "radius": 1,
            "modifiers": [{ "opacity": { "keyframes": [
                { "time": 100, "value": 1 }, { "time": 0, "value": 0 }
            ] } }]
        } }]
    }));
    assert!(res.is_err());
}

#[test]
fn item_tree_follows_document_structure() {
    let def = parse(serde_json::json!({
        "canvas": { "width": 10, "height": 10 },
        "items": [
            { "sequence": [
                { "shape": { "kind": "rect", "width": 4, "height": 4, "zIndex": 1,
                    "modifiers": [{ "moveX": { "from": 0, "to": 40, "duration": 400 } }] } },
                { "on": { "start": "prev.end+100", "items": [
                    { "shape": { "kind": "circle", "radius": 2, "zIndex": 2 } }
                ] } }
            ] },
            { "when": { "window": { "from": 50, "until": 60 }, "items": [
                { "shape": { "kind": "circle", "radius": 1, "zIndex": 3 } }
            ] } },
            { "when": { "visible": false, "items": [
                { "shape": { "kind": "circle", "radius": 1, "zIndex": 4 } }
            ] } }
        ]
    }));
    def.validate().unwrap();
    let items: Vec<_> = def.items.iter().map(ItemDef::to_item).collect();
    let zs = |t: f64| -> Vec<i32> {
        items
            .iter()
            .flat_map(|i| i.evaluate(t))
            .map(|i| i.z_index)
            .collect()
    };
    assert_eq!(zs(0.0), vec![1]);
    assert_eq!(zs(55.0), vec![1, 3]);
    assert_eq!(zs(499.0), vec![1]);
    assert_eq!(zs(500.0), vec![1, 2]);
    assert_eq!(items[0].estimated_duration(), 500.0);
}
