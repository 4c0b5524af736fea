use super::*;
use crate::foundation::core::Transform;

#[test]
fn new_instance_mirrors_geom_kind() {
    let inst = ShapeInstance::new(Geom::Ellipse { rx: 3.0, ry: 2.0 });
    assert_eq!(inst.kind, ShapeKind::Ellipse);
    assert_eq!(inst.opacity, 1.0);
    assert_eq!(inst.transform, Transform::default());
}

#[test]
fn world_bounds_apply_anchor_then_transform() {
    let mut inst = ShapeInstance::new(Geom::Rect {
        width: 20.0,
        height: 10.0,
    });
    inst.anchor = Anchor::TopLeft;
    inst.transform = Transform::at(100.0, 50.0);
    assert_eq!(inst.anchor_offset(), Vec2::new(10.0, 5.0));
    assert_eq!(inst.world_bounds(), Rect::new(100.0, 50.0, 120.0, 60.0));
}

#[test]
fn serializes_camel_case_and_skips_empty_fields() {
    let inst = ShapeInstance::new(Geom::Circle { radius: 1.0 });
    let v = serde_json::to_value(&inst).unwrap();
    assert_eq!(v["kind"], "circle");
    assert_eq!(v["zIndex"], 0);
    assert_eq!(v["geom"]["kind"], "circle");
    assert!(v.get("clip").is_none());
    assert!(v.get("fill").is_none());
    assert_eq!(v["transform"]["scaleX"], 1.0);
}
