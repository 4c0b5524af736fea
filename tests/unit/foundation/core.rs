use super::*;

#[test]
fn transform_to_affine_identity_and_translation() {
    let t = Transform::default();
    assert_eq!(t.to_affine(), Affine::IDENTITY);

    let t = Transform::at(10.0, -2.5);
    assert_eq!(t.to_affine(), Affine::translate(Vec2::new(10.0, -2.5)));
}

#[test]
fn uniform_scale_multiplies_axis_scale() {
    let t = Transform {
        scale: 2.0,
        scale_x: 1.5,
        ..Transform::default()
    };
    let s = t.effective_scale();
    assert_eq!(s, Vec2::new(3.0, 2.0));

    let p = t.to_affine() * Point::new(1.0, 1.0);
    assert!((p.x - 3.0).abs() < 1e-12);
    assert!((p.y - 2.0).abs() < 1e-12);
}

#[test]
fn rotation_is_in_degrees() {
    let t = Transform {
        rotation: 90.0,
        ..Transform::default()
    };
    let p = t.to_affine() * Point::new(1.0, 0.0);
    assert!(p.x.abs() < 1e-12);
    assert!((p.y - 1.0).abs() < 1e-12);
}
