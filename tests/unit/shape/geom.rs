use super::*;

#[test]
fn rect_points_are_center_origin_corners() {
    let g = Geom::Rect {
        width: 100.0,
        height: 50.0,
    };
    assert_eq!(
        g.points().unwrap(),
        vec![
            Point::new(-50.0, -25.0),
            Point::new(50.0, -25.0),
            Point::new(50.0, 25.0),
            Point::new(-50.0, 25.0),
        ]
    );
    assert_eq!(g.bounds(), Rect::new(-50.0, -25.0, 50.0, 25.0));
}

#[test]
fn only_rects_and_paths_expose_points() {
    assert!(Geom::Circle { radius: 3.0 }.points().is_none());
    assert!(
        Geom::Text {
            value: "hi".to_owned(),
            options: TextOptions::default(),
        }
        .points()
        .is_none()
    );
    let path = Geom::Path {
        points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        closed: false,
    };
    assert_eq!(path.points().unwrap().len(), 2);
}

#[test]
fn bounds_per_kind() {
    assert_eq!(
        Geom::Circle { radius: 10.0 }.bounds(),
        Rect::new(-10.0, -10.0, 10.0, 10.0)
    );
    assert_eq!(
        Geom::Ring {
            outer: 5.0,
            inner: 2.0
        }
        .bounds(),
        Rect::new(-5.0, -5.0, 5.0, 5.0)
    );
    let path = Geom::Path {
        points: vec![
            Point::new(10.0, 0.0),
            Point::new(-5.0, 7.0),
            Point::new(3.0, -2.0),
        ],
        closed: true,
    };
    assert_eq!(path.bounds(), Rect::new(-5.0, -2.0, 10.0, 7.0));

    let bezier = Geom::Bezier {
        commands: vec![
            PathCommand::MoveTo { x: 0.0, y: 0.0 },
            PathCommand::LineTo { x: 40.0, y: 10.0 },
        ],
    };
    assert_eq!(bezier.bounds(), Rect::new(0.0, 0.0, 40.0, 10.0));
    assert_eq!(points_bounds(&[]), Rect::ZERO);
}

#[test]
fn outlines_exist_for_vector_kinds_only() {
    let closed = Geom::Path {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ],
        closed: true,
    };
    let p = closed.to_bez_path().unwrap();
    assert_eq!(p.elements().len(), 4);
    assert!(closed.is_closed());

    let empty = Geom::Path {
        points: vec![],
        closed: false,
    };
    assert!(empty.to_bez_path().is_none());

    let pie = Geom::Pie {
        radius: 10.0,
        start_angle: 0.0,
        end_angle: 90.0,
    };
    let b = pie.bounds();
    assert!(b.x0.abs() < 1e-9 && b.y0.abs() < 1e-9);
    assert!((b.x1 - 10.0).abs() < 1e-6 && (b.y1 - 10.0).abs() < 1e-6);

    let image = Geom::Image {
        src: "logo.png".to_owned(),
        width: 20.0,
        height: 10.0,
    };
    assert!(image.to_bez_path().is_none());
    assert_eq!(image.bounds(), Rect::new(-10.0, -5.0, 10.0, 5.0));
}

#[test]
fn anchor_offsets_move_anchor_to_origin() {
    let b = Rect::new(-50.0, -25.0, 50.0, 25.0);
    assert_eq!(Anchor::Center.offset(b), Vec2::ZERO);
    assert_eq!(Anchor::TopLeft.offset(b), Vec2::new(50.0, 25.0));
    assert_eq!(Anchor::Bottom.offset(b), Vec2::new(0.0, -25.0));
    assert_eq!(Anchor::Right.offset(b), Vec2::new(-50.0, 0.0));
}

#[test]
fn json_is_kind_tagged() {
    let g: Geom =
        serde_json::from_str(r#"{"kind":"roundRect","width":10,"height":4,"radius":2}"#).unwrap();
    assert_eq!(g.kind(), ShapeKind::RoundRect);
    let g: Geom = serde_json::from_str(
        r#"{"kind":"path","points":[{"x":0,"y":0},{"x":5,"y":5}]}"#,
    )
    .unwrap();
    assert!(!g.is_closed());
    let g: Geom = serde_json::from_str(
        r#"{"kind":"arc","radius":5,"startAngle":0,"endAngle":180}"#,
    )
    .unwrap();
    assert_eq!(g.kind().as_str(), "arc");
}
