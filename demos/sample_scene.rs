use flowscene::{
    Canvas, Corners, Ease, Evaluator, Item, Predicate, Scene, Shape, Stroke, TimingSpec, Vec2,
    on, parallel, sequence, when,
};

fn title() -> Item {
    Shape::rect(240.0, 60.0)
        .at(320.0, 80.0)
        .fill("#1e88e5")
        .z_index(1)
        .opacity(TimingSpec::new(0.0, 1.0, 300.0).ease(Ease::EaseOut))
        .scale(TimingSpec::new(0.8, 1.0, 300.0).ease(Ease::OutCubic))
        .into()
}

fn dots() -> Item {
    let dots: Vec<Item> = (0..5)
        .map(|i| {
            Shape::circle(10.0)
                .at(200.0 + i as f64 * 60.0, 200.0)
                .fill("white")
                .unit_index(i)
                .move_y(
                    TimingSpec::new(200.0, 180.0, 250.0)
                        .ease(Ease::EaseInOut)
                        .stagger(80.0),
                )
                .into()
        })
        .collect();
    parallel(dots).into()
}

fn card() -> Item {
    Shape::rect(160.0, 100.0)
        .at(320.0, 300.0)
        .stroke(Stroke::solid("yellow", 2.0))
        .distort(Corners {
            tl: Vec2::new(-20.0, 0.0),
            tr: Vec2::new(20.0, 0.0),
            ..Corners::default()
        })
        .stroke_width(TimingSpec::new(2.0, 6.0, 400.0).looping(true).repeat_delay(200.0))
        .into()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let scene = Scene::new(
        Canvas {
            width: 640,
            height: 400,
        },
        vec![
            sequence([title(), dots()]).into(),
            on("scene+500", [card()]).into(),
            when(Predicate::dynamic(|t| t < 1500.0), [
                Shape::text("flowscene", Default::default())
                    .at(320.0, 20.0)
                    .z_index(10)
                    .into(),
            ])
            .into(),
        ],
    )
    .with_background("#101820");

    let duration = scene.estimated_duration()?;
    println!("estimated duration: {duration} ms");

    let mut t = 0.0;
    while t <= duration {
        let frame = Evaluator::eval_frame(&scene, t);
        println!("t={t:>6}: {} instances", frame.instances.len());
        t += 100.0;
    }

    Ok(())
}
