use super::*;
use crate::animation::timing::TimingSpec;

fn dot(x: f64) -> Item {
    Shape::circle(1.0).at(x, 0.0).into()
}

#[test]
fn flatten_preserves_input_order() {
    let items = vec![dot(1.0), Item::List(vec![dot(2.0), dot(3.0)]), dot(4.0)];
    let mut out = Vec::new();
    let mut diag = Diagnostics::new();
    flatten_items(&items, 0.0, 0.0, &mut out, &mut diag);
    let xs: Vec<f64> = out.iter().map(|i| i.transform.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn flatten_shifts_time_by_offset() {
    let items = vec![Item::from(
        Shape::circle(1.0).move_x(TimingSpec::new(0.0, 100.0, 100.0)),
    )];
    let mut out = Vec::new();
    let mut diag = Diagnostics::new();
    flatten_items(&items, 150.0, 100.0, &mut out, &mut diag);
    assert_eq!(out[0].transform.x, 50.0);
}

#[test]
fn thunks_are_resolved_on_each_use() {
    let item = Item::thunk(|| Shape::rect(2.0, 2.0).opacity(TimingSpec::new(0.0, 1.0, 400.0)).into());
    assert_eq!(item.estimated_duration(), 400.0);
    assert_eq!(item.evaluate(200.0)[0].opacity, 0.5);
    assert_eq!(item.evaluate(200.0)[0].opacity, 0.5);
    assert_eq!(format!("{item:?}"), "Thunk(Thunk(..))");
}

#[test]
fn list_duration_is_max_not_sum() {
    let list = Item::List(vec![
        Shape::circle(1.0).move_x(TimingSpec::new(0.0, 1.0, 300.0)).into(),
        Shape::circle(1.0).move_x(TimingSpec::new(0.0, 1.0, 700.0)).into(),
    ]);
    assert_eq!(list.estimated_duration(), 700.0);
    assert_eq!(max_duration(&[]), 0.0);
}
