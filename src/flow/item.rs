use std::{fmt, sync::Arc};

use crate::{
    eval::evaluable::Evaluable,
    flow::group::FlowGroup,
    foundation::diagnostics::Diagnostics,
    shape::{instance::ShapeInstance, leaf::Shape},
};

/// Deferred item, built each time it is evaluated or measured.
///
/// The closure must be pure: every call returns an equivalent item.
#[derive(Clone)]
pub struct Thunk(Arc<dyn Fn() -> Item + Send + Sync>);

impl Thunk {
    /// Wrap a closure.
    pub fn new(f: impl Fn() -> Item + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the closure.
    pub fn force(&self) -> Item {
        (self.0)()
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// Node of a flow tree.
#[derive(Clone, Debug)]
pub enum Item {
    /// Leaf shape.
    Shape(Box<Shape>),
    /// Flow group.
    Group(Box<FlowGroup>),
    /// Items evaluated side by side, in order.
    List(Vec<Item>),
    /// Item produced on demand.
    Thunk(Thunk),
}

impl Item {
    /// Deferred item.
    pub fn thunk(f: impl Fn() -> Item + Send + Sync + 'static) -> Self {
        Self::Thunk(Thunk::new(f))
    }
}

impl From<Shape> for Item {
    fn from(s: Shape) -> Self {
        Self::Shape(Box::new(s))
    }
}

impl From<FlowGroup> for Item {
    fn from(g: FlowGroup) -> Self {
        Self::Group(Box::new(g))
    }
}

impl From<Vec<Item>> for Item {
    fn from(items: Vec<Item>) -> Self {
        Self::List(items)
    }
}

impl From<Thunk> for Item {
    fn from(t: Thunk) -> Self {
        Self::Thunk(t)
    }
}

impl Evaluable for Item {
    fn evaluate_into(&self, time: f64, out: &mut Vec<ShapeInstance>, diag: &mut Diagnostics) {
        match self {
            Self::Shape(s) => s.evaluate_into(time, out, diag),
            Self::Group(g) => g.evaluate_into(time, out, diag),
            Self::List(items) => flatten_items(items, time, 0.0, out, diag),
            Self::Thunk(t) => t.force().evaluate_into(time, out, diag),
        }
    }

    fn estimated_duration(&self) -> f64 {
        match self {
            Self::Shape(s) => s.estimated_duration(),
            Self::Group(g) => g.estimated_duration(),
            Self::List(items) => max_duration(items),
            Self::Thunk(t) => t.force().estimated_duration(),
        }
    }
}

/// Evaluate `items` at `time - offset`, appending their snapshots in input order.
pub fn flatten_items(
    items: &[Item],
    time: f64,
    offset: f64,
    out: &mut Vec<ShapeInstance>,
    diag: &mut Diagnostics,
) {
    let local = time - offset;
    for item in items {
        item.evaluate_into(local, out, diag);
    }
}

/// Longest estimated duration among `items`, `0` when empty.
pub fn max_duration(items: &[Item]) -> f64 {
    items
        .iter()
        .map(Evaluable::estimated_duration)
        .fold(0.0, f64::max)
}

#[cfg(test)]
#[path = "../../tests/unit/flow/item.rs"]
mod tests;
