//! Flow combinators: `parallel`, `sequence`, `on`, `when`.
//!
//! Groups own their children. Sequence offsets are fixed at construction from the
//! estimated durations of earlier items and never recomputed during evaluation.

use std::{fmt, sync::Arc};

use crate::{
    eval::{evaluable::Evaluable, time_ref::TimeRef},
    flow::item::{Item, flatten_items, max_duration},
    foundation::diagnostics::Diagnostics,
    shape::instance::ShapeInstance,
};

/// Visibility test for [`when`].
#[derive(Clone)]
pub enum Predicate {
    /// Fixed answer.
    Static(bool),
    /// Function of the queried time; must be pure.
    Dynamic(Arc<dyn Fn(f64) -> bool + Send + Sync>),
}

impl Predicate {
    /// Time-dependent predicate.
    pub fn dynamic(f: impl Fn(f64) -> bool + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Evaluate at `time`.
    pub fn test(&self, time: f64) -> bool {
        match self {
            Self::Static(v) => *v,
            Self::Dynamic(f) => f(time),
        }
    }
}

impl From<bool> for Predicate {
    fn from(v: bool) -> Self {
        Self::Static(v)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(v) => f.debug_tuple("Static").field(v).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// One child of a sequence with its precomputed start.
#[derive(Clone, Debug)]
pub struct SequenceEntry {
    /// Sum of the estimated durations of all earlier items.
    pub offset: f64,
    /// The child.
    pub item: Item,
}

#[derive(Clone, Debug)]
enum GroupKind {
    Parallel(Vec<Item>),
    Sequence {
        entries: Vec<SequenceEntry>,
        total: f64,
    },
    On {
        start: TimeRef,
        resolved: f64,
        items: Vec<Item>,
    },
    When {
        predicate: Predicate,
        items: Vec<Item>,
    },
}

/// Composite [`Evaluable`] built by one of the flow combinators.
#[derive(Clone, Debug)]
pub struct FlowGroup(GroupKind);

impl FlowGroup {
    /// Sequence entries with their offsets; empty for other combinators.
    pub fn entries(&self) -> &[SequenceEntry] {
        match &self.0 {
            GroupKind::Sequence { entries, .. } => entries.as_slice(),
            _ => &[],
        }
    }

    /// Resolved start of an `on` group.
    pub fn start(&self) -> Option<(TimeRef, f64)> {
        match &self.0 {
            GroupKind::On {
                start, resolved, ..
            } => Some((*start, *resolved)),
            _ => None,
        }
    }

    /// Combinator name, for logs and dumps.
    pub fn name(&self) -> &'static str {
        match &self.0 {
            GroupKind::Parallel(_) => "parallel",
            GroupKind::Sequence { .. } => "sequence",
            GroupKind::On { .. } => "on",
            GroupKind::When { .. } => "when",
        }
    }
}

/// All `items` at the same time, in input order.
pub fn parallel(items: impl IntoIterator<Item = Item>) -> FlowGroup {
    FlowGroup(GroupKind::Parallel(items.into_iter().collect()))
}

/// `items` one after another, each starting when the estimated duration of the previous
/// one has elapsed. Each item sees its own clock starting at `0`.
pub fn sequence(items: impl IntoIterator<Item = Item>) -> FlowGroup {
    let mut total = 0.0;
    let entries: Vec<SequenceEntry> = items
        .into_iter()
        .map(|item| {
            let offset = total;
            total += item.estimated_duration().max(0.0);
            SequenceEntry { offset, item }
        })
        .collect();
    tracing::debug!(items = entries.len(), total, "sequence offsets computed");
    FlowGroup(GroupKind::Sequence { entries, total })
}

/// `items` from the resolved `start` onward, on a clock shifted to start there.
///
/// `prev.end` references resolve against `0`.
pub fn on(start: impl Into<TimeRef>, items: impl IntoIterator<Item = Item>) -> FlowGroup {
    let start = start.into();
    FlowGroup(GroupKind::On {
        start,
        resolved: start.resolve(0.0),
        items: items.into_iter().collect(),
    })
}

/// `items` only while `predicate` holds at the queried time.
pub fn when(predicate: impl Into<Predicate>, items: impl IntoIterator<Item = Item>) -> FlowGroup {
    FlowGroup(GroupKind::When {
        predicate: predicate.into(),
        items: items.into_iter().collect(),
    })
}

impl Evaluable for FlowGroup {
    fn evaluate_into(&self, time: f64, out: &mut Vec<ShapeInstance>, diag: &mut Diagnostics) {
        match &self.0 {
            GroupKind::Parallel(items) => flatten_items(items, time, 0.0, out, diag),
            GroupKind::Sequence { entries, .. } => {
                for e in entries.iter().filter(|e| time >= e.offset) {
                    e.item.evaluate_into(time - e.offset, out, diag);
                }
            }
            GroupKind::On {
                resolved, items, ..
            } => {
                if time >= *resolved {
                    flatten_items(items, time, *resolved, out, diag);
                }
            }
            GroupKind::When { predicate, items } => {
                if predicate.test(time) {
                    flatten_items(items, time, 0.0, out, diag);
                }
            }
        }
    }

    fn estimated_duration(&self) -> f64 {
        match &self.0 {
            GroupKind::Parallel(items) | GroupKind::When { items, .. } => max_duration(items),
            GroupKind::Sequence { total, .. } => *total,
            GroupKind::On {
                resolved, items, ..
            } => (resolved + max_duration(items)).max(0.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/flow/group.rs"]
mod tests;
