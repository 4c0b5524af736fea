use serde::{Deserialize, Serialize};

use crate::{
    animation::color::ColorValue,
    eval::time_ref::TimeRef,
    flow::{
        group::{Predicate, on, parallel, sequence, when},
        item::Item,
    },
    foundation::{
        core::Canvas,
        error::{FlowsceneError, FlowsceneResult},
    },
    shape::leaf::Shape,
};

pub(crate) const SCENE_VERSION: &str = "1";

fn default_version() -> String {
    SCENE_VERSION.to_owned()
}

/// JSON scene document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDef {
    /// Document format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Canvas size.
    pub canvas: Canvas,
    /// Explicit duration in milliseconds; estimated from the items when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Background color handed to the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorValue>,
    /// Top-level items, evaluated side by side.
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

/// Half-open time window `[from, until)` in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowDef {
    /// Inclusive start.
    #[serde(default)]
    pub from: f64,
    /// Exclusive end; open-ended when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<f64>,
}

impl WindowDef {
    fn contains(&self, t: f64) -> bool {
        t >= self.from && self.until.is_none_or(|u| t < u)
    }
}

fn yes() -> bool {
    true
}

/// One node of a scene document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemDef {
    /// Leaf shape.
    Shape(Box<Shape>),
    /// Children at the same time.
    Parallel(Vec<ItemDef>),
    /// Children one after another.
    Sequence(Vec<ItemDef>),
    /// Children from a start reference onward.
    On {
        /// Number or symbolic reference such as `"scene+200"`.
        start: TimeRef,
        /// Children.
        items: Vec<ItemDef>,
    },
    /// Children gated by a visibility flag and an optional time window.
    When {
        /// Static visibility.
        #[serde(default = "yes")]
        visible: bool,
        /// Only visible inside this window.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        window: Option<WindowDef>,
        /// Children.
        items: Vec<ItemDef>,
    },
}

impl SceneDef {
    /// Check document-level fields and every shape's timing.
    pub fn validate(&self) -> FlowsceneResult<()> {
        if self.version != SCENE_VERSION {
            return Err(FlowsceneError::validation(format!(
                "unsupported scene version '{}', expected '{SCENE_VERSION}'",
                self.version
            )));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(FlowsceneError::validation(
                "canvas width/height must be > 0",
            ));
        }
        if let Some(d) = self.duration
            && (!d.is_finite() || d < 0.0)
        {
            return Err(FlowsceneError::validation(
                "duration must be finite and >= 0",
            ));
        }
        self.items.iter().try_for_each(ItemDef::validate)
    }
}

impl ItemDef {
    /// Check this node and its children.
    pub fn validate(&self) -> FlowsceneResult<()> {
        match self {
            Self::Shape(s) => s.validate(),
            Self::Parallel(items) | Self::Sequence(items) | Self::On { items, .. } => {
                items.iter().try_for_each(Self::validate)
            }
            Self::When { window, items, .. } => {
                if let Some(w) = window
                    && (!w.from.is_finite() || w.until.is_some_and(|u| u.is_nan()))
                {
                    return Err(FlowsceneError::validation(
                        "when window bounds must be numbers",
                    ));
                }
                items.iter().try_for_each(Self::validate)
            }
        }
    }

    /// Build the runtime item tree.
    pub fn to_item(&self) -> Item {
        let children = |items: &[ItemDef]| items.iter().map(Self::to_item).collect::<Vec<_>>();
        match self {
            Self::Shape(s) => Item::Shape(s.clone()),
            Self::Parallel(items) => parallel(children(items)).into(),
            Self::Sequence(items) => sequence(children(items)).into(),
            Self::On { start, items } => on(*start, children(items)).into(),
            Self::When {
                visible,
                window,
                items,
            } => {
                let predicate = match (*visible, *window) {
                    (false, _) => Predicate::Static(false),
                    (true, None) => Predicate::Static(true),
                    (true, Some(w)) => Predicate::dynamic(move |t| w.contains(t)),
                };
                when(predicate, children(items)).into()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
