use serde::{Deserialize, Serialize};

use crate::{
    animation::{
        color::ColorValue,
        timing::{Timing, TimingSpec},
    },
    eval::evaluable::Evaluable,
    foundation::{core::Vec2, error::FlowsceneResult},
    shape::leaf::Shape,
    transform::distort::Corners,
};

/// Per-corner displacement, each optionally driven over time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerSpec {
    /// Top-left displacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tl: Option<TimingSpec<Vec2>>,
    /// Top-right displacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tr: Option<TimingSpec<Vec2>>,
    /// Bottom-right displacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub br: Option<TimingSpec<Vec2>>,
    /// Bottom-left displacement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bl: Option<TimingSpec<Vec2>>,
}

impl CornerSpec {
    fn specs(&self) -> impl Iterator<Item = &TimingSpec<Vec2>> {
        [&self.tl, &self.tr, &self.br, &self.bl]
            .into_iter()
            .flatten()
    }

    /// Corner displacements at `time`.
    pub fn resolve(&self, time: f64, index: usize) -> Corners {
        let at = |s: &Option<TimingSpec<Vec2>>| {
            s.as_ref()
                .map(|s| s.value_at(time, index))
                .unwrap_or(Vec2::ZERO)
        };
        Corners {
            tl: at(&self.tl),
            tr: at(&self.tr),
            br: at(&self.br),
            bl: at(&self.bl),
        }
    }

    fn end_time(&self, index: usize) -> f64 {
        self.specs()
            .map(|s| s.end_time(index))
            .fold(0.0, f64::max)
    }
}

impl From<Corners> for CornerSpec {
    fn from(c: Corners) -> Self {
        let fixed = |v: Vec2| (v != Vec2::ZERO).then(|| TimingSpec::constant(v));
        Self {
            tl: fixed(c.tl),
            tr: fixed(c.tr),
            br: fixed(c.br),
            bl: fixed(c.bl),
        }
    }
}

/// One timing-governed change applied to a leaf shape, in queue order.
///
/// For a given attribute the first modifier always applies; a later one takes over once
/// its own start has been reached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Modifier {
    /// Drive `transform.x`.
    MoveX(TimingSpec<f64>),
    /// Drive `transform.y`.
    MoveY(TimingSpec<f64>),
    /// Drive the uniform scale.
    Scale(TimingSpec<f64>),
    /// Drive the horizontal scale.
    ScaleX(TimingSpec<f64>),
    /// Drive the vertical scale.
    ScaleY(TimingSpec<f64>),
    /// Drive rotation (degrees).
    Rotate(TimingSpec<f64>),
    /// Drive horizontal skew (degrees).
    SkewX(TimingSpec<f64>),
    /// Drive vertical skew (degrees).
    SkewY(TimingSpec<f64>),
    /// Drive opacity; clamped to `[0, 1]`.
    Opacity(TimingSpec<f64>),
    /// Drive the fill color.
    Fill(TimingSpec<ColorValue>),
    /// Drive the stroke color.
    StrokeColor(TimingSpec<ColorValue>),
    /// Drive the stroke width; clamped at `0`.
    StrokeWidth(TimingSpec<f64>),
    /// Drive the drawn fraction of the outline.
    Trim(TimingSpec<f64>),
    /// Clip to these shapes, evaluated at the same time.
    Clip(Vec<Shape>),
    /// Bilinear corner distortion; rewrites the geometry into a path.
    Distort(CornerSpec),
}

impl Modifier {
    /// When this modifier stops changing for unit `index`.
    pub fn end_time(&self, index: usize) -> f64 {
        match self {
            Self::MoveX(s)
            | Self::MoveY(s)
            | Self::Scale(s)
            | Self::ScaleX(s)
            | Self::ScaleY(s)
            | Self::Rotate(s)
            | Self::SkewX(s)
            | Self::SkewY(s)
            | Self::Opacity(s)
            | Self::StrokeWidth(s)
            | Self::Trim(s) => s.end_time(index),
            Self::Fill(s) | Self::StrokeColor(s) => s.end_time(index),
            Self::Clip(shapes) => shapes
                .iter()
                .map(Evaluable::estimated_duration)
                .fold(0.0, f64::max),
            Self::Distort(c) => c.end_time(index),
        }
    }

    /// Reject non-finite timing parameters, recursing into clip shapes.
    pub fn validate(&self) -> FlowsceneResult<()> {
        let timings: Vec<&Timing> = match self {
            Self::MoveX(s)
            | Self::MoveY(s)
            | Self::Scale(s)
            | Self::ScaleX(s)
            | Self::ScaleY(s)
            | Self::Rotate(s)
            | Self::SkewX(s)
            | Self::SkewY(s)
            | Self::Opacity(s)
            | Self::StrokeWidth(s)
            | Self::Trim(s) => vec![&s.timing],
            Self::Fill(s) | Self::StrokeColor(s) => vec![&s.timing],
            Self::Clip(shapes) => {
                return shapes.iter().try_for_each(Shape::validate);
            }
            Self::Distort(c) => c.specs().map(|s| &s.timing).collect(),
        };
        timings.into_iter().try_for_each(Timing::validate)
    }
}
