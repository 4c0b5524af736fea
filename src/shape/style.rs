use serde::{Deserialize, Serialize};

use crate::animation::color::ColorValue;

/// How a snapshot is composited onto what is already drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlendMode {
    /// Source over destination.
    #[default]
    Normal,
    /// Multiply.
    Multiply,
    /// Screen.
    Screen,
    /// Overlay.
    Overlay,
    /// Darken.
    Darken,
    /// Lighten.
    Lighten,
    /// Color dodge.
    ColorDodge,
    /// Color burn.
    ColorBurn,
    /// Soft light.
    SoftLight,
    /// Hard light.
    HardLight,
    /// Difference.
    Difference,
    /// Exclusion.
    Exclusion,
}

/// Stroke end cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineCap {
    /// Flat, ending at the endpoint.
    #[default]
    Butt,
    /// Semicircular.
    Round,
    /// Flat, extended by half the width.
    Square,
}

/// Stroke corner join.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineJoin {
    /// Sharp corner.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Cut-off corner.
    Bevel,
}

/// One color stop of a gradient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: ColorValue,
}

/// Gradient description; the renderer builds the actual gradient object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Gradient {
    /// Linear gradient between two local points.
    Linear {
        /// Start x.
        x0: f64,
        /// Start y.
        y0: f64,
        /// End x.
        x1: f64,
        /// End y.
        y1: f64,
        /// Color stops.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient around a local center.
    Radial {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
        /// Color stops.
        stops: Vec<GradientStop>,
    },
}

/// Resolved stroke of a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    /// Stroke color.
    pub color: ColorValue,
    /// Line width; never negative.
    pub width: f64,
    /// End cap.
    #[serde(default)]
    pub cap: LineCap,
    /// Corner join.
    #[serde(default)]
    pub join: LineJoin,
    /// Dash pattern; empty means solid.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dash: Vec<f64>,
    /// Offset into the dash pattern.
    #[serde(default)]
    pub dash_offset: f64,
    /// Gradient used instead of `color`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
}

impl Stroke {
    /// Solid stroke.
    pub fn solid(color: impl Into<ColorValue>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            cap: LineCap::default(),
            join: LineJoin::default(),
            dash: Vec::new(),
            dash_offset: 0.0,
            gradient: None,
        }
    }
}

/// Drop shadow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Shadow color.
    pub color: ColorValue,
    /// Blur radius.
    #[serde(default)]
    pub blur: f64,
    /// Horizontal offset.
    #[serde(default)]
    pub offset_x: f64,
    /// Vertical offset.
    #[serde(default)]
    pub offset_y: f64,
}
