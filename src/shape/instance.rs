use serde::Serialize;

use crate::{
    animation::{color::ColorValue, timing::TimingSpec},
    foundation::core::{Affine, Rect, Vec2},
    shape::{
        geom::{Anchor, Geom, ShapeKind},
        style::{BlendMode, Gradient, Shadow, Stroke},
    },
};

/// Trim window of an outline at the sampled time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrimState {
    /// The driving spec, handed through for renderers that trim incrementally.
    pub spec: TimingSpec<f64>,
    /// Fraction of the outline drawn, in `[0, 1]`.
    pub value: f64,
}

/// Immutable, fully resolved snapshot of one shape at one time.
///
/// Produced fresh by every evaluation; the consumer owns it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeInstance {
    /// Discriminant, always equal to `geom.kind()`.
    pub kind: ShapeKind,
    /// Kind-specific geometry.
    pub geom: Geom,
    /// Resolved transform.
    pub transform: crate::foundation::core::Transform,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Draw order; ties keep evaluation order.
    pub z_index: i32,
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColorValue>,
    /// Fill gradient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    /// Stroke.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Clip shapes, in this shape's local space.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clip: Vec<ShapeInstance>,
    /// Outline trim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<TrimState>,
    /// Drop shadow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Blend mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    /// Transform origin within the geometry bounds.
    pub anchor: Anchor,
}

impl ShapeInstance {
    /// Bare snapshot of `geom` with identity transform and full opacity.
    pub fn new(geom: Geom) -> Self {
        Self {
            kind: geom.kind(),
            geom,
            transform: Default::default(),
            opacity: 1.0,
            z_index: 0,
            fill: None,
            gradient: None,
            stroke: None,
            clip: Vec::new(),
            trim: None,
            shadow: None,
            blend_mode: None,
            anchor: Anchor::default(),
        }
    }

    /// Local geometry bounds.
    pub fn local_bounds(&self) -> Rect {
        self.geom.bounds()
    }

    /// Translation applied before the transform so the anchor sits on the origin.
    pub fn anchor_offset(&self) -> Vec2 {
        self.anchor.offset(self.local_bounds())
    }

    /// Full local-to-canvas matrix including the anchor shift.
    pub fn to_affine(&self) -> Affine {
        self.transform.to_affine() * Affine::translate(self.anchor_offset())
    }

    /// Canvas-space bounds of the transformed geometry.
    pub fn world_bounds(&self) -> Rect {
        self.to_affine().transform_rect_bbox(self.local_bounds())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/instance.rs"]
mod tests;
