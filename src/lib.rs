//! Flowscene is a time-evaluation engine for declarative, animated 2D scenes.
//!
//! A scene is a tree of leaf [`Shape`]s and flow groups. Every node is [`Evaluable`]:
//! sampling it at a time produces a flat list of immutable [`ShapeInstance`] snapshots that
//! a renderer draws in z-order.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build shapes with timing-driven modifiers ([`TimingSpec`]) and compose
//!    them with [`parallel`], [`sequence`], [`on`] and [`when`], or load a [`SceneDef`]
//!    from JSON.
//! 2. **Evaluate**: `Scene + time -> EvaluatedFrame` via [`Evaluator::eval_frame`].
//! 3. **Draw** (external): the renderer consumes the sorted [`ShapeInstance`] list.
//!
//! Key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure evaluation**: the same tree sampled at the same time always yields the same
//!   snapshots, in any call order. Nothing is cached between calls.
//! - **Never throws per frame**: malformed timing input degrades gracefully; drawable-but-
//!   suspicious input is reported once through [`Diagnostics`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod flow;
mod foundation;
mod scene;
mod shape;

/// Geometric transforms applied to shape geometry.
pub mod transform;

pub use animation::color::{ColorValue, Rgb8, lerp_color};
pub use animation::ease::Ease;
pub use animation::keyframes::{Keyframe, Keyframes};
pub use animation::timing::{Lerp, Timing, TimingSpec, lerp, phase};
pub use eval::evaluable::Evaluable;
pub use eval::evaluator::{EvaluatedFrame, Evaluator};
pub use eval::time_ref::{TimeRef, resolve_start};
pub use flow::group::{FlowGroup, Predicate, SequenceEntry, on, parallel, sequence, when};
pub use flow::item::{Item, Thunk, flatten_items, max_duration};
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Transform, Vec2};
pub use foundation::diagnostics::{Diagnostic, DiagnosticLevel, Diagnostics};
pub use foundation::error::{FlowsceneError, FlowsceneResult};
pub use scene::composition::{Scene, SceneFactory};
pub use scene::model::{ItemDef, SceneDef, WindowDef};
pub use shape::geom::{Anchor, Geom, PathCommand, ShapeKind, TextAlign, TextOptions, points_bounds};
pub use shape::instance::{ShapeInstance, TrimState};
pub use shape::leaf::Shape;
pub use shape::modifier::{CornerSpec, Modifier};
pub use shape::style::{BlendMode, Gradient, GradientStop, LineCap, LineJoin, Shadow, Stroke};
pub use transform::distort::{Corners, distort, distort_points};
