use serde::{Deserialize, Serialize};

use crate::{
    animation::{
        color::ColorValue,
        timing::{Lerp, TimingSpec},
    },
    eval::evaluable::Evaluable,
    foundation::{
        core::{Point, Transform},
        diagnostics::Diagnostics,
        error::{FlowsceneError, FlowsceneResult},
    },
    shape::{
        geom::{Anchor, Geom, PathCommand, TextOptions},
        instance::{ShapeInstance, TrimState},
        modifier::{CornerSpec, Modifier},
        style::{BlendMode, Gradient, Shadow, Stroke},
    },
    transform::distort::distort,
};

fn default_opacity() -> f64 {
    1.0
}

/// Leaf shape builder: immutable base geometry, static style and an ordered modifier queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Base geometry.
    #[serde(flatten)]
    pub geom: Geom,
    /// Base transform; modifiers override individual fields.
    #[serde(default)]
    pub transform: Transform,
    /// Base opacity.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Draw order.
    #[serde(default)]
    pub z_index: i32,
    /// Transform origin.
    #[serde(default)]
    pub anchor: Anchor,
    /// Index fed to stagger offsets.
    #[serde(default)]
    pub unit_index: usize,
    /// Base fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ColorValue>,
    /// Fill gradient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    /// Base stroke.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    /// Drop shadow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Blend mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    /// Modifier queue, applied in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<Modifier>,
}

impl Shape {
    /// Bare shape around `geom`.
    pub fn new(geom: Geom) -> Self {
        Self {
            geom,
            transform: Transform::default(),
            opacity: 1.0,
            z_index: 0,
            anchor: Anchor::default(),
            unit_index: 0,
            fill: None,
            gradient: None,
            stroke: None,
            shadow: None,
            blend_mode: None,
            modifiers: Vec::new(),
        }
    }

    /// Circle of `radius`.
    pub fn circle(radius: f64) -> Self {
        Self::new(Geom::Circle { radius })
    }

    /// Center-origin rectangle.
    pub fn rect(width: f64, height: f64) -> Self {
        Self::new(Geom::Rect { width, height })
    }

    /// Ellipse with radii `rx`, `ry`.
    pub fn ellipse(rx: f64, ry: f64) -> Self {
        Self::new(Geom::Ellipse { rx, ry })
    }

    /// Rectangle with rounded corners.
    pub fn round_rect(width: f64, height: f64, radius: f64) -> Self {
        Self::new(Geom::RoundRect {
            width,
            height,
            radius,
        })
    }

    /// Annulus between `inner` and `outer`.
    pub fn ring(outer: f64, inner: f64) -> Self {
        Self::new(Geom::Ring { outer, inner })
    }

    /// Open arc; angles in degrees.
    pub fn arc(radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self::new(Geom::Arc {
            radius,
            start_angle,
            end_angle,
        })
    }

    /// Closed sector; angles in degrees.
    pub fn pie(radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self::new(Geom::Pie {
            radius,
            start_angle,
            end_angle,
        })
    }

    /// Closed path through `points`.
    pub fn polygon(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self::new(Geom::Path {
            points: points.into_iter().map(Into::into).collect(),
            closed: true,
        })
    }

    /// Open path through `points`.
    pub fn polyline(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self::new(Geom::Path {
            points: points.into_iter().map(Into::into).collect(),
            closed: false,
        })
    }

    /// Regular polygon inscribed in `radius`, first vertex pointing up.
    ///
    /// Fewer than three sides yields that many vertices; evaluation reports the path as
    /// degenerate.
    pub fn regular_polygon(sides: usize, radius: f64) -> Self {
        let points = (0..sides)
            .map(|i| polar(radius, i as f64 / sides as f64 * std::f64::consts::TAU))
            .collect();
        Self::new(Geom::Path {
            points,
            closed: true,
        })
    }

    /// Star with `points` tips alternating between `outer` and `inner` radii.
    pub fn star(points: usize, outer: f64, inner: f64) -> Self {
        let n = points * 2;
        let verts = (0..n)
            .map(|i| {
                let r = if i % 2 == 0 { outer } else { inner };
                polar(r, i as f64 / n as f64 * std::f64::consts::TAU)
            })
            .collect();
        Self::new(Geom::Path {
            points: verts,
            closed: true,
        })
    }

    /// Two-point open path.
    pub fn line(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self::polyline([from.into(), to.into()])
    }

    /// Command-based curve.
    pub fn bezier(commands: Vec<PathCommand>) -> Self {
        Self::new(Geom::Bezier { commands })
    }

    /// Several sub-paths filled together.
    pub fn compound(paths: Vec<Vec<PathCommand>>, even_odd: bool) -> Self {
        Self::new(Geom::Compound { paths, even_odd })
    }

    /// Image placeholder; loading is left to the renderer.
    pub fn image(src: impl Into<String>, width: f64, height: f64) -> Self {
        Self::new(Geom::Image {
            src: src.into(),
            width,
            height,
        })
    }

    /// Text run; glyph layout is left to the renderer.
    pub fn text(value: impl Into<String>, options: TextOptions) -> Self {
        Self::new(Geom::Text {
            value: value.into(),
            options,
        })
    }

    /// Renderer-defined drawing with an opaque payload.
    pub fn custom(
        name: impl Into<String>,
        width: f64,
        height: f64,
        params: serde_json::Value,
    ) -> Self {
        Self::new(Geom::Custom {
            name: name.into(),
            width,
            height,
            params,
        })
    }

    /// Place the base transform at `(x, y)`.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.transform.x = x;
        self.transform.y = y;
        self
    }

    /// Set the draw order.
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    /// Set the transform origin.
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the index used for stagger offsets.
    pub fn unit_index(mut self, index: usize) -> Self {
        self.unit_index = index;
        self
    }

    /// Set the base fill.
    pub fn fill(mut self, color: impl Into<ColorValue>) -> Self {
        self.fill = Some(color.into());
        self
    }

    /// Set the fill gradient.
    pub fn gradient(mut self, gradient: Gradient) -> Self {
        self.gradient = Some(gradient);
        self
    }

    /// Set the base stroke.
    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Set the drop shadow.
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Set the blend mode.
    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = Some(mode);
        self
    }

    /// Append a modifier to the queue.
    pub fn modify(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Drive `transform.x`.
    pub fn move_x(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::MoveX(spec.into()))
    }

    /// Drive `transform.y`.
    pub fn move_y(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::MoveY(spec.into()))
    }

    /// Drive both axes; the two specs resolve independently.
    pub fn move_to(self, x: impl Into<TimingSpec<f64>>, y: impl Into<TimingSpec<f64>>) -> Self {
        self.move_x(x).move_y(y)
    }

    /// Drive the uniform scale.
    pub fn scale(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::Scale(spec.into()))
    }

    /// Drive the horizontal scale.
    pub fn scale_x(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::ScaleX(spec.into()))
    }

    /// Drive the vertical scale.
    pub fn scale_y(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::ScaleY(spec.into()))
    }

    /// Drive rotation in degrees.
    pub fn rotate(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::Rotate(spec.into()))
    }

    /// Drive horizontal skew in degrees.
    pub fn skew_x(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::SkewX(spec.into()))
    }

    /// Drive vertical skew in degrees.
    pub fn skew_y(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::SkewY(spec.into()))
    }

    /// Drive opacity.
    pub fn opacity(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::Opacity(spec.into()))
    }

    /// Drive the fill color.
    pub fn fill_to(self, spec: impl Into<TimingSpec<ColorValue>>) -> Self {
        self.modify(Modifier::Fill(spec.into()))
    }

    /// Drive the stroke color, adding a 1px black stroke if none is set.
    pub fn stroke_color(self, spec: impl Into<TimingSpec<ColorValue>>) -> Self {
        self.modify(Modifier::StrokeColor(spec.into()))
    }

    /// Drive the stroke width.
    pub fn stroke_width(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::StrokeWidth(spec.into()))
    }

    /// Drive the drawn fraction of the outline.
    pub fn trim(self, spec: impl Into<TimingSpec<f64>>) -> Self {
        self.modify(Modifier::Trim(spec.into()))
    }

    /// Clip to `shapes`, evaluated at the same time as this shape.
    pub fn clip(self, shapes: Vec<Shape>) -> Self {
        self.modify(Modifier::Clip(shapes))
    }

    /// Bilinear corner distortion; static [`Corners`](crate::Corners) convert directly.
    pub fn distort(self, corners: impl Into<CornerSpec>) -> Self {
        self.modify(Modifier::Distort(corners.into()))
    }

    /// Reject non-finite base values and timing parameters.
    pub fn validate(&self) -> FlowsceneResult<()> {
        if !self.opacity.is_finite() {
            return Err(FlowsceneError::validation("shape opacity must be finite"));
        }
        let t = &self.transform;
        let fields = [t.x, t.y, t.scale, t.scale_x, t.scale_y, t.rotation, t.skew_x, t.skew_y];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(FlowsceneError::validation(format!(
                "{} shape transform must be finite",
                self.geom.kind().as_str()
            )));
        }
        self.modifiers.iter().try_for_each(Modifier::validate)
    }

    fn check_geom(&self, diag: &mut Diagnostics) {
        let Geom::Path { points, closed } = &self.geom else {
            return;
        };
        if points.len() < 2 {
            diag.warn_once(
                "path:degenerate",
                format!(
                    "path has {} point(s); at least 2 are needed to draw an outline",
                    points.len()
                ),
            );
        } else if *closed && points.len() < 3 {
            diag.warn_once(
                "polygon:degenerate",
                "closed path has 2 points; a polygon needs at least 3",
            );
        }
    }
}

fn polar(r: f64, angle: f64) -> Point {
    // Angle measured clockwise from straight up (y grows downward).
    Point::new(r * angle.sin(), -r * angle.cos())
}

/// First writer wins; a later writer takes over once its timing has started.
fn drive<T: Lerp + Clone>(
    slot: &mut T,
    claimed: &mut bool,
    spec: &TimingSpec<T>,
    time: f64,
    index: usize,
) {
    if !*claimed || spec.timing.has_started(time, index) {
        *slot = spec.value_at(time, index);
        *claimed = true;
    }
}

#[derive(Default)]
struct Claims {
    x: bool,
    y: bool,
    scale: bool,
    scale_x: bool,
    scale_y: bool,
    rotation: bool,
    skew_x: bool,
    skew_y: bool,
    opacity: bool,
    fill: bool,
    stroke_color: bool,
    stroke_width: bool,
    trim: bool,
}

impl Evaluable for Shape {
    fn evaluate_into(&self, time: f64, out: &mut Vec<ShapeInstance>, diag: &mut Diagnostics) {
        self.check_geom(diag);

        let idx = self.unit_index;
        let mut inst = ShapeInstance::new(self.geom.clone());
        inst.transform = self.transform;
        inst.z_index = self.z_index;
        inst.anchor = self.anchor;
        inst.gradient = self.gradient.clone();
        inst.shadow = self.shadow.clone();
        inst.blend_mode = self.blend_mode;

        let mut opacity = self.opacity;
        let mut fill = self.fill.clone().unwrap_or_default();
        let mut stroke = self.stroke.clone();
        let mut claims = Claims::default();

        for m in &self.modifiers {
            let tr = &mut inst.transform;
            match m {
                Modifier::MoveX(s) => drive(&mut tr.x, &mut claims.x, s, time, idx),
                Modifier::MoveY(s) => drive(&mut tr.y, &mut claims.y, s, time, idx),
                Modifier::Scale(s) => drive(&mut tr.scale, &mut claims.scale, s, time, idx),
                Modifier::ScaleX(s) => drive(&mut tr.scale_x, &mut claims.scale_x, s, time, idx),
                Modifier::ScaleY(s) => drive(&mut tr.scale_y, &mut claims.scale_y, s, time, idx),
                Modifier::Rotate(s) => {
                    drive(&mut tr.rotation, &mut claims.rotation, s, time, idx)
                }
                Modifier::SkewX(s) => drive(&mut tr.skew_x, &mut claims.skew_x, s, time, idx),
                Modifier::SkewY(s) => drive(&mut tr.skew_y, &mut claims.skew_y, s, time, idx),
                Modifier::Opacity(s) => drive(&mut opacity, &mut claims.opacity, s, time, idx),
                Modifier::Fill(s) => drive(&mut fill, &mut claims.fill, s, time, idx),
                Modifier::StrokeColor(s) => {
                    let st = stroke.get_or_insert_with(|| Stroke::solid("black", 1.0));
                    drive(&mut st.color, &mut claims.stroke_color, s, time, idx);
                }
                Modifier::StrokeWidth(s) => {
                    let st = stroke.get_or_insert_with(|| Stroke::solid("black", 1.0));
                    drive(&mut st.width, &mut claims.stroke_width, s, time, idx);
                }
                Modifier::Trim(s) => {
                    if !claims.trim || s.timing.has_started(time, idx) {
                        claims.trim = true;
                        inst.trim = Some(TrimState {
                            spec: s.clone(),
                            value: s.value_at(time, idx).clamp(0.0, 1.0),
                        });
                    }
                }
                Modifier::Clip(shapes) => {
                    for shape in shapes {
                        shape.evaluate_into(time, &mut inst.clip, diag);
                    }
                }
                Modifier::Distort(spec) => {
                    let corners = spec.resolve(time, idx);
                    match distort(&inst.geom, &corners) {
                        Some(geom) => {
                            inst.kind = geom.kind();
                            inst.geom = geom;
                        }
                        None => {
                            let kind = inst.kind.as_str();
                            diag.warn_once(
                                format!("distort:{kind}"),
                                format!(
                                    "distort is not supported for {kind} shapes; geometry left unchanged"
                                ),
                            );
                        }
                    }
                }
            }
        }

        if inst.trim.is_some() && inst.geom.to_bez_path().is_none() {
            diag.warn_once(
                format!("trim:{}", inst.kind.as_str()),
                format!("trim has no outline to act on for {} shapes", inst.kind.as_str()),
            );
        }
        if let Some(st) = stroke.as_mut()
            && st.width < 0.0
        {
            diag.warn_once(
                "stroke:negative-width",
                format!("stroke width {} is negative; clamped to 0", st.width),
            );
            st.width = 0.0;
        }

        inst.opacity = opacity.clamp(0.0, 1.0);
        inst.fill = (claims.fill || self.fill.is_some()).then_some(fill);
        inst.stroke = stroke;
        out.push(inst);
    }

    fn estimated_duration(&self) -> f64 {
        self.modifiers
            .iter()
            .map(|m| m.end_time(self.unit_index))
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/leaf.rs"]
mod tests;
