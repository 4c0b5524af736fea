//! Kind-tagged base geometry.
//!
//! Every geometry-consuming operation (distortion, bounds, anchoring, outline export) goes
//! through the per-kind helpers here instead of branching on the kind itself.

use kurbo::Shape as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{BezPath, Point, Rect, Vec2};

const TOLERANCE: f64 = 0.1;

/// Shape discriminant as seen by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    /// Circle.
    Circle,
    /// Rectangle.
    Rect,
    /// Ellipse.
    Ellipse,
    /// Rectangle with rounded corners.
    RoundRect,
    /// Annulus.
    Ring,
    /// Open circular arc.
    Arc,
    /// Closed circular sector.
    Pie,
    /// Polyline or polygon.
    Path,
    /// Command-based curve.
    Bezier,
    /// Several sub-paths filled together.
    Compound,
    /// Raster image.
    Image,
    /// Text run.
    Text,
    /// Renderer-defined drawing.
    Custom,
}

impl ShapeKind {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::RoundRect => "roundRect",
            Self::Ring => "ring",
            Self::Arc => "arc",
            Self::Pie => "pie",
            Self::Path => "path",
            Self::Bezier => "bezier",
            Self::Compound => "compound",
            Self::Image => "image",
            Self::Text => "text",
            Self::Custom => "custom",
        }
    }
}

/// One drawing command of a [`Geom::Bezier`] or [`Geom::Compound`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum PathCommand {
    /// Start a new sub-path.
    MoveTo {
        /// Target.
        x: f64,
        /// Target.
        y: f64,
    },
    /// Straight segment.
    LineTo {
        /// Target.
        x: f64,
        /// Target.
        y: f64,
    },
    /// Quadratic segment.
    QuadTo {
        /// Control point.
        cx: f64,
        /// Control point.
        cy: f64,
        /// Target.
        x: f64,
        /// Target.
        y: f64,
    },
    /// Cubic segment.
    CubicTo {
        /// First control point.
        c1x: f64,
        /// First control point.
        c1y: f64,
        /// Second control point.
        c2x: f64,
        /// Second control point.
        c2y: f64,
        /// Target.
        x: f64,
        /// Target.
        y: f64,
    },
    /// Close the current sub-path.
    Close,
}

fn append_commands(path: &mut BezPath, commands: &[PathCommand]) {
    for c in commands {
        match *c {
            PathCommand::MoveTo { x, y } => path.move_to((x, y)),
            PathCommand::LineTo { x, y } => path.line_to((x, y)),
            PathCommand::QuadTo { cx, cy, x, y } => path.quad_to((cx, cy), (x, y)),
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => path.curve_to((c1x, c1y), (c2x, c2y), (x, y)),
            PathCommand::Close => path.close_path(),
        }
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    /// Left edge at the origin.
    Left,
    /// Centered on the origin.
    #[default]
    Center,
    /// Right edge at the origin.
    Right,
}

/// Layout options handed to the external text renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextOptions {
    /// Font family or CSS font shorthand.
    pub font: Option<String>,
    /// Font size in pixels.
    pub size: f64,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Extra spacing between glyphs in pixels.
    pub letter_spacing: f64,
    /// Wrap width.
    pub max_width: Option<f64>,
    /// Lay glyphs out along this path instead of a straight baseline.
    pub on_path: Option<Vec<PathCommand>>,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            font: None,
            size: 16.0,
            align: TextAlign::Center,
            letter_spacing: 0.0,
            max_width: None,
            on_path: None,
        }
    }
}

/// Base geometry in local, center-origin coordinates (angles in degrees).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Geom {
    /// Circle of `radius`.
    Circle {
        /// Radius.
        radius: f64,
    },
    /// Axis-aligned rectangle.
    Rect {
        /// Width.
        width: f64,
        /// Height.
        height: f64,
    },
    /// Axis-aligned ellipse.
    Ellipse {
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
    /// Rectangle with uniform corner radius.
    RoundRect {
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Corner radius.
        radius: f64,
    },
    /// Annulus between two radii.
    Ring {
        /// Outer radius.
        outer: f64,
        /// Inner radius.
        inner: f64,
    },
    /// Open arc.
    Arc {
        /// Radius.
        radius: f64,
        /// Start angle.
        start_angle: f64,
        /// End angle.
        end_angle: f64,
    },
    /// Closed sector.
    Pie {
        /// Radius.
        radius: f64,
        /// Start angle.
        start_angle: f64,
        /// End angle.
        end_angle: f64,
    },
    /// Ordered point list.
    Path {
        /// Vertices.
        points: Vec<Point>,
        /// Connect the last vertex back to the first.
        #[serde(default)]
        closed: bool,
    },
    /// Drawing commands.
    Bezier {
        /// Commands in order.
        commands: Vec<PathCommand>,
    },
    /// Several sub-paths.
    Compound {
        /// Sub-paths.
        paths: Vec<Vec<PathCommand>>,
        /// Use the even-odd fill rule instead of non-zero.
        #[serde(default)]
        even_odd: bool,
    },
    /// Image reference; loading is external.
    Image {
        /// Source URL or path.
        src: String,
        /// Display width.
        width: f64,
        /// Display height.
        height: f64,
    },
    /// Text run; glyph layout is external.
    Text {
        /// Text content.
        value: String,
        /// Layout options.
        #[serde(default)]
        options: TextOptions,
    },
    /// Renderer-defined drawing.
    Custom {
        /// Renderer-side identifier.
        name: String,
        /// Declared width (for bounds and anchoring).
        #[serde(default)]
        width: f64,
        /// Declared height.
        #[serde(default)]
        height: f64,
        /// Opaque payload.
        #[serde(default)]
        params: serde_json::Value,
    },
}

impl Geom {
    /// Discriminant of this geometry.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Rect { .. } => ShapeKind::Rect,
            Self::Ellipse { .. } => ShapeKind::Ellipse,
            Self::RoundRect { .. } => ShapeKind::RoundRect,
            Self::Ring { .. } => ShapeKind::Ring,
            Self::Arc { .. } => ShapeKind::Arc,
            Self::Pie { .. } => ShapeKind::Pie,
            Self::Path { .. } => ShapeKind::Path,
            Self::Bezier { .. } => ShapeKind::Bezier,
            Self::Compound { .. } => ShapeKind::Compound,
            Self::Image { .. } => ShapeKind::Image,
            Self::Text { .. } => ShapeKind::Text,
            Self::Custom { .. } => ShapeKind::Custom,
        }
    }

    /// Explicit ordered point list, for kinds that have one.
    ///
    /// Rectangles (plain and rounded) yield their corners `[tl, tr, br, bl]`; paths yield
    /// their points unchanged. Other kinds return `None`.
    pub fn points(&self) -> Option<Vec<Point>> {
        match self {
            Self::Rect { width, height } | Self::RoundRect { width, height, .. } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                Some(vec![
                    Point::new(-hw, -hh),
                    Point::new(hw, -hh),
                    Point::new(hw, hh),
                    Point::new(-hw, hh),
                ])
            }
            Self::Path { points, .. } => Some(points.clone()),
            _ => None,
        }
    }

    /// Whether the outline is closed.
    pub fn is_closed(&self) -> bool {
        match self {
            Self::Path { closed, .. } => *closed,
            Self::Arc { .. } | Self::Text { .. } | Self::Custom { .. } => false,
            Self::Bezier { commands } => matches!(commands.last(), Some(PathCommand::Close)),
            _ => true,
        }
    }

    /// Local axis-aligned bounds.
    pub fn bounds(&self) -> Rect {
        fn centered(w: f64, h: f64) -> Rect {
            Rect::from_center_size(Point::ORIGIN, (w.abs(), h.abs()))
        }

        match self {
            Self::Circle { radius } => centered(radius * 2.0, radius * 2.0),
            Self::Rect { width, height } | Self::RoundRect { width, height, .. } => {
                centered(*width, *height)
            }
            Self::Ellipse { rx, ry } => centered(rx * 2.0, ry * 2.0),
            Self::Ring { outer, .. } => centered(outer * 2.0, outer * 2.0),
            Self::Arc { .. } | Self::Pie { .. } | Self::Bezier { .. } | Self::Compound { .. } => {
                self.to_bez_path()
                    .map(|p| p.bounding_box())
                    .unwrap_or(Rect::ZERO)
            }
            Self::Path { points, .. } => points_bounds(points),
            Self::Image { width, height, .. } | Self::Custom { width, height, .. } => {
                centered(*width, *height)
            }
            Self::Text { .. } => Rect::ZERO,
        }
    }

    /// Outline as a kurbo path, for kinds with a vector outline.
    pub fn to_bez_path(&self) -> Option<BezPath> {
        let path = match self {
            Self::Circle { radius } => kurbo::Circle::new(Point::ORIGIN, *radius).to_path(TOLERANCE),
            Self::Rect { .. } => self.bounds().to_path(TOLERANCE),
            Self::Ellipse { rx, ry } => {
                kurbo::Ellipse::new(Point::ORIGIN, Vec2::new(*rx, *ry), 0.0).to_path(TOLERANCE)
            }
            Self::RoundRect { radius, .. } => {
                self.bounds().to_rounded_rect(*radius).to_path(TOLERANCE)
            }
            Self::Ring { outer, inner } => {
                let mut p = kurbo::Circle::new(Point::ORIGIN, *outer).to_path(TOLERANCE);
                p.extend(kurbo::Circle::new(Point::ORIGIN, *inner).path_elements(TOLERANCE));
                p
            }
            Self::Arc {
                radius,
                start_angle,
                end_angle,
            } => arc(*radius, *start_angle, *end_angle).to_path(TOLERANCE),
            Self::Pie {
                radius,
                start_angle,
                end_angle,
            } => {
                let a = arc(*radius, *start_angle, *end_angle);
                let mut p = BezPath::new();
                p.move_to(Point::ORIGIN);
                p.line_to(Point::ORIGIN + Vec2::from_angle(a.start_angle) * *radius);
                p.extend(a.append_iter(TOLERANCE));
                p.close_path();
                p
            }
            Self::Path { points, closed } => {
                let mut p = BezPath::new();
                let mut iter = points.iter();
                let first = iter.next()?;
                p.move_to(*first);
                for pt in iter {
                    p.line_to(*pt);
                }
                if *closed {
                    p.close_path();
                }
                p
            }
            Self::Bezier { commands } => {
                let mut p = BezPath::new();
                append_commands(&mut p, commands);
                p
            }
            Self::Compound { paths, .. } => {
                let mut p = BezPath::new();
                for sub in paths {
                    append_commands(&mut p, sub);
                }
                p
            }
            Self::Image { .. } | Self::Text { .. } | Self::Custom { .. } => return None,
        };
        Some(path)
    }
}

fn arc(radius: f64, start_deg: f64, end_deg: f64) -> kurbo::Arc {
    kurbo::Arc {
        center: Point::ORIGIN,
        radii: Vec2::new(radius, radius),
        start_angle: start_deg.to_radians(),
        sweep_angle: (end_deg - start_deg).to_radians(),
        x_rotation: 0.0,
    }
}

/// Axis-aligned bounds of a point list (`Rect::ZERO` when empty).
pub fn points_bounds(points: &[Point]) -> Rect {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return Rect::ZERO;
    };
    iter.fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p))
}

/// Where the shape's bounds attach to its transform origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Anchor {
    /// Bounds center.
    #[default]
    Center,
    /// Middle of the top edge.
    Top,
    /// Middle of the bottom edge.
    Bottom,
    /// Middle of the left edge.
    Left,
    /// Middle of the right edge.
    Right,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl Anchor {
    /// Point of `bounds` this anchor names.
    pub fn point(self, bounds: Rect) -> Point {
        let c = bounds.center();
        match self {
            Self::Center => c,
            Self::Top => Point::new(c.x, bounds.y0),
            Self::Bottom => Point::new(c.x, bounds.y1),
            Self::Left => Point::new(bounds.x0, c.y),
            Self::Right => Point::new(bounds.x1, c.y),
            Self::TopLeft => Point::new(bounds.x0, bounds.y0),
            Self::TopRight => Point::new(bounds.x1, bounds.y0),
            Self::BottomLeft => Point::new(bounds.x0, bounds.y1),
            Self::BottomRight => Point::new(bounds.x1, bounds.y1),
        }
    }

    /// Translation that moves the anchor point of `bounds` onto the origin.
    pub fn offset(self, bounds: Rect) -> Vec2 {
        -self.point(bounds).to_vec2()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shape/geom.rs"]
mod tests;
