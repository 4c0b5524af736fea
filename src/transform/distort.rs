//! Bilinear bounding-box corner distortion.

use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::{Point, Vec2},
    shape::geom::{Geom, points_bounds},
};

/// Displacement applied at each bounding-box corner; unspecified corners stay put.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corners {
    /// Top-left displacement.
    pub tl: Vec2,
    /// Top-right displacement.
    pub tr: Vec2,
    /// Bottom-right displacement.
    pub br: Vec2,
    /// Bottom-left displacement.
    pub bl: Vec2,
}

impl Corners {
    /// Return `true` when every displacement is zero.
    pub fn is_identity(&self) -> bool {
        [self.tl, self.tr, self.br, self.bl]
            .iter()
            .all(|v| *v == Vec2::ZERO)
    }

    /// Bilinear blend of the four displacements at normalized `(u, v)`.
    pub fn displacement_at(&self, u: f64, v: f64) -> Vec2 {
        self.tl * ((1.0 - u) * (1.0 - v))
            + self.tr * (u * (1.0 - v))
            + self.br * (u * v)
            + self.bl * ((1.0 - u) * v)
    }
}

/// Displace each point by the bilinear blend of the corner vectors of the points' own
/// bounding box. A degenerate axis normalizes to `0`.
pub fn distort_points(points: &[Point], corners: &Corners) -> Vec<Point> {
    let bounds = points_bounds(points);
    let (w, h) = (bounds.width(), bounds.height());

    points
        .iter()
        .map(|p| {
            let u = if w == 0.0 { 0.0 } else { (p.x - bounds.x0) / w };
            let v = if h == 0.0 { 0.0 } else { (p.y - bounds.y0) / h };
            *p + corners.displacement_at(u, v)
        })
        .collect()
}

/// Distort a geometry, re-tagging the result as a path.
///
/// Returns `None` for kinds without an explicit point list. Rectangles become closed
/// paths; paths keep their closedness.
pub fn distort(geom: &Geom, corners: &Corners) -> Option<Geom> {
    let points = geom.points()?;
    let closed = match geom {
        Geom::Path { closed, .. } => *closed,
        _ => true,
    };
    Some(Geom::Path {
        points: distort_points(&points, corners),
        closed,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/transform/distort.rs"]
mod tests;
