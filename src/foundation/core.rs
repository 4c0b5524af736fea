pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Scene canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Resolved 2D transform of a shape snapshot.
///
/// `scale` is a uniform factor multiplied into the per-axis `scale_x`/`scale_y`.
/// Angles are in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transform {
    /// Translation along x.
    pub x: f64,
    /// Translation along y.
    pub y: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Rotation in degrees, clockwise in y-down space.
    pub rotation: f64,
    /// Horizontal skew in degrees.
    pub skew_x: f64,
    /// Vertical skew in degrees.
    pub skew_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl Transform {
    /// Transform translated to `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Effective per-axis scale (`scale * scale_x`, `scale * scale_y`).
    pub fn effective_scale(&self) -> Vec2 {
        Vec2::new(self.scale * self.scale_x, self.scale * self.scale_y)
    }

    /// Convert to an affine matrix.
    pub fn to_affine(self) -> Affine {
        let scale = self.effective_scale();
        let t_translate = Affine::translate((self.x, self.y));
        let t_rotate = Affine::rotate(self.rotation.to_radians());
        let t_skew = Affine::skew(
            self.skew_x.to_radians().tan(),
            self.skew_y.to_radians().tan(),
        );
        let t_scale = Affine::scale_non_uniform(scale.x, scale.y);

        // T(translate) * R(rot) * K(skew) * S(scale)
        t_translate * t_rotate * t_skew * t_scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
