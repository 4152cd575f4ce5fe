//! Curve variants for membrane centerlines.

mod arc;
mod bezier;
mod circle;
mod composite;
mod ellipse;
mod line;

use bilayer_core::GEOM_EPS;
use bilayer_math::{Point2, Vector2};

pub use arc::Arc;
pub use bezier::CubicBezier;
pub use circle::Circle;
pub use composite::Composite;
pub use ellipse::Ellipse;
pub use line::Line;

/// Normal reported for a degenerate (zero-length) tangent.
pub const FALLBACK_NORMAL: Vector2 = Vector2::new(0.0, -1.0);

/// A parametric membrane centerline, parameterized over `t` in `[0, 1]`.
///
/// Closed set of variants; callers clamp `t`, the variants do not validate it.
#[derive(Debug, Clone)]
pub enum Curve {
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
    Arc(Arc),
    Bezier(CubicBezier),
    Composite(Composite),
}

impl Curve {
    /// Evaluate the curve position at parameter `t`.
    pub fn point_at(&self, t: f64) -> Point2 {
        match self {
            Curve::Line(c) => c.point_at(t),
            Curve::Circle(c) => c.point_at(t),
            Curve::Ellipse(c) => c.point_at(t),
            Curve::Arc(c) => c.point_at(t),
            Curve::Bezier(c) => c.point_at(t),
            Curve::Composite(c) => c.point_at(t),
        }
    }

    /// Evaluate the tangent vector at `t` (not necessarily normalized).
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        match self {
            Curve::Line(c) => c.tangent_at(t),
            Curve::Circle(c) => c.tangent_at(t),
            Curve::Ellipse(c) => c.tangent_at(t),
            Curve::Arc(c) => c.tangent_at(t),
            Curve::Bezier(c) => c.tangent_at(t),
            Curve::Composite(c) => c.tangent_at(t),
        }
    }

    /// Unit normal perpendicular to the tangent, pointing outward.
    ///
    /// Circle and ellipse override the perpendicular default with outward
    /// radial normals; a composite may globally flip its children's normals.
    pub fn normal_at(&self, t: f64) -> Vector2 {
        match self {
            Curve::Circle(c) => c.normal_at(t),
            Curve::Ellipse(c) => c.normal_at(t),
            Curve::Composite(c) => c.normal_at(t),
            _ => default_normal(self.tangent_at(t)),
        }
    }

    /// Total arc length.
    pub fn arc_length(&self) -> f64 {
        match self {
            Curve::Line(c) => c.arc_length(),
            Curve::Circle(c) => c.arc_length(),
            Curve::Ellipse(c) => c.arc_length(),
            Curve::Arc(c) => c.arc_length(),
            Curve::Bezier(c) => c.arc_length(),
            Curve::Composite(c) => c.arc_length(),
        }
    }

    /// Whether the curve is topologically closed (start == end).
    pub fn is_closed(&self) -> bool {
        matches!(self, Curve::Circle(_) | Curve::Ellipse(_))
    }
}

/// Unit normal derived from a tangent by the fixed perpendicular convention.
///
/// Falls back to [`FALLBACK_NORMAL`] when the tangent is degenerate.
pub fn default_normal(tangent: Vector2) -> Vector2 {
    let len = tangent.length();
    if len < GEOM_EPS {
        return FALLBACK_NORMAL;
    }
    Vector2::new(-tangent.y, tangent.x) / len
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilayer_math::dvec2;

    #[test]
    fn test_default_normal_perpendicular() {
        let n = default_normal(dvec2(1.0, 0.0));
        assert!((n - dvec2(0.0, 1.0)).length() < 1e-10);

        let n = default_normal(dvec2(0.0, 3.0));
        assert!((n - dvec2(-1.0, 0.0)).length() < 1e-10);
    }

    #[test]
    fn test_default_normal_unit_length() {
        let n = default_normal(dvec2(3.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_default_normal_degenerate_tangent() {
        let n = default_normal(dvec2(0.0, 0.0));
        assert_eq!(n, FALLBACK_NORMAL);
    }
}
