//! Single cubic Bézier segment.

use std::sync::OnceLock;

use bilayer_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Steps of the polyline approximation used for the arc length; the cubic has
/// no closed-form inverse.
const ARC_LENGTH_STEPS: usize = 200;

/// A cubic Bézier segment over control points `p0..p3`, parameterized over
/// `[0, 1]`.
///
/// The arc length is memoized on first access. The cache is idempotent: the
/// value is a pure function of the immutable control points, so concurrent
/// initialization races resolve to the same result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
    #[serde(skip)]
    arc_len: OnceLock<f64>,
}

impl CubicBezier {
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self {
            p0,
            p1,
            p2,
            p3,
            arc_len: OnceLock::new(),
        }
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let u2 = u * u;
        let t2 = t * t;
        let a = u2 * u;
        let b = 3.0 * u2 * t;
        let c = 3.0 * u * t2;
        let d = t2 * t;
        a * self.p0 + b * self.p1 + c * self.p2 + d * self.p3
    }

    /// Derivative: `3[(1-t)^2 (p1-p0) + 2(1-t)t (p2-p1) + t^2 (p3-p2)]`.
    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let u = 1.0 - t;
        let a = 3.0 * u * u;
        let b = 6.0 * u * t;
        let c = 3.0 * t * t;
        a * (self.p1 - self.p0) + b * (self.p2 - self.p1) + c * (self.p3 - self.p2)
    }

    pub fn arc_length(&self) -> f64 {
        *self.arc_len.get_or_init(|| {
            let mut total = 0.0;
            let mut prev = self.p0;
            for i in 1..=ARC_LENGTH_STEPS {
                let t = i as f64 / ARC_LENGTH_STEPS as f64;
                let p = self.point_at(t);
                total += (p - prev).length();
                prev = p;
            }
            total
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilayer_math::dvec2;

    #[test]
    fn test_bezier_interpolates_endpoints() {
        let b = CubicBezier::new(
            dvec2(0.0, 0.0),
            dvec2(10.0, 20.0),
            dvec2(30.0, 20.0),
            dvec2(40.0, 0.0),
        );
        assert!((b.point_at(0.0) - b.p0).length() < 1e-10);
        assert!((b.point_at(1.0) - b.p3).length() < 1e-10);
    }

    #[test]
    fn test_bezier_tangent_at_endpoints() {
        let b = CubicBezier::new(
            dvec2(0.0, 0.0),
            dvec2(10.0, 20.0),
            dvec2(30.0, 20.0),
            dvec2(40.0, 0.0),
        );
        // Tangent at t=0 is 3(p1 - p0), at t=1 is 3(p3 - p2)
        assert!((b.tangent_at(0.0) - 3.0 * (b.p1 - b.p0)).length() < 1e-10);
        assert!((b.tangent_at(1.0) - 3.0 * (b.p3 - b.p2)).length() < 1e-10);
    }

    #[test]
    fn test_degenerate_bezier_is_straight() {
        // Control points on the chord: arc length equals the chord length
        let b = CubicBezier::new(
            dvec2(0.0, 0.0),
            dvec2(10.0, 0.0),
            dvec2(20.0, 0.0),
            dvec2(30.0, 0.0),
        );
        assert!((b.arc_length() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_arc_length_memoized() {
        let b = CubicBezier::new(
            dvec2(0.0, 0.0),
            dvec2(0.0, 10.0),
            dvec2(10.0, 10.0),
            dvec2(10.0, 0.0),
        );
        let first = b.arc_length();
        let second = b.arc_length();
        assert_eq!(first, second);
        assert!(first > 10.0); // longer than the chord
    }

    #[test]
    fn test_curved_bezier_longer_than_chord() {
        let b = CubicBezier::new(
            dvec2(0.0, 0.0),
            dvec2(25.0, 50.0),
            dvec2(75.0, 50.0),
            dvec2(100.0, 0.0),
        );
        let chord = (b.p3 - b.p0).length();
        assert!(b.arc_length() > chord);
    }
}
