//! Partial circular arc curve.

use bilayer_math::{lerp, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A circular arc from `start_angle` to `end_angle` (radians), parameterized
/// over `[0, 1]`. Angles may run in either direction; the tangent follows the
/// direction of traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = lerp(self.start_angle, self.end_angle, t);
        self.center + self.radius * Vector2::new(angle.cos(), angle.sin())
    }

    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let angle = lerp(self.start_angle, self.end_angle, t);
        let direction = if self.end_angle > self.start_angle {
            1.0
        } else {
            -1.0
        };
        Vector2::new(-angle.sin() * direction, angle.cos() * direction)
    }

    pub fn arc_length(&self) -> f64 {
        (self.end_angle - self.start_angle).abs() * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilayer_math::dvec2;
    use std::f64::consts::PI;

    #[test]
    fn test_arc_endpoints() {
        let arc = Arc::new(dvec2(0.0, 0.0), 2.0, 0.0, PI / 2.0);
        assert!((arc.point_at(0.0) - dvec2(2.0, 0.0)).length() < 1e-10);
        assert!((arc.point_at(1.0) - dvec2(0.0, 2.0)).length() < 1e-10);
    }

    #[test]
    fn test_arc_length_quarter() {
        let arc = Arc::new(dvec2(0.0, 0.0), 2.0, 0.0, PI / 2.0);
        assert!((arc.arc_length() - PI).abs() < 1e-10);
    }

    #[test]
    fn test_arc_reversed_traversal() {
        // A U-bend runs from PI down to 0; length is positive and the tangent
        // flips sign relative to the forward arc.
        let fwd = Arc::new(dvec2(0.0, 0.0), 1.0, 0.0, PI);
        let rev = Arc::new(dvec2(0.0, 0.0), 1.0, PI, 0.0);
        assert!((rev.arc_length() - PI).abs() < 1e-10);

        let tf = fwd.tangent_at(0.5);
        let tr = rev.tangent_at(0.5);
        assert!((tf + tr).length() < 1e-10);
    }

    #[test]
    fn test_arc_tangent_unit_length() {
        let arc = Arc::new(dvec2(1.0, 1.0), 40.0, -PI / 2.0, 0.0);
        for i in 0..=4 {
            let t = i as f64 / 4.0;
            assert!((arc.tangent_at(t).length() - 1.0).abs() < 1e-10);
        }
    }
}
