//! Ellipse curve (closed vesicle outline).

use std::f64::consts::PI;

use bilayer_core::GEOM_EPS;
use bilayer_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use super::FALLBACK_NORMAL;

/// An axis-aligned ellipse traversed counter-clockwise, parameterized over
/// `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point2,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(center: Point2, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = 2.0 * PI * t;
        self.center + Vector2::new(self.rx * angle.cos(), self.ry * angle.sin())
    }

    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let angle = 2.0 * PI * t;
        Vector2::new(-self.rx * angle.sin(), self.ry * angle.cos())
    }

    /// Outward unit normal (perpendicular to the tangent, away from center).
    pub fn normal_at(&self, t: f64) -> Vector2 {
        let tangent = self.tangent_at(t);
        let outward = Vector2::new(tangent.y, -tangent.x);
        let len = outward.length();
        if len < GEOM_EPS {
            return FALLBACK_NORMAL;
        }
        outward / len
    }

    /// Ramanujan approximation of the circumference.
    pub fn arc_length(&self) -> f64 {
        let h = ((self.rx - self.ry) / (self.rx + self.ry)).powi(2);
        PI * (self.rx + self.ry) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }
}
