//! Circle curve (closed vesicle outline).

use std::f64::consts::PI;

use bilayer_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A full circle traversed counter-clockwise, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        let angle = 2.0 * PI * t;
        self.center + self.radius * Vector2::new(angle.cos(), angle.sin())
    }

    pub fn tangent_at(&self, t: f64) -> Vector2 {
        let angle = 2.0 * PI * t;
        Vector2::new(-angle.sin(), angle.cos())
    }

    /// Radially outward unit normal.
    pub fn normal_at(&self, t: f64) -> Vector2 {
        let angle = 2.0 * PI * t;
        Vector2::new(angle.cos(), angle.sin())
    }

    pub fn arc_length(&self) -> f64 {
        2.0 * PI * self.radius
    }
}
