//! Line segment curve.

use bilayer_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A straight segment from `start` to `end`, parameterized over `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub start: Point2,
    pub end: Point2,
}

impl Line {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        self.start + t * (self.end - self.start)
    }

    pub fn tangent_at(&self, _t: f64) -> Vector2 {
        self.end - self.start
    }

    pub fn arc_length(&self) -> f64 {
        (self.end - self.start).length()
    }
}
