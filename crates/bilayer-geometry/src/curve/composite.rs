//! Composite curve: sub-curves chained end to end.

use bilayer_core::GEOM_EPS;
use bilayer_math::{Point2, Vector2};

use super::{Curve, FALLBACK_NORMAL};

/// An ordered chain of sub-curves joined end to end.
///
/// Each sub-curve owns a slice of the global `[0, 1]` parameter range
/// proportional to its arc length. With `flip_normals` set, every child
/// normal is negated, turning the chain inside out without rebuilding it.
#[derive(Debug, Clone)]
pub struct Composite {
    curves: Vec<Curve>,
    flip_normals: bool,
    total: f64,
    /// Cumulative length fractions; the last entry is 1.0 for any chain with
    /// positive total length.
    boundaries: Vec<f64>,
}

impl Composite {
    pub fn new(curves: Vec<Curve>, flip_normals: bool) -> Self {
        let lengths: Vec<f64> = curves.iter().map(Curve::arc_length).collect();
        let total: f64 = lengths.iter().sum();
        let mut boundaries = Vec::with_capacity(lengths.len());
        let mut cum = 0.0;
        for length in &lengths {
            cum += length;
            boundaries.push(if total > 0.0 { cum / total } else { 0.0 });
        }
        Self {
            curves,
            flip_normals,
            total,
            boundaries,
        }
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Map a global parameter to `(sub-curve, local parameter)`.
    ///
    /// Scans boundaries in order and picks the first one >= `t`; the last
    /// sub-curve absorbs any floating-point overshoot. A boundary span below
    /// `GEOM_EPS` maps to local t = 0. Returns `None` only for an empty chain.
    pub fn resolve(&self, t: f64) -> Option<(&Curve, f64)> {
        if self.curves.is_empty() {
            return None;
        }
        let t = t.clamp(0.0, 1.0);
        let mut prev = 0.0;
        for (i, &boundary) in self.boundaries.iter().enumerate() {
            if t <= boundary || i == self.boundaries.len() - 1 {
                let span = boundary - prev;
                let local = if span < GEOM_EPS { 0.0 } else { (t - prev) / span };
                return Some((&self.curves[i], local));
            }
            prev = boundary;
        }
        self.curves.last().map(|c| (c, 1.0))
    }

    pub fn point_at(&self, t: f64) -> Point2 {
        match self.resolve(t) {
            Some((curve, local)) => curve.point_at(local),
            None => Point2::ZERO,
        }
    }

    pub fn tangent_at(&self, t: f64) -> Vector2 {
        match self.resolve(t) {
            Some((curve, local)) => curve.tangent_at(local),
            None => Vector2::ZERO,
        }
    }

    pub fn normal_at(&self, t: f64) -> Vector2 {
        let normal = match self.resolve(t) {
            Some((curve, local)) => curve.normal_at(local),
            None => FALLBACK_NORMAL,
        };
        if self.flip_normals {
            -normal
        } else {
            normal
        }
    }

    pub fn arc_length(&self) -> f64 {
        self.total
    }
}
