//! Sampling utilities for converting curves into ordered point sequences.

use bilayer_core::GEOM_EPS;
use bilayer_math::{lerp, Aabb2, Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::curve::Curve;

/// A point on a curve: position, unit outward normal, and the normal's angle
/// in radians.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurveSample {
    pub position: Point2,
    pub normal: Vector2,
    pub angle: f64,
}

/// Evaluate position and outward normal at parameter `t`.
pub fn sample_at(curve: &Curve, t: f64) -> CurveSample {
    let position = curve.point_at(t);
    let normal = curve.normal_at(t);
    CurveSample {
        position,
        normal,
        angle: normal.y.atan2(normal.x),
    }
}

/// Resolution of the bounding-box sampling pass.
const BOUNDS_STEPS: usize = 256;

/// Axis-aligned bounds of the curve, from a fixed-resolution sampling.
///
/// `None` for an empty composite with nothing to evaluate.
pub fn curve_bounds(curve: &Curve) -> Option<Aabb2> {
    if let Curve::Composite(c) = curve {
        if c.curves().is_empty() {
            return None;
        }
    }
    let points: Vec<Point2> = (0..=BOUNDS_STEPS)
        .map(|i| curve.point_at(i as f64 / BOUNDS_STEPS as f64))
        .collect();
    Aabb2::from_points(&points)
}

/// Sample the curve at uniform arc-length intervals.
///
/// Arc length is approximated by marching a dense parameter table and summing
/// chord lengths; curve variants have no general closed-form inverse. Targets
/// are cell-centered (`(i + 0.5) * spacing`) so the sequence stays symmetric
/// and does not cluster at the endpoints. A curve of negligible measured
/// length yields a single midpoint sample. Non-positive spacing clamps the
/// slot count to 1 instead of diverging.
pub fn sample_uniform(curve: &Curve, spacing: f64) -> Vec<CurveSample> {
    let total = curve.arc_length();
    let n = if spacing > 0.0 {
        ((total / spacing) as usize).max(1)
    } else {
        1
    };

    // Cumulative arc-length table over equal parameter steps
    let num_steps = (n * 10).max(500);
    let mut table: Vec<(f64, f64)> = Vec::with_capacity(num_steps + 1);
    let mut cum = 0.0;
    let mut prev = curve.point_at(0.0);
    table.push((0.0, 0.0));
    for i in 1..=num_steps {
        let t = i as f64 / num_steps as f64;
        let p = curve.point_at(t);
        cum += (p - prev).length();
        table.push((t, cum));
        prev = p;
    }

    let total_measured = table[num_steps].1;
    if total_measured < GEOM_EPS {
        return vec![sample_at(curve, 0.5)];
    }

    let actual_spacing = total_measured / n as f64;
    let mut points = Vec::with_capacity(n);
    // Forward-only cursor: targets are increasing, so the scan over the whole
    // loop is O(table + n)
    let mut table_idx = 0;

    for i in 0..n {
        let target_s = (i as f64 + 0.5) * actual_spacing;
        while table_idx < table.len() - 1 && table[table_idx + 1].1 < target_s {
            table_idx += 1;
        }

        let t = if table_idx >= table.len() - 1 {
            1.0
        } else {
            let (t0, s0) = table[table_idx];
            let (t1, s1) = table[table_idx + 1];
            let ds = s1 - s0;
            if ds < GEOM_EPS {
                t0
            } else {
                lerp(t0, t1, (target_s - s0) / ds)
            }
        };

        points.push(sample_at(curve, t));
    }

    points
}
