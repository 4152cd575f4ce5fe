//! Smooth spline construction through user control points.

use bilayer_core::{BilayerError, Result};
use bilayer_math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::curve::{Composite, CubicBezier, Curve, Line};

/// Optional explicit tangent handles for one spline knot, as offsets from the
/// knot position. `None` keeps the auto-computed Catmull-Rom control point.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnotHandles {
    pub handle_in: Option<Vector2>,
    pub handle_out: Option<Vector2>,
}

/// Build a smooth spline through `knots` via Catmull-Rom → cubic Bézier
/// conversion.
///
/// Endpoint knots get synthetic neighbors by mirror-reflecting the adjacent
/// knot, so the boundary tangents are always defined. For segment i → i+1,
/// `handles[i].handle_out` overrides the outgoing control point and
/// `handles[i+1].handle_in` the incoming one.
///
/// Two knots degenerate to a straight segment. Fewer than two is an error.
pub fn build_spline(knots: &[Point2], handles: Option<&[KnotHandles]>) -> Result<Curve> {
    let n = knots.len();
    if n < 2 {
        return Err(BilayerError::Geometry(format!(
            "spline needs at least 2 knots, got {n}"
        )));
    }
    if n == 2 {
        let segment = Curve::Line(Line::new(knots[0], knots[1]));
        return Ok(Curve::Composite(Composite::new(vec![segment], false)));
    }

    let mut segments = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let p_i = knots[i];
        let p_ip1 = knots[i + 1];

        // Mirror-reflected neighbors at the endpoints
        let p_im1 = if i == 0 {
            2.0 * p_i - p_ip1
        } else {
            knots[i - 1]
        };
        let p_ip2 = if i + 2 >= n {
            2.0 * p_ip1 - p_i
        } else {
            knots[i + 2]
        };

        // Catmull-Rom → Bézier control points (tau = 1)
        let mut cp1 = p_i + (p_ip1 - p_im1) / 6.0;
        let mut cp2 = p_ip1 - (p_ip2 - p_i) / 6.0;

        if let Some(handles) = handles {
            if let Some(out) = handles.get(i).and_then(|h| h.handle_out) {
                cp1 = p_i + out;
            }
            if let Some(incoming) = handles.get(i + 1).and_then(|h| h.handle_in) {
                cp2 = p_ip1 + incoming;
            }
        }

        segments.push(Curve::Bezier(CubicBezier::new(p_i, cp1, cp2, p_ip1)));
    }

    Ok(Curve::Composite(Composite::new(segments, false)))
}
