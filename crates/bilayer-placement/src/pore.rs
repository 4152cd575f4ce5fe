//! Toroidal pore edge geometry.

use bilayer_geometry::sample::CurveSample;
use bilayer_math::{Point2, Vector2};

/// Sample positions along a toroidal pore edge.
///
/// Lipids curve from the outer leaflet through the pore to the inner
/// leaflet, a half-torus cross-section on each side of the pore. Unlike
/// leaflet placement, normals point toward the pore center. The left edge
/// gets `num_lipids / 2` samples, the right edge the remainder.
pub fn toroidal_pore_edge(
    center: Point2,
    pore_radius: f64,
    membrane_width: f64,
    num_lipids: usize,
) -> Vec<CurveSample> {
    let mut points = Vec::with_capacity(num_lipids);
    let half_w = membrane_width / 2.0;
    let half_count = num_lipids / 2;

    // Left edge: semicircle from the outer side down to the inner side
    let left_cx = center.x - pore_radius;
    for i in 0..half_count {
        let frac = (i as f64 + 0.5) / half_count as f64;
        let angle = -std::f64::consts::FRAC_PI_2 + frac * std::f64::consts::PI;
        let position = Point2::new(left_cx + half_w * angle.cos(), center.y + half_w * angle.sin());
        let normal = Vector2::new(angle.cos(), angle.sin());
        points.push(CurveSample {
            position,
            normal,
            angle: normal.y.atan2(normal.x),
        });
    }

    // Right edge: mirrored semicircle
    let right_cx = center.x + pore_radius;
    let right_count = num_lipids - half_count;
    for i in 0..right_count {
        let frac = (i as f64 + 0.5) / right_count as f64;
        let angle = std::f64::consts::FRAC_PI_2 - frac * std::f64::consts::PI;
        let position = Point2::new(
            right_cx - half_w * angle.cos(),
            center.y + half_w * angle.sin(),
        );
        let normal = Vector2::new(-angle.cos(), -angle.sin());
        points.push(CurveSample {
            position,
            normal,
            angle: normal.y.atan2(normal.x),
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use bilayer_math::dvec2;

    #[test]
    fn test_even_split() {
        let samples = toroidal_pore_edge(dvec2(0.0, 0.0), 30.0, 60.0, 8);
        assert_eq!(samples.len(), 8);
        let left = samples.iter().filter(|s| s.position.x < 0.0).count();
        let right = samples.iter().filter(|s| s.position.x > 0.0).count();
        assert_eq!(left, 4);
        assert_eq!(right, 4);
    }

    #[test]
    fn test_odd_split_remainder_right() {
        let samples = toroidal_pore_edge(dvec2(0.0, 0.0), 30.0, 60.0, 7);
        assert_eq!(samples.len(), 7);
        let left = samples.iter().filter(|s| s.position.x < 0.0).count();
        let right = samples.iter().filter(|s| s.position.x > 0.0).count();
        assert_eq!(left, 3);
        assert_eq!(right, 4);
    }

    #[test]
    fn test_normals_face_the_pore_channel() {
        // Unlike leaflet normals, pore-edge normals lean toward the pore's
        // center axis: positive x-component on the left edge, negative on
        // the right
        let center = dvec2(100.0, 50.0);
        for s in toroidal_pore_edge(center, 30.0, 60.0, 8) {
            assert!((s.normal.length() - 1.0).abs() < 1e-12);
            if s.position.x < center.x {
                assert!(s.normal.x > 0.0, "left-edge normal leans away");
            } else {
                assert!(s.normal.x < 0.0, "right-edge normal leans away");
            }
        }
    }

    #[test]
    fn test_samples_on_torus_ring() {
        // Every sample sits half a membrane width from its edge center
        let center = dvec2(0.0, 0.0);
        let samples = toroidal_pore_edge(center, 30.0, 60.0, 10);
        for s in &samples {
            let edge_cx = if s.position.x < 0.0 { -30.0 } else { 30.0 };
            let d = (s.position - dvec2(edge_cx, 0.0)).length();
            assert!((d - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_spans_outer_to_inner() {
        let samples = toroidal_pore_edge(dvec2(0.0, 0.0), 30.0, 60.0, 8);
        let min_y = samples.iter().map(|s| s.position.y).fold(f64::MAX, f64::min);
        let max_y = samples.iter().map(|s| s.position.y).fold(f64::MIN, f64::max);
        assert!(min_y < -20.0);
        assert!(max_y > 20.0);
    }

    #[test]
    fn test_no_lipids() {
        assert!(toroidal_pore_edge(dvec2(0.0, 0.0), 30.0, 60.0, 0).is_empty());
    }
}
