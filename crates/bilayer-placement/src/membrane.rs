//! Membrane shape configuration and centerline construction.

use bilayer_geometry::cristae::CristaeProfile;
use bilayer_geometry::curve::{Circle, Composite, Curve, Ellipse, Line};
use bilayer_geometry::spline::{build_spline, KnotHandles};
use bilayer_math::{dvec2, Point2};
use serde::{Deserialize, Serialize};

/// Flat run added on both sides of the cristae fold region.
const CRISTAE_FLAT_EXTENSION: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembraneShape {
    Linear,
    Circular,
    Elliptical,
    Cristae,
    Bezier,
}

/// Geometric membrane configuration, in layout units.
///
/// Deserializes from partial JSON; missing fields keep these defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MembraneConfig {
    pub shape: MembraneShape,
    /// Linear shape
    pub length: f64,
    /// Cross-membrane thickness
    pub width: f64,
    /// Circular shape
    pub radius: f64,
    /// Elliptical shape
    pub ellipse_rx: f64,
    pub ellipse_ry: f64,
    /// Cristae shape
    pub cristae_width: f64,
    pub cristae_depth: f64,
    pub cristae_count: u32,
    pub cristae_spacing: f64,
    /// Lipid sizing
    pub lipid_base_size: f64,
    pub lipid_spacing: f64,
    pub leaflet_gap: f64,
    /// Spline shape: knots and optional per-knot handle overrides
    pub bezier_points: Vec<Point2>,
    pub bezier_handles: Vec<KnotHandles>,
}

impl Default for MembraneConfig {
    fn default() -> Self {
        Self {
            shape: MembraneShape::Linear,
            length: 800.0,
            width: 60.0,
            radius: 200.0,
            ellipse_rx: 250.0,
            ellipse_ry: 150.0,
            cristae_width: 80.0,
            cristae_depth: 200.0,
            cristae_count: 1,
            cristae_spacing: 120.0,
            lipid_base_size: 10.0,
            lipid_spacing: 0.5,
            leaflet_gap: 0.0,
            bezier_points: vec![
                dvec2(200.0, 300.0),
                dvec2(450.0, 250.0),
                dvec2(750.0, 350.0),
                dvec2(1000.0, 300.0),
            ],
            bezier_handles: Vec::new(),
        }
    }
}

/// Build the centerline curve for the configured shape, centered on a canvas
/// of the given size.
pub fn build_curve(config: &MembraneConfig, canvas_width: f64, canvas_height: f64) -> Curve {
    let cx = canvas_width / 2.0;
    let cy = canvas_height / 2.0;

    match config.shape {
        MembraneShape::Linear => linear_curve(config, canvas_width, cy),

        MembraneShape::Circular => Curve::Circle(Circle::new(dvec2(cx, cy), config.radius)),

        MembraneShape::Elliptical => Curve::Ellipse(Ellipse::new(
            dvec2(cx, cy),
            config.ellipse_rx,
            config.ellipse_ry,
        )),

        MembraneShape::Bezier => {
            let handles = if config.bezier_handles.is_empty() {
                None
            } else {
                Some(config.bezier_handles.as_slice())
            };
            match build_spline(&config.bezier_points, handles) {
                Ok(curve) => curve,
                Err(err) => {
                    log::warn!("spline config rejected ({err}), falling back to linear shape");
                    linear_curve(config, canvas_width, cy)
                }
            }
        }

        MembraneShape::Cristae => {
            let count = config.cristae_count;
            let total_w = config.cristae_width * f64::from(count)
                + config.cristae_spacing * f64::from(count.saturating_sub(1))
                + 2.0 * CRISTAE_FLAT_EXTENSION;
            CristaeProfile {
                base_y: cy - config.cristae_depth / 3.0,
                start_x: (canvas_width - total_w) / 2.0,
                fold_width: config.cristae_width,
                fold_depth: config.cristae_depth,
                fold_count: count,
                fold_spacing: config.cristae_spacing,
                flat_extension: CRISTAE_FLAT_EXTENSION,
            }
            .build()
        }
    }
}

/// Centered horizontal segment with the outer leaflet facing up: the raw
/// left-to-right segment has a downward default normal, so the composite
/// wrapper flips it.
fn linear_curve(config: &MembraneConfig, canvas_width: f64, cy: f64) -> Curve {
    let x0 = (canvas_width - config.length) / 2.0;
    let segment = Curve::Line(Line::new(dvec2(x0, cy), dvec2(x0 + config.length, cy)));
    Curve::Composite(Composite::new(vec![segment], true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        let config: MembraneConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.shape, MembraneShape::Linear);
        assert_eq!(config.length, 800.0);
        assert_eq!(config.lipid_base_size, 10.0);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config: MembraneConfig =
            serde_json::from_str(r#"{"shape": "circular", "radius": 300.0}"#).unwrap();
        assert_eq!(config.shape, MembraneShape::Circular);
        assert_eq!(config.radius, 300.0);
        assert_eq!(config.width, 60.0);
    }

    #[test]
    fn test_linear_curve_centered_outer_up() {
        let config = MembraneConfig::default();
        let curve = build_curve(&config, 1200.0, 600.0);
        assert!((curve.arc_length() - 800.0).abs() < 1e-10);

        let start = curve.point_at(0.0);
        assert!((start - dvec2(200.0, 300.0)).length() < 1e-10);

        let n = curve.normal_at(0.5);
        assert!((n - dvec2(0.0, -1.0)).length() < 1e-10);
    }

    #[test]
    fn test_circular_curve() {
        let config = MembraneConfig {
            shape: MembraneShape::Circular,
            ..Default::default()
        };
        let curve = build_curve(&config, 1200.0, 600.0);
        assert!(curve.is_closed());
        assert!((curve.arc_length() - 2.0 * std::f64::consts::PI * 200.0).abs() < 1e-9);
        assert!((curve.point_at(0.0) - dvec2(800.0, 300.0)).length() < 1e-10);
    }

    #[test]
    fn test_bezier_curve_through_default_knots() {
        let config = MembraneConfig {
            shape: MembraneShape::Bezier,
            ..Default::default()
        };
        let curve = build_curve(&config, 1200.0, 600.0);
        let Curve::Composite(composite) = &curve else {
            panic!("expected composite spline");
        };
        assert_eq!(composite.curves().len(), 3);
        assert!((curve.point_at(0.0) - dvec2(200.0, 300.0)).length() < 1e-10);
        assert!((curve.point_at(1.0) - dvec2(1000.0, 300.0)).length() < 1e-10);
    }

    #[test]
    fn test_bezier_too_few_knots_falls_back_to_linear() {
        let config = MembraneConfig {
            shape: MembraneShape::Bezier,
            bezier_points: vec![dvec2(100.0, 100.0)],
            ..Default::default()
        };
        let curve = build_curve(&config, 1200.0, 600.0);
        assert!(!curve.is_closed());
        assert!((curve.arc_length() - 800.0).abs() < 1e-10);
    }

    #[test]
    fn test_cristae_curve_base_line() {
        let config = MembraneConfig {
            shape: MembraneShape::Cristae,
            ..Default::default()
        };
        let curve = build_curve(&config, 1200.0, 600.0);
        // base_y = cy - depth / 3
        let expected_y = 300.0 - 200.0 / 3.0;
        assert!((curve.point_at(0.0).y - expected_y).abs() < 1e-9);
        assert!(curve.arc_length() > 2.0 * CRISTAE_FLAT_EXTENSION);
    }
}
