//! Crenulated membrane fold profile (mitochondrial inner membrane).

use std::f64::consts::{FRAC_PI_2, PI};

use bilayer_math::dvec2;

use crate::curve::{Arc, Composite, Curve, Line};

/// Parameters of a repeated membrane fold profile along a horizontal base
/// line. Coordinates follow the layout convention: y grows downward, folds
/// descend below `base_y`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CristaeProfile {
    pub base_y: f64,
    pub start_x: f64,
    pub fold_width: f64,
    pub fold_depth: f64,
    pub fold_count: u32,
    pub fold_spacing: f64,
    pub flat_extension: f64,
}

impl CristaeProfile {
    /// Build the composite profile curve.
    ///
    /// Layout per fold:
    /// flat -- corner arc (flat to down) -- descent -- U-bend -- ascent --
    /// corner arc (up to flat) -- flat.
    ///
    /// The whole chain is built as if cut from the outside and then inverted:
    /// normals are flipped so the outer leaflet faces the fold cavity. The
    /// corner radius is clamped to stay consistent on narrow/shallow folds.
    pub fn build(&self) -> Curve {
        let mut curves: Vec<Curve> = Vec::new();
        let mut x = self.start_x;
        let base_y = self.base_y;
        let bend_radius = self.fold_width / 2.0;
        let corner_r = 40.0_f64
            .min(self.fold_width * 0.35)
            .min(self.fold_depth * 0.15);

        // Leading flat run, shortened so it meets the first corner arc
        if self.flat_extension > 0.0 {
            let lead_end = x + self.flat_extension - corner_r;
            if lead_end > x {
                curves.push(Curve::Line(Line::new(
                    dvec2(x, base_y),
                    dvec2(lead_end, base_y),
                )));
            }
            x += self.flat_extension;
        }

        for i in 0..self.fold_count {
            let left_x = x;
            let right_x = x + self.fold_width;

            // Corner: tangent swings from rightward to downward
            curves.push(Curve::Arc(Arc::new(
                dvec2(left_x - corner_r, base_y + corner_r),
                corner_r,
                -FRAC_PI_2,
                0.0,
            )));

            // Descent along the left wall
            curves.push(Curve::Line(Line::new(
                dvec2(left_x, base_y + corner_r),
                dvec2(left_x, base_y + self.fold_depth),
            )));

            // U-bend at depth, left wall to right wall
            let center_x = (left_x + right_x) / 2.0;
            curves.push(Curve::Arc(Arc::new(
                dvec2(center_x, base_y + self.fold_depth),
                bend_radius,
                PI,
                0.0,
            )));

            // Ascent along the right wall
            curves.push(Curve::Line(Line::new(
                dvec2(right_x, base_y + self.fold_depth),
                dvec2(right_x, base_y + corner_r),
            )));

            // Corner: tangent swings from upward back to rightward
            curves.push(Curve::Arc(Arc::new(
                dvec2(right_x + corner_r, base_y + corner_r),
                corner_r,
                PI,
                3.0 * FRAC_PI_2,
            )));

            x = right_x;

            // Inter-fold gap, shortened by the corner radii on both sides
            if i < self.fold_count - 1 {
                let gap_start = x + corner_r;
                let gap_end = x + self.fold_spacing - corner_r;
                if gap_end > gap_start {
                    curves.push(Curve::Line(Line::new(
                        dvec2(gap_start, base_y),
                        dvec2(gap_end, base_y),
                    )));
                }
                x += self.fold_spacing;
            }
        }

        // Trailing flat run
        if self.flat_extension > 0.0 {
            let trail_start = x + corner_r;
            curves.push(Curve::Line(Line::new(
                dvec2(trail_start, base_y),
                dvec2(trail_start + self.flat_extension, base_y),
            )));
        }

        Curve::Composite(Composite::new(curves, true))
    }
}
