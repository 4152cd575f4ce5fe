//! Lipid placement engine: distributes lipids along a centerline curve.

use bilayer_geometry::curve::Curve;
use bilayer_geometry::sample::sample_uniform;
use bilayer_math::Point2;
use serde::{Deserialize, Serialize};

use crate::composition::{LeafletComposition, LipidComposition};
use crate::distribute::distribute_types;
use crate::membrane::MembraneConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leaflet {
    Outer,
    Inner,
    Pore,
}

/// A placed lipid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LipidInstance {
    /// Key into the caller's lipid type table; callers tolerate keys their
    /// table does not resolve.
    pub lipid_type_id: String,
    pub position: Point2,
    /// Rotation in radians; tails point toward the membrane interior.
    pub angle: f64,
    pub scale: f64,
    pub leaflet: Leaflet,
    /// Approximate curve parameter, as the sample's fractional index. Good
    /// enough for zone filtering, not an exact arc-length position.
    pub t: f64,
}

/// Places lipids along a centerline curve based on composition.
pub struct LipidPlacer<'a> {
    curve: &'a Curve,
    config: &'a MembraneConfig,
    composition: &'a LipidComposition,
}

impl<'a> LipidPlacer<'a> {
    pub fn new(
        curve: &'a Curve,
        config: &'a MembraneConfig,
        composition: &'a LipidComposition,
    ) -> Self {
        Self {
            curve,
            config,
            composition,
        }
    }

    fn leaflet_composition(&self, leaflet: Leaflet) -> &LeafletComposition {
        match leaflet {
            Leaflet::Outer => &self.composition.outer_leaflet,
            _ if self.composition.asymmetric => &self.composition.inner_leaflet,
            _ => &self.composition.outer_leaflet,
        }
    }

    /// Place lipids for one leaflet.
    ///
    /// Outer lipids are offset along the sample normal, inner against it, in
    /// both cases by half the total cross-membrane thickness. Orientation
    /// points the tails toward the membrane interior.
    pub fn place_leaflet(&self, leaflet: Leaflet) -> Vec<LipidInstance> {
        let offset_sign = match leaflet {
            Leaflet::Outer => 1.0,
            _ => -1.0,
        };
        let half_thickness = self.config.width / 2.0 + self.config.leaflet_gap / 2.0;
        let offset = offset_sign * half_thickness;
        let spacing = self.config.lipid_base_size + self.config.lipid_spacing;

        let center_points = sample_uniform(self.curve, spacing);
        let comp = self.leaflet_composition(leaflet);
        let type_ids = distribute_types(&comp.ratios, center_points.len());

        let mut instances = Vec::with_capacity(center_points.len());
        for (i, cp) in center_points.iter().enumerate() {
            let position = cp.position + cp.normal * offset;

            let angle = if leaflet == Leaflet::Outer {
                (-cp.normal.y).atan2(-cp.normal.x)
            } else {
                cp.normal.y.atan2(cp.normal.x)
            };

            let t = (i as f64 + 0.5) / center_points.len() as f64;

            // An empty ratio map yields no type ids; skip rather than panic
            let Some(lipid_type_id) = type_ids
                .get(i)
                .cloned()
                .or_else(|| comp.ratios.keys().next().cloned())
            else {
                continue;
            };

            instances.push(LipidInstance {
                lipid_type_id,
                position,
                angle,
                scale: 1.0,
                leaflet,
                t,
            });
        }

        instances
    }

    /// Place lipids on both leaflets, outer first.
    pub fn place_all(&self) -> Vec<LipidInstance> {
        let mut instances = self.place_leaflet(Leaflet::Outer);
        instances.extend(self.place_leaflet(Leaflet::Inner));
        log::debug!(
            "placed {} lipids along a {:.1}-unit centerline",
            instances.len(),
            self.curve.arc_length()
        );
        instances
    }
}
