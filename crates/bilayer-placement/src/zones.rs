//! Zone post-processing over placed lipids: pore exclusion/augmentation and
//! raft thickening.
//!
//! Zones filter on the per-instance `t` parameter, which is an index-fraction
//! approximation of curve position; see [`crate::placer::LipidInstance`].

use bilayer_geometry::curve::Curve;
use bilayer_geometry::sample::sample_at;
use serde::{Deserialize, Serialize};

use crate::composition::LeafletComposition;
use crate::placer::{Leaflet, LipidInstance};
use crate::pore::toroidal_pore_edge;

/// A pore through the membrane at a fixed curve position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoreZone {
    pub position_t: f64,
    pub radius: f64,
    pub num_lipids: usize,
}

impl Default for PoreZone {
    fn default() -> Self {
        Self {
            position_t: 0.5,
            radius: 30.0,
            num_lipids: 8,
        }
    }
}

/// A raft region where lipids render thicker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RaftZone {
    pub start_t: f64,
    pub end_t: f64,
    pub thickness_factor: f64,
}

impl Default for RaftZone {
    fn default() -> Self {
        Self {
            start_t: 0.3,
            end_t: 0.6,
            thickness_factor: 1.3,
        }
    }
}

/// Drop leaflet lipids that fall inside the pore opening.
pub fn exclude_pore_zone(
    instances: Vec<LipidInstance>,
    curve: &Curve,
    zone: &PoreZone,
) -> Vec<LipidInstance> {
    let arc_len = curve.arc_length().max(1.0);
    let pore_half = zone.radius / arc_len * 2.0;
    instances
        .into_iter()
        .filter(|li| (li.t - zone.position_t).abs() > pore_half)
        .collect()
}

/// Build the pore-leaflet lipids lining a pore's toroidal edge.
///
/// Typed with the first outer-leaflet key; an empty outer map falls back to
/// the conventional `PC` key, which downstream type tables may or may not
/// resolve.
pub fn pore_lipid_instances(
    curve: &Curve,
    zone: &PoreZone,
    membrane_width: f64,
    outer: &LeafletComposition,
) -> Vec<LipidInstance> {
    let cp = sample_at(curve, zone.position_t);
    let lipid_type_id = outer
        .ratios
        .keys()
        .next()
        .cloned()
        .unwrap_or_else(|| "PC".to_string());

    toroidal_pore_edge(cp.position, zone.radius, membrane_width, zone.num_lipids)
        .into_iter()
        .map(|pp| LipidInstance {
            lipid_type_id: lipid_type_id.clone(),
            position: pp.position,
            angle: pp.angle,
            scale: 1.0,
            leaflet: Leaflet::Pore,
            t: zone.position_t,
        })
        .collect()
}

/// Thicken lipids inside raft regions; the first matching zone wins.
pub fn apply_raft_zones(instances: &mut [LipidInstance], zones: &[RaftZone]) {
    for inst in instances.iter_mut() {
        for zone in zones {
            if zone.start_t <= inst.t && inst.t <= zone.end_t {
                inst.scale *= zone.thickness_factor;
                break;
            }
        }
    }
}
