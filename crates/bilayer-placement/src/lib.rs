//! Lipid placement along membrane centerlines: composition models, the
//! type-distribution algorithm, leaflet offsetting, and pore geometry.

pub mod composition;
pub mod distribute;
pub mod membrane;
pub mod placer;
pub mod pore;
pub mod zones;

pub use composition::{LeafletComposition, LipidComposition};
pub use membrane::{build_curve, MembraneConfig, MembraneShape};
pub use placer::{Leaflet, LipidInstance, LipidPlacer};
pub use pore::toroidal_pore_edge;
pub use zones::{PoreZone, RaftZone};
