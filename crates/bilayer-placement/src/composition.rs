//! Leaflet composition models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ratio map for one leaflet: lipid type key to non-negative weight.
///
/// Weights need not sum to 1; the distribution algorithm normalizes them.
/// An ordered map keeps tie-breaking and round-robin fallbacks deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeafletComposition {
    pub ratios: BTreeMap<String, f64>,
}

impl LeafletComposition {
    pub fn new(ratios: BTreeMap<String, f64>) -> Self {
        Self { ratios }
    }
}

/// Composition of both leaflets.
///
/// With `asymmetric` unset the inner leaflet reuses the outer ratio map for
/// type distribution while keeping its own offset and orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LipidComposition {
    pub outer_leaflet: LeafletComposition,
    pub inner_leaflet: LeafletComposition,
    pub asymmetric: bool,
}

impl Default for LipidComposition {
    fn default() -> Self {
        let ratios: BTreeMap<String, f64> = [
            ("PC".to_string(), 0.5),
            ("PE".to_string(), 0.3),
            ("cholesterol".to_string(), 0.2),
        ]
        .into_iter()
        .collect();
        Self {
            outer_leaflet: LeafletComposition::new(ratios.clone()),
            inner_leaflet: LeafletComposition::new(ratios),
            asymmetric: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_composition() {
        let comp = LipidComposition::default();
        assert!(!comp.asymmetric);
        assert_eq!(comp.outer_leaflet.ratios.len(), 3);
        assert_eq!(comp.outer_leaflet.ratios["PC"], 0.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let comp: LipidComposition =
            serde_json::from_str(r#"{"asymmetric": true}"#).unwrap();
        assert!(comp.asymmetric);
        // Missing fields fall back to the default composition
        assert_eq!(comp.outer_leaflet.ratios.len(), 3);
    }
}
