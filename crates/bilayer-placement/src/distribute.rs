//! Deterministic lipid type distribution.

use std::collections::BTreeMap;

use bilayer_core::GEOM_EPS;

/// Assign a type key to each of `n` slots, approximating the given ratios
/// with same-type picks spread as evenly as possible.
///
/// Largest-remainder dithering: per-key error accumulators gain the key's
/// normalized weight each slot, the largest accumulator wins the slot and
/// pays 1.0 back. Each key's slot count never deviates from its ideal
/// fractional share by more than one, and picks never clump when avoidable.
///
/// Keys are ranked by descending weight with key order breaking ties, so the
/// output is deterministic for a given ratio map. Near-zero total weight
/// degrades to a round-robin over the keys.
pub fn distribute_types(ratios: &BTreeMap<String, f64>, n: usize) -> Vec<String> {
    if ratios.is_empty() || n == 0 {
        return Vec::new();
    }

    let total: f64 = ratios.values().sum();
    if total < GEOM_EPS {
        let keys: Vec<&String> = ratios.keys().collect();
        return (0..n).map(|i| keys[i % keys.len()].clone()).collect();
    }

    // Descending weight; the sort is stable, so equal weights keep map order
    let mut keys: Vec<(&String, f64)> = ratios.iter().map(|(k, v)| (k, v / total)).collect();
    keys.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut error = vec![0.0; keys.len()];
    let mut result = Vec::with_capacity(n);

    for _ in 0..n {
        let mut best = 0;
        for (i, (_, weight)) in keys.iter().enumerate() {
            error[i] += weight;
            if error[i] > error[best] {
                best = i;
            }
        }
        result.push(keys[best].0.clone());
        error[best] -= 1.0;
    }

    result
}
