//! Benchmark profiles for the Archipelago island map.
//!
//! - [`archipelago_profile`]: many small islands scattered over open sea
//! - [`continent_profile`]: one large landmass inserted in random order

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use archipelago_core::Landmass;
use archipelago_island::{Island, IslandConfig};
use archipelago_map::Map;
use archipelago_test_utils::fixtures::{self, Placement};

/// Sparse scatter: `count` cells over a `4 * sqrt(count)` square, which
/// leaves most cells isolated or in small clusters.
pub fn archipelago_profile(seed: u64, count: usize) -> Vec<Placement> {
    let extent = ((count as f64).sqrt() * 4.0).ceil() as u32;
    fixtures::scatter(seed, count, extent.max(1))
}

/// A filled `side x side` square inserted in seeded random order.
pub fn continent_profile(seed: u64, side: u32) -> Vec<Placement> {
    fixtures::shuffled(seed, &fixtures::filled_rect(side, side))
}

/// Build a map from `placements`, skipping rejected insertions.
pub fn build_map(config: &IslandConfig, placements: &[Placement]) -> Map<Island> {
    let mut map = Map::with_config(config.clone());
    for &(coords, region) in placements {
        let _ = map.add(coords, region);
    }
    map
}

/// Total regions across all islands of `map`.
pub fn landmass_size<I: Landmass>(map: &Map<I>) -> usize {
    map.iter().map(|(_, island)| island.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continent_is_one_island() {
        let map = build_map(&IslandConfig::default(), &continent_profile(1, 8));
        assert_eq!(map.len(), 1);
        assert_eq!(landmass_size(&map), 64);
    }

    #[test]
    fn archipelago_keeps_every_region() {
        let placements = archipelago_profile(3, 200);
        let map = build_map(&IslandConfig::default(), &placements);
        assert_eq!(landmass_size(&map), placements.len());
        assert!(map.len() > 1);
    }
}
