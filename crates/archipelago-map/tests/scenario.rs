//! Integration test: the four-region walkthrough with a mock island.
//!
//! Uses `ReachIsland` with reach 5 so that (5, 5) neighbours both (1, 0)
//! and (10, 10) while those two stay apart.

use archipelago_core::{Coordinates, IslandId, Landmass, RegionId};
use archipelago_map::Map;
use archipelago_test_utils::{ReachConfig, ReachIsland};

fn c(x: i32, y: i32) -> Coordinates {
    Coordinates::new(x, y)
}

#[test]
fn four_region_walkthrough() {
    let mut map: Map<ReachIsland> = Map::with_config(ReachConfig::new(5));

    let first = map.add(c(0, 0), RegionId(1)).unwrap();
    let same = map.add(c(1, 0), RegionId(2)).unwrap();
    assert_eq!(first, same);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(first).unwrap().len(), 2);

    let far = map.add(c(10, 10), RegionId(3)).unwrap();
    assert_eq!(map.len(), 2);
    assert_ne!(far, first);
    assert_eq!(map.search(&RegionId(3)), Some(far));
    assert_eq!(map.search(&RegionId(1)), Some(first));

    let bridge = map.add(c(5, 5), RegionId(4)).unwrap();
    assert_eq!(map.len(), 1);
    for r in 1..=4 {
        assert_eq!(map.search(&RegionId(r)), Some(bridge));
    }
    assert_eq!(bridge, first);
    assert_eq!(map.resolve(far), Some(bridge));
    assert_eq!(map.region_count(), 4);
}

#[test]
fn refused_merges_terminate_and_keep_islands() {
    let mut map: Map<ReachIsland> = Map::with_config(ReachConfig::refusing(1));
    for (i, x) in (0..6).enumerate() {
        map.add(c(x, 0), RegionId(i as u64)).unwrap();
    }
    // Every point lands on a fresh column, so none extends an island and
    // every touching pair is refused.
    assert_eq!(map.len(), 6);
    assert_eq!(map.stats().merges, 0);
    assert!(map.stats().refused_merges >= 5);
    let ids: Vec<IslandId> = map.iter().map(|(id, _)| id).collect();
    assert_eq!(ids.len(), 6);
}

#[test]
fn search_is_stable_across_unrelated_merges() {
    let mut map: Map<ReachIsland> = Map::with_config(ReachConfig::new(1));
    let lone = map.add(c(100, 100), RegionId(0)).unwrap();
    let before = map.search(&RegionId(0));
    map.add(c(0, 0), RegionId(1)).unwrap();
    map.add(c(2, 0), RegionId(2)).unwrap();
    map.add(c(1, 0), RegionId(3)).unwrap();
    assert!(map.stats().merges >= 1);
    assert_eq!(map.search(&RegionId(0)), before);
    assert_eq!(before, Some(lone));
}

#[test]
fn candidate_must_share_row_and_column() {
    let mut map: Map<ReachIsland> = Map::with_config(ReachConfig::new(3));
    map.add(c(0, 0), RegionId(1)).unwrap();
    // Within reach but on a fresh column: founded, then merged.
    map.add(c(2, 2), RegionId(2)).unwrap();
    assert_eq!(map.stats().extensions, 0);
    assert_eq!(map.stats().singletons, 2);
    // Column 2 and row 0 are both held by the merged island: extended.
    map.add(c(2, 0), RegionId(3)).unwrap();
    assert_eq!(map.stats().extensions, 1);
    assert_eq!(map.len(), 1);
}
