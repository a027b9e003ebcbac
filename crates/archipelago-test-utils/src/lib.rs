//! Test utilities and mock types for Archipelago development.
//!
//! Provides a configurable mock [`Landmass`](archipelago_core::Landmass)
//! ([`ReachIsland`]) and deterministic region layouts in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use archipelago_core::{
    CannotMerge, CannotMergeReason, Coordinates, Landmass, NotAdjacent, NotAdjacentReason,
    RegionId,
};

/// Settings for [`ReachIsland`].
#[derive(Clone, Debug)]
pub struct ReachConfig {
    /// Chebyshev distance within which two cells count as touching.
    pub reach: u32,
    /// Refuse every merge with `CannotMergeReason::Incompatible`.
    pub refuse_merges: bool,
}

impl ReachConfig {
    pub fn new(reach: u32) -> Self {
        Self {
            reach,
            refuse_merges: false,
        }
    }

    pub fn refusing(reach: u32) -> Self {
        Self {
            reach,
            refuse_merges: true,
        }
    }
}

impl Default for ReachConfig {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Mock island whose cells touch when within [`ReachConfig::reach`].
///
/// Backed by a plain `Vec` of cells so tests can craft adjacency rules
/// (e.g. "(5, 5) neighbours both (1, 0) and (10, 10)") that the grid
/// island would not allow. Never reports an intersection.
#[derive(Clone, Debug)]
pub struct ReachIsland {
    config: ReachConfig,
    cells: Vec<(Coordinates, RegionId)>,
}

impl ReachIsland {
    fn within_reach(&self, c: Coordinates) -> bool {
        self.cells
            .iter()
            .any(|(cell, _)| cell.chebyshev(&c) <= self.config.reach)
    }
}

impl Landmass for ReachIsland {
    type Region = RegionId;
    type Config = ReachConfig;

    fn singleton(config: &ReachConfig, coordinates: Coordinates, region: RegionId) -> Self {
        Self {
            config: config.clone(),
            cells: vec![(coordinates, region)],
        }
    }

    fn contains(&self, region: &RegionId) -> bool {
        self.cells.iter().any(|(_, r)| r == region)
    }

    fn region_at(&self, coordinates: Coordinates) -> Option<&RegionId> {
        self.cells
            .iter()
            .find(|(c, _)| *c == coordinates)
            .map(|(_, r)| r)
    }

    fn add(&mut self, coordinates: Coordinates, region: RegionId) -> Result<(), NotAdjacent> {
        if self.region_at(coordinates).is_some() {
            return Err(NotAdjacent::new(coordinates, NotAdjacentReason::Occupied));
        }
        if !self.within_reach(coordinates) {
            return Err(NotAdjacent::new(coordinates, NotAdjacentReason::Detached));
        }
        self.cells.push((coordinates, region));
        Ok(())
    }

    fn has_intersection(&self, _other: &Self) -> bool {
        false
    }

    fn has_neighbour(&self, other: &Self) -> bool {
        other.cells.iter().any(|(c, _)| self.within_reach(*c))
    }

    fn merge(&mut self, other: &Self) -> Result<(), CannotMerge> {
        if self.config.refuse_merges {
            return Err(CannotMerge::new(CannotMergeReason::Incompatible {
                reason: "mock refuses merges".into(),
            }));
        }
        self.cells.extend(other.cells.iter().copied());
        Ok(())
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn cells(&self) -> Box<dyn Iterator<Item = (Coordinates, &RegionId)> + '_> {
        Box::new(self.cells.iter().map(|(c, r)| (*c, r)))
    }
}
