//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a region of the world.
///
/// The map never owns region data; it only records which island a region
/// identity belongs to. Any `Clone + Eq + Hash` type can serve as a region
/// identity, `RegionId` is the stock one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RegionId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Stable handle to an island within a map.
///
/// Handles are allocated sequentially at island creation and never reused
/// within one map. When an island is absorbed by a merge its handle stays
/// resolvable and redirects to the surviving island.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IslandId(pub u32);

impl IslandId {
    /// Arena slot index of this handle.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for IslandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for IslandId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
