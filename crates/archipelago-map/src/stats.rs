//! Cumulative map-building counters.

/// Counters accumulated over the lifetime of a [`Map`](crate::Map).
///
/// Rejected insertions are not counted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapStats {
    /// Regions accepted by `add`.
    pub insertions: u64,
    /// Insertions absorbed by extending an existing island.
    pub extensions: u64,
    /// Insertions that founded a new island.
    pub singletons: u64,
    /// Islands absorbed by merges.
    pub merges: u64,
    /// Touching or overlapping pairs whose merge was refused.
    pub refused_merges: u64,
    /// Pair scans run by the merge fixpoint, including the final idle scan.
    pub merge_passes: u64,
}

impl MapStats {
    /// Islands created minus islands absorbed.
    pub fn live_islands(&self) -> u64 {
        self.singletons.saturating_sub(self.merges)
    }
}
