//! Coordinate-axis indices.
//!
//! An [`AxisIndex`] maps one axis value (an X column or a Y row) to the
//! islands holding at least one region on it. The map keeps two of them
//! and uses them to find extension candidates for a new point.

use archipelago_core::IslandId;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Island handles recorded for one axis value.
///
/// Most rows and columns are shared by few islands.
pub type Bucket = SmallVec<[IslandId; 4]>;

/// Axis value -> islands with a region at that value.
///
/// Each bucket holds every handle at most once. Order within a bucket is
/// registration order and carries no meaning after a redirect.
#[derive(Clone, Debug, Default)]
pub struct AxisIndex {
    buckets: IndexMap<i32, Bucket>,
}

impl AxisIndex {
    /// An empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `island` has a region at `value`.
    ///
    /// No-op if already recorded.
    pub fn insert(&mut self, value: i32, island: IslandId) {
        let bucket = self.buckets.entry(value).or_default();
        if !bucket.contains(&island) {
            bucket.push(island);
        }
    }

    /// Islands recorded at `value`, empty if none.
    pub fn get(&self, value: i32) -> &[IslandId] {
        self.buckets.get(&value).map(|b| b.as_slice()).unwrap_or(&[])
    }

    /// Whether `island` is recorded at `value`.
    pub fn contains(&self, value: i32, island: IslandId) -> bool {
        self.get(value).contains(&island)
    }

    /// Replace every `absorbed` entry with `survivor`, then deduplicate.
    ///
    /// Returns the number of buckets that referenced `absorbed`.
    pub fn redirect(&mut self, absorbed: IslandId, survivor: IslandId) -> usize {
        if absorbed == survivor {
            return 0;
        }
        let mut touched = 0;
        for bucket in self.buckets.values_mut() {
            let Some(pos) = bucket.iter().position(|&id| id == absorbed) else {
                continue;
            };
            touched += 1;
            if bucket.contains(&survivor) {
                bucket.remove(pos);
            } else {
                bucket[pos] = survivor;
            }
        }
        touched
    }

    /// Number of axis values with at least one island.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no island has been recorded.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// All `(value, islands)` buckets in first-registration order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[IslandId])> {
        self.buckets.iter().map(|(&v, b)| (v, b.as_slice()))
    }
}
