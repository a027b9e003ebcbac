//! The island map: insertion, merge fixpoint and lookup.

use crate::index::AxisIndex;
use crate::stats::MapStats;
use archipelago_core::{Coordinates, IslandId, Landmass, MapError};
use archipelago_island::Island;
use smallvec::SmallVec;
use std::iter::{Enumerate, FusedIterator};
use std::slice;
use tracing::{debug, trace};

/// One arena entry.
#[derive(Clone, Debug)]
enum Slot<I> {
    Live(I),
    /// Absorbed by a merge. `into` is always a live, lower handle.
    Absorbed { into: IslandId },
}

/// A world map grouping regions into islands.
///
/// Regions are added one at a time with [`add`](Self::add). After every
/// insertion the map runs a merge fixpoint so that, whenever `add` returns,
/// no two islands both touch (or overlap) and accept being merged.
///
/// Islands are stored in an arena and addressed by [`IslandId`]. The scan
/// order of the merge pass is ascending handle order over live islands,
/// i.e. creation order. The lower handle always survives a merge.
///
/// # Index invariant
///
/// An island handle appears in the X index bucket for `x` if and only if
/// that island holds a region whose X coordinate is `x`, and likewise for
/// Y. It holds after every `add`.
///
/// # Examples
///
/// ```
/// use archipelago_core::{Coordinates, RegionId};
/// use archipelago_map::Map;
///
/// let mut map: Map = Map::new();
/// let a = map.add(Coordinates::new(0, 0), RegionId(1)).unwrap();
/// let b = map.add(Coordinates::new(1, 0), RegionId(2)).unwrap();
/// assert_eq!(a, b);
/// map.add(Coordinates::new(10, 10), RegionId(3)).unwrap();
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.search(&RegionId(1)), Some(a));
/// ```
#[derive(Clone, Debug)]
pub struct Map<I: Landmass = Island> {
    config: I::Config,
    slots: Vec<Slot<I>>,
    live: usize,
    by_x: AxisIndex,
    by_y: AxisIndex,
    stats: MapStats,
}

impl<I: Landmass> Map<I> {
    /// An empty map using the default island config.
    pub fn new() -> Self {
        Self::with_config(I::Config::default())
    }

    /// An empty map whose islands are created with `config`.
    pub fn with_config(config: I::Config) -> Self {
        Self {
            config,
            slots: Vec::new(),
            live: 0,
            by_x: AxisIndex::new(),
            by_y: AxisIndex::new(),
            stats: MapStats::default(),
        }
    }

    /// The island config.
    pub fn config(&self) -> &I::Config {
        &self.config
    }

    /// Number of islands.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the map holds no island.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of regions across all islands.
    pub fn region_count(&self) -> usize {
        self.iter().map(|(_, island)| island.len()).sum()
    }

    /// Cumulative counters.
    pub fn stats(&self) -> &MapStats {
        &self.stats
    }

    /// The X (longitude) index.
    pub fn longitude(&self) -> &AxisIndex {
        &self.by_x
    }

    /// The Y (latitude) index.
    pub fn latitude(&self) -> &AxisIndex {
        &self.by_y
    }

    /// Islands with a region in column `x`.
    pub fn islands_at_x(&self, x: i32) -> &[IslandId] {
        self.by_x.get(x)
    }

    /// Islands with a region in row `y`.
    pub fn islands_at_y(&self, y: i32) -> &[IslandId] {
        self.by_y.get(y)
    }

    /// The live handle `id` refers to.
    ///
    /// A live handle resolves to itself, an absorbed one to the island that
    /// absorbed it. Returns `None` for handles this map never allocated.
    pub fn resolve(&self, id: IslandId) -> Option<IslandId> {
        match self.slots.get(id.index())? {
            Slot::Live(_) => Some(id),
            Slot::Absorbed { into } => self.resolve(*into),
        }
    }

    /// The island `id` refers to, following merge redirects.
    pub fn get(&self, id: IslandId) -> Option<&I> {
        match self.slots.get(self.resolve(id)?.index())? {
            Slot::Live(island) => Some(island),
            Slot::Absorbed { .. } => None,
        }
    }

    /// The island holding `region`.
    ///
    /// Linear in the number of islands.
    pub fn search(&self, region: &I::Region) -> Option<IslandId> {
        self.iter()
            .find(|(_, island)| island.contains(region))
            .map(|(id, _)| id)
    }

    /// Iterate the islands in handle order.
    ///
    /// Each call starts a fresh iteration; the length is known upfront.
    pub fn iter(&self) -> Islands<'_, I> {
        Islands {
            slots: self.slots.iter().enumerate(),
            remaining: self.live,
        }
    }

    /// Place `region` at `coordinates` and return the island holding it.
    ///
    /// The point first extends an island that already has regions in both
    /// its column and its row; if no such island accepts it, a new island
    /// is founded. Either way the merge fixpoint runs before returning, so
    /// the returned handle is the island holding `region` after all merges.
    ///
    /// # Errors
    ///
    /// - [`MapError::DuplicateRegion`] if `region` was already added.
    /// - [`MapError::CoordinatesOccupied`] if another region sits at
    ///   `coordinates`.
    /// - [`MapError::CapacityExceeded`] if no island handle is left.
    ///
    /// The map is unchanged on error.
    pub fn add(
        &mut self,
        coordinates: Coordinates,
        region: I::Region,
    ) -> Result<IslandId, MapError> {
        if let Some(island) = self.search(&region) {
            return Err(MapError::DuplicateRegion { island });
        }
        if let Some(island) = self.occupant(coordinates) {
            return Err(MapError::CoordinatesOccupied {
                coordinates,
                island,
            });
        }

        let home = match self.extend(coordinates, &region) {
            Some(island) => island,
            None => self.found(coordinates, region)?,
        };
        self.stats.insertions += 1;
        self.merge();
        Ok(self.resolve(home).unwrap_or(home))
    }

    /// Islands sharing both the X and the Y of `coordinates`, in X-bucket
    /// order.
    fn candidates(&self, coordinates: Coordinates) -> SmallVec<[IslandId; 4]> {
        self.by_x
            .get(coordinates.x)
            .iter()
            .copied()
            .filter(|&id| self.by_y.contains(coordinates.y, id))
            .collect()
    }

    fn occupant(&self, coordinates: Coordinates) -> Option<IslandId> {
        self.by_x.get(coordinates.x).iter().copied().find(|&id| {
            self.get(id)
                .is_some_and(|island| island.region_at(coordinates).is_some())
        })
    }

    /// Try each candidate in turn; `None` if all refuse.
    fn extend(&mut self, coordinates: Coordinates, region: &I::Region) -> Option<IslandId> {
        for candidate in self.candidates(coordinates) {
            let Some(Slot::Live(island)) = self.slots.get_mut(candidate.index()) else {
                continue;
            };
            match island.add(coordinates, region.clone()) {
                Ok(()) => {
                    self.by_x.insert(coordinates.x, candidate);
                    self.by_y.insert(coordinates.y, candidate);
                    self.stats.extensions += 1;
                    trace!(island = %candidate, %coordinates, "extended island");
                    return Some(candidate);
                }
                Err(reason) => {
                    trace!(island = %candidate, %reason, "candidate refused point");
                }
            }
        }
        None
    }

    /// Found a singleton island.
    fn found(&mut self, coordinates: Coordinates, region: I::Region) -> Result<IslandId, MapError> {
        let id = u32::try_from(self.slots.len())
            .map(IslandId)
            .map_err(|_| MapError::CapacityExceeded {
                allocated: self.slots.len(),
            })?;
        self.slots
            .push(Slot::Live(I::singleton(&self.config, coordinates, region)));
        self.live += 1;
        self.by_x.insert(coordinates.x, id);
        self.by_y.insert(coordinates.y, id);
        self.stats.singletons += 1;
        debug!(island = %id, %coordinates, "founded island");
        Ok(id)
    }

    /// Merge touching or overlapping pairs until a full scan merges nothing.
    ///
    /// Terminates: every productive scan removes one island.
    fn merge(&mut self) {
        loop {
            self.stats.merge_passes += 1;
            if !self.merge_first_pair() {
                break;
            }
        }
    }

    /// Scan pairs `(first, second)`, `first < second`, in ascending order
    /// and merge the first pair that accepts. Returns whether one did.
    fn merge_first_pair(&mut self) -> bool {
        let order: Vec<IslandId> = self.iter().map(|(id, _)| id).collect();
        for (i, &first) in order.iter().enumerate() {
            for &second in &order[i + 1..] {
                let (head, tail) = self.slots.split_at_mut(second.index());
                let outcome = match (&mut head[first.index()], &tail[0]) {
                    (Slot::Live(a), Slot::Live(b)) => {
                        if a.has_intersection(b) || a.has_neighbour(b) {
                            Some(a.merge(b))
                        } else {
                            None
                        }
                    }
                    _ => None,
                };
                match outcome {
                    None => {}
                    Some(Ok(())) => {
                        debug!(island = %first, absorbed = %second, "merged islands");
                        self.absorb(first, second);
                        return true;
                    }
                    Some(Err(reason)) => {
                        self.stats.refused_merges += 1;
                        debug!(island = %first, other = %second, %reason, "merge refused");
                    }
                }
            }
        }
        false
    }

    /// Retire `absorbed` and point everything that referenced it at
    /// `survivor`.
    fn absorb(&mut self, survivor: IslandId, absorbed: IslandId) {
        self.slots[absorbed.index()] = Slot::Absorbed { into: survivor };
        for slot in &mut self.slots {
            if let Slot::Absorbed { into } = slot {
                if *into == absorbed {
                    *into = survivor;
                }
            }
        }
        self.live -= 1;
        self.stats.merges += 1;

        let columns = self.by_x.redirect(absorbed, survivor);
        let rows = self.by_y.redirect(absorbed, survivor);
        trace!(%survivor, %absorbed, columns, rows, "redirected axis indices");
    }
}

impl<I: Landmass> Default for Map<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I: Landmass> IntoIterator for &'a Map<I> {
    type Item = (IslandId, &'a I);
    type IntoIter = Islands<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the live islands of a [`Map`], in handle order.
///
/// Created by [`Map::iter`].
#[derive(Clone, Debug)]
pub struct Islands<'a, I> {
    slots: Enumerate<slice::Iter<'a, Slot<I>>>,
    remaining: usize,
}

impl<'a, I> Iterator for Islands<'a, I> {
    type Item = (IslandId, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, slot) in self.slots.by_ref() {
            if let Slot::Live(island) = slot {
                self.remaining -= 1;
                return Some((IslandId(index as u32), island));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I> ExactSizeIterator for Islands<'_, I> {}

impl<I> FusedIterator for Islands<'_, I> {}
