//! The stock grid island.

use crate::bounds::Bounds;
use crate::config::IslandConfig;
use crate::neighbourhood::Neighbourhood;
use archipelago_core::{
    CannotMerge, CannotMergeReason, Coordinates, Landmass, NotAdjacent, NotAdjacentReason,
    RegionId,
};
use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A connected set of grid cells, each holding one region.
///
/// Cells are kept in insertion order. The bounding rectangle is always the
/// tight bounds of the cells.
///
/// - **add** accepts a free cell that touches an existing cell under the
///   configured [`Neighbourhood`] and keeps the island within
///   [`IslandConfig::max_extent`].
/// - **has_intersection** compares bounding rectangles, so an island
///   enclosed by another (a lake island in a ring atoll) overlaps it.
/// - **has_neighbour** looks for a pair of touching cells.
/// - **merge** refuses shared cells or regions and unions that would
///   exceed the extent limit.
///
/// # Examples
///
/// ```
/// use archipelago_core::{Coordinates, Landmass, RegionId};
/// use archipelago_island::{Island, IslandConfig};
///
/// let config = IslandConfig::default();
/// let mut island = Island::new(&config, Coordinates::new(0, 0), RegionId(1));
/// island.add(Coordinates::new(1, 0), RegionId(2)).unwrap();
/// assert!(island.add(Coordinates::new(5, 5), RegionId(3)).is_err());
/// assert_eq!(island.len(), 2);
/// assert_eq!(island.width(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Island<R = RegionId> {
    config: IslandConfig,
    cells: IndexMap<Coordinates, R>,
    members: IndexMap<R, Coordinates>,
    bounds: Bounds,
}

impl<R> Island<R>
where
    R: Clone + Eq + Hash + Debug,
{
    /// A new island holding one region.
    pub fn new(config: &IslandConfig, coordinates: Coordinates, region: R) -> Self {
        let mut cells = IndexMap::new();
        cells.insert(coordinates, region.clone());
        let mut members = IndexMap::new();
        members.insert(region, coordinates);
        Self {
            config: config.clone(),
            cells,
            members,
            bounds: Bounds::point(coordinates),
        }
    }

    /// The config this island was created with.
    pub fn config(&self) -> &IslandConfig {
        &self.config
    }

    /// Tight bounding rectangle.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Columns spanned.
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    /// Rows spanned.
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// Regions in insertion order.
    pub fn regions(&self) -> impl Iterator<Item = &R> {
        self.members.keys()
    }

    /// Where `region` lies, if it belongs to this island.
    pub fn coordinates_of(&self, region: &R) -> Option<Coordinates> {
        self.members.get(region).copied()
    }

    fn neighbourhood(&self) -> Neighbourhood {
        self.config.neighbourhood()
    }

    fn touches_cell(&self, c: Coordinates) -> bool {
        self.neighbourhood()
            .around(c)
            .any(|n| self.cells.contains_key(&n))
    }
}

impl<R> Landmass for Island<R>
where
    R: Clone + Eq + Hash + Debug,
{
    type Region = R;
    type Config = IslandConfig;

    fn singleton(config: &IslandConfig, coordinates: Coordinates, region: R) -> Self {
        Self::new(config, coordinates, region)
    }

    fn contains(&self, region: &R) -> bool {
        self.members.contains_key(region)
    }

    fn region_at(&self, coordinates: Coordinates) -> Option<&R> {
        if !self.bounds.contains(coordinates) {
            return None;
        }
        self.cells.get(&coordinates)
    }

    fn add(&mut self, coordinates: Coordinates, region: R) -> Result<(), NotAdjacent> {
        if self.cells.contains_key(&coordinates) || self.members.contains_key(&region) {
            return Err(NotAdjacent::new(coordinates, NotAdjacentReason::Occupied));
        }
        if !self.touches_cell(coordinates) {
            return Err(NotAdjacent::new(coordinates, NotAdjacentReason::Detached));
        }
        let bounds = self.bounds.including(coordinates);
        if !self.config.fits(bounds.width(), bounds.height()) {
            return Err(NotAdjacent::new(
                coordinates,
                NotAdjacentReason::ExceedsExtent {
                    width: bounds.width(),
                    height: bounds.height(),
                    max: self.config.max_extent().unwrap_or(u32::MAX),
                },
            ));
        }
        self.cells.insert(coordinates, region.clone());
        self.members.insert(region, coordinates);
        self.bounds = bounds;
        Ok(())
    }

    fn has_intersection(&self, other: &Self) -> bool {
        self.bounds.intersects(&other.bounds)
    }

    fn has_neighbour(&self, other: &Self) -> bool {
        if !self.bounds.grown(1).intersects(&other.bounds) {
            return false;
        }
        // Walk the smaller island, probe the larger.
        let (small, large) = if self.cells.len() <= other.cells.len() {
            (self, other)
        } else {
            (other, self)
        };
        let reach = large.bounds.grown(1);
        small
            .cells
            .keys()
            .any(|&c| reach.contains(c) && large.touches_cell(c))
    }

    fn merge(&mut self, other: &Self) -> Result<(), CannotMerge> {
        let bounds = self.bounds.union(&other.bounds);
        if !self.config.fits(bounds.width(), bounds.height()) {
            return Err(CannotMerge::new(CannotMergeReason::ExceedsExtent {
                width: bounds.width(),
                height: bounds.height(),
                max: self.config.max_extent().unwrap_or(u32::MAX),
            }));
        }
        let clash = other
            .cells
            .iter()
            .find(|(c, r)| self.cells.contains_key(*c) || self.members.contains_key(*r));
        if let Some((&coordinates, _)) = clash {
            return Err(CannotMerge::new(CannotMergeReason::Overlapping {
                coordinates,
            }));
        }
        self.cells.reserve(other.cells.len());
        self.members.reserve(other.members.len());
        for (&c, r) in &other.cells {
            self.cells.insert(c, r.clone());
            self.members.insert(r.clone(), c);
        }
        self.bounds = bounds;
        Ok(())
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn cells(&self) -> Box<dyn Iterator<Item = (Coordinates, &R)> + '_> {
        Box::new(self.cells.iter().map(|(&c, r)| (c, r)))
    }
}
