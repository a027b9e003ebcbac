//! The island contract consumed by the map.

use crate::coord::Coordinates;
use crate::error::{CannotMerge, NotAdjacent};
use std::fmt::Debug;
use std::hash::Hash;

/// An aggregate of regions occupying grid coordinates.
///
/// The map drives insertion and coalescing through this trait and never
/// looks at island geometry directly. Implementations decide what
/// "adjacent" and "overlapping" mean.
///
/// Region membership of distinct islands is disjoint: the map guarantees
/// it never adds a region or coordinate that another island already holds.
pub trait Landmass: Sized {
    /// Opaque, equality-comparable region identity.
    type Region: Clone + Eq + Hash + Debug;

    /// Construction parameters shared by every island of a map.
    type Config: Clone + Debug + Default;

    /// A new island holding exactly one region.
    fn singleton(config: &Self::Config, coordinates: Coordinates, region: Self::Region) -> Self;

    /// Whether the island holds `region`.
    fn contains(&self, region: &Self::Region) -> bool;

    /// The region held at `coordinates`, if any.
    fn region_at(&self, coordinates: Coordinates) -> Option<&Self::Region>;

    /// Extend the island by one point.
    ///
    /// On `Err` the island is unchanged.
    fn add(&mut self, coordinates: Coordinates, region: Self::Region) -> Result<(), NotAdjacent>;

    /// Whether the two islands overlap. Symmetric.
    fn has_intersection(&self, other: &Self) -> bool;

    /// Whether the two islands touch. Symmetric.
    fn has_neighbour(&self, other: &Self) -> bool;

    /// Absorb `other` into `self`.
    ///
    /// On `Ok` `self` holds the union of both islands. On `Err` `self` is
    /// unchanged.
    fn merge(&mut self, other: &Self) -> Result<(), CannotMerge>;

    /// Number of regions in the island.
    fn len(&self) -> usize;

    /// Always `false` for islands built through the contract.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All `(coordinates, region)` pairs of the island.
    fn cells(&self) -> Box<dyn Iterator<Item = (Coordinates, &Self::Region)> + '_>;
}
