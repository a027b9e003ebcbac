//! Outcome and error types for island and map operations.
//!
//! [`NotAdjacent`] and [`CannotMerge`] are expected outcomes of the
//! [`Landmass`](crate::Landmass) contract. The map consumes them as
//! control flow and never surfaces them to callers. [`MapError`] is the
//! only error a caller of `Map::add` can observe.

use crate::coord::Coordinates;
use crate::id::IslandId;
use std::error::Error;
use std::fmt;

/// Why an island refused to be extended by a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotAdjacentReason {
    /// The point does not touch any cell of the island.
    Detached,
    /// The island already holds a region at the point.
    Occupied,
    /// Extending would stretch the island past its maximum extent.
    ExceedsExtent {
        /// Width the island would have after extension.
        width: u32,
        /// Height the island would have after extension.
        height: u32,
        /// Configured maximum extent on either axis.
        max: u32,
    },
}

/// A candidate island cannot accept a point.
///
/// Returned by [`Landmass::add`](crate::Landmass::add). The map reacts by
/// trying the next candidate or by founding a new island.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotAdjacent {
    /// The rejected point.
    pub coordinates: Coordinates,
    /// Why it was rejected.
    pub reason: NotAdjacentReason,
}

impl NotAdjacent {
    /// Convenience constructor.
    pub fn new(coordinates: Coordinates, reason: NotAdjacentReason) -> Self {
        Self {
            coordinates,
            reason,
        }
    }
}

impl fmt::Display for NotAdjacent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            NotAdjacentReason::Detached => {
                write!(f, "{} is not adjacent to the island", self.coordinates)
            }
            NotAdjacentReason::Occupied => {
                write!(f, "{} is already part of the island", self.coordinates)
            }
            NotAdjacentReason::ExceedsExtent { width, height, max } => write!(
                f,
                "adding {} would grow the island to {width}x{height}, max extent {max}",
                self.coordinates
            ),
        }
    }
}

impl Error for NotAdjacent {}

/// Why two touching or overlapping islands could not be merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CannotMergeReason {
    /// Both islands claim the same coordinate or region.
    Overlapping {
        /// A coordinate claimed by both islands.
        coordinates: Coordinates,
    },
    /// The union would stretch past the maximum extent (world wrap).
    ExceedsExtent {
        /// Width of the would-be union.
        width: u32,
        /// Height of the would-be union.
        height: u32,
        /// Configured maximum extent on either axis.
        max: u32,
    },
    /// A domain-specific incompatibility.
    Incompatible {
        /// Human-readable description.
        reason: String,
    },
}

/// Two islands passed the adjacency/overlap test but cannot be merged.
///
/// Returned by [`Landmass::merge`](crate::Landmass::merge). The map treats
/// the pair as unmergeable and keeps scanning the remaining pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CannotMerge {
    /// Why the merge was refused.
    pub reason: CannotMergeReason,
}

impl CannotMerge {
    /// Convenience constructor.
    pub fn new(reason: CannotMergeReason) -> Self {
        Self { reason }
    }
}

impl fmt::Display for CannotMerge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            CannotMergeReason::Overlapping { coordinates } => {
                write!(f, "cannot merge: both islands claim {coordinates}")
            }
            CannotMergeReason::ExceedsExtent { width, height, max } => write!(
                f,
                "cannot merge: union would be {width}x{height}, max extent {max}"
            ),
            CannotMergeReason::Incompatible { reason } => {
                write!(f, "cannot merge: {reason}")
            }
        }
    }
}

impl Error for CannotMerge {}

/// Errors from `Map::add` in `archipelago-map`.
///
/// A rejected insertion leaves the map unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapError {
    /// The region already belongs to an island.
    DuplicateRegion {
        /// The island that holds the region.
        island: IslandId,
    },
    /// Another region already occupies the coordinates.
    CoordinatesOccupied {
        /// The contested coordinates.
        coordinates: Coordinates,
        /// The island that holds them.
        island: IslandId,
    },
    /// No more island handles can be allocated.
    CapacityExceeded {
        /// Number of handles already allocated.
        allocated: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateRegion { island } => {
                write!(f, "region already belongs to island {island}")
            }
            Self::CoordinatesOccupied {
                coordinates,
                island,
            } => {
                write!(f, "coordinates {coordinates} already occupied by island {island}")
            }
            Self::CapacityExceeded { allocated } => {
                write!(f, "island capacity exceeded: {allocated} handles allocated")
            }
        }
    }
}

impl Error for MapError {}
