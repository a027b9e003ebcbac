//! Core types and traits for the Archipelago island map.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by the rest of the workspace:
//! grid coordinates, typed identifiers, the [`Landmass`] contract that
//! island implementations fulfil, and the outcome/error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;
pub mod traits;

pub use coord::Coordinates;
pub use error::{CannotMerge, CannotMergeReason, MapError, NotAdjacent, NotAdjacentReason};
pub use id::{IslandId, RegionId};
pub use traits::Landmass;
