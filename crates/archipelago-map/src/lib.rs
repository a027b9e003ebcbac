//! Incremental island clustering over a world grid.
//!
//! A [`Map`] receives regions one at a time and keeps them grouped into
//! maximal connected islands. Every insertion either extends an island
//! that already spans the new point's row and column, or founds a new one,
//! and is followed by a merge pass that coalesces touching or overlapping
//! islands until none remain.
//!
//! # Architecture
//!
//! ```text
//! Map
//! ├── Slot[] (arena indexed by IslandId)
//! │   ├── Live(island)
//! │   └── Absorbed { into } (redirect to the survivor)
//! ├── AxisIndex by_x (X -> islands with a region in that column)
//! ├── AxisIndex by_y (Y -> islands with a region in that row)
//! └── MapStats
//! ```
//!
//! Islands are addressed by stable [`IslandId`](archipelago_core::IslandId)
//! handles. A merge never shifts handles; the absorbed island's handle is
//! redirected to the survivor in the arena and in both axis indices.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod index;
pub mod map;
pub mod stats;

pub use index::AxisIndex;
pub use map::{Islands, Map};
pub use stats::MapStats;
