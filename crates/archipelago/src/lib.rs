//! Archipelago: incremental island clustering for tile-based world maps.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Archipelago sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use archipelago::prelude::*;
//!
//! let config = IslandConfig::builder()
//!     .neighbourhood(Neighbourhood::Four)
//!     .build()
//!     .unwrap();
//! let mut map: Map = Map::with_config(config);
//!
//! let west = map.add(Coordinates::new(0, 0), RegionId(1)).unwrap();
//! let east = map.add(Coordinates::new(2, 0), RegionId(2)).unwrap();
//! assert_eq!(map.len(), 2);
//!
//! // The bridge joins both islands; the older handle survives.
//! let joined = map.add(Coordinates::new(1, 0), RegionId(3)).unwrap();
//! assert_eq!(joined, west);
//! assert_eq!(map.resolve(east), Some(west));
//! assert_eq!(map.len(), 1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `archipelago-core` | Coordinates, IDs, the `Landmass` trait, errors |
//! | [`island`] | `archipelago-island` | Grid island geometry and its config |
//! | [`map`] | `archipelago-map` | The island map and its axis indices |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`archipelago-core`).
///
/// Implement [`types::Landmass`] to plug custom island geometry into a
/// [`map::Map`].
pub use archipelago_core as types;

/// Grid island geometry (`archipelago-island`).
pub use archipelago_island as island;

/// The island map (`archipelago-map`).
pub use archipelago_map as map;

/// Common imports for typical Archipelago usage.
pub mod prelude {
    pub use archipelago_core::{
        CannotMerge, Coordinates, IslandId, Landmass, MapError, NotAdjacent, RegionId,
    };
    pub use archipelago_island::{Island, IslandConfig, Neighbourhood};
    pub use archipelago_map::{Map, MapStats};
}
