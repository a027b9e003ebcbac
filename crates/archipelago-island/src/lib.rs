//! Grid island geometry for the Archipelago island map.
//!
//! [`Island`] is the stock [`Landmass`](archipelago_core::Landmass)
//! implementation: a set of grid cells, each holding one region, kept
//! connected under a configurable [`Neighbourhood`] and optionally capped
//! in extent by [`IslandConfig::max_extent`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod config;
pub mod error;
pub mod island;
pub mod neighbourhood;

pub use bounds::Bounds;
pub use config::{IslandConfig, IslandConfigBuilder};
pub use error::ConfigError;
pub use island::Island;
pub use neighbourhood::Neighbourhood;
