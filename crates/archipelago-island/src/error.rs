//! Error types for island configuration.

use std::fmt;

/// Errors arising from [`IslandConfig`](crate::IslandConfig) validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A maximum extent of zero would reject every island.
    ZeroExtent,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroExtent => write!(f, "max_extent must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
