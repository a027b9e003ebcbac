//! Island construction parameters.

use crate::error::ConfigError;
use crate::neighbourhood::Neighbourhood;

/// Configuration shared by every island of a map.
///
/// Validated at construction through [`IslandConfig::builder`]; all values
/// are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IslandConfig {
    /// Which cells count as touching.
    ///
    /// Default: [`Neighbourhood::Four`].
    neighbourhood: Neighbourhood,

    /// Largest width or height an island may span, in cells.
    ///
    /// Models the world-wrap constraint: an island may not grow around the
    /// whole world. Default: `None` (unbounded). Never `Some(0)`.
    max_extent: Option<u32>,
}

impl IslandConfig {
    /// Default connectivity.
    pub const DEFAULT_NEIGHBOURHOOD: Neighbourhood = Neighbourhood::Four;

    /// Default extent limit.
    pub const DEFAULT_MAX_EXTENT: Option<u32> = None;

    /// Create a new builder seeded with the defaults.
    pub fn builder() -> IslandConfigBuilder {
        IslandConfigBuilder {
            neighbourhood: Self::DEFAULT_NEIGHBOURHOOD,
            max_extent: Self::DEFAULT_MAX_EXTENT,
        }
    }

    /// Configured connectivity.
    pub fn neighbourhood(&self) -> Neighbourhood {
        self.neighbourhood
    }

    /// Configured extent limit.
    pub fn max_extent(&self) -> Option<u32> {
        self.max_extent
    }

    /// Whether a `width x height` island is within the extent limit.
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.max_extent
            .is_none_or(|max| width <= max && height <= max)
    }
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            neighbourhood: Self::DEFAULT_NEIGHBOURHOOD,
            max_extent: Self::DEFAULT_MAX_EXTENT,
        }
    }
}

/// Builder for [`IslandConfig`].
#[derive(Clone, Debug)]
pub struct IslandConfigBuilder {
    neighbourhood: Neighbourhood,
    max_extent: Option<u32>,
}

impl IslandConfigBuilder {
    /// Set the connectivity.
    pub fn neighbourhood(mut self, neighbourhood: Neighbourhood) -> Self {
        self.neighbourhood = neighbourhood;
        self
    }

    /// Cap island width and height at `max` cells.
    pub fn max_extent(mut self, max: u32) -> Self {
        self.max_extent = Some(max);
        self
    }

    /// Remove the extent cap.
    pub fn unbounded(mut self) -> Self {
        self.max_extent = None;
        self
    }

    /// Validate and build the config.
    ///
    /// Returns `Err(ConfigError::ZeroExtent)` if the extent cap is zero.
    pub fn build(self) -> Result<IslandConfig, ConfigError> {
        if self.max_extent == Some(0) {
            return Err(ConfigError::ZeroExtent);
        }
        Ok(IslandConfig {
            neighbourhood: self.neighbourhood,
            max_extent: self.max_extent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_four_connected_and_unbounded() {
        let config = IslandConfig::default();
        assert_eq!(config.neighbourhood(), Neighbourhood::Four);
        assert_eq!(config.max_extent(), None);
        assert!(config.fits(u32::MAX, u32::MAX));
    }

    #[test]
    fn builder_matches_default() {
        assert_eq!(IslandConfig::builder().build(), Ok(IslandConfig::default()));
    }

    #[test]
    fn zero_extent_rejected() {
        let err = IslandConfig::builder().max_extent(0).build();
        assert_eq!(err, Err(ConfigError::ZeroExtent));
    }

    #[test]
    fn extent_limits_both_axes() {
        let config = IslandConfig::builder()
            .neighbourhood(Neighbourhood::Eight)
            .max_extent(4)
            .build()
            .unwrap();
        assert_eq!(config.neighbourhood(), Neighbourhood::Eight);
        assert!(config.fits(4, 4));
        assert!(!config.fits(5, 1));
        assert!(!config.fits(1, 5));
    }

    #[test]
    fn unbounded_clears_cap() {
        let config = IslandConfig::builder()
            .max_extent(3)
            .unbounded()
            .build()
            .unwrap();
        assert_eq!(config.max_extent(), None);
    }
}
