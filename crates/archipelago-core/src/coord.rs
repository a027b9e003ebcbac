//! World grid coordinates.

use std::fmt;

/// Position of a region on the world grid.
///
/// Ordering is x-major, then y, which gives a deterministic row order
/// when coordinates are sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    /// Horizontal axis (longitude).
    pub x: i32,
    /// Vertical axis (latitude).
    pub y: i32,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The X value.
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The Y value.
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// The coordinate displaced by `(dx, dy)`.
    ///
    /// Saturates at the `i32` range instead of overflowing.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Chebyshev (L-inf) distance: diagonal steps cost 1.
    pub fn chebyshev(&self, other: &Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// Manhattan (L1) distance, saturating at `u32::MAX`.
    pub fn manhattan(&self, other: &Self) -> u32 {
        self.x
            .abs_diff(other.x)
            .saturating_add(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coordinates> for (i32, i32) {
    fn from(c: Coordinates) -> Self {
        (c.x, c.y)
    }
}
