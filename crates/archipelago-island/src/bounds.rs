//! Axis-aligned bounding rectangles on the world grid.

use archipelago_core::Coordinates;

/// Inclusive axis-aligned rectangle `[min.x, max.x] x [min.y, max.y]`.
///
/// Always non-empty: the smallest bounds cover a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    min: Coordinates,
    max: Coordinates,
}

impl Bounds {
    /// Bounds covering exactly one cell.
    pub fn point(c: Coordinates) -> Self {
        Self { min: c, max: c }
    }

    /// Lower-left (minimum) corner, inclusive.
    pub fn min(&self) -> Coordinates {
        self.min
    }

    /// Upper-right (maximum) corner, inclusive.
    pub fn max(&self) -> Coordinates {
        self.max
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x).saturating_add(1)
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y).saturating_add(1)
    }

    /// Whether `c` lies inside the rectangle.
    pub fn contains(&self, c: Coordinates) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }

    /// Smallest bounds covering `self` and `c`.
    pub fn including(&self, c: Coordinates) -> Self {
        Self {
            min: Coordinates::new(self.min.x.min(c.x), self.min.y.min(c.y)),
            max: Coordinates::new(self.max.x.max(c.x), self.max.y.max(c.y)),
        }
    }

    /// Smallest bounds covering both rectangles.
    pub fn union(&self, other: &Self) -> Self {
        self.including(other.min).including(other.max)
    }

    /// Whether the rectangles share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// The rectangle grown by `margin` cells on every side.
    pub fn grown(&self, margin: i32) -> Self {
        Self {
            min: self.min.offset(-margin, -margin),
            max: self.max.offset(margin, margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinates {
        Coordinates::new(x, y)
    }

    #[test]
    fn point_is_one_by_one() {
        let b = Bounds::point(c(4, -2));
        assert_eq!(b.width(), 1);
        assert_eq!(b.height(), 1);
        assert!(b.contains(c(4, -2)));
        assert!(!b.contains(c(4, -1)));
    }

    #[test]
    fn including_extends_corners() {
        let b = Bounds::point(c(0, 0)).including(c(3, -2));
        assert_eq!(b.min(), c(0, -2));
        assert_eq!(b.max(), c(3, 0));
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 3);
    }

    #[test]
    fn intersection_requires_shared_cell() {
        let a = Bounds::point(c(0, 0)).including(c(2, 2));
        let touching = Bounds::point(c(3, 0)).including(c(4, 2));
        let overlapping = Bounds::point(c(2, 2)).including(c(5, 5));
        assert!(!a.intersects(&touching));
        assert!(a.grown(1).intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
    }

    #[test]
    fn union_covers_both() {
        let a = Bounds::point(c(-1, 5));
        let b = Bounds::point(c(3, -5));
        let u = a.union(&b);
        assert!(u.contains(c(-1, 5)));
        assert!(u.contains(c(3, -5)));
        assert_eq!(u.width(), 5);
        assert_eq!(u.height(), 11);
    }

    #[test]
    fn extreme_width_saturates() {
        let b = Bounds::point(c(i32::MIN, 0)).including(c(i32::MAX, 0));
        assert_eq!(b.width(), u32::MAX);
    }
}
