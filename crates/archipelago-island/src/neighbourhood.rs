//! Cell connectivity on the world grid.

use archipelago_core::Coordinates;

/// Cardinal offsets: W, E, S, N.
const OFFSETS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Cardinal plus diagonal offsets.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Which cells count as touching.
///
/// # Examples
///
/// ```
/// use archipelago_core::Coordinates;
/// use archipelago_island::Neighbourhood;
///
/// let a = Coordinates::new(0, 0);
/// let diagonal = Coordinates::new(1, 1);
/// assert!(!Neighbourhood::Four.touches(a, diagonal));
/// assert!(Neighbourhood::Eight.touches(a, diagonal));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Neighbourhood {
    /// North, south, east and west (Manhattan distance 1).
    #[default]
    Four,
    /// The four cardinals plus diagonals (Chebyshev distance 1).
    Eight,
}

impl Neighbourhood {
    /// Offsets from a cell to each of its neighbours.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Eight => &OFFSETS_8,
        }
    }

    /// Whether `a` and `b` are distinct neighbouring cells.
    pub fn touches(self, a: Coordinates, b: Coordinates) -> bool {
        match self {
            Self::Four => a.manhattan(&b) == 1,
            Self::Eight => a.chebyshev(&b) == 1,
        }
    }

    /// Iterate the neighbours of `c`.
    pub fn around(self, c: Coordinates) -> impl Iterator<Item = Coordinates> {
        self.offsets()
            .iter()
            .map(move |&(dx, dy)| c.offset(dx, dy))
            .filter(move |n| *n != c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_has_four_neighbours() {
        let c = Coordinates::new(5, 5);
        let around: Vec<_> = Neighbourhood::Four.around(c).collect();
        assert_eq!(around.len(), 4);
        assert!(around.iter().all(|n| n.manhattan(&c) == 1));
    }

    #[test]
    fn eight_has_eight_neighbours() {
        let c = Coordinates::new(-3, 9);
        let around: Vec<_> = Neighbourhood::Eight.around(c).collect();
        assert_eq!(around.len(), 8);
        assert!(around.iter().all(|n| n.chebyshev(&c) == 1));
    }

    #[test]
    fn a_cell_does_not_touch_itself() {
        let c = Coordinates::new(1, 1);
        assert!(!Neighbourhood::Four.touches(c, c));
        assert!(!Neighbourhood::Eight.touches(c, c));
    }

    #[test]
    fn saturated_edge_drops_self_loops() {
        let c = Coordinates::new(i32::MAX, 0);
        // East neighbour saturates back onto `c` and is skipped.
        assert_eq!(Neighbourhood::Four.around(c).count(), 3);
    }

    #[test]
    fn default_is_four() {
        assert_eq!(Neighbourhood::default(), Neighbourhood::Four);
    }
}
