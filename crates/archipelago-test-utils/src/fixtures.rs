//! Deterministic region layouts.
//!
//! Every layout hands out `RegionId`s `0..n` in layout order. Random
//! layouts use a seeded ChaCha8 RNG so the same seed always yields the
//! same map.

use archipelago_core::{Coordinates, RegionId};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// A `(coordinates, region)` insertion.
pub type Placement = (Coordinates, RegionId);

fn number(cells: impl IntoIterator<Item = (i32, i32)>) -> Vec<Placement> {
    cells
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| (Coordinates::new(x, y), RegionId(i as u64)))
        .collect()
}

/// `len` cells in a row along the X axis, starting at the origin.
pub fn strip(len: u32) -> Vec<Placement> {
    number((0..len as i32).map(|x| (x, 0)))
}

/// Every cell of a `width x height` rectangle, row by row.
pub fn filled_rect(width: u32, height: u32) -> Vec<Placement> {
    number((0..height as i32).flat_map(|y| (0..width as i32).map(move |x| (x, y))))
}

/// The perimeter of a `side x side` square, walked clockwise from the
/// origin. `side` must be at least 2.
pub fn square_ring(side: u32) -> Vec<Placement> {
    let n = side as i32 - 1;
    let mut cells = Vec::new();
    cells.extend((0..=n).map(|x| (x, 0)));
    cells.extend((1..=n).map(|y| (n, y)));
    cells.extend((0..n).rev().map(|x| (x, n)));
    cells.extend((1..n).rev().map(|y| (0, y)));
    number(cells)
}

/// Up to `count` distinct cells drawn uniformly from `[0, extent)^2`.
pub fn scatter(seed: u64, count: usize, extent: u32) -> Vec<Placement> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let capacity = (extent as usize).saturating_mul(extent as usize);
    let target = count.min(capacity);
    let mut seen = HashSet::with_capacity(target);
    let mut cells = Vec::with_capacity(target);
    while cells.len() < target {
        let x = (rng.next_u32() % extent) as i32;
        let y = (rng.next_u32() % extent) as i32;
        if seen.insert((x, y)) {
            cells.push((x, y));
        }
    }
    number(cells)
}

/// `placements` in a seeded random order (Fisher-Yates).
pub fn shuffled(seed: u64, placements: &[Placement]) -> Vec<Placement> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = placements.to_vec();
    for i in (1..out.len()).rev() {
        let j = (rng.next_u64() % (i as u64 + 1)) as usize;
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_has_perimeter_cells() {
        let ring = square_ring(5);
        assert_eq!(ring.len(), 16);
        let distinct: HashSet<_> = ring.iter().map(|(c, _)| *c).collect();
        assert_eq!(distinct.len(), 16);
        // Consecutive cells touch.
        for pair in ring.windows(2) {
            assert_eq!(pair[0].0.manhattan(&pair[1].0), 1);
        }
    }

    #[test]
    fn scatter_is_deterministic_and_distinct() {
        let a = scatter(7, 50, 20);
        let b = scatter(7, 50, 20);
        assert_eq!(a, b);
        let distinct: HashSet<_> = a.iter().map(|(c, _)| *c).collect();
        assert_eq!(distinct.len(), 50);
    }

    #[test]
    fn scatter_caps_at_capacity() {
        assert_eq!(scatter(1, 100, 3).len(), 9);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let rect = filled_rect(4, 3);
        let mixed = shuffled(3, &rect);
        assert_eq!(mixed.len(), rect.len());
        let a: HashSet<_> = rect.iter().collect();
        let b: HashSet<_> = mixed.iter().collect();
        assert_eq!(a, b);
    }
}
