//! Mine layout strategies.
//!
//! [`GameField`](crate::GameField) asks its placement for a layout exactly once, when the first
//! cell is opened. Real games use [`RandomPlacement`]; tests pin a layout with
//! [`FixedPlacement`].

use crate::util::Coord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Chooses where the mines go.
pub trait MinePlacement {
    /// Returns `mine_count` distinct positions inside a `rows x cols` grid, none of them in
    /// `excluded`.
    ///
    /// Callers guarantee that enough positions remain outside `excluded`.
    fn place_mines(
        &mut self,
        rows: usize,
        cols: usize,
        mine_count: usize,
        excluded: &[Coord],
    ) -> Vec<Coord>;

    /// The exact layout this placement will return, if it is known before the first open.
    /// [`GameField`](crate::GameField) checks it against the field when it is built.
    fn preset(&self) -> Option<&[Coord]> {
        None
    }
}

/// Uniform sampling without replacement: draw a random cell, redraw on collision.
#[derive(Debug, Clone)]
pub struct RandomPlacement<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPlacement<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> MinePlacement for RandomPlacement<R> {
    fn place_mines(
        &mut self,
        rows: usize,
        cols: usize,
        mine_count: usize,
        excluded: &[Coord],
    ) -> Vec<Coord> {
        let excluded: BTreeSet<Coord> = excluded
            .iter()
            .copied()
            .filter(|(r, c)| *r < rows && *c < cols)
            .collect();
        let free = rows * cols - excluded.len();
        debug_assert!(mine_count <= free, "{mine_count} mines do not fit in {free} free cells");
        let mine_count = mine_count.min(free);

        let mut mines = BTreeSet::new();
        while mines.len() < mine_count {
            let pos = (self.rng.random_range(0..rows), self.rng.random_range(0..cols));
            if excluded.contains(&pos) {
                continue;
            }
            mines.insert(pos);
        }
        mines.into_iter().collect()
    }
}

/// A preset layout. Exclusions are ignored: the layout is taken as given.
#[derive(Debug, Clone, Default)]
pub struct FixedPlacement {
    mines: Vec<Coord>,
}

impl FixedPlacement {
    pub fn new(mines: impl IntoIterator<Item = Coord>) -> Self {
        let mines: BTreeSet<Coord> = mines.into_iter().collect();
        Self {
            mines: mines.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.mines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mines.is_empty()
    }
}

impl MinePlacement for FixedPlacement {
    fn preset(&self) -> Option<&[Coord]> {
        Some(&self.mines)
    }

    fn place_mines(
        &mut self,
        rows: usize,
        cols: usize,
        mine_count: usize,
        _excluded: &[Coord],
    ) -> Vec<Coord> {
        self.mines
            .iter()
            .copied()
            .filter(|(r, c)| *r < rows && *c < cols)
            .take(mine_count)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_placement_returns_distinct_in_bounds_positions() {
        let mut placement = RandomPlacement::seeded(7);
        let mines = placement.place_mines(4, 5, 12, &[]);
        let unique: BTreeSet<_> = mines.iter().copied().collect();
        assert_eq!(mines.len(), 12);
        assert_eq!(unique.len(), 12);
        assert!(mines.iter().all(|(r, c)| *r < 4 && *c < 5));
    }

    #[test]
    fn random_placement_respects_exclusions() {
        let excluded = [(0, 0), (0, 1), (1, 0), (1, 1)];
        for seed in 0..50 {
            let mines = RandomPlacement::seeded(seed).place_mines(3, 3, 5, &excluded);
            assert_eq!(mines.len(), 5);
            assert!(mines.iter().all(|p| !excluded.contains(p)), "seed {seed}: {mines:?}");
        }
    }

    #[test]
    fn random_placement_can_fill_every_free_cell() {
        let mines = RandomPlacement::seeded(1).place_mines(2, 2, 3, &[(1, 1)]);
        assert_eq!(mines, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn repeated_exclusions_count_once() {
        let mines = RandomPlacement::seeded(5).place_mines(2, 2, 3, &[(0, 0), (0, 0), (7, 7)]);
        assert_eq!(mines, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let a = RandomPlacement::seeded(42).place_mines(9, 9, 10, &[]);
        let b = RandomPlacement::seeded(42).place_mines(9, 9, 10, &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_placement_dedups_and_drops_out_of_bounds() {
        let mut placement = FixedPlacement::new([(0, 0), (0, 0), (2, 1), (9, 9)]);
        assert_eq!(placement.len(), 3);
        assert_eq!(placement.preset(), Some(&[(0, 0), (2, 1), (9, 9)][..]));
        assert_eq!(RandomPlacement::seeded(0).preset(), None);
        assert_eq!(placement.place_mines(3, 3, 3, &[(0, 0)]), vec![(0, 0), (2, 1)]);
    }
}
