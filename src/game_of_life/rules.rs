//! Conway's rule with toroidal neighbor lookup

use super::{Cell, Grid};
use rayon::prelude::*;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Apply the rule to the whole grid, returning the next generation
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::evolve_into(current, &mut next);
        next
    }

    /// Write the next generation of `current` into `next`
    ///
    /// Only `current` is read, so a cell never sees an already-updated
    /// neighbor. `next` is resized to match `current` when needed.
    pub(crate) fn evolve_into(current: &Grid, next: &mut Grid) {
        Self::match_size(current, next);
        let size = current.size();

        for (row, out) in next.cells_mut().chunks_mut(size).enumerate() {
            Self::evolve_row(current, row, out);
        }
    }

    /// Same as [`evolve_into`](Self::evolve_into) with rows sharded across the rayon pool
    pub(crate) fn par_evolve_into(current: &Grid, next: &mut Grid) {
        Self::match_size(current, next);
        let size = current.size();

        next.cells_mut()
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(row, out)| Self::evolve_row(current, row, out));
    }

    fn match_size(current: &Grid, next: &mut Grid) {
        if next.size() != current.size() {
            *next = current.clone();
        }
    }

    fn evolve_row(current: &Grid, row: usize, out: &mut [Cell]) {
        for (col, cell) in out.iter_mut().enumerate() {
            let neighbors = Self::count_neighbors(current, row, col);
            *cell = Self::next_state(current.get(row, col), neighbors);
        }
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(grid: Grid, generations: usize) -> Grid {
        let mut current = grid;
        let mut next = current.clone();
        for _ in 0..generations {
            Self::evolve_into(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        current
    }

    /// Count alive cells among the 8 neighbors, wrapping at every edge
    pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
        let n = grid.size();
        // n - 1 is -1 modulo n
        let rows = [(row + n - 1) % n, row, (row + 1) % n];
        let cols = [(col + n - 1) % n, col, (col + 1) % n];

        let mut count = 0;
        for (dr, &r) in rows.iter().enumerate() {
            for (dc, &c) in cols.iter().enumerate() {
                if dr == 1 && dc == 1 {
                    continue;
                }
                if grid.get(r, c).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    pub fn next_state(cell: Cell, neighbor_count: u8) -> Cell {
        Cell::from(Self::should_be_alive(cell.is_alive(), neighbor_count))
    }
}
