//! Square grid storage and seeding

use super::patterns::{Pattern, SeedPattern};
use super::Cell;
use crate::error::{LifeError, Result};
use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;

/// Probability of a cell starting alive in a random fill
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.2;

/// An N x N grid of cells stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn dead(size: usize) -> Result<Self> {
        let count = cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![Cell::Dead; count],
        })
    }

    /// Random fill using the thread-local generator
    pub fn random(size: usize, alive_probability: f64) -> Result<Self> {
        Self::random_with_rng(size, alive_probability, &mut rand::thread_rng())
    }

    /// Random fill where every cell is independently alive with `alive_probability`
    pub fn random_with_rng<R: Rng + ?Sized>(
        size: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let count = cell_count(size)?;
        let coin = Bernoulli::new(alive_probability).map_err(|_| {
            LifeError::InvalidArgument(format!(
                "alive probability must lie in [0, 1], got {}",
                alive_probability
            ))
        })?;

        let cells = (0..count)
            .map(|_| Cell::from(coin.sample(rng)))
            .collect();

        Ok(Self { size, cells })
    }

    /// Build a grid for the given seeding mode using the default probability
    pub fn create(size: usize, mode: SeedPattern) -> Result<Self> {
        Self::create_with_rng(size, mode, DEFAULT_ALIVE_PROBABILITY, &mut rand::thread_rng())
    }

    /// Build a grid for the given seeding mode
    ///
    /// `Random` fills with `alive_probability`; pattern modes stamp their
    /// template at its canonical offset on an empty grid.
    pub fn create_with_rng<R: Rng + ?Sized>(
        size: usize,
        mode: SeedPattern,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        match mode.template() {
            None => Self::random_with_rng(size, alive_probability, rng),
            Some((pattern, (top_row, top_col))) => {
                let mut grid = Self::dead(size)?;
                grid.stamp(pattern, top_row, top_col)?;
                Ok(grid)
            }
        }
    }

    /// Create an otherwise-dead grid with the listed cells alive
    pub fn from_living_cells(size: usize, living: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::dead(size)?;
        for &(row, col) in living {
            grid.set(row, col, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Side length N
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Cell at (row, col); coordinates outside the grid read as dead
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row < self.size && col < self.size {
            self.cells[self.index(row, col)]
        } else {
            Cell::Dead
        }
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if row >= self.size || col >= self.size {
            return Err(LifeError::InvalidArgument(format!(
                "coordinates ({}, {}) out of bounds for {}x{} grid",
                row, col, self.size, self.size
            )));
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Overwrite the pattern's bounding box starting at (top_row, top_col)
    pub fn stamp(&mut self, pattern: &Pattern, top_row: usize, top_col: usize) -> Result<()> {
        let fits = top_row
            .checked_add(pattern.rows)
            .zip(top_col.checked_add(pattern.cols))
            .is_some_and(|(bottom, right)| bottom <= self.size && right <= self.size);

        if !fits {
            return Err(LifeError::OutOfBounds {
                pattern: pattern.name,
                top_row,
                top_col,
                pattern_rows: pattern.rows,
                pattern_cols: pattern.cols,
                grid_size: self.size,
            });
        }

        for row in top_row..top_row + pattern.rows {
            let start = self.index(row, top_col);
            self.cells[start..start + pattern.cols].fill(Cell::Dead);
        }
        for &(row, col) in pattern.alive {
            let idx = self.index(top_row + row, top_col + col);
            self.cells[idx] = Cell::Alive;
        }

        Ok(())
    }

    /// Full cell buffer, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Display intensities for every cell, row-major (Alive=255, Dead=0)
    pub fn intensities(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.intensity()).collect()
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Fraction of living cells
    pub fn density(&self) -> f64 {
        self.living_count() as f64 / self.cells.len() as f64
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }
}

/// Number of cells in a `size` x `size` grid
fn cell_count(size: usize) -> Result<usize> {
    if size == 0 {
        return Err(LifeError::InvalidArgument(
            "grid size must be positive".to_string(),
        ));
    }
    size.checked_mul(size).ok_or_else(|| {
        LifeError::InvalidArgument(format!("grid size {} is too large", size))
    })
}
