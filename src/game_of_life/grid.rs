//! Grid representation and utilities for the simulation core

use super::CellState;
use itertools::iproduct;
use std::fmt;
use thiserror::Error;

/// Errors raised by grid construction and coordinate access
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Fixed-size field of cells, indexed `[x, y]` with `(0, 0)` in the top-left
/// corner. Dimensions are set at construction and never change; stepping and
/// seeding only overwrite cell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: vec![CellState::DEAD; width * height],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get the cell at the given coordinates
    pub fn get(&self, x: usize, y: usize) -> Result<CellState, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    /// Overwrite the cell at the given coordinates
    pub fn set(&mut self, x: usize, y: usize, cell: CellState) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Direct read for in-crate hot paths. Callers guarantee bounds.
    #[inline]
    pub(crate) fn cell(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// Direct write for in-crate hot paths. Callers guarantee bounds.
    #[inline]
    pub(crate) fn put(&mut self, x: usize, y: usize, cell: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Visit every cell exactly once in row-major order (y outer, x inner)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        iproduct!(0..self.height, 0..self.width).map(|(y, x)| (x, y, self.cell(x, y)))
    }

    /// Count living cells in the Moore neighborhood of `(x, y)`. Coordinates
    /// outside the grid contribute nothing; the grid does not wrap.
    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;

        for dy in [-1, 0, 1] {
            for dx in [-1, 0, 1] {
                if dx == 0 && dy == 0 {
                    continue; // Skip the cell itself
                }

                let nx = x as isize + dx;
                let ny = y as isize + dy;

                if nx >= 0
                    && ny >= 0
                    && (nx as usize) < self.width
                    && (ny as usize) < self.height
                    && self.cell(nx as usize, ny as usize).alive
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Apply a precomputed next-aliveness snapshot, updating every cell's
    /// generation count from its current value.
    pub(crate) fn commit_generation(&mut self, next_alive: &[bool]) {
        debug_assert_eq!(next_alive.len(), self.cells.len());
        for (cell, &alive) in self.cells.iter_mut().zip(next_alive) {
            *cell = cell.advance(alive);
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    /// Reset every cell to dead with a zero generation count
    pub fn clear(&mut self) {
        self.cells.fill(CellState::DEAD);
    }

    /// Count total living cells
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.alive)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (x, _, cell) in self.iter_cells() {
            write!(f, "{}", if cell.alive { '█' } else { '·' })?;
            if x + 1 == self.width {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
