//! Grid representation and generation stepping for Game of Life

use super::cell::Cell;
use super::error::GridError;
use itertools::iproduct;
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;

/// Minimum number of rows and columns a grid must have
pub const MIN_DIMENSION: usize = 3;

/// Initial live-cell assignment for a new grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Unbiased coin flip per cell
    Random,
    /// Explicit 0-based (row, col) coordinates to mark alive
    Cells(Vec<(usize, usize)>),
}

/// A fixed-size, hard-edge Game of Life grid.
///
/// Cells outside the grid do not exist and never count as neighbors;
/// there is no toroidal wraparound. Dimensions are immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    /// Alive/dead matrices of up to `history_depth` prior generations,
    /// oldest first. Maintained by `is_terminal`, not by stepping.
    snapshots: VecDeque<Vec<bool>>,
    history_depth: usize,
}

impl Grid {
    /// Create a grid with the given dimensions and seed.
    ///
    /// Fails with `InvalidDimensions` if either dimension is below
    /// [`MIN_DIMENSION`], and with `InvalidSeedCoordinate` if an explicit
    /// seed coordinate lies outside the grid. Coordinates are never
    /// clamped or wrapped into validity.
    pub fn new(rows: usize, cols: usize, seed: &SeedSource) -> Result<Self, GridError> {
        let mut grid = Self::empty(rows, cols)?;

        match seed {
            SeedSource::Random => {
                let mut rng = rand::thread_rng();
                for cell in &mut grid.cells {
                    if rng.gen_bool(0.5) {
                        cell.set_alive();
                    }
                }
            }
            SeedSource::Cells(coords) => {
                for &(row, col) in coords {
                    if row >= rows || col >= cols {
                        return Err(GridError::InvalidSeedCoordinate {
                            row,
                            col,
                            rows,
                            cols,
                        });
                    }
                    let idx = grid.index(row, col);
                    grid.cells[idx].set_alive();
                }
            }
        }

        Ok(grid)
    }

    /// Create an all-dead grid, validating dimensions only.
    pub fn empty(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(GridError::InvalidDimensions {
                rows,
                cols,
                min: MIN_DIMENSION,
            });
        }

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
            snapshots: VecDeque::new(),
            history_depth: 1,
        })
    }

    /// Create a grid from a 2D boolean matrix.
    ///
    /// Rows must all have the length of the first; the file parser in
    /// [`crate::engine::io`] enforces this before calling in.
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());

        let mut grid = Self::empty(height, width)?;
        for (r, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.len(), width, "seed rows must be rectangular");
            for (c, &alive) in row.iter().enumerate() {
                if alive {
                    let idx = grid.index(r, c);
                    grid.cells[idx].set_alive();
                }
            }
        }

        Ok(grid)
    }

    /// Set how many prior generations `is_terminal` compares against.
    ///
    /// Depth 1 is the reference behavior: only a fixed point (or the
    /// second consecutive identical generation) is terminal. Depth N
    /// additionally detects oscillators of period ≤ N. Values below 1
    /// are treated as 1.
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth.max(1);
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to the flat row-major index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Whether the cell at (row, col) is alive. Out-of-bounds positions
    /// do not exist and read as dead.
    pub fn cell_is_alive(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)].is_alive()
        } else {
            false
        }
    }

    /// Count live cells among the up-to-8 neighbors of (row, col).
    ///
    /// Hard-edge boundary: positions outside the grid contribute nothing.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| (dr, dc) != (0, 0))
            .filter(|&(dr, dc)| {
                let r = row as isize + dr;
                let c = col as isize + dc;
                r >= 0
                    && c >= 0
                    && (r as usize) < self.rows
                    && (c as usize) < self.cols
                    && self.cells[self.index(r as usize, c as usize)].is_alive()
            })
            .count() as u8
    }

    /// Advance the grid one generation under the B3/S23 rule.
    ///
    /// The next state of every cell is decided from the current
    /// generation before any cell is mutated; the read pass and the
    /// write pass never interleave.
    pub fn advance_generation(&mut self) {
        let next: Vec<bool> = iproduct!(0..self.rows, 0..self.cols)
            .map(|(row, col)| {
                let neighbors = self.count_live_neighbors(row, col);
                matches!(
                    (self.cells[self.index(row, col)].is_alive(), neighbors),
                    (true, 2) | (true, 3) | (false, 3)
                )
            })
            .collect();

        for (cell, alive) in self.cells.iter_mut().zip(next) {
            if alive {
                cell.set_alive();
            } else {
                cell.set_dead();
            }
        }
    }

    /// Check whether the grid has reached a terminal state.
    ///
    /// Terminal means the current alive/dead matrix exactly matches one
    /// of the retained prior snapshots. The current matrix is recorded
    /// afterwards regardless of the outcome, so the first call after
    /// construction always returns false. Extinction is not a separate
    /// condition: an all-dead grid becomes terminal one call after it
    /// first appears all-dead.
    pub fn is_terminal(&mut self) -> bool {
        let current = self.snapshot();
        let terminal = self.snapshots.iter().any(|prev| *prev == current);

        self.snapshots.push_back(current);
        while self.snapshots.len() > self.history_depth {
            self.snapshots.pop_front();
        }

        terminal
    }

    /// Capture the current alive/dead matrix
    fn snapshot(&self) -> Vec<bool> {
        self.cells.iter().map(Cell::is_alive).collect()
    }

    /// Count of currently live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Coordinates of all live cells, row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.cols)
            .filter(|&(row, col)| self.cell_is_alive(row, col))
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let glyph = if self.cell_is_alive(row, col) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
