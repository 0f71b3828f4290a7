//! A single binary-state cell

use serde::{Deserialize, Serialize};

/// One cell of the grid, either alive or dead
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    /// Create a dead cell
    pub fn new() -> Self {
        Self { alive: false }
    }

    /// Check whether the cell is currently alive
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the cell alive (idempotent)
    #[inline]
    pub fn set_alive(&mut self) {
        self.alive = true;
    }

    /// Mark the cell dead (idempotent)
    #[inline]
    pub fn set_dead(&mut self) {
        self.alive = false;
    }
}
