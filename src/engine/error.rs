//! Construction-time errors for the simulation engine

use thiserror::Error;

/// Errors that can occur while constructing a grid.
///
/// Both variants are configuration errors: once a grid has been built
/// successfully, `advance_generation` and `is_terminal` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be at least {min}x{min}, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize, min: usize },

    #[error("seed coordinate ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    InvalidSeedCoordinate {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
