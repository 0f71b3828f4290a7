//! Game of Life simulation engine

pub mod cell;
pub mod error;
pub mod grid;
pub mod io;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, SeedSource, MIN_DIMENSION};
pub use io::{
    create_example_seeds, load_grid_from_file, parse_coordinate_list, save_grid_to_file,
};
