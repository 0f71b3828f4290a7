//! Conway's Game of Life simulator
//!
//! This library simulates Conway's Game of Life on a finite, hard-edge
//! grid: cells outside the grid do not exist and never count as
//! neighbors. The grid evolves under the standard B3/S23 rule until its
//! state matches a retained prior generation or a generation budget
//! runs out.

pub mod config;
pub mod engine;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use engine::{Cell, Grid, GridError, SeedSource};
pub use simulation::{Outcome, RunReport, Simulation};

use anyhow::Result;

/// Build a simulation from validated settings and run it to completion
pub fn run_simulation(settings: &Settings) -> Result<RunReport> {
    let mut simulation = Simulation::from_settings(settings)?;
    Ok(simulation.run())
}
