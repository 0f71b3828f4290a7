//! Drives a grid generation-by-generation until it settles or the
//! generation budget runs out

use crate::config::{SeedMode, Settings};
use crate::engine::{load_grid_from_file, Grid, SeedSource};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Why a simulation run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The grid reached a terminal state (its alive/dead matrix matched
    /// a retained prior generation)
    Settled,
    /// The configured generation budget ran out first
    GenerationLimit,
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub outcome: Outcome,
    pub generations: usize,
    pub rows: usize,
    pub cols: usize,
    pub live_cells: usize,
    /// Final grid in seed-file text form ('1' alive, '0' dead)
    pub final_grid: String,
}

impl RunReport {
    /// Save the report as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run report")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;

        Ok(())
    }
}

/// A Game of Life simulation: one grid plus a generation budget.
///
/// The engine itself never loops; this runner owns the advance/check
/// cycle and can be stopped between generations at any time without
/// leaving the grid inconsistent.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    max_generations: Option<usize>,
    generations_run: usize,
}

impl Simulation {
    pub fn new(grid: Grid, max_generations: Option<usize>) -> Self {
        Self {
            grid,
            max_generations,
            generations_run: 0,
        }
    }

    /// Build a simulation from validated settings.
    ///
    /// In `file` mode the grid dimensions come from the seed file, not
    /// from the `grid` section.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let rows = settings.grid.height;
        let cols = settings.grid.width;

        let grid = match settings.seed.mode {
            SeedMode::Random => Grid::new(rows, cols, &SeedSource::Random)
                .context("Failed to build randomly seeded grid")?,
            SeedMode::Cells => {
                let coords = settings
                    .seed
                    .cells
                    .iter()
                    .map(|&[row, col]| (row, col))
                    .collect();
                Grid::new(rows, cols, &SeedSource::Cells(coords))
                    .context("Failed to build grid from seed coordinates")?
            }
            SeedMode::File => {
                let path = settings
                    .seed
                    .seed_file
                    .as_ref()
                    .context("Seed mode 'file' requires a seed_file path")?;
                load_grid_from_file(path)?
            }
        };

        Ok(Self::new(
            grid.with_history_depth(settings.simulation.history_depth),
            settings.simulation.max_generations,
        ))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generations_run(&self) -> usize {
        self.generations_run
    }

    /// Advance one generation and run the terminal check.
    /// Returns true if the grid has settled.
    pub fn step(&mut self) -> bool {
        self.grid.advance_generation();
        self.generations_run += 1;
        self.grid.is_terminal()
    }

    /// Run to completion without observing intermediate generations
    pub fn run(&mut self) -> RunReport {
        self.run_with(|_, _| {})
    }

    /// Run to completion, calling `observer` with the generation number
    /// and grid after every non-terminal generation. The terminal
    /// generation is not observed; it is identical to an earlier frame.
    pub fn run_with<F>(&mut self, mut observer: F) -> RunReport
    where
        F: FnMut(usize, &Grid),
    {
        let outcome = loop {
            if let Some(limit) = self.max_generations {
                if self.generations_run >= limit {
                    break Outcome::GenerationLimit;
                }
            }

            if self.step() {
                break Outcome::Settled;
            }

            observer(self.generations_run, &self.grid);
        };

        self.report(outcome)
    }

    fn report(&self, outcome: Outcome) -> RunReport {
        RunReport {
            outcome,
            generations: self.generations_run,
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            live_cells: self.grid.live_count(),
            final_grid: crate::engine::io::grid_to_string(&self.grid),
        }
    }
}
