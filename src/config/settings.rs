//! Configuration settings for the Game of Life simulator

use crate::engine::MIN_DIMENSION;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub seed: SeedConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of generations to run; `None` runs until a terminal state
    pub max_generations: Option<usize>,
    /// How many prior generations the terminal check compares against.
    /// 1 detects only fixed points; N detects oscillators of period <= N.
    pub history_depth: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub mode: SeedMode,
    /// Seed grid file, required in `file` mode
    pub seed_file: Option<PathBuf>,
    /// 0-based [row, col] pairs to mark alive, used in `cells` mode
    pub cells: Vec<[usize; 2]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    Random,
    File,
    Cells,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Render each generation to the console as the simulation runs
    pub animate: bool,
    /// Pause between rendered generations
    pub frame_delay_ms: u64,
    pub save_report: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 20,
                height: 20,
            },
            simulation: SimulationConfig {
                max_generations: Some(500),
                history_depth: 1,
            },
            seed: SeedConfig {
                mode: SeedMode::Random,
                seed_file: None,
                cells: Vec::new(),
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                animate: true,
                frame_delay_ms: 8,
                save_report: false,
                output_directory: PathBuf::from("output/runs"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width < MIN_DIMENSION || self.grid.height < MIN_DIMENSION {
            anyhow::bail!(
                "Grid must be at least {}x{}, got {}x{}",
                MIN_DIMENSION,
                MIN_DIMENSION,
                self.grid.height,
                self.grid.width
            );
        }

        if self.simulation.history_depth == 0 {
            anyhow::bail!("History depth must be at least 1");
        }

        if let Some(0) = self.simulation.max_generations {
            anyhow::bail!("Max generations must be positive (or omitted to run until terminal)");
        }

        if self.seed.mode == SeedMode::File && self.seed.seed_file.is_none() {
            anyhow::bail!("Seed mode 'file' requires a seed_file path");
        }

        if self.seed.mode == SeedMode::Cells && self.seed.cells.is_empty() {
            anyhow::bail!("Seed mode 'cells' requires at least one coordinate");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(ref seed_file) = cli_overrides.seed_file {
            self.seed.mode = SeedMode::File;
            self.seed.seed_file = Some(seed_file.clone());
        }
        if let Some(ref cells) = cli_overrides.cells {
            self.seed.mode = SeedMode::Cells;
            self.seed.cells = cells.iter().map(|&(row, col)| [row, col]).collect();
        }
        if cli_overrides.random {
            self.seed.mode = SeedMode::Random;
        }
        if let Some(delay) = cli_overrides.frame_delay_ms {
            self.output.frame_delay_ms = delay;
        }
        if cli_overrides.no_animate {
            self.output.animate = false;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
            self.output.save_report = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub max_generations: Option<usize>,
    pub seed_file: Option<PathBuf>,
    pub cells: Option<Vec<(usize, usize)>>,
    pub random: bool,
    pub frame_delay_ms: Option<u64>,
    pub no_animate: bool,
    pub output_dir: Option<PathBuf>,
}
