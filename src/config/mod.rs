//! Configuration management

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, OutputConfig, OutputFormat, SeedConfig, SeedMode, Settings,
    SimulationConfig,
};
