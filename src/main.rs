//! CLI for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, Settings},
    engine::{create_example_seeds, parse_coordinate_list},
    simulation::Simulation,
    utils::{ColorOutput, GridRenderer, RunFormatter},
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width in columns (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in rows (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Maximum generations to run (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Seed grid file (overrides config)
        #[arg(short, long)]
        seed_file: Option<PathBuf>,

        /// 1-based live cells, e.g. "(1, 1), (1, 2), (1, 3)" (overrides config)
        #[arg(long)]
        cells: Option<String>,

        /// Seed every cell with a coin flip (overrides config)
        #[arg(short, long)]
        random: bool,

        /// Milliseconds to pause between rendered generations
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Do not render intermediate generations
        #[arg(long)]
        no_animate: bool,

        /// Directory to save the run report to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            seed_file,
            cells,
            random,
            delay_ms,
            no_animate,
            output,
            verbose,
        } => run_command(
            config, width, height, generations, seed_file, cells, random, delay_ms, no_animate,
            output, verbose,
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_command(
    config_path: PathBuf,
    width: Option<usize>,
    height: Option<usize>,
    generations: Option<usize>,
    seed_file: Option<PathBuf>,
    cells: Option<String>,
    random: bool,
    delay_ms: Option<u64>,
    no_animate: bool,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("Conway's Game of Life"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // The coordinate list on the command line is 1-based, like the
    // original interactive prompt
    let parsed_cells = cells
        .as_deref()
        .map(parse_coordinate_list)
        .transpose()
        .context("Failed to parse --cells")?;

    let cli_overrides = CliOverrides {
        width,
        height,
        max_generations: generations,
        seed_file,
        cells: parsed_cells,
        random,
        frame_delay_ms: delay_ms,
        no_animate,
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.height, settings.grid.width);
        match settings.simulation.max_generations {
            Some(limit) => println!("  Max generations: {}", limit),
            None => println!("  Max generations: unlimited"),
        }
        println!("  History depth: {}", settings.simulation.history_depth);
        println!("  Seed mode: {:?}", settings.seed.mode);
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let mut simulation =
        Simulation::from_settings(&settings).context("Failed to set up simulation")?;

    // Show the initial state before any generation runs
    println!("Initial state:");
    println!("{}", GridRenderer::format_compact(simulation.grid()));

    let frame_delay = Duration::from_millis(settings.output.frame_delay_ms);
    let report = if settings.output.animate {
        simulation.run_with(|generation, grid| {
            println!("{}", GridRenderer::format_frame(grid, generation));
            std::thread::sleep(frame_delay);
        })
    } else {
        simulation.run()
    };

    println!("{}", ColorOutput::success("Final cell state reached."));
    println!();
    println!("{}", RunFormatter::format_report(&report));

    if settings.output.save_report {
        RunFormatter::save_report(&report, &settings.output.output_directory, &settings.output.format)
            .context("Failed to save run report")?;
        println!(
            "{}",
            ColorOutput::info(&format!(
                "Report saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let seeds_dir = directory.join("input/seeds");
    let output_dir = directory.join("output/runs");

    for dir in [&config_dir, &seeds_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Starter seed patterns
    create_example_seeds(&seeds_dir).context("Failed to create example seeds")?;
    println!("Created example seeds in: {}", seeds_dir.display());

    // A file-seeded example configuration
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut glider_config = Settings::default();
    glider_config.seed.mode = game_of_life_sim::config::SeedMode::File;
    glider_config.seed.seed_file = Some(PathBuf::from("input/seeds/glider.txt"));
    glider_config.simulation.max_generations = Some(100);
    glider_config.to_file(&examples_dir.join("glider.yaml"))?;
    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your seed grids to {}", seeds_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_sim",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--cells",
            "(1, 1), (1, 2)",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/seeds/blinker.txt").exists());
        assert!(temp_dir.path().join("config/examples/glider.yaml").exists());
    }
}
