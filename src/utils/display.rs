//! Console rendering and output formatting

use crate::config::OutputFormat;
use crate::engine::Grid;
use crate::simulation::{Outcome, RunReport};
use anyhow::Result;
use std::path::Path;

/// Renders grids for the console
pub struct GridRenderer;

impl GridRenderer {
    /// Render a grid with the classic filled/empty square glyphs
    pub fn format_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                output.push(if grid.cell_is_alive(row, col) { '■' } else { '□' });
                if col < grid.cols() - 1 {
                    output.push(' ');
                }
            }
            output.push('\n');
        }
        output
    }

    /// Render a grid with row and column numbers
    pub fn format_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..grid.cols() {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..grid.rows() {
            output.push_str(&format!("{:2} ", row % 100));
            for col in 0..grid.cols() {
                output.push_str(if grid.cell_is_alive(row, col) { " ■" } else { " □" });
            }
            output.push('\n');
        }

        output
    }

    /// One animation frame: leading blank lines push the previous frame
    /// out of view, the way the original console animation worked
    pub fn format_frame(grid: &Grid, generation: usize) -> String {
        format!(
            "{}Generation {} (living: {}):\n{}",
            "\n".repeat(20),
            generation,
            grid.live_count(),
            Self::format_compact(grid)
        )
    }
}

/// Formats and saves run reports
pub struct RunFormatter;

impl RunFormatter {
    /// Format a run report for console output
    pub fn format_report(report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str("=== Run Summary ===\n");
        let outcome = match report.outcome {
            Outcome::Settled => "Settled (terminal state reached)",
            Outcome::GenerationLimit => "Generation limit reached",
        };
        output.push_str(&format!("Outcome: {}\n", outcome));
        output.push_str(&format!("Generations: {}\n", report.generations));
        output.push_str(&format!("Grid: {}x{}\n", report.rows, report.cols));
        output.push_str(&format!("Living cells: {}\n", report.live_cells));

        output
    }

    /// Save a run report in the configured format
    pub fn save_report<P: AsRef<Path>>(
        report: &RunReport,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                let mut content = Self::format_report(report);
                content.push_str("\nFinal grid:\n");
                content.push_str(&report.final_grid);
                std::fs::write(output_dir.join("run_report.txt"), content)?;
            }
            OutputFormat::Json => {
                report.save_to_file(output_dir.join("run_report.json"))?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SeedSource;
    use crate::simulation::Simulation;
    use tempfile::tempdir;

    fn blinker() -> Grid {
        Grid::new(3, 3, &SeedSource::Cells(vec![(1, 0), (1, 1), (1, 2)])).unwrap()
    }

    #[test]
    fn test_compact_formatting() {
        let compact = GridRenderer::format_compact(&blinker());
        assert_eq!(compact.lines().count(), 3);
        assert!(compact.contains('■'));
        assert!(compact.contains('□'));
        assert!(compact.starts_with("□ □ □\n■ ■ ■\n"));
    }

    #[test]
    fn test_coordinate_formatting() {
        let with_coords = GridRenderer::format_with_coords(&blinker());
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains("\n 1  ■ ■ ■\n"));
    }

    #[test]
    fn test_report_formatting() {
        let mut sim = Simulation::new(blinker(), Some(10));
        let report = sim.run();

        let formatted = RunFormatter::format_report(&report);
        assert!(formatted.contains("Generation limit reached"));
        assert!(formatted.contains("Generations: 10"));
        assert!(formatted.contains("Grid: 3x3"));
    }

    #[test]
    fn test_save_report_json() {
        let temp_dir = tempdir().unwrap();
        let mut sim = Simulation::new(blinker(), Some(4));
        let report = sim.run();

        RunFormatter::save_report(&report, temp_dir.path(), &OutputFormat::Json).unwrap();
        let path = temp_dir.path().join("run_report.json");
        assert!(path.exists());

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: RunReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.generations, 4);
    }

    #[test]
    fn test_save_report_text() {
        let temp_dir = tempdir().unwrap();
        let mut sim = Simulation::new(blinker(), Some(4));
        let report = sim.run();

        RunFormatter::save_report(&report, temp_dir.path(), &OutputFormat::Text).unwrap();
        let content =
            std::fs::read_to_string(temp_dir.path().join("run_report.txt")).unwrap();
        assert!(content.contains("Final grid:"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
