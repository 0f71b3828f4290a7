//! File and text formats for seed grids

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a text file.
/// Format: each line is a row, '1' for alive cells and '0' for dead cells.
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read seed file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse seed file: {}", path.as_ref().display()))
}

/// Parse a grid from its text representation
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Seed file is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut rows = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                line.len(),
                width
            );
        }

        let mut row = Vec::with_capacity(width);
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        rows.push(row);
    }

    Grid::from_rows(&rows).context("Seed grid has invalid dimensions")
}

/// Convert a grid to its text representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows() * (grid.cols() + 1));

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            result.push(if grid.cell_is_alive(row, col) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Parse a 1-based coordinate list like `"(1, 1), (1, 2), (1, 3)"` into
/// 0-based (row, col) pairs.
///
/// This is the syntax the interactive prompt accepts; translation to
/// 0-based happens here so the engine only ever sees internal
/// coordinates. Bounds checking against a concrete grid is left to grid
/// construction.
pub fn parse_coordinate_list(input: &str) -> Result<Vec<(usize, usize)>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Coordinate list is empty");
    }

    let mut coords = Vec::new();

    for part in trimmed.split("),") {
        let pair = part.trim().trim_start_matches('(').trim_end_matches(')');
        let fields: Vec<&str> = pair.split(',').map(|field| field.trim()).collect();

        if fields.len() != 2 {
            anyhow::bail!("Expected a (row, col) pair, got '{}'", part.trim());
        }

        let row: usize = fields[0]
            .parse()
            .with_context(|| format!("Invalid row number '{}'", fields[0]))?;
        let col: usize = fields[1]
            .parse()
            .with_context(|| format!("Invalid column number '{}'", fields[1]))?;

        if row == 0 || col == 0 {
            anyhow::bail!("Coordinates are 1-based; ({}, {}) is invalid", row, col);
        }

        coords.push((row - 1, col - 1));
    }

    Ok(coords)
}

/// Create example seed files for getting started
pub fn create_example_seeds<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Glider pattern
    let glider_content = "00100\n10100\n01100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    // Blinker pattern (period-2 oscillator)
    let blinker_content = "000\n111\n000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Block pattern (still life)
    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content)
        .context("Failed to write block.txt")?;

    // Beacon pattern (period-2 oscillator)
    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid_from_string() {
        let content = "010\n101\n010\n";
        let grid = parse_grid_from_string(content).unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.live_count(), 4);
        assert!(grid.cell_is_alive(0, 1));
        assert!(grid.cell_is_alive(1, 0));
        assert!(grid.cell_is_alive(1, 2));
        assert!(grid.cell_is_alive(2, 1));
    }

    #[test]
    fn test_grid_to_string() {
        let grid = Grid::from_rows(&[
            vec![false, true, false],
            vec![true, false, true],
            vec![false, true, false],
        ])
        .unwrap();

        assert_eq!(grid_to_string(&grid), "010\n101\n010\n");
    }

    #[test]
    fn test_round_trip() {
        let original = "010\n101\n010\n";
        let grid = parse_grid_from_string(original).unwrap();
        assert_eq!(grid_to_string(&grid), original);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("seed.txt");

        let original = Grid::from_rows(&[
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, false],
        ])
        .unwrap();

        save_grid_to_file(&original, &file_path).unwrap();
        let loaded = load_grid_from_file(&file_path).unwrap();

        assert_eq!(loaded.rows(), original.rows());
        assert_eq!(loaded.cols(), original.cols());
        assert_eq!(loaded.live_cells(), original.live_cells());
    }

    #[test]
    fn test_invalid_input() {
        // Invalid character
        assert!(parse_grid_from_string("010\n1X1\n010\n").is_err());

        // Inconsistent row lengths
        assert!(parse_grid_from_string("010\n11\n010\n").is_err());

        // Empty content
        assert!(parse_grid_from_string("").is_err());

        // Too small for the engine
        assert!(parse_grid_from_string("01\n10\n").is_err());
    }

    #[test]
    fn test_parse_coordinate_list() {
        let coords = parse_coordinate_list("(1, 1), (1, 2), (2, 3)").unwrap();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 2)]);
    }

    #[test]
    fn test_parse_coordinate_list_tolerates_loose_spacing() {
        let coords = parse_coordinate_list(" (3,4),(5, 6) ").unwrap();
        assert_eq!(coords, vec![(2, 3), (4, 5)]);
    }

    #[test]
    fn test_parse_coordinate_list_rejects_bad_input() {
        assert!(parse_coordinate_list("").is_err());
        assert!(parse_coordinate_list("(1, 2, 3)").is_err());
        assert!(parse_coordinate_list("(a, 1)").is_err());
        // 1-based input, zero is out of range
        assert!(parse_coordinate_list("(0, 1)").is_err());
    }

    #[test]
    fn test_create_example_seeds() {
        let temp_dir = tempdir().unwrap();
        create_example_seeds(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("glider.txt").exists());
        assert!(temp_dir.path().join("blinker.txt").exists());
        assert!(temp_dir.path().join("block.txt").exists());
        assert!(temp_dir.path().join("beacon.txt").exists());

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.rows(), 5);
        assert_eq!(glider.cols(), 5);
        assert_eq!(glider.live_count(), 5);
    }
}
