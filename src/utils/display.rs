//! Terminal formatting for grids and status output

use crate::game_of_life::{ColorRamp, Grid, Rgb};

/// ANSI sequence that clears the screen and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.height() * (grid.width() + 1));
        for (x, _, cell) in grid.iter_cells() {
            output.push(if cell.is_alive() { '█' } else { '·' });
            if x + 1 == grid.width() {
                output.push('\n');
            }
        }
        output
    }

    /// Format a grid with live cells tinted by their generation count.
    /// Falls back to the plain glyphs when the terminal does not do color.
    pub fn format_colored(grid: &Grid, ramp: &ColorRamp) -> String {
        if !ColorOutput::supports_color() {
            return Self::format_compact(grid);
        }

        let mut output = String::new();
        for (x, _, cell) in grid.iter_cells() {
            if cell.is_alive() {
                output.push_str(&ColorOutput::truecolor("█", ramp.color_for(cell.generation)));
            } else {
                output.push(' ');
            }
            if x + 1 == grid.width() {
                output.push('\n');
            }
        }
        output
    }

    /// Format a grid with row and column indices for inspection
    pub fn format_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for (x, y, cell) in grid.iter_cells() {
            if x == 0 {
                output.push_str(&format!("{:2} ", y));
            }
            output.push_str(if cell.is_alive() { "██" } else { "··" });
            if x + 1 == grid.width() {
                output.push('\n');
            }
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Check if the terminal supports ANSI color sequences
    pub fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    fn colored(text: &str, code: &str) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    /// Format text with a 24-bit foreground color
    pub fn truecolor(text: &str, color: Rgb) -> String {
        Self::colored(text, &format!("38;2;{};{};{}", color.r, color.g, color.b))
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, "32")
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, "31")
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, "33")
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, "34")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::CellState;

    fn sample_grid() -> Grid {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(0, 0, CellState::spawned()).unwrap();
        grid.set(2, 1, CellState::spawned()).unwrap();
        grid
    }

    #[test]
    fn test_compact_formatting() {
        let compact = GridFormatter::format_compact(&sample_grid());
        assert_eq!(compact, "█··\n··█\n");
    }

    #[test]
    fn test_coordinate_formatting() {
        let with_coords = GridFormatter::format_with_coords(&sample_grid());
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains("██"));
        assert!(with_coords.lines().count() == 3);
    }

    #[test]
    fn test_colored_formatting_covers_every_cell() {
        let ramp = ColorRamp::default();
        let colored = GridFormatter::format_colored(&sample_grid(), &ramp);

        // Two rows regardless of color support
        assert_eq!(colored.lines().count(), 2);
        assert!(colored.contains('█'));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", "31");
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));

        let tinted = ColorOutput::truecolor("x", Rgb { r: 1, g: 2, b: 3 });
        assert!(tinted.contains('x'));
    }
}
