use std::fmt::Write;

use crate::Generation;
use crate::grid::Grid;

/// A live cell fills its square; a dead cell leaves it blank. Cells are two
/// columns wide so they come out roughly square in a terminal font.
const ALIVE: &str = "██";
const DEAD: &str = "  ";

/// Text framebuffer for the board and its status lines.
///
/// Rendering produces plain text; color is applied at the terminal boundary
/// by the caller.
pub struct Frame {
    /// The frame buffer
    fb: String,
}

impl Frame {
    pub fn new(rows: usize, cols: usize) -> Self {
        // Every board cell is 2 columns wide and the outline characters are
        // 3 bytes each in UTF-8, so a full frame needs at most
        // 3 * (rows + 2) * (2 * cols + 2) bytes plus newlines and the two
        // status lines.
        let fb = String::with_capacity(3 * (rows + 2) * (2 * cols + 3) + 96);

        Self { fb }
    }

    /// Render the board, the generation readout, and the control legend.
    pub fn render(&mut self, grid: &Grid, generation: Generation, running: bool) -> &str {
        self.fb.clear();

        let cols = grid.cols();

        self.fb.push('┌');
        for _ in 0..cols {
            self.fb.push_str("──");
        }
        self.fb.push('┐');
        self.fb.push('\n');

        for row in 0..grid.rows() {
            self.fb.push('│');

            for col in 0..cols {
                self.fb.push_str(if grid.get(row, col) { ALIVE } else { DEAD });
            }

            self.fb.push('│');
            self.fb.push('\n');
        }

        self.fb.push('└');
        for _ in 0..cols {
            self.fb.push_str("──");
        }
        self.fb.push('┘');
        self.fb.push('\n');

        let label = if running { "STOP" } else { "PLAY" };

        let _ = writeln!(self.fb, "GENERATION: {generation}");
        let _ = writeln!(self.fb, "[SPACE] {label}  [R] RESET  [Q] QUIT");

        &self.fb
    }
}
