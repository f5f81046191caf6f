use rand::Rng;
use thiserror::Error;

/// Coordinate deltas of the 8 cells surrounding a cell.
///
/// Candidates that fall outside the board are skipped, never wrapped, so edge
/// cells simply have fewer neighbors.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
];

/// A fixed-size board of cells, stored row-major.
///
/// Dimensions never change after creation. Simulation steps replace the whole
/// value rather than mutating it in place, so a reader holding a `Grid` never
/// observes a partially-updated generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Liveness of each cell
    cells: Vec<bool>,

    /// Number of rows on the board
    rows: usize,

    /// Number of columns on the board
    cols: usize,
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Unexpected character {ch:?} on line {line}")]
    UnknownChar { ch: char, line: usize },

    #[error("Pattern contains no cells")]
    Empty,

    #[error("Pattern is {rows}x{cols}, which does not fit on a {board_rows}x{board_cols} board")]
    DoesNotFit {
        rows: usize,
        cols: usize,
        board_rows: usize,
        board_cols: usize,
    },
}

impl Grid {
    /// Create a board with every cell dead.
    pub fn dead(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a board where each cell is independently alive with probability
    /// `alive_probability`, drawn from `rng`.
    pub fn random<R: Rng>(rows: usize, cols: usize, alive_probability: f64, rng: &mut R) -> Self {
        let cells = (0..rows * cols)
            .map(|_| rng.gen_bool(alive_probability))
            .collect();

        Self { cells, rows, cols }
    }

    /// A freshly randomized board with the same dimensions as `self`.
    pub fn reseed<R: Rng>(&self, alive_probability: f64, rng: &mut R) -> Self {
        Self::random(self.rows, self.cols, alive_probability, rng)
    }

    /// Parse a plaintext pattern: one line per row, `.` for a dead cell, `#`
    /// or `O` for a live one. Lines starting with `!` are comments. Short
    /// lines are padded with dead cells up to the widest row.
    ///
    /// See: https://conwaylife.com/wiki/Plaintext
    pub fn from_plaintext(text: &str) -> Result<Self, PatternError> {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| !line.starts_with('!'))
            .collect();

        let rows = lines.len();
        let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        if rows == 0 || cols == 0 {
            return Err(PatternError::Empty);
        }

        let mut grid = Self::dead(rows, cols);

        for (i, line) in lines.iter().enumerate() {
            for (j, ch) in line.chars().enumerate() {
                match ch {
                    '.' | ' ' => {}
                    '#' | 'O' | '*' => grid.set(i, j, true),
                    ch => return Err(PatternError::UnknownChar { ch, line: i + 1 }),
                }
            }
        }

        Ok(grid)
    }

    /// Place `pattern` in the center of an otherwise dead `rows`x`cols` board.
    pub fn with_pattern(rows: usize, cols: usize, pattern: &Grid) -> Result<Self, PatternError> {
        if pattern.rows > rows || pattern.cols > cols {
            return Err(PatternError::DoesNotFit {
                rows: pattern.rows,
                cols: pattern.cols,
                board_rows: rows,
                board_cols: cols,
            });
        }

        let dr = (rows - pattern.rows) / 2;
        let dc = (cols - pattern.cols) / 2;

        let mut grid = Self::dead(rows, cols);

        for i in 0..pattern.rows {
            for j in 0..pattern.cols {
                if pattern.get(i, j) {
                    grid.set(dr + i, dc + j, true);
                }
            }
        }

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.index(row, col);
        self.cells[i] = alive;
    }

    /// Number of live cells on the board.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows, "row is out of bounds");
        assert!(col < self.cols, "col is out of bounds");

        row * self.cols + col
    }
}
