use std::time::Duration;

/// Number of rows on the board
pub const NUM_ROWS: usize = 50;

/// Number of columns on the board
pub const NUM_COLS: usize = 50;

/// Delay between one step's completion and the next step's invocation
pub const STEP_DELAY: Duration = Duration::from_millis(20);

/// Probability that a cell starts alive when the board is (re)seeded
pub const ALIVE_PROBABILITY: f64 = 0.5;

/// Construction-time constants of the simulation.
///
/// These are fixed for the lifetime of the program; nothing reconfigures them
/// at runtime.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub step_delay: Duration,
    pub alive_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: NUM_ROWS,
            cols: NUM_COLS,
            step_delay: STEP_DELAY,
            alive_probability: ALIVE_PROBABILITY,
        }
    }
}
