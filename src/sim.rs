use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::Generation;
use crate::config::Config;
use crate::driver::Driver;
use crate::grid::Grid;
use crate::rules;

/// The single authoritative owner of the simulation state.
///
/// The board, the generation counter, and the running flag are only ever
/// updated together through this struct, so a reader always observes a
/// consistent (grid, generation) pair.
pub struct Simulation<R: Rng> {
    grid: Grid,
    generation: Generation,
    running: bool,
    driver: Driver,
    alive_probability: f64,
    rng: R,
}

impl Simulation<StdRng> {
    /// Start a simulation with a randomly seeded board.
    ///
    /// The simulation starts running, with its first step due immediately.
    pub fn new(config: &Config, now: Instant) -> Self {
        Self::with_rng(config, StdRng::from_entropy(), now)
    }

    /// Start a simulation from a prepared board instead of a random seed.
    ///
    /// Resets still reseed randomly, with the dimensions of `grid`.
    pub fn from_grid(config: &Config, grid: Grid, now: Instant) -> Self {
        let mut sim = Self::with_rng(config, StdRng::from_entropy(), now);
        sim.grid = grid;
        sim
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(config: &Config, mut rng: R, now: Instant) -> Self {
        let grid = Grid::random(config.rows, config.cols, config.alive_probability, &mut rng);

        let mut driver = Driver::new(config.step_delay);
        driver.start(now);

        Self {
            grid,
            generation: 0,
            running: true,
            driver,
            alive_probability: config.alive_probability,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Due time of the next scheduled step, if the simulation is running.
    pub fn next_due(&self) -> Option<Instant> {
        self.driver.next_due()
    }

    /// Flip the running flag.
    ///
    /// Resuming starts a fresh driver chain; pausing cancels the pending
    /// tick, so no extra step can slip in after the pause.
    pub fn toggle_running(&mut self, now: Instant) {
        self.running = !self.running;

        if self.running {
            self.driver.start(now);
        } else {
            self.driver.cancel();
        }

        debug!(running = self.running, "running flag toggled");
    }

    /// Stop the simulation, zero the generation counter, and reseed the
    /// board.
    pub fn reset(&mut self) {
        self.running = false;
        self.driver.cancel();
        self.generation = 0;
        self.grid = self.grid.reseed(self.alive_probability, &mut self.rng);

        debug!("simulation reset");
    }

    /// Perform one simulation step if a tick is due.
    ///
    /// Commits the next board and the incremented generation together, then
    /// schedules the follow-up tick. Returns whether a step was taken.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(tick) = self.driver.poll(now) else {
            return false;
        };

        // The flag is consulted at the start of the tick, per the driver
        // state machine
        if !self.running {
            return false;
        }

        self.grid = rules::step(&self.grid);
        self.generation += 1;

        if self.running {
            self.driver.reschedule(tick, now);
        }

        true
    }
}
