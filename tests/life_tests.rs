use std::time::Instant;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use gridlife::config::Config;
use gridlife::grid::Grid;
use gridlife::rules;
use gridlife::sim::Simulation;

fn grids() -> impl Strategy<Value = Grid> {
    (1usize..16, 1usize..16).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(any::<bool>(), rows * cols).prop_map(move |cells| {
            let mut grid = Grid::dead(rows, cols);

            for (i, alive) in cells.into_iter().enumerate() {
                grid.set(i / cols, i % cols, alive);
            }

            grid
        })
    })
}

proptest! {
    #[test]
    fn step_is_deterministic(grid in grids()) {
        prop_assert_eq!(rules::step(&grid), rules::step(&grid));
    }

    #[test]
    fn step_preserves_dimensions(grid in grids()) {
        let next = rules::step(&grid);

        prop_assert_eq!(next.rows(), grid.rows());
        prop_assert_eq!(next.cols(), grid.cols());
    }

    #[test]
    fn step_never_mutates_its_input(grid in grids()) {
        let before = grid.clone();
        let _ = rules::step(&grid);

        prop_assert_eq!(grid, before);
    }

    #[test]
    fn live_neighbors_never_exceeds_eight(grid in grids()) {
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                prop_assert!(rules::live_neighbors(&grid, row, col) <= 8);
            }
        }
    }
}

#[test]
fn full_session_lifecycle() {
    let config = Config::default();
    let mut sim = Simulation::with_rng(&config, StdRng::seed_from_u64(9), Instant::now());

    // Runs on load
    assert!(sim.is_running());

    for want in 1..=10 {
        let due = sim.next_due().expect("running simulation schedules ticks");
        assert!(sim.poll(due));
        assert_eq!(sim.generation(), want);
    }

    // Pause; the pending tick is cancelled, so nothing further happens
    sim.toggle_running(Instant::now());
    assert!(sim.next_due().is_none());
    assert_eq!(sim.generation(), 10);

    // Resume and take one more step
    let now = Instant::now();
    sim.toggle_running(now);
    assert!(sim.poll(now));
    assert_eq!(sim.generation(), 11);

    // Reset stops the run and zeroes the counter
    sim.reset();
    assert_eq!(sim.generation(), 0);
    assert!(!sim.is_running());
    assert_eq!(sim.grid().rows(), config.rows);
    assert_eq!(sim.grid().cols(), config.cols);
}

#[test]
fn reset_distribution_is_independent_of_the_previous_board() {
    let config = Config::default();

    // Two simulations whose boards have diverged wildly still reseed to the
    // same density band
    for seed in [2, 3] {
        let mut sim = Simulation::with_rng(&config, StdRng::seed_from_u64(seed), Instant::now());

        for _ in 0..seed * 40 {
            let due = sim.next_due().unwrap();
            sim.poll(due);
        }

        sim.reset();

        let live = sim.grid().live_count();
        assert!((1100..=1400).contains(&live), "live count was {live}");
    }
}
