use crate::grid::Grid;
use crate::grid::NEIGHBOR_OFFSETS;

/// Compute the next generation of `grid` under the standard life rules
/// (B3/S23) with clipped edges.
///
/// Every neighbor count reads the previous generation only, so the whole
/// board updates simultaneously. Returns a fresh board; the input is never
/// mutated.
pub fn step(grid: &Grid) -> Grid {
    let mut next = grid.clone();

    for i in 0..grid.rows() {
        for j in 0..grid.cols() {
            let neighbors = live_neighbors(grid, i, j);

            if !(2..=3).contains(&neighbors) {
                // Under- or over-population kills the cell regardless of its
                // current state
                next.set(i, j, false);
            } else if !grid.get(i, j) && neighbors == 3 {
                next.set(i, j, true);
            }

            // Otherwise the cell keeps its state: alive with 2 or 3
            // neighbors survives, dead without exactly 3 stays dead
        }
    }

    next
}

/// Count the live cells among the 8 neighbors of `(row, col)`.
///
/// Out-of-bounds candidates contribute 0.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for (dr, dc) in NEIGHBOR_OFFSETS {
        let r = row as isize + dr;
        let c = col as isize + dc;

        let in_bounds =
            r >= 0 && (r as usize) < grid.rows() && c >= 0 && (c as usize) < grid.cols();

        if in_bounds && grid.get(r as usize, c as usize) {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod test {
    use crate::grid::Grid;

    use super::live_neighbors;
    use super::step;

    fn grid_of(pattern: &str) -> Grid {
        Grid::from_plaintext(pattern).unwrap()
    }

    #[test]
    fn underpopulated_cells_die() {
        // Lone cell and a pair; every live cell has at most 1 neighbor
        let grid = grid_of(
            "#....\n\
             .....\n\
             ..##.\n\
             .....\n",
        );

        let next = step(&grid);

        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn overpopulated_cells_die() {
        // The center of a plus sign has 4 neighbors
        let grid = grid_of(
            ".#.\n\
             ###\n\
             .#.\n",
        );

        let next = step(&grid);

        assert!(!next.get(1, 1));
    }

    #[test]
    fn cells_with_two_or_three_neighbors_survive() {
        let grid = grid_of(
            ".#.\n\
             ###\n\
             .#.\n",
        );

        // Each arm of the plus has 3 neighbors (two adjacent arms and the
        // center)
        let next = step(&grid);

        assert!(next.get(0, 1));
        assert!(next.get(1, 0));
        assert!(next.get(1, 2));
        assert!(next.get(2, 1));
    }

    #[test]
    fn dead_cells_with_three_neighbors_spawn() {
        let grid = grid_of(
            "##.\n\
             #..\n\
             ...\n",
        );

        let next = step(&grid);

        assert!(next.get(1, 1));
    }

    #[test]
    fn edges_clip_instead_of_wrapping() {
        // Corner cell (0,0) sees only its 3 in-bounds neighbors, all alive,
        // so it spawns. Nothing outside the board contributes.
        let grid = grid_of(
            ".#.\n\
             ##.\n\
             ...\n",
        );

        assert_eq!(live_neighbors(&grid, 0, 0), 3);

        let next = step(&grid);
        let want = grid_of(
            "##.\n\
             ##.\n\
             ...\n",
        );

        assert_eq!(next, want);
    }

    #[test]
    fn empty_board_is_a_fixpoint() {
        let grid = Grid::dead(50, 50);

        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn block_is_a_still_life() {
        let grid = grid_of(
            "....\n\
             .##.\n\
             .##.\n\
             ....\n",
        );

        assert_eq!(step(&grid), grid);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = grid_of(
            ".....\n\
             .....\n\
             .###.\n\
             .....\n\
             .....\n",
        );
        let vertical = grid_of(
            ".....\n\
             ..#..\n\
             ..#..\n\
             ..#..\n\
             .....\n",
        );

        assert_eq!(step(&horizontal), vertical);
        assert_eq!(step(&vertical), horizontal);
    }
}
