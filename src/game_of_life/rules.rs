//! Conway's Game of Life transition rules (B3/S23)

use super::Grid;
use rayon::prelude::*;

/// Maximum possible neighbor count in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

/// Whether a cell is alive in the next generation given its current state
/// and live-neighbor count
pub const fn next_alive(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// Compute next-generation aliveness for every cell, row-major, from a full
/// snapshot of `grid`. No cell is mutated while neighbor counts are taken,
/// so the result is independent of evaluation order.
pub fn next_generation(grid: &Grid) -> Vec<bool> {
    (0..grid.height())
        .into_par_iter()
        .flat_map(|y| {
            (0..grid.width()).into_par_iter().map(move |x| {
                let cell = grid.cell(x, y);
                next_alive(cell.alive, grid.count_alive_neighbors(x, y))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::CellState;

    #[test]
    fn test_rule_logic() {
        assert!(next_alive(true, 2)); // Survival with 2 neighbors
        assert!(next_alive(true, 3)); // Survival with 3 neighbors
        assert!(next_alive(false, 3)); // Birth with 3 neighbors

        assert!(!next_alive(true, 0)); // Underpopulation
        assert!(!next_alive(true, 1)); // Underpopulation
        assert!(!next_alive(true, 4)); // Overpopulation
        assert!(!next_alive(true, MAX_NEIGHBORS)); // Overpopulation
        assert!(!next_alive(false, 2)); // No spontaneous birth
        assert!(!next_alive(false, 0));
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let grid = Grid::new(5, 5).unwrap();
        let next = next_generation(&grid);

        assert!(next.iter().all(|&alive| !alive));
    }

    #[test]
    fn test_next_generation_is_row_major() {
        // A vertical blinker at x=1 becomes a horizontal one at y=1
        let mut grid = Grid::new(3, 3).unwrap();
        for y in 0..3 {
            grid.set(1, y, CellState::spawned()).unwrap();
        }

        let next = next_generation(&grid);
        assert_eq!(
            next,
            vec![false, false, false, true, true, true, false, false, false]
        );
    }
}
