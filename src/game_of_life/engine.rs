//! Simulation driver: owns the grid and advances it one generation per tick

use super::{rules, CellState, Grid, Pattern, SeedPattern};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Owns the authoritative grid and steps it under B3/S23. Every mutating
/// operation replaces cell state for the whole grid at once; there is no
/// partial-failure state.
pub struct SimulationEngine {
    grid: Grid,
    rng: StdRng,
    generation: u64,
}

impl SimulationEngine {
    /// Engine with an OS-seeded RNG
    pub fn new(grid: Grid) -> Self {
        Self::with_rng(grid, StdRng::from_os_rng())
    }

    /// Engine with a deterministic RNG for reproducible runs
    pub fn seeded(grid: Grid, rng_seed: u64) -> Self {
        Self::with_rng(grid, StdRng::seed_from_u64(rng_seed))
    }

    fn with_rng(grid: Grid, rng: StdRng) -> Self {
        Self {
            grid,
            rng,
            generation: 0,
        }
    }

    /// Read access to the current grid state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ticks advanced since the last seeding
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Overwrite every cell independently: alive with probability
    /// `spawn_chance_percent / 100`, dead otherwise. Freshly seeded cells
    /// start with a zero generation count; values above 100 behave as 100.
    pub fn seed_random(&mut self, spawn_chance_percent: u8) {
        for cell in self.grid.cells_mut() {
            *cell = if self.rng.random_range(0..100) < spawn_chance_percent {
                CellState::spawned()
            } else {
                CellState::DEAD
            };
        }
        self.generation = 0;
    }

    /// Reset every cell to dead with a zero generation count
    pub fn clear_all(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Clear the grid, then stamp `pattern` centered on it. Pattern cells
    /// that fall outside the grid are silently dropped.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.grid.clear();
        self.generation = 0;

        let start_x = self.grid.width() as i64 / 2 - pattern.width() as i64 / 2;
        let start_y = self.grid.height() as i64 / 2 - pattern.height() as i64 / 2;

        for (row, col) in pattern.live_cells() {
            let x = start_x + col as i64;
            let y = start_y + row as i64;
            if (0..self.grid.width() as i64).contains(&x)
                && (0..self.grid.height() as i64).contains(&y)
            {
                self.grid.put(x as usize, y as usize, CellState::spawned());
            }
        }
    }

    /// Seed according to a named directive: `Randomize` rolls the RNG for
    /// each cell, concrete patterns are stamped centered
    pub fn seed(&mut self, seed: SeedPattern, spawn_chance_percent: u8) {
        match seed.matrix() {
            Some(pattern) => self.apply_pattern(pattern),
            None => self.seed_random(spawn_chance_percent),
        }
    }

    /// Advance one generation. Neighbor counts are taken against a full
    /// snapshot of the current grid before any cell is committed, so no
    /// cell's next state can influence another cell's count within a step.
    pub fn step(&mut self) {
        let next = rules::next_generation(&self.grid);
        self.grid.commit_generation(&next);
        self.generation += 1;
    }
}
