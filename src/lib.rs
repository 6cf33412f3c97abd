//! Real-time Conway's Game of Life simulator
//!
//! The `game_of_life` module is the engine-agnostic simulation core: a grid
//! of cells carrying consecutive-alive generation counts, stepped under
//! B3/S23 rules and seeded randomly or from named patterns. The `config`
//! and `utils` modules plus the CLI binary form a terminal host around it.

pub mod config;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{CellState, ColorRamp, Grid, GridError, SimulationEngine};

use anyhow::Result;

/// Build a seeded engine from validated settings
pub fn engine_from_settings(settings: &Settings) -> Result<SimulationEngine> {
    settings.validate()?;

    let grid = Grid::new(settings.grid.width, settings.grid.height)?;
    let mut engine = match settings.simulation.rng_seed {
        Some(seed) => SimulationEngine::seeded(grid, seed),
        None => SimulationEngine::new(grid),
    };
    engine.seed(
        settings.simulation.seed_pattern,
        settings.simulation.spawn_chance_percent,
    );

    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::SeedPattern;

    #[test]
    fn test_engine_from_settings_seeds_grid() {
        let mut settings = Settings::default();
        settings.grid.width = 20;
        settings.grid.height = 15;
        settings.simulation.seed_pattern = SeedPattern::Acorn;

        let engine = engine_from_settings(&settings).unwrap();

        assert_eq!(engine.grid().width(), 20);
        assert_eq!(engine.grid().height(), 15);
        assert_eq!(engine.grid().alive_count(), 7);
    }

    #[test]
    fn test_engine_from_settings_rejects_invalid() {
        let mut settings = Settings::default();
        settings.grid.height = 0;

        assert!(engine_from_settings(&settings).is_err());
    }

    #[test]
    fn test_rng_seed_makes_runs_reproducible() {
        let mut settings = Settings::default();
        settings.simulation.rng_seed = Some(99);

        let first = engine_from_settings(&settings).unwrap();
        let second = engine_from_settings(&settings).unwrap();

        assert_eq!(first.grid(), second.grid());
    }
}
