//! Per-cell simulation state

/// State of a single cell: whether it is alive, and for how many consecutive
/// generations it has stayed alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellState {
    pub alive: bool,
    pub generation: u32,
}

impl CellState {
    /// A dead cell with no accumulated generations.
    pub const DEAD: Self = Self {
        alive: false,
        generation: 0,
    };

    /// A freshly seeded live cell. Seeding is a full overwrite, so the
    /// generation count starts at zero.
    pub const fn spawned() -> Self {
        Self {
            alive: true,
            generation: 0,
        }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Transition to the next tick given the precomputed next aliveness:
    /// a surviving or newborn cell accumulates one generation, a dead cell
    /// resets to zero.
    pub const fn advance(self, alive_next: bool) -> Self {
        if alive_next {
            Self {
                alive: true,
                generation: self.generation.saturating_add(1),
            }
        } else {
            Self::DEAD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_starts_at_generation_zero() {
        let cell = CellState::spawned();
        assert!(cell.is_alive());
        assert_eq!(cell.generation, 0);
    }

    #[test]
    fn test_generation_accumulates_while_alive() {
        let mut cell = CellState::spawned();
        cell = cell.advance(true);
        assert_eq!(cell.generation, 1);
        cell = cell.advance(true);
        assert_eq!(cell.generation, 2);
    }

    #[test]
    fn test_generation_resets_on_death() {
        let mut cell = CellState::spawned();
        cell = cell.advance(true);
        cell = cell.advance(true);
        cell = cell.advance(false);
        assert_eq!(cell, CellState::DEAD);

        // Staying dead keeps the count at zero
        cell = cell.advance(false);
        assert_eq!(cell.generation, 0);
    }

    #[test]
    fn test_newborn_cell_reaches_generation_one() {
        let cell = CellState::DEAD.advance(true);
        assert!(cell.alive);
        assert_eq!(cell.generation, 1);
    }
}
