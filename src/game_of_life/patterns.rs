//! Named seed patterns for the simulator

use anyhow::anyhow;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed Life structure as an immutable 0/1 matrix. `rows[row][col]` with
/// the row index mapping to the vertical axis.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    rows: &'static [&'static [u8]],
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// Coordinates of the pattern's live cells as `(row, col)` pairs
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|&(_, &value)| value == 1)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn live_count(&self) -> usize {
        self.live_cells().count()
    }
}

/// Acorn - methuselah that grows for thousands of generations before settling
pub static ACORN: Pattern = Pattern {
    name: "Acorn",
    rows: &[
        &[0, 1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 1, 0, 0, 0],
        &[1, 1, 0, 0, 1, 1, 1],
    ],
};

/// Pulsar - the classic period-3 oscillator
pub static PULSAR: Pattern = Pattern {
    name: "Pulsar",
    rows: &[
        &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    ],
};

/// Gosper Glider Gun - emits a glider every 30 generations
pub static GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    rows: &[
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 1, 1,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 1, 1,
        ],
        &[
            1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
        ],
        &[
            1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
        ],
        &[
            0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 0, 0,
        ],
    ],
};

/// Seeding directive selectable from configuration or the command line:
/// either one of the named patterns, or `Randomize`, which fills the grid
/// from the RNG instead of stamping a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPattern {
    Randomize,
    Acorn,
    Pulsar,
    GosperGliderGun,
}

impl SeedPattern {
    pub const ALL: [SeedPattern; 4] = [
        SeedPattern::Randomize,
        SeedPattern::Acorn,
        SeedPattern::Pulsar,
        SeedPattern::GosperGliderGun,
    ];

    /// The matrix to stamp, or `None` for the randomize directive
    pub const fn matrix(self) -> Option<&'static Pattern> {
        match self {
            SeedPattern::Randomize => None,
            SeedPattern::Acorn => Some(&ACORN),
            SeedPattern::Pulsar => Some(&PULSAR),
            SeedPattern::GosperGliderGun => Some(&GOSPER_GLIDER_GUN),
        }
    }

    /// Name as written in configuration files
    pub const fn config_name(self) -> &'static str {
        match self {
            SeedPattern::Randomize => "randomize",
            SeedPattern::Acorn => "acorn",
            SeedPattern::Pulsar => "pulsar",
            SeedPattern::GosperGliderGun => "gosper_glider_gun",
        }
    }
}

impl fmt::Display for SeedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.matrix() {
            Some(pattern) => write!(f, "{}", pattern.name),
            None => write!(f, "Randomize"),
        }
    }
}

impl FromStr for SeedPattern {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.config_name() == normalized)
            .ok_or_else(|| {
                anyhow!(
                    "unknown pattern '{}', expected one of: {}",
                    s,
                    Self::ALL.iter().map(|p| p.config_name()).join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_dimensions() {
        assert_eq!((ACORN.width(), ACORN.height()), (7, 3));
        assert_eq!((PULSAR.width(), PULSAR.height()), (13, 13));
        assert_eq!((GOSPER_GLIDER_GUN.width(), GOSPER_GLIDER_GUN.height()), (36, 9));
    }

    #[test]
    fn test_pattern_populations() {
        assert_eq!(ACORN.live_count(), 7);
        assert_eq!(PULSAR.live_count(), 48);
        assert_eq!(GOSPER_GLIDER_GUN.live_count(), 36);
    }

    #[test]
    fn test_matrices_are_rectangular() {
        for seed in SeedPattern::ALL {
            if let Some(pattern) = seed.matrix() {
                let width = pattern.width();
                assert!(width > 0);
                for row in 0..pattern.height() {
                    assert_eq!(pattern.rows[row].len(), width, "{} row {}", pattern.name, row);
                }
            }
        }
    }

    #[test]
    fn test_live_cells_match_matrix() {
        // The acorn's seven cells, row by row
        let cells: Vec<(usize, usize)> = ACORN.live_cells().collect();
        assert_eq!(
            cells,
            vec![(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)]
        );
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("acorn".parse::<SeedPattern>().unwrap(), SeedPattern::Acorn);
        assert_eq!(
            "gosper_glider_gun".parse::<SeedPattern>().unwrap(),
            SeedPattern::GosperGliderGun
        );
        assert_eq!(
            "Gosper-Glider-Gun".parse::<SeedPattern>().unwrap(),
            SeedPattern::GosperGliderGun
        );
        assert_eq!(
            "Randomize".parse::<SeedPattern>().unwrap(),
            SeedPattern::Randomize
        );
        assert!("flower".parse::<SeedPattern>().is_err());
    }

    #[test]
    fn test_randomize_has_no_matrix() {
        assert!(SeedPattern::Randomize.matrix().is_none());
        for seed in [SeedPattern::Acorn, SeedPattern::Pulsar, SeedPattern::GosperGliderGun] {
            assert!(seed.matrix().is_some());
        }
    }
}
