//! Configuration settings for the Game of Life simulator

use crate::game_of_life::{ColorRamp, Rgb, SeedPattern};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl GridConfig {
    /// Derive grid dimensions from a viewport extent and cell size, the way
    /// the visualizer sizes its field: enough cells to cover the extent plus
    /// a one-cell border on each edge.
    pub fn from_viewport(view_width: f64, view_height: f64, cell_size: f64) -> Self {
        Self {
            width: (view_width / cell_size + 2.0).floor() as usize,
            height: (view_height / cell_size + 2.0).floor() as usize,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Percentage chance for each cell to start alive when randomizing
    pub spawn_chance_percent: u8,
    /// Generations per second the host loop aims for; advisory cadence only
    pub target_frame_rate: u32,
    pub seed_pattern: SeedPattern,
    /// Fixed RNG seed for reproducible randomized runs
    pub rng_seed: Option<u64>,
    /// Number of generations to run; `None` means run until interrupted
    pub generations: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub start_color: String,
    pub end_color: String,
    /// Generation count at which a live cell reaches the ramp's end color
    pub max_generations: u32,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl DisplayConfig {
    /// Build the generation-to-color ramp from the configured endpoints
    pub fn color_ramp(&self) -> Result<ColorRamp> {
        Ok(ColorRamp {
            start: Rgb::from_hex(&self.start_color).context("invalid display.start_color")?,
            end: Rgb::from_hex(&self.end_color).context("invalid display.end_color")?,
            max_generations: self.max_generations,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 80,
                height: 40,
            },
            simulation: SimulationConfig {
                spawn_chance_percent: 20,
                target_frame_rate: 10,
                seed_pattern: SeedPattern::Randomize,
                rng_seed: None,
                generations: None,
            },
            display: DisplayConfig {
                start_color: "#674188".to_string(),
                end_color: "#F7EFE5".to_string(),
                max_generations: 5,
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width == 0 || self.grid.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be at least 1x1, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if self.simulation.spawn_chance_percent > 100 {
            anyhow::bail!(
                "Spawn chance must be a percentage between 0 and 100, got {}",
                self.simulation.spawn_chance_percent
            );
        }

        if self.simulation.target_frame_rate == 0 {
            anyhow::bail!("Target frame rate must be positive");
        }

        if self.display.max_generations == 0 {
            anyhow::bail!("Display max_generations must be positive");
        }

        self.display.color_ramp()?;

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(spawn_chance) = cli_overrides.spawn_chance_percent {
            self.simulation.spawn_chance_percent = spawn_chance;
        }
        if let Some(frame_rate) = cli_overrides.target_frame_rate {
            self.simulation.target_frame_rate = frame_rate;
        }
        if let Some(seed_pattern) = cli_overrides.seed_pattern {
            self.simulation.seed_pattern = seed_pattern;
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.simulation.rng_seed = Some(rng_seed);
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = Some(generations);
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub spawn_chance_percent: Option<u8>,
    pub target_frame_rate: Option<u32>,
    pub seed_pattern: Option<SeedPattern>,
    pub rng_seed: Option<u64>,
    pub generations: Option<u64>,
}
