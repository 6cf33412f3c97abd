//! Terminal host for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{ColorRamp, Grid, SeedPattern, SimulationEngine},
    utils::{
        display::{ColorOutput, GridFormatter, CLEAR_SCREEN},
        FrameClock,
    },
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Real-time Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width in cells (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height in cells (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Percentage chance for each cell to start alive (overrides config)
        #[arg(short, long)]
        spawn_chance: Option<u8>,

        /// Target generations per second (overrides config)
        #[arg(short, long)]
        fps: Option<u32>,

        /// Seed pattern: randomize, acorn, pulsar or gosper_glider_gun
        #[arg(short, long)]
        pattern: Option<String>,

        /// Number of generations to run; runs until interrupted when omitted
        #[arg(short, long)]
        generations: Option<u64>,

        /// RNG seed for reproducible randomized runs
        #[arg(long)]
        rng_seed: Option<u64>,

        /// Skip per-frame rendering and pacing; just run and summarize
        #[arg(short = 'q', long)]
        quiet: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the built-in seed patterns
    Patterns,

    /// Create an example configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            spawn_chance,
            fps,
            pattern,
            generations,
            rng_seed,
            quiet,
            verbose,
        } => {
            let seed_pattern = pattern
                .as_deref()
                .map(str::parse::<SeedPattern>)
                .transpose()
                .context("Invalid --pattern value")?;

            let overrides = CliOverrides {
                width,
                height,
                spawn_chance_percent: spawn_chance,
                target_frame_rate: fps,
                seed_pattern,
                rng_seed,
                generations,
            };
            run_command(config, overrides, quiet, verbose)
        }
        Commands::Patterns => patterns_command(),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

#[derive(Serialize)]
struct RunSummary {
    width: usize,
    height: usize,
    generations: u64,
    alive_cells: usize,
    elapsed_seconds: f64,
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    if quiet && settings.simulation.generations.is_none() {
        anyhow::bail!("--quiet needs a generation limit (--generations or config)");
    }

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.width, settings.grid.height);
        println!("  Seed pattern: {}", settings.simulation.seed_pattern);
        println!(
            "  Spawn chance: {}%",
            settings.simulation.spawn_chance_percent
        );
        println!(
            "  Frame rate: {}fps",
            settings.simulation.target_frame_rate
        );
        println!();
    }

    let mut engine = game_of_life_sim::engine_from_settings(&settings)
        .context("Failed to build simulation engine")?;
    let ramp = settings.display.color_ramp()?;
    let mut clock = FrameClock::new(settings.simulation.target_frame_rate);
    let start_time = Instant::now();

    loop {
        if !quiet {
            render_frame(engine.grid(), engine.generation(), &ramp);
        }

        if let Some(limit) = settings.simulation.generations {
            if engine.generation() >= limit {
                break;
            }
        }

        engine.step();

        if !quiet {
            clock.wait();
        }
    }

    let summary = RunSummary {
        width: engine.grid().width(),
        height: engine.grid().height(),
        generations: engine.generation(),
        alive_cells: engine.grid().alive_count(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };

    match settings.display.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "✅ Ran {} generation(s) in {:.3}s, {} cell(s) alive",
                    summary.generations, summary.elapsed_seconds, summary.alive_cells
                ))
            );
        }
    }

    Ok(())
}

fn render_frame(grid: &Grid, generation: u64, ramp: &ColorRamp) {
    if ColorOutput::supports_color() {
        print!("{}", CLEAR_SCREEN);
    } else {
        println!();
    }

    print!("{}", GridFormatter::format_colored(grid, ramp));
    println!("Generation {:>6}  Alive {:>6}", generation, grid.alive_count());
    std::io::stdout().flush().ok();
}

fn patterns_command() -> Result<()> {
    for seed in SeedPattern::ALL {
        match seed.matrix() {
            Some(pattern) => {
                println!(
                    "{}",
                    ColorOutput::info(&format!(
                        "{} ({}x{}, {} cells)",
                        pattern.name,
                        pattern.width(),
                        pattern.height(),
                        pattern.live_count()
                    ))
                );

                // Stamp into an exactly-sized grid for the preview
                let grid = Grid::new(pattern.width(), pattern.height())?;
                let mut engine = SimulationEngine::new(grid);
                engine.apply_pattern(pattern);
                println!("{}", GridFormatter::format_compact(engine.grid()));
            }
            None => {
                println!(
                    "{}",
                    ColorOutput::info("Randomize (fills the grid from the RNG)")
                );
                println!();
            }
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up configuration..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Example configuration variants
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    let mut gun_config = Settings::default();
    gun_config.simulation.seed_pattern = SeedPattern::GosperGliderGun;
    gun_config.simulation.generations = Some(120);
    gun_config.to_file(&examples_dir.join("glider_gun.yaml"))?;

    let mut acorn_config = Settings::default();
    acorn_config.simulation.seed_pattern = SeedPattern::Acorn;
    acorn_config.simulation.target_frame_rate = 30;
    acorn_config.to_file(&examples_dir.join("acorn.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_sim",
            "run",
            "--config",
            "test.yaml",
            "--pattern",
            "acorn",
            "--generations",
            "50",
            "--fps",
            "30",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/glider_gun.yaml").exists());
    }

    #[test]
    fn test_run_command_headless() {
        let temp_dir = tempdir().unwrap();
        let overrides = CliOverrides {
            width: Some(20),
            height: Some(20),
            seed_pattern: Some(SeedPattern::Pulsar),
            generations: Some(6),
            ..Default::default()
        };

        let result = run_command(
            temp_dir.path().join("missing.yaml"),
            overrides,
            true,
            false,
        );

        assert!(result.is_ok());
    }
}
