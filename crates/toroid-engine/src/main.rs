//! Headless engine binary for the Toroid automaton.
//!
//! This is the main entry point that wires together configuration, grid
//! seeding, operator controls, and the tick loop, then runs the simulation
//! until a termination condition is met.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `toroid-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Seed the RNG and build the initial grid
//! 4. Stamp the configured pattern, if any
//! 5. Create operator state and hook Ctrl-C to a clean stop
//! 6. Run the simulation loop
//! 7. Log the result

mod error;
mod reporter;

use std::path::Path;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use toroid_core::config::{GridConfig, LoggingConfig, SimulationConfig};
use toroid_core::operator::OperatorState;
use toroid_core::runner::{self, StopPolicy};
use toroid_grid::{Grid, PATTERNS, Pattern};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::reporter::ProgressReporter;

const CONFIG_PATH: &str = "toroid-config.yaml";

/// Application entry point for the engine.
///
/// # Errors
///
/// Returns an error if configuration loading or grid construction fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config.logging);
    info!("toroid-engine starting");
    if from_file {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    // 3-4. Build the starting grid.
    let (mut grid, seed) = build_grid(&config.grid)?;
    info!(
        width = grid.width(),
        height = grid.height(),
        seed,
        fill = ?config.grid.fill,
        live_cells = grid.live_cell_count(),
        "Initial grid ready"
    );

    // 5. Create operator state.
    let operator = Arc::new(OperatorState::new(&config.simulation));
    {
        let operator = Arc::clone(&operator);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Interrupt received, stopping after the current generation");
                    operator.request_stop();
                }
                Err(e) => warn!(error = %e, "failed to listen for Ctrl-C"),
            }
        });
    }

    // 6. Run the simulation.
    let mut reporter = ProgressReporter::new(config.simulation.report_every);
    let result = runner::run_simulation(
        &mut grid,
        &operator,
        &mut reporter,
        StopPolicy::from_config(&config.simulation),
    )
    .await;

    // 7. Log results.
    runner::log_simulation_end(&result);
    let (peak_live_cells, peak_generation) = reporter.peak();
    info!(
        end_reason = ?result.end_reason,
        total_generations = result.total_generations,
        peak_live_cells,
        peak_generation,
        "toroid-engine shutdown complete"
    );

    Ok(())
}

/// Load the configuration from `toroid-config.yaml`.
///
/// Looks for the file relative to the current working directory and falls
/// back to defaults when it is missing. The flag reports which one happened.
fn load_config() -> Result<(SimulationConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((SimulationConfig::from_file(config_path)?, true))
    } else {
        Ok((SimulationConfig::default(), false))
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Build the initial grid and return it with the seed that produced it.
fn build_grid(config: &GridConfig) -> Result<(Grid, u64), EngineError> {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(
        config.width,
        config.height,
        config.fill,
        config.live_density,
        &mut rng,
    )?;

    if let Some(name) = &config.pattern {
        let pattern = Pattern::by_name(name).ok_or_else(|| EngineError::UnknownPattern {
            name: name.clone(),
            known: PATTERNS
                .iter()
                .map(|p| p.name)
                .collect::<Vec<_>>()
                .join(", "),
        })?;
        let [x, y] = config.pattern_origin;
        let (pattern_width, pattern_height) = pattern.bounding_box();
        let fits = usize::try_from(pattern_width).is_ok_and(|w| w <= grid.width())
            && usize::try_from(pattern_height).is_ok_and(|h| h <= grid.height());
        if !fits {
            warn!(
                pattern = pattern.name,
                pattern_width,
                pattern_height,
                "Pattern is larger than the grid and wraps onto itself"
            );
        }
        grid.place_pattern(pattern, x, y);
        info!(
            pattern = pattern.name,
            x,
            y,
            pattern_width,
            pattern_height,
            "Pattern placed"
        );
    }

    Ok((grid, seed))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toroid_types::{CellState, FillMode};

    use super::*;

    fn grid_config(yaml: &str) -> GridConfig {
        SimulationConfig::parse(yaml).unwrap().grid
    }

    #[test]
    fn same_seed_same_grid() {
        let config = grid_config("grid: { width: 30, height: 20, seed: 99, live_density: 0.4 }");
        let (a, seed_a) = build_grid(&config).unwrap();
        let (b, seed_b) = build_grid(&config).unwrap();
        assert_eq!(seed_a, 99);
        assert_eq!(seed_b, 99);
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), (30, 20));
    }

    #[test]
    fn pattern_on_dead_grid() {
        let config = grid_config(
            "grid: { width: 8, height: 8, fill: all_dead, pattern: Glider, pattern_origin: [7, 7] }",
        );
        assert_eq!(config.fill, FillMode::AllDead);
        let (grid, _) = build_grid(&config).unwrap();
        assert_eq!(grid.live_cell_count(), 5);
        // Glider cell (1, 0) lands at (8, 7), wrapped to (0, 7).
        assert_eq!(grid.get(0, 7), CellState::Alive);
    }

    #[test]
    fn oversized_pattern_still_stamps_with_wrap() {
        // The 4x4 beacon on a 3x3 grid folds (3, 3) onto (0, 0).
        let config = grid_config("grid: { width: 3, height: 3, fill: all_dead, pattern: beacon }");
        let (grid, _) = build_grid(&config).unwrap();
        assert_eq!(grid.get(0, 0), CellState::Alive);
        assert_eq!(grid.live_cell_count(), 7);
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        let config = grid_config("grid: { width: 8, height: 8, pattern: spaceship-9000 }");
        let err = build_grid(&config).unwrap_err();
        assert!(matches!(err, EngineError::UnknownPattern { ref name, .. } if name == "spaceship-9000"));
        assert!(err.to_string().contains("glider"));
    }
}
