//! Configuration loading and typed config structures for the Toroid automaton.
//!
//! The configuration lives in `toroid-config.yaml`. This module defines
//! strongly-typed structs that mirror the YAML structure, and provides a
//! loader that reads and validates the file. Every field has a default, so
//! an empty document (or no file at all) yields a runnable setup: a
//! randomly seeded 150x150 torus at 10% density.

use std::path::Path;

use serde::Deserialize;
use toroid_types::FillMode;

use crate::history::MAX_CYCLE_HISTORY;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an unusable setup.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `toroid-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// Grid shape and initial population.
    #[serde(default)]
    pub grid: GridConfig,

    /// Tick pacing and end conditions.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load and validate configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid.width == 0 || self.grid.height == 0 {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "grid dimensions must be positive, got {}x{}",
                    self.grid.width, self.grid.height
                ),
            });
        }
        if self.simulation.stop_on_cycle && self.simulation.cycle_history == 0 {
            return Err(ConfigError::Invalid {
                reason: "cycle_history must be at least 1 when stop_on_cycle is set".to_owned(),
            });
        }
        if self.simulation.cycle_history > MAX_CYCLE_HISTORY {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "cycle_history must be at most {MAX_CYCLE_HISTORY}, got {}",
                    self.simulation.cycle_history
                ),
            });
        }
        if self.simulation.report_every == 0 {
            return Err(ConfigError::Invalid {
                reason: "report_every must be at least 1".to_owned(),
            });
        }
        Ok(())
    }
}

/// Grid shape and initial population.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    #[serde(default = "default_grid_extent")]
    pub width: usize,

    /// Number of rows.
    #[serde(default = "default_grid_extent")]
    pub height: usize,

    /// On-screen size of one cell in pixels. Only the presentation shell
    /// reads this.
    #[serde(default = "default_cell_size_px")]
    pub cell_size_px: u32,

    /// How the grid is populated at creation.
    #[serde(default)]
    pub fill: FillMode,

    /// Probability that a cell starts alive under [`FillMode::Random`].
    /// Out-of-range values are clamped by the engine.
    #[serde(default = "default_live_density")]
    pub live_density: f64,

    /// RNG seed for reproducible runs. A fresh seed is drawn (and logged)
    /// when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Name of a catalog pattern stamped on top of the initial fill.
    #[serde(default)]
    pub pattern: Option<String>,

    /// Grid position of the pattern's top-left corner, `[x, y]`.
    #[serde(default)]
    pub pattern_origin: [i64; 2],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_grid_extent(),
            height: default_grid_extent(),
            cell_size_px: default_cell_size_px(),
            fill: FillMode::default(),
            live_density: default_live_density(),
            seed: None,
            pattern: None,
            pattern_origin: [0, 0],
        }
    }
}

/// Tick pacing and end conditions.
///
/// A value of 0 for `max_generations` means unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum number of generations before the run ends (0 = unlimited).
    #[serde(default = "default_max_generations")]
    pub max_generations: u64,

    /// Real-time milliseconds between generations.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// End the run once every cell is dead.
    #[serde(default = "default_true")]
    pub stop_on_extinction: bool,

    /// End the run once the grid repeats a recent state.
    #[serde(default = "default_true")]
    pub stop_on_cycle: bool,

    /// How many recent generations the cycle detector remembers.
    #[serde(default = "default_cycle_history")]
    pub cycle_history: usize,

    /// Log a progress report every this many generations.
    #[serde(default = "default_report_every")]
    pub report_every: u64,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            max_generations: default_max_generations(),
            tick_interval_ms: default_tick_interval_ms(),
            stop_on_extinction: true,
            stop_on_cycle: true,
            cycle_history: default_cycle_history(),
            report_every: default_report_every(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_grid_extent() -> usize {
    150
}

const fn default_cell_size_px() -> u32 {
    5
}

const fn default_live_density() -> f64 {
    0.1
}

const fn default_max_generations() -> u64 {
    1000
}

const fn default_tick_interval_ms() -> u64 {
    16
}

const fn default_cycle_history() -> usize {
    16
}

const fn default_report_every() -> u64 {
    50
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_owned()
}
