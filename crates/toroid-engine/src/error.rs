//! Error types for the engine binary.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: toroid_core::config::ConfigError,
    },

    /// Grid construction failed.
    #[error("grid error: {source}")]
    Grid {
        /// The underlying grid error.
        #[from]
        source: toroid_grid::GridError,
    },

    /// The configured pattern is not in the catalog.
    #[error("unknown pattern {name:?}, expected one of: {known}")]
    UnknownPattern {
        /// The name as written in the configuration.
        name: String,
        /// Comma-separated catalog names.
        known: String,
    },
}
