//! Error types for the `toroid-grid` crate.
//!
//! Construction is the only fallible operation on a grid. Accessors and
//! the generation advance never fail: coordinates wrap instead.

/// Errors that can occur while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width or height is zero, or the cell count does not fit in memory.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A text row does not match the width of the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },

    /// A text row contains a character that is neither alive nor dead.
    #[error("unexpected character {found:?} at row {row}, column {column}")]
    InvalidCharacter {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The offending character.
        found: char,
    },
}
