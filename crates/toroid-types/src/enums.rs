//! Enumeration types for the Toroid automaton.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Cell State
// ---------------------------------------------------------------------------

/// The state of a single grid cell.
///
/// Cells carry no identity, age, or color. They are interchangeable and
/// identified only by their grid position, so the engine stores them as a
/// flat buffer of this one-byte enum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellState {
    /// An empty cell.
    #[default]
    Dead = 0,
    /// A populated cell.
    Alive = 1,
}

impl CellState {
    /// Return `true` for [`CellState::Alive`].
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Return the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Alive => Self::Dead,
            Self::Dead => Self::Alive,
        }
    }

    /// Apply the standard B3/S23 rule.
    ///
    /// A live cell survives with 2 or 3 live neighbors; a dead cell is born
    /// with exactly 3. Every other combination yields a dead cell.
    #[must_use]
    pub const fn next_generation(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Self::Alive, 2 | 3) | (Self::Dead, 3) => Self::Alive,
            _ => Self::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { Self::Alive } else { Self::Dead }
    }
}

// ---------------------------------------------------------------------------
// Fill Mode
// ---------------------------------------------------------------------------

/// How a freshly created grid is populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Every cell starts dead.
    AllDead,
    /// Each cell is independently alive with the configured live density.
    #[default]
    Random,
}

// ---------------------------------------------------------------------------
// Cell Edit
// ---------------------------------------------------------------------------

/// A single-cell edit requested from outside the generation cycle.
///
/// Coordinates are signed and wrap onto the torus, so an edit can never be
/// out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellEdit {
    /// Force a cell into the given state.
    Set {
        /// Column (wrapped).
        x: i64,
        /// Row (wrapped).
        y: i64,
        /// The state to write.
        state: CellState,
    },
    /// Flip a cell between alive and dead.
    Toggle {
        /// Column (wrapped).
        x: i64,
        /// Row (wrapped).
        y: i64,
    },
}
