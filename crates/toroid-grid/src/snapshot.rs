//! Owned, read-only copies of a grid.
//!
//! A [`GridSnapshot`] is what rendering and reporting collaborators hold on
//! to. It shares nothing with the engine's buffers, so the caller cannot
//! mutate engine state through it.

use std::fmt;

use serde::{Deserialize, Serialize};
use toroid_types::CellState;

/// A copy of one generation of a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Generation the copy was taken at.
    pub generation: u64,
    /// Row-major cell states, `width * height` long.
    pub cells: Vec<CellState>,
}

impl GridSnapshot {
    /// Return the cell at `(x, y)`, or `None` outside the grid.
    ///
    /// Unlike the engine accessors, snapshot reads do not wrap.
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.width)?.checked_add(x)?;
        self.cells.get(idx).copied()
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Return the number of live cells.
    pub fn live_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

impl fmt::Display for GridSnapshot {
    /// Render rows as `#` (alive) and `.` (dead), one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = if cell.is_alive() { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
