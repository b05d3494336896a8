//! Detection of repeating grid states.
//!
//! Once a toroidal grid revisits a state it has held before, it is locked
//! into a cycle forever: still lifes repeat with period 1, the blinker with
//! period 2, and a lone glider on an `n x n` torus with period `4n`. The
//! [`CycleDetector`] remembers the last few generations, keyed by
//! [`state_hash`], and reports the period as soon as one repeats.
//!
//! [`state_hash`]: toroid_grid::Grid::state_hash

use std::collections::VecDeque;

use toroid_grid::Grid;
use toroid_types::CellState;

/// Largest accepted detector memory, in generations.
pub const MAX_CYCLE_HISTORY: usize = 1024;

/// One remembered generation.
#[derive(Debug, Clone)]
struct Seen {
    generation: u64,
    hash: u64,
    cells: Vec<CellState>,
}

/// Bounded memory of recent grid states.
///
/// Hashes are only a first filter: a hash match counts as a repeat only if
/// the stored cells are identical too.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    /// Maximum number of remembered generations.
    capacity: usize,

    /// Remembered generations, oldest first.
    recent: VecDeque<Seen>,
}

impl CycleDetector {
    /// Create a detector that remembers up to `capacity` generations.
    ///
    /// A capacity of 0 disables detection. Values above
    /// [`MAX_CYCLE_HISTORY`] are lowered to it.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.min(MAX_CYCLE_HISTORY),
            recent: VecDeque::new(),
        }
    }

    /// Record the grid's current state.
    ///
    /// Returns `Some(period)` when the same layout was seen at an earlier
    /// remembered generation, where `period` is the generation distance to
    /// the most recent match.
    pub fn observe(&mut self, grid: &Grid) -> Option<u64> {
        if self.capacity == 0 {
            return None;
        }
        self.record(grid.generation(), grid.state_hash(), grid.cells())
    }

    fn record(&mut self, generation: u64, hash: u64, cells: &[CellState]) -> Option<u64> {
        let period = self
            .recent
            .iter()
            .rev()
            .find(|seen| seen.hash == hash && seen.generation < generation && seen.cells == cells)
            .map(|seen| generation.saturating_sub(seen.generation));

        let reused = if self.recent.len() >= self.capacity {
            self.recent.pop_front()
        } else {
            None
        };
        let mut buffer = reused.map(|seen| seen.cells).unwrap_or_default();
        buffer.clear();
        buffer.extend_from_slice(cells);
        self.recent.push_back(Seen {
            generation,
            hash,
            cells: buffer,
        });

        period
    }

    /// Forget every remembered state.
    ///
    /// Called after external edits, which break the deterministic history.
    pub fn reset(&mut self) {
        self.recent.clear();
    }

    /// Return the number of remembered generations.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Return `true` when nothing is remembered.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
