//! Summary structs passed from the tick cycle to reporting collaborators.

use serde::{Deserialize, Serialize};

/// Statistics for one completed generation.
///
/// `births` and `deaths` count transitions caused by the advance alone;
/// edits applied before the advance are reported separately in
/// `edits_applied`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Generation number reached by this step.
    pub generation: u64,
    /// Live cells in the new generation.
    pub live_cells: usize,
    /// Dead cells that became alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
    /// Number of queued cell edits applied before advancing.
    pub edits_applied: usize,
}

impl GenerationSummary {
    /// Return `true` when no cell is alive.
    pub const fn is_extinct(&self) -> bool {
        self.live_cells == 0
    }

    /// Return `true` when the advance changed no cell.
    pub const fn is_static(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}
