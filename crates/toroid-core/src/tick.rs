//! A single step of the tick cycle.
//!
//! Each tick runs through these phases, strictly in order:
//!
//! 1. **Input** -- apply queued [`CellEdit`]s through the grid's wrapped
//!    single-cell mutators.
//! 2. **Advance** -- compute the next generation against the frozen current
//!    one and swap it in.
//! 3. **Summarize** -- collect the generation number, live count, and the
//!    births/deaths of the advance into a [`GenerationSummary`].
//!
//! Rendering (the third leg of "input, advance, render") is left to the
//! caller, which receives the summary and a read-only view of the grid.

use toroid_grid::Grid;
use toroid_types::{CellEdit, GenerationSummary};
use tracing::debug;

/// Apply one edit to the grid.
pub fn apply_edit(grid: &mut Grid, edit: CellEdit) {
    match edit {
        CellEdit::Set { x, y, state } => grid.set(x, y, state),
        CellEdit::Toggle { x, y } => {
            grid.toggle(x, y);
        }
    }
}

/// Execute one complete tick: apply `edits`, advance, and summarize.
pub fn run_generation(grid: &mut Grid, edits: &[CellEdit]) -> GenerationSummary {
    // --- Phase 1: Input ---
    for &edit in edits {
        apply_edit(grid, edit);
    }

    // --- Phase 2: Advance ---
    grid.advance();

    // --- Phase 3: Summarize ---
    let transition = grid.last_transition();
    let summary = GenerationSummary {
        generation: grid.generation(),
        live_cells: grid.live_cell_count(),
        births: transition.births,
        deaths: transition.deaths,
        edits_applied: edits.len(),
    };

    debug!(
        generation = summary.generation,
        live_cells = summary.live_cells,
        births = summary.births,
        deaths = summary.deaths,
        edits = summary.edits_applied,
        "Generation complete"
    );
    summary
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use toroid_grid::pattern::{BLINKER, BLOCK};
    use toroid_types::CellState;

    use super::*;

    #[test]
    fn summary_reports_generation_and_population() {
        let mut grid = Grid::dead(5, 5).unwrap();
        grid.place_pattern(&BLINKER, 1, 2);

        let summary = run_generation(&mut grid, &[]);
        assert_eq!(summary.generation, 1);
        assert_eq!(summary.live_cells, 3);
        assert_eq!(summary.births, 2);
        assert_eq!(summary.deaths, 2);
        assert_eq!(summary.edits_applied, 0);
    }

    #[test]
    fn edits_apply_before_advance() {
        // Three cells written by edits form a blinker that the same tick
        // then advances into its vertical phase.
        let mut grid = Grid::dead(5, 5).unwrap();
        let edits = [
            CellEdit::Set {
                x: 1,
                y: 2,
                state: CellState::Alive,
            },
            CellEdit::Toggle { x: 2, y: 2 },
            CellEdit::Toggle { x: -2, y: -3 },
        ];

        let summary = run_generation(&mut grid, &edits);
        assert_eq!(summary.edits_applied, 3);
        assert_eq!(grid.get(2, 1), CellState::Alive);
        assert_eq!(grid.get(2, 3), CellState::Alive);
        assert_eq!(grid.get(1, 2), CellState::Dead);
    }

    #[test]
    fn double_toggle_cancels_out() {
        let mut grid = Grid::dead(6, 6).unwrap();
        grid.place_pattern(&BLOCK, 2, 2);
        let edits = [CellEdit::Toggle { x: 0, y: 0 }, CellEdit::Toggle { x: 6, y: 6 }];

        let summary = run_generation(&mut grid, &edits);
        assert!(summary.is_static());
        assert_eq!(summary.live_cells, 4);
    }

    #[test]
    fn extinct_grid_summary() {
        let mut grid = Grid::dead(4, 4).unwrap();
        let summary = run_generation(&mut grid, &[]);
        assert!(summary.is_extinct());
        assert!(summary.is_static());
    }
}
