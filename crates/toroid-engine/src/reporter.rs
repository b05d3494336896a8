//! Generation callback that logs progress reports.
//!
//! The headless engine has no window to draw into, so the render leg of
//! the tick cycle becomes a periodic structured log line. At `trace` level
//! the full grid is also rendered as `#`/`.` rows.

use toroid_core::runner::GenerationCallback;
use toroid_grid::Grid;
use toroid_types::GenerationSummary;
use tracing::{Level, info, trace};

/// Callback that reports population statistics every `every` generations.
#[derive(Debug)]
pub struct ProgressReporter {
    every: u64,
    reports: u64,
    peak_live_cells: usize,
    peak_generation: u64,
}

impl ProgressReporter {
    /// Create a reporter that logs every `every` generations.
    ///
    /// A value of 0 is treated as 1.
    pub const fn new(every: u64) -> Self {
        Self {
            every: if every == 0 { 1 } else { every },
            reports: 0,
            peak_live_cells: 0,
            peak_generation: 0,
        }
    }

    /// Number of progress reports logged so far.
    pub const fn reports(&self) -> u64 {
        self.reports
    }

    /// Highest live-cell count seen, and the generation it occurred at.
    pub const fn peak(&self) -> (usize, u64) {
        (self.peak_live_cells, self.peak_generation)
    }
}

impl GenerationCallback for ProgressReporter {
    fn on_generation(&mut self, summary: &GenerationSummary, grid: &Grid) {
        if summary.live_cells > self.peak_live_cells {
            self.peak_live_cells = summary.live_cells;
            self.peak_generation = summary.generation;
        }

        if summary.generation.checked_rem(self.every) == Some(0) {
            self.reports = self.reports.saturating_add(1);
            info!(
                generation = summary.generation,
                live_cells = summary.live_cells,
                births = summary.births,
                deaths = summary.deaths,
                peak_live_cells = self.peak_live_cells,
                "Progress"
            );
        }

        if tracing::enabled!(Level::TRACE) {
            trace!(generation = summary.generation, "\n{}", grid.snapshot());
        }
    }
}
