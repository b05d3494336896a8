//! Simulation loop runner with operator controls.
//!
//! This module provides [`run_simulation`], the top-level async function
//! that drives the tick loop with support for:
//!
//! - **Bounded runs**: stop after `max_generations`
//! - **Natural endings**: stop on extinction or when the grid repeats
//! - **Pause/resume**: operator can halt and continue the tick loop
//! - **Variable tick speed**: tick interval adjustable at runtime
//! - **Operator stop**: immediate clean stop from the shell
//!
//! The runner wraps the single-step [`run_generation`] function and adds
//! the control plane around it. Generations never overlap: each one is
//! fully applied before the callback sees it and before the next begins.
//!
//! [`run_generation`]: crate::tick::run_generation

use std::sync::Arc;

use toroid_grid::Grid;
use toroid_types::GenerationSummary;
use tracing::{info, warn};

use crate::config::SimulationBoundsConfig;
use crate::history::CycleDetector;
use crate::operator::{OperatorState, SimulationEndReason};
use crate::tick;

/// Result of the simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// The last generation summary, if any generation completed.
    pub final_summary: Option<GenerationSummary>,
    /// Total number of generations executed by this run.
    pub total_generations: u64,
}

/// Which natural end conditions stop the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopPolicy {
    /// Stop once every cell is dead.
    pub on_extinction: bool,
    /// Stop once the grid repeats one of the last `cycle_history` states.
    pub on_cycle: bool,
    /// Number of generations the cycle detector remembers.
    pub cycle_history: usize,
}

impl StopPolicy {
    /// Run until the generation limit or an operator stop, nothing else.
    pub const NEVER: Self = Self {
        on_extinction: false,
        on_cycle: false,
        cycle_history: 0,
    };

    /// Build the policy from the simulation bounds.
    pub const fn from_config(bounds: &SimulationBoundsConfig) -> Self {
        Self {
            on_extinction: bounds.stop_on_extinction,
            on_cycle: bounds.stop_on_cycle,
            cycle_history: bounds.cycle_history,
        }
    }
}

/// Callback invoked after each generation completes.
///
/// This is the hook for the rendering or reporting collaborator. It gets
/// the summary and a shared borrow of the grid, so it can read every cell
/// but cannot change anything.
pub trait GenerationCallback: Send {
    /// Called after a generation completes.
    fn on_generation(&mut self, summary: &GenerationSummary, grid: &Grid);
}

/// A no-op callback for headless runs and tests.
pub struct NoOpCallback;

impl GenerationCallback for NoOpCallback {
    fn on_generation(&mut self, _summary: &GenerationSummary, _grid: &Grid) {}
}

/// Run the simulation loop until a termination condition is met.
///
/// Each iteration waits while paused, honours a stop request, drains the
/// operator's queued edits, runs one generation, hands it to `callback`,
/// and then checks extinction, cycles, and the generation limit in that
/// order. Queued edits reset the cycle detector.
///
/// # Arguments
///
/// * `grid` - The grid to drive; left in its final state on return
/// * `operator` - Shared operator control state
/// * `callback` - Called after each generation
/// * `policy` - Which natural end conditions apply
pub async fn run_simulation(
    grid: &mut Grid,
    operator: &Arc<OperatorState>,
    callback: &mut dyn GenerationCallback,
    policy: StopPolicy,
) -> SimulationResult {
    let mut last_summary: Option<GenerationSummary> = None;
    let mut total_generations: u64 = 0;
    let mut detector = CycleDetector::new(if policy.on_cycle {
        policy.cycle_history
    } else {
        0
    });
    detector.observe(grid);

    let (width, height) = grid.dimensions();
    info!(
        width,
        height,
        live_cells = grid.live_cell_count(),
        max_generations = operator.max_generations(),
        tick_interval_ms = operator.tick_interval_ms(),
        "Simulation starting"
    );

    loop {
        // --- Check pause ---
        if operator.is_paused() {
            info!("Simulation paused, waiting for resume...");
            operator.wait_if_paused().await;
            info!("Simulation resumed");
        }

        // --- Check stop request (before tick) ---
        if operator.is_stop_requested() {
            info!("Operator stop requested");
            return finish(
                operator,
                SimulationEndReason::OperatorStop,
                last_summary,
                total_generations,
            )
            .await;
        }

        // --- Execute tick ---
        let edits = operator.drain_edits().await;
        if !edits.is_empty() {
            detector.reset();
        }
        let summary = tick::run_generation(grid, &edits);
        total_generations = total_generations.saturating_add(1);

        // --- Notify callback ---
        callback.on_generation(&summary, grid);

        // --- Check extinction ---
        if policy.on_extinction && summary.is_extinct() {
            info!(generation = summary.generation, "All cells dead -- extinction");
            return finish(
                operator,
                SimulationEndReason::Extinction,
                Some(summary),
                total_generations,
            )
            .await;
        }

        // --- Check cycle ---
        if let Some(period) = detector.observe(grid) {
            info!(generation = summary.generation, period, "Grid state repeated");
            return finish(
                operator,
                SimulationEndReason::CycleDetected { period },
                Some(summary),
                total_generations,
            )
            .await;
        }

        // --- Check generation limit (after tick) ---
        if operator.generation_limit_reached(summary.generation) {
            info!(
                generation = summary.generation,
                max_generations = operator.max_generations(),
                "Generation limit reached"
            );
            return finish(
                operator,
                SimulationEndReason::GenerationLimitReached,
                Some(summary),
                total_generations,
            )
            .await;
        }

        last_summary = Some(summary);

        // --- Sleep for tick interval ---
        let interval_ms = operator.tick_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        }
    }
}

async fn finish(
    operator: &OperatorState,
    reason: SimulationEndReason,
    final_summary: Option<GenerationSummary>,
    total_generations: u64,
) -> SimulationResult {
    operator.set_end_reason(reason.clone()).await;
    SimulationResult {
        end_reason: reason,
        final_summary,
        total_generations,
    }
}

/// Log the simulation end sequence.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_generations = result.total_generations,
        final_generation = result.final_summary.as_ref().map(|s| s.generation),
        final_live_cells = result.final_summary.as_ref().map(|s| s.live_cells),
        "Simulation ended"
    );

    if result.final_summary.is_none() {
        warn!("Simulation ended with no generations executed");
    }
}
