//! Operator control state for runtime simulation management.
//!
//! This module provides shared state used by the tick loop and by whatever
//! shell sits in front of it (a window, a terminal UI, a signal handler).
//! The shell can pause/resume, change tick speed, queue single-cell edits,
//! and trigger a clean stop without touching the grid directly. All edits
//! are applied by the tick loop between generations, which keeps "handle
//! input", "advance", and "render" strictly serialized.
//!
//! # Architecture
//!
//! Control flags use [`std::sync::atomic`] types so the tick loop can read
//! them without locks. The edit queue and the end reason sit behind
//! [`tokio::sync::Mutex`] because they are only touched once per tick.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, Notify};
use toroid_types::CellEdit;

use crate::config::SimulationBoundsConfig;

/// Smallest tick interval accepted at runtime.
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Reason why the simulation ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationEndReason {
    /// Reached the configured `max_generations` limit.
    GenerationLimitReached,
    /// An operator issued a stop command.
    OperatorStop,
    /// Every cell is dead.
    Extinction,
    /// The grid repeated an earlier state.
    CycleDetected {
        /// Generations between the two identical states.
        period: u64,
    },
}

/// Shared operator control state.
///
/// Wrap this in an [`Arc`](std::sync::Arc) and hand clones to the tick loop
/// and to the shell.
#[derive(Debug)]
pub struct OperatorState {
    /// Whether the simulation is currently paused.
    paused: AtomicBool,

    /// Notification used to wake the tick loop when resumed or stopped.
    resume_notify: Notify,

    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Current tick interval in milliseconds (runtime-adjustable).
    tick_interval_ms: AtomicU64,

    /// Maximum number of generations (0 = unlimited).
    max_generations: u64,

    /// Cell edits awaiting the next tick.
    pending_edits: Mutex<Vec<CellEdit>>,

    /// Reason the simulation ended, if it has.
    end_reason: Mutex<Option<SimulationEndReason>>,
}

impl OperatorState {
    /// Create a new operator state from configuration.
    pub fn new(bounds: &SimulationBoundsConfig) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            tick_interval_ms: AtomicU64::new(bounds.tick_interval_ms),
            max_generations: bounds.max_generations,
            pending_edits: Mutex::new(Vec::new()),
            end_reason: Mutex::new(None),
        }
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Check whether the simulation is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause the simulation. The tick loop will sleep until resumed.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume the simulation and wake the tick loop.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Wait until the simulation is no longer paused or a stop is requested.
    ///
    /// Returns immediately if not paused.
    pub async fn wait_if_paused(&self) {
        while self.is_paused() && !self.is_stop_requested() {
            self.resume_notify.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean simulation stop. Also wakes a paused loop.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Record the reason the simulation ended.
    pub async fn set_end_reason(&self, reason: SimulationEndReason) {
        let mut guard = self.end_reason.lock().await;
        *guard = Some(reason);
    }

    /// Get the reason the simulation ended, if it has.
    pub async fn end_reason(&self) -> Option<SimulationEndReason> {
        self.end_reason.lock().await.clone()
    }

    // -----------------------------------------------------------------------
    // Tick Speed
    // -----------------------------------------------------------------------

    /// Get the current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.load(Ordering::Acquire)
    }

    /// Set the tick interval in milliseconds.
    ///
    /// Returns the previous interval on success, or `None` if the value
    /// was rejected (below [`MIN_TICK_INTERVAL_MS`]).
    pub fn set_tick_interval_ms(&self, ms: u64) -> Option<u64> {
        if ms < MIN_TICK_INTERVAL_MS {
            return None;
        }
        let prev = self.tick_interval_ms.swap(ms, Ordering::AcqRel);
        Some(prev)
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    /// Check whether the generation limit has been reached.
    ///
    /// Returns `true` if `max_generations > 0` and
    /// `generation >= max_generations`.
    pub const fn generation_limit_reached(&self, generation: u64) -> bool {
        self.max_generations > 0 && generation >= self.max_generations
    }

    /// Get the configured max generations.
    pub const fn max_generations(&self) -> u64 {
        self.max_generations
    }

    // -----------------------------------------------------------------------
    // Cell Edits
    // -----------------------------------------------------------------------

    /// Queue a cell edit for the next tick.
    pub async fn queue_edit(&self, edit: CellEdit) {
        let mut queue = self.pending_edits.lock().await;
        queue.push(edit);
    }

    /// Drain all queued edits in submission order.
    pub async fn drain_edits(&self) -> Vec<CellEdit> {
        let mut queue = self.pending_edits.lock().await;
        std::mem::take(&mut *queue)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use toroid_types::CellState;

    use super::*;

    fn bounds(max_generations: u64) -> SimulationBoundsConfig {
        SimulationBoundsConfig {
            max_generations,
            tick_interval_ms: 50,
            ..SimulationBoundsConfig::default()
        }
    }

    #[test]
    fn initial_state_is_running() {
        let state = OperatorState::new(&bounds(0));
        assert!(!state.is_paused());
        assert!(!state.is_stop_requested());
        assert_eq!(state.tick_interval_ms(), 50);
    }

    #[test]
    fn pause_and_resume() {
        let state = OperatorState::new(&bounds(0));
        state.pause();
        assert!(state.is_paused());
        state.resume();
        assert!(!state.is_paused());
    }

    #[test]
    fn stop_request() {
        let state = OperatorState::new(&bounds(0));
        state.request_stop();
        assert!(state.is_stop_requested());
    }

    #[test]
    fn set_tick_interval() {
        let state = OperatorState::new(&bounds(0));
        assert_eq!(state.set_tick_interval_ms(200), Some(50));
        assert_eq!(state.tick_interval_ms(), 200);
    }

    #[test]
    fn reject_zero_interval() {
        let state = OperatorState::new(&bounds(0));
        assert_eq!(state.set_tick_interval_ms(0), None);
        assert_eq!(state.tick_interval_ms(), 50);
    }

    #[test]
    fn zero_limit_means_unlimited() {
        let state = OperatorState::new(&bounds(0));
        assert!(!state.generation_limit_reached(u64::MAX));
    }

    #[test]
    fn generation_limit() {
        let state = OperatorState::new(&bounds(10));
        assert!(!state.generation_limit_reached(9));
        assert!(state.generation_limit_reached(10));
        assert!(state.generation_limit_reached(11));
    }

    #[tokio::test]
    async fn queue_and_drain_edits_in_order() {
        let state = OperatorState::new(&bounds(0));
        state.queue_edit(CellEdit::Toggle { x: 1, y: 2 }).await;
        state
            .queue_edit(CellEdit::Set {
                x: 0,
                y: 0,
                state: CellState::Alive,
            })
            .await;

        let edits = state.drain_edits().await;
        assert_eq!(edits.len(), 2);
        assert_eq!(edits.first(), Some(&CellEdit::Toggle { x: 1, y: 2 }));
        assert!(state.drain_edits().await.is_empty());
    }

    #[tokio::test]
    async fn stop_wakes_paused_loop() {
        let state = Arc::new(OperatorState::new(&bounds(0)));
        state.pause();

        let waiter = {
            let state = Arc::clone(&state);
            tokio::spawn(async move { state.wait_if_paused().await })
        };
        state.request_stop();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn end_reason_roundtrip() {
        let state = OperatorState::new(&bounds(0));
        assert_eq!(state.end_reason().await, None);
        state.set_end_reason(SimulationEndReason::Extinction).await;
        assert_eq!(state.end_reason().await, Some(SimulationEndReason::Extinction));
    }
}
