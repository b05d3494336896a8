//! Tick cycle, configuration, and operator controls for the Toroid automaton.
//!
//! This crate drives a [`Grid`] the way a presentation shell would: queued
//! input edits are applied, the grid advances one generation, and a
//! callback receives the result for rendering or reporting. Nothing here
//! runs generations in parallel; the async runtime only paces ticks and
//! lets an operator pause or stop the loop.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `toroid-config.yaml` into
//!   strongly-typed structs.
//! - [`history`] -- [`CycleDetector`] for still lifes and oscillators.
//! - [`operator`] -- Shared pause/stop/speed controls and the cell edit
//!   queue.
//! - [`runner`] -- The bounded simulation loop.
//! - [`tick`] -- A single "apply edits, advance, summarize" step.
//!
//! [`Grid`]: toroid_grid::Grid
//! [`CycleDetector`]: history::CycleDetector

pub mod config;
pub mod history;
pub mod operator;
pub mod runner;
pub mod tick;
