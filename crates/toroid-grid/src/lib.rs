//! The automaton grid engine for the Toroid simulation.
//!
//! A [`Grid`] owns a fixed `width x height` torus of [`CellState`]s and
//! advances it one generation at a time under Conway's B3/S23 rule. Every
//! coordinate wraps, so there is no "out of bounds", only a wrapped
//! position.
//!
//! # Modules
//!
//! - [`error`] -- Error types for grid construction.
//! - [`grid`] -- The [`Grid`] engine: flat double-buffered storage,
//!   toroidal neighbor counting, and the generation advance.
//! - [`pattern`] -- A small catalog of well-known patterns that can be
//!   stamped onto a grid.
//! - [`snapshot`] -- [`GridSnapshot`], an owned read-only copy of the grid
//!   for rendering and reporting collaborators.
//!
//! [`CellState`]: toroid_types::CellState

pub mod error;
pub mod grid;
pub mod pattern;
pub mod snapshot;

// Re-export primary types at crate root.
pub use error::GridError;
pub use grid::{Grid, Transition};
pub use pattern::{PATTERNS, Pattern};
pub use snapshot::GridSnapshot;
