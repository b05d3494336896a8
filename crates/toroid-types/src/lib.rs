//! Shared type definitions for the Toroid automaton.
//!
//! This crate is the single source of truth for the small value types that
//! cross crate boundaries: the engine stores [`CellState`]s, the tick cycle
//! consumes [`CellEdit`]s queued by an input collaborator, and reporting
//! collaborators receive a [`GenerationSummary`] after every step.
//!
//! # Modules
//!
//! - [`enums`] -- Cell state (with the B3/S23 transition rule), fill mode,
//!   and single-cell edits.
//! - [`structs`] -- Per-generation summary statistics.

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{CellEdit, CellState, FillMode};
pub use structs::GenerationSummary;
