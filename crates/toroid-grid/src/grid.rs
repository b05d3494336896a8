//! The toroidal grid engine.
//!
//! Cells live in a flat `Vec<CellState>` indexed `y * width + x`. A second
//! buffer of the same size is kept alongside it: [`Grid::advance`] writes
//! every next state into that staging buffer while the current buffer is
//! only read, then swaps the two. No cell's next state can observe another
//! cell's already-updated state, and no allocation happens per generation.
//!
//! # Wraparound
//!
//! All coordinate arithmetic is Euclidean modulo the grid extent, so `-1`
//! is the last column or row. The same rule applies to neighbor offsets:
//! on a 1-wide axis a cell is its own left and right neighbor.

use std::hash::{DefaultHasher, Hash, Hasher};

use rand::Rng;
use toroid_types::{CellState, FillMode};
use tracing::{debug, warn};

use crate::error::GridError;
use crate::pattern::Pattern;
use crate::snapshot::GridSnapshot;

/// A fixed-size toroidal Game of Life grid.
///
/// Dimensions are fixed at construction. The grid is mutated only by
/// [`advance`](Self::advance) (bulk replacement, bumps the generation) and
/// by single-cell edits ([`set`](Self::set), [`toggle`](Self::toggle),
/// [`place_pattern`](Self::place_pattern)) which never touch the
/// generation counter.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Current generation, row-major.
    cells: Vec<CellState>,

    /// Scratch buffer the next generation is written into.
    staging: Vec<CellState>,

    /// Number of completed advances.
    generation: u64,

    /// Births and deaths caused by the most recent advance.
    last_transition: Transition,
}

/// Cell changes produced by one [`Grid::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transition {
    /// Dead cells that became alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
}

impl Grid {
    /// Create a grid and populate it according to `fill`.
    ///
    /// With [`FillMode::Random`] each cell is independently alive with
    /// probability `live_density`, drawn from `rng`. Densities outside
    /// `[0.0, 1.0]` are clamped into range (`NaN` counts as `0.0`). With
    /// [`FillMode::AllDead`] the density and the RNG are unused.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero
    /// or the cell count overflows.
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        fill: FillMode,
        live_density: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::dead(width, height)?;

        if fill == FillMode::Random {
            let density = clamp_density(live_density);
            for cell in &mut grid.cells {
                *cell = CellState::from(rng.random_bool(density));
            }
        }

        debug!(
            width,
            height,
            ?fill,
            live_cells = grid.live_cell_count(),
            "Grid created"
        );
        Ok(grid)
    }

    /// Create an all-dead grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero
    /// or the cell count overflows.
    pub fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        let area = checked_area(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Dead; area],
            staging: vec![CellState::Dead; area],
            generation: 0,
            last_transition: Transition::default(),
        })
    }

    /// Build a grid from text rows, `#` or `O` for alive and `.` for dead.
    ///
    /// Every row must have the same number of characters as the first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] for no rows or empty rows,
    /// [`GridError::RaggedRow`] for a row of the wrong width, and
    /// [`GridError::InvalidCharacter`] for any other character.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::dead(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let state = match ch {
                    '#' | 'O' => CellState::Alive,
                    '.' => CellState::Dead,
                    other => {
                        return Err(GridError::InvalidCharacter {
                            row: y,
                            column: x,
                            found: other,
                        });
                    }
                };
                if let Some(cell) = grid.cells.get_mut(index(width, x, y)) {
                    *cell = state;
                }
            }
        }

        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Generation
    // -----------------------------------------------------------------------

    /// Advance the grid by one generation.
    ///
    /// Every cell is evaluated against the frozen current generation; the
    /// results go to the staging buffer, which is then swapped in whole.
    /// The generation counter increases by exactly one.
    pub fn advance(&mut self) {
        let Self {
            width,
            height,
            cells,
            staging,
            generation,
            last_transition,
        } = self;
        let (width, height) = (*width, *height);
        let current = cells.as_slice();
        let mut transition = Transition::default();

        for y in 0..height {
            for x in 0..width {
                let idx = index(width, x, y);
                let state = current.get(idx).copied().unwrap_or_default();
                let neighbors = live_neighbors(current, width, height, x, y);
                let next_state = state.next_generation(neighbors);
                match (state, next_state) {
                    (CellState::Dead, CellState::Alive) => {
                        transition.births = transition.births.saturating_add(1);
                    }
                    (CellState::Alive, CellState::Dead) => {
                        transition.deaths = transition.deaths.saturating_add(1);
                    }
                    _ => {}
                }
                if let Some(slot) = staging.get_mut(idx) {
                    *slot = next_state;
                }
            }
        }

        std::mem::swap(cells, staging);
        *generation = generation.saturating_add(1);
        *last_transition = transition;
    }

    /// Count live cells among the 8 wrapped neighbors of `(x, y)`.
    ///
    /// Coordinates outside the grid are wrapped first, so the result is
    /// always in `0..=8`.
    pub fn neighbor_count(&self, x: i64, y: i64) -> u8 {
        live_neighbors(
            &self.cells,
            self.width,
            self.height,
            wrap(x, self.width),
            wrap(y, self.height),
        )
    }

    /// Return the number of completed advances.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Return the births and deaths of the most recent advance.
    ///
    /// All zero before the first advance. Single-cell edits do not affect it.
    pub const fn last_transition(&self) -> Transition {
        self.last_transition
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// Return the state of the wrapped cell at `(x, y)`.
    pub fn get(&self, x: i64, y: i64) -> CellState {
        self.cells
            .get(self.wrapped_index(x, y))
            .copied()
            .unwrap_or_default()
    }

    /// Overwrite the state of the wrapped cell at `(x, y)`.
    pub fn set(&mut self, x: i64, y: i64, state: CellState) {
        let idx = self.wrapped_index(x, y);
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = state;
        }
    }

    /// Flip the wrapped cell at `(x, y)` and return its new state.
    pub fn toggle(&mut self, x: i64, y: i64) -> CellState {
        let idx = self.wrapped_index(x, y);
        self.cells.get_mut(idx).map_or(CellState::Dead, |cell| {
            *cell = cell.toggled();
            *cell
        })
    }

    /// Stamp every live cell of `pattern` with its origin at `(x, y)`.
    ///
    /// Cells wrap around the edges. Cells not covered by the pattern are
    /// left as they are.
    pub fn place_pattern(&mut self, pattern: &Pattern, x: i64, y: i64) {
        for &(dx, dy) in pattern.cells {
            self.set(x.saturating_add(dx), y.saturating_add(dy), CellState::Alive);
        }
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Return `(width, height)`.
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Return the number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Return the number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the number of live cells.
    pub fn live_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Borrow the current generation as a row-major slice.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Copy the current generation into an owned [`GridSnapshot`].
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            generation: self.generation,
            cells: self.cells.clone(),
        }
    }

    /// Hash the dimensions and cell states, ignoring the generation.
    ///
    /// Two grids with the same layout hash equally regardless of how many
    /// advances they took to get there.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    fn wrapped_index(&self, x: i64, y: i64) -> usize {
        index(self.width, wrap(x, self.width), wrap(y, self.height))
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

impl Eq for Grid {}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate dimensions and return the cell count.
const fn checked_area(width: usize, height: usize) -> Result<usize, GridError> {
    let invalid = GridError::InvalidDimensions { width, height };
    if width == 0 || height == 0 {
        return Err(invalid);
    }
    match width.checked_mul(height) {
        Some(area) if area <= isize::MAX.unsigned_abs() => Ok(area),
        _ => Err(invalid),
    }
}

/// Clamp a live density into `[0.0, 1.0]`.
fn clamp_density(density: f64) -> f64 {
    if density.is_nan() {
        warn!("Live density is NaN, using 0.0");
        return 0.0;
    }
    let clamped = density.clamp(0.0, 1.0);
    if !(0.0..=1.0).contains(&density) {
        warn!(requested = density, clamped, "Live density out of range, clamping");
    }
    clamped
}

/// Wrap a signed coordinate onto `0..extent`.
fn wrap(coord: i64, extent: usize) -> usize {
    i64::try_from(extent)
        .ok()
        .and_then(|extent| coord.checked_rem_euclid(extent))
        .and_then(|wrapped| usize::try_from(wrapped).ok())
        .unwrap_or(0)
}

const fn index(width: usize, x: usize, y: usize) -> usize {
    y.saturating_mul(width).saturating_add(x)
}

/// `i - 1` modulo `extent`, for `i < extent`.
const fn prev(i: usize, extent: usize) -> usize {
    match i.checked_sub(1) {
        Some(p) => p,
        None => extent.saturating_sub(1),
    }
}

/// `i + 1` modulo `extent`, for `i < extent`.
const fn next(i: usize, extent: usize) -> usize {
    let n = i.saturating_add(1);
    if n >= extent { 0 } else { n }
}

/// Count live cells among the 8 wrapped neighbors of an in-range `(x, y)`.
fn live_neighbors(cells: &[CellState], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let (left, right) = (prev(x, width), next(x, width));
    let (up, down) = (prev(y, height), next(y, height));
    let neighbors = [
        (left, up),
        (x, up),
        (right, up),
        (left, y),
        (right, y),
        (left, down),
        (x, down),
        (right, down),
    ];

    let mut count: u8 = 0;
    for (nx, ny) in neighbors {
        if cells
            .get(index(width, nx, ny))
            .is_some_and(|cell| cell.is_alive())
        {
            count = count.saturating_add(1);
        }
    }
    count
}
