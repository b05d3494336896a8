//! Behavioral properties of the grid engine.
//!
//! Each test exercises one property of the toroidal B3/S23 engine through
//! its public API only. The simultaneity test compares [`Grid::advance`]
//! against a deliberately naive reference that copies the whole board
//! before computing each generation.

// Integration tests use unwrap and indexing for clarity -- panicking on
// failure is the correct behavior in test code.
#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]

use rand::SeedableRng;
use rand::rngs::SmallRng;
use toroid_grid::pattern::{BLINKER, BLOCK};
use toroid_grid::{Grid, GridError};
use toroid_types::{CellState, FillMode};

/// Naive reference: a `Vec<Vec<bool>>` board advanced from a full copy.
fn reference_step(board: &[Vec<bool>]) -> Vec<Vec<bool>> {
    let height = board.len() as i64;
    let width = board[0].len() as i64;
    let frozen = board.to_vec();
    let mut next = board.to_vec();

    for y in 0..height {
        for x in 0..width {
            let mut n = 0;
            for dy in -1..=1_i64 {
                for dx in -1..=1_i64 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = (x + dx).rem_euclid(width) as usize;
                    let ny = (y + dy).rem_euclid(height) as usize;
                    if frozen[ny][nx] {
                        n += 1;
                    }
                }
            }
            let alive = frozen[y as usize][x as usize];
            next[y as usize][x as usize] = matches!((alive, n), (true, 2 | 3) | (false, 3));
        }
    }
    next
}

fn to_board(grid: &Grid) -> Vec<Vec<bool>> {
    let (width, height) = grid.dimensions();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| grid.get(x as i64, y as i64).is_alive())
                .collect()
        })
        .collect()
}

fn random_grid(width: usize, height: usize, density: f64, seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    Grid::new(width, height, FillMode::Random, density, &mut rng).unwrap()
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn construction_rejects_non_positive_dimensions() {
    let mut rng = SmallRng::seed_from_u64(0);
    for (w, h) in [(0, 0), (0, 10), (10, 0)] {
        let result = Grid::new(w, h, FillMode::AllDead, 0.0, &mut rng);
        assert_eq!(
            result.unwrap_err(),
            GridError::InvalidDimensions {
                width: w,
                height: h
            }
        );
    }
}

// ---------------------------------------------------------------------------
// Neighbor counting
// ---------------------------------------------------------------------------

#[test]
fn neighbor_count_stays_in_range() {
    for seed in 0..20_u64 {
        let grid = random_grid(7, 9, 0.5, seed);
        for y in 0..9 {
            for x in 0..7 {
                assert!(grid.neighbor_count(x, y) <= 8);
            }
        }
    }
}

#[test]
fn origin_sees_diagonal_and_orthogonal_wraps() {
    let (w, h) = (10_i64, 8_i64);

    let mut diagonal = Grid::dead(10, 8).unwrap();
    diagonal.set(w - 1, h - 1, CellState::Alive);
    assert_eq!(diagonal.neighbor_count(0, 0), 1);

    let mut horizontal = Grid::dead(10, 8).unwrap();
    horizontal.set(w - 1, 0, CellState::Alive);
    assert_eq!(horizontal.neighbor_count(0, 0), 1);

    let mut vertical = Grid::dead(10, 8).unwrap();
    vertical.set(0, h - 1, CellState::Alive);
    assert_eq!(vertical.neighbor_count(0, 0), 1);
}

// ---------------------------------------------------------------------------
// Simultaneous update
// ---------------------------------------------------------------------------

#[test]
fn advance_matches_copy_before_mutate_reference() {
    for seed in 0..50_u64 {
        let mut grid = random_grid(10, 10, 0.35, seed);
        let mut board = to_board(&grid);

        for generation in 1..=5 {
            grid.advance();
            board = reference_step(&board);
            assert_eq!(
                to_board(&grid),
                board,
                "seed {seed} diverged at generation {generation}"
            );
        }
    }
}

#[test]
fn adjacent_updates_do_not_leak_into_each_other() {
    // Row-major in-place updating would kill (1,1) before (2,1) is
    // evaluated and lose the vertical phase of the blinker.
    let mut grid = Grid::from_rows(&[".....", ".....", ".###.", ".....", "....."]).unwrap();
    grid.advance();
    let expected = Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]).unwrap();
    assert_eq!(grid.cells(), expected.cells());
}

// ---------------------------------------------------------------------------
// Transition rule
// ---------------------------------------------------------------------------

/// Place a center cell with exactly `n` live neighbors on a 5x5 grid.
fn center_with_neighbors(alive: bool, n: usize) -> Grid {
    let ring = [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)];
    let mut grid = Grid::dead(5, 5).unwrap();
    grid.set(2, 2, CellState::from(alive));
    for &(x, y) in ring.iter().take(n) {
        grid.set(x, y, CellState::Alive);
    }
    assert_eq!(usize::from(grid.neighbor_count(2, 2)), n);
    grid
}

#[test]
fn live_cell_survival_rule() {
    for n in 0..=8 {
        let mut grid = center_with_neighbors(true, n);
        grid.advance();
        let expected = if n == 2 || n == 3 {
            CellState::Alive
        } else {
            CellState::Dead
        };
        assert_eq!(grid.get(2, 2), expected, "live cell with {n} neighbors");
    }
}

#[test]
fn dead_cell_birth_rule() {
    for n in 0..=8 {
        let mut grid = center_with_neighbors(false, n);
        grid.advance();
        let expected = if n == 3 {
            CellState::Alive
        } else {
            CellState::Dead
        };
        assert_eq!(grid.get(2, 2), expected, "dead cell with {n} neighbors");
    }
}

// ---------------------------------------------------------------------------
// Generation counter
// ---------------------------------------------------------------------------

#[test]
fn generation_counts_advances_only() {
    let mut grid = random_grid(6, 6, 0.4, 9);
    assert_eq!(grid.generation(), 0);
    for expected in 1..=10_u64 {
        grid.advance();
        let _ = grid.get(3, 3);
        grid.set(1, 1, CellState::Alive);
        grid.set(2, 2, CellState::Dead);
        assert_eq!(grid.generation(), expected);
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn block_is_a_still_life() {
    for size in 4..=8 {
        let mut grid = Grid::dead(size, size).unwrap();
        grid.place_pattern(&BLOCK, 1, 1);
        let before = grid.snapshot();
        grid.advance();
        assert_eq!(grid.cells(), before.cells.as_slice(), "{size}x{size}");
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut grid = Grid::dead(5, 5).unwrap();
    grid.place_pattern(&BLINKER, 1, 2);
    let horizontal = grid.snapshot();

    grid.advance();
    let vertical = [(2, 1), (2, 2), (2, 3)];
    assert_eq!(grid.live_cell_count(), 3);
    for (x, y) in vertical {
        assert_eq!(grid.get(x, y), CellState::Alive);
    }

    grid.advance();
    assert_eq!(grid.cells(), horizontal.cells.as_slice());
}

#[test]
fn empty_grid_stays_extinct() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut grid = Grid::new(12, 7, FillMode::AllDead, 0.9, &mut rng).unwrap();
    for _ in 0..25 {
        assert_eq!(grid.live_cell_count(), 0);
        grid.advance();
    }
    assert_eq!(grid.live_cell_count(), 0);
    assert_eq!(grid.generation(), 25);
}

#[test]
fn live_count_agrees_with_cell_reads() {
    for seed in 0..20_u64 {
        let mut grid = random_grid(9, 6, 0.45, seed);
        for _ in 0..3 {
            let mut counted = 0;
            for y in 0..6 {
                for x in 0..9 {
                    if grid.get(x, y) == CellState::Alive {
                        counted += 1;
                    }
                }
            }
            assert_eq!(grid.live_cell_count(), counted);
            grid.advance();
        }
    }
}
