//! Well-known Game of Life patterns.
//!
//! Each pattern is a list of live-cell offsets `(dx, dy)` from its top-left
//! corner. Stamp one onto a grid with [`Grid::place_pattern`].
//!
//! [`Grid::place_pattern`]: crate::Grid::place_pattern

/// A named set of live-cell offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    /// Catalog name, lowercase.
    pub name: &'static str,
    /// Live-cell offsets `(dx, dy)` from the pattern origin.
    pub cells: &'static [(i64, i64)],
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

/// 4x3 still life.
pub const BEEHIVE: Pattern = Pattern {
    name: "beehive",
    cells: &[(1, 0), (2, 0), (0, 1), (3, 1), (1, 2), (2, 2)],
};

/// Period-2 oscillator, horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

/// Period-2 oscillator.
pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

/// Period-2 oscillator made of two diagonal blocks.
pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[
        (0, 0),
        (1, 0),
        (0, 1),
        (1, 1),
        (2, 2),
        (3, 2),
        (2, 3),
        (3, 3),
    ],
};

/// Spaceship moving one cell down-right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Methuselah that stabilizes after 1103 generations on an unbounded plane.
pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

/// Every pattern in the catalog.
pub const PATTERNS: &[Pattern] = &[BLOCK, BEEHIVE, BLINKER, TOAD, BEACON, GLIDER, R_PENTOMINO];

impl Pattern {
    /// Look up a catalog pattern by name.
    ///
    /// Matching ignores case and any non-alphanumeric characters, so
    /// `"R-Pentomino"`, `"r_pentomino"` and `"r pentomino"` are equivalent.
    pub fn by_name(name: &str) -> Option<&'static Self> {
        let wanted = normalize(name);
        PATTERNS.iter().find(|pattern| normalize(pattern.name) == wanted)
    }

    /// Return the `(width, height)` of the pattern's bounding box.
    pub fn bounding_box(&self) -> (i64, i64) {
        let (max_x, max_y) = self
            .cells
            .iter()
            .fold((-1_i64, -1_i64), |(mx, my), &(x, y)| (mx.max(x), my.max(y)));
        (max_x.saturating_add(1), max_y.saturating_add(1))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
