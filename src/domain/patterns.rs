use super::{Cell, Grid, LifeError};

/// A named figure that can be stamped onto the grid.
/// Offsets are relative to the anchor at (0, 0) and every listed cell is alive.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    /// Bounding box as `(min_dx, min_dy, width, height)`
    pub fn bounds(&self) -> (isize, isize, usize, usize) {
        let min_x = self.cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let max_x = self.cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
        let min_y = self.cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let max_y = self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
        (
            min_x,
            min_y,
            (max_x - min_x) as usize + 1,
            (max_y - min_y) as usize + 1,
        )
    }

    /// Place pattern on grid anchored at `(x, y)`.
    ///
    /// Cells that land outside the grid are skipped, so a stamp near an
    /// edge is partial rather than an error. Returns how many cells landed.
    pub fn stamp(&self, grid: &mut Grid, x: isize, y: isize) -> usize {
        let placed = self
            .cells
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(cx, cy)| grid.set(cx, cy, Cell::Alive).is_ok())
            .count();
        log::debug!(
            "stamped {} at ({x}, {y}): {placed}/{} cells",
            self.name,
            self.cells.len()
        );
        placed
    }
}

/// Block - simple still life
pub static BLOCK: Pattern = Pattern {
    name: "Block",
    description: "Still life",
    cells: &[
        (0, 0), (1, 0),
        (0, 1), (1, 1),
    ],
};

/// Glider - simplest spaceship, moves diagonally
pub static GLIDER: Pattern = Pattern {
    name: "Glider",
    description: "Moves diagonally (period 4)",
    cells: &[
        (1, 0),
        (2, 1),
        (0, 2), (1, 2), (2, 2),
    ],
};

/// Blinker - period 2 oscillator, starts vertical around the anchor
pub static BLINKER: Pattern = Pattern {
    name: "Blinker",
    description: "Oscillator (period 2)",
    cells: &[
        (0, -1),
        (0, 0),
        (0, 1),
    ],
};

/// Toad - period 2 oscillator
pub static TOAD: Pattern = Pattern {
    name: "Toad",
    description: "Oscillator (period 2)",
    cells: &[
        (1, 0), (2, 0), (3, 0),
        (0, 1), (1, 1), (2, 1),
    ],
};

/// Pulsar - period 3 oscillator
pub static PULSAR: Pattern = Pattern {
    name: "Pulsar",
    description: "Oscillator (period 3)",
    cells: &[
        // Top
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        // Upper middle
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        // Center
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        // Lower middle
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        // Bottom
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
};

/// All built-in patterns, in menu order
pub static ALL: [&Pattern; 5] = [&BLOCK, &GLIDER, &BLINKER, &TOAD, &PULSAR];

/// Look up a built-in pattern by name (case-insensitive)
pub fn find(name: &str) -> Result<&'static Pattern, LifeError> {
    let wanted = name.trim();
    ALL.iter()
        .copied()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_owned()))
}
