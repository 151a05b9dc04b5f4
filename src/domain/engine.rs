//! Generation advance for the bounded grid.
//!
//! Both strategies read the previous generation through `&Grid` only and
//! build a fresh cell vector, so no cell ever sees a half-updated neighbor.
//! Everything past the grid edge counts as dead.

use super::{Cell, Grid};
use rayon::prelude::*;

/// Moore neighborhood offsets
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Count live neighbors; off-grid positions read as dead
fn count_live_neighbors(grid: &Grid, x: isize, y: isize) -> u8 {
    NEIGHBORS
        .iter()
        .filter(|&&(dx, dy)| grid.get(x + dx, y + dy).is_alive())
        .count() as u8
}

fn next_cell(grid: &Grid, x: usize, y: usize) -> Cell {
    let (x, y) = (x as isize, y as isize);
    grid.get(x, y).evolve(count_live_neighbors(grid, x, y))
}

/// Pure functional evolution - returns new grid (serial)
pub fn advance(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    let cells = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| next_cell(grid, x, y))
        .collect();
    grid.with_cells(cells)
}

/// Parallel evolution using rayon.
/// Each worker owns whole rows of the output and only reads `grid`.
pub fn advance_parallel(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    if width == 0 || height == 0 {
        return grid.clone();
    }

    let mut cells = vec![Cell::Dead; width * height];
    cells
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = next_cell(grid, x, y);
            }
        });
    grid.with_cells(cells)
}
