use super::{Cell, LifeError};
use rand::Rng;

/// Grid manages the 2D cell store of the automaton.
///
/// Coordinates are `(x, y)` with `x` the column in `[0, width)` and `y` the
/// row in `[0, height)`. Cells live in a flat row-major vector, so cell
/// `(x, y)` sits at index `y * width + x`.
///
/// The grid also tracks the viewport offset: the storage coordinate of the
/// cell shown at the viewport's top-left corner. Storage only ever grows.
/// Growing at the left or top edge bumps the offset by the same amount, so
/// whatever was on screen stays on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    x_offset: usize,
    y_offset: usize,
    cells: Vec<Cell>,
}

/// Largest number of cells viewport-driven growth may reach.
pub const MAX_CELLS: usize = 1 << 28;

/// Edges to grow and the offset to land on after a viewport move
struct Growth {
    left: usize,
    up: usize,
    right: usize,
    down: usize,
    x_offset: usize,
    y_offset: usize,
}

/// Apply `delta` to `offset`: returns how many columns or rows must be
/// prepended and the resulting offset. `None` if the offset overflows.
fn shifted(offset: usize, delta: isize) -> Option<(usize, usize)> {
    match offset.checked_add_signed(delta) {
        Some(next) => Some((0, next)),
        None if delta < 0 => Some((delta.unsigned_abs() - offset, 0)),
        None => None,
    }
}

/// Clamp a requested live fraction into a valid probability.
fn live_probability(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            x_offset: 0,
            y_offset: 0,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid where each cell is alive with probability `live_fraction`.
    /// A fraction of 0 gives an all-dead field.
    pub fn new(width: usize, height: usize, live_fraction: f64) -> Self {
        Self::with_rng(width, height, live_fraction, &mut rand::rng())
    }

    /// Same as [`Grid::new`] but seeded from the caller's RNG.
    pub fn with_rng<R: Rng>(
        width: usize,
        height: usize,
        live_fraction: f64,
        rng: &mut R,
    ) -> Self {
        let mut grid = Self::empty(width, height);
        grid.reseed(live_fraction, rng);
        grid
    }

    /// Rebuild a grid from rows of cells (inverse of [`Grid::to_rows`]).
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, LifeError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, cells_in_row) in rows.iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(LifeError::RaggedRows {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend_from_slice(cells_in_row);
        }

        Ok(Self {
            width,
            height: rows.len(),
            x_offset: 0,
            y_offset: 0,
            cells,
        })
    }

    /// Copy the cell state out as one `Vec` per row
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        if self.width == 0 {
            return vec![Vec::new(); self.height];
        }
        self.cells.chunks(self.width).map(<[Cell]>::to_vec).collect()
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Storage coordinate currently shown at the viewport's top-left
    pub const fn offset(&self) -> (usize, usize) {
        (self.x_offset, self.y_offset)
    }

    /// Convert 2D coordinates to 1D index, `None` when out of bounds
    fn index(&self, x: isize, y: isize) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Get cell at position. Anything off the grid reads as dead.
    pub fn get(&self, x: isize, y: isize) -> Cell {
        self.index(x, y).map_or(Cell::Dead, |idx| self.cells[idx])
    }

    /// Set cell at position. Writes beyond the current extent are rejected;
    /// grow the grid first to reach them.
    pub fn set(&mut self, x: isize, y: isize, cell: Cell) -> Result<(), LifeError> {
        let idx = self.index(x, y).ok_or(LifeError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Read a cell relative to the viewport origin
    pub fn get_visible(&self, vx: isize, vy: isize) -> Cell {
        let (x, y) = self.view_to_grid(vx, vy);
        self.get(x, y)
    }

    /// Map viewport-relative coordinates to storage coordinates
    pub fn view_to_grid(&self, vx: isize, vy: isize) -> (isize, isize) {
        (
            vx.saturating_add_unsigned(self.x_offset),
            vy.saturating_add_unsigned(self.y_offset),
        )
    }

    /// Insert `n` dead columns on the left edge.
    pub fn grow_left(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let new_width = self.width + n;
        let mut cells = Vec::with_capacity(new_width * self.height);
        for y in 0..self.height {
            cells.extend(std::iter::repeat_n(Cell::Dead, n));
            cells.extend_from_slice(self.row(y));
        }
        self.cells = cells;
        self.width = new_width;
        self.x_offset += n;
        log::debug!("grew {n} columns left, grid now {}x{}", self.width, self.height);
    }

    /// Insert `n` dead columns on the right edge.
    pub fn grow_right(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let new_width = self.width + n;
        let mut cells = Vec::with_capacity(new_width * self.height);
        for y in 0..self.height {
            cells.extend_from_slice(self.row(y));
            cells.extend(std::iter::repeat_n(Cell::Dead, n));
        }
        self.cells = cells;
        self.width = new_width;
        log::debug!("grew {n} columns right, grid now {}x{}", self.width, self.height);
    }

    /// Insert `n` dead rows on the top edge.
    pub fn grow_up(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.cells
            .splice(0..0, std::iter::repeat_n(Cell::Dead, n * self.width));
        self.height += n;
        self.y_offset += n;
        log::debug!("grew {n} rows up, grid now {}x{}", self.width, self.height);
    }

    /// Insert `n` dead rows on the bottom edge.
    pub fn grow_down(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.height += n;
        self.cells.resize(self.width * self.height, Cell::Dead);
        log::debug!("grew {n} rows down, grid now {}x{}", self.width, self.height);
    }

    /// Move the viewport origin by `(dx, dy)` cells.
    ///
    /// An origin that would go negative is absorbed by growing the left or
    /// top edge, which leaves the offset at exactly zero.
    pub fn shift_view(&mut self, dx: isize, dy: isize) -> Result<(), LifeError> {
        let growth = self.plan_growth((dx, dy), None)?;
        self.apply_growth(growth);
        Ok(())
    }

    /// Grow the right and bottom edges just enough to back a viewport of
    /// `view_width x view_height` cells at the current offset.
    pub fn cover_viewport(
        &mut self,
        view_width: usize,
        view_height: usize,
    ) -> Result<(), LifeError> {
        let growth = self.plan_growth((0, 0), Some((view_width, view_height)))?;
        self.apply_growth(growth);
        Ok(())
    }

    /// Shift the viewport, then cover it. Either both happen or, when the
    /// grid would outgrow [`MAX_CELLS`], neither does.
    pub fn move_viewport(
        &mut self,
        dx: isize,
        dy: isize,
        view_width: usize,
        view_height: usize,
    ) -> Result<(), LifeError> {
        let growth = self.plan_growth((dx, dy), Some((view_width, view_height)))?;
        self.apply_growth(growth);
        Ok(())
    }

    /// Work out every edge to grow before touching any storage.
    fn plan_growth(
        &self,
        shift: (isize, isize),
        view: Option<(usize, usize)>,
    ) -> Result<Growth, LifeError> {
        let too_large = LifeError::GridTooLarge { max_cells: MAX_CELLS };
        let (left, x_offset) = shifted(self.x_offset, shift.0).ok_or(too_large.clone())?;
        let (up, y_offset) = shifted(self.y_offset, shift.1).ok_or(too_large.clone())?;
        let width = self.width.checked_add(left).ok_or(too_large.clone())?;
        let height = self.height.checked_add(up).ok_or(too_large.clone())?;

        let (right, down) = match view {
            Some((view_width, view_height)) => {
                let far_x = x_offset.checked_add(view_width).ok_or(too_large.clone())?;
                let far_y = y_offset.checked_add(view_height).ok_or(too_large.clone())?;
                (far_x.saturating_sub(width), far_y.saturating_sub(height))
            }
            None => (0, 0),
        };

        let grows = [left, up, right, down].iter().any(|&n| n > 0);
        let cells = (width + right).checked_mul(height + down);
        if grows && !cells.is_some_and(|n| n <= MAX_CELLS) {
            return Err(too_large);
        }
        Ok(Growth { left, up, right, down, x_offset, y_offset })
    }

    fn apply_growth(&mut self, growth: Growth) {
        self.grow_left(growth.left);
        self.grow_up(growth.up);
        self.x_offset = growth.x_offset;
        self.y_offset = growth.y_offset;
        self.grow_right(growth.right);
        self.grow_down(growth.down);
    }

    /// Count live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Reroll every cell, keeping dimensions and offset
    pub fn reseed<R: Rng>(&mut self, live_fraction: f64, rng: &mut R) {
        let p = live_probability(live_fraction);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(p)));
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            (idx % self.width, idx / self.width, cell)
        })
    }

    /// Build a successor grid that shares this grid's shape and offset.
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), self.width * self.height);
        Self {
            width: self.width,
            height: self.height,
            x_offset: self.x_offset,
            y_offset: self.y_offset,
            cells,
        }
    }

    fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }
}
