use thiserror::Error;

/// All recoverable failures of the simulation core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// A write targeted a cell outside the current grid extent.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },
    /// Growing to follow the viewport would exceed the cell limit.
    #[error("viewport move would grow the grid past {max_cells} cells")]
    GridTooLarge { max_cells: usize },
    /// No built-in pattern has this name.
    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),
    /// Rows handed to `Grid::from_rows` differ in length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
