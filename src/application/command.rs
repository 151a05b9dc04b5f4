use crate::domain::Algorithm;

/// Pan direction in grid space
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step as `(dx, dy)`
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Everything the input side can ask of a simulation.
/// Coordinates are grid storage coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Pan(Direction, usize),
    TogglePause,
    SetPaused(bool),
    SetSpeed(u32),
    ArmPattern(String),
    DisarmPattern,
    Paint(isize, isize),
    Erase(isize, isize),
    ResizeViewport(usize, usize),
    SetAlgorithm(Algorithm),
    Clear,
    Reseed(f64),
}
