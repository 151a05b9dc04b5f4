mod cell;
mod error;
mod grid;
mod algorithm;
pub mod engine;
pub mod patterns;

pub use cell::Cell;
pub use error::LifeError;
pub use grid::{Grid, MAX_CELLS};
pub use algorithm::Algorithm;
pub use patterns::Pattern;
