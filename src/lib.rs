// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Simulation control and commands
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, LifeError, Pattern, patterns};
pub use application::{Camera, Command, Direction, Simulation, SimulationConfig, Speed};
