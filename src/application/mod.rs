mod camera;
mod command;
mod config;
mod simulation;

pub use camera::Camera;
pub use command::{Command, Direction};
pub use config::{SimulationConfig, Speed};
pub use simulation::Simulation;
