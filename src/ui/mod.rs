mod button;

pub use button::Button;

use crate::application::{Command, Speed};
use crate::domain::{Algorithm, patterns};
use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
pub const BUTTON_GAP: f32 = 6.0;
pub const CELL_SIZE: f32 = 10.0;
/// Cells moved per pan key press
pub const PAN_STEP: usize = 4;
/// Live fraction used by the Random button
pub const RESEED_FRACTION: f64 = 0.3;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Panel entries in display order: simulation controls, speeds,
/// evolution algorithms, then one entry per pattern.
pub fn panel_entries() -> Vec<(&'static str, Command)> {
    let controls = [
        ("Play/Pause", Command::TogglePause),
        ("Clear", Command::Clear),
        ("Random", Command::Reseed(RESEED_FRACTION)),
    ];
    let speeds = Speed::all()
        .map(|speed| (speed.name(), Command::SetSpeed(speed.ticks_per_generation())));
    let algorithms = Algorithm::all()
        .map(|algorithm| (algorithm.name(), Command::SetAlgorithm(algorithm)));
    let figures = patterns::ALL
        .map(|pattern| (pattern.name, Command::ArmPattern(pattern.name.to_owned())));

    controls
        .into_iter()
        .chain(speeds)
        .chain(algorithms)
        .chain(figures)
        .collect()
}

/// Create the panel buttons, each bound to the command it issues
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    panel_entries()
        .into_iter()
        .enumerate()
        .map(|(idx, (label, command))| {
            let y = 20.0 + idx as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, label, command)
        })
        .collect()
}
